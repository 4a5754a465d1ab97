use crate::codec::CodecError;
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable classification.
/// Every failure aborts the in-progress aggregation group; nothing retries.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without structured detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    /// Construct an error for an argument whose type could not be determined.
    pub(crate) fn unresolved_type(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::UnresolvedType, origin, message)
    }

    /// Construct a deserialize-origin corruption error.
    pub(crate) fn malformed_encoding(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::MalformedEncoding,
            ErrorOrigin::Deserialize,
            message,
        )
    }

    /// Construct an error for a call made outside a live aggregation group.
    pub(crate) fn context_violation(origin: ErrorOrigin) -> Self {
        Self::new(
            ErrorClass::ContextViolation,
            origin,
            format!("argm {origin} called in non-aggregate context"),
        )
    }

    /// Construct an argument-shape error.
    pub(crate) fn argument_mismatch(origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self::new(ErrorClass::ArgumentMismatch, origin, message)
    }

    /// Wrap a codec failure raised while decoding one slot.
    pub(crate) fn from_slot_decode(slot: usize, err: CodecError) -> Self {
        Self {
            class: ErrorClass::MalformedEncoding,
            origin: ErrorOrigin::Deserialize,
            message: format!("improper binary format in argm state slot {slot}: {err}"),
            detail: Some(ErrorDetail::Codec(err)),
        }
    }

    /// Wrap a codec failure raised while encoding one slot.
    pub(crate) fn from_slot_encode(slot: usize, err: CodecError) -> Self {
        Self {
            class: ErrorClass::Internal,
            origin: ErrorOrigin::Serialize,
            message: format!("could not encode argm state slot {slot}: {err}"),
            detail: Some(ErrorDetail::Codec(err)),
        }
    }

    #[must_use]
    pub const fn is_unresolved_type(&self) -> bool {
        matches!(self.class, ErrorClass::UnresolvedType)
    }

    #[must_use]
    pub const fn is_malformed_encoding(&self) -> bool {
        matches!(self.class, ErrorClass::MalformedEncoding)
    }

    #[must_use]
    pub const fn is_context_violation(&self) -> bool {
        matches!(self.class, ErrorClass::ContextViolation)
    }

    #[must_use]
    pub const fn is_argument_mismatch(&self) -> bool {
        matches!(self.class, ErrorClass::ArgumentMismatch)
    }
}

///
/// ErrorDetail
///
/// Structured error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Codec(CodecError),
}

///
/// ErrorClass
/// Error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    UnresolvedType,
    MalformedEncoding,
    ContextViolation,
    ArgumentMismatch,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UnresolvedType => "unresolved_type",
            Self::MalformedEncoding => "malformed_encoding",
            Self::ContextViolation => "context_violation",
            Self::ArgumentMismatch => "argument_mismatch",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Entry point that raised the error.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Context,
    Transition,
    Merge,
    Serialize,
    Deserialize,
    Finalize,
    AnyOld,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Context => "context",
            Self::Transition => "transition",
            Self::Merge => "merge",
            Self::Serialize => "serialize",
            Self::Deserialize => "deserialize",
            Self::Finalize => "finalize",
            Self::AnyOld => "anyold",
        };
        write!(f, "{label}")
    }
}
