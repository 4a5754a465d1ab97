use argm_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        Self::new(err.class.into(), err.origin.into(), err.message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for hosts.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// An argument type could not be determined when the group started.
    UnresolvedType,

    /// Serialized state bytes are corrupt or incompatible.
    MalformedEncoding,

    /// Called outside a live aggregation group; a host integration bug.
    ContextViolation,

    /// Argument count or types do not fit the state.
    ArgumentMismatch,

    /// The caller cannot remediate this.
    Internal,
}

impl From<ErrorClass> for ErrorKind {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::UnresolvedType => Self::UnresolvedType,
            ErrorClass::MalformedEncoding => Self::MalformedEncoding,
            ErrorClass::ContextViolation => Self::ContextViolation,
            ErrorClass::ArgumentMismatch => Self::ArgumentMismatch,
            ErrorClass::Internal => Self::Internal,
        }
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Context,
    Transition,
    Merge,
    Serialize,
    Deserialize,
    Finalize,
    AnyOld,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Context => Self::Context,
            CoreErrorOrigin::Transition => Self::Transition,
            CoreErrorOrigin::Merge => Self::Merge,
            CoreErrorOrigin::Serialize => Self::Serialize,
            CoreErrorOrigin::Deserialize => Self::Deserialize,
            CoreErrorOrigin::Finalize => Self::Finalize,
            CoreErrorOrigin::AnyOld => Self::AnyOld,
        }
    }
}
