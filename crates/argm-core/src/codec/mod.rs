//! Module: codec
//! Responsibility: per-type binary encode/decode of single values.
//! Does not own: state framing, lengths, or null markers (see
//! `aggregate::codec`).
//! Boundary: the state codec hands each non-null slot to a `TypeCodec`.

mod cbor;


use crate::{
    serialize::SerializeError,
    value::{Value, ValueTag},
};
use thiserror::Error as ThisError;

// re-exports
pub use cbor::CborTypeCodec;

///
/// CodecError
///

#[derive(Debug, ThisError)]
pub enum CodecError {
    #[error("no binary codec for type {tag}")]
    UnsupportedType { tag: ValueTag },

    #[error("decoded {found} where {expected} was recorded")]
    TagMismatch { expected: ValueTag, found: ValueTag },

    #[error("decoder consumed {consumed} of {declared} declared bytes")]
    LengthMismatch { declared: usize, consumed: usize },

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

///
/// Decoded
///
/// One decoded value and the number of input bytes the decoder used.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Decoded {
    pub value: Value,
    pub consumed: usize,
}

///
/// TypeCodec
///
/// Host-supplied binary codec for individual typed values.
/// `decode` must consume exactly the bytes `encode` produced.
///

pub trait TypeCodec {
    fn encode(&self, value: &Value, tag: ValueTag) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8], tag: ValueTag) -> Result<Decoded, CodecError>;
}
