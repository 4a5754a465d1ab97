//! Module: serialize
//! Responsibility: CBOR encoding of single values for the builtin type codec.
//! Does not own: state framing (see `aggregate::codec`) or size policy
//! (see `AggConfig::max_state_bytes`).

mod cbor;


use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("deserialize error: {0}")]
    Deserialize(String),
}

/// Serialize a value as one CBOR item.
pub fn serialize<T>(ty: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    cbor::serialize(ty)
}

/// Deserialize the first CBOR item in `bytes` and report how many bytes it
/// occupied. Bytes after the item are left unread.
pub fn deserialize_prefix<T>(bytes: &[u8]) -> Result<(T, usize), SerializeError>
where
    T: DeserializeOwned,
{
    cbor::deserialize_prefix(bytes)
}
