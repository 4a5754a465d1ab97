pub mod compare;
mod tag;

#[cfg(test)]
mod tests;

use crate::types::Float64;
use serde::{Deserialize, Serialize};

// re-exports
pub use tag::ValueTag;

///
/// Value
///
/// One typed argument or stored slot value.
///
/// Null  → SQL NULL; a slot holding it is "null", never typed as Null.
/// Blob and Text own heap storage; the rest are inline.
///

#[remain::sorted]
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Value {
    Blob(#[serde(with = "serde_bytes")] Vec<u8>),
    Bool(bool),
    Float64(Float64),
    Int(i64),
    Int128(#[serde(with = "int128_bytes")] i128),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Stable type identifier of this variant.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::canonical_tag(self)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Bytes of storage this value owns outside its inline representation.
    ///
    /// Fixed-size non-inline types report their fixed width; inline types
    /// report zero.
    #[must_use]
    pub fn owned_size(&self) -> usize {
        match self {
            Self::Blob(bytes) => bytes.len(),
            Self::Text(text) => text.len(),
            Self::Int128(_) => size_of::<i128>(),
            Self::Bool(_) | Self::Float64(_) | Self::Int(_) | Self::Null | Self::Uint(_) => 0,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Build a `Float64` value; non-finite input becomes `Null`.
    #[must_use]
    pub fn float64(v: f64) -> Self {
        Float64::try_new(v).map_or(Self::Null, Self::Float64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i128> for Value {
    fn from(v: i128) -> Self {
        Self::Int128(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<Float64> for Value {
    fn from(v: Float64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Self::Blob(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

// CBOR integers stop at 64 bits, so i128 travels as a 16-byte string.
mod int128_bytes {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use serde_bytes::ByteBuf;

    pub(super) fn serialize<S>(value: &i128, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&value.to_be_bytes())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<i128, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = ByteBuf::deserialize(deserializer)?;
        let buf: [u8; 16] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| D::Error::invalid_length(bytes.len(), &"16 bytes"))?;

        Ok(i128::from_be_bytes(buf))
    }
}
