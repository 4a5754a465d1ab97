use crate::serialize::SerializeError;
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{Deserializer, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

pub(super) fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Decode one leading CBOR item and return the offset just past it.
pub(super) fn deserialize_prefix<T>(bytes: &[u8]) -> Result<(T, usize), SerializeError>
where
    T: DeserializeOwned,
{
    guard_decode(|| {
        let mut stream = Deserializer::from_slice(bytes).into_iter::<T>();
        match stream.next() {
            Some(Ok(value)) => Ok((value, stream.byte_offset())),
            Some(Err(err)) => Err(SerializeError::Deserialize(err.to_string())),
            None => Err(SerializeError::Deserialize("empty input".into())),
        }
    })
}

// No panic escapes a decode.
pub(super) fn guard_decode<T>(
    decode: impl FnOnce() -> Result<T, SerializeError>,
) -> Result<T, SerializeError> {
    catch_unwind(AssertUnwindSafe(decode)).unwrap_or_else(|_| {
        Err(SerializeError::Deserialize(
            "panic during CBOR deserialization".into(),
        ))
    })
}
