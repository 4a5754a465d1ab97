use crate::{
    codec::{CodecError, Decoded, TypeCodec},
    serialize::{deserialize_prefix, serialize},
    value::{Value, ValueTag},
};

///
/// CborTypeCodec
///
/// Builtin codec: each value is one self-describing CBOR item. Decoding
/// reads a single item and reports where it ended, so trailing garbage
/// inside a declared slot length is visible to the caller.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct CborTypeCodec;

impl TypeCodec for CborTypeCodec {
    fn encode(&self, value: &Value, tag: ValueTag) -> Result<Vec<u8>, CodecError> {
        if tag == ValueTag::Null {
            return Err(CodecError::UnsupportedType { tag });
        }
        if value.tag() != tag {
            return Err(CodecError::TagMismatch {
                expected: tag,
                found: value.tag(),
            });
        }

        Ok(serialize(value)?)
    }

    fn decode(&self, bytes: &[u8], tag: ValueTag) -> Result<Decoded, CodecError> {
        if tag == ValueTag::Null {
            return Err(CodecError::UnsupportedType { tag });
        }

        let (value, consumed) = deserialize_prefix::<Value>(bytes)?;
        if value.tag() != tag {
            return Err(CodecError::TagMismatch {
                expected: tag,
                found: value.tag(),
            });
        }

        Ok(Decoded { value, consumed })
    }
}
