//! Module: aggregate::codec
//! Responsibility: binary framing of a whole `ArgmState`.
//! Does not own: per-value bytes (delegated to the context's `TypeCodec`).
//! Boundary: the only place states cross process boundaries.
//!
//! Layout (big-endian):
//! - `slot_count: u16`
//! - per slot: 8-byte metadata record, `length: i32` (`-1` = null), then
//!   `length` bytes from the type codec.

mod bounds;
mod error;
mod metadata;

use crate::{
    aggregate::{ArgmState, ValueSlot},
    codec::CodecError,
    context::AggContext,
    error::{ErrorOrigin, InternalError},
    obs::sink::{CallSpan, MetricsEvent, OpKind, record},
};
use bounds::{LENGTH_SIZE, METADATA_RECORD_SIZE, NULL_LENGTH, SLOT_COUNT_SIZE};
use error::{
    ERR_EMPTY_STATE, ERR_INSUFFICIENT_DATA, ERR_INVALID_LENGTH, ERR_TRAILING_BYTES,
    ERR_TRUNCATED_LENGTH, ERR_TRUNCATED_METADATA, ERR_TRUNCATED_SLOT_COUNT,
};
use metadata::{push_metadata, read_metadata};

/// Encode a state for transfer to another process.
pub fn serialize_state(ctx: &AggContext<'_>, state: &ArgmState) -> Result<Vec<u8>, InternalError> {
    let span = CallSpan::new(OpKind::Serialize);
    span.finish(encode_state(ctx, state))
}

/// Rebuild a state from bytes produced by [`serialize_state`].
///
/// Every decoded value is owned by the returned state; the input buffer is
/// only borrowed and never modified.
pub fn deserialize_state(ctx: &AggContext<'_>, bytes: &[u8]) -> Result<ArgmState, InternalError> {
    let span = CallSpan::new(OpKind::Deserialize);
    span.finish(decode_state(ctx, bytes))
}

fn encode_state(ctx: &AggContext<'_>, state: &ArgmState) -> Result<Vec<u8>, InternalError> {
    ctx.ensure_active(ErrorOrigin::Serialize)?;

    let slot_count = u16::try_from(state.slot_count()).map_err(|_| {
        InternalError::argument_mismatch(
            ErrorOrigin::Serialize,
            format!("state with {} slots exceeds the wire slot count", state.slot_count()),
        )
    })?;

    let mut bytes = Vec::with_capacity(
        SLOT_COUNT_SIZE + state.slot_count() * (METADATA_RECORD_SIZE + LENGTH_SIZE),
    );
    bytes.extend_from_slice(&slot_count.to_be_bytes());

    for (index, slot) in state.slots().iter().enumerate() {
        push_metadata(&mut bytes, slot.metadata());

        let Some(value) = slot.value() else {
            bytes.extend_from_slice(&NULL_LENGTH.to_be_bytes());
            continue;
        };

        let encoded = ctx
            .codec()
            .encode(value, slot.metadata().tag)
            .map_err(|err| InternalError::from_slot_encode(index, err))?;
        let len = i32::try_from(encoded.len()).map_err(|_| {
            InternalError::argument_mismatch(
                ErrorOrigin::Serialize,
                format!("slot {index} encodes to {} bytes, over the wire limit", encoded.len()),
            )
        })?;

        bytes.extend_from_slice(&len.to_be_bytes());
        bytes.extend_from_slice(&encoded);
    }

    record(MetricsEvent::Serialized {
        bytes: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
    });
    ctx.debug_log(format!(
        "argm serialize: {} slots into {} bytes",
        state.slot_count(),
        bytes.len()
    ));

    Ok(bytes)
}

fn decode_state(ctx: &AggContext<'_>, bytes: &[u8]) -> Result<ArgmState, InternalError> {
    ctx.ensure_active(ErrorOrigin::Deserialize)?;

    let max_bytes = ctx.config().max_state_bytes;
    if bytes.len() > max_bytes {
        return Err(InternalError::malformed_encoding(format!(
            "argm state of {} bytes exceeds limit of {max_bytes}",
            bytes.len()
        )));
    }

    // Phase 1: slot count.
    let mut offset = 0;
    let slot_count = u16::from_be_bytes(
        read_array(bytes, &mut offset, ERR_TRUNCATED_SLOT_COUNT)
            .map_err(InternalError::malformed_encoding)?,
    );
    if slot_count == 0 {
        return Err(InternalError::malformed_encoding(ERR_EMPTY_STATE));
    }

    // Phase 2: metadata + length-prefixed values, one slot at a time.
    let arena = ctx.arena();
    let mut slots = Vec::with_capacity(slot_capacity(slot_count, bytes.len() - offset));
    for index in 0..usize::from(slot_count) {
        let record = read_array(bytes, &mut offset, ERR_TRUNCATED_METADATA)
            .map_err(InternalError::malformed_encoding)?;
        let metadata = read_metadata(record, index > 0, ctx.catalog())
            .map_err(|reason| InternalError::malformed_encoding(format!("{reason} (slot {index})")))?;

        let len = i32::from_be_bytes(
            read_array(bytes, &mut offset, ERR_TRUNCATED_LENGTH)
                .map_err(InternalError::malformed_encoding)?,
        );
        if len == NULL_LENGTH {
            slots.push(ValueSlot::null(metadata));
            continue;
        }

        let len = usize::try_from(len)
            .map_err(|_| InternalError::malformed_encoding(ERR_INVALID_LENGTH))?;
        let item = read_slice(bytes, &mut offset, len).map_err(InternalError::malformed_encoding)?;

        let decoded = ctx
            .codec()
            .decode(item, metadata.tag)
            .map_err(|err| InternalError::from_slot_decode(index, err))?;
        if decoded.consumed != len {
            return Err(InternalError::from_slot_decode(
                index,
                CodecError::LengthMismatch {
                    declared: len,
                    consumed: decoded.consumed,
                },
            ));
        }
        if decoded.value.tag() != metadata.tag {
            return Err(InternalError::from_slot_decode(
                index,
                CodecError::TagMismatch {
                    expected: metadata.tag,
                    found: decoded.value.tag(),
                },
            ));
        }

        let mut slot = ValueSlot::null(metadata);
        slot.store(arena, Some(decoded.value), false);
        slots.push(slot);
    }

    if offset != bytes.len() {
        return Err(InternalError::malformed_encoding(ERR_TRAILING_BYTES));
    }

    record(MetricsEvent::Deserialized {
        bytes: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
    });
    ctx.debug_log(format!(
        "argm deserialize: {slot_count} slots from {} bytes",
        bytes.len()
    ));

    Ok(ArgmState::from_slots(slots))
}

// Upper bound on slots `remaining` bytes can hold: each needs at least a
// metadata record and a length field.
pub(super) fn slot_capacity(slot_count: u16, remaining: usize) -> usize {
    let fits = remaining / (METADATA_RECORD_SIZE + LENGTH_SIZE);

    usize::from(slot_count).min(fits)
}

fn read_array<const N: usize>(
    bytes: &[u8],
    offset: &mut usize,
    truncated: &'static str,
) -> Result<[u8; N], &'static str> {
    let end = offset.checked_add(N).ok_or(truncated)?;
    let out: [u8; N] = bytes
        .get(*offset..end)
        .and_then(|window| window.try_into().ok())
        .ok_or(truncated)?;
    *offset = end;

    Ok(out)
}

fn read_slice<'a>(
    bytes: &'a [u8],
    offset: &mut usize,
    len: usize,
) -> Result<&'a [u8], &'static str> {
    if len > bytes.len().saturating_sub(*offset) {
        return Err(ERR_INSUFFICIENT_DATA);
    }

    let end = *offset + len;
    let out = &bytes[*offset..end];
    *offset = end;

    Ok(out)
}
