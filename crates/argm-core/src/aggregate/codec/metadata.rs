//! Module: aggregate::codec::metadata
//! Responsibility: the fixed 8-byte per-slot metadata record.

use crate::{
    aggregate::{
        ValueMetadata,
        codec::{
            bounds::METADATA_RECORD_SIZE,
            error::{
                ERR_INVALID_ALIGNMENT, ERR_INVALID_BY_VALUE, ERR_INVALID_TYPE_LEN,
                ERR_LAYOUT_MISMATCH, ERR_MISSING_KEY_COMPARATOR, ERR_UNKNOWN_COMPARATOR, ERR_UNKNOWN_TYPE,
            },
        },
    },
    catalog::{Alignment, ComparatorId, TypeCatalog, TypeLen},
    value::ValueTag,
};

pub(super) fn push_metadata(bytes: &mut Vec<u8>, metadata: &ValueMetadata) {
    bytes.extend_from_slice(&u16::from(metadata.tag.to_u8()).to_be_bytes());
    bytes.extend_from_slice(&metadata.len.to_wire().to_be_bytes());
    bytes.push(u8::from(metadata.by_value));
    bytes.push(metadata.alignment.to_u8());
    bytes.extend_from_slice(&metadata.comparator_id().0.to_be_bytes());
}

pub(super) fn read_metadata(
    record: [u8; METADATA_RECORD_SIZE],
    is_key: bool,
    catalog: &dyn TypeCatalog,
) -> Result<ValueMetadata, &'static str> {
    let tag = u8::try_from(u16::from_be_bytes([record[0], record[1]]))
        .ok()
        .and_then(ValueTag::try_from_u8)
        .filter(|tag| *tag != ValueTag::Null)
        .ok_or(ERR_UNKNOWN_TYPE)?;
    let len = TypeLen::from_wire(i16::from_be_bytes([record[2], record[3]]))
        .ok_or(ERR_INVALID_TYPE_LEN)?;
    let by_value = match record[4] {
        0 => false,
        1 => true,
        _ => return Err(ERR_INVALID_BY_VALUE),
    };
    let alignment = Alignment::try_from_u8(record[5]).ok_or(ERR_INVALID_ALIGNMENT)?;

    // The recorded layout must be the one this process uses for the type.
    let info = catalog.type_info(tag).ok_or(ERR_UNKNOWN_TYPE)?;
    if (info.len, info.by_value, info.alignment) != (len, by_value, alignment) {
        return Err(ERR_LAYOUT_MISMATCH);
    }

    let comparator_id = ComparatorId(u16::from_be_bytes([record[6], record[7]]));
    let comparator = if comparator_id.is_none() {
        if is_key {
            return Err(ERR_MISSING_KEY_COMPARATOR);
        }
        None
    } else {
        Some(
            catalog
                .resolve_comparator(comparator_id)
                .ok_or(ERR_UNKNOWN_COMPARATOR)?,
        )
    };

    Ok(ValueMetadata {
        tag,
        len,
        by_value,
        alignment,
        comparator,
    })
}
