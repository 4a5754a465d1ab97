//! Module: aggregate::codec::bounds
//! Responsibility: byte-size constants for argm state framing.

pub(super) const SLOT_COUNT_SIZE: usize = 2;
pub(super) const LENGTH_SIZE: usize = 4;

/// `type_id: u16, byte_size: i16, by_value: u8, alignment: u8, comparator_id: u16`
pub(super) const METADATA_RECORD_SIZE: usize = 8;

/// Length sentinel marking a null slot.
pub(super) const NULL_LENGTH: i32 = -1;
