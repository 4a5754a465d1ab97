//! Module: aggregate::codec::error
//! Responsibility: stable corruption reason strings for argm state decode.

pub(super) const ERR_TRUNCATED_SLOT_COUNT: &str = "corrupted argm state: truncated slot count";
pub(super) const ERR_EMPTY_STATE: &str = "corrupted argm state: zero slots";
pub(super) const ERR_TRUNCATED_METADATA: &str = "corrupted argm state: truncated metadata record";
pub(super) const ERR_UNKNOWN_TYPE: &str = "corrupted argm state: unknown type id";
pub(super) const ERR_INVALID_TYPE_LEN: &str = "corrupted argm state: invalid byte size";
pub(super) const ERR_INVALID_BY_VALUE: &str = "corrupted argm state: invalid by-value flag";
pub(super) const ERR_INVALID_ALIGNMENT: &str = "corrupted argm state: invalid alignment";
pub(super) const ERR_LAYOUT_MISMATCH: &str =
    "corrupted argm state: layout disagrees with type catalog";
pub(super) const ERR_UNKNOWN_COMPARATOR: &str = "corrupted argm state: unknown comparator id";
pub(super) const ERR_MISSING_KEY_COMPARATOR: &str = "corrupted argm state: key slot without comparator";
pub(super) const ERR_TRUNCATED_LENGTH: &str = "corrupted argm state: truncated slot length";
pub(super) const ERR_INVALID_LENGTH: &str = "corrupted argm state: invalid slot length";
pub(super) const ERR_INSUFFICIENT_DATA: &str = "insufficient data left in message";
pub(super) const ERR_TRAILING_BYTES: &str = "corrupted argm state: trailing bytes";
