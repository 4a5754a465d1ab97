use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator.
///
/// Ordering rules:
/// 1. Variant tag
/// 2. Variant-specific comparison for same-tagged values
///
/// Mixed-variant comparisons are tag-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.tag().cmp(&right.tag());
    if rank != Ordering::Equal {
        return rank;
    }

    strict_order_cmp(left, right).unwrap_or(Ordering::Equal)
}

/// Strict comparator for identical variants.
///
/// Returns `None` for mismatched variants and for `Null`.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Blob(a), Value::Blob(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Float64(a), Value::Float64(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int128(a), Value::Int128(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
