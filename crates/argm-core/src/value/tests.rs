use crate::value::{
    Value, ValueTag,
    compare::{canonical_cmp, strict_order_cmp},
};
use std::cmp::Ordering;

// ---- helpers -----------------------------------------------------------

fn v_txt(s: &str) -> Value {
    Value::Text(s.to_string())
}

fn sample_for_tag(tag: ValueTag) -> Value {
    match tag {
        ValueTag::Blob => Value::Blob(vec![1, 2, 3]),
        ValueTag::Bool => Value::Bool(true),
        ValueTag::Float64 => Value::float64(2.5),
        ValueTag::Int => Value::Int(-7),
        ValueTag::Int128 => Value::Int128(1 << 100),
        ValueTag::Null => Value::Null,
        ValueTag::Text => v_txt("example"),
        ValueTag::Uint => Value::Uint(7),
    }
}

// ---- tags --------------------------------------------------------------

#[test]
fn tag_bytes_round_trip_for_every_variant() {
    for tag in ValueTag::SLOT_TYPES.into_iter().chain([ValueTag::Null]) {
        assert_eq!(ValueTag::try_from_u8(tag.to_u8()), Some(tag));
        assert_eq!(sample_for_tag(tag).tag(), tag);
    }
}

#[test]
fn unknown_tag_bytes_are_rejected() {
    assert_eq!(ValueTag::try_from_u8(0), None);
    assert_eq!(ValueTag::try_from_u8(9), None);
    assert_eq!(ValueTag::try_from_u8(u8::MAX), None);
}

#[test]
fn slot_types_exclude_null() {
    assert!(!ValueTag::SLOT_TYPES.contains(&ValueTag::Null));
}

// ---- ordering ----------------------------------------------------------

#[test]
fn strict_order_compares_same_variants() {
    assert_eq!(
        strict_order_cmp(&Value::Int(3), &Value::Int(7)),
        Some(Ordering::Less)
    );
    assert_eq!(
        strict_order_cmp(&v_txt("b"), &v_txt("a")),
        Some(Ordering::Greater)
    );
    assert_eq!(
        strict_order_cmp(&Value::Int128(-1), &Value::Int128(-1)),
        Some(Ordering::Equal)
    );
}

#[test]
fn strict_order_rejects_mixed_variants_and_null() {
    assert_eq!(strict_order_cmp(&Value::Int(1), &Value::Uint(1)), None);
    assert_eq!(strict_order_cmp(&Value::Null, &Value::Null), None);
}

#[test]
fn canonical_order_ranks_by_tag_first() {
    assert_eq!(
        canonical_cmp(&Value::Blob(vec![0xFF]), &Value::Bool(false)),
        Ordering::Less
    );
    assert_eq!(canonical_cmp(&Value::Null, &Value::Null), Ordering::Equal);
}

// ---- ownership ---------------------------------------------------------

#[test]
fn owned_size_counts_only_out_of_line_storage() {
    assert_eq!(v_txt("abcd").owned_size(), 4);
    assert_eq!(Value::Blob(vec![0; 9]).owned_size(), 9);
    assert_eq!(Value::Int128(5).owned_size(), 16);
    assert_eq!(Value::Int(5).owned_size(), 0);
    assert_eq!(Value::Null.owned_size(), 0);
}

#[test]
fn option_conversion_maps_none_to_null() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), v_txt("x"));
}

#[test]
fn non_finite_float_becomes_null() {
    assert_eq!(Value::float64(f64::NAN), Value::Null);
    assert_eq!(Value::float64(1.0).tag(), ValueTag::Float64);
}
