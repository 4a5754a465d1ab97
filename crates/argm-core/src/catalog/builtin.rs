use crate::{
    catalog::{Alignment, Collation, Comparator, ComparatorId, TypeCatalog, TypeInfo, TypeLen},
    value::{
        Value, ValueTag,
        compare::{canonical_cmp, strict_order_cmp},
    },
};
use std::cmp::Ordering;

///
/// BuiltinCatalog
///
/// Catalog covering every slot type of [`Value`]. Comparator ids equal the
/// type's tag byte, so a state encoded by one process resolves in another.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    const fn comparator_id(tag: ValueTag) -> ComparatorId {
        ComparatorId(tag.to_u8() as u16)
    }

    fn comparator_fn(tag: ValueTag) -> Option<Comparator> {
        let cmp: fn(&Value, &Value, Collation) -> Ordering = match tag {
            ValueTag::Text => compare_text,
            ValueTag::Null => return None,
            _ => compare_ordered,
        };

        Some(Comparator {
            id: Self::comparator_id(tag),
            cmp,
        })
    }
}

impl TypeCatalog for BuiltinCatalog {
    fn type_info(&self, tag: ValueTag) -> Option<TypeInfo> {
        let (len, by_value, alignment) = match tag {
            ValueTag::Blob | ValueTag::Text => (TypeLen::Variable, false, Alignment::Int),
            ValueTag::Bool => (TypeLen::Fixed(1), true, Alignment::Char),
            ValueTag::Float64 | ValueTag::Int | ValueTag::Uint => {
                (TypeLen::Fixed(8), true, Alignment::Double)
            }
            ValueTag::Int128 => (TypeLen::Fixed(16), false, Alignment::Double),
            ValueTag::Null => return None,
        };

        Some(TypeInfo {
            tag,
            len,
            by_value,
            alignment,
        })
    }

    fn comparator(&self, tag: ValueTag) -> Option<Comparator> {
        Self::comparator_fn(tag)
    }

    fn resolve_comparator(&self, id: ComparatorId) -> Option<Comparator> {
        let byte = u8::try_from(id.0).ok()?;
        let tag = ValueTag::try_from_u8(byte)?;

        Self::comparator_fn(tag)
    }
}

// Same-variant natural order; anything else falls back to canonical rank.
fn compare_ordered(left: &Value, right: &Value, _collation: Collation) -> Ordering {
    strict_order_cmp(left, right).unwrap_or_else(|| canonical_cmp(left, right))
}

fn compare_text(left: &Value, right: &Value, collation: Collation) -> Ordering {
    match (left, right, collation) {
        (Value::Text(a), Value::Text(b), Collation::CaseInsensitive) => {
            let a = a.chars().flat_map(char::to_lowercase);
            let b = b.chars().flat_map(char::to_lowercase);

            a.cmp(b)
        }
        _ => compare_ordered(left, right, collation),
    }
}
