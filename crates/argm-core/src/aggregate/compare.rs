use crate::{
    aggregate::{Direction, ValueSlot},
    catalog::Collation,
    value::{Value, compare::canonical_cmp},
};
use std::cmp::Ordering;

///
/// Preference
///
/// Outcome of comparing a resident slot ("old") against a candidate ("new").
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Preference {
    PreferOld,
    PreferNew,
    Tie,
}

impl Preference {
    #[must_use]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::PreferNew,
            Ordering::Less => Self::PreferOld,
            Ordering::Equal => Self::Tie,
        }
    }

    /// Signed form: `1` prefers new, `-1` prefers old, `0` ties.
    #[must_use]
    pub const fn signum(self) -> i32 {
        match self {
            Self::PreferNew => 1,
            Self::PreferOld => -1,
            Self::Tie => 0,
        }
    }
}

/// Compare one resident key slot against a candidate value.
///
/// `new` is `None` when the candidate is null. Nulls lose to any value in
/// both directions; two nulls tie. Otherwise the slot's comparator is run on
/// `(new, old)` and oriented by `direction`.
#[must_use]
pub fn compare_one_key(
    old: &ValueSlot,
    new: Option<&Value>,
    collation: Collation,
    direction: Direction,
) -> Preference {
    let new = new.filter(|value| !value.is_null());

    match (old.value(), new) {
        (None, None) => Preference::Tie,
        (Some(_), None) => Preference::PreferOld,
        (None, Some(_)) => Preference::PreferNew,
        (Some(old_value), Some(new_value)) => {
            let ordering = old.metadata().comparator.map_or_else(
                || canonical_cmp(new_value, old_value),
                |cmp| cmp.compare(new_value, old_value, collation),
            );

            Preference::from_ordering(direction.orient(ordering))
        }
    }
}

/// Lexicographic scan over key slots `1..`, stopping at the first non-tie.
///
/// `candidates` yields one value per key slot, slot 1 first. The payload
/// slot is never compared.
#[must_use]
pub fn compare_slot_keys<'v>(
    slots: &[ValueSlot],
    candidates: impl IntoIterator<Item = Option<&'v Value>>,
    collation: Collation,
    direction: Direction,
) -> Preference {
    slots
        .iter()
        .skip(1)
        .zip(candidates)
        .map(|(old, new)| compare_one_key(old, new, collation, direction))
        .find(|preference| *preference != Preference::Tie)
        .unwrap_or(Preference::Tie)
}
