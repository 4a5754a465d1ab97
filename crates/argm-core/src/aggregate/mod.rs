//! Module: aggregate
//! Responsibility: the extremum-with-payload engine: slot ownership,
//! null-aware lexicographic comparison, transition, merge, state wire
//! codec, finalize, and the retain-first sibling aggregate.
//! Does not own: scheduling, type layout (catalog), or value bytes (codec).
//!
//! Slot 0 of every state is the payload; slots 1.. are sort keys compared
//! in index order. Nulls sort last in both directions.

mod any_old;
mod codec;
mod compare;
mod finalize;
mod function;
mod merge;
mod slot;
mod state;
mod transition;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

// re-exports
pub use any_old::{any_old_finalize, any_old_transition};
pub use codec::{deserialize_state, serialize_state};
pub use compare::{Preference, compare_one_key, compare_slot_keys};
pub use finalize::finalize;
pub use function::{ANYOLD, ARGMAX, ARGMIN, AnyOldFunction, ArgmFunction};
pub use merge::merge;
pub use slot::{ValueMetadata, ValueSlot};
pub use state::ArgmState;
pub use transition::transition;

///
/// Direction
///
/// Which extreme the aggregate keeps: `Max` prefers larger keys, `Min`
/// prefers smaller ones.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Max,
    Min,
}

impl Direction {
    /// Multiplier applied to a comparator result: `+1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Max => 1,
            Self::Min => -1,
        }
    }

    /// Orient a `new` vs `old` comparator result so `Greater` means "prefer new".
    #[must_use]
    pub const fn orient(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Max => ordering,
            Self::Min => ordering.reverse(),
        }
    }
}
