use crate::{
    aggregate::{ValueMetadata, ValueSlot},
    context::GroupArena,
    value::Value,
};

///
/// ArgmState
///
/// Ordered slots of one aggregation group: slot 0 is the payload, slots
/// 1.. are sort keys (slot 1 most significant). The slot count and each
/// slot's metadata never change for the lifetime of a state.
///

#[derive(Debug, Eq, PartialEq)]
pub struct ArgmState {
    slots: Vec<ValueSlot>,
}

impl ArgmState {
    /// Build an all-null state from per-slot metadata.
    #[must_use]
    pub(crate) fn with_metadata(metadata: impl IntoIterator<Item = ValueMetadata>) -> Self {
        Self {
            slots: metadata.into_iter().map(ValueSlot::null).collect(),
        }
    }

    pub(crate) const fn from_slots(slots: Vec<ValueSlot>) -> Self {
        Self { slots }
    }

    #[must_use]
    pub const fn slot_count(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slots(&self) -> &[ValueSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ValueSlot> {
        self.slots.get(index)
    }

    /// Payload value, or `None` when the payload slot is null.
    #[must_use]
    pub fn payload(&self) -> Option<&Value> {
        self.slots.first().and_then(ValueSlot::value)
    }

    /// Key slots, most significant first.
    #[must_use]
    pub fn keys(&self) -> &[ValueSlot] {
        self.slots.get(1..).unwrap_or_default()
    }

    /// Arena bytes held by all slots.
    #[must_use]
    pub fn owned_bytes(&self) -> usize {
        self.slots.iter().map(ValueSlot::owned_bytes).sum()
    }

    /// Same slot count and slot types as `other`.
    #[must_use]
    pub fn same_layout(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|(a, b)| a.metadata().tag == b.metadata().tag)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [ValueSlot] {
        &mut self.slots
    }

    /// Deep clone into independently owned storage.
    #[must_use]
    pub(crate) fn clone_in(&self, arena: &GroupArena) -> Self {
        Self {
            slots: self.slots.iter().map(|slot| slot.clone_in(arena)).collect(),
        }
    }

    /// Adopt every slot of `src`, releasing this state's owned values first.
    pub(crate) fn copy_from(&mut self, arena: &GroupArena, src: &Self) {
        for (dst, src) in self.slots.iter_mut().zip(&src.slots) {
            dst.store(arena, src.value().cloned(), true);
        }
    }
}
