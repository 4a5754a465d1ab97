use crate::{
    catalog::{Alignment, Comparator, ComparatorId, TypeInfo, TypeLen},
    context::GroupArena,
    value::{Value, ValueTag},
};

///
/// ValueMetadata
///
/// Per-slot type facts, fixed once the slot is created. Identical for a
/// given slot index across every state of one call signature.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValueMetadata {
    pub tag: ValueTag,
    pub len: TypeLen,
    pub by_value: bool,
    pub alignment: Alignment,

    /// Present for key slots only; the payload slot is never compared.
    pub comparator: Option<Comparator>,
}

impl ValueMetadata {
    #[must_use]
    pub const fn from_type_info(info: TypeInfo, comparator: Option<Comparator>) -> Self {
        Self {
            tag: info.tag,
            len: info.len,
            by_value: info.by_value,
            alignment: info.alignment,
            comparator,
        }
    }

    #[must_use]
    pub fn comparator_id(&self) -> ComparatorId {
        self.comparator.map_or(ComparatorId::NONE, |c| c.id)
    }
}

///
/// ValueSlot
///
/// One nullable, typed value plus its metadata. A non-null slot whose type
/// is not by-value owns its storage exclusively; superseding it releases
/// that storage in the group arena first.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueSlot {
    metadata: ValueMetadata,
    value: Option<Value>,
}

impl ValueSlot {
    #[must_use]
    pub(crate) const fn null(metadata: ValueMetadata) -> Self {
        Self {
            metadata,
            value: None,
        }
    }

    #[must_use]
    pub const fn metadata(&self) -> &ValueMetadata {
        &self.metadata
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }

    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Arena bytes this slot currently holds.
    #[must_use]
    pub fn owned_bytes(&self) -> usize {
        match &self.value {
            Some(value) if !self.metadata.by_value => value.owned_size(),
            _ => 0,
        }
    }

    /// Whether `incoming` may be stored here: null, or the slot's own type.
    #[must_use]
    pub fn accepts(&self, incoming: &Value) -> bool {
        incoming.is_null() || incoming.tag() == self.metadata.tag
    }

    /// Replace this slot's value with a materialized copy of `incoming`.
    ///
    /// Returns `false`, leaving the slot untouched, when `incoming` has the
    /// wrong type.
    pub(crate) fn assign(
        &mut self,
        arena: &GroupArena,
        incoming: &Value,
        release_previous: bool,
    ) -> bool {
        if !self.accepts(incoming) {
            return false;
        }

        let materialized = (!incoming.is_null()).then(|| incoming.clone());
        self.store(arena, materialized, release_previous);

        true
    }

    // Install an already-owned value (or null).
    pub(crate) fn store(
        &mut self,
        arena: &GroupArena,
        value: Option<Value>,
        release_previous: bool,
    ) {
        if release_previous && !self.metadata.by_value && !self.is_null() {
            arena.release(self.owned_bytes());
        }

        self.value = value;

        if !self.metadata.by_value && !self.is_null() {
            arena.reserve(self.owned_bytes());
        }
    }

    /// Deep copy whose owned storage is independent of `self`.
    #[must_use]
    pub(crate) fn clone_in(&self, arena: &GroupArena) -> Self {
        let mut slot = Self::null(self.metadata);
        slot.store(arena, self.value.clone(), false);

        slot
    }
}
