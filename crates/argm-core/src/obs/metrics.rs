use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for engine calls on this thread.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventOps {
    // Entry points
    pub transition_calls: u64,
    pub merge_calls: u64,
    pub serialize_calls: u64,
    pub deserialize_calls: u64,
    pub finalize_calls: u64,
    pub any_old_calls: u64,
    pub failed_calls: u64,

    // Transition outcomes
    pub states_initialized: u64,
    pub payload_replacements: u64,

    // Merge outcomes
    pub merge_kept_left: u64,
    pub merge_adopted_right: u64,
    pub merge_cloned_right: u64,
    pub merge_right_absent: u64,

    // Wire traffic
    pub bytes_serialized: u64,
    pub bytes_deserialized: u64,

    // Retain-first
    pub any_old_captured: u64,
}

///
/// EventReport
/// Point-in-time copy of the counters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EventReport {
    pub ops: EventOps,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport { ops: m.ops.clone() })
}

pub(crate) const fn bump(counter: &mut u64, by: u64) {
    *counter = counter.saturating_add(by);
}
