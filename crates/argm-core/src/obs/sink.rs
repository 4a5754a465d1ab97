//! Metrics sink boundary.
//!
//! Engine logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, bump};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// OpKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpKind {
    Transition,
    Merge,
    Serialize,
    Deserialize,
    Finalize,
    AnyOld,
}

///
/// MergeOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeOutcome {
    /// Right side absent; left returned unchanged.
    RightAbsent,
    /// Left side absent; right cloned into a fresh state.
    ClonedRight,
    /// Left kept its resident record.
    KeptLeft,
    /// Right's record replaced left's.
    AdoptedRight,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    CallStart { op: OpKind },
    CallFinish { op: OpKind, failed: bool },
    StateInitialized { slots: u64 },
    PayloadReplaced,
    Merge { outcome: MergeOutcome },
    Serialized { bytes: u64 },
    Deserialized { bytes: u64 },
    AnyOldCaptured,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the global counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        metrics::with_state_mut(|m| {
            let ops = &mut m.ops;
            match event {
                MetricsEvent::CallStart { op } => match op {
                    OpKind::Transition => bump(&mut ops.transition_calls, 1),
                    OpKind::Merge => bump(&mut ops.merge_calls, 1),
                    OpKind::Serialize => bump(&mut ops.serialize_calls, 1),
                    OpKind::Deserialize => bump(&mut ops.deserialize_calls, 1),
                    OpKind::Finalize => bump(&mut ops.finalize_calls, 1),
                    OpKind::AnyOld => bump(&mut ops.any_old_calls, 1),
                },
                MetricsEvent::CallFinish { failed, .. } => {
                    if failed {
                        bump(&mut ops.failed_calls, 1);
                    }
                }
                MetricsEvent::StateInitialized { .. } => bump(&mut ops.states_initialized, 1),
                MetricsEvent::PayloadReplaced => bump(&mut ops.payload_replacements, 1),
                MetricsEvent::Merge { outcome } => match outcome {
                    MergeOutcome::RightAbsent => bump(&mut ops.merge_right_absent, 1),
                    MergeOutcome::ClonedRight => bump(&mut ops.merge_cloned_right, 1),
                    MergeOutcome::KeptLeft => bump(&mut ops.merge_kept_left, 1),
                    MergeOutcome::AdoptedRight => bump(&mut ops.merge_adopted_right, 1),
                },
                MetricsEvent::Serialized { bytes } => bump(&mut ops.bytes_serialized, bytes),
                MetricsEvent::Deserialized { bytes } => bump(&mut ops.bytes_deserialized, bytes),
                MetricsEvent::AnyOldCaptured => bump(&mut ops.any_old_captured, 1),
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all counters on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwind.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}

/// CallSpan
/// RAII guard that emits start/finish events for one engine call.
/// Finish accounting happens even on early return or unwind.

pub(crate) struct CallSpan {
    op: OpKind,
    failed: bool,
}

impl CallSpan {
    #[must_use]
    pub(crate) fn new(op: OpKind) -> Self {
        record(MetricsEvent::CallStart { op });

        Self { op, failed: true }
    }

    /// Mark the call as completed; spans dropped without this count as failed.
    pub(crate) const fn succeed(&mut self) {
        self.failed = false;
    }

    /// Finish the span with the call's result and pass it through.
    pub(crate) fn finish<T, E>(mut self, result: Result<T, E>) -> Result<T, E> {
        if result.is_ok() {
            self.succeed();
        }

        result
    }
}

impl Drop for CallSpan {
    fn drop(&mut self) {
        record(MetricsEvent::CallFinish {
            op: self.op,
            failed: self.failed,
        });
    }
}

///
/// TESTS
///
