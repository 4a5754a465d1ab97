//! Observability: runtime telemetry (metrics) and sink abstractions.
//!
//! Engine code never touches counters directly; every instrumentation
//! point emits a `MetricsEvent` through `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{
    MergeOutcome, MetricsEvent, MetricsSink, OpKind, metrics_report, metrics_reset_all,
    with_metrics_sink,
};
