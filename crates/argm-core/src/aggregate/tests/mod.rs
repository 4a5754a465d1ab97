mod transition;

use crate::{
    aggregate::{self, ArgmState, Direction},
    catalog::BuiltinCatalog,
    codec::CborTypeCodec,
    context::{AggContext, GroupArena},
    obs::{MetricsEvent, MetricsSink},
    value::Value,
};
use std::cell::RefCell;

fn ctx(arena: &GroupArena) -> AggContext<'_> {
    AggContext::new(arena, &BuiltinCatalog, &CborTypeCodec)
}

// Fold rows into a fresh state; panics on any engine error.
fn fold(ctx: &AggContext<'_>, direction: Direction, rows: &[Vec<Value>]) -> ArgmState {
    rows.iter()
        .fold(None, |state, row| {
            Some(aggregate::transition(ctx, state, row, direction).expect("transition should succeed"))
        })
        .expect("at least one row")
}

fn payload_text(state: &ArgmState) -> Option<&str> {
    state.payload().and_then(Value::as_text)
}

///
/// RecordingSink
///

#[derive(Default)]
struct RecordingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<MetricsEvent> {
        self.events.borrow().clone()
    }
}

impl MetricsSink for RecordingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}
