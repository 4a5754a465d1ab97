use crate::{
    aggregate::ArgmState,
    context::AggContext,
    error::{ErrorOrigin, InternalError},
    obs::sink::{CallSpan, OpKind},
    value::Value,
};

/// Extract the payload of the surviving state.
///
/// Returns `None` when no row reached the group or the winning payload was
/// null. Never mutates the state.
pub fn finalize(
    ctx: &AggContext<'_>,
    state: Option<&ArgmState>,
) -> Result<Option<Value>, InternalError> {
    let span = CallSpan::new(OpKind::Finalize);
    let result = ctx
        .ensure_active(ErrorOrigin::Finalize)
        .map(|()| state.and_then(ArgmState::payload).cloned());

    span.finish(result)
}
