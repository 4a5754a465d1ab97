use crate::{
    context::AggContext,
    error::{ErrorOrigin, InternalError},
    obs::sink::{CallSpan, MetricsEvent, OpKind, record},
    value::Value,
};

/// Retain the first non-null value seen by the group.
///
/// Equivalent to a two-argument coalesce, except that nothing is copied
/// once a value is held: `current` is returned as-is.
pub fn any_old_transition(
    ctx: &AggContext<'_>,
    current: Option<Value>,
    incoming: &Value,
) -> Result<Option<Value>, InternalError> {
    let span = CallSpan::new(OpKind::AnyOld);
    span.finish(any_old_inner(ctx, current, incoming))
}

fn any_old_inner(
    ctx: &AggContext<'_>,
    current: Option<Value>,
    incoming: &Value,
) -> Result<Option<Value>, InternalError> {
    ctx.ensure_active(ErrorOrigin::AnyOld)?;

    if current.is_some() {
        return Ok(current);
    }
    if incoming.is_null() {
        return Ok(None);
    }

    // First non-null value: resolve its type before taking a copy.
    let tag = ctx
        .signature()
        .map_or_else(|| Some(incoming.tag()), |signature| signature.arg_type(0))
        .ok_or_else(|| {
            InternalError::unresolved_type(ErrorOrigin::AnyOld, "could not determine input data type")
        })?;
    let info = ctx.catalog().type_info(tag).ok_or_else(|| {
        InternalError::unresolved_type(
            ErrorOrigin::AnyOld,
            format!("type {tag} is not in the type catalog"),
        )
    })?;
    if incoming.tag() != tag {
        return Err(InternalError::argument_mismatch(
            ErrorOrigin::AnyOld,
            format!("argument has type {} but the call site declares {tag}", incoming.tag()),
        ));
    }

    let value = incoming.clone();
    if !info.by_value {
        ctx.arena().reserve(value.owned_size());
    }
    record(MetricsEvent::AnyOldCaptured);

    Ok(Some(value))
}

/// Final value of the retain-first aggregate.
pub fn any_old_finalize(
    ctx: &AggContext<'_>,
    state: Option<&Value>,
) -> Result<Option<Value>, InternalError> {
    ctx.ensure_active(ErrorOrigin::AnyOld)?;

    Ok(state.cloned())
}
