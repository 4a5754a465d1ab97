use crate::{
    MAX_SLOTS,
    aggregate::{ArgmState, Direction, Preference, ValueMetadata, compare_slot_keys},
    context::{AggContext, CallSignature},
    error::{ErrorOrigin, InternalError},
    obs::sink::{CallSpan, MetricsEvent, OpKind, record},
    value::Value,
};

/// Fold one input row into the group state.
///
/// `args` holds the payload followed by one or more keys, any of which may
/// be null. The first call (no state) types the slots from the call-site
/// signature and copies the row unconditionally. Later calls replace the
/// whole record only when the incoming keys are strictly better; ties keep
/// the resident record.
pub fn transition(
    ctx: &AggContext<'_>,
    state: Option<ArgmState>,
    args: &[Value],
    direction: Direction,
) -> Result<ArgmState, InternalError> {
    let span = CallSpan::new(OpKind::Transition);
    span.finish(transition_inner(ctx, state, args, direction))
}

fn transition_inner(
    ctx: &AggContext<'_>,
    state: Option<ArgmState>,
    args: &[Value],
    direction: Direction,
) -> Result<ArgmState, InternalError> {
    ctx.ensure_active(ErrorOrigin::Transition)?;

    match state {
        None => init_state(ctx, args),
        Some(mut state) => {
            check_args(&state, args)?;

            let preference = compare_slot_keys(
                state.slots(),
                args.iter().skip(1).map(Some),
                ctx.collation(),
                direction,
            );
            if preference == Preference::PreferNew {
                copy_args(ctx, &mut state, args, true)?;
                record(MetricsEvent::PayloadReplaced);
                ctx.debug_log("argm transition: incoming row replaced resident record");
            }

            Ok(state)
        }
    }
}

// Uninitialized → Active: resolve slot types, then copy the row.
fn init_state(ctx: &AggContext<'_>, args: &[Value]) -> Result<ArgmState, InternalError> {
    check_arity(args.len())?;

    let inferred;
    let signature = if let Some(signature) = ctx.signature() {
        signature
    } else {
        inferred = CallSignature::infer(args);
        &inferred
    };
    if signature.arity() != args.len() {
        return Err(InternalError::argument_mismatch(
            ErrorOrigin::Transition,
            format!(
                "call signature declares {} arguments but {} were passed",
                signature.arity(),
                args.len()
            ),
        ));
    }

    let catalog = ctx.catalog();
    let mut metadata = Vec::with_capacity(args.len());
    for index in 0..args.len() {
        let tag = signature.arg_type(index).ok_or_else(|| {
            InternalError::unresolved_type(
                ErrorOrigin::Transition,
                format!("could not determine input data type of argument {index}"),
            )
        })?;
        let info = catalog.type_info(tag).ok_or_else(|| {
            InternalError::unresolved_type(
                ErrorOrigin::Transition,
                format!("type {tag} of argument {index} is not in the type catalog"),
            )
        })?;

        // For keys, but not for the payload, resolve the ordering comparator.
        let comparator = if index == 0 {
            None
        } else {
            Some(catalog.comparator(tag).ok_or_else(|| {
                InternalError::unresolved_type(
                    ErrorOrigin::Transition,
                    format!("could not identify a comparison function for type {tag}"),
                )
            })?)
        };

        metadata.push(ValueMetadata::from_type_info(info, comparator));
    }

    let mut state = ArgmState::with_metadata(metadata);
    check_args(&state, args)?;
    copy_args(ctx, &mut state, args, false)?;

    record(MetricsEvent::StateInitialized {
        slots: u64::try_from(state.slot_count()).unwrap_or(u64::MAX),
    });
    ctx.debug_log(format!(
        "argm transition: initialized state with {} slots",
        state.slot_count()
    ));

    Ok(state)
}

fn check_arity(count: usize) -> Result<(), InternalError> {
    if count < 2 {
        return Err(InternalError::argument_mismatch(
            ErrorOrigin::Transition,
            format!("argm needs a payload and at least one key, got {count} arguments"),
        ));
    }
    if count > MAX_SLOTS {
        return Err(InternalError::argument_mismatch(
            ErrorOrigin::Transition,
            format!("argm accepts at most {MAX_SLOTS} arguments, got {count}"),
        ));
    }

    Ok(())
}

// Validate the whole row before any slot is touched.
fn check_args(state: &ArgmState, args: &[Value]) -> Result<(), InternalError> {
    if args.len() != state.slot_count() {
        return Err(InternalError::argument_mismatch(
            ErrorOrigin::Transition,
            format!(
                "state has {} slots but {} arguments were passed",
                state.slot_count(),
                args.len()
            ),
        ));
    }

    for (index, (slot, arg)) in state.slots().iter().zip(args).enumerate() {
        if !slot.accepts(arg) {
            return Err(InternalError::argument_mismatch(
                ErrorOrigin::Transition,
                format!(
                    "argument {index} has type {} but its slot holds {}",
                    arg.tag(),
                    slot.metadata().tag
                ),
            ));
        }
    }

    Ok(())
}

fn copy_args(
    ctx: &AggContext<'_>,
    state: &mut ArgmState,
    args: &[Value],
    release_previous: bool,
) -> Result<(), InternalError> {
    let arena = ctx.arena();
    for (index, (slot, arg)) in state.slots_mut().iter_mut().zip(args).enumerate() {
        if !slot.assign(arena, arg, release_previous) {
            return Err(InternalError::argument_mismatch(
                ErrorOrigin::Transition,
                format!("argument {index} changed type during copy"),
            ));
        }
    }

    Ok(())
}
