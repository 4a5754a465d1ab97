use crate::{
    aggregate::{ArgmState, Direction, Preference, ValueSlot, compare_slot_keys},
    context::AggContext,
    error::{ErrorOrigin, InternalError},
    obs::sink::{CallSpan, MergeOutcome, MetricsEvent, OpKind, record},
};

/// Combine two partial states from independent partitions.
///
/// An absent `right` returns `left` unchanged; an absent `left` yields a
/// deep clone of `right`. Otherwise `right`'s record replaces `left`'s only
/// when its keys are strictly better, so ties keep the resident record.
pub fn merge(
    ctx: &AggContext<'_>,
    left: Option<ArgmState>,
    right: Option<&ArgmState>,
    direction: Direction,
) -> Result<Option<ArgmState>, InternalError> {
    let span = CallSpan::new(OpKind::Merge);
    span.finish(merge_inner(ctx, left, right, direction))
}

fn merge_inner(
    ctx: &AggContext<'_>,
    left: Option<ArgmState>,
    right: Option<&ArgmState>,
    direction: Direction,
) -> Result<Option<ArgmState>, InternalError> {
    ctx.ensure_active(ErrorOrigin::Merge)?;

    let Some(right) = right else {
        record(MetricsEvent::Merge {
            outcome: MergeOutcome::RightAbsent,
        });
        return Ok(left);
    };

    let Some(mut left) = left else {
        // Copy right into storage owned by this group.
        let cloned = right.clone_in(ctx.arena());
        record(MetricsEvent::Merge {
            outcome: MergeOutcome::ClonedRight,
        });
        ctx.debug_log("argm merge: cloned right state into empty left");

        return Ok(Some(cloned));
    };

    if !left.same_layout(right) {
        return Err(InternalError::argument_mismatch(
            ErrorOrigin::Merge,
            format!(
                "cannot merge states of different layouts ({} and {} slots)",
                left.slot_count(),
                right.slot_count()
            ),
        ));
    }

    let preference = compare_slot_keys(
        left.slots(),
        right.slots().iter().skip(1).map(ValueSlot::value),
        ctx.collation(),
        direction,
    );

    let outcome = if preference == Preference::PreferNew {
        left.copy_from(ctx.arena(), right);
        ctx.debug_log("argm merge: right state replaced left record");
        MergeOutcome::AdoptedRight
    } else {
        MergeOutcome::KeptLeft
    };
    record(MetricsEvent::Merge { outcome });

    Ok(Some(left))
}
