//! Algebraic properties of comparison, merge, and the state wire format.

use argm_core::{
    aggregate::{
        ARGMAX, ARGMIN, ArgmFunction, ArgmState, Direction, Preference, compare_one_key,
    },
    catalog::{BuiltinCatalog, Collation},
    codec::CborTypeCodec,
    context::{AggContext, CallSignature, GroupArena},
    value::{Value, ValueTag},
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn with_ctx<T>(f: impl FnOnce(&AggContext<'_>) -> T) -> T {
    let arena = GroupArena::new();
    let signature = CallSignature::resolved(&[ValueTag::Text, ValueTag::Int, ValueTag::Text]);
    let ctx = AggContext::new(&arena, &BuiltinCatalog, &CborTypeCodec).with_signature(&signature);

    f(&ctx)
}

fn row(payload: Option<&str>, key: Option<i64>, tiebreak: Option<&str>) -> Vec<Value> {
    vec![Value::from(payload), Value::from(key), Value::from(tiebreak)]
}

fn single(function: ArgmFunction, ctx: &AggContext<'_>, key: i64) -> ArgmState {
    let payload = format!("p{key}");
    function
        .transition(ctx, None, &row(Some(&payload), Some(key), None))
        .expect("transition")
}

fn merged(
    function: ArgmFunction,
    ctx: &AggContext<'_>,
    left: ArgmState,
    right: &ArgmState,
) -> ArgmState {
    function
        .combine(ctx, Some(left), Some(right))
        .expect("merge")
        .expect("state")
}

fn payload(function: ArgmFunction, ctx: &AggContext<'_>, state: &ArgmState) -> Option<Value> {
    function.finalize(ctx, Some(state)).expect("finalize")
}

fn arb_function() -> impl Strategy<Value = ArgmFunction> {
    prop_oneof![Just(ARGMAX), Just(ARGMIN)]
}

fn arb_row() -> impl Strategy<Value = Vec<Value>> {
    (
        proptest::option::of("[a-z]{0,6}"),
        proptest::option::of(-50_i64..50),
        proptest::option::of("[a-zA-Z]{0,3}"),
    )
        .prop_map(|(p, k, t)| row(p.as_deref(), k, t.as_deref()))
}

fn distinct_keys() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(any::<i64>(), 3)
        .prop_map(|keys: BTreeSet<i64>| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn nulls_lose_to_values_in_both_directions(v in any::<i64>(), max in any::<bool>()) {
        let direction = if max { Direction::Max } else { Direction::Min };
        with_ctx(|ctx| {
            let valued = ARGMAX.transition(ctx, None, &row(Some("v"), Some(v), None)).expect("state");
            let nulled = ARGMAX.transition(ctx, None, &row(Some("n"), None, None)).expect("state");
            let value = Value::Int(v);

            prop_assert_eq!(
                compare_one_key(&nulled.keys()[0], Some(&value), Collation::Default, direction),
                Preference::PreferNew
            );
            prop_assert_eq!(
                compare_one_key(&valued.keys()[0], None, Collation::Default, direction),
                Preference::PreferOld
            );
            prop_assert_eq!(
                compare_one_key(&nulled.keys()[0], Some(&Value::Null), Collation::Default, direction),
                Preference::Tie
            );
            Ok(())
        })?;
    }

    #[test]
    fn directions_are_mirror_images(a in any::<i64>(), b in any::<i64>()) {
        with_ctx(|ctx| {
            let resident = ARGMAX.transition(ctx, None, &row(Some("a"), Some(a), None)).expect("state");
            let incoming = Value::Int(b);
            let slot = &resident.keys()[0];

            let max = compare_one_key(slot, Some(&incoming), Collation::Default, Direction::Max);
            let min = compare_one_key(slot, Some(&incoming), Collation::Default, Direction::Min);
            prop_assert_eq!(max.signum(), -min.signum());
            Ok(())
        })?;
    }

    #[test]
    fn transition_replaces_only_on_strictly_better_keys(
        function in arb_function(),
        first in any::<i64>(),
        second in any::<i64>(),
    ) {
        with_ctx(|ctx| {
            let state = single(function, ctx, first);
            let state = function
                .transition(ctx, Some(state), &row(Some("next"), Some(second), None))
                .expect("transition");

            let better = match function.direction() {
                Direction::Max => second > first,
                Direction::Min => second < first,
            };
            let expected = if better { "next".to_string() } else { format!("p{first}") };
            prop_assert_eq!(payload(function, ctx, &state), Some(Value::from(expected)));
            Ok(())
        })?;
    }

    #[test]
    fn merge_is_commutative(function in arb_function(), keys in distinct_keys()) {
        with_ctx(|ctx| {
            let ab = merged(function, ctx, single(function, ctx, keys[0]), &single(function, ctx, keys[1]));
            let ba = merged(function, ctx, single(function, ctx, keys[1]), &single(function, ctx, keys[0]));

            prop_assert_eq!(payload(function, ctx, &ab), payload(function, ctx, &ba));
            Ok(())
        })?;
    }

    #[test]
    fn merge_is_associative(function in arb_function(), keys in distinct_keys()) {
        with_ctx(|ctx| {
            let [a, b, c] = [keys[0], keys[1], keys[2]];

            let ab = merged(function, ctx, single(function, ctx, a), &single(function, ctx, b));
            let ab_c = merged(function, ctx, ab, &single(function, ctx, c));

            let bc = merged(function, ctx, single(function, ctx, b), &single(function, ctx, c));
            let a_bc = merged(function, ctx, single(function, ctx, a), &bc);

            prop_assert_eq!(payload(function, ctx, &ab_c), payload(function, ctx, &a_bc));
            Ok(())
        })?;
    }

    #[test]
    fn absent_states_are_merge_identities(function in arb_function(), key in any::<i64>()) {
        with_ctx(|ctx| {
            let state = single(function, ctx, key);

            let cloned = function.combine(ctx, None, Some(&state)).expect("merge").expect("clone");
            prop_assert_eq!(&cloned, &state);

            let kept = function.combine(ctx, Some(cloned), None).expect("merge").expect("left");
            prop_assert_eq!(&kept, &state);
            Ok(())
        })?;
    }

    #[test]
    fn wire_round_trip_preserves_state(
        function in arb_function(),
        rows in prop::collection::vec(arb_row(), 1..8),
    ) {
        with_ctx(|ctx| {
            let state = function
                .accumulate(ctx, None, rows.iter().map(Vec::as_slice))
                .expect("aggregate")
                .expect("state");

            let bytes = function.serial(ctx, &state).expect("serial");
            let decoded = function.deserial(ctx, &bytes).expect("deserial");

            prop_assert_eq!(&decoded, &state);
            for (left, right) in decoded.slots().iter().zip(state.slots()) {
                prop_assert_eq!(left.is_null(), right.is_null());
            }
            Ok(())
        })?;
    }
}
