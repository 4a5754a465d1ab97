use super::{ctx, fold, payload_text};
use crate::{
    aggregate::{ArgmState, Direction, compare_one_key, transition},
    catalog::{BuiltinCatalog, Collation, Comparator, ComparatorId, TypeCatalog, TypeInfo},
    codec::CborTypeCodec,
    context::{AggContext, CallSignature, GroupArena},
    error::ErrorOrigin,
    value::{Value, ValueTag},
};

fn text_int(payload: &str, key: Option<i64>) -> Vec<Value> {
    vec![Value::from(payload), Value::from(key)]
}

#[test]
fn max_keeps_row_with_greatest_key() {
    let arena = GroupArena::new();
    let ctx = ctx(&arena);

    let state = fold(
        &ctx,
        Direction::Max,
        &[
            text_int("a", Some(3)),
            text_int("b", Some(7)),
            text_int("c", Some(5)),
        ],
    );

    assert_eq!(payload_text(&state), Some("b"));
    assert_eq!(state.slot_count(), 2);
    assert_eq!(state.keys()[0].value(), Some(&Value::Int(7)));
}

#[test]
fn min_keeps_row_with_least_key() {
    let arena = GroupArena::new();
    let ctx = ctx(&arena);

    let state = fold(
        &ctx,
        Direction::Min,
        &[
            text_int("a", Some(3)),
            text_int("b", Some(7)),
            text_int("c", Some(-1)),
        ],
    );

    assert_eq!(payload_text(&state), Some("c"));
}

#[test]
fn first_row_is_copied_even_with_null_keys() {
    let arena = GroupArena::new();
    let ctx = ctx(&arena);
    let signature = CallSignature::resolved(&[ValueTag::Text, ValueTag::Int]);
    let ctx = ctx.with_signature(&signature);

    let state = fold(&ctx, Direction::Max, &[text_int("only", None)]);

    assert_eq!(payload_text(&state), Some("only"));
    assert!(state.keys()[0].is_null());
}

#[test]
fn null_keys_lose_in_both_directions() {
    let arena = GroupArena::new();
    let signature = CallSignature::resolved(&[ValueTag::Text, ValueTag::Int]);
    let ctx = ctx(&arena).with_signature(&signature);

    for direction in [Direction::Max, Direction::Min] {
        let state = fold(
            &ctx,
            direction,
            &[
                text_int("null-first", None),
                text_int("valued", Some(1)),
                text_int("null-later", None),
            ],
        );

        assert_eq!(payload_text(&state), Some("valued"), "{direction:?}");
    }
}

#[test]
fn ties_keep_the_resident_record() {
    let arena = GroupArena::new();
    let ctx = ctx(&arena);

    let max = fold(
        &ctx,
        Direction::Max,
        &[text_int("first", Some(4)), text_int("second", Some(4))],
    );
    let min = fold(
        &ctx,
        Direction::Min,
        &[text_int("first", Some(4)), text_int("second", Some(4))],
    );

    assert_eq!(payload_text(&max), Some("first"));
    assert_eq!(payload_text(&min), Some("first"));
}

#[test]
fn later_keys_break_ties_on_earlier_keys() {
    let arena = GroupArena::new();
    let ctx = ctx(&arena);
    let row = |payload: &str, k1: i64, k2: &str| {
        vec![Value::from(payload), Value::Int(k1), Value::from(k2)]
    };

    let state = fold(
        &ctx,
        Direction::Max,
        &[row("x", 2, "b"), row("y", 2, "d"), row("z", 1, "z")],
    );

    assert_eq!(payload_text(&state), Some("y"));
    assert_eq!(state.keys()[1].value(), Some(&Value::from("d")));
}

#[test]
fn replacement_copies_null_payload_and_keys_together() {
    let arena = GroupArena::new();
    let signature = CallSignature::resolved(&[ValueTag::Text, ValueTag::Int, ValueTag::Int]);
    let ctx = ctx(&arena).with_signature(&signature);

    let state = fold(
        &ctx,
        Direction::Max,
        &[
            vec![Value::from("a"), Value::Int(1), Value::Int(9)],
            vec![Value::Null, Value::Int(2), Value::Null],
        ],
    );

    assert_eq!(state.payload(), None);
    assert_eq!(state.keys()[0].value(), Some(&Value::Int(2)));
    assert!(state.keys()[1].is_null());
}

#[test]
fn collation_reaches_text_comparator() {
    let arena = GroupArena::new();
    let rows = [
        vec![Value::from("apple-row"), Value::from("apple")],
        vec![Value::from("banana-row"), Value::from("BANANA")],
    ];

    let binary = fold(&ctx(&arena), Direction::Max, &rows);
    let folded = fold(
        &ctx(&arena).with_collation(Collation::CaseInsensitive),
        Direction::Max,
        &rows,
    );

    assert_eq!(payload_text(&binary), Some("apple-row"));
    assert_eq!(payload_text(&folded), Some("banana-row"));
}

#[test]
fn too_few_arguments_is_rejected() {
    let arena = GroupArena::new();

    let err = transition(&ctx(&arena), None, &[Value::from("lonely")], Direction::Max)
        .expect_err("one argument must fail");

    assert!(err.is_argument_mismatch());
    assert_eq!(err.origin, ErrorOrigin::Transition);
}

#[test]
fn null_first_argument_without_signature_is_unresolved() {
    let arena = GroupArena::new();

    let err = transition(
        &ctx(&arena),
        None,
        &[Value::Null, Value::Int(1)],
        Direction::Max,
    )
    .expect_err("untyped null payload must fail");

    assert!(err.is_unresolved_type());
    assert!(err.message.contains("argument 0"));
}

#[test]
fn signature_with_unknown_key_type_is_unresolved() {
    let arena = GroupArena::new();
    let signature = CallSignature::new(vec![Some(ValueTag::Text), None]);
    let ctx = ctx(&arena).with_signature(&signature);

    let err = transition(&ctx, None, &[Value::from("p"), Value::Int(1)], Direction::Max)
        .expect_err("unknown key type must fail");

    assert!(err.is_unresolved_type());
}

#[test]
fn signature_arity_must_match_row() {
    let arena = GroupArena::new();
    let signature = CallSignature::resolved(&[ValueTag::Text, ValueTag::Int, ValueTag::Int]);
    let ctx = ctx(&arena).with_signature(&signature);

    let err = transition(&ctx, None, &[Value::from("p"), Value::Int(1)], Direction::Max)
        .expect_err("arity mismatch must fail");

    assert!(err.is_argument_mismatch());
}

#[test]
fn later_row_with_wrong_width_or_type_is_rejected() {
    let arena = GroupArena::new();
    let ctx = ctx(&arena);
    let state = fold(&ctx, Direction::Max, &[text_int("a", Some(1))]);

    let err = transition(
        &ctx,
        Some(state),
        &[Value::from("b"), Value::Int(2), Value::Int(3)],
        Direction::Max,
    )
    .expect_err("wider row must fail");
    assert!(err.is_argument_mismatch());

    let state = fold(&ctx, Direction::Max, &[text_int("a", Some(1))]);
    let err = transition(
        &ctx,
        Some(state),
        &[Value::from("b"), Value::from("two")],
        Direction::Max,
    )
    .expect_err("retyped key must fail");
    assert!(err.is_argument_mismatch());
    assert!(err.message.contains("argument 1"));
}

///
/// NoOrderCatalog
/// Knows every layout but no ordering.
///

struct NoOrderCatalog;

impl TypeCatalog for NoOrderCatalog {
    fn type_info(&self, tag: ValueTag) -> Option<TypeInfo> {
        BuiltinCatalog.type_info(tag)
    }

    fn comparator(&self, _: ValueTag) -> Option<Comparator> {
        None
    }

    fn resolve_comparator(&self, _: ComparatorId) -> Option<Comparator> {
        None
    }
}

#[test]
fn key_type_without_comparator_is_unresolved() {
    let arena = GroupArena::new();
    let ctx = AggContext::new(&arena, &NoOrderCatalog, &CborTypeCodec);

    let err = transition(&ctx, None, &text_int("a", Some(1)), Direction::Max)
        .expect_err("missing comparator must fail");

    assert!(err.is_unresolved_type());
    assert!(err.message.contains("comparison function"));
}

#[test]
fn payload_slot_carries_no_comparator() {
    let arena = GroupArena::new();
    let state: ArgmState = fold(&ctx(&arena), Direction::Max, &[text_int("a", Some(1))]);

    assert!(state.slot(0).expect("payload").metadata().comparator.is_none());
    assert!(state.slot(1).expect("key").metadata().comparator.is_some());
}

#[test]
fn direction_sign_matches_preference_for_larger_key() {
    let arena = GroupArena::new();
    let state = fold(&ctx(&arena), Direction::Max, &[text_int("a", Some(1))]);
    let larger = Value::Int(2);

    for direction in [Direction::Max, Direction::Min] {
        let preference =
            compare_one_key(&state.keys()[0], Some(&larger), Collation::Default, direction);

        assert_eq!(preference.signum(), direction.sign(), "{direction:?}");
    }
    assert_eq!(Direction::Max.sign(), -Direction::Min.sign());
}
