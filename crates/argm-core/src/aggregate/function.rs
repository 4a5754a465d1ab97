use crate::{
    aggregate::{
        ArgmState, Direction, any_old_finalize, any_old_transition, deserialize_state, finalize,
        merge, serialize_state, transition,
    },
    context::AggContext,
    error::InternalError,
    value::Value,
};

/// `argmax(payload, key, ...)`: payload of the greatest key tuple.
pub const ARGMAX: ArgmFunction = ArgmFunction::new("argmax", Direction::Max);

/// `argmin(payload, key, ...)`: payload of the least key tuple.
pub const ARGMIN: ArgmFunction = ArgmFunction::new("argmin", Direction::Min);

/// `anyold(value)`: first non-null value of the group.
pub const ANYOLD: AnyOldFunction = AnyOldFunction;

///
/// ArgmFunction
///
/// One registered extremum aggregate: a name, a direction, and the full
/// transition / combine / serial / deserial / final lifecycle.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArgmFunction {
    name: &'static str,
    direction: Direction,
}

impl ArgmFunction {
    #[must_use]
    pub const fn new(name: &'static str, direction: Direction) -> Self {
        Self { name, direction }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn transition(
        &self,
        ctx: &AggContext<'_>,
        state: Option<ArgmState>,
        args: &[Value],
    ) -> Result<ArgmState, InternalError> {
        transition(ctx, state, args, self.direction)
    }

    pub fn combine(
        &self,
        ctx: &AggContext<'_>,
        left: Option<ArgmState>,
        right: Option<&ArgmState>,
    ) -> Result<Option<ArgmState>, InternalError> {
        merge(ctx, left, right, self.direction)
    }

    pub fn serial(&self, ctx: &AggContext<'_>, state: &ArgmState) -> Result<Vec<u8>, InternalError> {
        serialize_state(ctx, state)
    }

    pub fn deserial(&self, ctx: &AggContext<'_>, bytes: &[u8]) -> Result<ArgmState, InternalError> {
        deserialize_state(ctx, bytes)
    }

    pub fn finalize(
        &self,
        ctx: &AggContext<'_>,
        state: Option<&ArgmState>,
    ) -> Result<Option<Value>, InternalError> {
        finalize(ctx, state)
    }

    /// Fold a sequence of rows into one state, starting from `state`.
    pub fn accumulate<'r>(
        &self,
        ctx: &AggContext<'_>,
        state: Option<ArgmState>,
        rows: impl IntoIterator<Item = &'r [Value]>,
    ) -> Result<Option<ArgmState>, InternalError> {
        rows.into_iter()
            .try_fold(state, |state, row| self.transition(ctx, state, row).map(Some))
    }
}

///
/// AnyOldFunction
///
/// Retain-first-non-null aggregate; carries no keys and no comparator.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AnyOldFunction;

impl AnyOldFunction {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        "anyold"
    }

    pub fn transition(
        &self,
        ctx: &AggContext<'_>,
        current: Option<Value>,
        incoming: &Value,
    ) -> Result<Option<Value>, InternalError> {
        any_old_transition(ctx, current, incoming)
    }

    pub fn finalize(
        &self,
        ctx: &AggContext<'_>,
        state: Option<&Value>,
    ) -> Result<Option<Value>, InternalError> {
        any_old_finalize(ctx, state)
    }
}
