//! Module: catalog
//! Responsibility: per-type layout metadata and comparator lookup.
//! Does not own: value encoding (see `codec`).
//! Boundary: the engine asks the catalog once per slot at state
//! initialization, and again only to re-resolve comparators on decode.

mod builtin;


use crate::value::{Value, ValueTag};
use derive_more::Display;
use std::{cmp::Ordering, fmt};

// re-exports
pub use builtin::BuiltinCatalog;

///
/// TypeLen
///
/// Storage width of one type: a fixed byte count, or variable-length.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeLen {
    Fixed(u16),
    Variable,
}

impl TypeLen {
    /// Wire form: the fixed width, or `-1` for variable-length types.
    #[must_use]
    pub fn to_wire(self) -> i16 {
        match self {
            Self::Fixed(len) => i16::try_from(len).unwrap_or(i16::MAX),
            Self::Variable => -1,
        }
    }

    #[must_use]
    pub fn from_wire(raw: i16) -> Option<Self> {
        match raw {
            -1 => Some(Self::Variable),
            len => u16::try_from(len).ok().map(Self::Fixed),
        }
    }

    #[must_use]
    pub const fn is_variable(self) -> bool {
        matches!(self, Self::Variable)
    }
}

///
/// Alignment
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Alignment {
    Char = 1,
    Short = 2,
    Int = 4,
    Double = 8,
}

impl Alignment {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn try_from_u8(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Char),
            2 => Some(Self::Short),
            4 => Some(Self::Int),
            8 => Some(Self::Double),
            _ => None,
        }
    }
}

///
/// TypeInfo
///
/// Layout metadata the catalog reports for one type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TypeInfo {
    pub tag: ValueTag,
    pub len: TypeLen,
    pub by_value: bool,
    pub alignment: Alignment,
}

///
/// Collation
///
/// Call-site collation handed to every comparator invocation.
/// Only text comparison observes it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Collation {
    #[default]
    Default,
    CaseInsensitive,
}

///
/// ComparatorId
///
/// Wire identity of a comparator. Zero is reserved for "no comparator".
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ComparatorId(pub u16);

impl ComparatorId {
    pub const NONE: Self = Self(0);

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Three-way comparison of two values of one type.
pub type CompareFn = fn(&Value, &Value, Collation) -> Ordering;

///
/// Comparator
///
/// A resolved comparator: its wire id plus the function itself.
///

#[derive(Clone, Copy)]
pub struct Comparator {
    pub id: ComparatorId,
    pub cmp: CompareFn,
}

impl Comparator {
    #[must_use]
    pub fn compare(&self, left: &Value, right: &Value, collation: Collation) -> Ordering {
        (self.cmp)(left, right, collation)
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").field("id", &self.id).finish()
    }
}

impl PartialEq for Comparator {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Comparator {}

///
/// TypeCatalog
///
/// Host-supplied lookup from a type identifier to its layout and ordering.
///

pub trait TypeCatalog {
    /// Layout metadata for `tag`, or `None` if the type is unknown.
    fn type_info(&self, tag: ValueTag) -> Option<TypeInfo>;

    /// Default ordering comparator for `tag`; requested only for key slots.
    fn comparator(&self, tag: ValueTag) -> Option<Comparator>;

    /// Re-resolve a comparator from its wire id.
    fn resolve_comparator(&self, id: ComparatorId) -> Option<Comparator>;
}
