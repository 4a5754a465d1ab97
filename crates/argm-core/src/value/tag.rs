use crate::value::Value;

///
/// ValueTag
///
/// Stable type identifier for each value variant.
///
/// IMPORTANT:
/// Tag values travel inside encoded states and must remain fixed once
/// released. New variants take new numbers; numbers are never reused.
///

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueTag {
    Blob = 1,
    Bool = 2,
    Float64 = 3,
    Int = 4,
    Int128 = 5,
    Null = 6,
    Text = 7,
    Uint = 8,
}

impl ValueTag {
    /// Every tag that can type a slot. `Null` marks absence, not a type.
    pub const SLOT_TYPES: [Self; 7] = [
        Self::Blob,
        Self::Bool,
        Self::Float64,
        Self::Int,
        Self::Int128,
        Self::Text,
        Self::Uint,
    ];

    /// Stable wire byte for this variant.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Decode a wire byte; unknown tags return `None`.
    #[must_use]
    pub const fn try_from_u8(byte: u8) -> Option<Self> {
        match byte {
            1 => Some(Self::Blob),
            2 => Some(Self::Bool),
            3 => Some(Self::Float64),
            4 => Some(Self::Int),
            5 => Some(Self::Int128),
            6 => Some(Self::Null),
            7 => Some(Self::Text),
            8 => Some(Self::Uint),
            _ => None,
        }
    }

    /// Stable human-readable type label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blob => "Blob",
            Self::Bool => "Bool",
            Self::Float64 => "Float64",
            Self::Int => "Int",
            Self::Int128 => "Int128",
            Self::Null => "Null",
            Self::Text => "Text",
            Self::Uint => "Uint",
        }
    }
}

impl std::fmt::Display for ValueTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[must_use]
pub(super) const fn canonical_tag(value: &Value) -> ValueTag {
    match value {
        Value::Blob(_) => ValueTag::Blob,
        Value::Bool(_) => ValueTag::Bool,
        Value::Float64(_) => ValueTag::Float64,
        Value::Int(_) => ValueTag::Int,
        Value::Int128(_) => ValueTag::Int128,
        Value::Null => ValueTag::Null,
        Value::Text(_) => ValueTag::Text,
        Value::Uint(_) => ValueTag::Uint,
    }
}
