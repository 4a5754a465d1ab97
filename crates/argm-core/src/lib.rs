//! Core runtime for argm: typed values, the type catalog and codec seams,
//! group contexts, and the extremum-with-payload aggregation engine.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod aggregate;
pub mod catalog;
pub mod codec;
pub mod context;
pub mod error;
pub mod obs;
pub mod serialize;
pub mod types;
pub mod value;

///
/// CONSTANTS
///

/// Maximum number of slots (payload + keys) one state may carry.
///
/// The slot count travels as a 16-bit field on the wire, and call sites
/// never pass more arguments than that.
pub const MAX_SLOTS: usize = i16::MAX as usize;

/// Default upper bound on an encoded state accepted by deserialize.
pub const DEFAULT_MAX_STATE_BYTES: usize = 16 * 1024 * 1024;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or serializers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        aggregate::{ANYOLD, ARGMAX, ARGMIN, ArgmState, Direction},
        catalog::{BuiltinCatalog, Collation, TypeCatalog},
        codec::{CborTypeCodec, TypeCodec},
        context::{AggConfig, AggContext, CallSignature, GroupArena},
        value::{Value, ValueTag},
    };
}
