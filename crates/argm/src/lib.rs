//! ## Crate layout
//! - `core`: values, type catalog and codec seams, group contexts, the
//!   extremum-with-payload engine, and observability.
//! - `error`: public error type with a stable kind + origin taxonomy.
//!
//! The `prelude` module carries the vocabulary a host needs to register
//! `argmax`, `argmin`, and `anyold` and drive them through a group.

pub use argm_core as core;

pub mod error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;

///
/// Host Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        core::{
            aggregate::{ANYOLD, ARGMAX, ARGMIN, AnyOldFunction, ArgmFunction, ArgmState, Direction},
            catalog::{BuiltinCatalog, Collation, TypeCatalog},
            codec::{CborTypeCodec, TypeCodec},
            context::{AggConfig, AggContext, CallSignature, GroupArena},
            value::{Value, ValueTag},
        },
    };
}
