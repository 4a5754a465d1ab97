//! Module: context
//! Responsibility: the capability every entry point runs under: the
//! aggregation-group arena, the type catalog and codec, the call-site
//! signature, and runtime config.
//! Does not own: scheduling of calls (the host framework decides that).

mod arena;


use crate::{
    DEFAULT_MAX_STATE_BYTES,
    catalog::{Collation, TypeCatalog},
    codec::TypeCodec,
    error::{ErrorOrigin, InternalError},
    value::{Value, ValueTag},
};
use derive_more::Deref;

// re-exports
pub use arena::{ArenaStats, GroupArena};

///
/// CallSignature
///
/// Resolved argument types of one call site, payload first.
/// `None` marks an argument whose type the host could not determine.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq)]
pub struct CallSignature(Vec<Option<ValueTag>>);

impl CallSignature {
    #[must_use]
    pub const fn new(types: Vec<Option<ValueTag>>) -> Self {
        Self(types)
    }

    /// Signature where every argument type is known.
    #[must_use]
    pub fn resolved(types: &[ValueTag]) -> Self {
        Self(types.iter().copied().map(Some).collect())
    }

    /// Derive a signature from one sample row; null arguments stay unresolved.
    #[must_use]
    pub fn infer(args: &[Value]) -> Self {
        Self(
            args.iter()
                .map(|arg| (!arg.is_null()).then(|| arg.tag()))
                .collect(),
        )
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn arg_type(&self, index: usize) -> Option<ValueTag> {
        self.0.get(index).copied().flatten()
    }
}

///
/// AggConfig
///
/// Runtime knobs carried by a context. No files or environment are read.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AggConfig {
    pub collation: Collation,
    pub debug: bool,
    pub max_state_bytes: usize,
}

impl Default for AggConfig {
    fn default() -> Self {
        Self {
            collation: Collation::Default,
            debug: false,
            max_state_bytes: DEFAULT_MAX_STATE_BYTES,
        }
    }
}

///
/// AggContext
///
/// Capability threaded through every engine entry point. A context is only
/// valid while its arena is open; calls made after the group ends fail with
/// a context violation instead of touching state.
///

#[derive(Clone, Copy)]
pub struct AggContext<'a> {
    arena: &'a GroupArena,
    catalog: &'a dyn TypeCatalog,
    codec: &'a dyn TypeCodec,
    signature: Option<&'a CallSignature>,
    config: AggConfig,
}

impl<'a> AggContext<'a> {
    #[must_use]
    pub fn new(
        arena: &'a GroupArena,
        catalog: &'a dyn TypeCatalog,
        codec: &'a dyn TypeCodec,
    ) -> Self {
        Self {
            arena,
            catalog,
            codec,
            signature: None,
            config: AggConfig::default(),
        }
    }

    /// Attach the call-site signature used to type a fresh state.
    #[must_use]
    pub const fn with_signature(mut self, signature: &'a CallSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    #[must_use]
    pub const fn with_config(mut self, config: AggConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn with_collation(mut self, collation: Collation) -> Self {
        self.config.collation = collation;
        self
    }

    /// Enable `[debug]` trace lines for calls made through this context.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    #[must_use]
    pub const fn arena(&self) -> &'a GroupArena {
        self.arena
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a dyn TypeCatalog {
        self.catalog
    }

    #[must_use]
    pub const fn codec(&self) -> &'a dyn TypeCodec {
        self.codec
    }

    #[must_use]
    pub const fn signature(&self) -> Option<&'a CallSignature> {
        self.signature
    }

    #[must_use]
    pub const fn config(&self) -> &AggConfig {
        &self.config
    }

    #[must_use]
    pub const fn collation(&self) -> Collation {
        self.config.collation
    }

    /// Fail unless this context still belongs to a live aggregation group.
    pub fn ensure_active(&self, origin: ErrorOrigin) -> Result<(), InternalError> {
        if self.arena.is_open() {
            Ok(())
        } else {
            Err(InternalError::context_violation(origin))
        }
    }

    pub(crate) fn debug_log(&self, s: impl AsRef<str>) {
        if self.config.debug {
            println!("[debug] {}", s.as_ref());
        }
    }
}
