//! Shared code generation primitives for the rpcgen service generator.
//!
//! # Module Organization
//!
//! - [`builder`] - The indentation-aware template [`Printer`](builder::Printer)
//! - [`generation`] - Generated artifacts and import tracking
//! - [`naming`] - Name derivation rules and the per-run naming context
//! - [`language`] - Backend trait and language naming conventions
//! - [`lint`] - Schema lints and diagnostics
//! - [`testing`] - Schema fixtures (feature-gated)

pub mod builder;
pub mod generation;
pub mod language;
pub mod lint;
pub mod naming;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
