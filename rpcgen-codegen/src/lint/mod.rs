//! Schema lints.
//!
//! Lints never block generation on their own; they surface names that would
//! produce broken or overlapping artifacts.

mod diagnostic;
pub mod lints;

use rpcgen_schema::Schema;

pub use diagnostic::{Diagnostic, Severity};

use crate::naming::NamingContext;

/// A check over the schema and its derived names.
pub trait Lint {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// Check the schema and add any diagnostics.
    fn check(&self, schema: &Schema, names: &NamingContext, diagnostics: &mut Vec<Diagnostic>);
}

/// Runs a configurable list of lints.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(lints::EmptyNameLint),
                Box::new(lints::DuplicateClassLint),
                Box::new(lints::IdentifierCollisionLint),
                Box::new(lints::ReservedWordLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names of the configured lints, in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.lints.iter().map(|lint| lint.name())
    }

    /// Run every lint and collect the diagnostics.
    pub fn run(&self, schema: &Schema, names: &NamingContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(schema, names, &mut diagnostics);
        }
        tracing::debug!(count = diagnostics.len(), "lints finished");
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}
