//! Built-in lints.

mod duplicate_class;
mod empty_name;
mod identifier_collision;
mod reserved_word;

pub use duplicate_class::DuplicateClassLint;
pub use empty_name::EmptyNameLint;
pub use identifier_collision::IdentifierCollisionLint;
pub use reserved_word::ReservedWordLint;

#[cfg(test)]
pub(crate) mod test_support {
    use rpcgen_schema::{GeneratorOptions, Schema};

    use crate::{
        lint::{Diagnostic, Lint},
        naming::NamingContext,
    };

    /// Run a single lint over `schema` with default options.
    pub fn run(lint: &dyn Lint, schema: &Schema) -> Vec<Diagnostic> {
        let names = NamingContext::build(schema, &GeneratorOptions::default());
        let mut diagnostics = Vec::new();
        lint.check(schema, &names, &mut diagnostics);
        diagnostics
    }
}
