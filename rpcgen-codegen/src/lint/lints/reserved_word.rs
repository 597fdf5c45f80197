use rpcgen_schema::Schema;

use crate::{
    language::NamingConvention,
    lint::{Diagnostic, Lint},
    naming::NamingContext,
};

/// Lint that warns about derived JavaScript identifiers that are reserved
/// words.
pub struct ReservedWordLint;

impl Lint for ReservedWordLint {
    fn name(&self) -> &'static str {
        "reserved-word"
    }

    fn check(&self, _schema: &Schema, names: &NamingContext, diagnostics: &mut Vec<Diagnostic>) {
        let js = NamingConvention::JAVASCRIPT;
        let mut report = |kind: &str, name: &str, ident: &str, location: String| {
            if js.is_reserved(ident) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "{kind} '{name}' derives '{ident}', a reserved word in {}",
                            js.language
                        ),
                    )
                    .at(location),
                );
            }
        };

        for service in names.services() {
            report(
                "service",
                &service.name,
                &service.js_class,
                format!("service.{}", service.name),
            );
            for method in &service.methods {
                report(
                    "method",
                    &method.name,
                    &method.js_fn,
                    format!("service.{}.method.{}", service.name, method.name),
                );
            }
        }
        for message in names.messages() {
            report(
                "message",
                &message.name,
                &message.js_module,
                format!("message.{}", message.name),
            );
        }
    }
}
