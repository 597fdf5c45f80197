use std::collections::HashMap;

use rpcgen_schema::Schema;

use crate::{
    language::NamingConvention,
    lint::{Diagnostic, Lint},
    naming::NamingContext,
};

/// Lint that warns when derived client module identifiers overlap.
///
/// Module identifiers only lower-case the first character, so `Order` and
/// `order` share one loader module. Identifiers equal to a fixed dependency
/// of the client stubs are reported as well.
pub struct IdentifierCollisionLint;

impl Lint for IdentifierCollisionLint {
    fn name(&self) -> &'static str {
        "identifier-collision"
    }

    fn check(&self, _schema: &Schema, names: &NamingContext, diagnostics: &mut Vec<Diagnostic>) {
        let js = NamingConvention::JAVASCRIPT;
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for message in names.messages() {
            let location = format!("message.{}", message.name);
            if js.is_fixed_dependency(&message.js_module) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "message '{}' derives module '{}' which is a fixed client dependency",
                            message.name, message.js_module
                        ),
                    )
                    .at(location.clone()),
                );
            }
            if let Some(first) = seen.insert(message.js_module.as_str(), message.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "message '{}' derives module '{}' (conflicts with message '{}')",
                            message.name, message.js_module, first
                        ),
                    )
                    .at(location),
                );
            }
        }

        for service in names.services() {
            if js.is_fixed_dependency(&service.js_class) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "service '{}' derives module '{}' which is a fixed client dependency",
                            service.name, service.js_class
                        ),
                    )
                    .at(format!("service.{}", service.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_schema::{Message, Service};

    use super::*;
    use crate::lint::lints::test_support::run;

    #[test]
    fn test_case_folding_collision() {
        let mut schema = Schema::new("x.proto");
        schema.add_message(Message::new("Order"));
        schema.add_message(Message::new("order"));

        let diagnostics = run(&IdentifierCollisionLint, &schema);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "message 'order' derives module 'order' (conflicts with message 'Order')"
        );
    }

    #[test]
    fn test_fixed_dependency_collision() {
        let mut schema = Schema::new("x.proto");
        schema.add_message(Message::new("Constants"));
        schema.add_service(Service::new("jquery"));

        let locations: Vec<_> = run(&IdentifierCollisionLint, &schema)
            .into_iter()
            .filter_map(|d| d.location)
            .collect();
        assert_eq!(locations, vec!["message.Constants", "service.jquery"]);
    }

    #[test]
    fn test_no_collision() {
        let mut schema = Schema::new("x.proto");
        schema.add_message(Message::new("Order"));
        schema.add_message(Message::new("OrderList"));

        assert!(run(&IdentifierCollisionLint, &schema).is_empty());
    }
}
