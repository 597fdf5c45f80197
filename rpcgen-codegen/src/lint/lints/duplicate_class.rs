use std::collections::HashMap;

use rpcgen_schema::Schema;

use crate::{
    lint::{Diagnostic, Lint},
    naming::NamingContext,
};

/// Lint that warns when two services derive the same class, or two methods
/// derive the same handler class.
///
/// All handlers of a schema share one package, so methods of different
/// services collide too. Only the first artifact of a colliding pair is
/// generated.
pub struct DuplicateClassLint;

impl Lint for DuplicateClassLint {
    fn name(&self) -> &'static str {
        "duplicate-class"
    }

    fn check(&self, _schema: &Schema, names: &NamingContext, diagnostics: &mut Vec<Diagnostic>) {
        let mut services: HashMap<&str, &str> = HashMap::new();
        let mut handlers: HashMap<&str, String> = HashMap::new();

        for service in names.services() {
            if let Some(first) = services.insert(service.java_class.as_str(), service.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "service '{}' derives class '{}' (conflicts with service '{}')",
                            service.name, service.java_class, first
                        ),
                    )
                    .at(format!("service.{}", service.name)),
                );
            }

            for method in &service.methods {
                let path = format!("{}.{}", service.name, method.name);
                if let Some(first) = handlers.get(method.handler_class.as_str()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "method '{}' derives handler '{}' (conflicts with '{}')",
                                path, method.handler_class, first
                            ),
                        )
                        .at(format!("service.{}.method.{}", service.name, method.name)),
                    );
                } else {
                    handlers.insert(method.handler_class.as_str(), path);
                }
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
    fn test_distinct_classes() {
        let mut schema = Schema::new("x.proto");
        let ping = schema.add_message(Message::new("Ping"));
        schema.add_service(Service::new("A").method("Get", ping, ping));
        schema.add_service(Service::new("B").method("List", ping, ping));

        assert!(run(&DuplicateClassLint, &schema).is_empty());
    }

    #[test]
    fn test_duplicate_service() {
        let mut schema = Schema::new("x.proto");
        schema.add_service(Service::new("Billing"));
        schema.add_service(Service::new("Billing"));

        let diagnostics = run(&DuplicateClassLint, &schema);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("BillingService"));
    }

    #[test]
    fn test_handler_shared_across_services() {
        let mut schema = Schema::new("x.proto");
        let ping = schema.add_message(Message::new("Ping"));
        schema.add_service(Service::new("A").method("Get", ping, ping));
        schema.add_service(Service::new("B").method("Get", ping, ping));

        let diagnostics = run(&DuplicateClassLint, &schema);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "method 'B.Get' derives handler 'AbstractGetHandler' (conflicts with 'A.Get')"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("service.B.method.Get"));
    }
}
