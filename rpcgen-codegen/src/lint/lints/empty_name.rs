use rpcgen_schema::Schema;

use crate::{
    lint::{Diagnostic, Lint},
    naming::NamingContext,
};

/// Lint that warns about services, methods and messages without a name.
pub struct EmptyNameLint;

impl Lint for EmptyNameLint {
    fn name(&self) -> &'static str {
        "empty-name"
    }

    fn check(&self, schema: &Schema, _names: &NamingContext, diagnostics: &mut Vec<Diagnostic>) {
        for (index, service) in schema.services.iter().enumerate() {
            if service.name.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(self.name(), "service has an empty name")
                        .at(format!("service[{index}]")),
                );
            }
            for (m, method) in service.methods.iter().enumerate() {
                if method.name.is_empty() {
                    diagnostics.push(
                        Diagnostic::warning(self.name(), "method has an empty name")
                            .at(format!("service.{}.method[{m}]", service.name)),
                    );
                }
            }
        }

        for (id, message) in schema.messages() {
            if message.name.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(self.name(), "message has an empty name")
                        .at(format!("message[{}]", id.index())),
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
    fn test_empty_names() {
        let mut schema = Schema::new("x.proto");
        let empty = schema.add_message(Message::new(""));
        schema.add_service(Service::new("").method("Get", empty, empty));
        schema.add_service(Service::new("Orders").method("", empty, empty));

        let locations: Vec<_> = run(&EmptyNameLint, &schema)
            .into_iter()
            .filter_map(|d| d.location)
            .collect();
        assert_eq!(
            locations,
            vec!["service[0]", "service.Orders.method[0]", "message[0]"]
        );
    }
}
