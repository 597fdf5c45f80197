//! Name derivation rules.
//!
//! Every function here is pure and total: empty names propagate as empty
//! identifiers and are reported by lints instead.

use rpcgen_core::to_pascal_case;
use rpcgen_schema::{Message, Method, Schema, Service};

pub use rpcgen_core::lower_first;

/// Language a derived identifier is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Java,
    JavaScript,
}

/// Class name of a service in the given target
/// (`BillingService` for Java, `Billing` for JavaScript).
pub fn service_class_name(service: &Service, target: Target) -> String {
    match target {
        Target::Java => format!("{}Service", service.name),
        Target::JavaScript => service.name.clone(),
    }
}

/// `Abstract<Method>Handler`.
pub fn handler_class_name(method: &Method) -> String {
    format!("Abstract{}Handler", method.name)
}

/// `register<Method>Handler`.
pub fn register_fn_name(method: &Method) -> String {
    format!("register{}Handler", method.name)
}

/// Key of the service endpoint in the client constants module.
pub fn endpoint_key(service: &Service) -> String {
    format!("{}Path", service_class_name(service, Target::JavaScript))
}

/// Java outer class of the schema file.
///
/// Defaults to the PascalCase stem of the source file
/// (`billing_service.proto` -> `BillingService`), with `OuterClass` appended
/// when a message or service already has that name.
pub fn outer_class_name(schema: &Schema) -> String {
    if let Some(name) = &schema.java_outer_classname {
        return name.clone();
    }
    let name = schema.file_name();
    let stem = name
        .strip_suffix(".protodevel")
        .or_else(|| name.strip_suffix(".proto"))
        .unwrap_or(name);
    let default = to_pascal_case(stem);

    let conflicts = schema.messages().any(|(_, message)| message.name == default)
        || schema.services.iter().any(|service| service.name == default);
    if conflicts {
        format!("{default}OuterClass")
    } else {
        default
    }
}

/// Fully-qualified Java outer class (`<java package>.<OuterClass>`).
pub fn outer_class_fqn(schema: &Schema) -> String {
    join(java_package(schema), &outer_class_name(schema))
}

/// Java namespace of the generated service scaffolds.
///
/// The fully-qualified outer class is truncated at its last `.`. In legacy
/// mode `nano` is appended unless the schema opts out.
pub fn package_name(schema: &Schema, legacy: bool) -> String {
    let fqn = outer_class_fqn(schema);
    let base = fqn.rfind('.').map_or("", |pos| &fqn[..pos]);
    if legacy && !schema.use_deprecated_package {
        join(base, "nano")
    } else {
        base.to_string()
    }
}

/// Directory of a Java namespace, with a trailing `/` when non-empty.
pub fn package_path(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{}/", namespace.replace('.', "/"))
    }
}

/// Java package of the handler classes.
pub fn handlers_package(namespace: &str) -> String {
    join(namespace, "handlers")
}

/// Name used by loaders to look a message up in the compiled schema.
pub fn qualified_message_name(schema: &Schema, message: &Message) -> String {
    join(&schema.package, &message.name)
}

/// Fully-qualified Java class of a message: nested in the outer class, or
/// top-level in the Java package with `java_multiple_files`.
pub fn message_java_class(schema: &Schema, message: &Message) -> String {
    if schema.java_multiple_files {
        join(java_package(schema), &message.name)
    } else {
        join(&outer_class_fqn(schema), &message.name)
    }
}

fn java_package(schema: &Schema) -> &str {
    schema.java_package.as_deref().unwrap_or(&schema.package)
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
