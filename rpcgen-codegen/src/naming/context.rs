//! The immutable record of derived names shared by all backends.

use std::path::PathBuf;

use rpcgen_schema::{GeneratorOptions, MessageId, Method, Schema, Service};
use serde::Serialize;

use super::resolver::{self, Target, lower_first};
use crate::generation::ImportSet;

/// Java namespace layout of the server-side artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct JavaLayout {
    /// Namespace of the service scaffolds (may be empty).
    pub package: String,
    /// Directory of `package`, empty or ending in `/`.
    pub package_dir: String,
    /// Namespace of the handler classes.
    pub handlers_package: String,
    /// Directory of the handler classes, ending in `/`.
    pub handlers_dir: String,
    /// Java package of `AbstractRpcService` and `RpcCallHandler`.
    pub runtime_package: String,
    /// Legacy dialect.
    pub legacy: bool,
}

/// Layout of the client-side artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct ClientLayout {
    /// Directory of the AMD modules (`<client root>build/scripts/`).
    pub scripts_dir: String,
    /// Directory of the schema copy (`<client root>build/res/`).
    pub res_dir: String,
    pub constants_path: PathBuf,
    pub schema_copy_path: PathBuf,
    /// Schema source the copy is read from.
    pub schema_source: PathBuf,
    /// URL loaders fetch the schema copy from, relative to the web root.
    pub schema_url: String,
}

/// Derived names of one service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceNames {
    pub name: String,
    pub java_class: String,
    pub java_path: PathBuf,
    pub js_class: String,
    pub js_path: PathBuf,
    /// Key of this service's endpoint in the constants module.
    pub endpoint_key: String,
    /// Methods in declaration order.
    pub methods: Vec<MethodNames>,
    /// Message modules the client stub depends on, keyed by module identifier.
    #[serde(skip)]
    pub client_imports: ImportSet<MessageId>,
}

/// Derived names of one method.
#[derive(Debug, Clone, Serialize)]
pub struct MethodNames {
    pub name: String,
    pub handler_class: String,
    pub handler_path: PathBuf,
    pub register_fn: String,
    /// Name of the client stub function.
    pub js_fn: String,
    pub input: MessageId,
    pub output: MessageId,
}

/// Derived names of one message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageNames {
    pub name: String,
    /// Fully-qualified Java class.
    pub java_class: String,
    /// Name in the compiled schema.
    pub qualified_name: String,
    /// AMD module identifier (`creditCard`).
    pub js_module: String,
    pub loader_path: PathBuf,
}

/// Every identifier and path derived from a schema, computed once per run.
///
/// Backends only read from the context, so all artifacts agree on the names
/// they reference.
#[derive(Debug, Clone, Serialize)]
pub struct NamingContext {
    schema_file: String,
    java: JavaLayout,
    client: ClientLayout,
    services: Vec<ServiceNames>,
    messages: Vec<MessageNames>,
}

impl NamingContext {
    /// Derive all names for `schema` under `options`.
    pub fn build(schema: &Schema, options: &GeneratorOptions) -> Self {
        let package = resolver::package_name(schema, options.legacy);
        let package_dir = resolver::package_path(&package);
        let handlers_package = resolver::handlers_package(&package);
        let handlers_dir = format!("{package_dir}handlers/");
        let java = JavaLayout {
            package,
            package_dir,
            handlers_package,
            handlers_dir,
            runtime_package: options.runtime_package().to_string(),
            legacy: options.legacy,
        };

        let client_root = options.client_root();
        let scripts_dir = format!("{client_root}build/scripts/");
        let res_dir = format!("{client_root}build/res/");
        let file_name = schema.file_name();
        let client = ClientLayout {
            constants_path: PathBuf::from(format!("{scripts_dir}constants.js")),
            schema_copy_path: PathBuf::from(format!("{res_dir}{file_name}")),
            schema_source: PathBuf::from(format!("{}{}", options.proto_root(), schema.file)),
            schema_url: format!("build/res/{file_name}"),
            scripts_dir,
            res_dir,
        };

        let messages = schema
            .messages()
            .map(|(_, message)| {
                let js_module = lower_first(&message.name);
                MessageNames {
                    name: message.name.clone(),
                    java_class: resolver::message_java_class(schema, message),
                    qualified_name: resolver::qualified_message_name(schema, message),
                    loader_path: PathBuf::from(format!("{}{js_module}.js", client.scripts_dir)),
                    js_module,
                }
            })
            .collect::<Vec<_>>();

        let services = schema
            .services
            .iter()
            .map(|service| service_names(service, &java, &client, &messages))
            .collect::<Vec<_>>();

        tracing::debug!(
            package = %java.package,
            services = services.len(),
            messages = messages.len(),
            "derived naming context"
        );

        Self {
            schema_file: file_name.to_string(),
            java,
            client,
            services,
            messages,
        }
    }

    /// File name of the schema source.
    pub fn schema_file(&self) -> &str {
        &self.schema_file
    }

    pub fn java(&self) -> &JavaLayout {
        &self.java
    }

    pub fn client(&self) -> &ClientLayout {
        &self.client
    }

    /// Services in declaration order.
    pub fn services(&self) -> &[ServiceNames] {
        &self.services
    }

    /// Messages in declaration order.
    pub fn messages(&self) -> &[MessageNames] {
        &self.messages
    }

    /// Names of the message with the given id.
    pub fn message(&self, id: MessageId) -> &MessageNames {
        &self.messages[id.index()]
    }

    /// Java types a handler imports: the input and, only if distinct, the
    /// output.
    pub fn handler_imports(&self, method: &MethodNames) -> Vec<&str> {
        let mut imports = vec![self.message(method.input).java_class.as_str()];
        if method.output != method.input {
            imports.push(self.message(method.output).java_class.as_str());
        }
        imports
    }

    /// Total number of methods across all services.
    pub fn method_count(&self) -> usize {
        self.services.iter().map(|s| s.methods.len()).sum()
    }
}

fn service_names(
    service: &Service,
    java: &JavaLayout,
    client: &ClientLayout,
    messages: &[MessageNames],
) -> ServiceNames {
    let java_class = resolver::service_class_name(service, Target::Java);
    let js_class = resolver::service_class_name(service, Target::JavaScript);

    let mut client_imports = ImportSet::new();
    for method in &service.methods {
        for id in [method.input, method.output] {
            client_imports.insert(messages[id.index()].js_module.clone(), id);
        }
    }

    ServiceNames {
        name: service.name.clone(),
        java_path: PathBuf::from(format!("{}{java_class}.java", java.package_dir)),
        js_path: PathBuf::from(format!("{}{js_class}.js", client.scripts_dir)),
        endpoint_key: resolver::endpoint_key(service),
        methods: service
            .methods
            .iter()
            .map(|method| method_names(method, java))
            .collect(),
        client_imports,
        java_class,
        js_class,
    }
}

fn method_names(method: &Method, java: &JavaLayout) -> MethodNames {
    let handler_class = resolver::handler_class_name(method);
    MethodNames {
        name: method.name.clone(),
        handler_path: PathBuf::from(format!("{}{handler_class}.java", java.handlers_dir)),
        register_fn: resolver::register_fn_name(method),
        js_fn: lower_first(&method.name),
        input: method.input,
        output: method.output,
        handler_class,
    }
}
