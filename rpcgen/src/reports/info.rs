//! Info command report.

use std::path::PathBuf;

use rpcgen_codegen::naming::NamingContext;
use rpcgen_schema::GeneratorOptions;
use serde::Serialize;

use super::output::{Output, Report};

/// Every name and path derived from a descriptor.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub config_path: PathBuf,
    pub options: GeneratorOptions,
    pub names: NamingContext,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        let names = &self.names;
        let java = names.java();
        let client = names.client();

        out.title(names.schema_file());
        out.key_value("Java package", or_none(&java.package));
        out.key_value("Handlers package", &java.handlers_package);
        out.key_value("Runtime package", &java.runtime_package);
        out.key_value("Dialect", if java.legacy { "legacy" } else { "standard" });
        out.key_value("Client scripts", &client.scripts_dir);
        out.key_value("Constants", &client.constants_path.display().to_string());
        out.key_value(
            "Schema copy",
            &format!(
                "{} -> {}",
                client.schema_source.display(),
                client.schema_copy_path.display()
            ),
        );

        if !names.services().is_empty() {
            out.newline();
            out.section("Services");
            for service in names.services() {
                out.list_item(&format!("{} ({})", service.name, service.endpoint_key));
                out.key_value_indented("java", &service.java_path.display().to_string());
                out.key_value_indented("client", &service.js_path.display().to_string());
                for method in &service.methods {
                    out.key_value_indented(
                        &method.js_fn,
                        &format!(
                            "{} -> {} via {}",
                            names.message(method.input).name,
                            names.message(method.output).name,
                            method.handler_class
                        ),
                    );
                }
            }
        }

        if !names.messages().is_empty() {
            out.newline();
            out.section("Messages");
            for message in names.messages() {
                out.list_item(&format!("{} -> {}", message.name, message.java_class));
                out.key_value_indented("loader", &message.loader_path.display().to_string());
            }
        }
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() { "(none)" } else { value }
}
