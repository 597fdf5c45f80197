use rpcgen_codegen::{lint::Linter, naming::NamingContext};
use rpcgen_schema::{GeneratorOptions, SchemaFile};

use crate::reports::CheckReport;

/// Lint a descriptor without generating anything.
pub fn check(file: &SchemaFile, options: &GeneratorOptions) -> CheckReport {
    let schema = file.schema();
    let names = NamingContext::build(schema, options);
    let diagnostics = Linter::new().run(schema, &names);

    CheckReport {
        config_path: file.path().to_path_buf(),
        schema_file: schema.file.clone(),
        services: schema.services.len(),
        methods: schema.method_count(),
        messages: schema.message_count(),
        diagnostics,
    }
}
