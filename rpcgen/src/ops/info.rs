use rpcgen_codegen::naming::NamingContext;
use rpcgen_schema::{GeneratorOptions, SchemaFile};

use crate::reports::InfoReport;

/// Derive every name and path for a descriptor.
pub fn info(file: &SchemaFile, options: GeneratorOptions) -> InfoReport {
    let names = NamingContext::build(file.schema(), &options);
    InfoReport {
        config_path: file.path().to_path_buf(),
        options,
        names,
    }
}
