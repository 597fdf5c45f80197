use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{
    builder::{Indent, Printer},
    generation::GeneratedFile,
    naming::{MessageNames, NamingContext},
};

use crate::Define;

/// Module resolving one message type from the compiled schema copy.
pub struct LoaderJs<'a> {
    names: &'a NamingContext,
    message: &'a MessageNames,
}

impl<'a> LoaderJs<'a> {
    pub fn new(names: &'a NamingContext, message: &'a MessageNames) -> Self {
        Self { names, message }
    }
}

impl GeneratedFile for LoaderJs<'_> {
    fn path(&self) -> PathBuf {
        self.message.loader_path.clone()
    }

    fn indent(&self) -> Indent {
        Indent::JAVASCRIPT
    }

    fn print(&self, p: &mut Printer<'_>) -> Result<()> {
        let vars = [
            ("url", self.names.client().schema_url.as_str()),
            ("type", self.message.qualified_name.as_str()),
        ];
        Define::new().dep("protobuf", "protobuf").print(p, |p| {
            p.print("var builder = protobuf.loadProtoFile('$url$');\n", &vars)
                .print("return builder.build('$type$');\n", &vars);
        });
        Ok(())
    }
}
