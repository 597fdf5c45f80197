use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{
    builder::{Indent, Printer},
    generation::GeneratedFile,
    naming::NamingContext,
};

use crate::Define;

/// Sample of the endpoint configuration module: one empty path per service.
///
/// The file is rewritten on every run; deployments are expected to replace
/// it with their own copy.
pub struct ConstantsJs<'a> {
    names: &'a NamingContext,
}

impl<'a> ConstantsJs<'a> {
    pub fn new(names: &'a NamingContext) -> Self {
        Self { names }
    }
}

impl GeneratedFile for ConstantsJs<'_> {
    fn path(&self) -> PathBuf {
        self.names.client().constants_path.clone()
    }

    fn indent(&self) -> Indent {
        Indent::JAVASCRIPT
    }

    fn print(&self, p: &mut Printer<'_>) -> Result<()> {
        let services = self.names.services();
        Define::new().print(p, |p| {
            p.block("return {\n", "};\n", &[], |p| {
                for (i, service) in services.iter().enumerate() {
                    let separator = if i + 1 < services.len() { "," } else { "" };
                    p.print(
                        "'$key$': ''$sep$\n",
                        &[("key", service.endpoint_key.as_str()), ("sep", separator)],
                    );
                }
            });
        });
        Ok(())
    }
}
