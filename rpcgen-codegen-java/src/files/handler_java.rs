use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{
    builder::{Indent, Printer},
    generation::GeneratedFile,
    naming::{MethodNames, NamingContext},
};

use super::{print_imports, print_package, simple_name};
use crate::GENERATED_BY;

/// The abstract handler class of one method.
///
/// The class only binds the method's input and output types to the runtime
/// handler interface; implementations extend it by hand.
pub struct HandlerJava<'a> {
    names: &'a NamingContext,
    method: &'a MethodNames,
}

impl<'a> HandlerJava<'a> {
    pub fn new(names: &'a NamingContext, method: &'a MethodNames) -> Self {
        Self { names, method }
    }
}

impl GeneratedFile for HandlerJava<'_> {
    fn path(&self) -> PathBuf {
        self.method.handler_path.clone()
    }

    fn indent(&self) -> Indent {
        Indent::JAVA
    }

    fn print(&self, p: &mut Printer<'_>) -> Result<()> {
        let java = self.names.java();
        let handler_interface = format!("{}.RpcCallHandler", java.runtime_package);

        print_package(p, &java.handlers_package);
        print_imports(p, [handler_interface.as_str()]);
        print_imports(p, self.names.handler_imports(self.method));
        print_imports(p, ["javax.annotation.Generated"]);

        let input = &self.names.message(self.method.input).java_class;
        let output = &self.names.message(self.method.output).java_class;
        p.print("@Generated(\"$by$\")\n", &[("by", GENERATED_BY)]);
        p.block(
            "public abstract class $class$ implements RpcCallHandler<$in$, $out$> {\n\n",
            "}\n",
            &[
                ("class", self.method.handler_class.as_str()),
                ("in", simple_name(input)),
                ("out", simple_name(output)),
            ],
            |_| {},
        );
        Ok(())
    }
}
