use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{
    builder::{Indent, Printer},
    generation::GeneratedFile,
    naming::{NamingContext, ServiceNames},
};

use super::{print_imports, print_package};
use crate::GENERATED_BY;

const HANDLER_LOOKUP: &str = r#"@Override
protected RpcCallHandler getRpcCallHandler(String method) {
  final RpcCallHandler rpcCallHandler = handlers.get(method);
  if (rpcCallHandler == null) {
    throw new IllegalStateException("No handler registered for method: " + method);
  }
  return rpcCallHandler;
}
"#;

/// The service scaffold: a registry of one handler per method.
///
/// The required-handler list and the registration methods are both derived
/// from the service's methods in declaration order, so they always agree.
pub struct ServiceJava<'a> {
    names: &'a NamingContext,
    service: &'a ServiceNames,
}

impl<'a> ServiceJava<'a> {
    pub fn new(names: &'a NamingContext, service: &'a ServiceNames) -> Self {
        Self { names, service }
    }

    fn print_imports(&self, p: &mut Printer<'_>) {
        let java = self.names.java();
        let base = format!("{}.AbstractRpcService", java.runtime_package);
        let handler = format!("{}.RpcCallHandler", java.runtime_package);
        let handlers = format!("{}.*", java.handlers_package);

        print_imports(p, [base.as_str(), handler.as_str()]);
        print_imports(
            p,
            ["java.util.HashMap", "java.util.Map", "javax.annotation.Generated"],
        );
        print_imports(p, [handlers.as_str()]);
        if java.legacy {
            print_imports(p, ["java.io.IOException"]);
        }
    }

    fn print_required_handlers(&self, p: &mut Printer<'_>) {
        let methods = &self.service.methods;
        p.block(
            "private static final String[] requiredMethodHandlers = {\n",
            "};\n",
            &[],
            |p| {
                for (i, method) in methods.iter().enumerate() {
                    let separator = if i + 1 < methods.len() { "," } else { "" };
                    p.print(
                        "\"$method$\"$sep$\n",
                        &[("method", method.name.as_str()), ("sep", separator)],
                    );
                }
            },
        );
    }

    fn print_registration(&self, p: &mut Printer<'_>) {
        for method in &self.service.methods {
            let vars = [
                ("register", method.register_fn.as_str()),
                ("handler", method.handler_class.as_str()),
                ("method", method.name.as_str()),
            ];
            p.blank().block(
                "public void $register$($handler$ handler) {\n",
                "}\n",
                &vars,
                |p| {
                    p.print("handlers.put(\"$method$\", handler);\n", &vars);
                },
            );
        }
    }
}

impl GeneratedFile for ServiceJava<'_> {
    fn path(&self) -> PathBuf {
        self.service.java_path.clone()
    }

    fn indent(&self) -> Indent {
        Indent::JAVA
    }

    fn print(&self, p: &mut Printer<'_>) -> Result<()> {
        let package = &self.names.java().package;
        if !package.is_empty() {
            print_package(p, package);
        }
        self.print_imports(p);

        p.print("@Generated(\"$by$\")\n", &[("by", GENERATED_BY)]);
        p.print(
            "public class $class$ extends AbstractRpcService {\n",
            &[("class", self.service.java_class.as_str())],
        );
        p.indent().blank();

        self.print_required_handlers(p);
        p.blank()
            .line("private final Map<String, RpcCallHandler> handlers = new HashMap<>();")
            .blank()
            .line("@Override")
            .block("protected String[] getRequiredMethodHandlers() {\n", "}\n", &[], |p| {
                p.line("return requiredMethodHandlers;");
            })
            .blank()
            .text(HANDLER_LOOKUP);
        self.print_registration(p);

        p.outdent().line("}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rpcgen_codegen::testing;
    use rpcgen_schema::GeneratorOptions;

    use super::*;

    fn render(names: &NamingContext, index: usize) -> String {
        ServiceJava::new(names, &names.services()[index]).render().unwrap()
    }

    #[test]
    fn test_required_handlers_match_registration() {
        let names = testing::names(&testing::orders());
        let code = render(&names, 0);

        assert!(code.contains("  private static final String[] requiredMethodHandlers = {\n    \"Get\",\n    \"List\",\n    \"Touch\"\n  };\n"));
        let registered: Vec<_> = code
            .lines()
            .filter_map(|line| line.trim().strip_prefix("handlers.put(\""))
            .map(|rest| rest.split('"').next().unwrap_or_default())
            .collect();
        assert_eq!(registered, vec!["Get", "List", "Touch"]);
    }

    #[test]
    fn test_legacy_imports_io_exception() {
        let schema = testing::billing();
        let names = NamingContext::build(&schema, &GeneratorOptions::from_parameter("nano=true"));
        let service = &names.services()[0];
        assert_eq!(
            ServiceJava::new(&names, service).path(),
            Path::new("org/example/billing/nano/BillingService.java")
        );

        let code = render(&names, 0);
        assert!(code.starts_with("package org.example.billing.nano;\n"));
        assert!(code.contains("import org.example.billing.nano.handlers.*;\n\nimport java.io.IOException;\n\n@Generated"));
    }

    #[test]
    fn test_empty_namespace_omits_package() {
        let names = testing::names(&testing::unpackaged());
        let code = render(&names, 0);

        assert!(code.starts_with("import org.rpcgen.runtime.AbstractRpcService;\n"));
        assert!(code.contains("import handlers.*;\n"));
        assert_eq!(
            ServiceJava::new(&names, &names.services()[0]).path(),
            Path::new("HealthService.java")
        );
    }

    #[test]
    fn test_service_without_methods() {
        let mut schema = rpcgen_schema::Schema::new("empty.proto");
        schema.add_service(rpcgen_schema::Service::new("Idle"));
        let names = testing::names(&schema);
        let code = render(&names, 0);

        assert!(code.contains("requiredMethodHandlers = {\n  };\n"));
        assert!(!code.contains("public void register"));
    }
}
