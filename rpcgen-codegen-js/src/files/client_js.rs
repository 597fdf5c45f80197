use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{
    builder::{Indent, Printer},
    generation::GeneratedFile,
    naming::{MethodNames, NamingContext, ServiceNames},
};

use crate::Define;

const CALL: &str = r#"$class$.prototype.$fn$ = function(requestArgument) {
  return new Promise(function(resolve, reject) {
    if (!(requestArgument instanceof $input$)) {
      reject(new Error('Invalid argument.'));
    } else {
      var value = requestArgument.toBase64();

      $$.ajax({
        type: 'POST',
        url: constants.$endpoint$,
        data: 'rpc_method_type=$method$&rpc_method_argument=' + encodeURIComponent(value)
      }).done(function(data) {
        resolve($output$.decode(data));
      }).fail(function(error) {
        reject(error);
      });
    }
  });
};
"#;

/// The asynchronous client stub of one service.
///
/// Each method validates its argument, posts it once to the service endpoint
/// and decodes the response. There is no retry and no timeout.
pub struct ClientJs<'a> {
    names: &'a NamingContext,
    service: &'a ServiceNames,
}

impl<'a> ClientJs<'a> {
    pub fn new(names: &'a NamingContext, service: &'a ServiceNames) -> Self {
        Self { names, service }
    }

    fn print_method(&self, p: &mut Printer<'_>, method: &MethodNames) {
        let input = &self.names.message(method.input).js_module;
        let output = &self.names.message(method.output).js_module;
        p.blank().print(
            CALL,
            &[
                ("class", self.service.js_class.as_str()),
                ("fn", method.js_fn.as_str()),
                ("method", method.name.as_str()),
                ("endpoint", self.service.endpoint_key.as_str()),
                ("input", input.as_str()),
                ("output", output.as_str()),
            ],
        );
    }
}

impl GeneratedFile for ClientJs<'_> {
    fn path(&self) -> PathBuf {
        self.service.js_path.clone()
    }

    fn indent(&self) -> Indent {
        Indent::JAVASCRIPT
    }

    fn print(&self, p: &mut Printer<'_>) -> Result<()> {
        let define = self
            .service
            .client_imports
            .keys()
            .fold(
                Define::new()
                    .dep("protobuf", "protobuf")
                    .dep("jquery", "$")
                    .dep("constants", "constants"),
                |define, module| define.dep(module, module),
            );

        let class = self.service.js_class.as_str();
        define.print(p, |p| {
            p.print("var $class$ = function() {};\n", &[("class", class)]);
            for method in &self.service.methods {
                self.print_method(p, method);
            }
            p.blank().print("return $class$;\n", &[("class", class)]);
        });
        Ok(())
    }
}
