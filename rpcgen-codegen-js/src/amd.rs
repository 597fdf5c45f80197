//! AMD `define` wrapper shared by every client module.

use rpcgen_codegen::builder::Printer;

/// An AMD module definition: dependency ids bound to factory parameters.
///
/// ```
/// use rpcgen_codegen::builder::{Indent, Printer};
/// use rpcgen_codegen_js::Define;
///
/// let mut out = Vec::new();
/// let mut p = Printer::new(&mut out, Indent::JAVASCRIPT);
/// Define::new().dep("protobuf", "protobuf").print(&mut p, |p| {
///     p.line("return protobuf;");
/// });
/// p.finish().unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "define(['protobuf'], function(protobuf) {\n  return protobuf;\n});\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Define<'a> {
    deps: Vec<(&'a str, &'a str)>,
}

impl<'a> Define<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depend on module `id`, bound to `param` in the factory.
    pub fn dep(mut self, id: &'a str, param: &'a str) -> Self {
        self.deps.push((id, param));
        self
    }

    /// Print the module with `body` as the factory body.
    pub fn print<F>(&self, p: &mut Printer<'_>, body: F)
    where
        F: FnOnce(&mut Printer<'_>),
    {
        if self.deps.is_empty() {
            p.line("define(function() {");
        } else {
            let ids = self
                .deps
                .iter()
                .map(|(id, _)| format!("'{id}'"))
                .collect::<Vec<_>>()
                .join(", ");
            let params = self
                .deps
                .iter()
                .map(|(_, param)| *param)
                .collect::<Vec<_>>()
                .join(", ");
            p.print(
                "define([$ids$], function($params$) {\n",
                &[("ids", ids.as_str()), ("params", params.as_str())],
            );
        }
        p.indent();
        body(p);
        p.outdent().line("});");
    }
}

#[cfg(test)]
mod tests {
    use rpcgen_codegen::builder::Indent;

    use super::*;

    fn render(define: &Define<'_>, body: &str) -> String {
        let mut out = Vec::new();
        let mut p = Printer::new(&mut out, Indent::JAVASCRIPT);
        define.print(&mut p, |p| {
            p.text(body);
        });
        p.finish().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_without_dependencies() {
        assert_eq!(
            render(&Define::new(), "return {};\n"),
            "define(function() {\n  return {};\n});\n"
        );
    }

    #[test]
    fn test_dependency_order_is_kept() {
        let define = Define::new()
            .dep("protobuf", "protobuf")
            .dep("jquery", "$")
            .dep("order", "order");
        assert_eq!(
            render(&define, ""),
            "define(['protobuf', 'jquery', 'order'], function(protobuf, $, order) {\n});\n"
        );
    }
}
