//! One artifact type per generated Java file.

mod handler_java;
mod service_java;

pub use handler_java::HandlerJava;
pub use service_java::ServiceJava;

use rpcgen_codegen::builder::Printer;

/// `package <name>;` followed by a blank line.
fn print_package(p: &mut Printer<'_>, package: &str) {
    p.print("package $package$;\n", &[("package", package)]).blank();
}

/// One `import` per entry, then a blank line.
fn print_imports<'a>(p: &mut Printer<'_>, imports: impl IntoIterator<Item = &'a str>) {
    for import in imports {
        p.print("import $type$;\n", &[("type", import)]);
    }
    p.blank();
}

/// Simple name of a fully-qualified class.
fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}
