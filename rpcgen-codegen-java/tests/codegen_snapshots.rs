//! Snapshot tests for Java code generation.
//!
//! These tests verify that the generated Java code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::{Path, PathBuf};

use rpcgen_codegen::{naming::NamingContext, testing};
use rpcgen_codegen_java::{Backend, HandlerBackend, ServiceBackend};
use rpcgen_core::MemorySink;
use rpcgen_schema::{GeneratorOptions, Schema};

/// Run both Java backends into memory and return the sink with the paths
/// in emission order.
fn generate(schema: &Schema, options: &GeneratorOptions) -> (MemorySink, Vec<PathBuf>) {
    let names = NamingContext::build(schema, options);
    let mut sink = MemorySink::new();
    let mut paths = HandlerBackend.emit(&names, &mut sink).expect("handlers failed");
    paths.extend(ServiceBackend.emit(&names, &mut sink).expect("services failed"));
    (sink, paths)
}

fn get_file<'a>(sink: &'a MemorySink, path: &str) -> &'a str {
    sink.get_str(path)
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_billing_handler() {
    let (sink, _) = generate(&testing::billing(), &GeneratorOptions::default());
    let handler = get_file(&sink, "org/example/billing/handlers/AbstractChargeHandler.java");
    insta::assert_snapshot!("billing_handler", handler);
}

#[test]
fn test_billing_service() {
    let (sink, _) = generate(&testing::billing(), &GeneratorOptions::default());
    let service = get_file(&sink, "org/example/billing/BillingService.java");
    insta::assert_snapshot!("billing_service", service);
}

#[test]
fn test_legacy_service() {
    let options = GeneratorOptions::from_parameter("nano=true,runtime_package=com.acme.rpc");
    let (sink, _) = generate(&testing::orders(), &options);
    let service = get_file(&sink, "org/example/shop/nano/ReceiptsService.java");
    insta::assert_snapshot!("legacy_receipts_service", service);
}

#[test]
fn test_emission_order() {
    let (sink, paths) = generate(&testing::orders(), &GeneratorOptions::default());

    let expected = [
        "org/example/shop/handlers/AbstractGetHandler.java",
        "org/example/shop/handlers/AbstractListHandler.java",
        "org/example/shop/handlers/AbstractTouchHandler.java",
        "org/example/shop/handlers/AbstractFindHandler.java",
        "org/example/shop/OrdersService.java",
        "org/example/shop/ReceiptsService.java",
    ];
    let expected: Vec<_> = expected.iter().map(Path::new).collect();
    assert_eq!(paths.iter().map(PathBuf::as_path).collect::<Vec<_>>(), expected);
    assert_eq!(sink.paths().collect::<Vec<_>>(), expected);
}

#[test]
fn test_one_handler_per_method() {
    let schema = testing::orders();
    let (sink, _) = generate(&schema, &GeneratorOptions::default());

    let handlers = sink
        .paths()
        .filter(|p| p.starts_with("org/example/shop/handlers"))
        .count();
    assert_eq!(handlers, schema.method_count());
    assert_eq!(sink.len(), schema.method_count() + schema.services.len());
}

#[test]
fn test_generation_is_deterministic() {
    let schema = testing::orders();
    let (first, _) = generate(&schema, &GeneratorOptions::default());
    let (second, _) = generate(&schema, &GeneratorOptions::default());
    assert_eq!(first.files(), second.files());
}
