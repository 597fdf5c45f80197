//! Snapshot tests for JavaScript client generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{fs, path::Path};

use rpcgen_codegen::{naming::NamingContext, testing};
use rpcgen_codegen_js::{Backend, ClientBackend};
use rpcgen_core::{DirSink, MemorySink};
use rpcgen_schema::{GeneratorOptions, Schema};
use tempfile::TempDir;

const BILLING_PROTO: &str = r#"syntax = "proto3";

package billing;

message CreditCard {
  string number = 1;
  int32 cvc = 2;
}

message Receipt {
  string id = 1;
}

service Billing {
  rpc Charge (CreditCard) returns (Receipt);
}
"#;

/// Write the schema source under `<temp>/src/main/proto/` and run the client
/// backend into memory.
fn generate(schema: &Schema, options: &GeneratorOptions) -> (TempDir, MemorySink) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let source = temp.path().join(options.proto_root()).join(&schema.file);
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, BILLING_PROTO).unwrap();

    let names = NamingContext::build(schema, options);
    let mut sink = MemorySink::new();
    ClientBackend::new()
        .with_source_dir(temp.path())
        .emit(&names, &mut sink)
        .expect("client generation failed");
    (temp, sink)
}

#[test]
fn test_billing_stub() {
    let (_temp, sink) = generate(&testing::billing(), &GeneratorOptions::default());
    let stub = sink
        .get_str("src/main/webapp/build/scripts/Billing.js")
        .expect("Billing.js not generated");
    insta::assert_snapshot!("billing_stub", stub);
}

#[test]
fn test_billing_loader() {
    let (_temp, sink) = generate(&testing::billing(), &GeneratorOptions::default());
    let loader = sink
        .get_str("src/main/webapp/build/scripts/creditCard.js")
        .expect("creditCard.js not generated");
    insta::assert_snapshot!("billing_loader", loader);
}

#[test]
fn test_billing_file_set() {
    let (_temp, sink) = generate(&testing::billing(), &GeneratorOptions::default());
    let paths: Vec<_> = sink.paths().collect();
    assert_eq!(
        paths,
        vec![
            Path::new("src/main/webapp/build/scripts/Billing.js"),
            Path::new("src/main/webapp/build/scripts/creditCard.js"),
            Path::new("src/main/webapp/build/scripts/receipt.js"),
            Path::new("src/main/webapp/build/scripts/constants.js"),
            Path::new("src/main/webapp/build/res/billing.proto"),
        ]
    );
    assert_eq!(
        sink.get_str("src/main/webapp/build/scripts/constants.js"),
        Some("define(function() {\n  return {\n    'BillingPath': ''\n  };\n});\n")
    );
    assert_eq!(
        sink.get_str("src/main/webapp/build/res/billing.proto"),
        Some(BILLING_PROTO)
    );
}

#[test]
fn test_client_root_override() {
    let options = GeneratorOptions::from_parameter("js_path=web,proto_root=protos");
    let (_temp, sink) = generate(&testing::orders(), &options);

    assert!(sink.get("web/build/scripts/Orders.js").is_some());
    assert!(sink.get("web/build/scripts/Receipts.js").is_some());
    assert!(sink.get("web/build/res/orders.proto").is_some());
    // Services plus messages plus constants plus schema copy.
    assert_eq!(sink.len(), 2 + 3 + 1 + 1);
}

#[test]
fn test_missing_schema_source_aborts() {
    let temp = TempDir::new().unwrap();
    let schema = testing::billing();
    let names = NamingContext::build(&schema, &GeneratorOptions::default());

    let mut sink = DirSink::new(temp.path().join("out"));
    let err = ClientBackend::new()
        .with_source_dir(temp.path())
        .emit(&names, &mut sink)
        .unwrap_err();

    assert!(err.to_string().contains("failed to open schema source"));
    // Artifacts written before the failure stay on disk.
    let stub = temp.path().join("out/src/main/webapp/build/scripts/Billing.js");
    assert!(stub.exists());
}
