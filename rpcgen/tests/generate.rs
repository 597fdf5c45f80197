//! End-to-end generation tests through the engine.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rpcgen::{Engine, GenerateReport};
use rpcgen_codegen::{lint::Severity, testing};
use rpcgen_core::{DirSink, MemorySink};
use rpcgen_schema::{GeneratorOptions, Message, Schema, Service};
use tempfile::TempDir;

/// A temp dir holding the schema source under the configured proto root.
fn source_dir(schema: &Schema, options: &GeneratorOptions) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let source = temp.path().join(options.proto_root()).join(&schema.file);
    fs::create_dir_all(source.parent().unwrap()).unwrap();
    fs::write(&source, format!("// {}\n", schema.file)).unwrap();
    temp
}

fn generate(schema: &Schema, options: &GeneratorOptions) -> (MemorySink, GenerateReport) {
    let temp = source_dir(schema, options);
    let mut sink = MemorySink::new();
    let report = Engine::new()
        .with_source_dir(temp.path())
        .generate(schema, options, &mut sink)
        .expect("generation failed");
    (sink, report)
}

fn paths(sink: &MemorySink) -> Vec<&Path> {
    sink.paths().collect()
}

#[test]
fn test_billing_file_set() {
    let (sink, report) = generate(&testing::billing(), &GeneratorOptions::default());

    let expected = [
        "org/example/billing/handlers/AbstractChargeHandler.java",
        "org/example/billing/BillingService.java",
        "src/main/webapp/build/scripts/Billing.js",
        "src/main/webapp/build/scripts/creditCard.js",
        "src/main/webapp/build/scripts/receipt.js",
        "src/main/webapp/build/scripts/constants.js",
        "src/main/webapp/build/res/billing.proto",
    ];
    assert_eq!(paths(&sink), expected.iter().map(Path::new).collect::<Vec<_>>());
    assert_eq!(report.files().collect::<Vec<_>>(), paths(&sink));
    assert_eq!(
        report.backends.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
        vec!["handlers", "services", "client"]
    );
    assert_eq!(report.package, "org.example.billing");
    assert!(report.diagnostics.is_empty());
    assert!(report.skipped.is_empty());

    assert_eq!(
        sink.get_str("src/main/webapp/build/res/billing.proto"),
        Some("// billing.proto\n")
    );
}

#[test]
fn test_generation_is_deterministic() {
    let schema = testing::orders();
    let (first, _) = generate(&schema, &GeneratorOptions::default());
    let (second, _) = generate(&schema, &GeneratorOptions::default());
    assert_eq!(first.into_files(), second.into_files());
}

#[test]
fn test_client_imports_are_sorted_and_unique() {
    let (sink, _) = generate(&testing::orders(), &GeneratorOptions::default());
    let stub = sink
        .get_str("src/main/webapp/build/scripts/Orders.js")
        .expect("Orders.js not generated");

    let first_line = stub.lines().next().unwrap();
    assert_eq!(
        first_line,
        "define(['protobuf', 'jquery', 'constants', 'order', 'orderList', 'receipt'], \
         function(protobuf, $, constants, order, orderList, receipt) {"
    );
}

#[test]
fn test_required_handlers_match_registrations() {
    let (sink, _) = generate(&testing::orders(), &GeneratorOptions::default());
    let service = sink
        .get_str("org/example/shop/OrdersService.java")
        .expect("OrdersService.java not generated");

    let start = service.find("requiredMethodHandlers = {").unwrap();
    let end = start + service[start..].find("};").unwrap();
    let required: Vec<_> = service[start..end]
        .split('"')
        .skip(1)
        .step_by(2)
        .collect();
    let registered: Vec<_> = service
        .split("handlers.put(\"")
        .skip(1)
        .map(|rest| rest.split('"').next().unwrap())
        .collect();

    assert_eq!(required, vec!["Get", "List", "Touch"]);
    assert_eq!(registered, required);
}

#[test]
fn test_constants_list_every_service() {
    let (sink, _) = generate(&testing::orders(), &GeneratorOptions::default());
    let constants = sink
        .get_str("src/main/webapp/build/scripts/constants.js")
        .unwrap();

    assert!(constants.contains("'OrdersPath': ''"));
    assert!(constants.contains("'ReceiptsPath': ''"));
}

#[test]
fn test_legacy_and_client_root() {
    let options = GeneratorOptions::from_parameter("nano=true,js_path=web");
    let (sink, report) = generate(&testing::billing(), &options);

    assert_eq!(report.package, "org.example.billing.nano");
    let paths = paths(&sink);
    assert!(paths.contains(&Path::new("org/example/billing/nano/BillingService.java")));
    assert!(paths.contains(&Path::new(
        "org/example/billing/nano/handlers/AbstractChargeHandler.java"
    )));
    assert!(paths.contains(&Path::new("web/build/scripts/Billing.js")));
    assert!(paths.contains(&Path::new("web/build/res/billing.proto")));
}

#[test]
fn test_duplicate_service_is_generated_once() {
    let mut schema = Schema::new("health.proto").with_package("health");
    let ping = schema.add_message(Message::new("Ping"));
    schema.add_service(Service::new("Health").method("Check", ping, ping));
    schema.add_service(Service::new("Health").method("Check", ping, ping));

    let (sink, report) = generate(&schema, &GeneratorOptions::default());

    assert_eq!(
        report.skipped,
        vec![
            PathBuf::from("health/handlers/AbstractCheckHandler.java"),
            PathBuf::from("health/HealthService.java"),
            PathBuf::from("src/main/webapp/build/scripts/Health.js"),
        ]
    );
    assert_eq!(sink.len(), report.len());
    assert!(
        report
            .diagnostics
            .iter()
            .all(|d| d.severity == Severity::Warning)
    );
    assert!(report.diagnostics.iter().any(|d| d.code == "duplicate-class"));
}

#[test]
fn test_missing_source_keeps_earlier_artifacts() {
    let temp = TempDir::new().unwrap();
    let mut sink = MemorySink::new();
    let err = Engine::new()
        .with_source_dir(temp.path())
        .generate(&testing::billing(), &GeneratorOptions::default(), &mut sink)
        .unwrap_err();

    assert!(format!("{err:#}").contains("client generation failed"));
    assert!(
        sink.get("org/example/billing/BillingService.java")
            .is_some()
    );
    assert!(sink.get("src/main/webapp/build/res/billing.proto").is_none());
}

#[test]
fn test_missing_source_keeps_previous_copy_on_disk() {
    let sources = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let previous = output.path().join("src/main/webapp/build/res/billing.proto");
    fs::create_dir_all(previous.parent().unwrap()).unwrap();
    fs::write(&previous, "previous good copy\n").unwrap();

    Engine::new()
        .with_source_dir(sources.path())
        .generate(
            &testing::billing(),
            &GeneratorOptions::default(),
            &mut DirSink::new(output.path()),
        )
        .unwrap_err();

    assert_eq!(fs::read_to_string(&previous).unwrap(), "previous good copy\n");
    assert!(output.path().join("org/example/billing/BillingService.java").is_file());
}

#[test]
fn test_preview_matches_generate() {
    let schema = testing::billing();
    let options = GeneratorOptions::default();
    let temp = source_dir(&schema, &options);
    let engine = Engine::new().with_source_dir(temp.path());

    let preview = engine.preview(&schema, &options).unwrap();
    let mut sink = MemorySink::new();
    engine.generate(&schema, &options, &mut sink).unwrap();

    assert_eq!(preview.len(), sink.len());
    for file in &preview {
        assert_eq!(sink.get_str(&file.path), Some(file.content.as_str()));
    }
}

#[test]
fn test_writes_to_directory() {
    let schema = testing::unpackaged();
    let options = GeneratorOptions::default();
    let temp = source_dir(&schema, &options);
    let output = TempDir::new().unwrap();

    let report = Engine::new()
        .with_source_dir(temp.path())
        .with_chunk_size(3)
        .generate(&schema, &options, &mut DirSink::new(output.path()))
        .unwrap();

    for path in report.files() {
        assert!(output.path().join(path).is_file(), "{} missing", path.display());
    }
    let service = fs::read_to_string(output.path().join("HealthService.java")).unwrap();
    assert!(service.contains("import handlers.*;"));
    assert!(!service.starts_with("package"));
    assert_eq!(
        fs::read_to_string(output.path().join("src/main/webapp/build/res/ping.proto")).unwrap(),
        "// ping.proto\n"
    );
}
