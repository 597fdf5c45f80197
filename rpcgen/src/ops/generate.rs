use std::path::Path;

use eyre::{Context, Result};
use rpcgen::{Engine, PreviewFile};
use rpcgen_core::{DirSink, MemorySink};
use rpcgen_schema::{GeneratorOptions, SchemaFile};

use crate::reports::{GenerateSummary, GenerationResult};

/// Generate every artifact of a descriptor.
///
/// The schema source is resolved relative to the descriptor's directory.
/// With `dry_run` the artifacts are rendered in memory and nothing touches
/// the file system.
pub fn generate(
    file: &SchemaFile,
    options: &GeneratorOptions,
    output_dir: &Path,
    dry_run: bool,
) -> Result<GenerateSummary> {
    let source_dir = file.path().parent().unwrap_or(Path::new("."));
    let engine = Engine::new().with_source_dir(source_dir);
    let schema = file.schema();

    let (report, result) = if dry_run {
        let mut sink = MemorySink::new();
        let report = engine.generate(schema, options, &mut sink)?;
        let files = PreviewFile::from_sink(sink);
        (report, GenerationResult::Preview { files })
    } else {
        std::fs::create_dir_all(output_dir).wrap_err_with(|| {
            format!("Failed to create output directory '{}'", output_dir.display())
        })?;
        let mut sink = DirSink::new(output_dir);
        let report = engine.generate(schema, options, &mut sink)?;
        (
            report,
            GenerationResult::Written {
                output_dir: output_dir.to_path_buf(),
            },
        )
    };

    Ok(GenerateSummary {
        schema_file: schema.file.clone(),
        report,
        result,
    })
}
