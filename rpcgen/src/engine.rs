//! The orchestrator driving every backend through one sink.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use rpcgen_codegen::{
    language::{Backend, PreviewFile},
    lint::{Diagnostic, Linter},
    naming::NamingContext,
};
use rpcgen_codegen_java::{HandlerBackend, ServiceBackend};
use rpcgen_codegen_js::ClientBackend;
use rpcgen_core::{FirstWriteSink, MemorySink, OutputSink};
use rpcgen_schema::{GeneratorOptions, Schema};
use serde::Serialize;

/// Outcome of a generation run.
#[derive(Debug, Default, Serialize)]
pub struct GenerateReport {
    /// Java namespace of the service scaffolds.
    pub package: String,
    /// Lint findings; they never stop generation.
    pub diagnostics: Vec<Diagnostic>,
    /// Written artifacts per backend, in emission order.
    pub backends: Vec<(&'static str, Vec<PathBuf>)>,
    /// Artifacts dropped because an earlier artifact had the same path.
    pub skipped: Vec<PathBuf>,
}

impl GenerateReport {
    /// All written paths in emission order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.backends
            .iter()
            .flat_map(|(_, paths)| paths.iter().map(PathBuf::as_path))
    }

    /// Number of written artifacts.
    pub fn len(&self) -> usize {
        self.backends.iter().map(|(_, paths)| paths.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generation engine.
///
/// Derives the naming context once, lints the schema, then runs the handler,
/// service and client backends in that order. Every artifact is opened
/// exactly once; the first fatal error aborts the run and leaves earlier
/// artifacts in the sink.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    client: ClientBackend,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the schema source relative to `dir`.
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.client = self.client.with_source_dir(dir);
        self
    }

    /// Buffer size used to copy the schema source.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.client = self.client.with_chunk_size(chunk_size);
        self
    }

    /// Generate every artifact of `schema` into `sink`.
    pub fn generate(
        &self,
        schema: &Schema,
        options: &GeneratorOptions,
        sink: &mut dyn OutputSink,
    ) -> Result<GenerateReport> {
        let names = NamingContext::build(schema, options);
        let diagnostics = Linter::new().run(schema, &names);
        for diag in &diagnostics {
            tracing::debug!(%diag, "lint");
        }

        let backends: [&dyn Backend; 3] = [&HandlerBackend, &ServiceBackend, &self.client];
        let mut sink = FirstWriteSink::new(sink);
        let mut report = GenerateReport {
            package: names.java().package.clone(),
            diagnostics,
            ..Default::default()
        };

        for backend in backends {
            let _span = tracing::debug_span!("backend", name = backend.name()).entered();
            let before = sink.skipped().len();
            let mut paths = backend
                .emit(&names, &mut sink)
                .wrap_err_with(|| format!("{} generation failed", backend.name()))?;
            // A skipped open is always a repeat, so drop the last occurrence.
            for dropped in &sink.skipped()[before..] {
                if let Some(index) = paths.iter().rposition(|p| p == dropped) {
                    paths.remove(index);
                }
            }
            tracing::debug!(files = paths.len(), "backend finished");
            report.backends.push((backend.name(), paths));
        }
        report.skipped = sink.into_skipped();

        tracing::info!(
            files = report.len(),
            services = names.services().len(),
            methods = names.method_count(),
            messages = names.messages().len(),
            "generated {}",
            schema.file
        );
        Ok(report)
    }

    /// Generate into memory and return the artifacts as text.
    pub fn preview(&self, schema: &Schema, options: &GeneratorOptions) -> Result<Vec<PreviewFile>> {
        let mut sink = MemorySink::new();
        self.generate(schema, options, &mut sink)?;
        Ok(PreviewFile::from_sink(sink))
    }
}

/// Generate with a default [`Engine`].
pub fn generate(
    schema: &Schema,
    options: &GeneratorOptions,
    sink: &mut dyn OutputSink,
) -> Result<GenerateReport> {
    Engine::new().generate(schema, options, sink)
}
