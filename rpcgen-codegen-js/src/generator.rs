use std::path::PathBuf;

use eyre::Result;
use rpcgen_codegen::{generation::GeneratedFile, language::Backend, naming::NamingContext};
use rpcgen_core::OutputSink;

use crate::files::{ClientJs, ConstantsJs, DEFAULT_CHUNK_SIZE, LoaderJs, SchemaCopy};

/// Emits the client artifacts: one stub per service, one loader per
/// message, the constants sample and the schema copy, in that order.
#[derive(Debug, Clone)]
pub struct ClientBackend {
    source_dir: Option<PathBuf>,
    chunk_size: usize,
}

impl ClientBackend {
    pub fn new() -> Self {
        Self {
            source_dir: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Resolve the schema source relative to `dir` instead of the working
    /// directory.
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Buffer size for the schema copy.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    fn schema_source(&self, names: &NamingContext) -> PathBuf {
        let source = &names.client().schema_source;
        match &self.source_dir {
            Some(dir) => dir.join(source),
            None => source.clone(),
        }
    }
}

impl Default for ClientBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ClientBackend {
    fn name(&self) -> &'static str {
        "client"
    }

    fn emit(&self, names: &NamingContext, sink: &mut dyn OutputSink) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(names.services().len() + names.messages().len() + 2);
        for service in names.services() {
            written.push(ClientJs::new(names, service).write(sink)?);
        }
        for message in names.messages() {
            written.push(LoaderJs::new(names, message).write(sink)?);
        }
        written.push(ConstantsJs::new(names).write(sink)?);

        let copy = SchemaCopy::new(self.schema_source(names), &names.client().schema_copy_path)
            .with_chunk_size(self.chunk_size);
        written.push(copy.write(sink)?);
        Ok(written)
    }
}
