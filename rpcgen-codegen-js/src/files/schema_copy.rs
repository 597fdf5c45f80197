use std::{
    fs::File,
    io::{ErrorKind, Read, Write},
    path::PathBuf,
};

use eyre::{Result, WrapErr};
use rpcgen_codegen::{builder::Printer, generation::GeneratedFile};
use rpcgen_core::OutputSink;

/// Size of the buffer the schema source is copied through.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Byte-exact copy of the schema source, served next to the loaders.
///
/// The source is opened before the destination, so a missing source leaves
/// an earlier copy untouched.
pub struct SchemaCopy {
    source: PathBuf,
    destination: PathBuf,
    chunk_size: usize,
}

impl SchemaCopy {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Copy through a buffer of `chunk_size` bytes (at least one).
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    fn open_source(&self) -> Result<File> {
        File::open(&self.source).wrap_err_with(|| {
            format!("failed to open schema source '{}'", self.source.display())
        })
    }

    fn copy(&self, mut source: File, p: &mut Printer<'_>) -> Result<()> {
        let mut buf = vec![0u8; self.chunk_size];
        let mut chunks = 0usize;
        loop {
            let n = match source.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(e).wrap_err_with(|| {
                        format!("failed to read schema source '{}'", self.source.display())
                    });
                }
            };
            p.print_raw(&buf[..n]);
            chunks += 1;
            if p.failed() {
                break;
            }
        }

        tracing::trace!(source = %self.source.display(), chunks, "copied schema source");
        Ok(())
    }
}

impl GeneratedFile for SchemaCopy {
    fn path(&self) -> PathBuf {
        self.destination.clone()
    }

    fn print(&self, p: &mut Printer<'_>) -> Result<()> {
        self.copy(self.open_source()?, p)
    }

    fn write(&self, sink: &mut dyn OutputSink) -> Result<PathBuf> {
        let source = self.open_source()?;
        let mut out = sink.open(&self.destination)?;

        let mut printer = Printer::new(&mut *out, self.indent());
        self.copy(source, &mut printer)?;
        let bytes = printer
            .finish()
            .wrap_err_with(|| format!("failed to write '{}'", self.destination.display()))?;
        out.flush()
            .wrap_err_with(|| format!("failed to flush '{}'", self.destination.display()))?;

        tracing::debug!(path = %self.destination.display(), bytes, "generated file");
        Ok(self.destination.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rpcgen_core::{DirSink, MemorySink};
    use tempfile::TempDir;

    use super::*;

    fn copy(content: &[u8], chunk_size: usize) -> Vec<u8> {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("billing.proto");
        fs::write(&source, content).unwrap();

        let mut sink = MemorySink::new();
        SchemaCopy::new(&source, "res/billing.proto")
            .with_chunk_size(chunk_size)
            .write(&mut sink)
            .unwrap();
        sink.get("res/billing.proto").unwrap().to_vec()
    }

    fn bytes(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(copy(b"", 8), b"");
    }

    #[test]
    fn test_smaller_than_chunk() {
        let content = bytes(5);
        assert_eq!(copy(&content, 8), content);
    }

    #[test]
    fn test_exact_chunk_multiple() {
        let content = bytes(16);
        assert_eq!(copy(&content, 8), content);
    }

    #[test]
    fn test_larger_than_chunk() {
        let content = bytes(DEFAULT_CHUNK_SIZE * 2 + 17);
        assert_eq!(copy(&content, DEFAULT_CHUNK_SIZE), content);
    }

    #[test]
    fn test_not_reindented_or_substituted() {
        let content = b"  message $Foo$ {\n\tstring a = 1;\n}\r\n".to_vec();
        assert_eq!(copy(&content, 3), content);
    }

    #[test]
    fn test_missing_source() {
        let temp = TempDir::new().unwrap();
        let mut sink = MemorySink::new();
        let err = SchemaCopy::new(temp.path().join("missing.proto"), "res/missing.proto")
            .write(&mut sink)
            .unwrap_err();
        assert!(err.to_string().contains("failed to open schema source"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_source_keeps_previous_copy() {
        let temp = TempDir::new().unwrap();
        let previous = temp.path().join("out/res/billing.proto");
        fs::create_dir_all(previous.parent().unwrap()).unwrap();
        fs::write(&previous, "previous good copy\n").unwrap();

        let mut sink = DirSink::new(temp.path().join("out"));
        SchemaCopy::new(temp.path().join("missing.proto"), "res/billing.proto")
            .write(&mut sink)
            .unwrap_err();

        assert_eq!(fs::read_to_string(&previous).unwrap(), "previous good copy\n");
    }

    #[test]
    fn test_render_matches_write() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("billing.proto");
        fs::write(&source, "syntax = \"proto3\";\n").unwrap();

        let copy = SchemaCopy::new(&source, "res/billing.proto");
        assert_eq!(copy.render().unwrap(), "syntax = \"proto3\";\n");
    }
}
