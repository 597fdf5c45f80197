//! Backend trait shared by the target generators.

use std::path::PathBuf;

use eyre::Result;
use rpcgen_core::{MemorySink, OutputSink};

use crate::naming::NamingContext;

/// A fixed pipeline emitting one family of artifacts.
///
/// Backends only read the naming context; they never read back what another
/// backend wrote.
pub trait Backend {
    /// Backend identifier (e.g., "handlers", "client").
    fn name(&self) -> &'static str;

    /// Emit every artifact of this backend into `sink`, in declaration
    /// order. Returns the written paths.
    fn emit(&self, names: &NamingContext, sink: &mut dyn OutputSink) -> Result<Vec<PathBuf>>;
}

/// A generated file kept in memory for preview.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// Generated content.
    pub content: String,
}

impl PreviewFile {
    /// Drain `sink` into preview files, in open order.
    pub fn from_sink(sink: MemorySink) -> Vec<Self> {
        sink.into_files()
            .into_iter()
            .map(|(path, content)| Self {
                path: path.display().to_string(),
                content: String::from_utf8_lossy(&content).into_owned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, path::Path};

    use super::*;

    #[test]
    fn test_from_sink_keeps_open_order() {
        let mut sink = MemorySink::new();
        for (path, content) in [("b/z.js", "z"), ("a/y.java", "y")] {
            let mut out = sink.open(Path::new(path)).unwrap();
            out.write_all(content.as_bytes()).unwrap();
        }

        let files = PreviewFile::from_sink(sink);
        let listed: Vec<_> = files
            .iter()
            .map(|f| (f.path.as_str(), f.content.as_str()))
            .collect();
        assert_eq!(listed, vec![("b/z.js", "z"), ("a/y.java", "y")]);
    }
}
