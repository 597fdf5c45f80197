//! The artifact trait every backend file implements.

use std::{io::Write, path::PathBuf};

use eyre::{Result, WrapErr};
use rpcgen_core::OutputSink;

use crate::builder::{Indent, Printer};

/// A single generated artifact.
///
/// Implementors describe where the artifact goes and how it is printed;
/// [`GeneratedFile::write`] takes care of opening the sink exactly once,
/// checking the indentation balance and flushing.
pub trait GeneratedFile {
    /// Path of the artifact relative to the sink root.
    fn path(&self) -> PathBuf;

    /// Indentation unit for this artifact.
    fn indent(&self) -> Indent {
        Indent::default()
    }

    /// Print the artifact content.
    ///
    /// Write failures are latched by the printer; implementors only return
    /// errors of their own (e.g., reading a source file).
    fn print(&self, printer: &mut Printer<'_>) -> Result<()>;

    /// Open the artifact in `sink`, print it and close it.
    fn write(&self, sink: &mut dyn OutputSink) -> Result<PathBuf> {
        let path = self.path();
        let mut out = sink.open(&path)?;

        let mut printer = Printer::new(&mut *out, self.indent());
        self.print(&mut printer)?;
        debug_assert_eq!(
            printer.depth(),
            0,
            "unbalanced indentation in {}",
            path.display()
        );
        let bytes = printer
            .finish()
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        out.flush()
            .wrap_err_with(|| format!("failed to flush '{}'", path.display()))?;

        tracing::debug!(path = %path.display(), bytes, "generated file");
        Ok(path)
    }

    /// Render the artifact into a string.
    fn render(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut printer = Printer::new(&mut out, self.indent());
        self.print(&mut printer)?;
        printer.finish()?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
