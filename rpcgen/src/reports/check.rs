//! Check command report.

use std::path::PathBuf;

use rpcgen_codegen::lint::Diagnostic;
use serde::Serialize;

use super::output::{Output, Report};

/// Lint results for one descriptor.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub schema_file: String,
    pub services: usize,
    pub methods: usize,
    pub messages: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.warning(&diag.to_string());
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!(
            "  {}: {} service{}, {} method{}, {} message{}",
            self.schema_file,
            self.services,
            plural(self.services),
            self.methods,
            plural(self.methods),
            self.messages,
            plural(self.messages),
        ));
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
