//! Generate command report.

use std::path::PathBuf;

use rpcgen::{GenerateReport, PreviewFile};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Schema source file name (e.g., "billing.proto").
    pub schema_file: String,
    pub report: GenerateReport,
    pub result: GenerationResult,
}

/// Where the generated artifacts went.
#[derive(Debug)]
pub enum GenerationResult {
    /// Rendered in memory for `--dry-run`.
    Preview { files: Vec<PreviewFile> },
    /// Written below `output_dir`.
    Written { output_dir: PathBuf },
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.report.diagnostics {
            out.warning(&diag.to_string());
        }
        for path in &self.report.skipped {
            out.warning(&format!(
                "warning: skipped '{}' (already generated in this run)",
                path.display()
            ));
        }

        match &self.result {
            GenerationResult::Preview { files } => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.preformatted(&format!(
                    "Dry run: {} files for {} (nothing written)",
                    files.len(),
                    self.schema_file
                ));
            }
            GenerationResult::Written { output_dir } => {
                out.preformatted(&format!(
                    "Generated {} files for {} in {}",
                    self.report.len(),
                    self.schema_file,
                    output_dir.display()
                ));
                for (backend, paths) in &self.report.backends {
                    if paths.is_empty() {
                        continue;
                    }
                    out.newline();
                    out.section(backend);
                    for path in paths {
                        out.added_item(&path.display().to_string());
                    }
                }
            }
        }
    }
}
