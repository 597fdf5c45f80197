use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use rpcgen_schema::SchemaFile;

use super::{Format, GeneratorArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the schema descriptor (defaults to ./rpcgen.toml)
    #[arg(short, long, default_value = "rpcgen.toml")]
    pub config: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.config).unwrap_or_exit();
        let options = self.generator.resolve(&file);
        let report = ops::check(&file, &options);

        match self.format {
            Format::Text => report.render(&mut TerminalOutput::new()),
            Format::Json => println!(
                "{}",
                serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?
            ),
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
