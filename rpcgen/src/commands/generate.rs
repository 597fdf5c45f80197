use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use rpcgen_schema::SchemaFile;

use super::{GeneratorArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the schema descriptor (defaults to ./rpcgen.toml)
    #[arg(short, long, default_value = "rpcgen.toml")]
    pub config: PathBuf,

    /// Directory receiving the generated tree
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the generated files instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.config).unwrap_or_exit();
        let options = self.generator.resolve(&file);

        let report = ops::generate(&file, &options, &self.output, self.dry_run)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
