mod check;
mod completions;
mod generate;
mod info;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand, ValueEnum};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use info::InfoCommand;
use rpcgen_schema::{GeneratorOptions, SchemaFile};

/// Extension trait for exiting on descriptor errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for rpcgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "rpcgen")]
#[command(version)]
#[command(about = "Generate Java service scaffolds and JavaScript RPC clients from a schema")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java and JavaScript sources from a schema descriptor
    Generate(GenerateCommand),

    /// Lint a schema descriptor without generating code
    Check(CheckCommand),

    /// Show every name and path derived from a schema descriptor
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Report format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Text,
    Json,
}

/// Generator options on the command line.
///
/// Applied on top of the descriptor's `[generator]` table: `--param` first,
/// then the explicit flags.
#[derive(Args, Debug, Default)]
pub(crate) struct GeneratorArgs {
    /// Host parameter string (e.g., "nano=true,js_path=web/")
    #[arg(long, value_name = "K=V,...")]
    pub param: Option<String>,

    /// Generate for the legacy Java dialect
    #[arg(long)]
    pub legacy: bool,

    /// Web application root receiving the client artifacts
    #[arg(long, value_name = "DIR")]
    pub client_root: Option<String>,

    /// Java package of AbstractRpcService and RpcCallHandler
    #[arg(long, value_name = "PACKAGE")]
    pub runtime_package: Option<String>,

    /// Directory the schema source path is relative to
    #[arg(long, value_name = "DIR")]
    pub proto_root: Option<String>,
}

impl GeneratorArgs {
    /// Merge these arguments over the descriptor's options.
    pub fn resolve(&self, file: &SchemaFile) -> GeneratorOptions {
        let mut options = file.options().clone();
        if let Some(param) = &self.param {
            options.apply_parameter(param);
        }
        if self.legacy {
            options.legacy = true;
        }
        if let Some(root) = &self.client_root {
            options.client_root = Some(root.clone());
        }
        if let Some(package) = &self.runtime_package {
            options.runtime_package = Some(package.clone());
        }
        if let Some(root) = &self.proto_root {
            options.proto_root = Some(root.clone());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::CommandFactory;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_param_and_descriptor() {
        let mut descriptor = NamedTempFile::new().unwrap();
        write!(
            descriptor,
            "file = \"x.proto\"\n[generator]\nclient_root = \"a/\"\nruntime_package = \"io.a\"\n"
        )
        .unwrap();
        let file = SchemaFile::open(descriptor.path()).unwrap();

        let args = GeneratorArgs {
            param: Some("js_path=b/,nano=true".into()),
            runtime_package: Some("io.c".into()),
            ..Default::default()
        };
        let options = args.resolve(&file);

        assert!(options.legacy);
        assert_eq!(options.client_root(), "b/");
        assert_eq!(options.runtime_package(), "io.c");
    }
}
