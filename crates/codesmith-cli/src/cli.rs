//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use codesmith_catalog::Catalog;
use codesmith_common_config::Settings;

use crate::commands::{
    DoctorCommand, ExplainCommand, GenerateAllCommand, GenerateCommand, ModelsCommand,
    NewSpecCommand, OptimizeCommand, TopicsCommand, ValidateCommand,
};
use crate::error::CliError;

/// Codesmith - catalog-driven code generation via a remote model
///
/// Validate a spec catalog, render prompts, and write generated source and
/// test files.
#[derive(Debug, Parser)]
#[command(
    name = "codesmith",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a catalog JSON file (defaults to the embedded catalog)
    #[arg(
        long,
        global = true,
        env = "CODESMITH_CATALOG",
        value_hint = ValueHint::FilePath
    )]
    pub catalog: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check configuration and catalog health
    Doctor(DoctorCommand),

    /// List catalog topics
    Topics(TopicsCommand),

    /// Show commonly used model identifiers
    Models(ModelsCommand),

    /// Validate the catalog against schema rules
    Validate(ValidateCommand),

    /// Generate implementation and tests for one topic
    Generate(GenerateCommand),

    /// Generate implementations and tests for all topics
    GenerateAll(GenerateAllCommand),

    /// Optimize a source file in place
    Optimize(OptimizeCommand),

    /// Explain a source file
    Explain(ExplainCommand),

    /// Print a JSON template for a new catalog record
    NewSpec(NewSpecCommand),
}

impl Cli {
    /// Execute the selected command.
    pub async fn execute(self) -> Result<(), CliError> {
        let ctx = CommandContext {
            catalog_path: self.catalog,
            format: self.format,
        };

        match self.command {
            Command::Doctor(cmd) => cmd.execute(&ctx).await,
            Command::Topics(cmd) => cmd.execute(&ctx).await,
            Command::Models(cmd) => cmd.execute(&ctx).await,
            Command::Validate(cmd) => cmd.execute(&ctx).await,
            Command::Generate(cmd) => cmd.execute(&ctx).await,
            Command::GenerateAll(cmd) => cmd.execute(&ctx).await,
            Command::Optimize(cmd) => cmd.execute(&ctx).await,
            Command::Explain(cmd) => cmd.execute(&ctx).await,
            Command::NewSpec(cmd) => cmd.execute(&ctx).await,
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub catalog_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load the catalog: the `--catalog` override or the embedded default.
    pub fn load_catalog(&self) -> Result<Catalog, CliError> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::embedded()?,
        };
        Ok(catalog)
    }

    /// Resolve settings from the current directory's layered sources.
    pub fn load_settings(&self) -> Result<Settings, CliError> {
        Ok(Settings::load(".")?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_catalog_flag_is_global() {
        let cli = Cli::try_parse_from(["codesmith", "topics", "--catalog", "specs.json"]).unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("specs.json")));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["codesmith", "-q", "-v", "topics"]);
        assert!(result.is_err());
    }
}
