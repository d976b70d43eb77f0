//! Optimize command implementation.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use codesmith_engine::{optimize_code, OptimizeLevel, RemoteBackend};

use crate::cli::CommandContext;
use crate::error::CliError;

/// Optimize a source file in place
#[derive(Debug, Parser)]
pub struct OptimizeCommand {
    /// File to optimize
    #[arg(long)]
    path: PathBuf,

    /// Refactoring level (one|readability|performance|memory|all)
    #[arg(long, default_value = "all")]
    level: OptimizeLevel,
}

impl OptimizeCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let settings = ctx.load_settings()?;
        let backend = RemoteBackend::new(&settings);

        let code = std::fs::read_to_string(&self.path)?;
        let optimized = optimize_code(&backend, &code, self.level).await?;
        std::fs::write(&self.path, optimized)?;

        println!(
            "{} {}",
            style("Optimized file saved:").green().bold(),
            self.path.display()
        );
        Ok(())
    }
}
