//! Explain command implementation.

use std::path::PathBuf;

use clap::Parser;

use codesmith_engine::{explain_code, RemoteBackend};

use crate::cli::CommandContext;
use crate::error::CliError;

/// Explain a source file
#[derive(Debug, Parser)]
pub struct ExplainCommand {
    /// File to explain
    #[arg(long)]
    path: PathBuf,
}

impl ExplainCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let settings = ctx.load_settings()?;
        let backend = RemoteBackend::new(&settings);

        let code = std::fs::read_to_string(&self.path)?;
        let explanation = explain_code(&backend, &code).await?;

        println!("{explanation}");
        Ok(())
    }
}
