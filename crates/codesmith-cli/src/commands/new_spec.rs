//! New-spec command implementation.

use clap::Parser;

use codesmith_catalog::{validate_record, Spec};

use crate::cli::CommandContext;
use crate::error::CliError;

/// Print a JSON template for a new catalog record
#[derive(Debug, Parser)]
pub struct NewSpecCommand {
    /// New spec id (snake_case)
    #[arg(long)]
    id: String,

    /// Title
    #[arg(long)]
    title: String,

    /// Short summary
    #[arg(long)]
    summary: String,

    /// Function signature or class declaration
    #[arg(long)]
    signature: String,
}

impl NewSpecCommand {
    pub async fn execute(&self, _ctx: &CommandContext) -> Result<(), CliError> {
        let spec = Spec::template(&self.id, &self.title, &self.summary, &self.signature);

        // The printed template must itself pass catalog validation
        let record = serde_json::to_value(&spec)?;
        validate_record(0, &record).map_err(|e| {
            CliError::Catalog(codesmith_catalog::CatalogError::Invalid { errors: vec![e] })
        })?;

        println!("{}", serde_json::to_string_pretty(&spec)?);
        Ok(())
    }
}
