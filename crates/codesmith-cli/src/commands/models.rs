//! Models command implementation.

use clap::Parser;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::Table;

/// Show commonly used model identifiers (static list)
#[derive(Debug, Parser)]
pub struct ModelsCommand {}

impl ModelsCommand {
    pub async fn execute(&self, _ctx: &CommandContext) -> Result<(), CliError> {
        let mut table = Table::new(vec!["Model", "Notes"]);
        table.add_row(vec!["gpt-4.1-nano", "Fast and efficient default"]);
        table.add_row(vec!["gpt-4.1-mini", "Balanced performance"]);
        table.add_row(vec!["gemini-2.5-flash", "Google Gemini model"]);
        println!("{}", table.render());
        println!();
        println!("Override with CODESMITH_MODEL or per-run via the secrets file.");
        Ok(())
    }
}
