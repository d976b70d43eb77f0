//! Topics command implementation.

use clap::Parser;
use serde_json::json;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;
use crate::output::Table;

/// List catalog topics
#[derive(Debug, Parser)]
pub struct TopicsCommand {}

impl TopicsCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        // Validate first so a broken catalog surfaces here, not mid-generation
        let specs = ctx.load_catalog()?.validate()?;

        match ctx.format {
            OutputFormat::Json => {
                let entries: Vec<_> = specs
                    .iter()
                    .map(|s| json!({"id": s.id, "title": s.title, "summary": s.summary}))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Text => {
                let mut table = Table::new(vec!["ID", "Title", "Summary"]);
                for spec in &specs {
                    table.add_row(vec![
                        spec.id.as_str(),
                        spec.title.as_str(),
                        spec.summary.as_str(),
                    ]);
                }
                println!("{}", table.render());
            }
        }

        Ok(())
    }
}
