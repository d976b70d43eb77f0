//! Validate command implementation.

use clap::Parser;
use console::style;
use serde_json::json;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Validate the catalog against schema rules
#[derive(Debug, Parser)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let catalog = ctx.load_catalog()?;

        match catalog.validate() {
            Ok(specs) => {
                match ctx.format {
                    OutputFormat::Json => {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&json!({
                                "valid": true,
                                "specs": specs.len(),
                            }))?
                        );
                    }
                    OutputFormat::Text => {
                        println!(
                            "{} {} spec(s)",
                            style("Catalog valid:").green().bold(),
                            specs.len()
                        );
                    }
                }
                Ok(())
            }
            Err(e) => {
                if ctx.format == OutputFormat::Json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "valid": false,
                            "error": e.to_string(),
                        }))?
                    );
                }
                Err(e.into())
            }
        }
    }
}
