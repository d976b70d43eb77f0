//! Doctor command implementation.

use clap::Parser;
use console::{style, Emoji};

use codesmith_common_config::{ConfigError, Settings};

use crate::cli::CommandContext;
use crate::error::CliError;

static CHECK: Emoji<'_, '_> = Emoji("✓", "ok");
static CROSS: Emoji<'_, '_> = Emoji("✗", "x");

/// Check configuration and catalog health
#[derive(Debug, Parser)]
pub struct DoctorCommand {
    /// Only check a specific component (config, catalog)
    #[arg(long)]
    check: Option<String>,
}

impl DoctorCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        println!("{}", style("Codesmith Health Check").bold());
        println!();

        let mut issues = Vec::new();

        if self.should_check("config") {
            issues.extend(self.check_configuration());
            println!();
        }

        if self.should_check("catalog") {
            issues.extend(self.check_catalog(ctx));
            println!();
        }

        if issues.is_empty() {
            println!("Overall: {}", style("all good").green());
            Ok(())
        } else {
            println!("{}", style("Issues found:").red().bold());
            for (i, issue) in issues.iter().enumerate() {
                println!("  {}. {}", i + 1, issue);
            }
            Err(CliError::Doctor {
                count: issues.len(),
            })
        }
    }

    fn should_check(&self, component: &str) -> bool {
        match &self.check {
            Some(filter) => filter == component,
            None => true,
        }
    }

    fn check_configuration(&self) -> Vec<String> {
        println!("{}", style("Configuration:").bold());

        match Settings::load(".") {
            Ok(settings) => {
                println!("  {} API key found", CHECK);
                println!("  {} Model: {}", CHECK, settings.model);
                println!("  {} Endpoint: {}", CHECK, settings.base_url);
                println!(
                    "  {} Temperature {}, max tokens {}",
                    CHECK, settings.temperature, settings.max_tokens
                );
                Vec::new()
            }
            Err(e @ ConfigError::MissingApiKey { .. }) => {
                println!("  {} {}", CROSS, e);
                vec!["Set CODESMITH_API_KEY: export CODESMITH_API_KEY=<your-key>".to_string()]
            }
            Err(e) => {
                println!("  {} {}", CROSS, e);
                vec![format!("Fix configuration: {e}")]
            }
        }
    }

    fn check_catalog(&self, ctx: &CommandContext) -> Vec<String> {
        println!("{}", style("Catalog:").bold());

        let catalog = match ctx.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                println!("  {} Catalog failed to load", CROSS);
                return vec![format!("Fix catalog source: {e}")];
            }
        };

        match catalog.validate() {
            Ok(specs) => {
                println!("  {} Catalog valid ({} specs)", CHECK, specs.len());
                Vec::new()
            }
            Err(e) => {
                println!("  {} Catalog has invalid records", CROSS);
                vec![format!("Fix catalog records: {e}")]
            }
        }
    }
}
