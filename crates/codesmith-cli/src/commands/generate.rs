//! Generate and generate-all command implementations.

use std::path::PathBuf;

use clap::Parser;
use console::{style, Emoji};

use codesmith_engine::{generate_all, generate_code_for_topic, RemoteBackend};

use crate::cli::CommandContext;
use crate::error::CliError;

static CHECK: Emoji<'_, '_> = Emoji("✓", "ok");
static CROSS: Emoji<'_, '_> = Emoji("✗", "x");

/// Generate implementation and tests for one topic
#[derive(Debug, Parser)]
pub struct GenerateCommand {
    /// Topic id from the catalog
    #[arg(long)]
    topic: String,

    /// Output directory
    #[arg(long, default_value = "generated")]
    out_dir: PathBuf,

    /// Override the completion token budget
    #[arg(long)]
    max_tokens: Option<u32>,
}

impl GenerateCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let settings = ctx.load_settings()?;
        let backend = RemoteBackend::new(&settings);

        let spec = ctx
            .load_catalog()?
            .find(&self.topic)?
            .ok_or_else(|| CliError::TopicNotFound {
                id: self.topic.clone(),
            })?;

        let files =
            generate_code_for_topic(&backend, &spec, &self.out_dir, self.max_tokens).await?;

        println!(
            "{} {}",
            style("Generated:").green().bold(),
            files.module_path.display()
        );
        println!(
            "{} {}",
            style("Tests:").green().bold(),
            files.test_path.display()
        );
        Ok(())
    }
}

/// Generate implementations and tests for all topics
#[derive(Debug, Parser)]
pub struct GenerateAllCommand {
    /// Output directory
    #[arg(long, default_value = "generated")]
    out_dir: PathBuf,

    /// Override the completion token budget
    #[arg(long)]
    max_tokens: Option<u32>,
}

impl GenerateAllCommand {
    pub async fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let settings = ctx.load_settings()?;
        let backend = RemoteBackend::new(&settings);
        let specs = ctx.load_catalog()?.validate()?;

        let reports = generate_all(&backend, &specs, &self.out_dir, self.max_tokens).await;

        let mut failed = 0;
        for report in &reports {
            match &report.outcome {
                Ok(files) => println!(
                    "{} {}: {} | {}",
                    CHECK,
                    report.id,
                    files.module_path.display(),
                    files.test_path.display()
                ),
                Err(e) => {
                    failed += 1;
                    println!("{} {}: {}", CROSS, style(&report.id).red(), e);
                }
            }
        }

        println!();
        println!("{} generated, {} failed", reports.len() - failed, failed);
        Ok(())
    }
}
