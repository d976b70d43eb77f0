//! Code optimization via a single completion round-trip.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineResult;
use crate::fence::strip_code_fences;
use crate::llm::{CompletionBackend, CompletionRequest};
use crate::prompts::optimization_prompt;

/// Token budget for optimization responses.
const OPTIMIZE_MAX_TOKENS: u32 = 2500;

/// Named refactoring level applied by the optimization prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptimizeLevel {
    One,
    Readability,
    Performance,
    Memory,
    #[default]
    All,
}

impl fmt::Display for OptimizeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::One => "one",
            Self::Readability => "readability",
            Self::Performance => "performance",
            Self::Memory => "memory",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

impl FromStr for OptimizeLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one" => Ok(Self::One),
            "readability" => Ok(Self::Readability),
            "performance" => Ok(Self::Performance),
            "memory" => Ok(Self::Memory),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown level `{other}`: expected one|readability|performance|memory|all"
            )),
        }
    }
}

/// Rewrite `code` at the given level, preserving its public API and behavior.
pub async fn optimize_code(
    backend: &dyn CompletionBackend,
    code: &str,
    level: OptimizeLevel,
) -> EngineResult<String> {
    let request = CompletionRequest::new(optimization_prompt(code, level))
        .with_max_tokens(Some(OPTIMIZE_MAX_TOKENS));
    let response = backend.complete(request).await?;
    Ok(strip_code_fences(&response))
}
