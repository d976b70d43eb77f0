//! CLI error handling and exit codes.

use std::process::ExitCode;

use thiserror::Error;

use codesmith_catalog::CatalogError;
use codesmith_common_config::ConfigError;
use codesmith_engine::{CompletionError, EngineError};

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("topic not found: {id}")]
    TopicNotFound { id: String },

    #[error("doctor found {count} issue(s)")]
    Doctor { count: usize },

    #[error("{0}")]
    User(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Numeric exit code for this error.
    pub fn code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Doctor { .. } => 2,
            Self::Io(_) => 3,
            Self::Completion(_) => 4,
            Self::Catalog(e) => match e {
                CatalogError::Read { .. } => 3,
                CatalogError::Parse { .. } | CatalogError::Invalid { .. } => 5,
            },
            Self::TopicNotFound { .. } => 6,
            Self::User(_) | Self::Json(_) | Self::Other(_) => 1,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Completion(e) => Self::Completion(e),
            EngineError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        let missing = CliError::Config(ConfigError::MissingApiKey {
            var: "CODESMITH_API_KEY",
        });
        assert_eq!(missing.code(), 2);

        let not_found = CliError::TopicNotFound {
            id: "nope".to_string(),
        };
        assert_eq!(not_found.code(), 6);

        let invalid = CliError::Catalog(CatalogError::Invalid { errors: vec![] });
        assert_eq!(invalid.code(), 5);

        let user = CliError::User("bad flag combination".to_string());
        assert_eq!(user.code(), 1);
    }

    #[test]
    fn test_engine_errors_map_by_kind() {
        let io = EngineError::Io(std::io::Error::other("disk full"));
        assert_eq!(CliError::from(io).code(), 3);

        let completion = EngineError::Completion(CompletionError::Decode("bad json".to_string()));
        assert_eq!(CliError::from(completion).code(), 4);
    }
}
