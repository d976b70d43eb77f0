//! Environment variable handling.

use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("required environment variable not set: {var}")]
    NotSet { var: String },

    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

/// Environment variable names.
pub mod vars {
    /// API key for the completion endpoint (mandatory).
    pub const CODESMITH_API_KEY: &str = "CODESMITH_API_KEY";
    /// Default model identifier.
    pub const CODESMITH_MODEL: &str = "CODESMITH_MODEL";
    /// Sampling temperature, 0.0 to 1.0.
    pub const CODESMITH_TEMPERATURE: &str = "CODESMITH_TEMPERATURE";
    /// Completion token budget.
    pub const CODESMITH_MAX_TOKENS: &str = "CODESMITH_MAX_TOKENS";
    /// Base URL of the completion API.
    pub const CODESMITH_BASE_URL: &str = "CODESMITH_BASE_URL";

    // Development
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Process environment access.
pub struct Environment {
    _guard: (), // Prevent construction outside module
}

impl Environment {
    /// Initialize environment from .env files.
    ///
    /// Missing files are fine; `.env.local` overrides `.env`.
    pub fn init() -> Self {
        let _ = dotenvy::from_filename(".env");
        let _ = dotenvy::from_filename_override(".env.local");
        Self { _guard: () }
    }

    /// Get a required string variable.
    pub fn require(var: &str) -> Result<String, EnvError> {
        env::var(var).map_err(|_| EnvError::NotSet { var: var.to_string() })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }

    /// Get a variable with a default value.
    pub fn get_or(var: &str, default: &str) -> String {
        env::var(var).unwrap_or_else(|_| default.to_string())
    }
}
