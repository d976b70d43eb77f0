//! Layered settings resolution.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::env::{vars, Environment};
use crate::secrets::{ApiKey, SecretsFile};

/// Built-in defaults, the last layer of the resolution chain.
pub mod defaults {
    pub const MODEL: &str = "gpt-4.1-nano";
    pub const TEMPERATURE: f32 = 0.2;
    pub const MAX_TOKENS: u32 = 3000;
    pub const BASE_URL: &str = "https://api.openai.com/v1";
}

/// Configuration errors. All of these are fatal before any remote call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not set: set it in the environment, a .env file, or .codesmith/secrets.yaml")]
    MissingApiKey { var: &'static str },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("failed to read secrets file {path}: {source}")]
    SecretsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in secrets file {path}: {message}")]
    SecretsParse { path: PathBuf, message: String },
}

/// Resolved process settings.
///
/// Constructed once at startup and passed explicitly to dependents; there is
/// no global default.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: ApiKey,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub base_url: String,
}

impl Settings {
    /// Load settings for a project directory.
    ///
    /// Resolution order per key, first present wins: process environment,
    /// then `.codesmith/secrets.yaml`, then the built-in default. `.env`
    /// files are folded into the environment first.
    pub fn load(project_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let _env = Environment::init();
        let secrets = SecretsFile::load(project_dir)?;
        Self::resolve(Environment::get, &secrets)
    }

    /// Resolve settings from an explicit environment lookup and secrets map.
    ///
    /// `load` passes the real process environment; tests pass closures.
    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        secrets: &SecretsFile,
    ) -> Result<Self, ConfigError> {
        let first = |var: &str| env(var).or_else(|| secrets.get(var).map(String::from));

        let api_key = first(vars::CODESMITH_API_KEY)
            .filter(|k| !k.is_empty())
            .map(ApiKey::new)
            .ok_or(ConfigError::MissingApiKey {
                var: vars::CODESMITH_API_KEY,
            })?;

        let model = first(vars::CODESMITH_MODEL).unwrap_or_else(|| defaults::MODEL.to_string());

        let temperature = match first(vars::CODESMITH_TEMPERATURE) {
            Some(raw) => parse_temperature(&raw)?,
            None => defaults::TEMPERATURE,
        };

        let max_tokens = match first(vars::CODESMITH_MAX_TOKENS) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: vars::CODESMITH_MAX_TOKENS,
                message: format!("expected a positive integer, got `{raw}`"),
            })?,
            None => defaults::MAX_TOKENS,
        };

        let base_url = first(vars::CODESMITH_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| defaults::BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            temperature,
            max_tokens,
            base_url,
        })
    }
}

fn parse_temperature(raw: &str) -> Result<f32, ConfigError> {
    let value: f32 = raw.parse().map_err(|_| ConfigError::InvalidValue {
        key: vars::CODESMITH_TEMPERATURE,
        message: format!("expected a number, got `{raw}`"),
    })?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            key: vars::CODESMITH_TEMPERATURE,
            message: format!("must be between 0.0 and 1.0, got {value}"),
        });
    }
    Ok(value)
}
