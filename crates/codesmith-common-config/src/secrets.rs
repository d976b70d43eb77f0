//! Secrets file and redacted key handling.
//!
//! The secrets file is a flat string map at `.codesmith/secrets.yaml` under
//! the project directory. Keys use the same names as the environment
//! variables; the environment always takes precedence.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::settings::ConfigError;

/// Relative path of the secrets file within a project directory.
pub const SECRETS_FILE: &str = ".codesmith/secrets.yaml";

/// An API key that is redacted in logs and debug output.
///
/// # Example
///
/// ```rust
/// use codesmith_common_config::ApiKey;
///
/// let key = ApiKey::new("sk-abc123");
/// assert_eq!(format!("{}", key), "[REDACTED]");
/// assert_eq!(key.expose(), "sk-abc123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the raw key value.
    ///
    /// Only the request signing path should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

/// Parsed contents of the secrets file.
#[derive(Debug, Default, Deserialize)]
pub struct SecretsFile {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl SecretsFile {
    /// Load `.codesmith/secrets.yaml` from the given project directory.
    ///
    /// A missing file yields an empty map; an unreadable or malformed file
    /// is an error.
    pub fn load(project_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = project_dir.as_ref().join(SECRETS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::SecretsRead {
            path: path.clone(),
            source,
        })?;

        serde_yaml::from_str(&contents).map_err(|e| ConfigError::SecretsParse {
            path,
            message: e.to_string(),
        })
    }

    /// Look up a key by its variable name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Path of the secrets file under a project directory.
    pub fn path_in(project_dir: impl AsRef<Path>) -> PathBuf {
        project_dir.as_ref().join(SECRETS_FILE)
    }
}
