//! Configuration for Codesmith.
//!
//! Settings are resolved once at process start from layered sources
//! (environment over secrets file over built-in default) and passed
//! explicitly to everything that needs them.

pub mod env;
pub mod secrets;
pub mod settings;

pub use env::{Environment, EnvError};
pub use secrets::{ApiKey, SecretsFile};
pub use settings::{ConfigError, Settings};
