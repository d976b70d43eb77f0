//! Error types for the Codesmith engine.

use thiserror::Error;

use crate::llm::CompletionError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error types for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
