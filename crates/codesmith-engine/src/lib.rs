//! Codesmith engine - prompt synthesis, completion gateway, and orchestration.

pub mod error;
pub mod fence;
pub mod generator;
pub mod llm;
pub mod optimizer;
pub mod prompts;

// Re-export common types
pub use error::{EngineError, EngineResult};
pub use fence::strip_code_fences;
pub use generator::{explain_code, generate_all, generate_code_for_topic, GeneratedFiles, TopicReport};
pub use llm::{CompletionBackend, CompletionError, CompletionRequest, Extraction, RemoteBackend};
pub use optimizer::{optimize_code, OptimizeLevel};
pub use prompts::{explanation_prompt, generation_prompt, optimization_prompt, tests_prompt};
