//! The completion gateway: boundary over the remote text-generation call.

mod extract;
mod provider;
mod remote;

pub use extract::{extract_content, Extraction};
pub use provider::{CompletionBackend, CompletionError, CompletionRequest};
pub use remote::RemoteBackend;
