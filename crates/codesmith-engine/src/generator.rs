//! Generation orchestration: spec in, artifact pair on disk.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use codesmith_catalog::Spec;

use crate::error::EngineResult;
use crate::fence::strip_code_fences;
use crate::llm::{CompletionBackend, CompletionRequest};
use crate::prompts::{explanation_prompt, generation_prompt, tests_prompt};

/// Token budget for explanation responses.
const EXPLAIN_MAX_TOKENS: u32 = 2000;

/// Paths of one generated artifact pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub module_path: PathBuf,
    pub test_path: PathBuf,
}

/// Per-topic outcome of a batch run.
#[derive(Debug)]
pub struct TopicReport {
    pub id: String,
    pub outcome: EngineResult<GeneratedFiles>,
}

/// Generate a module and its test file for one spec.
///
/// Two strictly sequential completions: the module body first, then the test
/// body against the just-generated code. Both artifacts land under
/// `out_dir` (created if absent) as `{id}.py` and `test_{id}.py`. Writes are
/// not transactional; a failure between them leaves the module file behind.
pub async fn generate_code_for_topic(
    backend: &dyn CompletionBackend,
    spec: &Spec,
    out_dir: &Path,
    max_tokens: Option<u32>,
) -> EngineResult<GeneratedFiles> {
    let module_path = out_dir.join(spec.module_file_name());
    let test_path = out_dir.join(spec.test_file_name());

    let request = CompletionRequest::new(generation_prompt(spec)).with_max_tokens(max_tokens);
    let code = strip_code_fences(&backend.complete(request).await?);

    let request = CompletionRequest::new(tests_prompt(spec, &code)).with_max_tokens(max_tokens);
    let test_code = strip_code_fences(&backend.complete(request).await?);

    tokio::fs::create_dir_all(out_dir).await?;
    tokio::fs::write(&module_path, &code).await?;
    tokio::fs::write(&test_path, &test_code).await?;

    Ok(GeneratedFiles {
        module_path,
        test_path,
    })
}

/// Generate artifacts for every spec, one at a time.
///
/// A failing topic is reported and never aborts the rest of the batch.
pub async fn generate_all(
    backend: &dyn CompletionBackend,
    specs: &[Spec],
    out_dir: &Path,
    max_tokens: Option<u32>,
) -> Vec<TopicReport> {
    let mut reports = Vec::with_capacity(specs.len());

    for spec in specs {
        info!(topic = %spec.id, "generating");
        let outcome = generate_code_for_topic(backend, spec, out_dir, max_tokens).await;
        if let Err(e) = &outcome {
            warn!(topic = %spec.id, error = %e, "generation failed");
        }
        reports.push(TopicReport {
            id: spec.id.clone(),
            outcome,
        });
    }

    reports
}

/// Explain `code` in plain text.
pub async fn explain_code(backend: &dyn CompletionBackend, code: &str) -> EngineResult<String> {
    let request =
        CompletionRequest::new(explanation_prompt(code)).with_max_tokens(Some(EXPLAIN_MAX_TOKENS));
    Ok(backend.complete(request).await?)
}
