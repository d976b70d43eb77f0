//! Typed spec records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One declared input of the target function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecInput {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub desc: String,
}

/// A worked example: named argument values and the expected output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecExample {
    pub input: Map<String, Value>,
    pub output: Value,
}

/// A single algorithm/task description from the catalog.
///
/// Immutable once validated; the `id` doubles as the output filename stem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub function_signature: String,
    #[serde(default)]
    pub inputs: Vec<SpecInput>,
    pub outputs: Map<String, Value>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub examples: Vec<SpecExample>,
}

impl Spec {
    /// Build an empty template record for a new catalog entry.
    pub fn template(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        function_signature: impl Into<String>,
    ) -> Self {
        let mut outputs = Map::new();
        outputs.insert("type".to_string(), Value::String(String::new()));
        outputs.insert("desc".to_string(), Value::String(String::new()));

        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            function_signature: function_signature.into(),
            inputs: Vec::new(),
            outputs,
            constraints: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// The module filename derived from the id.
    pub fn module_file_name(&self) -> String {
        format!("{}.py", self.id)
    }

    /// The test filename derived from the id.
    pub fn test_file_name(&self) -> String {
        format!("test_{}.py", self.id)
    }
}

/// Whether a signature looks like a function or class declaration.
pub fn has_signature_marker(signature: &str) -> bool {
    signature.contains("def ") || signature.trim().starts_with("class ")
}
