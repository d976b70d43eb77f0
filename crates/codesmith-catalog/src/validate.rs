//! Structural validation of raw catalog records.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::spec::{has_signature_marker, Spec};

/// Pattern every spec id must match.
pub const ID_PATTERN: &str = "^[a-z0-9_]+$";

fn id_regex() -> &'static Regex {
    static ID_RE: OnceLock<Regex> = OnceLock::new();
    ID_RE.get_or_init(|| Regex::new(ID_PATTERN).expect("static pattern compiles"))
}

/// A single record failing schema rules.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("record {index}: expected a JSON object")]
    NotAnObject { index: usize },

    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` must be {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("record {index}: invalid id `{id}`: must match ^[a-z0-9_]+$")]
    InvalidId { index: usize, id: String },

    #[error(
        "record {index} (`{id}`): function_signature must contain `def ` or start with `class `"
    )]
    SignatureMarker { index: usize, id: String },

    #[error("record {index} (`{id}`): {message}")]
    Malformed {
        index: usize,
        id: String,
        message: String,
    },

    #[error("duplicate id `{id}` in records {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

/// Catalog-level failures: loading, or one or more invalid records.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not a JSON array of records: {message}")]
    Parse { message: String },

    #[error("catalog validation failed:\n{}", format_errors(errors))]
    Invalid { errors: Vec<ValidationError> },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

const REQUIRED_STRING_FIELDS: [&str; 4] = ["id", "title", "summary", "function_signature"];

/// Validate one raw record into a typed [`Spec`].
///
/// Pure: no side effects, the input is not modified. The index is only used
/// for error reporting.
pub fn validate_record(index: usize, record: &Value) -> Result<Spec, ValidationError> {
    let obj = record
        .as_object()
        .ok_or(ValidationError::NotAnObject { index })?;

    for field in REQUIRED_STRING_FIELDS {
        match obj.get(field) {
            None => return Err(ValidationError::MissingField { index, field }),
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(ValidationError::WrongType {
                    index,
                    field,
                    expected: "a string",
                })
            }
        }
    }

    match obj.get("outputs") {
        None => {
            return Err(ValidationError::MissingField {
                index,
                field: "outputs",
            })
        }
        Some(Value::Object(_)) => {}
        Some(_) => {
            return Err(ValidationError::WrongType {
                index,
                field: "outputs",
                expected: "a mapping",
            })
        }
    }

    // Required fields are known strings past this point.
    let id = obj["id"].as_str().unwrap_or_default().to_string();

    if !id_regex().is_match(&id) {
        return Err(ValidationError::InvalidId { index, id });
    }

    let signature = obj["function_signature"].as_str().unwrap_or_default();
    if !has_signature_marker(signature) {
        return Err(ValidationError::SignatureMarker { index, id });
    }

    serde_json::from_value(record.clone()).map_err(|e| ValidationError::Malformed {
        index,
        id,
        message: e.to_string(),
    })
}

/// Validate a whole catalog.
///
/// One uniform policy everywhere: every record is checked and every failure
/// (including duplicate ids) is accumulated into [`CatalogError::Invalid`].
/// N well-formed records yield exactly N specs, order preserved.
pub fn validate_catalog(records: &[Value]) -> Result<Vec<Spec>, CatalogError> {
    let mut specs = Vec::with_capacity(records.len());
    let mut errors = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, record) in records.iter().enumerate() {
        match validate_record(index, record) {
            Ok(spec) => {
                if let Some(&first) = seen.get(&spec.id) {
                    errors.push(ValidationError::DuplicateId {
                        id: spec.id.clone(),
                        first,
                        second: index,
                    });
                } else {
                    seen.insert(spec.id.clone(), index);
                    specs.push(spec);
                }
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(specs)
    } else {
        Err(CatalogError::Invalid { errors })
    }
}
