//! Catalog loading.

use std::path::Path;

use serde_json::Value;

use crate::spec::Spec;
use crate::validate::{validate_catalog, CatalogError};

/// The catalog shipped with the binary.
const EMBEDDED_CATALOG: &str = include_str!("../catalog/dsa_catalog.json");

/// The raw catalog: an ordered sequence of JSON records.
///
/// Loaded once, read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Value>,
}

impl Catalog {
    /// Load the embedded default catalog.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse catalog JSON: the top level must be an array.
    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(contents).map_err(|e| CatalogError::Parse {
            message: e.to_string(),
        })?;

        match value {
            Value::Array(records) => Ok(Self { records }),
            other => Err(CatalogError::Parse {
                message: format!("expected an array, got {}", json_type_name(&other)),
            }),
        }
    }

    /// The raw records, in catalog order.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of raw records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate every record, yielding typed specs in catalog order.
    pub fn validate(&self) -> Result<Vec<Spec>, CatalogError> {
        validate_catalog(&self.records)
    }

    /// Validate, then find one spec by id.
    pub fn find(&self, id: &str) -> Result<Option<Spec>, CatalogError> {
        let specs = self.validate()?;
        Ok(specs.into_iter().find(|s| s.id == id))
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
