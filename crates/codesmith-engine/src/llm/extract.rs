//! Tolerant extraction of the text payload from a completion response.
//!
//! The remote schema has drifted before; extraction tries a small ordered
//! list of known envelope shapes and degrades to a string rendering of the
//! whole payload rather than failing.

use serde_json::Value;

/// Outcome of payload extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Text found under one of the known envelope shapes.
    Extracted(String),
    /// No shape matched; the raw payload rendered as a string.
    Unrecognized(String),
}

impl Extraction {
    /// The text either way; Unrecognized is a leniency fallback, not an error.
    pub fn into_text(self) -> String {
        match self {
            Self::Extracted(text) | Self::Unrecognized(text) => text,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Extracted(_))
    }
}

/// Try the known envelope shapes in order, first success wins.
pub fn extract_content(payload: &Value) -> Extraction {
    let strategies = [nested_choice_content, flat_content, flat_text];

    for strategy in strategies {
        if let Some(text) = strategy(payload) {
            return Extraction::Extracted(text.trim().to_string());
        }
    }

    Extraction::Unrecognized(payload.to_string())
}

/// The default shape: `choices[0].message.content`.
fn nested_choice_content(payload: &Value) -> Option<String> {
    payload
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(String::from)
}

fn flat_content(payload: &Value) -> Option<String> {
    payload.get("content")?.as_str().map(String::from)
}

fn flat_text(payload: &Value) -> Option<String> {
    payload.get("text")?.as_str().map(String::from)
}
