use serde_json::Value;
use std::fmt;
use thiserror::Error;
use ysld_zoom::ZoomError;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed value {value}, expected {expected}")]
    Shape { value: String, expected: String },

    #[error("Missing required key '{key}' in {context}")]
    MissingKey { key: String, context: String },

    #[error("Conflicting definitions: {0}")]
    Conflict(String),

    #[error("Invalid expression '{input}': {message}")]
    Expression { input: String, message: String },

    #[error("Zoom error: {0}")]
    Zoom(#[from] ZoomError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hint '{0}' can only be set once per document")]
    HintAlreadySet(&'static str),
}

impl ParseError {
    pub fn shape(value: &Value, expected: impl Into<String>) -> Self {
        ParseError::Shape { value: display_raw(value), expected: expected.into() }
    }

    pub fn missing_key(key: impl Into<String>, context: impl Into<String>) -> Self {
        ParseError::MissingKey { key: key.into(), context: context.into() }
    }

    pub fn expression(input: impl Into<String>, message: impl Into<String>) -> Self {
        ParseError::Expression { input: input.into(), message: message.into() }
    }
}

/// Renders a document value the way it reads in a style document:
/// sequences bracketed and comma separated, strings unquoted.
pub fn display_raw(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(display_raw).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(_) => value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// An enum-like value was not recognised; the field was left unset.
    UnknownValue,
    /// A capability the document asks for is not available; the feature was skipped.
    MissingFeature,
}

/// A recoverable problem found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            WarningKind::UnknownValue => "unknown value",
            WarningKind::MissingFeature => "missing feature",
        };
        write!(f, "{kind}: {}", self.message)
    }
}
