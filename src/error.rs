use thiserror::Error;
use ysld_parse::ParseError;

/// Errors from loading and parsing a style document.
#[derive(Error, Debug)]
pub enum YsldError {
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for YsldError {
    fn from(e: serde_json::Error) -> Self {
        YsldError::Parse(ParseError::Json(e))
    }
}
