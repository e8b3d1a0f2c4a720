//! Style documents to a typed cartographic style model.
//!
//! This crate ties the workspace together:
//!
//! - `ysld-model`: the style model produced by parsing.
//! - `ysld-zoom`: zoom level to scale denominator strategies.
//! - `ysld-parse`: the handler-stack parser.
//!
//! ```
//! let outcome = ysld::parse_str(r#"{
//!     "rules": [{"scale": [1000, "max"], "symbolizers": [{"line": {"stroke-width": 2}}]}]
//! }"#).unwrap();
//! let rule = &outcome.style().unwrap().feature_type_styles[0].rules[0];
//! assert_eq!(rule.min_scale_denominator, 1000.0);
//! ```

pub mod error;

pub use error::YsldError;
pub use ysld_model as model;
pub use ysld_parse::{
    BaseUrlLocator, ColorNames, CssColorNames, FileFallbackLocator, InputRole, OgcUomMapper,
    ParseError, ParseOutcome, ProcessCatalog, ProcessDescription, ProcessInput, ResourceLocator,
    StaticProcessCatalog, StyleParser, UomMapper, Warning, WarningKind,
};
pub use ysld_zoom as zoom;

use std::fs;
use std::path::Path;

/// Parses a document with the default collaborators.
pub fn parse_str(text: &str) -> Result<ParseOutcome, ParseError> {
    StyleParser::new().parse_str(text)
}

/// Reads and parses a document file.
pub fn parse_file(parser: &StyleParser, path: impl AsRef<Path>) -> Result<ParseOutcome, YsldError> {
    let text = fs::read_to_string(path)?;
    Ok(parser.parse_str(&text)?)
}
