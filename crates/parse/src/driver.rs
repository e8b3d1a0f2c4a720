use crate::coerce::color::{ColorNames, CssColorNames};
use crate::draft::Draft;
use crate::engine;
use crate::error::{ParseError, Warning};
use crate::handlers::RootHandler;
use crate::hints::Hints;
use crate::locator::{FileFallbackLocator, ResourceLocator};
use crate::process::ProcessCatalog;
use crate::uom::{OgcUomMapper, UomMapper};
use serde_json::Value;
use std::sync::Arc;
use ysld_model::{Style, StyledLayerDescriptor};
use ysld_zoom::ZoomContextFinder;

/// The completed model and whatever was recovered from along the way.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub document: StyledLayerDescriptor,
    pub warnings: Vec<Warning>,
}

impl ParseOutcome {
    pub fn style(&self) -> Option<&Style> {
        self.document.default_style()
    }
}

/// Parses style documents into the style model.
///
/// # Example
///
/// ```
/// use ysld_parse::StyleParser;
///
/// let outcome = StyleParser::new()
///     .parse_str(r##"{"polygon": {"fill-color": "#ff0000"}}"##)
///     .unwrap();
/// let rule = &outcome.style().unwrap().feature_type_styles[0].rules[0];
/// assert_eq!(rule.symbolizers.len(), 1);
/// ```
#[derive(Clone)]
pub struct StyleParser {
    zoom_finders: Vec<Arc<dyn ZoomContextFinder>>,
    locator: Arc<dyn ResourceLocator>,
    uom: Arc<dyn UomMapper>,
    colors: Arc<dyn ColorNames>,
    processes: Option<Arc<dyn ProcessCatalog>>,
}

impl Default for StyleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleParser {
    pub fn new() -> Self {
        Self {
            zoom_finders: Vec::new(),
            locator: Arc::new(FileFallbackLocator),
            uom: Arc::new(OgcUomMapper),
            colors: Arc::new(CssColorNames),
            processes: None,
        }
    }

    /// Adds a finder for named grids, consulted before the well-known ones.
    pub fn with_zoom_finder(mut self, finder: Arc<dyn ZoomContextFinder>) -> Self {
        self.zoom_finders.push(finder);
        self
    }

    pub fn with_resource_locator(mut self, locator: Arc<dyn ResourceLocator>) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_uom_mapper(mut self, uom: Arc<dyn UomMapper>) -> Self {
        self.uom = uom;
        self
    }

    pub fn with_color_names(mut self, colors: Arc<dyn ColorNames>) -> Self {
        self.colors = colors;
        self
    }

    /// Enables `transform` sections for the processes `catalog` describes.
    pub fn with_process_catalog(mut self, catalog: Arc<dyn ProcessCatalog>) -> Self {
        self.processes = Some(catalog);
        self
    }

    pub fn parse_str(&self, text: &str) -> Result<ParseOutcome, ParseError> {
        let document: Value = serde_json::from_str(text)?;
        self.parse_value(&document)
    }

    pub fn parse_value(&self, document: &Value) -> Result<ParseOutcome, ParseError> {
        let hints = Hints::new(
            self.zoom_finders.clone(),
            Arc::clone(&self.locator),
            Arc::clone(&self.uom),
            Arc::clone(&self.colors),
            self.processes.clone(),
        );
        let sld = Draft::created(StyledLayerDescriptor::default());
        let warnings = engine::run(document, RootHandler::new(sld.clone()), &hints)?;
        let document = sld.take().unwrap_or_default();
        log::debug!(
            "Parsed {} style(s) with {} warning(s)",
            document.styles.len(),
            warnings.len()
        );
        Ok(ParseOutcome { document, warnings })
    }
}
