//! Document-scoped hints.
//!
//! A fresh [`Hints`] value is built for every document. The collaborators are
//! fixed at construction; the zoom context can be installed once, by the root
//! handler, and is read-only afterwards.

use crate::coerce::color::{ColorNames, CssColorNames};
use crate::error::ParseError;
use crate::locator::{FileFallbackLocator, ResourceLocator};
use crate::process::ProcessCatalog;
use crate::uom::{OgcUomMapper, UomMapper};
use std::cell::OnceCell;
use std::sync::Arc;
use ysld_zoom::{WellKnownZoomContextFinder, ZoomContext, ZoomContextFinder};

pub struct Hints {
    zoom_finders: Vec<Arc<dyn ZoomContextFinder>>,
    zoom_context: OnceCell<Arc<dyn ZoomContext>>,
    locator: Arc<dyn ResourceLocator>,
    uom: Arc<dyn UomMapper>,
    colors: Arc<dyn ColorNames>,
    processes: Option<Arc<dyn ProcessCatalog>>,
}

impl Default for Hints {
    fn default() -> Self {
        Self {
            zoom_finders: Vec::new(),
            zoom_context: OnceCell::new(),
            locator: Arc::new(FileFallbackLocator),
            uom: Arc::new(OgcUomMapper),
            colors: Arc::new(CssColorNames),
            processes: None,
        }
    }
}

impl Hints {
    pub fn new(
        zoom_finders: Vec<Arc<dyn ZoomContextFinder>>,
        locator: Arc<dyn ResourceLocator>,
        uom: Arc<dyn UomMapper>,
        colors: Arc<dyn ColorNames>,
        processes: Option<Arc<dyn ProcessCatalog>>,
    ) -> Self {
        Self { zoom_finders, zoom_context: OnceCell::new(), locator, uom, colors, processes }
    }

    /// Caller-supplied finders, consulted before the well-known grids.
    pub fn zoom_finders(&self) -> &[Arc<dyn ZoomContextFinder>] {
        &self.zoom_finders
    }

    pub fn set_zoom_context(&self, context: Arc<dyn ZoomContext>) -> Result<(), ParseError> {
        log::debug!("Installing zoom context {context:?}");
        self.zoom_context
            .set(context)
            .map_err(|_| ParseError::HintAlreadySet("zoom context"))
    }

    /// The installed zoom context, or the well-known default grid.
    pub fn zoom_context(&self) -> Arc<dyn ZoomContext> {
        match self.zoom_context.get() {
            Some(context) => Arc::clone(context),
            None => WellKnownZoomContextFinder::instance().default_context(),
        }
    }

    pub fn locator(&self) -> &dyn ResourceLocator {
        self.locator.as_ref()
    }

    /// Resolves a resource reference, reading it as a local file when the
    /// locator cannot.
    pub fn locate(&self, raw: &str) -> String {
        self.locator.locate(raw).unwrap_or_else(|| format!("file:{raw}"))
    }

    pub fn uom(&self) -> &dyn UomMapper {
        self.uom.as_ref()
    }

    pub fn colors(&self) -> &dyn ColorNames {
        self.colors.as_ref()
    }

    pub fn processes(&self) -> Option<&dyn ProcessCatalog> {
        self.processes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ysld_zoom::RatioZoomContext;

    #[test]
    fn test_zoom_context_is_set_once() {
        let hints = Hints::default();
        let default = hints.zoom_context().scale_denominator(0).unwrap();
        assert!((default - 559_082_263.950_892_9).abs() < 1e-6);

        hints.set_zoom_context(Arc::new(RatioZoomContext::new(0, 1000.0, 2.0).unwrap())).unwrap();
        assert_eq!(hints.zoom_context().scale_denominator(1).unwrap(), 500.0);

        let again = hints.set_zoom_context(Arc::new(RatioZoomContext::new(0, 10.0, 2.0).unwrap()));
        assert!(matches!(again, Err(ParseError::HintAlreadySet(_))));
        assert_eq!(hints.zoom_context().scale_denominator(0).unwrap(), 1000.0);
    }

    #[test]
    fn test_locate_falls_back_to_file() {
        let hints = Hints::default();
        assert_eq!(hints.locate("http://example.com/pin.png"), "http://example.com/pin.png");
        assert_eq!(hints.locate("icons/pin.png"), "file:icons/pin.png");
    }
}
