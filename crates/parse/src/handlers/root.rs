use super::feature_style::FeatureStylesHandler;
use super::rule::RulesHandler;
use super::symbolizer::{SYMBOLIZER_KEYS, SymbolizerDispatch, SymbolizersHandler};
use super::{describe, elements, integer_at, number_at, text_at};
use crate::draft::Draft;
use crate::engine::{Context, Handler, child};
use crate::error::ParseError;
use serde_json::Value;
use std::sync::Arc;
use ysld_model::{FeatureTypeStyle, Rule, Style, StyledLayerDescriptor, Symbolizer};
use ysld_zoom::{ListZoomContext, RatioZoomContext, ZoomContext};

/// Seeds the model from the top of the document.
///
/// Installs the grid, if any, before anything else runs, then handles the
/// first top-level shape present: `feature-styles`, `rules`, `symbolizers`,
/// or symbolizer keys directly on the root.
pub struct RootHandler {
    sld: Draft<StyledLayerDescriptor>,
}

impl RootHandler {
    pub fn new(sld: Draft<StyledLayerDescriptor>) -> Self {
        Self { sld }
    }
}

impl Handler for RootHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        if !node.is_object() {
            return Err(ParseError::shape(node, "a mapping at the document root"));
        }
        let sld = self.sld;
        if let Some(name) = text_at(node, "name") {
            sld.with(|d| d.name = Some(name));
        }

        if let Some(grid) = child(node, "grid") {
            install_grid(grid, ctx)?;
        }

        let style = Draft::created(Style::default());
        describe(node, &style, |s, key, text| match key {
            "name" => s.name = Some(text),
            "title" => s.title = Some(text),
            _ => s.abstract_text = Some(text),
        });
        ctx.commit(&style, move |s| sld.with(|d| d.styles.push(s)));

        if let Some(list) = child(node, "feature-styles") {
            ctx.push(list, FeatureStylesHandler::new(style));
            return Ok(());
        }

        // The remaining shapes live in an implicit feature type style.
        let fts = Draft::created(FeatureTypeStyle::default());
        ctx.commit(&fts, move |f| style.with(|s| s.feature_type_styles.push(f)));

        if let Some(list) = child(node, "rules") {
            ctx.push(list, RulesHandler::new(fts));
            return Ok(());
        }

        let rule = Draft::created(Rule::default());
        ctx.commit(&rule, move |r| fts.with(|f| f.rules.push(r)));

        if let Some(list) = child(node, "symbolizers") {
            ctx.push(list, SymbolizersHandler::new(rule));
        } else if SYMBOLIZER_KEYS.iter().any(|key| child(node, key).is_some()) {
            let symbolizer: Draft<Symbolizer> = Draft::new();
            ctx.commit(&symbolizer, move |s| rule.with(|r| r.symbolizers.push(s)));
            ctx.push(node, SymbolizerDispatch::new(symbolizer));
        } else {
            log::debug!("Document has no rules or symbolizers");
        }
        Ok(())
    }
}

fn install_grid(grid: &Value, ctx: &mut Context<'_, '_>) -> Result<(), ParseError> {
    let hints = ctx.hints();
    let zoom: Arc<dyn ZoomContext> = if let Some(name) = text_at(grid, "name") {
        ysld_zoom::resolve(&name, hints.zoom_finders())?
    } else if let Some(scales) = child(grid, "scales") {
        let scales = elements(scales, "scale denominators")?
            .iter()
            .map(|v| v.as_f64().ok_or_else(|| ParseError::shape(v, "a scale denominator")))
            .collect::<Result<Vec<_>, _>>()?;
        let initial_level = integer_at(grid, "initial-level")?.unwrap_or(0);
        Arc::new(ListZoomContext::new(scales, initial_level)?)
    } else if let Some(initial_scale) = number_at(grid, "initial-scale")? {
        let initial_level = integer_at(grid, "initial-level")?.unwrap_or(0);
        let ratio = number_at(grid, "ratio")?.unwrap_or(2.0);
        Arc::new(RatioZoomContext::new(initial_level, initial_scale, ratio)?)
    } else {
        return Err(ParseError::missing_key("name, scales or initial-scale", "grid"));
    };
    hints.set_zoom_context(zoom)
}
