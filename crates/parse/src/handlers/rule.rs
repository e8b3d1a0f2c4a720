use super::graphic::GraphicHandler;
use super::symbolizer::SymbolizersHandler;
use super::{bool_at, describe, elements, text_at};
use crate::coerce::{Tuple, filter_from_text};
use crate::draft::Draft;
use crate::engine::{Context, Handler, child};
use crate::error::ParseError;
use serde_json::Value;
use ysld_model::{FeatureTypeStyle, Graphic, Rule};
use ysld_zoom::ScaleRange;

const RANGE: Tuple = Tuple::exact(&["min", "max"]);

/// The `rules` sequence of a feature type style.
pub struct RulesHandler {
    fts: Draft<FeatureTypeStyle>,
}

impl RulesHandler {
    pub fn new(fts: Draft<FeatureTypeStyle>) -> Self {
        Self { fts }
    }
}

impl Handler for RulesHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let items = elements(node, "rules")?;
        let drafts: Vec<Draft<Rule>> = items.iter().map(|_| Draft::created(Rule::default())).collect();
        let fts = self.fts;
        ctx.commit_all(drafts.clone(), move |rules| fts.with(|f| f.rules.extend(rules)));
        for (item, draft) in items.iter().zip(drafts).rev() {
            ctx.push(item, RuleHandler::new(draft));
        }
        Ok(())
    }
}

pub struct RuleHandler {
    rule: Draft<Rule>,
}

impl RuleHandler {
    pub fn new(rule: Draft<Rule>) -> Self {
        Self { rule }
    }
}

impl Handler for RuleHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let rule = self.rule;
        describe(node, &rule, |r, key, text| match key {
            "name" => r.name = Some(text),
            "title" => r.title = Some(text),
            _ => r.abstract_text = Some(text),
        });

        if let Some(text) = text_at(node, "filter") {
            let filter = filter_from_text(&text)?;
            rule.with(|r| r.filter = Some(filter));
        }
        if let Some(is_else) = bool_at(node, "else")? {
            rule.with(|r| r.is_else = is_else);
        }

        let range = match (child(node, "scale"), child(node, "zoom")) {
            (Some(scale), zoom) => {
                if zoom.is_some() {
                    log::debug!("Rule has both scale and zoom, using scale");
                }
                Some(scale_range(scale)?)
            }
            (None, Some(zoom)) => Some(zoom_range(zoom, ctx)?),
            (None, None) => None,
        };
        if let Some(range) = range {
            rule.with(|r| {
                r.min_scale_denominator = range.min();
                r.max_scale_denominator = range.max();
            });
        }

        let legend: Draft<Graphic> = Draft::new();
        let target = rule.clone();
        ctx.delegate_key("legend", &legend, GraphicHandler::new(legend.clone()), move |g| {
            target.with(|r| r.legend = Some(g))
        });
        ctx.push_key("symbolizers", SymbolizersHandler::new(rule));
        Ok(())
    }
}

/// `true` for the keywords standing for an open bound.
fn is_open(slot: &Option<String>) -> bool {
    match slot {
        None => true,
        Some(text) => matches!(text.trim().to_ascii_lowercase().as_str(), "min" | "max" | "null"),
    }
}

/// A literal `[min, max]` scale denominator range.
pub(crate) fn scale_range(value: &Value) -> Result<ScaleRange, ParseError> {
    let slots = RANGE.parse(value)?;
    let bound = |slot: &Option<String>, open: f64| -> Result<f64, ParseError> {
        match slot {
            _ if is_open(slot) => Ok(open),
            Some(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| ParseError::shape(value, "[min, max] scale denominators")),
            None => Ok(open),
        }
    };
    let min = bound(&slots[0], 0.0)?;
    let max = bound(&slots[1], f64::INFINITY)?;
    Ok(ScaleRange::new(min, max)?)
}

/// A `[min, max]` zoom level range converted through the document's zoom
/// context.
pub(crate) fn zoom_range(value: &Value, ctx: &Context<'_, '_>) -> Result<ScaleRange, ParseError> {
    let slots = RANGE.parse(value)?;
    let level = |slot: &Option<String>| -> Result<Option<i32>, ParseError> {
        match slot {
            _ if is_open(slot) => Ok(None),
            Some(text) => text
                .trim()
                .parse::<i32>()
                .map(Some)
                .map_err(|_| ParseError::shape(value, "[min, max] zoom levels")),
            None => Ok(None),
        }
    };
    let min = level(&slots[0])?;
    let max = level(&slots[1])?;
    Ok(ctx.hints().zoom_context().range(min, max)?)
}
