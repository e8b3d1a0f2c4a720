use super::rule::RulesHandler;
use super::transform::TransformHandler;
use super::{describe, elements, vendor_options};
use crate::draft::Draft;
use crate::engine::{Context, Handler};
use crate::error::ParseError;
use serde_json::Value;
use ysld_model::{FeatureTypeStyle, Style};

/// The `feature-styles` sequence of a style.
pub struct FeatureStylesHandler {
    style: Draft<Style>,
}

impl FeatureStylesHandler {
    pub fn new(style: Draft<Style>) -> Self {
        Self { style }
    }
}

impl Handler for FeatureStylesHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let items = elements(node, "feature styles")?;
        let drafts: Vec<Draft<FeatureTypeStyle>> =
            items.iter().map(|_| Draft::created(FeatureTypeStyle::default())).collect();
        let style = self.style;
        ctx.commit_all(drafts.clone(), move |all| style.with(|s| s.feature_type_styles.extend(all)));
        for (item, draft) in items.iter().zip(drafts).rev() {
            ctx.push(item, FeatureStyleHandler::new(draft));
        }
        Ok(())
    }
}

pub struct FeatureStyleHandler {
    fts: Draft<FeatureTypeStyle>,
}

impl FeatureStyleHandler {
    pub fn new(fts: Draft<FeatureTypeStyle>) -> Self {
        Self { fts }
    }
}

impl Handler for FeatureStyleHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        describe(node, &self.fts, |f, key, text| match key {
            "name" => f.name = Some(text),
            "title" => f.title = Some(text),
            _ => f.abstract_text = Some(text),
        });
        let options = vendor_options(node);
        if !options.is_empty() {
            self.fts.with(|f| f.options = options);
        }
        ctx.push_key("transform", TransformHandler::new(self.fts.clone()));
        ctx.push_key("rules", RulesHandler::new(self.fts));
        Ok(())
    }
}
