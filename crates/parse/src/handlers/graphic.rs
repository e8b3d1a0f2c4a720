use super::fill::FillHandler;
use super::stroke::StrokeHandler;
use super::{anchor_at, displacement_at, elements, expression_at, name_at, text_at};
use crate::draft::Draft;
use crate::engine::{Context, Handler, child};
use crate::error::ParseError;
use serde_json::Value;
use ysld_model::{ExternalGraphic, Fill, Graphic, GraphicalSymbol, Mark, Stroke};

/// Graphic keys: `symbols`, `size`, `opacity`, `rotation`, `anchor`,
/// `displacement`, `gap` and `initial-gap`.
pub struct GraphicHandler {
    graphic: Draft<Graphic>,
}

impl GraphicHandler {
    pub fn new(graphic: Draft<Graphic>) -> Self {
        Self { graphic }
    }
}

impl Handler for GraphicHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let graphic = self.graphic;
        if let Some(size) = expression_at(node, "size")? {
            graphic.with(|g| g.size = Some(size));
        }
        if let Some(opacity) = expression_at(node, "opacity")? {
            graphic.with(|g| g.opacity = Some(opacity));
        }
        if let Some(rotation) = expression_at(node, "rotation")? {
            graphic.with(|g| g.rotation = Some(rotation));
        }
        if let Some(anchor) = anchor_at(node, "anchor")? {
            graphic.with(|g| g.anchor = Some(anchor));
        }
        if let Some(displacement) = displacement_at(node, "displacement")? {
            graphic.with(|g| g.displacement = Some(displacement));
        }
        if let Some(gap) = expression_at(node, "gap")? {
            graphic.with(|g| g.gap = Some(gap));
        }
        if let Some(initial_gap) = expression_at(node, "initial-gap")? {
            graphic.with(|g| g.initial_gap = Some(initial_gap));
        }
        ctx.push_key("symbols", SymbolsHandler::new(graphic));
        Ok(())
    }
}

/// The `symbols` sequence: each element a `mark` or an `external` graphic.
pub struct SymbolsHandler {
    graphic: Draft<Graphic>,
}

impl SymbolsHandler {
    pub fn new(graphic: Draft<Graphic>) -> Self {
        Self { graphic }
    }
}

impl Handler for SymbolsHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let items = elements(node, "graphic symbols")?;
        let drafts: Vec<Draft<GraphicalSymbol>> = items.iter().map(|_| Draft::new()).collect();
        let graphic = self.graphic;
        ctx.commit_all(drafts.clone(), move |all| graphic.with(|g| g.symbols.extend(all)));

        for (item, target) in items.iter().zip(drafts).rev() {
            if let Some(body) = child(item, "mark") {
                let mark = Draft::created(Mark::default());
                ctx.delegate(body, &mark, MarkHandler::new(mark.clone()), move |m| {
                    target.set(GraphicalSymbol::Mark(m))
                });
            } else if let Some(body) = child(item, "external") {
                let external: Draft<ExternalGraphic> = Draft::new();
                ctx.delegate(body, &external, ExternalGraphicHandler::new(external.clone()), move |e| {
                    target.set(GraphicalSymbol::External(e))
                });
            } else {
                log::debug!("Graphic symbol without 'mark' or 'external', ignoring");
            }
        }
        Ok(())
    }
}

/// A well-known shape with its own fill and stroke keys.
pub struct MarkHandler {
    mark: Draft<Mark>,
}

impl MarkHandler {
    pub fn new(mark: Draft<Mark>) -> Self {
        Self { mark }
    }
}

impl Handler for MarkHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let mark = self.mark;
        if let Some(shape) = name_at(node, "shape")? {
            mark.with(|m| m.shape = Some(shape));
        }

        let fill: Draft<Fill> = Draft::new();
        let target = mark.clone();
        ctx.delegate(node, &fill, FillHandler::new(fill.clone()), move |f| {
            target.with(|m| m.fill = Some(f))
        });
        let stroke: Draft<Stroke> = Draft::new();
        ctx.delegate(node, &stroke, StrokeHandler::new(stroke.clone()), move |s| {
            mark.with(|m| m.stroke = Some(s))
        });
        Ok(())
    }
}

/// An image referenced by `url`, resolved through the resource locator.
pub struct ExternalGraphicHandler {
    external: Draft<ExternalGraphic>,
}

impl ExternalGraphicHandler {
    pub fn new(external: Draft<ExternalGraphic>) -> Self {
        Self { external }
    }
}

impl Handler for ExternalGraphicHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let url = text_at(node, "url").ok_or_else(|| ParseError::missing_key("url", "external graphic"))?;
        let location = ctx.hints().locate(&url);
        let format = text_at(node, "format");
        self.external.set(ExternalGraphic { location, format });
        Ok(())
    }
}
