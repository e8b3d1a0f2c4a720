use super::graphic::GraphicHandler;
use super::{color_at, expression_at};
use crate::draft::Draft;
use crate::engine::{Context, Handler};
use crate::error::ParseError;
use serde_json::Value;
use ysld_model::{Fill, Graphic};

/// `fill-*` keys of the node it runs on.
pub struct FillHandler {
    fill: Draft<Fill>,
}

impl FillHandler {
    pub fn new(fill: Draft<Fill>) -> Self {
        Self { fill }
    }
}

impl Handler for FillHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let fill = self.fill;
        if let Some(color) = color_at(node, "fill-color", ctx)? {
            fill.with(|f| f.color = Some(color));
        }
        if let Some(opacity) = expression_at(node, "fill-opacity")? {
            fill.with(|f| f.opacity = Some(opacity));
        }

        let graphic: Draft<Graphic> = Draft::new();
        ctx.delegate_key("fill-graphic", &graphic, GraphicHandler::new(graphic.clone()), move |g| {
            fill.with(|f| f.graphic_fill = Some(g))
        });
        Ok(())
    }
}
