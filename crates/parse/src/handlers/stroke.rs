use super::graphic::GraphicHandler;
use super::{color_at, expression_at};
use crate::coerce::{expression_from_value, slot_expression};
use crate::draft::Draft;
use crate::engine::{Context, Handler, child};
use crate::error::ParseError;
use serde_json::Value;
use ysld_model::{Expression, Graphic, Stroke};

/// `stroke-*` keys of the node it runs on.
pub struct StrokeHandler {
    stroke: Draft<Stroke>,
}

impl StrokeHandler {
    pub fn new(stroke: Draft<Stroke>) -> Self {
        Self { stroke }
    }
}

impl Handler for StrokeHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let stroke = self.stroke;
        if let Some(color) = color_at(node, "stroke-color", ctx)? {
            stroke.with(|s| s.color = Some(color));
        }
        let fields: [(&str, fn(&mut Stroke) -> &mut Option<Expression>); 5] = [
            ("stroke-width", |s| &mut s.width),
            ("stroke-opacity", |s| &mut s.opacity),
            ("stroke-linejoin", |s| &mut s.line_join),
            ("stroke-linecap", |s| &mut s.line_cap),
            ("stroke-dashoffset", |s| &mut s.dash_offset),
        ];
        for (key, field) in fields {
            if let Some(value) = expression_at(node, key)? {
                stroke.with(|s| *field(s) = Some(value));
            }
        }
        if let Some(value) = child(node, "stroke-dasharray") {
            let dashes = dash_array(value)?;
            if !dashes.is_empty() {
                stroke.with(|s| s.dash_array = Some(dashes));
            }
        }

        let graphic_stroke: Draft<Graphic> = Draft::new();
        let target = stroke.clone();
        ctx.delegate_key(
            "stroke-graphic",
            &graphic_stroke,
            GraphicHandler::new(graphic_stroke.clone()),
            move |g| target.with(|s| s.graphic_stroke = Some(g)),
        );
        let graphic_fill: Draft<Graphic> = Draft::new();
        ctx.delegate_key(
            "stroke-graphic-fill",
            &graphic_fill,
            GraphicHandler::new(graphic_fill.clone()),
            move |g| stroke.with(|s| s.graphic_fill = Some(g)),
        );
        Ok(())
    }
}

/// Dash lengths, either space separated in one string or as a sequence.
fn dash_array(value: &Value) -> Result<Vec<Expression>, ParseError> {
    match value {
        Value::String(text) => text.split_whitespace().map(slot_expression).collect(),
        Value::Array(items) => {
            let mut dashes = Vec::with_capacity(items.len());
            for item in items {
                dashes.extend(expression_from_value(item)?);
            }
            Ok(dashes)
        }
        other => Ok(expression_from_value(other)?.into_iter().collect()),
    }
}
