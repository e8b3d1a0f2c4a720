use super::fill::FillHandler;
use super::graphic::GraphicHandler;
use super::symbolizer::read_base;
use super::{anchor_at, displacement_at, expression_at, name_at, text_at};
use crate::draft::Draft;
use crate::engine::{Context, Handler};
use crate::error::{ParseError, WarningKind};
use serde_json::Value;
use ysld_model::{
    Expression, Fill, Font, Graphic, Halo, LabelPlacement, LinePlacement, PointPlacement,
    TextSymbolizer,
};

pub struct TextHandler {
    symbolizer: Draft<TextSymbolizer>,
}

impl TextHandler {
    pub fn new(symbolizer: Draft<TextSymbolizer>) -> Self {
        Self { symbolizer }
    }
}

impl Handler for TextHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let base = read_base(node, ctx)?;
        let label = expression_at(node, "label")?;
        let priority = expression_at(node, "priority")?;
        let placement = placement(node, ctx)?;
        let symbolizer = self.symbolizer;
        symbolizer.with(|s| {
            s.base = base;
            s.label = label;
            s.priority = priority;
            s.placement = placement;
        });

        let font: Draft<Font> = Draft::new();
        let target = symbolizer.clone();
        ctx.delegate(node, &font, FontHandler::new(font.clone()), move |f| {
            target.with(|s| s.font = Some(f))
        });

        let fill: Draft<Fill> = Draft::new();
        let target = symbolizer.clone();
        ctx.delegate(node, &fill, FillHandler::new(fill.clone()), move |f| {
            target.with(|s| s.fill = Some(f))
        });

        let halo: Draft<Halo> = Draft::new();
        let target = symbolizer.clone();
        ctx.delegate_key("halo", &halo, HaloHandler::new(halo.clone()), move |h| {
            target.with(|s| s.halo = Some(h))
        });

        let graphic: Draft<Graphic> = Draft::new();
        ctx.delegate_key("graphic", &graphic, GraphicHandler::new(graphic.clone()), move |g| {
            symbolizer.with(|s| s.graphic = Some(g))
        });
        Ok(())
    }
}

/// Point placement by default; `placement: line` turns `offset` into a
/// perpendicular offset.
fn placement(node: &Value, ctx: &mut Context<'_, '_>) -> Result<Option<LabelPlacement>, ParseError> {
    let kind = text_at(node, "placement").map(|k| k.trim().to_ascii_lowercase());
    match kind.as_deref() {
        None | Some("point") => {
            let point = PointPlacement {
                anchor: anchor_at(node, "anchor")?,
                displacement: displacement_at(node, "displacement")?,
                rotation: expression_at(node, "rotation")?,
            };
            let empty = point.anchor.is_none() && point.displacement.is_none() && point.rotation.is_none();
            Ok((!empty || kind.is_some()).then_some(LabelPlacement::Point(point)))
        }
        Some("line") => Ok(Some(LabelPlacement::Line(LinePlacement {
            perpendicular_offset: expression_at(node, "offset")?,
        }))),
        Some(other) => {
            ctx.warn(WarningKind::UnknownValue, format!("Unknown label placement '{other}'"));
            Ok(None)
        }
    }
}

/// `font-family`, `font-size`, `font-style` and `font-weight`.
pub struct FontHandler {
    font: Draft<Font>,
}

impl FontHandler {
    pub fn new(font: Draft<Font>) -> Self {
        Self { font }
    }
}

impl Handler for FontHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, _ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        if let Some(family) = name_at(node, "font-family")? {
            self.font.with(|f| f.family = Some(family));
        }
        let fields: [(&str, fn(&mut Font) -> &mut Option<Expression>); 3] = [
            ("font-size", |f| &mut f.size),
            ("font-style", |f| &mut f.style),
            ("font-weight", |f| &mut f.weight),
        ];
        for (key, field) in fields {
            if let Some(value) = expression_at(node, key)? {
                self.font.with(|f| *field(f) = Some(value));
            }
        }
        Ok(())
    }
}

/// A `halo` mapping: `radius` plus fill keys.
pub struct HaloHandler {
    halo: Draft<Halo>,
}

impl HaloHandler {
    pub fn new(halo: Draft<Halo>) -> Self {
        Self { halo }
    }
}

impl Handler for HaloHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let halo = self.halo;
        if let Some(radius) = expression_at(node, "radius")? {
            halo.with(|h| h.radius = Some(radius));
        }
        let fill: Draft<Fill> = Draft::new();
        ctx.delegate(node, &fill, FillHandler::new(fill.clone()), move |f| {
            halo.with(|h| h.fill = Some(f))
        });
        Ok(())
    }
}
