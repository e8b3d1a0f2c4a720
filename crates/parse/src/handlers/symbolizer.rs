use super::fill::FillHandler;
use super::graphic::GraphicHandler;
use super::raster::RasterHandler;
use super::stroke::StrokeHandler;
use super::text::TextHandler;
use super::{displacement_at, elements, expression_at, text_at, vendor_options};
use crate::draft::Draft;
use crate::engine::{Context, Handler, child};
use crate::error::{ParseError, WarningKind};
use serde_json::Value;
use ysld_model::{
    Fill, Graphic, LineSymbolizer, PointSymbolizer, PolygonSymbolizer, Rule, Stroke, Symbolizer,
    SymbolizerBase,
};

/// Symbolizer keys, in dispatch preference order.
pub(crate) const SYMBOLIZER_KEYS: [&str; 5] = ["point", "line", "polygon", "text", "raster"];

/// The `symbolizers` sequence of a rule.
pub struct SymbolizersHandler {
    rule: Draft<Rule>,
}

impl SymbolizersHandler {
    pub fn new(rule: Draft<Rule>) -> Self {
        Self { rule }
    }
}

impl Handler for SymbolizersHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let items = elements(node, "symbolizers")?;
        let drafts: Vec<Draft<Symbolizer>> = items.iter().map(|_| Draft::new()).collect();
        let rule = self.rule;
        ctx.commit_all(drafts.clone(), move |all| rule.with(|r| r.symbolizers.extend(all)));
        for (item, draft) in items.iter().zip(drafts).rev() {
            ctx.push(item, SymbolizerDispatch::new(draft));
        }
        Ok(())
    }
}

/// Picks the symbolizer kind by key. An element with none of the keys
/// contributes nothing.
pub struct SymbolizerDispatch {
    target: Draft<Symbolizer>,
}

impl SymbolizerDispatch {
    pub fn new(target: Draft<Symbolizer>) -> Self {
        Self { target }
    }
}

impl Handler for SymbolizerDispatch {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let mut present = SYMBOLIZER_KEYS
            .iter()
            .filter_map(|key| child(node, key).map(|body| (*key, body)));
        let Some((kind, body)) = present.next() else {
            log::debug!("Symbolizer element without a known kind, ignoring");
            return Ok(());
        };
        for (ignored, _) in present {
            log::debug!("Symbolizer element is a '{kind}', ignoring '{ignored}'");
        }

        let target = self.target;
        match kind {
            "point" => delegate(ctx, body, target, Symbolizer::Point, PointHandler::new),
            "line" => delegate(ctx, body, target, Symbolizer::Line, LineHandler::new),
            "polygon" => delegate(ctx, body, target, Symbolizer::Polygon, PolygonHandler::new),
            "text" => delegate(ctx, body, target, Symbolizer::Text, TextHandler::new),
            _ => delegate(ctx, body, target, Symbolizer::Raster, RasterHandler::new),
        }
        Ok(())
    }
}

fn delegate<'doc, T, H>(
    ctx: &mut Context<'doc, '_>,
    body: &'doc Value,
    target: Draft<Symbolizer>,
    wrap: fn(T) -> Symbolizer,
    handler: fn(Draft<T>) -> H,
) where
    T: Default + 'static,
    H: Handler + 'static,
{
    let draft = Draft::created(T::default());
    ctx.delegate(body, &draft, handler(draft.clone()), move |s| target.set(wrap(s)));
}

/// The keys every symbolizer kind shares.
pub(crate) fn read_base(node: &Value, ctx: &mut Context<'_, '_>) -> Result<SymbolizerBase, ParseError> {
    let mut base = SymbolizerBase {
        name: text_at(node, "name"),
        geometry: expression_at(node, "geometry")?,
        options: vendor_options(node),
        ..Default::default()
    };
    if let Some(uom) = text_at(node, "uom") {
        base.unit = ctx.hints().uom().unit(&uom);
        if base.unit.is_none() {
            ctx.warn(WarningKind::UnknownValue, format!("Unknown unit of measure '{uom}'"));
        }
    }
    Ok(base)
}

pub struct PointHandler {
    symbolizer: Draft<PointSymbolizer>,
}

impl PointHandler {
    pub fn new(symbolizer: Draft<PointSymbolizer>) -> Self {
        Self { symbolizer }
    }
}

impl Handler for PointHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let base = read_base(node, ctx)?;
        let symbolizer = self.symbolizer;
        symbolizer.with(|s| s.base = base);

        // Graphic keys sit directly on the point node.
        let graphic: Draft<Graphic> = Draft::new();
        ctx.delegate(node, &graphic, GraphicHandler::new(graphic.clone()), move |g| {
            symbolizer.with(|s| s.graphic = Some(g))
        });
        Ok(())
    }
}

pub struct LineHandler {
    symbolizer: Draft<LineSymbolizer>,
}

impl LineHandler {
    pub fn new(symbolizer: Draft<LineSymbolizer>) -> Self {
        Self { symbolizer }
    }
}

impl Handler for LineHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let base = read_base(node, ctx)?;
        let offset = expression_at(node, "offset")?;
        let symbolizer = self.symbolizer;
        symbolizer.with(|s| {
            s.base = base;
            s.perpendicular_offset = offset;
        });

        let stroke: Draft<Stroke> = Draft::new();
        ctx.delegate(node, &stroke, StrokeHandler::new(stroke.clone()), move |st| {
            symbolizer.with(|s| s.stroke = Some(st))
        });
        Ok(())
    }
}

pub struct PolygonHandler {
    symbolizer: Draft<PolygonSymbolizer>,
}

impl PolygonHandler {
    pub fn new(symbolizer: Draft<PolygonSymbolizer>) -> Self {
        Self { symbolizer }
    }
}

impl Handler for PolygonHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let base = read_base(node, ctx)?;
        let offset = expression_at(node, "offset")?;
        let displacement = displacement_at(node, "displacement")?;
        let symbolizer = self.symbolizer;
        symbolizer.with(|s| {
            s.base = base;
            s.perpendicular_offset = offset;
            s.displacement = displacement;
        });

        let fill: Draft<Fill> = Draft::new();
        let target = symbolizer.clone();
        ctx.delegate(node, &fill, FillHandler::new(fill.clone()), move |f| {
            target.with(|s| s.fill = Some(f))
        });
        let stroke: Draft<Stroke> = Draft::new();
        ctx.delegate(node, &stroke, StrokeHandler::new(stroke.clone()), move |st| {
            symbolizer.with(|s| s.stroke = Some(st))
        });
        Ok(())
    }
}
