use super::{bool_at, color_from_text, elements, text_at};
use crate::coerce::{Tuple, slot_expression};
use crate::draft::Draft;
use crate::engine::{Context, Handler};
use crate::error::{ParseError, WarningKind};
use serde_json::Value;
use ysld_model::{ColorMap, ColorMapEntry, ColorMapType};

const ENTRY: Tuple = Tuple::bounded(&["color", "opacity", "quantity", "label"], 1);

pub struct ColorMapHandler {
    map: Draft<ColorMap>,
}

impl ColorMapHandler {
    pub fn new(map: Draft<ColorMap>) -> Self {
        Self { map }
    }
}

impl Handler for ColorMapHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let map = self.map;
        if let Some(name) = text_at(node, "type") {
            match ColorMapType::from_name(&name) {
                Some(kind) => map.with(|m| m.kind = Some(kind)),
                None => ctx.warn(WarningKind::UnknownValue, format!("Unknown color map type '{name}'")),
            }
        }
        if let Some(extended) = bool_at(node, "extended")? {
            map.with(|m| m.extended = extended);
        }
        ctx.push_key("entries", ColorMapEntriesHandler::new(map));
        Ok(())
    }
}

/// `[color, opacity?, quantity?, label?]` entries, in document order.
pub struct ColorMapEntriesHandler {
    map: Draft<ColorMap>,
}

impl ColorMapEntriesHandler {
    pub fn new(map: Draft<ColorMap>) -> Self {
        Self { map }
    }
}

impl Handler for ColorMapEntriesHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let mut entries = Vec::new();
        for item in elements(node, "color map entries")? {
            entries.push(entry(item, ctx)?);
        }
        self.map.with(|m| m.entries.extend(entries));
        Ok(())
    }
}

fn entry(value: &Value, ctx: &mut Context<'_, '_>) -> Result<ColorMapEntry, ParseError> {
    let [color, opacity, quantity, label]: [Option<String>; 4] = ENTRY
        .parse(value)?
        .try_into()
        .map_err(|_| ParseError::shape(value, ENTRY.expected()))?;
    let color = match color {
        Some(text) => color_from_text(&text, "color map entry", ctx)?,
        None => None,
    };
    Ok(ColorMapEntry {
        color,
        opacity: opacity.as_deref().map(slot_expression).transpose()?,
        quantity: quantity.as_deref().map(slot_expression).transpose()?,
        label,
    })
}
