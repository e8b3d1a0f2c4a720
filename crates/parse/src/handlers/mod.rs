//! The handler library.
//!
//! Each handler reads the keys of one concern from its node and writes into
//! the draft it was handed. Handlers sharing a node (fill and stroke keys on
//! a polygon, for instance) are independent and may run in any order; a
//! parent always schedules the commit of a child draft before pushing the
//! child, so the commit runs after the child's whole subtree.

mod color_map;
mod feature_style;
mod fill;
mod graphic;
mod raster;
mod root;
mod rule;
mod stroke;
mod symbolizer;
mod text;
mod transform;

pub use color_map::{ColorMapEntriesHandler, ColorMapHandler};
pub use feature_style::{FeatureStyleHandler, FeatureStylesHandler};
pub use fill::FillHandler;
pub use graphic::{ExternalGraphicHandler, GraphicHandler, MarkHandler, SymbolsHandler};
pub use raster::{ChannelsHandler, RasterHandler};
pub use root::RootHandler;
pub use rule::{RuleHandler, RulesHandler};
pub use stroke::StrokeHandler;
pub use symbolizer::{
    LineHandler, PointHandler, PolygonHandler, SymbolizerDispatch, SymbolizersHandler,
};
pub use text::{FontHandler, HaloHandler, TextHandler};
pub use transform::TransformHandler;

use crate::coerce::{
    Tuple, expression_from_value, parse_color_literal, parse_expression, parse_expression_safe, slot_expression,
};
use crate::draft::Draft;
use crate::engine::{Context, child};
use crate::error::{ParseError, WarningKind};
use serde_json::Value;
use std::collections::BTreeMap;
use ysld_model::{AnchorPoint, Displacement, Expression, Literal};

const XY: Tuple = Tuple::exact(&["x", "y"]);

/// A scalar as text. Sequences and mappings give `None`.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The text under `key`, if present and a scalar.
pub(crate) fn text_at(node: &Value, key: &str) -> Option<String> {
    child(node, key).and_then(scalar_text)
}

pub(crate) fn expression_at(node: &Value, key: &str) -> Result<Option<Expression>, ParseError> {
    match child(node, key) {
        Some(value) => expression_from_value(value),
        None => Ok(None),
    }
}

/// Like [`expression_at`] for free-form names (mark shapes, font families):
/// text that does not parse as an expression is kept verbatim.
pub(crate) fn name_at(node: &Value, key: &str) -> Result<Option<Expression>, ParseError> {
    match child(node, key) {
        Some(Value::String(text)) => {
            Ok(parse_expression_safe(text).or_else(|| (!text.is_empty()).then(|| Expression::string(text.clone()))))
        }
        Some(value) => expression_from_value(value),
        None => Ok(None),
    }
}

pub(crate) fn number_at(node: &Value, key: &str) -> Result<Option<f64>, ParseError> {
    match child(node, key) {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(value @ Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ParseError::shape(value, format!("a number for '{key}'"))),
        Some(value) => Err(ParseError::shape(value, format!("a number for '{key}'"))),
    }
}

pub(crate) fn integer_at(node: &Value, key: &str) -> Result<Option<i32>, ParseError> {
    match number_at(node, key)? {
        None => Ok(None),
        Some(n) if n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) => {
            Ok(Some(n as i32))
        }
        Some(_) => Err(ParseError::shape(
            child(node, key).unwrap_or(&Value::Null),
            format!("an integer for '{key}'"),
        )),
    }
}

pub(crate) fn bool_at(node: &Value, key: &str) -> Result<Option<bool>, ParseError> {
    match child(node, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(value @ Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(Some(true)),
            "false" | "no" => Ok(Some(false)),
            _ => Err(ParseError::shape(value, format!("a boolean for '{key}'"))),
        },
        Some(value) => Err(ParseError::shape(value, format!("a boolean for '{key}'"))),
    }
}

/// Sets `name`, `title` and `abstract` on whatever the closure writes to,
/// only for the keys that are present.
pub(crate) fn describe<T: Default>(
    node: &Value,
    draft: &Draft<T>,
    apply: impl Fn(&mut T, &'static str, String),
) {
    for key in ["name", "title", "abstract"] {
        if let Some(text) = text_at(node, key) {
            draft.with(|target| apply(target, key, text));
        }
    }
}

/// `x-*` keys, with the prefix removed and the values as text.
pub(crate) fn vendor_options(node: &Value) -> BTreeMap<String, String> {
    let Some(map) = node.as_object() else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(key, value)| {
            let name = key.strip_prefix("x-")?;
            let text = scalar_text(value).unwrap_or_else(|| value.to_string());
            Some((name.to_string(), text))
        })
        .collect()
}

/// A colour under `key`. Literals become colour literals, other expressions
/// are kept; an unrecognised literal is a warning.
pub(crate) fn color_at(node: &Value, key: &str, ctx: &mut Context<'_, '_>) -> Result<Option<Expression>, ParseError> {
    let Some(value) = child(node, key) else {
        return Ok(None);
    };
    match value {
        Value::Number(n) => match n.as_u64().filter(|v| *v <= 0xff_ffff) {
            Some(packed) => Ok(Some(Expression::color(ysld_model::Color::from_packed(packed as u32)))),
            None => {
                ctx.warn(WarningKind::UnknownValue, format!("'{n}' is not a colour for '{key}'"));
                Ok(None)
            }
        },
        Value::String(text) => color_from_text(text, key, ctx),
        other => Err(ParseError::shape(other, format!("a colour for '{key}'"))),
    }
}

pub(crate) fn color_from_text(text: &str, key: &str, ctx: &mut Context<'_, '_>) -> Result<Option<Expression>, ParseError> {
    let expression = parse_expression(text)?;
    let literal = match expression.as_literal() {
        Some(Literal::String(s)) => s.clone(),
        Some(Literal::Number(n)) => n.to_string(),
        Some(Literal::Color(_)) | Some(Literal::Bool(_)) | None => {
            return Ok((!expression.is_nil()).then_some(expression));
        }
    };
    match parse_color_literal(&literal, ctx.hints().colors()) {
        Some(color) => Ok(Some(Expression::color(color))),
        None => {
            ctx.warn(WarningKind::UnknownValue, format!("'{literal}' is not a colour for '{key}'"));
            Ok(None)
        }
    }
}

/// An `[x, y]` pair of expressions under `key`.
pub(crate) fn pair_at(node: &Value, key: &str) -> Result<Option<(Expression, Expression)>, ParseError> {
    let Some(value) = child(node, key) else {
        return Ok(None);
    };
    let slots = XY.parse(value)?;
    match (&slots[0], &slots[1]) {
        (Some(x), Some(y)) => Ok(Some((slot_expression(x)?, slot_expression(y)?))),
        _ => Err(ParseError::shape(value, XY.expected())),
    }
}

pub(crate) fn anchor_at(node: &Value, key: &str) -> Result<Option<AnchorPoint>, ParseError> {
    Ok(pair_at(node, key)?.map(|(x, y)| AnchorPoint { x, y }))
}

pub(crate) fn displacement_at(node: &Value, key: &str) -> Result<Option<Displacement>, ParseError> {
    Ok(pair_at(node, key)?.map(|(x, y)| Displacement { x, y }))
}

/// The elements of a sequence node.
pub(crate) fn elements<'doc>(node: &'doc Value, what: &str) -> Result<&'doc [Value], ParseError> {
    match node {
        Value::Array(items) => Ok(items),
        other => Err(ParseError::shape(other, format!("a sequence of {what}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_vendor_options() {
        let node = json!({"x-labelObstacle": true, "x-maxDisplacement": 40, "name": "n"});
        let options = vendor_options(&node);
        assert_eq!(options.len(), 2);
        assert_eq!(options["labelObstacle"], "true");
        assert_eq!(options["maxDisplacement"], "40");
    }

    #[test]
    fn test_scalar_readers() {
        let node = json!({"n": "12", "i": 3, "f": 2.5, "b": "yes", "bad": [1]});
        assert_eq!(number_at(&node, "n").unwrap(), Some(12.0));
        assert_eq!(integer_at(&node, "i").unwrap(), Some(3));
        assert!(integer_at(&node, "f").is_err());
        assert_eq!(bool_at(&node, "b").unwrap(), Some(true));
        assert!(number_at(&node, "bad").is_err());
        assert_eq!(number_at(&node, "missing").unwrap(), None);
    }

    #[test]
    fn test_names() {
        let node = json!({"plain": "circle", "bound": "${shape}", "broken": "${foo(", "blank": "", "n": 3});
        assert_eq!(name_at(&node, "plain").unwrap(), Some(Expression::string("circle")));
        assert_eq!(name_at(&node, "bound").unwrap(), Some(Expression::property("shape")));
        assert_eq!(name_at(&node, "broken").unwrap(), Some(Expression::string("${foo(")));
        assert!(expression_at(&node, "broken").is_err());
        assert_eq!(name_at(&node, "blank").unwrap(), None);
        assert_eq!(name_at(&node, "n").unwrap(), Some(Expression::number(3.0)));
        assert_eq!(name_at(&node, "missing").unwrap(), None);
    }

    #[test]
    fn test_pairs() {
        let node = json!({"anchor": [0.5, "${h}"], "half": [1, null]});
        let anchor = anchor_at(&node, "anchor").unwrap().unwrap();
        assert_eq!(anchor.x, Expression::number(0.5));
        assert_eq!(anchor.y, Expression::property("h"));
        assert!(pair_at(&node, "half").is_err());
    }
}
