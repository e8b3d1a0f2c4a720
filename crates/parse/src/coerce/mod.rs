//! Coercion of raw document values into tuples, expressions and colours.

pub mod color;
pub mod cql;
pub mod expression;
pub mod tuple;

pub use color::{ColorNames, CssColorNames, parse_color_literal};
pub use expression::{
    Segment, expression_from_value, filter_from_text, flatten, parse_expression,
    parse_expression_safe, slot_expression, split_embedded,
};
pub use tuple::Tuple;
