use crate::expression::Expression;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Fill {
    pub color: Option<Expression>,
    pub opacity: Option<Expression>,
    pub graphic_fill: Option<Graphic>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    pub color: Option<Expression>,
    pub width: Option<Expression>,
    pub opacity: Option<Expression>,
    pub line_join: Option<Expression>,
    pub line_cap: Option<Expression>,
    pub dash_array: Option<Vec<Expression>>,
    pub dash_offset: Option<Expression>,
    pub graphic_stroke: Option<Graphic>,
    pub graphic_fill: Option<Graphic>,
}

impl Stroke {
    pub const DEFAULT_LINE_JOIN: &'static str = "miter";
    pub const DEFAULT_LINE_CAP: &'static str = "butt";

    /// The line join, falling back to the renderer default when unset.
    pub fn effective_line_join(&self) -> Expression {
        self.line_join
            .clone()
            .unwrap_or_else(|| Expression::string(Self::DEFAULT_LINE_JOIN))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnchorPoint {
    pub x: Expression,
    pub y: Expression,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Displacement {
    pub x: Expression,
    pub y: Expression,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Graphic {
    pub symbols: Vec<GraphicalSymbol>,
    pub size: Option<Expression>,
    pub opacity: Option<Expression>,
    pub rotation: Option<Expression>,
    pub anchor: Option<AnchorPoint>,
    pub displacement: Option<Displacement>,
    pub gap: Option<Expression>,
    pub initial_gap: Option<Expression>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GraphicalSymbol {
    Mark(Mark),
    External(ExternalGraphic),
}

/// A well-known shape drawn with its own fill and stroke.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Mark {
    pub shape: Option<Expression>,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

/// An image referenced by location.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ExternalGraphic {
    pub location: String,
    pub format: Option<String>,
}
