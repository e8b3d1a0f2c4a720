use crate::expression::Expression;
use crate::graphic::{AnchorPoint, Displacement, Fill};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub family: Option<Expression>,
    pub size: Option<Expression>,
    pub style: Option<Expression>,
    pub weight: Option<Expression>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Halo {
    pub radius: Option<Expression>,
    pub fill: Option<Fill>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PointPlacement {
    pub anchor: Option<AnchorPoint>,
    pub displacement: Option<Displacement>,
    pub rotation: Option<Expression>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LinePlacement {
    pub perpendicular_offset: Option<Expression>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum LabelPlacement {
    Point(PointPlacement),
    Line(LinePlacement),
}
