use crate::expression::Expression;
use crate::graphic::{Displacement, Fill, Graphic, Stroke};
use crate::raster::{ChannelSelection, ColorMap, ContrastEnhancement};
use crate::text::{Font, Halo, LabelPlacement};
use crate::unit::Unit;
use serde::Serialize;
use std::collections::BTreeMap;

/// Properties shared by every symbolizer kind.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SymbolizerBase {
    pub name: Option<String>,
    pub geometry: Option<Expression>,
    pub unit: Option<Unit>,
    /// Vendor options, keyed without their `x-` prefix.
    pub options: BTreeMap<String, String>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PointSymbolizer {
    #[serde(flatten)]
    pub base: SymbolizerBase,
    pub graphic: Option<Graphic>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct LineSymbolizer {
    #[serde(flatten)]
    pub base: SymbolizerBase,
    pub stroke: Option<Stroke>,
    pub perpendicular_offset: Option<Expression>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PolygonSymbolizer {
    #[serde(flatten)]
    pub base: SymbolizerBase,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub perpendicular_offset: Option<Expression>,
    pub displacement: Option<Displacement>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TextSymbolizer {
    #[serde(flatten)]
    pub base: SymbolizerBase,
    pub label: Option<Expression>,
    pub font: Option<Font>,
    pub fill: Option<Fill>,
    pub halo: Option<Halo>,
    pub placement: Option<LabelPlacement>,
    pub priority: Option<Expression>,
    /// Shield graphic drawn behind the label.
    pub graphic: Option<Graphic>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct RasterSymbolizer {
    #[serde(flatten)]
    pub base: SymbolizerBase,
    pub opacity: Option<Expression>,
    pub channel_selection: Option<ChannelSelection>,
    pub color_map: Option<ColorMap>,
    pub contrast_enhancement: Option<ContrastEnhancement>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Symbolizer {
    Point(PointSymbolizer),
    Line(LineSymbolizer),
    Polygon(PolygonSymbolizer),
    Text(TextSymbolizer),
    Raster(RasterSymbolizer),
}

impl Symbolizer {
    pub fn base(&self) -> &SymbolizerBase {
        match self {
            Symbolizer::Point(s) => &s.base,
            Symbolizer::Line(s) => &s.base,
            Symbolizer::Polygon(s) => &s.base,
            Symbolizer::Text(s) => &s.base,
            Symbolizer::Raster(s) => &s.base,
        }
    }

    pub fn as_point(&self) -> Option<&PointSymbolizer> {
        match self {
            Symbolizer::Point(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&LineSymbolizer> {
        match self {
            Symbolizer::Line(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&PolygonSymbolizer> {
        match self {
            Symbolizer::Polygon(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextSymbolizer> {
        match self {
            Symbolizer::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_raster(&self) -> Option<&RasterSymbolizer> {
        match self {
            Symbolizer::Raster(s) => Some(s),
            _ => None,
        }
    }
}
