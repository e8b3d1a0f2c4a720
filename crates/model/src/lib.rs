//! The cartographic style model.
//!
//! These types are the target object graph produced by the style document
//! parser. Containment is tree-shaped: a [`StyledLayerDescriptor`] owns its
//! [`Style`]s, which own [`FeatureTypeStyle`]s, which own [`Rule`]s, which own
//! [`Symbolizer`]s. Fills, strokes and graphics are owned by exactly one
//! symbolizer-like container.

pub mod color;
pub mod expression;
pub mod graphic;
pub mod raster;
pub mod style;
pub mod symbolizer;
pub mod text;
pub mod unit;

pub use color::Color;
pub use expression::{BinaryOp, Expression, Filter, Literal};
pub use graphic::{
    AnchorPoint, Displacement, ExternalGraphic, Fill, Graphic, GraphicalSymbol, Mark, Stroke,
};
pub use raster::{
    ChannelSelection, ColorMap, ColorMapEntry, ColorMapType, ContrastEnhancement,
    ContrastMethod, SelectedChannel,
};
pub use style::{
    FeatureTypeStyle, Parameter, Rule, Style, StyledLayerDescriptor, Transformation,
};
pub use symbolizer::{
    LineSymbolizer, PointSymbolizer, PolygonSymbolizer, RasterSymbolizer, Symbolizer,
    SymbolizerBase, TextSymbolizer,
};
pub use text::{Font, Halo, LabelPlacement, LinePlacement, PointPlacement};
pub use unit::Unit;
