use super::color_map::ColorMapHandler;
use super::symbolizer::read_base;
use super::{expression_at, scalar_text, text_at};
use crate::draft::Draft;
use crate::engine::{Context, Handler, child};
use crate::error::{ParseError, WarningKind};
use serde_json::Value;
use ysld_model::{
    ChannelSelection, ColorMap, ContrastEnhancement, ContrastMethod, RasterSymbolizer,
    SelectedChannel,
};

pub struct RasterHandler {
    symbolizer: Draft<RasterSymbolizer>,
}

impl RasterHandler {
    pub fn new(symbolizer: Draft<RasterSymbolizer>) -> Self {
        Self { symbolizer }
    }
}

impl Handler for RasterHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let base = read_base(node, ctx)?;
        let opacity = expression_at(node, "opacity")?;
        let contrast = match child(node, "contrast-enhancement") {
            Some(value) => contrast_enhancement(value, ctx)?,
            None => None,
        };
        let symbolizer = self.symbolizer;
        symbolizer.with(|s| {
            s.base = base;
            s.opacity = opacity;
            s.contrast_enhancement = contrast;
        });

        ctx.push_key("channels", ChannelsHandler::new(symbolizer.clone()));
        let color_map: Draft<ColorMap> = Draft::new();
        ctx.delegate_key("color-map", &color_map, ColorMapHandler::new(color_map.clone()), move |m| {
            symbolizer.with(|s| s.color_map = Some(m))
        });
        Ok(())
    }
}

/// Band selection: `gray`, or all three of `red`, `green` and `blue`.
pub struct ChannelsHandler {
    symbolizer: Draft<RasterSymbolizer>,
}

impl ChannelsHandler {
    pub fn new(symbolizer: Draft<RasterSymbolizer>) -> Self {
        Self { symbolizer }
    }
}

impl Handler for ChannelsHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let gray = child(node, "gray");
        let rgb = [child(node, "red"), child(node, "green"), child(node, "blue")];
        let any_rgb = rgb.iter().any(Option::is_some);

        let selection = match (gray, any_rgb) {
            (Some(_), true) => {
                return Err(ParseError::Conflict(
                    "channels cannot select both a gray channel and RGB channels".to_string(),
                ));
            }
            (Some(gray), false) => ChannelSelection::Gray(selected_channel(gray, ctx)?),
            (None, true) => {
                let [red, green, blue] = rgb;
                let (Some(red), Some(green), Some(blue)) = (red, green, blue) else {
                    let missing = ["red", "green", "blue"]
                        .iter()
                        .zip(rgb)
                        .filter(|(_, v)| v.is_none())
                        .map(|(k, _)| *k)
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Err(ParseError::missing_key(missing, "RGB channel selection"));
                };
                ChannelSelection::Rgb([
                    selected_channel(red, ctx)?,
                    selected_channel(green, ctx)?,
                    selected_channel(blue, ctx)?,
                ])
            }
            (None, false) => return Ok(()),
        };
        self.symbolizer.with(|s| s.channel_selection = Some(selection));
        Ok(())
    }
}

/// A band name, or a mapping with `name` and `contrast-enhancement`.
fn selected_channel(value: &Value, ctx: &mut Context<'_, '_>) -> Result<SelectedChannel, ParseError> {
    if let Some(name) = scalar_text(value) {
        return Ok(SelectedChannel { name, contrast_enhancement: None });
    }
    if !value.is_object() {
        return Err(ParseError::shape(value, "a band name or a channel mapping"));
    }
    let name = text_at(value, "name").ok_or_else(|| ParseError::missing_key("name", "channel"))?;
    let contrast_enhancement = match child(value, "contrast-enhancement") {
        Some(ce) => contrast_enhancement(ce, ctx)?,
        None => None,
    };
    Ok(SelectedChannel { name, contrast_enhancement })
}

/// `mode` and `gamma`. An unknown mode is a warning and leaves the method unset.
fn contrast_enhancement(value: &Value, ctx: &mut Context<'_, '_>) -> Result<Option<ContrastEnhancement>, ParseError> {
    if !value.is_object() {
        return Err(ParseError::shape(value, "a contrast enhancement mapping"));
    }
    let method = match text_at(value, "mode") {
        Some(mode) => {
            let method = ContrastMethod::from_name(&mode);
            if method.is_none() {
                ctx.warn(WarningKind::UnknownValue, format!("Unknown contrast enhancement mode '{mode}'"));
            }
            method
        }
        None => None,
    };
    let gamma = expression_at(value, "gamma")?;
    if method.is_none() && gamma.is_none() {
        return Ok(None);
    }
    Ok(Some(ContrastEnhancement { method, gamma }))
}
