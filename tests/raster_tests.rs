mod common;

use common::{parse, single_symbolizer};
use serde_json::json;
use ysld::model::{ChannelSelection, Color, ColorMapType, ContrastMethod, Expression, Symbolizer};
use ysld::{ParseError, StyleParser, WarningKind};

fn raster(outcome: &ysld::ParseOutcome) -> &ysld::model::RasterSymbolizer {
    match single_symbolizer(outcome) {
        Symbolizer::Raster(raster) => raster,
        other => panic!("expected a raster symbolizer, got {other:?}"),
    }
}

#[test]
fn test_gray_channel_with_contrast() {
    let outcome = parse(json!({
        "raster": {
            "opacity": 0.8,
            "channels": {"gray": {"name": "1", "contrast-enhancement": {"mode": "histogram"}}},
            "contrast-enhancement": {"gamma": 1.5}
        }
    }));
    let raster = raster(&outcome);
    assert_eq!(raster.opacity, Some(Expression::number(0.8)));
    let Some(ChannelSelection::Gray(gray)) = &raster.channel_selection else {
        panic!("expected a gray channel");
    };
    assert_eq!(gray.name, "1");
    let ce = gray.contrast_enhancement.as_ref().expect("channel contrast");
    assert_eq!(ce.method, Some(ContrastMethod::Histogram));
    let overall = raster.contrast_enhancement.as_ref().expect("overall contrast");
    assert!(overall.method.is_none());
    assert_eq!(overall.gamma, Some(Expression::number(1.5)));
}

#[test]
fn test_rgb_channels() {
    let outcome = parse(json!({
        "raster": {"channels": {"red": "3", "green": {"name": "2"}, "blue": 1}}
    }));
    let Some(ChannelSelection::Rgb([red, green, blue])) = &raster(&outcome).channel_selection else {
        panic!("expected RGB channels");
    };
    assert_eq!((red.name.as_str(), green.name.as_str(), blue.name.as_str()), ("3", "2", "1"));
}

#[test]
fn test_gray_and_rgb_conflict() {
    let result = StyleParser::new().parse_value(&json!({
        "raster": {"channels": {"gray": "1", "red": "1", "green": "2", "blue": "3"}}
    }));
    assert!(matches!(result, Err(ParseError::Conflict(_))));
}

#[test]
fn test_partial_rgb_names_missing_channels() {
    let result = StyleParser::new().parse_value(&json!({
        "raster": {"channels": {"red": "1"}}
    }));
    match result {
        Err(ParseError::MissingKey { key, .. }) => assert_eq!(key, "green, blue"),
        other => panic!("expected a missing key error, got {other:?}"),
    }
}

#[test]
fn test_unknown_contrast_mode_is_a_warning() {
    let outcome = parse(json!({
        "raster": {"contrast-enhancement": {"mode": "sharpen", "gamma": 0.5}}
    }));
    let ce = raster(&outcome).contrast_enhancement.as_ref().expect("contrast kept for its gamma");
    assert!(ce.method.is_none());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].kind, WarningKind::UnknownValue);
}

#[test]
fn test_color_map_entries_and_type() {
    let outcome = parse(json!({
        "raster": {
            "color-map": {
                "type": "intervals",
                "extended": true,
                "entries": [
                    "#000000",
                    ["#ffffff", 0.5, 100],
                    "[0x00ff00, 1, 200, 'high ground']",
                    ["${band_color}", null, 300]
                ]
            }
        }
    }));
    let map = raster(&outcome).color_map.as_ref().expect("colour map");
    assert_eq!(map.kind, Some(ColorMapType::Intervals));
    assert!(map.extended);
    assert_eq!(map.entries.len(), 4);

    assert_eq!(map.entries[0].color, Some(Expression::color(Color::rgb(0, 0, 0))));
    assert!(map.entries[0].opacity.is_none());
    assert!(map.entries[0].quantity.is_none());

    assert_eq!(map.entries[1].opacity, Some(Expression::number(0.5)));
    assert_eq!(map.entries[1].quantity, Some(Expression::number(100.0)));

    assert_eq!(map.entries[2].color, Some(Expression::color(Color::rgb(0, 255, 0))));
    assert_eq!(map.entries[2].label.as_deref(), Some("high ground"));

    assert_eq!(map.entries[3].color, Some(Expression::property("band_color")));
    assert!(map.entries[3].opacity.is_none());
}

#[test]
fn test_unknown_color_map_type_is_a_warning() {
    let outcome = parse(json!({
        "raster": {"color-map": {"type": "gradient", "entries": ["#123456"]}}
    }));
    let map = raster(&outcome).color_map.as_ref().expect("colour map");
    assert!(map.kind.is_none());
    assert_eq!(map.entries.len(), 1);
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn test_color_map_entry_with_too_many_slots() {
    let result = StyleParser::new().parse_value(&json!({
        "raster": {"color-map": {"entries": [["#000000", 1, 2, "a", "b"]]}}
    }));
    assert!(matches!(result, Err(ParseError::Shape { .. })));
}
