mod common;

use common::{assert_close, single_rule};
use serde_json::json;
use std::sync::Arc;
use ysld::zoom::{RatioZoomContext, ZoomContext, ZoomContextFinder, ZoomError};
use ysld::{ParseError, StyleParser};

const WEB_MERCATOR_SCALE: f64 = 559_082_264.028_717_8;

fn zoom_rule(grid: serde_json::Value, zoom: serde_json::Value) -> Result<ysld::ParseOutcome, ParseError> {
    StyleParser::new().parse_value(&json!({
        "grid": grid,
        "rules": [{"zoom": zoom, "symbolizers": [{"line": {}}]}]
    }))
}

#[test]
fn test_named_web_mercator_grid() {
    let outcome = zoom_rule(json!({"name": "WebMercator"}), json!([3, 3])).unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, WEB_MERCATOR_SCALE / 2f64.powf(2.5));
    assert_close(rule.min_scale_denominator, WEB_MERCATOR_SCALE / 2f64.powf(3.5));
}

#[test]
fn test_grid_names_match_case_insensitively() {
    let outcome = zoom_rule(json!({"name": "epsg:3857"}), json!([0, "max"])).unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, WEB_MERCATOR_SCALE * 2f64.sqrt());
    assert_eq!(rule.min_scale_denominator, 0.0);
}

#[test]
fn test_scale_list_grid() {
    let outcome = zoom_rule(json!({"scales": [4000, 2000, 1000, 500]}), json!([1, 2])).unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, 3000.0);
    assert_close(rule.min_scale_denominator, 750.0);
}

#[test]
fn test_scale_list_grid_with_initial_level() {
    let outcome = zoom_rule(json!({"scales": [4000, 2000, 1000], "initial-level": 5}), json!([6, 6])).unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, 3000.0);
    assert_close(rule.min_scale_denominator, 1500.0);
}

#[test]
fn test_zoom_outside_scale_list_fails() {
    let result = zoom_rule(json!({"scales": [4000, 2000]}), json!([0, 9]));
    assert!(matches!(result, Err(ParseError::Zoom(ZoomError::LevelOutOfRange { level: 9, .. }))));
}

#[test]
fn test_scale_list_at_the_edges_of_the_level_range() {
    let result = zoom_rule(json!({"scales": [1000, 500], "initial-level": i32::MAX}), json!([0, "max"]));
    assert!(matches!(result, Err(ParseError::Zoom(ZoomError::TooManyLevels { count: 2, .. }))));

    let outcome = zoom_rule(json!({"scales": [1000], "initial-level": i32::MIN}), json!([i32::MIN, "max"])).unwrap();
    assert_eq!(single_rule(&outcome).min_scale_denominator, 0.0);

    let outcome = zoom_rule(json!({"scales": [1000, 500], "initial-level": i32::MIN}), json!([i32::MIN, i32::MIN])).unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, 1250.0);
    assert_close(rule.min_scale_denominator, 750.0);
}

#[test]
fn test_ambiguous_grid_name_is_rejected() {
    let result = zoom_rule(json!({"name": "EPSG:4326"}), json!([0, 1]));
    assert!(matches!(result, Err(ParseError::Zoom(ZoomError::Ambiguous(_)))));
}

#[test]
fn test_unknown_grid_name_is_rejected() {
    let result = zoom_rule(json!({"name": "NoSuchGrid"}), json!([0, 1]));
    match result {
        Err(ParseError::Zoom(ZoomError::Unknown(name))) => assert_eq!(name, "NoSuchGrid"),
        other => panic!("expected an unknown grid error, got {other:?}"),
    }
}

#[test]
fn test_grid_without_definition_is_rejected() {
    let result = zoom_rule(json!({"ratio": 3}), json!([0, 1]));
    assert!(matches!(result, Err(ParseError::MissingKey { .. })));
}

#[test]
fn test_invalid_ratio_is_rejected() {
    let result = zoom_rule(json!({"initial-scale": 1000, "ratio": 0.5}), json!([0, 1]));
    assert!(matches!(result, Err(ParseError::Zoom(ZoomError::InvalidRatio(_)))));
}

struct TestGrids;

impl ZoomContextFinder for TestGrids {
    fn get(&self, name: &str) -> Option<Arc<dyn ZoomContext>> {
        if name != "WebMercator" {
            return None;
        }
        let ctx: Arc<dyn ZoomContext> = Arc::new(RatioZoomContext::new(0, 1000.0, 2.0).ok()?);
        Some(ctx)
    }
}

#[test]
fn test_custom_finder_takes_precedence() {
    let parser = StyleParser::new().with_zoom_finder(Arc::new(TestGrids));
    let outcome = parser
        .parse_value(&json!({
            "grid": {"name": "WebMercator"},
            "rules": [{"zoom": [1, 1], "symbolizers": [{"line": {}}]}]
        }))
        .unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, 1000.0 / 2f64.sqrt());
    assert_close(rule.min_scale_denominator, 1000.0 / 2f64.powf(1.5));

    // Names the finder does not know still reach the built-in grids.
    let outcome = parser
        .parse_value(&json!({
            "grid": {"name": "GlobalCRS84Scale"},
            "rules": [{"zoom": [1, 1], "symbolizers": [{"line": {}}]}]
        }))
        .unwrap();
    let rule = single_rule(&outcome);
    assert_close(rule.max_scale_denominator, 375e6);
    assert_close(rule.min_scale_denominator, 175e6);
}

#[test]
fn test_grid_is_per_document() {
    let parser = StyleParser::new();
    parser
        .parse_value(&json!({"grid": {"initial-scale": 1000}, "rules": [{"zoom": [0, 0]}]}))
        .unwrap();
    let outcome = parser
        .parse_value(&json!({"rules": [{"zoom": [0, 0], "symbolizers": [{"line": {}}]}]}))
        .unwrap();
    let rule = single_rule(&outcome);
    // Falls back to the WGS84 quad grid rather than the previous document's grid.
    assert!(rule.max_scale_denominator > 1e8);
}
