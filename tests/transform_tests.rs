mod common;

use common::{feature_styles, parse};
use serde_json::json;
use std::sync::Arc;
use ysld::model::{Expression, Transformation};
use ysld::{InputRole, ParseError, ProcessInput, StaticProcessCatalog, StyleParser, WarningKind};

fn parser() -> StyleParser {
    let mut catalog = StaticProcessCatalog::new();
    catalog
        .register(
            "vec:Heatmap",
            vec![
                ProcessInput::new("data", InputRole::Data),
                ProcessInput::new("weightAttr", InputRole::Other),
                ProcessInput::new("radiusPixels", InputRole::Other),
                ProcessInput::new("outputBBOX", InputRole::OutputBbox),
                ProcessInput::new("outputWidth", InputRole::OutputWidth),
                ProcessInput::new("outputHeight", InputRole::OutputHeight),
            ],
        )
        .register(
            "ras:Contour",
            vec![ProcessInput::new("data", InputRole::Data), ProcessInput::new("levels", InputRole::Other)],
        )
        .register("vec:Simplify", vec![ProcessInput::new("features", InputRole::Data)]);
    StyleParser::new().with_process_catalog(Arc::new(catalog))
}

fn transformation(outcome: &ysld::ParseOutcome) -> &Transformation {
    feature_styles(outcome)[0].transformation.as_ref().expect("a transformation")
}

fn parameter<'a>(transformation: &'a Transformation, name: &str) -> &'a [Expression] {
    &transformation.parameter(name).expect("parameter present").values
}

#[test]
fn test_transform_without_catalog_is_skipped() {
    let outcome = parse(json!({
        "feature-styles": [{"transform": {"name": "vec:Heatmap"}, "rules": [{"symbolizers": [{"raster": {}}]}]}]
    }));
    assert!(feature_styles(&outcome)[0].transformation.is_none());
    assert_eq!(feature_styles(&outcome)[0].rules.len(), 1);
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].kind, WarningKind::MissingFeature);
}

#[test]
fn test_heatmap_gets_map_request_defaults() {
    let outcome = parser()
        .parse_value(&json!({
            "feature-styles": [{
                "transform": {
                    "name": "vec:Heatmap",
                    "params": {"weightAttr": "pop2000", "radiusPixels": 100}
                },
                "rules": [{"symbolizers": [{"raster": {"opacity": 0.6}}]}]
            }]
        }))
        .unwrap();
    let heatmap = transformation(&outcome);
    assert_eq!(heatmap.name, "vec:Heatmap");
    let names: Vec<&str> = heatmap.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["data", "weightAttr", "radiusPixels", "outputBBOX", "outputWidth", "outputHeight"]
    );
    assert!(parameter(heatmap, "data").is_empty());
    assert_eq!(parameter(heatmap, "weightAttr"), [Expression::string("pop2000")]);
    assert_eq!(parameter(heatmap, "radiusPixels"), [Expression::number(100.0)]);
    assert_eq!(
        parameter(heatmap, "outputWidth"),
        [Expression::function("env", vec![Expression::string("wms_width")])]
    );
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_explicit_map_request_parameter_is_kept() {
    let outcome = parser()
        .parse_value(&json!({
            "feature-styles": [{
                "transform": {"name": "vec:Heatmap", "params": {"outputWidth": 256}}
            }]
        }))
        .unwrap();
    let heatmap = transformation(&outcome);
    assert_eq!(parameter(heatmap, "outputWidth"), [Expression::number(256.0)]);
    assert_eq!(heatmap.parameters.iter().filter(|p| p.name == "outputWidth").count(), 1);
}

#[test]
fn test_sequence_parameter_and_custom_input() {
    let outcome = parser()
        .parse_value(&json!({
            "feature-styles": [{
                "transform": {"name": "ras:Contour", "input": "raster", "params": {"levels": [10, 20, 30]}}
            }]
        }))
        .unwrap();
    let contour = transformation(&outcome);
    assert_eq!(contour.parameters[0].name, "raster");
    assert_eq!(
        parameter(contour, "levels"),
        [Expression::number(10.0), Expression::number(20.0), Expression::number(30.0)]
    );
}

#[test]
fn test_nested_transform() {
    let outcome = parser()
        .parse_value(&json!({
            "feature-styles": [{
                "transform": {
                    "name": "ras:Contour",
                    "params": {"data": {"name": "vec:Simplify", "input": "features"}}
                }
            }]
        }))
        .unwrap();
    let contour = transformation(&outcome);
    assert_eq!(contour.parameters.iter().filter(|p| p.name == "data").count(), 1);
    let [Expression::Process { transformation: nested }] = parameter(contour, "data") else {
        panic!("expected a nested process");
    };
    assert_eq!(nested.name, "vec:Simplify");
    assert_eq!(nested.parameters[0].name, "features");
}

#[test]
fn test_unknown_process_is_skipped() {
    let outcome = parser()
        .parse_value(&json!({"feature-styles": [{"transform": {"name": "vec:Nothing"}}]}))
        .unwrap();
    assert!(feature_styles(&outcome)[0].transformation.is_none());
    assert_eq!(outcome.warnings[0].kind, WarningKind::MissingFeature);
}

#[test]
fn test_transform_errors() {
    let missing_name = parser().parse_value(&json!({"feature-styles": [{"transform": {"params": {}}}]}));
    assert!(matches!(missing_name, Err(ParseError::MissingKey { .. })));

    let bad_params = parser()
        .parse_value(&json!({"feature-styles": [{"transform": {"name": "ras:Contour", "params": [1]}}]}));
    assert!(matches!(bad_params, Err(ParseError::Shape { .. })));
}
