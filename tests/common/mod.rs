#![allow(dead_code)]

use serde_json::Value;
use ysld::model::{FeatureTypeStyle, Rule, Style, Symbolizer};
use ysld::{ParseOutcome, StyleParser};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Parses a document with the default collaborators.
pub fn parse(document: Value) -> ParseOutcome {
    match StyleParser::new().parse_value(&document) {
        Ok(outcome) => outcome,
        Err(e) => panic!("document failed to parse: {e}"),
    }
}

pub fn style(outcome: &ParseOutcome) -> &Style {
    outcome.style().expect("a style")
}

pub fn feature_styles(outcome: &ParseOutcome) -> &[FeatureTypeStyle] {
    &style(outcome).feature_type_styles
}

/// The only rule of the only feature type style.
pub fn single_rule(outcome: &ParseOutcome) -> &Rule {
    let fts = feature_styles(outcome);
    assert_eq!(fts.len(), 1, "expected one feature type style");
    assert_eq!(fts[0].rules.len(), 1, "expected one rule");
    &fts[0].rules[0]
}

/// The only symbolizer of the only rule.
pub fn single_symbolizer(outcome: &ParseOutcome) -> &Symbolizer {
    let rule = single_rule(outcome);
    assert_eq!(rule.symbolizers.len(), 1, "expected one symbolizer");
    &rule.symbolizers[0]
}

pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
