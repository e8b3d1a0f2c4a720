use crate::expression::{Expression, Filter};
use crate::graphic::Graphic;
use crate::symbolizer::Symbolizer;
use serde::Serialize;
use std::collections::BTreeMap;

/// The top-level model container.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct StyledLayerDescriptor {
    pub name: Option<String>,
    pub styles: Vec<Style>,
}

impl StyledLayerDescriptor {
    /// The first style, which is the one renderers pick up by default.
    pub fn default_style(&self) -> Option<&Style> {
        self.styles.first()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub name: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub feature_type_styles: Vec<FeatureTypeStyle>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct FeatureTypeStyle {
    pub name: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    /// Vendor options, keyed without their `x-` prefix.
    pub options: BTreeMap<String, String>,
    pub transformation: Option<Transformation>,
    pub rules: Vec<Rule>,
}

/// A filter-guarded, scale-bounded group of symbolizers.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: Option<String>,
    pub title: Option<String>,
    pub abstract_text: Option<String>,
    pub filter: Option<Filter>,
    pub is_else: bool,
    /// Inclusive lower bound of the scale denominators this rule applies to.
    pub min_scale_denominator: f64,
    /// Exclusive upper bound; infinite when unbounded.
    pub max_scale_denominator: f64,
    pub legend: Option<Graphic>,
    pub symbolizers: Vec<Symbolizer>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            name: None,
            title: None,
            abstract_text: None,
            filter: None,
            is_else: false,
            min_scale_denominator: 0.0,
            max_scale_denominator: f64::INFINITY,
            legend: None,
            symbolizers: Vec::new(),
        }
    }
}

impl Rule {
    pub fn applies_to_scale(&self, denominator: f64) -> bool {
        self.min_scale_denominator <= denominator && denominator < self.max_scale_denominator
    }
}

/// A rendering transformation applied to the data before styling.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Transformation {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl Transformation {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A named, possibly multi-valued transformation argument.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub values: Vec<Expression>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_scale_bounds_are_closed_open() {
        let rule = Rule { min_scale_denominator: 1000.0, max_scale_denominator: 5000.0, ..Default::default() };
        assert!(rule.applies_to_scale(1000.0));
        assert!(rule.applies_to_scale(4999.0));
        assert!(!rule.applies_to_scale(5000.0));
        assert!(!rule.applies_to_scale(999.0));
        assert!(Rule::default().applies_to_scale(1e12));
    }
}
