use crate::expression::Expression;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ColorMapType {
    Ramp,
    Intervals,
    Values,
}

impl ColorMapType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ramp" => Some(ColorMapType::Ramp),
            "intervals" => Some(ColorMapType::Intervals),
            "values" => Some(ColorMapType::Values),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ColorMap {
    pub kind: Option<ColorMapType>,
    pub extended: bool,
    pub entries: Vec<ColorMapEntry>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ColorMapEntry {
    pub color: Option<Expression>,
    /// `None` means fully opaque.
    pub opacity: Option<Expression>,
    pub quantity: Option<Expression>,
    pub label: Option<String>,
}

impl ColorMapEntry {
    pub const DEFAULT_OPACITY: f64 = 1.0;
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContrastMethod {
    None,
    Normalize,
    Histogram,
    Exponential,
    Logarithmic,
}

impl ContrastMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(ContrastMethod::None),
            "normalize" => Some(ContrastMethod::Normalize),
            "histogram" => Some(ContrastMethod::Histogram),
            "exponential" => Some(ContrastMethod::Exponential),
            "logarithmic" => Some(ContrastMethod::Logarithmic),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ContrastEnhancement {
    pub method: Option<ContrastMethod>,
    pub gamma: Option<Expression>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct SelectedChannel {
    pub name: String,
    pub contrast_enhancement: Option<ContrastEnhancement>,
}

/// Band selection: a single grey channel or an RGB triple, never both.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSelection {
    Gray(SelectedChannel),
    Rgb([SelectedChannel; 3]),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names() {
        assert_eq!(ColorMapType::from_name("Values"), Some(ColorMapType::Values));
        assert_eq!(ColorMapType::from_name("gradient"), None);
        assert_eq!(ContrastMethod::from_name("normalize"), Some(ContrastMethod::Normalize));
        assert_eq!(ContrastMethod::from_name("stretch"), None);
    }
}
