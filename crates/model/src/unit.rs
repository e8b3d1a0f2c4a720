use serde::Serialize;

/// Unit of measure for symbolizer sizes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Pixel,
    Metre,
    Foot,
}

impl Unit {
    /// The Symbology Encoding URI for this unit.
    pub fn se_uri(self) -> &'static str {
        match self {
            Unit::Pixel => "http://www.opengeospatial.org/se/units/pixel",
            Unit::Metre => "http://www.opengeospatial.org/se/units/metre",
            Unit::Foot => "http://www.opengeospatial.org/se/units/foot",
        }
    }
}
