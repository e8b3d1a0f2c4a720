use ysld_model::Unit;

/// Maps unit-of-measure names found in documents onto units.
pub trait UomMapper: Send + Sync {
    fn unit(&self, name: &str) -> Option<Unit>;
}

/// Short names plus the Symbology Encoding unit URIs, case-insensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct OgcUomMapper;

impl UomMapper for OgcUomMapper {
    fn unit(&self, name: &str) -> Option<Unit> {
        let name = name.trim();
        [Unit::Pixel, Unit::Metre, Unit::Foot]
            .into_iter()
            .find(|unit| unit.se_uri().eq_ignore_ascii_case(name))
            .or_else(|| match name.to_ascii_lowercase().as_str() {
                "pixel" | "pixels" | "px" => Some(Unit::Pixel),
                "metre" | "metres" | "meter" | "meters" | "m" => Some(Unit::Metre),
                "foot" | "feet" | "ft" => Some(Unit::Foot),
                _ => None,
            })
    }
}
