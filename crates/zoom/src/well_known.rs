use crate::context::{ZoomContext, ZoomContextFinder};
use crate::list::ListZoomContext;
use crate::ratio::RatioZoomContext;
use std::sync::{Arc, OnceLock};

/// Names that refer to more than one common grid and are never resolved.
pub const AMBIGUOUS_NAMES: [&str; 2] = ["EPSG:4326", "EPSG:900913"];

const WEB_MERCATOR_SCALE: f64 = 559_082_264.028_717_8;
const CRS84_QUAD_SCALE: f64 = 559_082_263.950_892_9;

const WEB_MERCATOR_NAMES: [&str; 4] = [
    "WebMercator",
    "EPSG:3857",
    "GoogleMapsCompatible",
    "urn:ogc:def:wkss:OGC:1.0:GoogleMapsCompatible",
];

const CRS84_QUAD_NAMES: [&str; 5] = [
    "DEFAULT",
    "WGS84",
    "CRS:84",
    "GoogleCRS84Quad",
    "urn:ogc:def:wkss:OGC:1.0:GoogleCRS84Quad",
];

const CRS84_SCALE_NAMES: [&str; 2] = ["GlobalCRS84Scale", "urn:ogc:def:wkss:OGC:1.0:GlobalCRS84Scale"];
const CRS84_PIXEL_NAMES: [&str; 2] = ["GlobalCRS84Pixel", "urn:ogc:def:wkss:OGC:1.0:GlobalCRS84Pixel"];

const CRS84_SCALES: [f64; 21] = [
    500e6, 250e6, 100e6, 50e6, 25e6, 10e6, 5e6, 2.5e6, 1e6, 500e3, 250e3, 100e3, 50e3, 25e3, 10e3,
    5e3, 2.5e3, 1e3, 500.0, 250.0, 100.0,
];

const CRS84_PIXELS: [f64; 18] = [
    795_139_219.951_954_1,
    397_569_609.975_977_1,
    198_784_804.987_988_5,
    132_523_203.325_325_7,
    66_261_601.662_662_84,
    33_130_800.831_331_42,
    13_252_320.332_532_57,
    6_626_160.166_266_284,
    3_313_080.083_133_142,
    1_656_540.041_566_571,
    552_180.013_855_523_6,
    331_308.008_313_314_2,
    110_436.002_771_104_7,
    55_218.001_385_552_36,
    33_130.800_831_331_42,
    11_043.600_277_110_47,
    3_313.080_083_133_142,
    1_104.360_027_711_047,
];

/// The built-in registry of common tile grids, matched case-insensitively.
pub struct WellKnownZoomContextFinder {
    entries: Vec<(&'static str, Arc<dyn ZoomContext>)>,
    default: Arc<dyn ZoomContext>,
}

impl WellKnownZoomContextFinder {
    pub fn instance() -> &'static WellKnownZoomContextFinder {
        static INSTANCE: OnceLock<WellKnownZoomContextFinder> = OnceLock::new();
        INSTANCE.get_or_init(Self::build)
    }

    fn build() -> Self {
        let web_mercator: Arc<dyn ZoomContext> =
            Arc::new(RatioZoomContext::new_unchecked(0, WEB_MERCATOR_SCALE, 2.0));
        let crs84_quad: Arc<dyn ZoomContext> =
            Arc::new(RatioZoomContext::new_unchecked(0, CRS84_QUAD_SCALE, 2.0));
        let crs84_scale: Arc<dyn ZoomContext> =
            Arc::new(ListZoomContext::new_unchecked(CRS84_SCALES.to_vec(), 0));
        let crs84_pixel: Arc<dyn ZoomContext> =
            Arc::new(ListZoomContext::new_unchecked(CRS84_PIXELS.to_vec(), 0));

        let entries = [
            (&WEB_MERCATOR_NAMES[..], &web_mercator),
            (&CRS84_QUAD_NAMES[..], &crs84_quad),
            (&CRS84_SCALE_NAMES[..], &crs84_scale),
            (&CRS84_PIXEL_NAMES[..], &crs84_pixel),
        ]
        .into_iter()
        .flat_map(|(names, ctx)| names.iter().map(move |name| (*name, Arc::clone(ctx))))
        .collect();

        Self { entries, default: crs84_quad }
    }

    /// The context used when a document does not select a grid.
    pub fn default_context(&self) -> Arc<dyn ZoomContext> {
        Arc::clone(&self.default)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl ZoomContextFinder for WellKnownZoomContextFinder {
    fn get(&self, name: &str) -> Option<Arc<dyn ZoomContext>> {
        let found = self
            .entries
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, ctx)| Arc::clone(ctx));
        if found.is_some() {
            log::debug!("Resolved well-known zoom context '{name}'");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_share_a_context() {
        let finder = WellKnownZoomContextFinder::instance();
        let a = finder.get("EPSG:3857").unwrap();
        let b = finder.get("googlemapscompatible").unwrap();
        assert_eq!(a.scale_denominator(5).unwrap(), b.scale_denominator(5).unwrap());
        assert_eq!(a.scale_denominator(0).unwrap(), WEB_MERCATOR_SCALE);
    }

    #[test]
    fn test_default_is_crs84_quad() {
        let ctx = WellKnownZoomContextFinder::instance().default_context();
        assert_eq!(ctx.scale_denominator(0).unwrap(), CRS84_QUAD_SCALE);
        assert_eq!(ctx.scale_denominator(1).unwrap(), CRS84_QUAD_SCALE / 2.0);
    }

    #[test]
    fn test_lists() {
        let finder = WellKnownZoomContextFinder::instance();
        let scale = finder.get("GlobalCRS84Scale").unwrap();
        assert_eq!(scale.scale_denominator(17).unwrap(), 1000.0);
        assert!(scale.scale_denominator(21).is_err());
        let pixel = finder.get("GlobalCRS84Pixel").unwrap();
        assert_eq!(pixel.scale_denominator(17).unwrap(), 1_104.360_027_711_047);
    }

    #[test]
    fn test_ambiguous_names_are_not_registered() {
        let finder = WellKnownZoomContextFinder::instance();
        for name in AMBIGUOUS_NAMES {
            assert!(finder.get(name).is_none());
        }
    }
}
