use crate::error::ZoomError;
use crate::range::ScaleRange;
use crate::well_known::{AMBIGUOUS_NAMES, WellKnownZoomContextFinder};
use std::fmt::Debug;
use std::sync::Arc;

/// A strategy converting zoom levels into scale denominators.
///
/// Implementations are immutable after construction and can be shared
/// across threads.
pub trait ZoomContext: Debug + Send + Sync {
    /// The scale denominator at an integer zoom level.
    fn scale_denominator(&self, level: i32) -> Result<f64, ZoomError>;

    /// The scale range covering the zoom levels `min..=max`. An absent bound
    /// leaves that side of the range open.
    fn range(&self, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError>;
}

impl<Z: ZoomContext + ?Sized> ZoomContext for &Z {
    fn scale_denominator(&self, level: i32) -> Result<f64, ZoomError> {
        (**self).scale_denominator(level)
    }

    fn range(&self, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError> {
        (**self).range(min, max)
    }
}

impl<Z: ZoomContext + ?Sized> ZoomContext for Arc<Z> {
    fn scale_denominator(&self, level: i32) -> Result<f64, ZoomError> {
        (**self).scale_denominator(level)
    }

    fn range(&self, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError> {
        (**self).range(min, max)
    }
}

/// Looks up zoom contexts by name.
pub trait ZoomContextFinder: Send + Sync {
    fn get(&self, name: &str) -> Option<Arc<dyn ZoomContext>>;
}

/// Resolves a grid name: ambiguous aliases are rejected outright, then the
/// given finders are consulted in order, then the well-known registry.
pub fn resolve(
    name: &str,
    finders: &[Arc<dyn ZoomContextFinder>],
) -> Result<Arc<dyn ZoomContext>, ZoomError> {
    if AMBIGUOUS_NAMES.iter().any(|n| n.eq_ignore_ascii_case(name)) {
        return Err(ZoomError::Ambiguous(name.to_string()));
    }
    finders
        .iter()
        .find_map(|finder| finder.get(name))
        .or_else(|| WellKnownZoomContextFinder::instance().get(name))
        .ok_or_else(|| ZoomError::Unknown(name.to_string()))
}
