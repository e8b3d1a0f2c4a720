use crate::context::ZoomContext;
use crate::error::ZoomError;
use crate::medial::medial_range;
use crate::range::ScaleRange;

/// Zoom levels forming a geometric progression:
/// `denom(level) = initial_scale / ratio^(level - initial_level)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioZoomContext {
    initial_level: i32,
    initial_scale: f64,
    ratio: f64,
}

impl RatioZoomContext {
    pub fn new(initial_level: i32, initial_scale: f64, ratio: f64) -> Result<Self, ZoomError> {
        if !initial_scale.is_finite() || initial_scale <= 0.0 {
            return Err(ZoomError::InvalidInitialScale(initial_scale));
        }
        if !ratio.is_finite() || ratio <= 1.0 {
            return Err(ZoomError::InvalidRatio(ratio));
        }
        Ok(Self::new_unchecked(initial_level, initial_scale, ratio))
    }

    pub(crate) const fn new_unchecked(initial_level: i32, initial_scale: f64, ratio: f64) -> Self {
        Self { initial_level, initial_scale, ratio }
    }

    pub fn initial_level(&self) -> i32 {
        self.initial_level
    }

    pub fn initial_scale(&self) -> f64 {
        self.initial_scale
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The closed-form progression evaluated at a fractional level.
    pub fn scale_denominator_at(&self, level: f64) -> f64 {
        self.initial_scale / self.ratio.powf(level - f64::from(self.initial_level))
    }
}

impl ZoomContext for RatioZoomContext {
    fn scale_denominator(&self, level: i32) -> Result<f64, ZoomError> {
        Ok(self.scale_denominator_at(f64::from(level)))
    }

    fn range(&self, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError> {
        medial_range(|level| Ok(Some(self.scale_denominator_at(level))), min, max)
    }
}
