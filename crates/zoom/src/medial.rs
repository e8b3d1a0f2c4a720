use crate::context::ZoomContext;
use crate::error::ZoomError;
use crate::range::ScaleRange;

/// Cuts a scale range halfway between zoom levels.
///
/// `at` evaluates a fractional level and returns `None` when the level cannot
/// be evaluated; an unevaluable boundary leaves that side open. The maximum
/// denominator comes from the minimum level and vice versa.
pub(crate) fn medial_range<F>(at: F, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError>
where
    F: Fn(f64) -> Result<Option<f64>, ZoomError>,
{
    let max_denom = match min {
        Some(level) => at(f64::from(level) - 0.5)?.unwrap_or(f64::INFINITY),
        None => f64::INFINITY,
    };
    let min_denom = match max {
        Some(level) => at(f64::from(level) + 0.5)?.map_or(0.0, |d| d.max(0.0)),
        None => 0.0,
    };
    ScaleRange::new(min_denom, max_denom)
}

/// Adds fractional-level queries to any zoom context by linear
/// interpolation between neighbouring levels, extrapolating from the nearest
/// two levels past either end.
#[derive(Debug, Clone)]
pub struct MedialZoomContext<Z> {
    base: Z,
}

impl<Z: ZoomContext> MedialZoomContext<Z> {
    pub fn new(base: Z) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Z {
        &self.base
    }

    /// Levels outside the `i32` range are never defined.
    fn level(&self, level: i64) -> Option<f64> {
        let level = i32::try_from(level).ok()?;
        self.base.scale_denominator(level).ok()
    }

    /// The denominator at a fractional level, or `None` when fewer than two
    /// levels are available to extend from. Never negative.
    pub fn scale_denominator_at(&self, level: f64) -> Option<f64> {
        if !level.is_finite() {
            return None;
        }
        let lower = level.floor();
        // Neighbour arithmetic runs in i64 so the i32 edges cannot overflow.
        let lo = lower as i64;
        if lower == level {
            return self.level(lo);
        }
        let hi = lo + 1;
        let t = level - lower;
        let value = match (self.level(lo), self.level(hi)) {
            (Some(a), Some(b)) => a + (b - a) * t,
            // Past the last level: continue the slope of the final step.
            (Some(a), None) => {
                let before = self.level(lo - 1)?;
                a + (a - before) * t
            }
            // Before the first level.
            (None, Some(b)) => {
                let after = self.level(hi + 1)?;
                b + (b - after) * (1.0 - t)
            }
            (None, None) => return None,
        };
        Some(value.max(0.0))
    }
}

impl<Z: ZoomContext> ZoomContext for MedialZoomContext<Z> {
    fn scale_denominator(&self, level: i32) -> Result<f64, ZoomError> {
        self.base.scale_denominator(level)
    }

    fn range(&self, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError> {
        // The window itself must name defined levels.
        if let Some(level) = min {
            self.base.scale_denominator(level)?;
        }
        if let Some(level) = max {
            self.base.scale_denominator(level)?;
        }
        medial_range(|level| Ok(self.scale_denominator_at(level)), min, max)
    }
}
