use crate::context::ZoomContext;
use crate::error::ZoomError;
use crate::medial::MedialZoomContext;
use crate::range::ScaleRange;

/// Zoom levels backed by an explicit list of scale denominators. The first
/// entry belongs to `initial_level`; levels outside the list are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ListZoomContext {
    scales: Vec<f64>,
    initial_level: i32,
}

impl ListZoomContext {
    pub fn new(scales: Vec<f64>, initial_level: i32) -> Result<Self, ZoomError> {
        if scales.is_empty() {
            return Err(ZoomError::EmptyScaleList);
        }
        let last = i64::from(initial_level) + scales.len() as i64 - 1;
        if i32::try_from(last).is_err() {
            return Err(ZoomError::TooManyLevels { initial_level, count: scales.len() });
        }
        Ok(Self::new_unchecked(scales, initial_level))
    }

    pub(crate) fn new_unchecked(scales: Vec<f64>, initial_level: i32) -> Self {
        Self { scales, initial_level }
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn min_level(&self) -> i32 {
        self.initial_level
    }

    pub fn max_level(&self) -> i32 {
        let last = i64::from(self.initial_level) + self.scales.len() as i64 - 1;
        i32::try_from(last).unwrap_or(i32::MAX)
    }
}

impl ZoomContext for ListZoomContext {
    fn scale_denominator(&self, level: i32) -> Result<f64, ZoomError> {
        usize::try_from(i64::from(level) - i64::from(self.initial_level))
            .ok()
            .and_then(|index| self.scales.get(index).copied())
            .ok_or_else(|| ZoomError::LevelOutOfRange {
                level,
                min: self.min_level(),
                max: self.max_level(),
            })
    }

    fn range(&self, min: Option<i32>, max: Option<i32>) -> Result<ScaleRange, ZoomError> {
        MedialZoomContext::new(self).range(min, max)
    }
}
