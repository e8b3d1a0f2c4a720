use crate::error::ZoomError;
use std::fmt;

/// A closed-open interval `[min, max)` of scale denominators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    min: f64,
    max: f64,
}

impl ScaleRange {
    pub const UNBOUNDED: ScaleRange = ScaleRange { min: 0.0, max: f64::INFINITY };

    /// Requires `0 <= min <= max` and neither bound NaN. `max` may be infinite.
    pub fn new(min: f64, max: f64) -> Result<Self, ZoomError> {
        if min.is_nan() || max.is_nan() || min < 0.0 || min > max {
            return Err(ZoomError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, denominator: f64) -> bool {
        self.min <= denominator && denominator < self.max
    }

    pub fn is_unbounded(&self) -> bool {
        self.min == 0.0 && self.max.is_infinite()
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for ScaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(ScaleRange::new(0.0, f64::INFINITY).is_ok());
        assert!(ScaleRange::new(5.0, 5.0).is_ok());
        assert!(ScaleRange::new(-1.0, 5.0).is_err());
        assert!(ScaleRange::new(10.0, 5.0).is_err());
        assert!(ScaleRange::new(f64::NAN, 5.0).is_err());
        assert!(ScaleRange::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_closed_open() {
        let range = ScaleRange::new(1000.0, 2000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(!range.contains(2000.0));
        assert!(ScaleRange::default().is_unbounded());
    }
}
