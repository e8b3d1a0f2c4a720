use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZoomError {
    #[error("zoom level {level} is outside the defined levels {min}..={max}")]
    LevelOutOfRange { level: i32, min: i32, max: i32 },

    #[error("ratio between zoom levels must be greater than 1, got {0}")]
    InvalidRatio(f64),

    #[error("initial scale denominator must be positive, got {0}")]
    InvalidInitialScale(f64),

    #[error("{count} scale denominators starting at level {initial_level} run past the last zoom level")]
    TooManyLevels { initial_level: i32, count: usize },

    #[error("a zoom context needs at least one scale denominator")]
    EmptyScaleList,

    #[error("invalid scale range [{min}, {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("unknown zoom context '{0}'")]
    Unknown(String),

    #[error("zoom context name '{0}' is ambiguous, use a specific grid name")]
    Ambiguous(String),
}
