//! Error types for the sources crate.

use thiserror::Error;

/// Errors raised while turning navigation parameters into filters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// A comma-separated genre entry was not a number
    #[error("Invalid genre id: {0:?}")]
    InvalidGenreId(String),

    /// A numeric parameter could not be parsed
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Year range start {start} is after end {end}")]
    InvertedYearRange { start: u16, end: u16 },

    #[error("Minimum rating {0} is outside 0-5")]
    RatingOutOfRange(f32),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, NavigationError>;
