use thiserror::Error;

/// Construction-time failures.
///
/// Only action builders, option validation and the prefix-sum index return
/// these. Transient out-of-range values inside the reducer are clamped
/// instead of reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a non-negative index, got {value}")]
    NegativeIndex { field: &'static str, value: i64 },

    #[error("{field} index {index} is out of range for length {len}")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid range {start}..{end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("window size must be odd and at least 1, got {0}")]
    InvalidWindowSize(i64),

    #[error("{field} is invalid: {reason}")]
    InvalidOption { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
