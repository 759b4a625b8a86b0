//! Payload checks shared by action builders and option validation

use crate::error::{CarouselError, Result};

pub fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CarouselError::NonFinite { field, value })
    }
}

pub fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(CarouselError::Negative { field, value });
    }
    Ok(value)
}

/// Accept an index from an untyped source. Negative values are rejected.
pub fn index(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| CarouselError::NegativeIndex { field, value })
}

/// Window sizes must be odd so the window has a center slot.
pub fn window_size(value: i64) -> Result<usize> {
    if value < 1 || value % 2 == 0 {
        return Err(CarouselError::InvalidWindowSize(value));
    }
    Ok(value as usize)
}
