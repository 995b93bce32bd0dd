//! Calculation error types

use thiserror::Error;

/// Errors raised by the energy and hydration formulas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Total sweat loss came out negative, which is physiologically impossible
    #[error(
        "Input data produce a negative sweat loss ({total_sweat_ml:.1} ml). Check the values entered."
    )]
    NegativeSweatLoss { total_sweat_ml: f64 },

    #[error("Division by zero: {0} must be greater than 0")]
    DivisionByZero(&'static str),
}

/// Result type for calculations
pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinities
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid(field, format!("{} is not a finite number", value)))
    }
}

/// Require `min <= value <= max`
pub(crate) fn ensure_range(field: &'static str, value: f64, min: f64, max: f64) -> CalcResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(CalcError::invalid(
            field,
            format!("{} is outside the allowed range {}-{}", value, min, max),
        ));
    }
    Ok(value)
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid(field, format!("{} must be greater than 0", value)));
    }
    Ok(value)
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_range_bounds_are_inclusive() {
        assert_eq!(ensure_range("pal", 1.2, 1.2, 2.5), Ok(1.2));
        assert_eq!(ensure_range("pal", 2.5, 1.2, 2.5), Ok(2.5));
        assert!(ensure_range("pal", 2.51, 1.2, 2.5).is_err());
        assert!(ensure_range("pal", f64::NAN, 1.2, 2.5).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = ensure_positive("weight_kg", 0.0).unwrap_err();
        assert!(err.to_string().starts_with("Invalid weight_kg"));
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative("urine_loss_ml", 0.0), Ok(0.0));
        assert!(ensure_non_negative("urine_loss_ml", -0.1).is_err());
    }
}
