//! Error types for the calculator library

use thiserror::Error;

/// Result alias used across the calculators
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised before a calculation is attempted
///
/// The math layer never produces a partial answer: either the guards pass and a
/// finite number comes back, or one of these is returned.
#[derive(Error, Debug)]
pub enum CalcError {
    /// A scalar input is negative, non-finite, or otherwise out of range
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A calculation needs at least one period to spread a payment over
    #[error("Time horizon must span at least one period")]
    ZeroPeriods,

    /// The target age/year does not come after the starting one
    #[error("Target ({to}) must be greater than start ({from})")]
    InvalidHorizon { from: u32, to: u32 },

    /// Custom asset allocation percentages do not add up to 100
    #[error("Allocations must total 100%, got {total:.1}%")]
    AllocationMismatch { total: f64 },

    /// Root finding could not bracket or converge on an answer
    #[error("No solution found for the given inputs")]
    NoSolution,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject negative or non-finite monetary amounts
pub fn ensure_amount(field: &'static str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid(field, format!("must not be negative (got {})", value)));
    }
    Ok(value)
}

/// Reject amounts that must be strictly positive (loan principal, SIP installment)
pub fn ensure_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    ensure_amount(field, value)?;
    if value == 0.0 {
        return Err(CalcError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

/// Reject percentages outside 0..=100
pub fn ensure_percent(field: &'static str, value: f64) -> CalcResult<f64> {
    ensure_amount(field, value)?;
    if value > 100.0 {
        return Err(CalcError::invalid(field, format!("must be at most 100 (got {})", value)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_guards() {
        assert!(ensure_amount("amount", 0.0).is_ok());
        assert!(ensure_amount("amount", -1.0).is_err());
        assert!(ensure_amount("amount", f64::NAN).is_err());
        assert!(ensure_positive("amount", 0.0).is_err());
        assert!(ensure_percent("pct", 100.5).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalcError::InvalidHorizon { from: 25, to: 20 };
        assert_eq!(err.to_string(), "Target (20) must be greater than start (25)");

        let err = CalcError::invalid("monthly_sip", "must be greater than zero");
        assert_eq!(err.to_string(), "Invalid monthly_sip: must be greater than zero");
    }
}
