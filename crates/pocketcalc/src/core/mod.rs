//! Calculator engine core
//!
//! The engine is a small state machine over a display string and a
//! pending binary operation. Arithmetic failures never escape it: they
//! surface as [`ERROR_MARKER`] in the display.

mod command;
mod engine;
pub mod keymap;
mod number;
mod operations;

pub use command::Command;
pub use engine::{Calculator, CalculatorState, Phase};
pub use number::{format_number, parse_display};
pub use operations::{checked_evaluate, evaluate, Operator};

use thiserror::Error;

/// Text shown in the display after an invalid arithmetic result
pub const ERROR_MARKER: &str = "Error";

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid result (NaN)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    /// Display text is not a number
    #[error("Not a number: {0:?}")]
    Unparsable(String),
}

impl CalcError {
    /// Short label for status lines
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "overflow",
            Self::InvalidResult(_) => "invalid result",
            Self::Unparsable(_) => "not a number",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        let err = CalcError::Overflow;
        assert_eq!(format!("{err}"), "Overflow: result exceeds maximum value");
    }

    #[test]
    fn test_calc_error_display_invalid_result() {
        let err = CalcError::InvalidResult("NaN".into());
        assert_eq!(format!("{err}"), "Invalid result: NaN");
    }

    #[test]
    fn test_calc_error_display_unparsable() {
        let err = CalcError::Unparsable("Error".into());
        assert_eq!(format!("{err}"), "Not a number: \"Error\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_calc_error_labels() {
        assert_eq!(CalcError::DivisionByZero.label(), "division by zero");
        assert_eq!(CalcError::Overflow.label(), "overflow");
        assert_eq!(CalcError::InvalidResult("NaN".into()).label(), "invalid result");
        assert_eq!(CalcError::Unparsable(String::new()).label(), "not a number");
    }

    #[test]
    fn test_error_marker_is_not_numeric() {
        assert!(parse_display(ERROR_MARKER).is_err());
    }
}
