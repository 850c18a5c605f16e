//! Binary operators and the shared arithmetic core
//!
//! Error prevention - one canonical operator enum, every input
//! alias resolves into it

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - the only operators the engine knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// All operators in keypad column order (top to bottom)
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator glyph for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Stable lowercase name, used for element ids and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Resolves an operator key or glyph, including the ASCII aliases
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator. Division by zero yields NaN.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a op b`; with no operator the right operand is returned unchanged
#[must_use]
pub fn evaluate(a: f64, b: f64, op: Option<Operator>) -> f64 {
    match op {
        Some(op) => op.apply(a, b),
        None => b,
    }
}

/// Evaluates and rejects non-finite results
pub fn checked_evaluate(a: f64, b: f64, op: Option<Operator>) -> CalcResult<f64> {
    let result = evaluate(a, b, op);
    if result.is_finite() {
        Ok(result)
    } else if op == Some(Operator::Divide) && b == 0.0 {
        Err(CalcError::DivisionByZero)
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Err(CalcError::InvalidResult("NaN".into()))
    }
}
