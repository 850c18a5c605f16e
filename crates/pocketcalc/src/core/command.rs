//! Engine commands - one per button or key action

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// A single engine transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Type a digit (0-9)
    Digit(u8),
    /// Type the decimal point
    Dot,
    /// Choose a pending operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Flip the sign of the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
    /// Delete the last character
    Backspace,
}

impl Command {
    /// Button label for this command
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Dot => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Accessible description, e.g. for help panels
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Dot => "Decimal point",
            Self::Operator(Operator::Add) => "Add",
            Self::Operator(Operator::Subtract) => "Subtract",
            Self::Operator(Operator::Multiply) => "Multiply",
            Self::Operator(Operator::Divide) => "Divide",
            Self::Equals => "Equals",
            Self::Clear => "Clear all",
            Self::ToggleSign => "Toggle sign",
            Self::Percent => "Percent",
            Self::Backspace => "Delete last",
        }
    }

    /// Returns true for digit and decimal point entry
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Dot)
    }
}
