//! Keyboard shortcuts mirroring the keypad buttons
//!
//! Error prevention - every alias resolves into one [`Command`]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Command, Operator};

/// Function key that toggles the sign
pub const TOGGLE_SIGN_KEY: u8 = 9;

/// A platform-neutral key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Backspace
    Backspace,
    /// Function key F1-F24
    F(u8),
}

impl Key {
    /// Maps the key to an engine command; `None` for unmapped keys
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Self::Char(c) => command_for_char(c),
            Self::Enter => Some(Command::Equals),
            Self::Escape => Some(Command::Clear),
            Self::Backspace => Some(Command::Backspace),
            Self::F(TOGGLE_SIGN_KEY) => Some(Command::ToggleSign),
            Self::F(_) => None,
        }
    }

    /// Returns the preferred key for a command
    #[must_use]
    pub fn for_command(command: Command) -> Self {
        match command {
            Command::Digit(d) => Self::Char(char::from(b'0' + d.min(9))),
            Command::Dot => Self::Char('.'),
            Command::Operator(Operator::Add) => Self::Char('+'),
            Command::Operator(Operator::Subtract) => Self::Char('-'),
            Command::Operator(Operator::Multiply) => Self::Char('*'),
            Command::Operator(Operator::Divide) => Self::Char('/'),
            Command::Equals => Self::Enter,
            Command::Clear => Self::Escape,
            Command::ToggleSign => Self::F(TOGGLE_SIGN_KEY),
            Command::Percent => Self::Char('%'),
            Command::Backspace => Self::Backspace,
        }
    }
}

fn command_for_char(c: char) -> Option<Command> {
    if let Some(d) = c.to_digit(10) {
        return Some(Command::Digit(d as u8));
    }
    match c {
        '.' | ',' => Some(Command::Dot),
        '=' => Some(Command::Equals),
        '%' => Some(Command::Percent),
        c => Operator::from_char(c).map(Command::Operator),
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => f.write_str("Enter"),
            Self::Escape => f.write_str("Escape"),
            Self::Backspace => f.write_str("Backspace"),
            Self::F(n) => write!(f, "F{n}"),
        }
    }
}

/// Error for unknown key names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key: {0:?}")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parses a key name: a single character, `Enter`, `Escape`/`Esc`,
    /// `Backspace`, or `F1`..`F24` (case-insensitive names)
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }

        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Ok(Self::Enter),
            "escape" | "esc" => Ok(Self::Escape),
            "backspace" => Ok(Self::Backspace),
            lower => lower
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=24).contains(n))
                .map(Self::F)
                .ok_or_else(|| UnknownKey(name.to_string())),
        }
    }
}

/// Shortcut table for help panels: (key, action)
pub const SHORTCUTS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+ -", "Add / subtract"),
    ("* x", "Multiply"),
    ("/", "Divide"),
    ("Enter =", "Equals"),
    ("%", "Percent"),
    ("F9", "Toggle sign"),
    ("Bksp", "Delete last"),
    ("Esc", "Clear all"),
];
