//! TUI Frontend for Calculator
//!
//! Keyboard and mouse input, a clickable keypad and the ratatui layout.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorLayout};
