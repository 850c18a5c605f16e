//! TUI Application State
//!
//! Error prevention - all input funnels into engine commands

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::core::{CalcError, Calculator, Command, Phase};
use crate::format::{DisplayFormatter, Locale};

use super::input::{InputHandler, KeyAction};
use super::keypad::Keypad;
use super::ui::CalculatorLayout;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The engine
    calculator: Calculator,
    /// Presentation formatting
    formatter: DisplayFormatter,
    /// Keypad with highlight state
    keypad: Keypad,
    /// Whether the help panel is shown
    show_help: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_locale(Locale::default())
    }

    /// Creates a calculator app rendering numbers for `locale`
    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            calculator: Calculator::new(),
            formatter: DisplayFormatter::new(locale),
            keypad: Keypad::new(),
            show_help: true,
            should_quit: false,
        }
    }

    /// Sets whether the help panel is shown
    #[must_use]
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display locale
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.formatter.locale()
    }

    /// Returns whether the help panel is shown
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Runs a command and highlights its button
    pub fn press(&mut self, command: Command) {
        self.calculator.apply(command);
        self.keypad.highlight(command);
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.press(command),
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a terminal key event
    pub fn handle_key(&mut self, event: KeyEvent) {
        let action = InputHandler::new().handle_key(event);
        self.handle_action(action);
    }

    /// Handles a mouse click at terminal cell (`x`, `y`) on a screen of `area`.
    ///
    /// Returns true if the click landed on a button.
    pub fn handle_click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let keypad_area = CalculatorLayout::new(area, self.show_help).keypad;
        match self.keypad.hit_test(keypad_area, x, y) {
            Some(index) => {
                self.click_button(index);
                true
            }
            None => false,
        }
    }

    /// Presses the button with the given keypad index
    pub fn click_button(&mut self, index: usize) {
        if let Some(command) = self.keypad.get_button(index).map(|b| b.command) {
            self.press(command);
        }
    }

    /// Display text formatted for the locale
    #[must_use]
    pub fn rendered_display(&self) -> String {
        self.formatter.format(self.calculator.display())
    }

    /// Pending operation line, e.g. `12 +`, formatted for the locale
    #[must_use]
    pub fn pending_line(&self) -> String {
        let state = self.calculator.state();
        match (state.first_operand(), state.operator()) {
            (Some(first), Some(op)) => format!(
                "{} {}",
                self.formatter.format(&crate::core::format_number(first)),
                op.symbol()
            ),
            _ => String::new(),
        }
    }

    /// Status line: phase, plus the failure behind an error marker
    #[must_use]
    pub fn status(&self) -> String {
        match (self.calculator.phase(), self.calculator.last_error()) {
            (Phase::Error, Some(err)) => format!("✗ {}", describe(err)),
            (phase, _) => format!("● {}", phase.name()),
        }
    }
}

fn describe(err: &CalcError) -> String {
    let label = err.label();
    let mut chars = label.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
