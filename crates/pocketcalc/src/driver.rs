//! Unified Calculator Driver
//!
//! **Write the test logic once, run it everywhere.** The same
//! verification functions run against the bare engine and against the
//! terminal front end fed with real key events.
//!
//! Balanced testing - Balanced testing across front ends

use crate::core::keymap::Key;
use crate::core::{Calculator, CalculatorState, Command, Operator, ERROR_MARKER};
use crate::format::{DisplayFormatter, Locale};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use pocketcalc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.type_keys("3+4+5=");
/// assert_eq!(driver.display(), "12");
/// ```
pub trait CalculatorDriver {
    /// Activates one button
    fn press(&mut self, command: Command);

    /// Sends one key press; unmapped keys are ignored
    fn press_key(&mut self, key: Key);

    /// Engine display text
    fn display(&self) -> String;

    /// Display text as presented to the user
    fn rendered(&self) -> String;

    /// Engine state snapshot
    fn state(&self) -> CalculatorState;

    /// Returns to the cleared state
    fn reset(&mut self);

    /// Activates several buttons in order
    fn press_all(&mut self, commands: &[Command]) {
        for &command in commands {
            self.press(command);
        }
    }

    /// Types each character of `keys` as a key press
    fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.press_key(Key::Char(c));
        }
    }
}

/// Driver over the bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    calculator: Calculator,
    formatter: DisplayFormatter,
}

impl EngineDriver {
    /// Creates an engine driver with the default locale
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine driver rendering with `locale`
    #[must_use]
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            calculator: Calculator::new(),
            formatter: DisplayFormatter::new(locale),
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, command: Command) {
        self.calculator.apply(command);
    }

    fn press_key(&mut self, key: Key) {
        if let Some(command) = key.command() {
            self.calculator.apply(command);
        }
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn rendered(&self) -> String {
        self.formatter.format(self.calculator.display())
    }

    fn state(&self) -> CalculatorState {
        self.calculator.state().clone()
    }

    fn reset(&mut self) {
        self.calculator.clear_all();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{CalculatorDriver, CalculatorState, Command, Key};
    use crate::tui::{CalculatorApp, InputHandler};

    /// Drives the terminal app through crossterm key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
        input: InputHandler,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                input: InputHandler::new(),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        fn send(&mut self, code: KeyCode) {
            let action = self.input.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            self.app.handle_action(action);
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, command: Command) {
            self.press_key(Key::for_command(command));
        }

        fn press_key(&mut self, key: Key) {
            let code = match key {
                Key::Char(c) => KeyCode::Char(c),
                Key::Enter => KeyCode::Enter,
                Key::Escape => KeyCode::Esc,
                Key::Backspace => KeyCode::Backspace,
                Key::F(n) => KeyCode::F(n),
            };
            self.send(code);
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn rendered(&self) -> String {
            self.app.rendered_display()
        }

        fn state(&self) -> CalculatorState {
            self.app.calculator().state().clone()
        }

        fn reset(&mut self) {
            self.send(KeyCode::Esc);
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Behaviour Checks =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate with a single leading zero suppressed
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("05");
    assert_eq!(driver.display(), "5");

    driver.reset();
    driver.type_keys("120.045");
    assert_eq!(driver.display(), "120.045");
    driver.reset();
}

/// Repeated decimal points leave exactly one
pub fn verify_single_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("3..");
    assert_eq!(driver.display(), "3.");
    driver.type_keys("1.4");
    assert_eq!(driver.display(), "3.14");
    driver.reset();
}

/// Sign toggle is its own inverse, and a no-op at zero
pub fn verify_toggle_sign<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press(Command::ToggleSign);
    assert_eq!(driver.display(), "0");

    driver.type_keys("42");
    driver.press(Command::ToggleSign);
    assert_eq!(driver.display(), "-42");
    driver.press(Command::ToggleSign);
    assert_eq!(driver.display(), "42");
    driver.reset();
}

/// `3 + 4 + 5 =` evaluates eagerly left to right
pub fn verify_operator_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("3+4+");
    assert_eq!(driver.display(), "7");
    driver.type_keys("5=");
    assert_eq!(driver.display(), "12");

    driver.reset();
    driver.type_keys("2+3*4=");
    assert_eq!(driver.display(), "20");
    driver.reset();
}

/// Division by zero shows the error marker until the next digit
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("8/0=");
    assert_eq!(driver.display(), ERROR_MARKER);
    assert_eq!(driver.state().first_operand(), None);
    driver.type_keys("2");
    assert_eq!(driver.display(), "2");
    driver.reset();
}

/// Percent divides by one hundred
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("50%");
    assert_eq!(driver.display(), "0.5");
    driver.reset();
}

/// `=` without a pending operator changes nothing
pub fn verify_equals_without_operator<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("7=");
    assert_eq!(driver.display(), "7");
    driver.reset();
}

/// Clear returns every field to its initial value
pub fn verify_clear_all<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("9");
    driver.press(Command::Operator(Operator::Multiply));
    driver.press(Command::Clear);
    assert_eq!(driver.state(), CalculatorState::default());
    driver.reset();
}

/// Backspace edits entry and clears after `=`
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("123");
    driver.press_key(Key::Backspace);
    assert_eq!(driver.display(), "12");

    driver.type_keys("+1=");
    assert_eq!(driver.display(), "13");
    driver.press_key(Key::Backspace);
    assert_eq!(driver.state(), CalculatorState::default());
    driver.reset();
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_single_decimal_point(driver);
    verify_toggle_sign(driver);
    verify_operator_chaining(driver);
    verify_division_by_zero(driver);
    verify_percent(driver);
    verify_equals_without_operator(driver);
    verify_clear_all(driver);
    verify_backspace(driver);
}
