//! Calculator engine state machine
//!
//! Error prevention - State machine prevents invalid transitions
//!
//! Every operation reads and rewrites one [`CalculatorState`]. Operator
//! presses evaluate eagerly left to right (`3 + 4 + 5` shows the running
//! total at each `+`); there is no operator precedence.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    checked_evaluate, format_number, parse_display, CalcError, CalcResult, Command, Operator,
    ERROR_MARKER,
};

/// The five fields the engine owns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Text currently shown; never empty
    display: String,
    /// Left-hand operand of the pending operation
    first_operand: Option<f64>,
    /// Pending operation
    operator: Option<Operator>,
    /// Next digit starts a new number (an operator was just chosen)
    awaiting_second_operand: bool,
    /// Next digit starts a new number (`=` was just pressed)
    just_evaluated: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            awaiting_second_operand: false,
            just_evaluated: false,
        }
    }
}

impl CalculatorState {
    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the held left-hand operand
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Returns the pending operator
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Returns true right after an operator was chosen
    #[must_use]
    pub fn awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Returns true right after `=`
    #[must_use]
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    /// Returns true while the error marker is shown
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// Derived state-machine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_error() {
            Phase::Error
        } else if self.awaiting_second_operand {
            Phase::AwaitingSecondOperand
        } else if self.just_evaluated {
            Phase::JustEvaluated
        } else {
            Phase::Idle
        }
    }

    /// The pending operation as text, e.g. `"12 +"`
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        match (self.first_operand, self.operator) {
            (Some(first), Some(op)) => Some(format!("{} {}", format_number(first), op.symbol())),
            _ => None,
        }
    }

    /// Next entry replaces the display instead of extending it
    fn starts_fresh_entry(&self) -> bool {
        self.awaiting_second_operand || self.just_evaluated || self.is_error()
    }

    fn reset_entry_flags(&mut self) {
        self.awaiting_second_operand = false;
        self.just_evaluated = false;
    }
}

/// Phases of the calculator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Editing a number
    Idle,
    /// Operator chosen, next digit starts the right operand
    AwaitingSecondOperand,
    /// `=` pressed, next digit starts a new computation
    JustEvaluated,
    /// Error marker shown
    Error,
}

impl Phase {
    /// Human-readable phase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::AwaitingSecondOperand => "Awaiting operand",
            Self::JustEvaluated => "Evaluated",
            Self::Error => "Error",
        }
    }
}

/// The calculator engine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    /// Most recent arithmetic failure, kept for status display only
    last_error: Option<CalcError>,
}

impl From<CalculatorState> for Calculator {
    fn from(state: CalculatorState) -> Self {
        Self {
            state,
            last_error: None,
        }
    }
}

impl Calculator {
    /// Creates a calculator in the cleared state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.state.display
    }

    /// Returns the derived phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the failure behind the current error marker, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Applies one command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Digit(d) => self.input_digit(d),
            Command::Dot => self.input_dot(),
            Command::Operator(op) => self.perform_operator(op),
            Command::Equals => self.equals(),
            Command::Clear => self.clear_all(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Percent => self.percent(),
            Command::Backspace => self.backspace(),
        }
        debug!(?command, display = %self.state.display, phase = ?self.phase(), "command applied");
    }

    /// Types a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            trace!(digit, "ignoring non-decimal digit");
            return;
        };

        if self.state.starts_fresh_entry() {
            self.state.display = c.to_string();
            self.state.reset_entry_flags();
            self.last_error = None;
        } else if self.state.display == "0" {
            self.state.display = c.to_string();
        } else {
            self.state.display.push(c);
        }
    }

    /// Types the decimal point; at most one per number
    pub fn input_dot(&mut self) {
        if self.state.starts_fresh_entry() {
            self.state.display = "0.".to_string();
            self.state.reset_entry_flags();
            self.last_error = None;
            return;
        }

        let text = &self.state.display;
        if text.contains('.') || text.contains(['e', 'E']) {
            trace!(%text, "decimal point already present");
            return;
        }
        self.state.display.push('.');
    }

    /// Resets every field to the cleared state
    pub fn clear_all(&mut self) {
        self.state = CalculatorState::default();
        self.last_error = None;
    }

    /// Flips the sign of the display; no-op at `"0"` and on the error marker
    pub fn toggle_sign(&mut self) {
        if self.state.display == "0" || self.state.is_error() {
            return;
        }
        self.state.display = match self.state.display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.state.display),
        };
    }

    /// Divides the display by 100; a non-finite result leaves the state alone
    pub fn percent(&mut self) {
        let Some(value) = self.parsed_display() else {
            return;
        };
        let result = value / 100.0;
        if !result.is_finite() {
            trace!(value, "percent result not finite");
            return;
        }
        self.state.display = format_number(result);
    }

    /// Chooses the next operator, evaluating any pending operation first
    pub fn perform_operator(&mut self, next: Operator) {
        let Some(input) = self.parsed_display() else {
            return;
        };

        match (self.state.first_operand, self.state.operator) {
            (None, _) => self.state.first_operand = Some(input),
            (Some(first), Some(op)) => {
                let result = checked_evaluate(first, input, Some(op));
                self.state.first_operand = self.commit(result);
            }
            (Some(_), None) => {}
        }

        self.state.awaiting_second_operand = true;
        self.state.operator = Some(next);
        self.state.just_evaluated = false;
    }

    /// Evaluates the pending operation; no-op without one
    pub fn equals(&mut self) {
        let Some(input) = self.parsed_display() else {
            return;
        };
        let (Some(first), Some(op)) = (self.state.first_operand, self.state.operator) else {
            trace!("no pending operation");
            return;
        };

        let result = checked_evaluate(first, input, Some(op));
        self.commit(result);
        self.state.first_operand = None;
        self.state.operator = None;
        self.state.awaiting_second_operand = false;
        self.state.just_evaluated = true;
    }

    /// Deletes the last character; after `=` it clears everything
    pub fn backspace(&mut self) {
        if self.state.just_evaluated {
            self.clear_all();
            return;
        }
        if self.state.is_error() {
            self.state.display = "0".to_string();
            self.last_error = None;
            return;
        }

        let mut text = self.state.display.clone();
        text.pop();
        // drop a dangling exponent ("5e-" from "5e-7")
        while text.len() > 1 && text.ends_with(['e', 'E', '+', '-']) {
            text.pop();
        }
        self.state.display = if text.is_empty() || text == "-" || text == "-0" {
            "0".to_string()
        } else {
            text
        };
    }

    fn parsed_display(&self) -> Option<f64> {
        match parse_display(&self.state.display) {
            Ok(value) => Some(value),
            Err(err) => {
                trace!(%err, "display not numeric, ignoring");
                None
            }
        }
    }

    /// Writes a result (or the error marker) to the display
    fn commit(&mut self, result: CalcResult<f64>) -> Option<f64> {
        match result {
            Ok(value) => {
                self.state.display = format_number(value);
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                debug!(%err, "arithmetic failure absorbed");
                self.state.display = ERROR_MARKER.to_string();
                self.last_error = Some(err);
                None
            }
        }
    }
}
