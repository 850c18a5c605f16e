//! pocketcalc - a pocket calculator engine with a terminal front end
//!
//! The engine evaluates eagerly, left to right, the way a handheld
//! calculator does: `3 + 4 × 2 =` shows `14`. Every keypad button maps to
//! one [`Command`](core::Command); the engine turns arithmetic failures
//! into the [`ERROR_MARKER`](core::ERROR_MARKER) display instead of
//! returning errors.
//!
//! # Principles
//!
//! - **Error prevention**: every input funnels into a closed set of commands
//! - **Visual feedback**: the display is the whole user-visible state
//! - **Balanced testing**: one verification suite runs against every front end
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for command in [
//!     Command::Digit(3),
//!     Command::Operator(Operator::Add),
//!     Command::Digit(4),
//!     Command::Operator(Operator::Multiply),
//!     Command::Digit(2),
//!     Command::Equals,
//! ] {
//!     calc.apply(command);
//! }
//! assert_eq!(calc.display(), "14");
//!
//! let formatter = DisplayFormatter::new(Locale::DeDe);
//! assert_eq!(formatter.format("1234.5"), "1.234,5");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod format;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::keymap::Key;
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, Command, Operator, Phase, ERROR_MARKER,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::format::{DisplayFormatter, Locale};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
