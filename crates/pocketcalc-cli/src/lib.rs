//! pocketcalc CLI library
//!
//! Command-line front end for the pocketcalc engine: the interactive
//! terminal session and a headless key-replay command.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::{Cli, Commands, LocaleArg, PressArgs, TuiArgs};
pub use config::AppConfig;
pub use error::{CliError, CliResult};
pub use logging::{init_logging, LogConfig, LogSink};
pub use runner::{parse_keys, run_press, run_tui, TerminalGuard};
