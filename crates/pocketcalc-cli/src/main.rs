//! pocketcalc: a pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc                        # Interactive calculator
//! pocketcalc press 3+4+5=           # Prints 12
//! pocketcalc press 1234.5 --json    # Full engine state
//! pocketcalc --locale de-de config  # Effective configuration
//! ```

use clap::Parser;
use pocketcalc_cli::{
    init_logging, run_press, run_tui, AppConfig, Cli, CliResult, Commands, LogConfig, LogSink,
    TuiArgs,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;
    let command = cli
        .command
        .clone()
        .unwrap_or_else(|| Commands::Tui(TuiArgs::default()));

    init_logging(&LogConfig::from_verbosity(cli.verbose).with_sink(log_sink(&config, &command)))?;

    match command {
        Commands::Tui(args) => run_tui(&config, &args),
        Commands::Press(args) => {
            println!("{}", run_press(&config, &args)?);
            Ok(())
        }
        Commands::Config => {
            println!("{}", config.to_json()?);
            Ok(())
        }
    }
}

/// The interactive session owns the terminal, so it never logs to stderr
fn log_sink(config: &AppConfig, command: &Commands) -> LogSink {
    match (&config.log_file, command) {
        (Some(path), _) => LogSink::File(path.clone()),
        (None, Commands::Tui(_)) => LogSink::Discard,
        (None, _) => LogSink::Stderr,
    }
}
