//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use pocketcalc::format::Locale;
use std::path::PathBuf;

/// pocketcalc: a pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true, env = "POCKETCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number display locale
    #[arg(long, global = true, env = "POCKETCALC_LOCALE")]
    pub locale: Option<LocaleArg>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Interactive terminal calculator
    Tui(TuiArgs),

    /// Replay key presses and print the result
    ///
    /// Each argument is a key name (`Enter`, `Esc`, `Backspace`, `F9`) or
    /// a run of single-character keys such as `3+4+5=`.
    Press(PressArgs),

    /// Show the effective configuration
    Config,
}

/// Arguments for the tui command
#[derive(Parser, Debug, Clone, Default)]
pub struct TuiArgs {
    /// Start with the help panel hidden
    #[arg(long)]
    pub no_help: bool,
}

/// Arguments for the press command
#[derive(Parser, Debug, Clone)]
pub struct PressArgs {
    /// Keys to press, in order (put keys starting with `-` after `--`)
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Print the engine display text without locale formatting
    #[arg(long, conflicts_with = "json")]
    pub raw: bool,

    /// Print the full calculator state as JSON
    #[arg(long)]
    pub json: bool,
}

/// Display locale choice
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocaleArg {
    /// Engine text unchanged
    Raw,
    /// English (United States)
    EnUs,
    /// German (Germany)
    DeDe,
    /// Arabic (Egypt)
    ArEg,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Raw => Self::Raw,
            LocaleArg::EnUs => Self::EnUs,
            LocaleArg::DeDe => Self::DeDe,
            LocaleArg::ArEg => Self::ArEg,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["pocketcalc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_press() {
        let cli = Cli::try_parse_from(["pocketcalc", "press", "3+4", "Enter", "--raw"]).unwrap();
        match cli.command {
            Some(Commands::Press(args)) => {
                assert_eq!(args.keys, vec!["3+4", "Enter"]);
                assert!(args.raw);
                assert!(!args.json);
            }
            other => panic!("expected press, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_press_hyphen_keys() {
        let cli = Cli::try_parse_from(["pocketcalc", "press", "9", "-", "4="]).unwrap();
        match cli.command {
            Some(Commands::Press(args)) => assert_eq!(args.keys, vec!["9", "-", "4="]),
            other => panic!("expected press, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_press_after_double_dash() {
        let cli = Cli::try_parse_from(["pocketcalc", "press", "--", "-5"]).unwrap();
        match cli.command {
            Some(Commands::Press(args)) => assert_eq!(args.keys, vec!["-5"]),
            other => panic!("expected press, got {other:?}"),
        }
    }

    #[test]
    fn test_press_requires_keys() {
        assert!(Cli::try_parse_from(["pocketcalc", "press"]).is_err());
    }

    #[test]
    fn test_raw_conflicts_with_json() {
        assert!(Cli::try_parse_from(["pocketcalc", "press", "1", "--raw", "--json"]).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "pocketcalc",
            "-vv",
            "--locale",
            "de-de",
            "--log-file",
            "calc.log",
            "config",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.locale, Some(LocaleArg::DeDe));
        assert_eq!(cli.log_file, Some(PathBuf::from("calc.log")));
        assert!(matches!(cli.command, Some(Commands::Config)));
    }

    #[test]
    fn test_tui_no_help() {
        let cli = Cli::try_parse_from(["pocketcalc", "tui", "--no-help"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui(TuiArgs { no_help: true }))));
    }

    #[test]
    fn test_locale_arg_into_locale() {
        assert_eq!(Locale::from(LocaleArg::ArEg), Locale::ArEg);
        assert_eq!(Locale::from(LocaleArg::Raw), Locale::Raw);
    }
}
