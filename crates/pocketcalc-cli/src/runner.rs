//! Command runners: the interactive session and headless key replay

use std::io::{self, Stdout};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocketcalc::core::keymap::Key;
use pocketcalc::core::{Calculator, Command};
use pocketcalc::format::DisplayFormatter;
use pocketcalc::tui::{render, CalculatorApp};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use crate::commands::{PressArgs, TuiArgs};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Owns the terminal for the duration of the interactive session.
///
/// Raw mode, the alternate screen and mouse capture are released on drop,
/// including when the session exits with an error.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Switches the terminal into raw mode on the alternate screen
    pub fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                Err(err)
            }
        }
    }

    /// The guarded terminal
    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

impl std::fmt::Debug for TerminalGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalGuard").finish_non_exhaustive()
    }
}

/// Runs the interactive calculator until the user quits
pub fn run_tui(config: &AppConfig, args: &TuiArgs) -> CliResult<()> {
    let mut app = CalculatorApp::with_locale(config.locale)
        .with_help(config.show_help && !args.no_help);

    info!(locale = %config.locale, "starting interactive session");
    let mut guard = TerminalGuard::acquire()?;
    run_session(guard.terminal_mut(), &mut app)?;
    info!(display = app.calculator().display(), "session ended");
    Ok(())
}

/// Draw / read loop over any backend
pub fn run_session<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> io::Result<()> {
    while !app.should_quit() {
        let area = terminal.draw(|frame| render(app, frame))?.area;
        handle_event(app, event::read()?, area);
    }
    Ok(())
}

/// Applies one terminal event; `area` is the full screen last drawn
pub fn handle_event(app: &mut CalculatorApp, event: Event, area: Rect) {
    match event {
        Event::Key(key) => app.handle_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            if !app.handle_click(area, column, row) {
                debug!(column, row, "click outside keypad");
            }
        }
        _ => {}
    }
}

/// Converts `press` arguments into engine commands.
///
/// An argument is first tried as a key name (`Enter`, `F9`, `+`); if it is
/// not one, each of its characters is a key. Keys that map to no command
/// are rejected.
pub fn parse_keys<S: AsRef<str>>(args: &[S]) -> CliResult<Vec<Command>> {
    let mut commands = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        let keys: Vec<Key> = match arg.parse::<Key>() {
            Ok(key) => vec![key],
            Err(_) => arg.chars().map(Key::Char).collect(),
        };
        for key in keys {
            let command = key
                .command()
                .ok_or_else(|| CliError::invalid_key(key.to_string()))?;
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Replays keys on a fresh calculator and renders the outcome
pub fn run_press(config: &AppConfig, args: &PressArgs) -> CliResult<String> {
    let commands = parse_keys(args.keys.as_slice())?;
    let mut calculator = Calculator::new();
    for &command in &commands {
        calculator.apply(command);
    }
    info!(
        presses = commands.len(),
        display = calculator.display(),
        "replayed keys"
    );

    if args.json {
        Ok(serde_json::to_string_pretty(calculator.state())?)
    } else if args.raw {
        Ok(calculator.display().to_string())
    } else {
        Ok(DisplayFormatter::new(config.locale).format(calculator.display()))
    }
}
