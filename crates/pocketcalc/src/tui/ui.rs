//! TUI rendering
//!
//! Visual feedback makes state visible

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::keymap::SHORTCUTS;

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Screen regions of the calculator; shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Display panel
    pub display: Rect,
    /// Status line
    pub status: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// Help sidebar, when shown
    pub help: Option<Rect>,
}

impl CalculatorLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect, show_help: bool) -> Self {
        let mut constraints = vec![Constraint::Length(KEYPAD_WIDTH)];
        if show_help {
            constraints.push(Constraint::Length(HELP_WIDTH));
        }
        constraints.push(Constraint::Min(0));

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints(constraints)
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Display
                Constraint::Length(1), // Status
                Constraint::Length(KEYPAD_HEIGHT),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        Self {
            display: rows[0],
            status: rows[1],
            keypad: rows[2],
            help: show_help.then(|| columns[1]),
        }
    }
}

/// Keypad width: 4 columns of 5 cells plus border
const KEYPAD_WIDTH: u16 = 22;
/// Keypad height: 5 rows of 3 cells plus border
const KEYPAD_HEIGHT: u16 = 17;
const HELP_WIDTH: u16 = 26;

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Renders the display panel: pending operation above the number
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let is_error = self.app.calculator().state().is_error();
        let value_style = if is_error {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(Span::styled(
                self.app.pending_line(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(self.app.rendered_display(), value_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(format!(" {} ", self.app.locale()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let status = self.app.status();
        let style = if status.starts_with('✗') {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Span::styled(status, style)).render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let mut items: Vec<ListItem> = SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>8}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();
        items.extend(APP_SHORTCUTS.iter().map(|(key, desc)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{key:>8}"), Style::default().fg(Color::Cyan)),
                Span::raw(" "),
                Span::styled(*desc, Style::default().fg(Color::DarkGray)),
            ]))
        }));

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = CalculatorLayout::new(area, self.app.show_help());
        self.render_display(layout.display, buf);
        self.render_status(layout.status, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        if let Some(help) = layout.help {
            self.render_help(help, buf);
        }
    }
}

/// Window title
pub const TITLE: &str = " pocketcalc ";

/// Front-end shortcuts that are not calculator keys
pub const APP_SHORTCUTS: &[(&str, &str)] = &[("?", "Toggle help"), ("Ctrl+C", "Quit")];
