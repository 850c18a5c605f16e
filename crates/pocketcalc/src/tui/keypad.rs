//! Numerical Keypad for TUI Calculator
//!
//! Visual feedback - Visual buttons make calculator state obvious
//!
//! The keypad can be clicked with the mouse and highlights the button
//! matching the last key press.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::core::{Command, Operator};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: String,
    /// The command this button performs
    pub command: Command,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-cell button
    #[must_use]
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        Self {
            label: command.label(),
            command,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Widens the button to `span` columns
    #[must_use]
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true if the button covers the cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Stable element id, e.g. `btn-7`, `btn-divide`
    #[must_use]
    pub fn id(&self) -> String {
        match self.command {
            Command::Digit(d) => format!("btn-{d}"),
            Command::Dot => "btn-decimal".to_string(),
            Command::Operator(op) => format!("btn-{}", op.name()),
            Command::Equals => "btn-equals".to_string(),
            Command::Clear => "btn-clear".to_string(),
            Command::ToggleSign => "btn-sign".to_string(),
            Command::Percent => "btn-percent".to_string(),
            Command::Backspace => "btn-backspace".to_string(),
        }
    }

    fn style(&self) -> Style {
        if self.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match self.command {
            Command::Digit(_) | Command::Dot => Style::default().fg(Color::White),
            Command::Operator(_) => Style::default().fg(Color::Yellow),
            Command::Equals => Style::default().fg(Color::Green),
            Command::Clear => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Cyan),
        }
    }
}

/// The keypad layout - a 5x4 grid, `0` spans two cells
/// ```text
/// [ AC ] [ ± ] [ % ] [ ÷ ]
/// [ 7  ] [ 8 ] [ 9 ] [ × ]
/// [ 4  ] [ 5 ] [ 6 ] [ − ]
/// [ 1  ] [ 2 ] [ 3 ] [ + ]
/// [    0     ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = vec![
            KeypadButton::new(Command::Clear, 0, 0),
            KeypadButton::new(Command::ToggleSign, 0, 1),
            KeypadButton::new(Command::Percent, 0, 2),
        ];
        for (row, op) in Operator::ALL.into_iter().enumerate() {
            let digits: &[u8] = match row {
                1 => &[7, 8, 9],
                2 => &[4, 5, 6],
                3 => &[1, 2, 3],
                _ => &[],
            };
            for (col, &d) in digits.iter().enumerate() {
                buttons.push(KeypadButton::new(Command::Digit(d), row, col));
            }
            buttons.push(KeypadButton::new(Command::Operator(op), row, 3));
        }
        buttons.push(KeypadButton::new(Command::Digit(0), 4, 0).spanning(2));
        buttons.push(KeypadButton::new(Command::Dot, 4, 2));
        buttons.push(KeypadButton::new(Command::Equals, 4, 3));

        buttons.sort_by_key(|b| (b.row, b.col));

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Finds the button performing a command
    #[must_use]
    pub fn find_button(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for a command, releasing the others
    pub fn highlight(&mut self, command: Command) {
        self.release_all();
        if let Some(btn) = self
            .find_button(command)
            .and_then(|i| self.buttons.get_mut(i))
        {
            btn.set_pressed(true);
        }
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Size of one grid cell inside the bordered area
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let width = area.width.saturating_sub(2) / self.cols as u16;
        let height = area.height.saturating_sub(2) / self.rows as u16;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Screen rectangle of a button inside the bordered area
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let (cell_w, cell_h) = self.cell_size(area)?;
        let btn = self.buttons.get(index)?;
        Some(Rect {
            x: area.x + 1 + btn.col as u16 * cell_w,
            y: area.y + 1 + btn.row as u16 * cell_h,
            width: cell_w * btn.span as u16,
            height: cell_h,
        })
    }

    /// Converts a click position to button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (cell_w, cell_h) = self.cell_size(area)?;
        let col = ((rel_x - 1) / cell_w) as usize;
        let row = ((rel_y - 1) / cell_h) as usize;

        if row < self.rows && col < self.cols {
            self.index_at(row, col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_rect(area, index) else {
                return; // Too small to render
            };

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            if rect.width < label_width {
                continue;
            }
            let x = rect.x + (rect.width - label_width) / 2;
            let y = rect.y + rect.height / 2;
            buf.set_string(x, y, label, btn.style());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_creation() {
        let btn = KeypadButton::new(Command::Digit(5), 2, 1);
        assert_eq!(btn.label, "5");
        assert_eq!(btn.span, 1);
        assert!(!btn.pressed);
    }

    #[test]
    fn test_button_spanning() {
        let btn = KeypadButton::new(Command::Digit(0), 4, 0).spanning(2);
        assert!(btn.covers(4, 0));
        assert!(btn.covers(4, 1));
        assert!(!btn.covers(4, 2));
        assert!(!btn.covers(3, 0));
    }

    #[test]
    fn test_button_spanning_minimum_one() {
        let btn = KeypadButton::new(Command::Dot, 0, 0).spanning(0);
        assert_eq!(btn.span, 1);
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::new(Command::Equals, 4, 3);
        btn.set_pressed(true);
        assert!(btn.pressed);
        btn.set_pressed(false);
        assert!(!btn.pressed);
    }

    #[test]
    fn test_button_ids() {
        assert_eq!(KeypadButton::new(Command::Digit(7), 1, 0).id(), "btn-7");
        assert_eq!(
            KeypadButton::new(Command::Operator(Operator::Divide), 0, 3).id(),
            "btn-divide"
        );
        assert_eq!(KeypadButton::new(Command::Dot, 4, 2).id(), "btn-decimal");
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        let label = |row, col| keypad.get_button_at(row, col).unwrap().label.clone();
        assert_eq!(label(0, 0), "AC");
        assert_eq!(label(0, 1), "±");
        assert_eq!(label(0, 2), "%");
        assert_eq!(label(0, 3), "÷");
        assert_eq!(label(1, 0), "7");
        assert_eq!(label(1, 3), "×");
        assert_eq!(label(2, 3), "−");
        assert_eq!(label(3, 2), "3");
        assert_eq!(label(3, 3), "+");
        assert_eq!(label(4, 0), "0");
        assert_eq!(label(4, 1), "0");
        assert_eq!(label(4, 2), ".");
        assert_eq!(label(4, 3), "=");
    }

    #[test]
    fn test_keypad_row_major_order() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button(0).unwrap().command, Command::Clear);
        assert_eq!(keypad.get_button(18).unwrap().command, Command::Equals);
        assert!(keypad.get_button(19).is_none());
    }

    #[test]
    fn test_keypad_get_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_keypad_find_button() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button(Command::Clear), Some(0));
        assert!(keypad.find_button(Command::Backspace).is_none());
    }

    #[test]
    fn test_keypad_highlight() {
        let mut keypad = Keypad::new();
        keypad.highlight(Command::Digit(5));
        assert_eq!(keypad.pressed().unwrap().label, "5");
        keypad.highlight(Command::Equals);
        assert_eq!(keypad.pressed().unwrap().label, "=");
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
    }

    #[test]
    fn test_keypad_highlight_without_button() {
        let mut keypad = Keypad::new();
        keypad.highlight(Command::Digit(5));
        keypad.highlight(Command::Backspace);
        assert!(keypad.pressed().is_none());
    }

    // ===== Geometry =====

    #[test]
    fn test_hit_test_corners() {
        let keypad = Keypad::new();
        // 4 cols x 5 rows of 5x3 cells inside a border
        let area = Rect::new(10, 5, 22, 17);
        assert_eq!(keypad.hit_test(area, 11, 6), Some(0));
        assert_eq!(keypad.hit_test(area, 27, 18), Some(18));
    }

    #[test]
    fn test_hit_test_wide_zero() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 17);
        let zero = keypad.find_button(Command::Digit(0));
        assert_eq!(keypad.hit_test(area, 2, 14), zero);
        assert_eq!(keypad.hit_test(area, 8, 14), zero);
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 17);
        assert_eq!(keypad.hit_test(area, 10, 6), None);
        assert_eq!(keypad.hit_test(area, 11, 5), None);
        assert_eq!(keypad.hit_test(area, 0, 0), None);
        assert_eq!(keypad.hit_test(area, 40, 40), None);
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1), None);
    }

    #[test]
    fn test_button_rect_span() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 17);
        let zero = keypad.find_button(Command::Digit(0)).unwrap();
        let rect = keypad.button_rect(area, zero).unwrap();
        assert_eq!(rect, Rect::new(1, 13, 10, 3));
    }

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 17);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("[7]"));
        assert!(content.contains("[AC]"));
        assert!(content.contains("[=]"));
    }

    #[test]
    fn test_widget_tiny_area_does_not_panic() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 3, 3);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
    }
}
