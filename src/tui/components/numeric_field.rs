//! # Numeric Field Component
//!
//! Boxed number with `-`/`+` affordances at either end:
//!
//! ```text
//! ┌─ Quantity ─────────┐
//! │ -             12 + │
//! └────────────────────┘
//! ```
//!
//! Bare `+`/`-` step the value by one (never below zero) without opening
//! the editor. Enter opens a [`ModalEditor`] for typed entry.
//!
//! [`ModalEditor`]: crate::tui::editor::ModalEditor

use ratatui::style::Color;

use crate::tui::component::{Component, Geometry, Validation, display_width, fit_tail};
use crate::tui::components::frame::Frame;
use crate::tui::components::text_field::{FIELD_HEIGHT, border_color};
use crate::tui::editor::{InputKind, clamp_number, commit_number, format_number};
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

pub struct NumericField {
    x: i32,
    y: i32,
    width: u16,
    pub label: String,
    value: f64,
    kind: InputKind,
    /// Shown before decimal values, e.g. a currency symbol.
    prefix: String,
    pub validation: Validation,
    focused: bool,
}

impl NumericField {
    pub fn integer(label: impl Into<String>, width: u16) -> Self {
        Self::new(label.into(), width, InputKind::Integer)
    }

    pub fn decimal(label: impl Into<String>, width: u16) -> Self {
        Self::new(label.into(), width, InputKind::Decimal)
    }

    fn new(label: String, width: u16, kind: InputKind) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            label,
            value: 0.0,
            kind,
            prefix: String::new(),
            validation: Validation::Pristine,
            focused: false,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, floored at zero (and truncated for integers).
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_number(value, self.kind);
    }

    /// Whole-unit value for integer fields. `set_value` and `commit` keep
    /// integers within `u32`.
    pub fn as_u32(&self) -> u32 {
        self.value as u32
    }

    /// The editor's starting buffer.
    pub fn edit_text(&self) -> String {
        format_number(self.value, self.kind)
    }

    /// Write back a committed editor buffer.
    pub fn commit(&mut self, text: &str) {
        self.value = commit_number(text, self.kind);
    }

    pub fn edit_area(&self) -> Geometry {
        Geometry::new(self.x + 4, self.y + 1, self.width.saturating_sub(8), 1)
    }

    fn display(&self) -> String {
        match self.kind {
            InputKind::Decimal => format!("{}{:.2}", self.prefix, self.value),
            _ => format_number(self.value, self.kind),
        }
    }
}

impl Component for NumericField {
    fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, self.width, FIELD_HEIGHT)
    }

    fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, path: Option<&[usize]>) {
        self.focused = path.is_some();
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        let geometry = self.geometry();
        Frame::new(geometry)
            .color(border_color(self.focused, self.validation))
            .title(self.label.as_str())
            .draw(screen);

        let affordance = if self.focused { Color::Yellow } else { Color::DarkGray };
        screen.write(self.x + 2, self.y + 1, "-", affordance, Color::Black);
        screen.write(geometry.right() - 3, self.y + 1, "+", affordance, Color::Black);

        let area = self.edit_area();
        let width = usize::from(area.width);
        let text = fit_tail(&self.display(), width);
        let shown = format!("{}{text}", " ".repeat(width.saturating_sub(display_width(&text))));
        screen.write(area.x, area.y, &shown, Color::White, Color::Black);
    }

    fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Plus => {
                self.set_value(self.value + 1.0);
                true
            }
            Key::Minus => {
                self.value = (self.value - 1.0).max(0.0);
                true
            }
            _ => false,
        }
    }
}
