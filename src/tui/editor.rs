//! # Modal Input Editor
//!
//! While a field is open for direct entry, the editor owns the keyboard:
//! the owning view hands it every key before (and instead of) its focus
//! routing, until the edit ends in one of three outcomes.
//!
//! ```text
//!           Enter ──▶ Confirmed(buffer)
//!   open ── Esc   ──▶ Canceled(original)
//!           Tab   ──▶ TabbedForward(buffer)   (caller advances focus)
//! ```
//!
//! Everything else edits the buffer according to the field's `InputKind`.

use ratatui::style::Color;

use crate::tui::component::{Geometry, display_width, fit, fit_tail};
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

/// What a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Confirmed(String),
    /// Carries the pre-edit value; typed changes are discarded.
    Canceled(String),
    TabbedForward(String),
}

impl EditOutcome {
    pub fn value(&self) -> &str {
        match self {
            EditOutcome::Confirmed(v) | EditOutcome::Canceled(v) | EditOutcome::TabbedForward(v) => v,
        }
    }

    /// Whether the buffer should be written back to the field.
    pub fn commits(&self) -> bool {
        !matches!(self, EditOutcome::Canceled(_))
    }

    pub fn advances_focus(&self) -> bool {
        matches!(self, EditOutcome::TabbedForward(_))
    }
}

pub struct ModalEditor {
    kind: InputKind,
    original: String,
    buffer: String,
    area: Geometry,
}

impl ModalEditor {
    /// Start editing `initial`, drawn over the single text row `area`.
    pub fn open(kind: InputKind, initial: &str, area: Geometry) -> Self {
        Self {
            kind,
            original: initial.to_string(),
            buffer: initial.to_string(),
            area,
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Feed one key. Returns the outcome once the edit is over.
    pub fn handle_key(&mut self, key: Key) -> Option<EditOutcome> {
        match key {
            Key::Enter => return Some(EditOutcome::Confirmed(self.buffer.clone())),
            Key::Escape => return Some(EditOutcome::Canceled(self.original.clone())),
            Key::Tab => return Some(EditOutcome::TabbedForward(self.buffer.clone())),
            Key::Backspace => {
                self.buffer.pop();
            }
            _ => match self.kind {
                InputKind::Text => {
                    if let Some(c) = key.as_char()
                        && !c.is_control()
                    {
                        self.buffer.push(c);
                    }
                }
                InputKind::Integer | InputKind::Decimal => self.numeric_key(key),
            },
        }
        None
    }

    fn numeric_key(&mut self, key: Key) {
        match key {
            Key::Plus => self.step(1.0),
            Key::Minus => self.step(-1.0),
            Key::Char(c) if c.is_ascii_digit() => {
                self.buffer.push(c);
                // A digit that would overflow an integer field is refused
                if self.kind == InputKind::Integer && parse_number(&self.buffer).is_some_and(|v| v > MAX_INTEGER) {
                    self.buffer.pop();
                }
            }
            Key::Char('.' | ',') if self.kind == InputKind::Decimal && !self.buffer.contains('.') => {
                self.buffer.push('.');
            }
            _ => {}
        }
    }

    /// `+`/`-` act on the current value instead of being typed.
    fn step(&mut self, delta: f64) {
        let current = parse_number(&self.buffer).unwrap_or(0.0);
        self.buffer = format_number(clamp_number(current + delta, self.kind), self.kind);
    }

    /// Draw the buffer highlighted over the field and return the cursor
    /// position (just past the visible text).
    pub fn draw(&self, screen: &mut ScreenBuffer) -> (i32, i32) {
        let width = usize::from(self.area.width);
        let shown = fit_tail(&self.buffer, width.saturating_sub(1));
        screen.write(self.area.x, self.area.y, &fit(&shown, width), Color::Black, Color::Cyan);
        (self.area.x + display_width(&shown) as i32, self.area.y)
    }
}

/// Largest value an integer field holds; quantities are stored as `u32`.
pub const MAX_INTEGER: f64 = u32::MAX as f64;

/// Parse a field buffer. Empty or malformed text yields `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Commit a buffer into a numeric value: unparsable means zero, negatives
/// floor at zero, integers drop any fraction.
pub fn commit_number(text: &str, kind: InputKind) -> f64 {
    clamp_number(parse_number(text).unwrap_or(0.0), kind)
}

/// Floor at zero, cap integers at [`MAX_INTEGER`], and drop digits the
/// field kind cannot hold.
pub fn clamp_number(value: f64, kind: InputKind) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let value = value.max(0.0);
    match kind {
        InputKind::Integer => value.trunc().min(MAX_INTEGER),
        _ => round_cents(value),
    }
}

/// Plain text form of a numeric value, as typed into the editor.
pub fn format_number(value: f64, kind: InputKind) -> String {
    match kind {
        InputKind::Integer => format!("{}", value.trunc() as i64),
        _ => format!("{}", round_cents(value)),
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
