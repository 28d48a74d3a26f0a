//! # Button Component
//!
//! Focusable action. Enter fires it directly; buttons never open the modal
//! editor.

use ratatui::style::Color;

use crate::tui::component::{Component, EventHandler, Geometry, display_width};
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

pub struct Button {
    x: i32,
    y: i32,
    pub text: String,
    focused: bool,
}

/// Emitted when the button is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pressed;

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            x: 0,
            y: 0,
            text: text.into(),
            focused: false,
        }
    }
}

impl Component for Button {
    fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, display_width(&self.text) as u16 + 4, 1)
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
        let (fg, bg) = if self.focused {
            (Color::Black, Color::Gray)
        } else {
            (Color::White, Color::DarkGray)
        };
        screen.write(self.x, self.y, &format!("  {}  ", self.text), fg, bg);
    }

    fn handle_key(&mut self, key: Key) -> bool {
        self.handle_event(key).is_some()
    }
}

impl EventHandler for Button {
    type Event = Pressed;

    fn handle_event(&mut self, key: Key) -> Option<Pressed> {
        (key == Key::Enter).then_some(Pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Size;

    #[test]
    fn test_enter_presses() {
        let mut button = Button::new("Save");
        assert_eq!(button.handle_event(Key::Enter), Some(Pressed));
        assert_eq!(button.handle_event(Key::Char('x')), None);
    }

    #[test]
    fn test_focus_changes_colors() {
        let mut screen = ScreenBuffer::new(Size::new(12, 1));
        let mut button = Button::new("Save");
        button.draw(&mut screen);
        assert_eq!(screen.cell(2, 0).unwrap().bg, Color::DarkGray);

        button.set_focus(Some(&[]));
        button.draw(&mut screen);
        assert_eq!(screen.cell(2, 0).unwrap().bg, Color::Gray);
        assert_eq!(screen.row_text(0), "  Save      ");
    }
}
