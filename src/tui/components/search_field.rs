//! # Search Field Component
//!
//! Live filter input. Unlike form fields it edits in place: every printable
//! key or Backspace changes the term and emits [`SearchEvent::Changed`] so
//! the owner can repopulate its table immediately.

use ratatui::style::Color;

use crate::tui::component::{Component, EventHandler, Geometry, display_width, fit, fit_tail};
use crate::tui::components::frame::Frame;
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Changed(String),
}

pub struct SearchField {
    x: i32,
    y: i32,
    width: u16,
    query: String,
    focused: bool,
}

impl SearchField {
    pub fn new(width: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            query: String::new(),
            focused: false,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    fn text_width(&self) -> usize {
        usize::from(self.width.saturating_sub(4))
    }

    /// Where the terminal cursor belongs while the field has focus.
    pub fn cursor(&self) -> Option<(i32, i32)> {
        if !self.focused {
            return None;
        }
        let shown = fit_tail(&self.query, self.text_width().saturating_sub(1));
        Some((self.x + 2 + display_width(&shown) as i32, self.y + 1))
    }
}

impl Component for SearchField {
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
        let color = if self.focused { Color::Yellow } else { Color::Gray };
        Frame::new(self.geometry()).color(color).title("Search").draw(screen);

        let width = self.text_width();
        if self.query.is_empty() && !self.focused {
            screen.write(self.x + 2, self.y + 1, &fit("name or SKU", width), Color::DarkGray, Color::Black);
            return;
        }
        let shown = fit_tail(&self.query, width.saturating_sub(1));
        screen.write(self.x + 2, self.y + 1, &fit(&shown, width), Color::White, Color::Black);
    }

    fn handle_key(&mut self, key: Key) -> bool {
        self.handle_event(key).is_some()
    }
}

impl EventHandler for SearchField {
    type Event = SearchEvent;

    fn handle_event(&mut self, key: Key) -> Option<SearchEvent> {
        match key {
            Key::Backspace => {
                self.query.pop()?;
            }
            _ => {
                let c = key.as_char().filter(|c| !c.is_control())?;
                self.query.push(c);
            }
        }
        Some(SearchEvent::Changed(self.query.clone()))
    }
}
