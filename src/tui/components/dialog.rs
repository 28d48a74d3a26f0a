//! # Dialog Component
//!
//! The single modal overlay: a box centered over the content area that
//! sizes itself to its longest line. While a dialog is open the owning view
//! sends it every key before anything else.

use ratatui::style::Color;

use crate::tui::component::{Component, EventHandler, Geometry, display_width};
use crate::tui::components::frame::Frame;
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// Read-only; any key closes it.
    Info,
    /// `y` confirms, `n` or Esc dismisses.
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Confirmed,
    Dismissed,
}

pub struct Dialog {
    x: i32,
    y: i32,
    title: String,
    lines: Vec<String>,
    kind: DialogKind,
}

impl Dialog {
    pub fn info(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self::new(title.into(), lines, DialogKind::Info)
    }

    pub fn confirm(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self::new(title.into(), lines, DialogKind::Confirm)
    }

    fn new(title: String, lines: Vec<String>, kind: DialogKind) -> Self {
        Self {
            x: 0,
            y: 0,
            title,
            lines,
            kind,
        }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    fn footer(&self) -> &'static str {
        match self.kind {
            DialogKind::Info => "Press any key to close",
            DialogKind::Confirm => "[y] Yes   [n] No",
        }
    }

    /// Center over `area`, never starting above or left of it.
    pub fn center_in(&mut self, area: Geometry) {
        let size = self.geometry();
        self.x = area.x + (i32::from(area.width) - i32::from(size.width)).max(0) / 2;
        self.y = area.y + (i32::from(area.height) - i32::from(size.height)).max(0) / 2;
    }
}

impl Component for Dialog {
    fn geometry(&self) -> Geometry {
        let longest = self
            .lines
            .iter()
            .map(|l| display_width(l))
            .chain([display_width(&self.title) + 4, display_width(self.footer())])
            .max()
            .unwrap_or(0);
        Geometry::new(self.x, self.y, (longest + 4) as u16, self.lines.len() as u16 + 4)
    }

    fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn has_focus(&self) -> bool {
        true
    }

    fn set_focus(&mut self, _path: Option<&[usize]>) {}

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        let geometry = self.geometry();
        screen.fill(geometry.x, geometry.y, geometry.width, geometry.height, Color::Black);
        Frame::new(geometry).color(Color::Cyan).title(self.title.as_str()).draw(screen);
        for (i, line) in self.lines.iter().enumerate() {
            screen.write(self.x + 2, self.y + 1 + i as i32, line, Color::White, Color::Black);
        }
        screen.write(self.x + 2, geometry.bottom() - 2, self.footer(), Color::DarkGray, Color::Black);
    }

    fn handle_key(&mut self, key: Key) -> bool {
        let _ = self.handle_event(key);
        true
    }
}

impl EventHandler for Dialog {
    type Event = DialogEvent;

    fn handle_event(&mut self, key: Key) -> Option<DialogEvent> {
        match self.kind {
            DialogKind::Info => Some(DialogEvent::Dismissed),
            DialogKind::Confirm => match key {
                Key::Char('y' | 'Y') => Some(DialogEvent::Confirmed),
                Key::Char('n' | 'N') | Key::Escape => Some(DialogEvent::Dismissed),
                _ => None,
            },
        }
    }
}
