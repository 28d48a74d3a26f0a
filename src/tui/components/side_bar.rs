//! # Side Bar Component
//!
//! The persistent navigation menu on the left of every view.
//!
//! Two indices are shown: the *active* entry (the view currently on screen,
//! marked with `>`) and, while the menu has focus, the *highlighted* entry
//! the user is moving through. Without focus nothing is highlighted, so the
//! menu never competes with the content area for the single highlight.

use ratatui::style::Color;

use crate::tui::component::{Component, Geometry, fit};
use crate::tui::components::frame::Frame;
use crate::tui::render::ScreenBuffer;

pub struct SideBar {
    geometry: Geometry,
    items: Vec<String>,
    highlighted: usize,
    active: usize,
    focused: bool,
}

impl SideBar {
    pub fn new(geometry: Geometry, items: &[&str], active: usize) -> Self {
        Self {
            geometry,
            items: items.iter().map(|s| s.to_string()).collect(),
            highlighted: active,
            active,
            focused: false,
        }
    }

    pub fn highlight(&mut self, index: usize) {
        self.highlighted = index.min(self.items.len().saturating_sub(1));
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn active(&self) -> usize {
        self.active
    }
}

impl Component for SideBar {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn place(&mut self, x: i32, y: i32) {
        self.geometry.x = x;
        self.geometry.y = y;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, path: Option<&[usize]>) {
        self.focused = path.is_some();
        if let Some(&[index, ..]) = path {
            self.highlight(index);
        }
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        let border = if self.focused { Color::Yellow } else { Color::Gray };
        Frame::new(self.geometry).color(border).title("Menu").draw(screen);

        let inner = self.geometry.inner();
        let width = usize::from(inner.width);
        for (i, item) in self.items.iter().enumerate() {
            let y = inner.y + 1 + 2 * i as i32;
            if y >= inner.bottom() {
                break;
            }
            let marker = if i == self.active { "> " } else { "  " };
            let text = fit(&format!(" {marker}{item}"), width);
            let (fg, bg) = if self.focused && i == self.highlighted {
                (Color::Black, Color::Cyan)
            } else if i == self.active {
                (Color::Yellow, Color::Black)
            } else {
                (Color::Gray, Color::Black)
            };
            screen.write(inner.x, y, &text, fg, bg);
        }
    }
}
