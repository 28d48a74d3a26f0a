//! # Frame Component
//!
//! Rectangular border. Purely decorative: it never takes focus and ignores
//! keys. Containers use it to outline themselves.

use ratatui::style::Color;

use crate::tui::component::{Component, Geometry, display_width, fit};
use crate::tui::render::ScreenBuffer;

pub struct Frame {
    geometry: Geometry,
    color: Color,
    title: Option<String>,
}

impl Frame {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            color: Color::Gray,
            title: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Component for Frame {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn place(&mut self, x: i32, y: i32) {
        self.geometry.x = x;
        self.geometry.y = y;
    }

    fn has_focus(&self) -> bool {
        false
    }

    fn set_focus(&mut self, _path: Option<&[usize]>) {}

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        let Geometry { x, y, width, height } = self.geometry;
        if width < 2 || height < 2 {
            return;
        }
        let inner = usize::from(width - 2);
        let bottom = y + i32::from(height) - 1;
        let right = x + i32::from(width) - 1;

        screen.write(x, y, &format!("┌{}┐", "─".repeat(inner)), self.color, Color::Black);
        for row in y + 1..bottom {
            screen.write(x, row, "│", self.color, Color::Black);
            screen.write(right, row, "│", self.color, Color::Black);
        }
        screen.write(x, bottom, &format!("└{}┘", "─".repeat(inner)), self.color, Color::Black);

        if let Some(title) = &self.title {
            let title = format!(" {title} ");
            let room = inner.saturating_sub(2).min(display_width(&title));
            screen.write(x + 2, y, &fit(&title, room), Color::White, Color::Black);
        }
    }
}
