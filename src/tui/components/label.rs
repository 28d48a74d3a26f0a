use ratatui::style::Color;

use crate::tui::component::{Component, Geometry, display_width};
use crate::tui::render::ScreenBuffer;

/// Static single-line text. Width follows the text.
pub struct Label {
    x: i32,
    y: i32,
    pub text: String,
    color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            x: 0,
            y: 0,
            text: text.into(),
            color: Color::Gray,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.place(x, y);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

impl Component for Label {
    fn geometry(&self) -> Geometry {
        Geometry::new(self.x, self.y, display_width(&self.text) as u16, 1)
    }

    fn place(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    fn has_focus(&self) -> bool {
        false
    }

    fn set_focus(&mut self, _path: Option<&[usize]>) {}

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        screen.write(self.x, self.y, &self.text, self.color, Color::Black);
    }
}
