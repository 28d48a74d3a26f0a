//! # Text Field Component
//!
//! Boxed single-line value with its label in the border. The field itself
//! never edits text; Enter on a focused field opens a [`ModalEditor`] over
//! [`TextField::edit_area`] and the owner writes the outcome back.
//!
//! [`ModalEditor`]: crate::tui::editor::ModalEditor

use ratatui::style::Color;

use crate::tui::component::{Component, Geometry, Validation, fit};
use crate::tui::components::frame::Frame;
use crate::tui::render::ScreenBuffer;

/// Rows taken by a boxed field.
pub const FIELD_HEIGHT: u16 = 3;

pub struct TextField {
    x: i32,
    y: i32,
    width: u16,
    pub label: String,
    value: String,
    editable: bool,
    pub validation: Validation,
    focused: bool,
}

impl TextField {
    pub fn new(label: impl Into<String>, width: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            label: label.into(),
            value: String::new(),
            editable: true,
            validation: Validation::Pristine,
            focused: false,
        }
    }

    /// Displayed but never focusable (e.g. generated IDs).
    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The text row inside the border, where the editor draws.
    pub fn edit_area(&self) -> Geometry {
        Geometry::new(self.x + 2, self.y + 1, self.width.saturating_sub(4), 1)
    }
}

/// Border color for a boxed field. Invalid wins over focus so a rejected
/// field stays red while the user fixes it.
pub(crate) fn border_color(focused: bool, validation: Validation) -> Color {
    match (focused, validation) {
        (_, Validation::Invalid) => Color::Red,
        (true, _) => Color::Yellow,
        (false, Validation::Valid) => Color::Green,
        (false, Validation::Pristine) => Color::Gray,
    }
}

impl Component for TextField {
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
        self.focused = path.is_some() && self.editable;
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        let color = if self.editable {
            border_color(self.focused, self.validation)
        } else {
            Color::DarkGray
        };
        Frame::new(self.geometry())
            .color(color)
            .title(self.label.as_str())
            .draw(screen);

        let area = self.edit_area();
        let fg = if self.editable { Color::White } else { Color::DarkGray };
        screen.write(area.x, area.y, &fit(&self.value, usize::from(area.width)), fg, Color::Black);
    }
}
