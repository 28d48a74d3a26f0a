use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::tui::component::Component;
use crate::tui::components::Label;
use crate::tui::event::Key;
use crate::tui::focus::Routed;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::router::{self, ABOUT};
use crate::tui::views::{Shell, Transition, View, ViewContext, ViewSession};

const TEXT: &[(&str, Color)] = &[
    ("Stockpile", Color::Cyan),
    ("Keep track of products, stock levels, and prices.", Color::Gray),
    ("", Color::Gray),
    ("Menu", Color::Yellow),
    ("  Up/Down        move through the menu", Color::Gray),
    ("  Enter, Right   open the highlighted entry", Color::Gray),
    ("", Color::Gray),
    ("Content", Color::Yellow),
    ("  Tab, Down      next field", Color::Gray),
    ("  Up             previous field", Color::Gray),
    ("  Enter          edit a field, press a button", Color::Gray),
    ("  + / -          step a number, or stock in Show products", Color::Gray),
    ("  Esc, Left      back to the menu", Color::Gray),
    ("", Color::Gray),
    ("While editing", Color::Yellow),
    ("  Enter          keep the new value", Color::Gray),
    ("  Tab            keep it and move to the next field", Color::Gray),
    ("  Esc            restore the old value", Color::Gray),
    ("", Color::Gray),
    ("Ctrl+C quits at any time.", Color::DarkGray),
];

/// Static description and key bindings.
pub struct AboutView {
    shell: Shell,
    labels: Vec<Label>,
}

impl AboutView {
    pub fn new(ctx: &ViewContext<'_>, session: ViewSession) -> Self {
        let labels = TEXT.iter().map(|(text, color)| Label::new(*text).color(*color)).collect();
        Self {
            shell: Shell::new(ABOUT, ctx, &session, 0),
            labels,
        }
    }
}

impl View for AboutView {
    fn index(&self) -> usize {
        ABOUT
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.shell.draw(screen, router::title(ABOUT));
        let area = self.shell.content_area();
        for (i, label) in self.labels.iter_mut().enumerate() {
            label.place(area.x + 2, area.y + 1 + i as i32);
            label.draw(screen);
        }
        None
    }

    fn handle_input(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        match self.shell.route(key) {
            Routed::Activate(target) => self.shell.activate(target, &*data),
            _ => Transition::Stay,
        }
    }

    fn session(&self) -> ViewSession {
        self.shell.session()
    }
}
