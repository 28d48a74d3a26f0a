//! # Home View
//!
//! Inventory summary. Nothing to focus, so the menu keeps input focus.

use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::core::product::{Product, format_price};
use crate::tui::component::{Component, Geometry, fit};
use crate::tui::components::Label;
use crate::tui::event::Key;
use crate::tui::focus::Routed;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::router::{self, HOME};
use crate::tui::views::{Shell, Transition, View, ViewContext, ViewSession};

pub struct HomeView {
    shell: Shell,
    summary: Vec<Label>,
    low_stock: Vec<Product>,
}

impl HomeView {
    pub fn new(ctx: &ViewContext<'_>, session: ViewSession) -> Self {
        let shell = Shell::new(HOME, ctx, &session, 0);
        let products = ctx.data.list();
        let units: u64 = products.iter().map(|p| u64::from(p.quantity)).sum();
        let value: f64 = products.iter().map(Product::stock_value).sum();
        let currency = shell.currency();
        let summary = vec![
            Label::new("Inventory overview").color(Color::Cyan),
            Label::new(format!("Products:        {}", products.len())),
            Label::new(format!("Units in stock:  {units}")),
            Label::new(format!("Stock value:     {}", format_price(currency, value))),
        ];
        let low_stock = products.into_iter().filter(Product::is_low_stock).collect();
        Self {
            shell,
            summary,
            low_stock,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    fn draw_low_stock(&self, screen: &mut ScreenBuffer, area: Geometry, top: i32) {
        if self.low_stock.is_empty() {
            screen.write(area.x + 2, top, "No products are low on stock.", Color::Green, Color::Black);
            return;
        }
        screen.write(area.x + 2, top, &format!("Low stock ({}):", self.low_stock.len()), Color::Yellow, Color::Black);
        let room = (area.bottom() - top - 1).max(0) as usize;
        let width = usize::from(area.width.saturating_sub(4));
        for (i, product) in self.low_stock.iter().take(room).enumerate() {
            let line = format!(
                "{:<10} {}  ({} of {})",
                product.sku, product.name, product.quantity, product.min_quantity
            );
            screen.write(area.x + 2, top + 1 + i as i32, &fit(&line, width), Color::Red, Color::Black);
        }
    }
}

impl View for HomeView {
    fn index(&self) -> usize {
        HOME
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.shell.draw(screen, router::title(HOME));
        let area = self.shell.content_area();
        for (i, label) in self.summary.iter_mut().enumerate() {
            // Blank line under the heading
            let row = if i == 0 { 1 } else { i as i32 + 2 };
            label.place(area.x + 2, area.y + row);
            label.draw(screen);
        }
        let top = area.y + self.summary.len() as i32 + 3;
        self.draw_low_stock(screen, area, top);
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
