//! # Show Products View
//!
//! Browse and filter the inventory. With the table focused, `+`/`-` adjust
//! the selected product's stock by one and Enter opens a details dialog.

use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::core::product::{Product, format_price};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::Dialog;
use crate::tui::event::Key;
use crate::tui::focus::Routed;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::picker::{PICKER_SLOTS, ProductPicker, TABLE};
use crate::tui::views::router::{self, SHOW_PRODUCTS};
use crate::tui::views::{Shell, Transition, View, ViewContext, ViewSession};

pub struct ShowProductsView {
    shell: Shell,
    picker: ProductPicker,
    dialog: Option<Dialog>,
}

impl ShowProductsView {
    pub fn new(ctx: &ViewContext<'_>, session: ViewSession) -> Self {
        let shell = Shell::new(SHOW_PRODUCTS, ctx, &session, PICKER_SLOTS);
        let picker = ProductPicker::new(shell.content_area(), shell.currency(), ctx.data, &session);
        let mut view = Self {
            shell,
            picker,
            dialog: None,
        };
        view.sync_focus();
        view
    }

    pub fn picker(&self) -> &ProductPicker {
        &self.picker
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    fn sync_focus(&mut self) {
        self.picker.set_focus(self.shell.content_focus());
    }

    fn adjust_quantity(&mut self, delta: i64, data: &mut dyn DataSource) {
        let Some(product) = self.picker.selected_product() else {
            return;
        };
        let (id, name) = (product.id.clone(), product.name.clone());
        match data.update_quantity(&id, delta) {
            Ok(()) => {
                let quantity = data.get(&id).map_or(0, |p| p.quantity);
                self.shell.set_status(format!("{name}: {quantity} in stock"), Color::Green);
            }
            Err(e) => {
                log::warn!("Failed to adjust quantity of {id}: {e}");
                self.shell.set_status(format!("Could not save: {e}"), Color::Red);
            }
        }
        self.picker.reload(&*data);
    }

    fn open_details(&mut self) {
        if let Some(product) = self.picker.selected_product() {
            let mut dialog = Dialog::info("Product details", details(product, self.shell.currency()));
            dialog.center_in(self.shell.content_area());
            self.dialog = Some(dialog);
        }
    }
}

fn details(product: &Product, currency: &str) -> Vec<String> {
    let mut lines = vec![
        format!("ID:           {}", product.id),
        format!("SKU:          {}", product.sku),
        format!("Name:         {}", product.name),
        format!("Category:     {}", product.category),
        format!("Quantity:     {} (minimum {})", product.quantity, product.min_quantity),
        format!("Price:        {}", format_price(currency, product.price)),
        format!("Stock value:  {}", format_price(currency, product.stock_value())),
        format!("Description:  {}", product.description),
    ];
    if product.is_low_stock() {
        lines.push(String::new());
        lines.push("Low stock: reorder soon".to_string());
    }
    lines
}

impl View for ShowProductsView {
    fn index(&self) -> usize {
        SHOW_PRODUCTS
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.shell.draw(screen, router::title(SHOW_PRODUCTS));
        let cursor = self.picker.draw(screen);
        match &mut self.dialog {
            Some(dialog) => {
                dialog.draw(screen);
                None
            }
            None => cursor,
        }
    }

    fn handle_input(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        if let Some(dialog) = &mut self.dialog {
            if dialog.handle_event(key).is_some() {
                self.dialog = None;
            }
            return Transition::Stay;
        }

        self.shell.clear_status();
        let slot = self.shell.content_focus();
        if self.picker.intercept(slot, key) {
            return Transition::Stay;
        }

        let transition = match self.shell.route(key) {
            Routed::Activate(target) => self.shell.activate(target, &*data),
            Routed::Content(key) => {
                match (slot, key) {
                    (Some(TABLE), Key::Plus) => self.adjust_quantity(1, data),
                    (Some(TABLE), Key::Minus) => self.adjust_quantity(-1, data),
                    (Some(TABLE), Key::Enter) => self.open_details(),
                    _ => self.picker.handle_content(slot, key, &*data),
                }
                Transition::Stay
            }
            Routed::Handled => Transition::Stay,
        };
        self.sync_focus();
        transition
    }

    fn session(&self) -> ViewSession {
        self.picker.session(self.shell.session())
    }
}
