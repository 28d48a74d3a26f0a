//! # Delete Product View
//!
//! Pick a product, press Enter, confirm with `y`.

use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::core::product::Product;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Dialog, DialogEvent};
use crate::tui::event::Key;
use crate::tui::focus::Routed;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::picker::{PICKER_SLOTS, ProductPicker, TABLE};
use crate::tui::views::router::{self, DELETE_PRODUCT};
use crate::tui::views::{Shell, Transition, View, ViewContext, ViewSession};

pub struct DeleteProductView {
    shell: Shell,
    picker: ProductPicker,
    /// Open confirmation and the product it is about.
    pending: Option<(Dialog, Product)>,
}

impl DeleteProductView {
    pub fn new(ctx: &ViewContext<'_>, session: ViewSession) -> Self {
        let shell = Shell::new(DELETE_PRODUCT, ctx, &session, PICKER_SLOTS);
        let picker = ProductPicker::new(shell.content_area(), shell.currency(), ctx.data, &session);
        let mut view = Self {
            shell,
            picker,
            pending: None,
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

    pub fn is_confirming(&self) -> bool {
        self.pending.is_some()
    }

    fn sync_focus(&mut self) {
        self.picker.set_focus(self.shell.content_focus());
    }

    fn confirm(&mut self) {
        if let Some(product) = self.picker.selected_product() {
            let mut dialog = Dialog::confirm(
                "Delete product",
                vec![
                    format!("Delete {} ({})?", product.name, product.sku),
                    "This cannot be undone.".to_string(),
                ],
            );
            dialog.center_in(self.shell.content_area());
            self.pending = Some((dialog, product.clone()));
        }
    }

    fn delete(&mut self, product: &Product, data: &mut dyn DataSource) {
        match data.delete(&product.id) {
            Ok(()) => {
                self.shell.set_status(format!("Deleted {}", product.name), Color::Green);
            }
            Err(e) => {
                log::warn!("Failed to delete {}: {e}", product.id);
                self.shell.set_status(format!("Could not delete: {e}"), Color::Red);
            }
        }
        self.picker.reload(&*data);
    }
}

impl View for DeleteProductView {
    fn index(&self) -> usize {
        DELETE_PRODUCT
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.shell.draw(screen, router::title(DELETE_PRODUCT));
        let cursor = self.picker.draw(screen);
        match &mut self.pending {
            Some((dialog, _)) => {
                dialog.draw(screen);
                None
            }
            None => cursor,
        }
    }

    fn handle_input(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        if let Some((dialog, _)) = &mut self.pending {
            match dialog.handle_event(key) {
                Some(DialogEvent::Confirmed) => {
                    if let Some((_, product)) = self.pending.take() {
                        self.delete(&product, data);
                    }
                }
                Some(DialogEvent::Dismissed) => self.pending = None,
                None => {}
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
                    (Some(TABLE), Key::Enter) => self.confirm(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DisplaySettings;
    use crate::core::inventory::Inventory;
    use crate::test_support::test_inventory;
    use ratatui::layout::Size;

    fn view(data: &Inventory) -> DeleteProductView {
        let settings = DisplaySettings::default();
        let ctx = ViewContext {
            size: Size::new(100, 30),
            settings: &settings,
            data,
        };
        DeleteProductView::new(&ctx, ViewSession::entering(DELETE_PRODUCT))
    }

    #[test]
    fn test_confirm_deletes_selected() {
        let mut data = test_inventory(5);
        let mut v = view(&data);
        v.handle_input(Key::Tab, &mut data);
        v.handle_input(Key::Down, &mut data);
        v.handle_input(Key::Enter, &mut data);
        assert!(v.is_confirming());

        // Unrelated keys keep the dialog open
        v.handle_input(Key::Char('x'), &mut data);
        assert!(v.is_confirming());

        v.handle_input(Key::Char('y'), &mut data);
        assert!(!v.is_confirming());
        assert_eq!(data.len(), 4);
        assert!(data.get("ID000001").is_none());
        assert_eq!(v.picker().table().selected(), Some(1));
        assert_eq!(v.shell().status(), Some("Deleted Product 01"));
    }

    #[test]
    fn test_scrolling_clears_the_deleted_message() {
        let mut data = test_inventory(5);
        let mut v = view(&data);
        v.handle_input(Key::Tab, &mut data);
        v.handle_input(Key::Enter, &mut data);
        v.handle_input(Key::Char('y'), &mut data);
        assert_eq!(v.shell().status(), Some("Deleted Product 00"));

        v.handle_input(Key::Down, &mut data);
        assert_eq!(v.picker().table().selected(), Some(1));
        assert_eq!(v.shell().status(), None);
    }

    #[test]
    fn test_escape_cancels() {
        let mut data = test_inventory(5);
        let mut v = view(&data);
        v.handle_input(Key::Tab, &mut data);
        v.handle_input(Key::Enter, &mut data);
        v.handle_input(Key::Escape, &mut data);
        assert!(!v.is_confirming());
        assert_eq!(data.len(), 5);
        // Escape closed the dialog only; focus is still on the table
        assert_eq!(v.shell().content_focus(), Some(TABLE));
    }

    #[test]
    fn test_deleting_last_row_clamps_selection() {
        let mut data = test_inventory(3);
        let mut v = view(&data);
        v.handle_input(Key::Tab, &mut data);
        v.handle_input(Key::End, &mut data);
        v.handle_input(Key::Enter, &mut data);
        v.handle_input(Key::Char('y'), &mut data);
        assert_eq!(v.picker().table().selected(), Some(1));

        for _ in 0..2 {
            v.handle_input(Key::Enter, &mut data);
            v.handle_input(Key::Char('y'), &mut data);
        }
        assert!(data.is_empty());
        assert_eq!(v.picker().table().selected(), None);

        // Nothing left to delete
        v.handle_input(Key::Enter, &mut data);
        assert!(!v.is_confirming());
    }
}
