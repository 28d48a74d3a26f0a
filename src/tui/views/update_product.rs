//! # Update Product View
//!
//! Two stages in one view: pick a product from the table, then edit it in a
//! [`ProductForm`]. The content slot count changes with the stage, so the
//! focus coordinator is reshaped on every switch.

use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::core::product::Product;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{FormEvent, ProductForm};
use crate::tui::event::Key;
use crate::tui::focus::Routed;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::picker::{PICKER_SLOTS, ProductPicker, TABLE};
use crate::tui::views::router::{self, UPDATE_PRODUCT};
use crate::tui::views::{Shell, Transition, View, ViewContext, ViewSession};

pub struct UpdateProductView {
    shell: Shell,
    picker: ProductPicker,
    form: Option<ProductForm>,
}

impl UpdateProductView {
    pub fn new(ctx: &ViewContext<'_>, session: ViewSession) -> Self {
        let mut shell = Shell::new(UPDATE_PRODUCT, ctx, &session, PICKER_SLOTS);
        let picker = ProductPicker::new(shell.content_area(), shell.currency(), ctx.data, &session);
        let form = session.draft.as_ref().map(|draft| {
            let form = edit_form(&shell, draft);
            shell.focus.set_content(form.focus_count(), session.content_index);
            form
        });
        let mut view = Self { shell, picker, form };
        view.sync_focus();
        view
    }

    pub fn picker(&self) -> &ProductPicker {
        &self.picker
    }

    pub fn form(&self) -> Option<&ProductForm> {
        self.form.as_ref()
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    fn sync_focus(&mut self) {
        let slot = self.shell.content_focus();
        match &mut self.form {
            Some(form) => {
                self.picker.set_focus(None);
                let path = self.shell.content_path();
                form.set_focus(path.as_ref().map(|p| &p[..]));
            }
            None => self.picker.set_focus(slot),
        }
    }

    fn open_form(&mut self) {
        if let Some(product) = self.picker.selected_product() {
            let form = edit_form(&self.shell, product);
            self.shell.focus.set_content(form.focus_count(), 0);
            self.shell.focus.enter_content();
            self.form = Some(form);
        }
    }

    fn close_form(&mut self) {
        self.form = None;
        self.shell.focus.set_content(PICKER_SLOTS, TABLE);
    }

    fn save(&mut self, data: &mut dyn DataSource) {
        let Some(form) = &mut self.form else {
            return;
        };
        if !form.validate() {
            return;
        }
        let product = form.draft();
        match data.update(product.clone()) {
            Ok(()) => {
                self.close_form();
                self.picker.reload(&*data);
                self.shell.set_status(format!("Updated {}", product.name), Color::Green);
            }
            Err(e) => {
                log::warn!("Failed to update {}: {e}", product.id);
                form.set_status(format!("Could not save: {e}"), Color::Red);
            }
        }
    }

    fn handle_form_key(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        let editing = self.form.as_ref().is_some_and(ProductForm::is_editing);
        let routed = if editing {
            Routed::Content(key)
        } else {
            self.shell.route(key)
        };

        match routed {
            Routed::Activate(target) => return self.shell.activate(target, &*data),
            Routed::Content(key) => {
                let event = self.form.as_mut().and_then(|form| form.handle_event(key));
                match event {
                    Some(FormEvent::Advance) => self.shell.focus.advance(),
                    Some(FormEvent::Save) => self.save(data),
                    Some(FormEvent::Cancel) => self.close_form(),
                    None => {}
                }
            }
            Routed::Handled => {}
        }
        Transition::Stay
    }

    fn handle_picker_key(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        let slot = self.shell.content_focus();
        if self.picker.intercept(slot, key) {
            return Transition::Stay;
        }
        match self.shell.route(key) {
            Routed::Activate(target) => self.shell.activate(target, &*data),
            Routed::Content(key) => {
                match (slot, key) {
                    (Some(TABLE), Key::Enter) => self.open_form(),
                    _ => self.picker.handle_content(slot, key, &*data),
                }
                Transition::Stay
            }
            Routed::Handled => Transition::Stay,
        }
    }
}

fn edit_form(shell: &Shell, product: &Product) -> ProductForm {
    let mut form = ProductForm::new(shell.content_area(), "Edit product", shell.currency());
    form.load(product);
    form
}

impl View for UpdateProductView {
    fn index(&self) -> usize {
        UPDATE_PRODUCT
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.shell.draw(screen, router::title(UPDATE_PRODUCT));
        match &mut self.form {
            Some(form) => {
                form.draw(screen);
                form.draw_editor(screen)
            }
            None => self.picker.draw(screen),
        }
    }

    fn handle_input(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        let editing = self.form.as_ref().is_some_and(ProductForm::is_editing);
        if !editing {
            self.shell.clear_status();
        }
        let transition = if self.form.is_some() {
            self.handle_form_key(key, data)
        } else {
            self.handle_picker_key(key, data)
        };
        self.sync_focus();
        transition
    }

    fn session(&self) -> ViewSession {
        let mut session = self.picker.session(self.shell.session());
        session.draft = self.form.as_ref().map(ProductForm::draft);
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DisplaySettings;
    use crate::core::inventory::Inventory;
    use crate::test_support::test_inventory;
    use ratatui::layout::Size;

    fn build(data: &Inventory, session: ViewSession) -> UpdateProductView {
        let settings = DisplaySettings::default();
        let ctx = ViewContext {
            size: Size::new(100, 40),
            settings: &settings,
            data,
        };
        UpdateProductView::new(&ctx, session)
    }

    fn keys(view: &mut UpdateProductView, data: &mut Inventory, keys: &[Key]) {
        for key in keys {
            view.handle_input(*key, data);
        }
    }

    fn type_text(view: &mut UpdateProductView, data: &mut Inventory, text: &str) {
        for c in text.chars() {
            view.handle_input(Key::Char(c), data);
        }
    }

    #[test]
    fn test_pick_edit_save() {
        let mut data = test_inventory(5);
        let mut v = build(&data, ViewSession::entering(UPDATE_PRODUCT));
        keys(&mut v, &mut data, &[Key::Tab, Key::Down, Key::Enter]);
        assert_eq!(v.form().unwrap().draft().id, "ID000001");
        assert_eq!(v.shell().content_focus(), Some(0));

        // Name is the second slot; replace it
        keys(&mut v, &mut data, &[Key::Tab, Key::Enter]);
        for _ in 0.."Product 01".len() {
            v.handle_input(Key::Backspace, &mut data);
        }
        type_text(&mut v, &mut data, "Hex bolt");
        v.handle_input(Key::Enter, &mut data);

        // Save is the last slot; Up wraps there from the first
        keys(&mut v, &mut data, &[Key::Up, Key::Up, Key::Enter]);
        assert_eq!(v.shell().content_focus(), Some(TABLE));
        assert!(v.form().is_none());
        assert_eq!(data.get("ID000001").unwrap().name, "Hex bolt");
        assert_eq!(v.picker().selected_product().unwrap().name, "Hex bolt");
        assert_eq!(v.shell().status(), Some("Updated Hex bolt"));
    }

    #[test]
    fn test_invalid_save_keeps_form_open() {
        let mut data = test_inventory(5);
        // Product 0 has quantity 0, which cannot be saved
        let mut v = build(&data, ViewSession::entering(UPDATE_PRODUCT));
        keys(&mut v, &mut data, &[Key::Tab, Key::Enter]);
        keys(&mut v, &mut data, &[Key::Up, Key::Enter]);
        let form = v.form().unwrap();
        assert_eq!(form.status(), Some("Quantity must be greater than zero"));
        assert_eq!(data.get("ID000000").unwrap().quantity, 0);
    }

    #[test]
    fn test_cancel_returns_to_table() {
        let mut data = test_inventory(5);
        let mut v = build(&data, ViewSession::entering(UPDATE_PRODUCT));
        keys(&mut v, &mut data, &[Key::Tab, Key::Enter, Key::Up, Key::Up, Key::Enter]);
        assert!(v.form().is_none());
        assert_eq!(v.shell().content_focus(), Some(TABLE));
    }

    #[test]
    fn test_escape_inside_editor_does_not_leave_content() {
        let mut data = test_inventory(5);
        let mut v = build(&data, ViewSession::entering(UPDATE_PRODUCT));
        keys(&mut v, &mut data, &[Key::Tab, Key::Enter, Key::Enter]);
        assert!(v.form().unwrap().is_editing());
        v.handle_input(Key::Escape, &mut data);
        assert!(!v.form().unwrap().is_editing());
        assert_eq!(v.shell().content_focus(), Some(0));
    }

    #[test]
    fn test_session_rebuild_keeps_draft() {
        let mut data = test_inventory(5);
        let mut v = build(&data, ViewSession::entering(UPDATE_PRODUCT));
        keys(&mut v, &mut data, &[Key::Tab, Key::Enter, Key::Tab, Key::Tab]);
        let session = v.session();
        assert_eq!(session.content_index, 2);

        let rebuilt = build(&data, session);
        assert_eq!(rebuilt.form().unwrap().draft().id, "ID000000");
        assert_eq!(rebuilt.shell().content_focus(), Some(2));
    }
}
