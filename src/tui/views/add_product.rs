//! # Add Product View
//!
//! A blank [`ProductForm`]. Save validates and adds; on success the form
//! starts over with a fresh ID so several products can be entered in a row.

use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{FormEvent, ProductForm};
use crate::tui::event::Key;
use crate::tui::focus::Routed;
use crate::tui::layout;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::router::{self, ADD_PRODUCT};
use crate::tui::views::{Shell, Transition, View, ViewContext, ViewSession};

pub struct AddProductView {
    shell: Shell,
    form: ProductForm,
}

impl AddProductView {
    pub fn new(ctx: &ViewContext<'_>, session: ViewSession) -> Self {
        let area = layout::split(ctx.size, ctx.settings.sidebar_width).content.inner();
        let mut form = ProductForm::new(area, "New product", &ctx.settings.currency_symbol);
        let shell = Shell::new(ADD_PRODUCT, ctx, &session, form.focus_count());
        if let Some(draft) = &session.draft {
            form.load(draft);
        }
        let mut view = Self { shell, form };
        view.sync_focus();
        view
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    fn sync_focus(&mut self) {
        let path = self.shell.content_path();
        self.form.set_focus(path.as_ref().map(|p| &p[..]));
    }

    fn save(&mut self, data: &mut dyn DataSource) {
        if !self.form.validate() {
            return;
        }
        let product = self.form.draft();
        match data.add(product.clone()) {
            Ok(()) => {
                self.form.reset();
                self.form.set_status("Product saved", Color::Green);
                self.shell.focus.focus_content(0);
            }
            Err(e) => {
                log::warn!("Failed to add {}: {e}", product.id);
                self.form.set_status(format!("Could not save: {e}"), Color::Red);
            }
        }
    }
}

impl View for AddProductView {
    fn index(&self) -> usize {
        ADD_PRODUCT
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.shell.draw(screen, router::title(ADD_PRODUCT));
        self.form.draw(screen);
        self.form.draw_editor(screen)
    }

    fn handle_input(&mut self, key: Key, data: &mut dyn DataSource) -> Transition {
        let routed = if self.form.is_editing() {
            Routed::Content(key)
        } else {
            self.shell.route(key)
        };

        let transition = match routed {
            Routed::Activate(target) => self.shell.activate(target, &*data),
            Routed::Content(key) => {
                match self.form.handle_event(key) {
                    Some(FormEvent::Advance) => self.shell.focus.advance(),
                    Some(FormEvent::Save) => self.save(data),
                    Some(FormEvent::Cancel) => {
                        self.form.reset();
                        self.shell.focus.enter_navigation();
                        self.shell.sync_side_bar();
                    }
                    None => {}
                }
                Transition::Stay
            }
            Routed::Handled => Transition::Stay,
        };
        self.sync_focus();
        transition
    }

    fn session(&self) -> ViewSession {
        ViewSession {
            draft: Some(self.form.draft()),
            ..self.shell.session()
        }
    }
}
