//! # Product Form Component
//!
//! Multi-field editor for one [`Product`]. Used by both the Add and Update
//! views.
//!
//! ```text
//! ┌─ New product ──────────────────┐
//! │ ┌─ ID ───────────────────────┐ │  ▲ fields scroll so the focused
//! │ │ 3F9A0C12                   │ │  │ one is always visible
//! │ └────────────────────────────┘ │  │
//! │ ┌─ SKU ──────────────────────┐ │  │
//! │ ...                            │  ▼
//! │ Product saved                  │  status line
//! │   Cancel      Save             │  buttons, pinned to the bottom
//! └────────────────────────────────┘
//! ```
//!
//! ## Focus
//!
//! The form's focus path is a single index into its *focusable* items, in
//! order: the editable fields, then Cancel and Save. The read-only ID field
//! is skipped. The view's `FocusCoordinator` owns that index and pushes it
//! down with `set_focus`.
//!
//! ## Editing
//!
//! Enter on a field opens a [`ModalEditor`] that the form owns until the
//! edit ends. While `is_editing()` is true the view must send every key to
//! the form first.

use ratatui::style::Color;

use crate::core::product::Product;
use crate::tui::component::{Component, EventHandler, Geometry, Validation, fit};
use crate::tui::components::button::Button;
use crate::tui::components::frame::Frame;
use crate::tui::components::numeric_field::NumericField;
use crate::tui::components::text_field::{FIELD_HEIGHT, TextField};
use crate::tui::editor::{EditOutcome, InputKind, ModalEditor};
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

/// Events the owning view acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Save,
    Cancel,
    /// A Tab-ended edit: the view advances its content focus.
    Advance,
}

enum FormItem {
    Text(TextField),
    Number(NumericField),
    Button(Button),
}

impl FormItem {
    fn component(&self) -> &dyn Component {
        match self {
            FormItem::Text(c) => c,
            FormItem::Number(c) => c,
            FormItem::Button(c) => c,
        }
    }

    fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            FormItem::Text(c) => c,
            FormItem::Number(c) => c,
            FormItem::Button(c) => c,
        }
    }

    fn is_focusable(&self) -> bool {
        match self {
            FormItem::Text(field) => field.is_editable(),
            _ => true,
        }
    }

    fn is_field(&self) -> bool {
        !matches!(self, FormItem::Button(_))
    }

    fn set_validation(&mut self, validation: Validation) {
        match self {
            FormItem::Text(field) => field.validation = validation,
            FormItem::Number(field) => field.validation = validation,
            FormItem::Button(_) => {}
        }
    }
}

// Item positions
const ID: usize = 0;
const SKU: usize = 1;
const NAME: usize = 2;
const QUANTITY: usize = 3;
const CATEGORY: usize = 4;
const MIN_QUANTITY: usize = 5;
const DESCRIPTION: usize = 6;
const PRICE: usize = 7;
const CANCEL: usize = 8;
const SAVE: usize = 9;

/// Rows below the field viewport: status line and buttons.
const FOOTER_ROWS: u16 = 2;

pub struct ProductForm {
    geometry: Geometry,
    title: String,
    items: Vec<FormItem>,
    /// Index into `focusable()`.
    focus: Option<usize>,
    /// First visible field (by field position).
    scroll: usize,
    editor: Option<ModalEditor>,
    status: Option<(String, Color)>,
}

impl ProductForm {
    pub fn new(geometry: Geometry, title: impl Into<String>, currency: &str) -> Self {
        let width = geometry.width.saturating_sub(4);
        let items = vec![
            FormItem::Text(TextField::new("ID", width).read_only()),
            FormItem::Text(TextField::new("SKU", width)),
            FormItem::Text(TextField::new("Name", width)),
            FormItem::Number(NumericField::integer("Quantity", width)),
            FormItem::Text(TextField::new("Category", width)),
            FormItem::Number(NumericField::integer("Min quantity", width)),
            FormItem::Text(TextField::new("Description", width)),
            FormItem::Number(NumericField::decimal("Price", width).prefix(currency)),
            FormItem::Button(Button::new("Cancel")),
            FormItem::Button(Button::new("Save")),
        ];
        let mut form = Self {
            geometry,
            title: title.into(),
            items,
            focus: None,
            scroll: 0,
            editor: None,
            status: None,
        };
        form.load(&Product::blank());
        form
    }

    /// Number of focusable items, for the view's `FocusCoordinator`.
    pub fn focus_count(&self) -> usize {
        self.focusable().len()
    }

    fn focusable(&self) -> Vec<usize> {
        (0..self.items.len()).filter(|&i| self.items[i].is_focusable()).collect()
    }

    fn focused_item(&self) -> Option<usize> {
        self.focus.and_then(|f| self.focusable().get(f).copied())
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Fill every field from `product` and clear validation and status.
    pub fn load(&mut self, product: &Product) {
        self.set_text(ID, &product.id);
        self.set_text(SKU, &product.sku);
        self.set_text(NAME, &product.name);
        self.set_number(QUANTITY, f64::from(product.quantity));
        self.set_text(CATEGORY, &product.category);
        self.set_number(MIN_QUANTITY, f64::from(product.min_quantity));
        self.set_text(DESCRIPTION, &product.description);
        self.set_number(PRICE, product.price);
        for item in &mut self.items {
            item.set_validation(Validation::Pristine);
        }
        self.editor = None;
        self.status = None;
    }

    /// Start over with a blank product and a fresh ID.
    pub fn reset(&mut self) {
        self.load(&Product::blank());
        self.scroll = 0;
    }

    /// The product as currently entered.
    pub fn draft(&self) -> Product {
        Product {
            id: self.text(ID),
            sku: self.text(SKU).trim().to_string(),
            name: self.text(NAME).trim().to_string(),
            quantity: self.number(QUANTITY).map_or(0, NumericField::as_u32),
            category: self.text(CATEGORY).trim().to_string(),
            min_quantity: self.number(MIN_QUANTITY).map_or(0, NumericField::as_u32),
            description: self.text(DESCRIPTION).trim().to_string(),
            price: self.number(PRICE).map_or(0.0, NumericField::value),
        }
    }

    fn text(&self, index: usize) -> String {
        match &self.items[index] {
            FormItem::Text(field) => field.value().to_string(),
            _ => String::new(),
        }
    }

    fn number(&self, index: usize) -> Option<&NumericField> {
        match &self.items[index] {
            FormItem::Number(field) => Some(field),
            _ => None,
        }
    }

    fn set_text(&mut self, index: usize, value: &str) {
        if let FormItem::Text(field) = &mut self.items[index] {
            field.set_value(value);
        }
    }

    fn set_number(&mut self, index: usize, value: f64) {
        if let FormItem::Number(field) = &mut self.items[index] {
            field.set_value(value);
        }
    }

    pub fn validation(&self, label: &str) -> Option<Validation> {
        self.items.iter().find_map(|item| match item {
            FormItem::Text(f) if f.label == label => Some(f.validation),
            FormItem::Number(f) if f.label == label => Some(f.validation),
            _ => None,
        })
    }

    /// Check required fields, marking each one valid or invalid. On failure
    /// the status line names the first offending field.
    pub fn validate(&mut self) -> bool {
        let draft = self.draft();
        let checks = [
            (SKU, !draft.sku.is_empty(), "SKU is required"),
            (NAME, !draft.name.is_empty(), "Name is required"),
            (QUANTITY, draft.quantity > 0, "Quantity must be greater than zero"),
            (PRICE, draft.price > 0.0, "Price must be greater than zero"),
        ];
        for (index, item) in self.items.iter_mut().enumerate() {
            if index != ID && item.is_field() {
                item.set_validation(Validation::Valid);
            }
        }
        let mut first_error = None;
        for (index, ok, message) in checks {
            if !ok {
                self.items[index].set_validation(Validation::Invalid);
                first_error.get_or_insert(message);
            }
        }
        match first_error {
            Some(message) => {
                self.set_status(message, Color::Red);
                false
            }
            None => {
                self.status = None;
                true
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>, color: Color) {
        self.status = Some((message.into(), color));
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    // ========================================================================
    // Editing
    // ========================================================================

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    fn open_editor(&mut self, index: usize) {
        let editor = match &self.items[index] {
            FormItem::Text(field) => ModalEditor::open(InputKind::Text, field.value(), field.edit_area()),
            FormItem::Number(field) => ModalEditor::open(field.kind(), &field.edit_text(), field.edit_area()),
            FormItem::Button(_) => return,
        };
        self.editor = Some(editor);
    }

    fn apply_edit(&mut self, index: usize, outcome: &EditOutcome) {
        log::debug!("Form edit on item {index} ended: {outcome:?}");
        if !outcome.commits() {
            return;
        }
        match &mut self.items[index] {
            FormItem::Text(field) => field.set_value(outcome.value()),
            FormItem::Number(field) => field.commit(outcome.value()),
            FormItem::Button(_) => {}
        }
    }

    /// Draw the open editor over its field and return the cursor position.
    pub fn draw_editor(&self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.editor.as_ref().map(|editor| editor.draw(screen))
    }

    // ========================================================================
    // Layout
    // ========================================================================

    fn viewport(&self) -> Geometry {
        let inner = self.geometry.inner();
        Geometry::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(FOOTER_ROWS))
    }

    fn visible_fields(&self) -> usize {
        usize::from(self.viewport().height / FIELD_HEIGHT).max(1)
    }

    /// Scroll just far enough that the focused field is on screen.
    fn scroll_to_focus(&mut self) {
        let Some(item) = self.focused_item() else {
            return;
        };
        if !self.items[item].is_field() {
            return;
        }
        let visible = self.visible_fields();
        if item < self.scroll {
            self.scroll = item;
        } else if item >= self.scroll + visible {
            self.scroll = item + 1 - visible;
        }
    }

    fn layout(&mut self) {
        let viewport = self.viewport();
        let visible = self.visible_fields();
        let fields = self.items.iter().filter(|i| i.is_field()).count();
        self.scroll = self.scroll.min(fields.saturating_sub(visible));

        let mut row = viewport.y;
        let scroll = self.scroll;
        for (index, item) in self.items.iter_mut().enumerate().filter(|(_, i)| i.is_field()) {
            let y = if index < scroll || index >= scroll + visible {
                // Parked off-screen; hidden fields are not drawn
                -i32::from(FIELD_HEIGHT)
            } else {
                let y = row;
                row += i32::from(FIELD_HEIGHT);
                y
            };
            item.component_mut().place(viewport.x + 1, y);
        }

        let buttons_y = self.geometry.inner().bottom() - 1;
        let mut x = viewport.x + 2;
        for item in self.items.iter_mut().filter(|i| !i.is_field()) {
            item.component_mut().place(x, buttons_y);
            x += i32::from(item.component().geometry().width) + 2;
        }
    }
}

impl Component for ProductForm {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn place(&mut self, x: i32, y: i32) {
        self.geometry.x = x;
        self.geometry.y = y;
    }

    fn has_focus(&self) -> bool {
        self.focus.is_some()
    }

    fn set_focus(&mut self, path: Option<&[usize]>) {
        let focusable = self.focusable();
        self.focus = match path {
            Some(&[index, ..]) if index < focusable.len() => Some(index),
            Some(_) if !focusable.is_empty() => Some(0),
            _ => None,
        };
        let target = self.focus.map(|f| focusable[f]);
        for (i, item) in self.items.iter_mut().enumerate() {
            item.component_mut().set_focus((Some(i) == target).then_some(&[][..]));
        }
        self.scroll_to_focus();
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        self.layout();
        let border = if self.has_focus() { Color::Yellow } else { Color::Gray };
        Frame::new(self.geometry).color(border).title(self.title.as_str()).draw(screen);

        let viewport = self.viewport();
        for item in &mut self.items {
            let g = item.component().geometry();
            if item.is_field() && (g.y < viewport.y || g.bottom() > viewport.bottom()) {
                continue;
            }
            item.component_mut().draw(screen);
        }

        let fields = self.items.iter().filter(|i| i.is_field()).count();
        let right = self.geometry.right() - 2;
        if self.scroll > 0 {
            screen.write(right, viewport.y, "▲", Color::Yellow, Color::Black);
        }
        if self.scroll + self.visible_fields() < fields {
            screen.write(right, viewport.bottom() - 1, "▼", Color::Yellow, Color::Black);
        }

        if let Some((message, color)) = &self.status {
            let width = usize::from(viewport.width.saturating_sub(2));
            screen.write(viewport.x + 1, viewport.bottom(), &fit(message, width), *color, Color::Black);
        }
    }

    fn handle_key(&mut self, key: Key) -> bool {
        self.handle_event(key);
        true
    }
}

impl EventHandler for ProductForm {
    type Event = FormEvent;

    fn handle_event(&mut self, key: Key) -> Option<FormEvent> {
        let item = self.focused_item()?;

        if let Some(editor) = &mut self.editor {
            let outcome = editor.handle_key(key)?;
            self.editor = None;
            self.apply_edit(item, &outcome);
            return outcome.advances_focus().then_some(FormEvent::Advance);
        }

        match key {
            Key::Enter if item == SAVE => Some(FormEvent::Save),
            Key::Enter if item == CANCEL => Some(FormEvent::Cancel),
            Key::Enter => {
                self.open_editor(item);
                None
            }
            Key::Plus | Key::Minus => {
                if let FormItem::Number(field) = &mut self.items[item] {
                    field.handle_key(key);
                }
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Size;

    /// Tall enough for every field (8 * 3 + 2 footer + 2 border).
    fn tall_form() -> ProductForm {
        ProductForm::new(Geometry::new(0, 0, 40, 28), "New product", "$")
    }

    fn focus(form: &mut ProductForm, index: usize) {
        form.set_focus(Some(&[index]));
    }

    fn type_text(form: &mut ProductForm, text: &str) {
        for c in text.chars() {
            form.handle_event(Key::Char(c));
        }
    }

    /// Focus index `slot`, open the editor, type `text`, confirm.
    fn enter_value(form: &mut ProductForm, slot: usize, text: &str) {
        focus(form, slot);
        form.handle_event(Key::Enter);
        type_text(form, text);
        form.handle_event(Key::Enter);
    }

    #[test]
    fn test_focus_skips_read_only_id() {
        let mut form = tall_form();
        assert_eq!(form.focus_count(), 9);
        focus(&mut form, 0);
        assert_eq!(form.focused_item(), Some(SKU));
        focus(&mut form, 8);
        assert_eq!(form.focused_item(), Some(SAVE));
    }

    #[test]
    fn test_at_most_one_item_focused() {
        let mut form = tall_form();
        for slot in 0..form.focus_count() {
            focus(&mut form, slot);
            let focused = form.items.iter().filter(|i| i.component().has_focus()).count();
            assert_eq!(focused, 1);
        }
        form.set_focus(None);
        assert!(form.items.iter().all(|i| !i.component().has_focus()));
    }

    #[test]
    fn test_numeric_modal_entry() {
        let mut form = tall_form();
        focus(&mut form, 2); // Quantity, holding 0
        assert_eq!(form.handle_event(Key::Enter), None);
        assert!(form.is_editing());
        form.handle_event(Key::Char('1'));
        form.handle_event(Key::Char('2'));
        assert_eq!(form.handle_event(Key::Enter), None);

        assert!(!form.is_editing());
        assert_eq!(form.draft().quantity, 12);
        assert_eq!(form.validation("Quantity"), Some(Validation::Pristine));
        assert_eq!(form.focused_item(), Some(QUANTITY));
    }

    #[test]
    fn test_escape_keeps_original_value() {
        let mut form = tall_form();
        enter_value(&mut form, 1, "Hammer");
        form.handle_event(Key::Enter);
        form.handle_event(Key::Backspace);
        type_text(&mut form, "xyz");
        form.handle_event(Key::Escape);
        assert_eq!(form.draft().name, "Hammer");
    }

    #[test]
    fn test_tab_in_editor_commits_and_asks_to_advance() {
        let mut form = tall_form();
        focus(&mut form, 0);
        form.handle_event(Key::Enter);
        type_text(&mut form, "HM-1");
        assert_eq!(form.handle_event(Key::Tab), Some(FormEvent::Advance));
        assert_eq!(form.draft().sku, "HM-1");
    }

    #[test]
    fn test_bare_plus_minus_on_numeric_field() {
        let mut form = tall_form();
        focus(&mut form, 2);
        form.handle_event(Key::Plus);
        form.handle_event(Key::Plus);
        form.handle_event(Key::Minus);
        assert_eq!(form.draft().quantity, 1);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_buttons_fire_events() {
        let mut form = tall_form();
        focus(&mut form, 7);
        assert_eq!(form.handle_event(Key::Enter), Some(FormEvent::Cancel));
        focus(&mut form, 8);
        assert_eq!(form.handle_event(Key::Enter), Some(FormEvent::Save));
        assert!(!form.is_editing());
    }

    #[test]
    fn test_validate_marks_fields() {
        let mut form = tall_form();
        enter_value(&mut form, 1, "Hammer");
        assert!(!form.validate());
        assert_eq!(form.validation("SKU"), Some(Validation::Invalid));
        assert_eq!(form.validation("Name"), Some(Validation::Valid));
        assert_eq!(form.validation("Quantity"), Some(Validation::Invalid));
        assert_eq!(form.validation("Price"), Some(Validation::Invalid));
        assert_eq!(form.validation("Category"), Some(Validation::Valid));
        assert_eq!(form.status(), Some("SKU is required"));

        enter_value(&mut form, 0, "HM-1");
        enter_value(&mut form, 2, "3");
        enter_value(&mut form, 6, "9.5");
        // Typing alone never changes validation
        assert_eq!(form.validation("SKU"), Some(Validation::Invalid));
        assert!(form.validate());
        assert_eq!(form.validation("SKU"), Some(Validation::Valid));
    }

    #[test]
    fn test_load_and_reset() {
        let mut form = tall_form();
        let product = Product {
            id: "ABCD1234".into(),
            sku: "B-1".into(),
            name: "Bolt".into(),
            quantity: 40,
            category: "Hardware".into(),
            min_quantity: 10,
            description: "M6".into(),
            price: 0.25,
        };
        form.load(&product);
        assert_eq!(form.draft(), product);

        form.reset();
        let blank = form.draft();
        assert_ne!(blank.id, "ABCD1234");
        assert!(blank.name.is_empty());
    }

    #[test]
    fn test_short_form_scrolls_to_focused_field() {
        // Room for two fields at a time
        let mut form = ProductForm::new(Geometry::new(0, 0, 30, 10), "Edit", "$");
        let mut screen = ScreenBuffer::new(Size::new(30, 10));
        focus(&mut form, 6); // Price, the last field
        form.draw(&mut screen);
        assert_eq!(form.scroll, PRICE - 1);
        assert!(screen.text().contains("Price"));
        assert!(!screen.text().contains("SKU"));

        focus(&mut form, 0);
        form.draw(&mut screen);
        assert_eq!(form.scroll, SKU);
    }

    #[test]
    fn test_buttons_pinned_to_bottom() {
        let mut form = tall_form();
        let mut screen = ScreenBuffer::new(Size::new(40, 28));
        form.draw(&mut screen);
        assert!(screen.row_text(26).contains("Cancel"));
        assert!(screen.row_text(26).contains("Save"));
    }

    #[test]
    fn test_editor_draws_over_field() {
        let mut form = tall_form();
        let mut screen = ScreenBuffer::new(Size::new(40, 28));
        focus(&mut form, 1);
        form.draw(&mut screen);
        form.handle_event(Key::Enter);
        type_text(&mut form, "Nut");
        let cursor = form.draw_editor(&mut screen);
        // Name is the third field: rows 7..10, text on row 8
        assert_eq!(cursor, Some((4 + 3, 8)));
        assert!(screen.row_text(8).contains("Nut"));
    }
}
