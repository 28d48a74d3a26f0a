//! # Product Picker
//!
//! Search field over a product table, shared by the Show, Update, and
//! Delete views. Content slots: `SEARCH` (0) and `TABLE` (1).
//!
//! Each row's tag is the `Product` itself, so the selection maps straight
//! back to its record.

use ratatui::style::Color;

use crate::core::inventory::DataSource;
use crate::core::product::{Product, format_price};
use crate::tui::component::{Component, EventHandler, Geometry};
use crate::tui::components::text_field::FIELD_HEIGHT;
use crate::tui::components::{Column, Row, SearchEvent, SearchField, Table};
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;
use crate::tui::views::{ViewSession, focus_path};

pub const SEARCH: usize = 0;
pub const TABLE: usize = 1;
pub const PICKER_SLOTS: usize = 2;

const SKU_WIDTH: u16 = 10;
const CATEGORY_WIDTH: u16 = 12;
const QTY_WIDTH: u16 = 5;
const PRICE_WIDTH: u16 = 10;
const MIN_NAME_WIDTH: u16 = 8;

pub struct ProductPicker {
    area: Geometry,
    search: SearchField,
    table: Table<Product>,
    currency: String,
}

impl ProductPicker {
    pub fn new(area: Geometry, currency: &str, data: &dyn DataSource, session: &ViewSession) -> Self {
        let table_height = area.height.saturating_sub(FIELD_HEIGHT);
        let mut picker = Self {
            area,
            search: SearchField::new(area.width).with_query(session.query.as_str()),
            table: Table::new(columns(area.width), area.width, table_height),
            currency: currency.to_string(),
        };
        picker.refresh(data);
        picker.table.restore(session.selected, session.scroll_top);
        picker
    }

    pub fn table(&self) -> &Table<Product> {
        &self.table
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.table.selected_tag()
    }

    /// Re-run the search. Selection and scroll go back to the top.
    pub fn refresh(&mut self, data: &dyn DataSource) {
        let rows = data
            .search(self.search.query())
            .into_iter()
            .map(|product| self.row(product))
            .collect();
        self.table.set_rows(rows);
    }

    /// Re-run the search after a mutation, keeping the selection where it
    /// was (clamped if rows disappeared).
    pub fn reload(&mut self, data: &dyn DataSource) {
        let (selected, scroll_top) = (self.table.selected(), self.table.scroll_top());
        self.refresh(data);
        self.table.restore(selected, scroll_top);
    }

    fn row(&self, product: Product) -> Row<Product> {
        let cells = vec![
            product.sku.clone(),
            product.name.clone(),
            product.category.clone(),
            product.quantity.to_string(),
            format_price(&self.currency, product.price),
        ];
        let color = if product.is_low_stock() { Color::Red } else { Color::Gray };
        Row::new(cells, product).color(color)
    }

    pub fn set_focus(&mut self, slot: Option<usize>) {
        let path = focus_path(slot);
        let path = path.as_ref().map(|p| &p[..]);
        self.search.set_focus(path.filter(|p| p[0] == SEARCH).map(|_| &[][..]));
        self.table.set_focus(path.filter(|p| p[0] == TABLE).map(|_| &[][..]));
    }

    /// A focused table gets first refusal on list-navigation keys, before
    /// the focus coordinator sees them.
    pub fn intercept(&mut self, slot: Option<usize>, key: Key) -> bool {
        slot == Some(TABLE) && key.is_list_navigation() && self.table.handle_key(key)
    }

    /// Keys routed to the picker's content. Typing in the search field
    /// filters the table immediately.
    pub fn handle_content(&mut self, slot: Option<usize>, key: Key, data: &dyn DataSource) {
        if slot != Some(SEARCH) {
            return;
        }
        if let Some(SearchEvent::Changed(query)) = self.search.handle_event(key) {
            log::debug!("Search term changed: {query:?}");
            self.refresh(data);
        }
    }

    pub fn session(&self, mut base: ViewSession) -> ViewSession {
        base.query = self.search.query().to_string();
        base.selected = self.table.selected();
        base.scroll_top = self.table.scroll_top();
        base
    }

    /// Draw both parts; returns the search cursor when it has focus.
    pub fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)> {
        self.search.place(self.area.x, self.area.y);
        self.table.place(self.area.x, self.area.y + i32::from(FIELD_HEIGHT));
        self.search.draw(screen);
        self.table.draw(screen);
        self.search.cursor()
    }
}

fn columns(width: u16) -> Vec<Column> {
    // Border, leading space, and one separator between each of five columns
    let fixed = SKU_WIDTH + CATEGORY_WIDTH + QTY_WIDTH + PRICE_WIDTH + 2 + 1 + 4;
    let name = width.saturating_sub(fixed).max(MIN_NAME_WIDTH);
    vec![
        Column::left("SKU", SKU_WIDTH),
        Column::left("Name", name),
        Column::left("Category", CATEGORY_WIDTH),
        Column::right("Qty", QTY_WIDTH),
        Column::right("Price", PRICE_WIDTH),
    ]
}
