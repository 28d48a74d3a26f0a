//! # Table Component
//!
//! Bordered, column-aligned, scrollable list of rows. Each row carries a
//! `tag` payload so the owner can get back to the source record without
//! another lookup.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ SKU      Name        Qty │  header
//! │ B-100    Bolt         40 │  ◀─ scroll_top
//! │ N-200    Nut          12 │  ◀─ selected (highlighted)
//! │ ...                      │  visible_rows = height - 3
//! └───────────────── 2/57 ───┘
//! ```
//!
//! ## Scroll invariant
//!
//! Whenever a row is selected:
//! `scroll_top <= selected < scroll_top + visible_rows`.
//! Navigation moves the window only as far as needed to keep it true.

use ratatui::style::Color;

use crate::tui::component::{Component, Geometry, display_width, fit};
use crate::tui::components::frame::Frame;
use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

/// Border, header, and bottom border.
const CHROME_ROWS: u16 = 3;

#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub width: u16,
    pub align_right: bool,
}

impl Column {
    pub fn left(header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            align_right: false,
        }
    }

    pub fn right(header: impl Into<String>, width: u16) -> Self {
        Self {
            header: header.into(),
            width,
            align_right: true,
        }
    }

    fn cell(&self, text: &str) -> String {
        let width = usize::from(self.width);
        let used = display_width(text);
        if self.align_right && used < width {
            format!("{}{text}", " ".repeat(width - used))
        } else {
            fit(text, width)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Row<T> {
    pub cells: Vec<String>,
    pub tag: T,
    pub color: Color,
}

impl<T> Row<T> {
    pub fn new(cells: Vec<String>, tag: T) -> Self {
        Self {
            cells,
            tag,
            color: Color::Gray,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

pub struct Table<T> {
    geometry: Geometry,
    columns: Vec<Column>,
    rows: Vec<Row<T>>,
    selected: Option<usize>,
    scroll_top: usize,
    focused: bool,
}

impl<T> Table<T> {
    pub fn new(columns: Vec<Column>, width: u16, height: u16) -> Self {
        Self {
            geometry: Geometry::new(0, 0, width, height),
            columns,
            rows: Vec::new(),
            selected: None,
            scroll_top: 0,
            focused: false,
        }
    }

    /// Replace every row. Selection goes back to the first row (or none)
    /// and the window to the top.
    pub fn set_rows(&mut self, rows: Vec<Row<T>>) {
        self.rows = rows;
        self.scroll_top = 0;
        self.selected = if self.rows.is_empty() { None } else { Some(0) };
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn visible_rows(&self) -> usize {
        usize::from(self.geometry.height.saturating_sub(CHROME_ROWS))
    }

    /// Payload of the selected row.
    pub fn selected_tag(&self) -> Option<&T> {
        self.selected.and_then(|i| self.rows.get(i)).map(|row| &row.tag)
    }

    /// Reapply a previous selection and window (after a rebuild or a
    /// refresh), clamped to the current rows.
    pub fn restore(&mut self, selected: Option<usize>, scroll_top: usize) {
        if self.rows.is_empty() {
            self.selected = None;
            self.scroll_top = 0;
            return;
        }
        let last = self.rows.len() - 1;
        self.selected = Some(selected.unwrap_or(0).min(last));
        self.scroll_top = scroll_top.min(self.max_scroll());
        self.keep_selection_visible();
    }

    /// Window height used for scrolling math; never zero.
    fn window(&self) -> usize {
        self.visible_rows().max(1)
    }

    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.window())
    }

    fn keep_selection_visible(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };
        let window = self.window();
        if selected < self.scroll_top {
            self.scroll_top = selected;
        } else if selected >= self.scroll_top + window {
            self.scroll_top = selected + 1 - window;
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn move_up(&mut self) {
        if let Some(selected) = self.selected {
            self.selected = Some(selected.saturating_sub(1));
            self.keep_selection_visible();
        }
    }

    pub fn move_down(&mut self) {
        if let Some(selected) = self.selected {
            self.selected = Some((selected + 1).min(self.rows.len() - 1));
            self.keep_selection_visible();
        }
    }

    pub fn home(&mut self) {
        if self.selected.is_some() {
            self.selected = Some(0);
            self.scroll_top = 0;
        }
    }

    pub fn end(&mut self) {
        if self.selected.is_some() {
            self.selected = Some(self.rows.len() - 1);
            self.scroll_top = self.max_scroll();
        }
    }

    pub fn page_up(&mut self) {
        if let Some(selected) = self.selected {
            let page = self.window();
            self.selected = Some(selected.saturating_sub(page));
            self.scroll_top = self.scroll_top.saturating_sub(page);
            self.keep_selection_visible();
        }
    }

    pub fn page_down(&mut self) {
        if let Some(selected) = self.selected {
            let page = self.window();
            self.selected = Some((selected + page).min(self.rows.len() - 1));
            self.scroll_top = (self.scroll_top + page).min(self.max_scroll());
            self.keep_selection_visible();
        }
    }
}

impl<T> Component for Table<T> {
    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn place(&mut self, x: i32, y: i32) {
        self.geometry.x = x;
        self.geometry.y = y;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_focus(&mut self, path: Option<&[usize]>) {
        self.focused = path.is_some();
    }

    fn draw(&mut self, screen: &mut ScreenBuffer) {
        let Geometry { x, y, width, .. } = self.geometry;
        let border = if self.focused { Color::Yellow } else { Color::Gray };
        Frame::new(self.geometry).color(border).draw(screen);

        let inner = usize::from(width.saturating_sub(2));
        let header: Vec<String> = self.columns.iter().map(|c| c.cell(&c.header)).collect();
        screen.write(x + 1, y + 1, &fit(&format!(" {}", header.join(" ")), inner), Color::Cyan, Color::Black);

        let visible = self.rows.iter().enumerate().skip(self.scroll_top).take(self.visible_rows());
        for (line, (index, row)) in visible.enumerate() {
            let text: Vec<String> = self
                .columns
                .iter()
                .zip(&row.cells)
                .map(|(column, cell)| column.cell(cell))
                .collect();
            let (fg, bg) = match (Some(index) == self.selected, self.focused) {
                (true, true) => (Color::Black, Color::Cyan),
                (true, false) => (Color::Black, Color::DarkGray),
                (false, _) => (row.color, Color::Black),
            };
            screen.write(x + 1, y + 2 + line as i32, &fit(&format!(" {}", text.join(" ")), inner), fg, bg);
        }

        if self.rows.is_empty() {
            screen.write(x + 2, y + 2, "(no products)", Color::DarkGray, Color::Black);
        } else if let Some(selected) = self.selected {
            let position = format!(" {}/{} ", selected + 1, self.rows.len());
            let col = x + i32::from(width) - 2 - display_width(&position) as i32;
            screen.write(col, self.geometry.bottom() - 1, &position, border, Color::Black);
        }
    }

    /// List navigation keys. `Up` on the first row is declined so the owner
    /// can move focus back out of the table.
    fn handle_key(&mut self, key: Key) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };
        match key {
            Key::Up if selected == 0 => return false,
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Home => self.home(),
            Key::End => self.end(),
            Key::PageUp => self.page_up(),
            Key::PageDown => self.page_down(),
            _ => return false,
        }
        true
    }
}
