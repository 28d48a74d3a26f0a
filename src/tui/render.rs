//! # Screen Buffer
//!
//! Double-buffered character grid. Components write into the *staging* grid;
//! `flush` compares it with the *committed* grid (what is physically on
//! screen) and sends only the cells whose character or colors changed.
//!
//! ```text
//!   draw() ──write──▶ staging ──┐
//!                               ├── diff ──▶ Backend::draw(changed cells)
//!              committed ◀──────┘   then committed := staging
//! ```
//!
//! Output cost per frame is proportional to what changed, not to the
//! screen area, so redrawing on every keystroke stays flicker-free.
//!
//! The physical sink is any ratatui [`Backend`]: `CrosstermBackend` at
//! runtime, `TestBackend` in tests.

use ratatui::backend::Backend;
use ratatui::buffer::Cell as BackendCell;
use ratatui::layout::Size;
use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

/// One character position: glyph plus colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Gray,
            bg: Color::Black,
        }
    }
}

impl Cell {
    /// Marks the right half of a double-width glyph. The terminal draws the
    /// glyph over both cells, so this one carries no symbol of its own.
    pub const CONTINUATION: char = '\0';

    pub fn is_continuation(&self) -> bool {
        self.ch == Self::CONTINUATION
    }

    fn to_backend(self) -> BackendCell {
        let mut cell = BackendCell::default();
        if self.is_continuation() {
            cell.set_symbol("");
        } else {
            cell.set_char(self.ch);
        }
        cell.set_fg(self.fg).set_bg(self.bg);
        cell
    }
}

pub struct ScreenBuffer {
    width: u16,
    height: u16,
    committed: Vec<Cell>,
    staging: Vec<Cell>,
}

impl ScreenBuffer {
    pub fn new(size: Size) -> Self {
        let len = usize::from(size.width) * usize::from(size.height);
        Self {
            width: size.width,
            height: size.height,
            committed: vec![Cell::default(); len],
            staging: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Reallocate both grids for the new dimensions, cleared to default.
    ///
    /// The caller must also clear the physical screen so that it matches
    /// the (all default) committed grid.
    pub fn resize(&mut self, size: Size) {
        *self = Self::new(size);
    }

    /// Reset the staging grid to default cells. Called at the start of
    /// every frame.
    pub fn clear(&mut self) {
        self.staging.fill(Cell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    /// Write `text` starting at `(x, y)` into staging.
    ///
    /// Characters falling outside the grid are silently dropped; the rest of
    /// the string is still written. Zero-width and control characters are
    /// skipped without advancing the column. A double-width character takes
    /// its cell plus a continuation cell; if only one half would be on the
    /// grid, that half is blanked instead.
    pub fn write(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color) {
        let mut col = x;
        for ch in text.chars() {
            let width = match ch.width() {
                Some(w) if w > 0 => w,
                _ => continue,
            };
            let blank = Cell { ch: ' ', fg, bg };
            if width == 1 {
                if let Some(idx) = self.index(col, y) {
                    self.put(idx, Cell { ch, fg, bg });
                }
            } else {
                match (self.index(col, y), self.index(col.saturating_add(1), y)) {
                    (Some(head), Some(tail)) => {
                        self.put(head, Cell { ch, fg, bg });
                        self.put(
                            tail,
                            Cell {
                                ch: Cell::CONTINUATION,
                                fg,
                                bg,
                            },
                        );
                    }
                    (Some(idx), None) | (None, Some(idx)) => self.put(idx, blank),
                    (None, None) => {}
                }
            }
            col = col.saturating_add(width as i32);
        }
    }

    /// Store one staged cell. Overwriting either half of a double-width
    /// glyph blanks the other half.
    fn put(&mut self, idx: usize, cell: Cell) {
        let x = idx % usize::from(self.width);
        if !cell.is_continuation() && self.staging[idx].is_continuation() && x > 0 {
            self.staging[idx - 1].ch = ' ';
        }
        if x + 1 < usize::from(self.width) && self.staging[idx + 1].is_continuation() {
            self.staging[idx + 1].ch = ' ';
        }
        self.staging[idx] = cell;
    }

    /// Paint a rectangle of blank cells with the given background.
    pub fn fill(&mut self, x: i32, y: i32, width: u16, height: u16, bg: Color) {
        let blank = " ".repeat(usize::from(width));
        for row in 0..i32::from(height) {
            self.write(x, y + row, &blank, Color::Gray, bg);
        }
    }

    /// Staged cell at `(x, y)`.
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(i32::from(x), i32::from(y)).map(|i| self.staging[i])
    }

    /// Staged characters of row `y` (empty if out of bounds). Its display
    /// width is always the grid width.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = usize::from(y) * usize::from(self.width);
        self.staging[start..start + usize::from(self.width)]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }

    /// Whole staged frame, rows joined with `\n`.
    pub fn text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of cells `flush` would write right now.
    pub fn pending_changes(&self) -> usize {
        self.committed
            .iter()
            .zip(&self.staging)
            .filter(|(old, new)| old != new)
            .count()
    }

    /// Send every changed cell to `backend`, then commit staging.
    ///
    /// Returns the number of single-cell writes issued. Flushing an
    /// unchanged frame issues none.
    pub fn flush<B: Backend>(&mut self, backend: &mut B) -> Result<usize, B::Error> {
        let width = usize::from(self.width);
        let changes: Vec<(u16, u16, BackendCell)> = self
            .committed
            .iter()
            .zip(&self.staging)
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(i, (_, new))| ((i % width) as u16, (i / width) as u16, new.to_backend()))
            .collect();

        if !changes.is_empty() {
            backend.draw(changes.iter().map(|(x, y, cell)| (*x, *y, cell)))?;
        }
        self.committed.copy_from_slice(&self.staging);
        Ok(changes.len())
    }
}
