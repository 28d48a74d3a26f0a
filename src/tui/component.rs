use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::event::Key;
use crate::tui::render::ScreenBuffer;

/// Position and size of a component on the character grid.
///
/// `x`/`y` are assigned by the owning container every frame; components
/// never keep an absolute position across a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height)
    }

    /// Shrink by one cell on every side.
    pub fn inner(&self) -> Geometry {
        Geometry {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }
}

/// Validation state of an editable field.
///
/// Changes only on an explicit save attempt, never while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    #[default]
    Pristine,
    Valid,
    Invalid,
}

/// A visual element on the character grid.
///
/// Every component has a geometry, a focus flag, and draws itself into the
/// staging grid. Only the renderer touches the terminal.
///
/// # Focus
///
/// Focus is routed top-down with [`Component::set_focus`]. A `path` of
/// `None` clears focus on the component and everything below it; `Some(&[])`
/// focuses the component itself; `Some(&[i, ..])` lets composites forward the
/// rest of the path to child `i`. Leaves ignore anything past the first level.
pub trait Component {
    fn geometry(&self) -> Geometry;

    /// Move the component. Called by containers before each draw.
    fn place(&mut self, x: i32, y: i32);

    fn has_focus(&self) -> bool;

    fn set_focus(&mut self, path: Option<&[usize]>);

    fn draw(&mut self, screen: &mut ScreenBuffer);

    /// Handle a key. Returns `true` if the key was consumed.
    ///
    /// Decorative components keep the default, which ignores everything.
    fn handle_key(&mut self, key: Key) -> bool {
        let _ = key;
        false
    }
}

/// A component that turns keys into higher-level events for its owner.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a `Key` and optionally return a high-level event.
    fn handle_event(&mut self, key: Key) -> Option<Self::Event>;
}

/// Terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Pad or cut `text` to exactly `width` columns. A double-width character
/// that would straddle the limit is dropped and replaced by padding.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Keep the tail of `text` visible within `width` columns, prefixing "..."
/// when cut.
pub fn fit_tail(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return ".".repeat(width);
    }
    let room = width - 3;
    let mut used = 0;
    let mut start = text.len();
    for (i, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        start = i;
    }
    format!("...{}", &text[start..])
}
