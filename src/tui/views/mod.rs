//! # Views
//!
//! A view is one screen: the shared [`Shell`] chrome (menu, content frame,
//! status line) plus its own content components.
//!
//! ## Lifecycle
//!
//! ```text
//!   router::build(index, ctx, session) ──▶ view
//!                                           │ handle_input(key)
//!                        ┌──────────────────┼──────────────────┐
//!                        ▼                  ▼                  ▼
//!                      Stay        Replace(new view)         Exit
//! ```
//!
//! Views never share state. Everything a new view needs from its
//! predecessor travels in a [`ViewSession`]: a fresh one for menu
//! transitions, the old view's own for a resize rebuild.

pub mod about;
pub mod add_product;
pub mod delete_product;
pub mod home;
pub mod picker;
pub mod router;
pub mod shell;
pub mod show_products;
pub mod update_product;

use std::fmt;

use ratatui::layout::Size;

use crate::core::config::DisplaySettings;
use crate::core::inventory::DataSource;
use crate::core::product::Product;
use crate::tui::event::Key;
use crate::tui::focus::FocusGroup;
use crate::tui::render::ScreenBuffer;

pub use shell::Shell;

pub trait View {
    /// Menu entry this view belongs to.
    fn index(&self) -> usize;

    /// Draw the whole frame. Returns where the terminal cursor should be,
    /// or `None` to hide it.
    fn draw(&mut self, screen: &mut ScreenBuffer) -> Option<(i32, i32)>;

    fn handle_input(&mut self, key: Key, data: &mut dyn DataSource) -> Transition;

    /// Snapshot for rebuilding this view (e.g. after a resize).
    fn session(&self) -> ViewSession;
}

/// Result of handling one key.
pub enum Transition {
    Stay,
    Replace(Box<dyn View>),
    /// The Exit menu entry was chosen.
    Exit,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Stay => write!(f, "Stay"),
            Transition::Replace(view) => write!(f, "Replace({})", router::title(view.index())),
            Transition::Exit => write!(f, "Exit"),
        }
    }
}

/// State handed from one view instance to the next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSession {
    pub nav_index: usize,
    pub group: FocusGroup,
    pub content_index: usize,
    pub scroll_top: usize,
    pub selected: Option<usize>,
    pub query: String,
    /// In-progress form values.
    pub draft: Option<Product>,
}

impl ViewSession {
    /// Session for a view reached from the menu: focus starts in its
    /// content (if it has any) with everything else fresh.
    pub fn entering(nav_index: usize) -> Self {
        Self {
            nav_index,
            group: FocusGroup::Content,
            ..Self::default()
        }
    }
}

/// What a view constructor gets to look at.
pub struct ViewContext<'a> {
    pub size: Size,
    pub settings: &'a DisplaySettings,
    pub data: &'a dyn DataSource,
}

/// `[i]` as a focus path, or `None` when nothing in that group has focus.
pub(crate) fn focus_path(slot: Option<usize>) -> Option<[usize; 1]> {
    slot.map(|i| [i])
}
