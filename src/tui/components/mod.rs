//! # TUI Components
//!
//! Every visual element implements the [`Component`] trait: a geometry,
//! a focus flag, and a `draw` into the staging grid.
//!
//! ## Component Kinds
//!
//! ### Decorative
//!
//! Never focused, ignore keys:
//! - `Frame`: box-drawing border with optional title
//! - `Label`: single line of static text
//!
//! ### Leaves
//!
//! Take focus and react to keys:
//! - `Button`: fires on Enter
//! - `TextField`, `NumericField`: boxed values edited through the modal editor
//! - `SearchField`: live filter, edits in place
//!
//! ### Composites
//!
//! Own children and forward focus paths to them:
//! - `Table`: scrollable rows with payload tags
//! - `ProductForm`: scrolling field list plus pinned buttons
//! - `SideBar`: the navigation menu
//! - `Dialog`: the single modal overlay
//!
//! ## Placement
//!
//! Containers call `place` on their children before every draw. No
//! component keeps an absolute position across a resize; views are rebuilt
//! from scratch when the terminal size changes.
//!
//! [`Component`]: crate::tui::component::Component

pub mod button;
pub mod dialog;
pub mod form;
pub mod frame;
pub mod label;
pub mod numeric_field;
pub mod search_field;
pub mod side_bar;
pub mod table;
pub mod text_field;

pub use button::Button;
pub use dialog::{Dialog, DialogEvent, DialogKind};
pub use form::{FormEvent, ProductForm};
pub use frame::Frame;
pub use label::Label;
pub use numeric_field::NumericField;
pub use search_field::{SearchEvent, SearchField};
pub use side_bar::SideBar;
pub use table::{Column, Row, Table};
pub use text_field::TextField;
