//! Screen regions shared by every view.
//!
//! ```text
//! ┌─ Menu ───┐┌─ Title ─────────────────────┐
//! │          ││                             │
//! │ sidebar  ││ content                     │
//! │          ││                             │
//! └──────────┘└─────────────────────────────┘
//!  status line
//! ```

use ratatui::layout::Size;

use crate::tui::component::Geometry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub sidebar: Geometry,
    pub content: Geometry,
    pub status: Geometry,
}

/// Split the terminal. The sidebar never takes more than half the width.
pub fn split(size: Size, sidebar_width: u16) -> Regions {
    let body = size.height.saturating_sub(1);
    let sidebar_width = sidebar_width.min(size.width / 2);
    Regions {
        sidebar: Geometry::new(0, 0, sidebar_width, body),
        content: Geometry::new(
            i32::from(sidebar_width),
            0,
            size.width - sidebar_width,
            body,
        ),
        status: Geometry::new(0, i32::from(body), size.width, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_standard_terminal() {
        let r = split(Size::new(100, 30), 25);
        assert_eq!(r.sidebar, Geometry::new(0, 0, 25, 29));
        assert_eq!(r.content, Geometry::new(25, 0, 75, 29));
        assert_eq!(r.status, Geometry::new(0, 29, 100, 1));
    }

    #[test]
    fn test_narrow_terminal_caps_sidebar() {
        let r = split(Size::new(30, 10), 25);
        assert_eq!(r.sidebar.width, 15);
        assert_eq!(r.content.x, 15);
        assert_eq!(r.content.width, 15);
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let r = split(Size::new(0, 0), 25);
        assert_eq!(r.sidebar.width, 0);
        assert_eq!(r.content.width, 0);
        assert_eq!(r.status.y, 0);
    }
}
