//! # Focus Coordination
//!
//! Per-view state machine deciding where each key goes.
//!
//! ```text
//!                 Enter / Right (same view)
//!   ┌────────────┐ ───────────────────────▶ ┌─────────┐
//!   │ Navigation │                          │ Content │  Tab/Down: next
//!   │  Up/Down   │ ◀─────────────────────── │         │  Up: previous
//!   └────────────┘       Left / Esc         └─────────┘  (both wrap)
//!         │
//!         └── Enter / Right (other entry) ──▶ Routed::Activate(index)
//! ```
//!
//! The coordinator only holds indices. The owning view pushes them into its
//! components with `set_focus` after every routed key, so the group being
//! left is always cleared in the same step that focuses the new one.

use crate::tui::event::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusGroup {
    #[default]
    Navigation,
    Content,
}

/// Where a key ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Consumed by the coordinator (focus moved, or ignored).
    Handled,
    /// Menu entry chosen; the view decides between re-entering its own
    /// content and transitioning.
    Activate(usize),
    /// Belongs to the focused content component.
    Content(Key),
}

#[derive(Debug, Clone)]
pub struct FocusCoordinator {
    group: FocusGroup,
    nav_index: usize,
    nav_len: usize,
    content_index: usize,
    content_len: usize,
}

impl FocusCoordinator {
    pub fn new(nav_len: usize, nav_index: usize, content_len: usize) -> Self {
        Self {
            group: FocusGroup::Navigation,
            nav_index: nav_index.min(nav_len.saturating_sub(1)),
            nav_len,
            content_index: 0,
            content_len,
        }
    }

    /// Resume a saved group and index. Views without focusable content
    /// always stay in Navigation.
    pub fn resume(mut self, group: FocusGroup, content_index: usize) -> Self {
        self.content_index = content_index;
        self.clamp();
        if group == FocusGroup::Content {
            self.enter_content();
        }
        self
    }

    pub fn group(&self) -> FocusGroup {
        self.group
    }

    pub fn nav_index(&self) -> usize {
        self.nav_index
    }

    pub fn content_index(&self) -> usize {
        self.content_index
    }

    pub fn content_len(&self) -> usize {
        self.content_len
    }

    /// Focused content slot, if Content has focus.
    pub fn content_focus(&self) -> Option<usize> {
        (self.group == FocusGroup::Content).then_some(self.content_index)
    }

    pub fn enter_content(&mut self) {
        if self.content_len > 0 {
            self.group = FocusGroup::Content;
        }
    }

    pub fn enter_navigation(&mut self) {
        self.group = FocusGroup::Navigation;
    }

    /// The content changed shape (e.g. a picker swapped for a form).
    pub fn set_content(&mut self, len: usize, index: usize) {
        self.content_len = len;
        self.content_index = index;
        self.clamp();
    }

    pub fn focus_content(&mut self, index: usize) {
        self.content_index = index;
        self.clamp();
        self.enter_content();
    }

    fn clamp(&mut self) {
        if self.content_len == 0 {
            self.content_index = 0;
            self.group = FocusGroup::Navigation;
        } else {
            self.content_index = self.content_index.min(self.content_len - 1);
        }
    }

    pub fn advance(&mut self) {
        if self.content_len > 0 {
            self.content_index = (self.content_index + 1) % self.content_len;
        }
    }

    pub fn retreat(&mut self) {
        if self.content_len > 0 {
            self.content_index = (self.content_index + self.content_len - 1) % self.content_len;
        }
    }

    /// Route one key.
    pub fn route(&mut self, key: Key) -> Routed {
        match self.group {
            FocusGroup::Navigation => match key {
                Key::Up if self.nav_len > 0 => {
                    self.nav_index = (self.nav_index + self.nav_len - 1) % self.nav_len;
                    Routed::Handled
                }
                Key::Down if self.nav_len > 0 => {
                    self.nav_index = (self.nav_index + 1) % self.nav_len;
                    Routed::Handled
                }
                Key::Enter | Key::Right => Routed::Activate(self.nav_index),
                _ => Routed::Handled,
            },
            FocusGroup::Content => match key {
                Key::Left | Key::Escape => {
                    self.enter_navigation();
                    Routed::Handled
                }
                Key::Tab | Key::Down => {
                    self.advance();
                    Routed::Handled
                }
                Key::Up => {
                    self.retreat();
                    Routed::Handled
                }
                other => Routed::Content(other),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_wraps_both_ways() {
        let mut focus = FocusCoordinator::new(7, 0, 3);
        focus.route(Key::Up);
        assert_eq!(focus.nav_index(), 6);
        focus.route(Key::Down);
        assert_eq!(focus.nav_index(), 0);
    }

    #[test]
    fn test_enter_and_right_activate() {
        let mut focus = FocusCoordinator::new(7, 2, 3);
        assert_eq!(focus.route(Key::Enter), Routed::Activate(2));
        assert_eq!(focus.route(Key::Right), Routed::Activate(2));
        // Activation itself never switches groups
        assert_eq!(focus.group(), FocusGroup::Navigation);
    }

    #[test]
    fn test_content_wraps_without_leaving_content() {
        let mut focus = FocusCoordinator::new(7, 0, 3).resume(FocusGroup::Content, 2);
        focus.route(Key::Tab);
        assert_eq!(focus.content_focus(), Some(0));
        focus.route(Key::Up);
        assert_eq!(focus.content_focus(), Some(2));
        focus.route(Key::Down);
        assert_eq!(focus.content_focus(), Some(0));
        assert_eq!(focus.nav_index(), 0);
    }

    #[test]
    fn test_left_and_escape_return_to_menu() {
        for key in [Key::Left, Key::Escape] {
            let mut focus = FocusCoordinator::new(7, 3, 2).resume(FocusGroup::Content, 1);
            assert_eq!(focus.route(key), Routed::Handled);
            assert_eq!(focus.group(), FocusGroup::Navigation);
            assert_eq!(focus.content_focus(), None);
        }
    }

    #[test]
    fn test_other_keys_pass_to_content() {
        let mut focus = FocusCoordinator::new(7, 0, 2).resume(FocusGroup::Content, 0);
        assert_eq!(focus.route(Key::Char('a')), Routed::Content(Key::Char('a')));
        assert_eq!(focus.route(Key::Enter), Routed::Content(Key::Enter));
        assert_eq!(focus.route(Key::Plus), Routed::Content(Key::Plus));
    }

    #[test]
    fn test_no_content_stays_in_navigation() {
        let mut focus = FocusCoordinator::new(7, 0, 0).resume(FocusGroup::Content, 4);
        assert_eq!(focus.group(), FocusGroup::Navigation);
        focus.enter_content();
        assert_eq!(focus.group(), FocusGroup::Navigation);
    }

    #[test]
    fn test_set_content_clamps_index() {
        let mut focus = FocusCoordinator::new(7, 0, 9).resume(FocusGroup::Content, 8);
        focus.set_content(2, 8);
        assert_eq!(focus.content_focus(), Some(1));
        focus.set_content(0, 0);
        assert_eq!(focus.group(), FocusGroup::Navigation);
    }
}
