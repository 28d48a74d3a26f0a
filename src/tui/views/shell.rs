//! # View Shell
//!
//! Chrome and focus plumbing every view shares: the side menu, the content
//! frame with the view's title, the bottom status line, and the
//! [`FocusCoordinator`] that decides between them.

use ratatui::layout::Size;
use ratatui::style::Color;

use crate::core::config::DisplaySettings;
use crate::core::inventory::DataSource;
use crate::tui::component::{Component, Geometry, fit};
use crate::tui::components::{Frame, SideBar};
use crate::tui::event::Key;
use crate::tui::focus::{FocusCoordinator, FocusGroup, Routed};
use crate::tui::layout::{self, Regions};
use crate::tui::render::ScreenBuffer;
use crate::tui::views::router::{self, MENU_ITEMS};
use crate::tui::views::{Transition, ViewContext, ViewSession, focus_path};

const NAVIGATION_HINT: &str = " ↑↓ move   Enter/→ open   Ctrl+C quit";
const CONTENT_HINT: &str = " Tab/↓ next   ↑ previous   Enter edit   Esc/← menu";

pub struct Shell {
    index: usize,
    size: Size,
    regions: Regions,
    settings: DisplaySettings,
    side_bar: SideBar,
    pub focus: FocusCoordinator,
    status: Option<(String, Color)>,
}

impl Shell {
    pub fn new(index: usize, ctx: &ViewContext<'_>, session: &ViewSession, content_len: usize) -> Self {
        let regions = layout::split(ctx.size, ctx.settings.sidebar_width);
        let focus = FocusCoordinator::new(MENU_ITEMS.len(), session.nav_index, content_len)
            .resume(session.group, session.content_index);
        let mut shell = Self {
            index,
            size: ctx.size,
            regions,
            settings: ctx.settings.clone(),
            side_bar: SideBar::new(regions.sidebar, &MENU_ITEMS, index),
            focus,
            status: None,
        };
        shell.sync_side_bar();
        shell
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Usable area inside the content frame.
    pub fn content_area(&self) -> Geometry {
        self.regions.content.inner()
    }

    /// Content slot that has focus, if the content group is active.
    pub fn content_focus(&self) -> Option<usize> {
        self.focus.content_focus()
    }

    pub fn set_status(&mut self, message: impl Into<String>, color: Color) {
        self.status = Some((message.into(), color));
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    /// Route a key through the coordinator and keep the menu's focus in
    /// step with it.
    pub fn route(&mut self, key: Key) -> Routed {
        let routed = self.focus.route(key);
        self.sync_side_bar();
        routed
    }

    /// Push the coordinator's navigation state into the menu.
    pub fn sync_side_bar(&mut self) {
        let path = (self.focus.group() == FocusGroup::Navigation).then_some([self.focus.nav_index()]);
        self.side_bar.set_focus(path.as_ref().map(|p| &p[..]));
        self.side_bar.highlight(self.focus.nav_index());
    }

    /// A menu entry was chosen: re-enter our own content, or build the
    /// target view.
    pub fn activate(&mut self, target: usize, data: &dyn DataSource) -> Transition {
        if target == self.index {
            self.focus.enter_content();
            self.sync_side_bar();
            return Transition::Stay;
        }
        log::debug!("View transition: {} -> {}", router::title(self.index), router::title(target));
        let ctx = ViewContext {
            size: self.size,
            settings: &self.settings,
            data,
        };
        match router::build(target, &ctx, ViewSession::entering(target)) {
            Some(view) => Transition::Replace(view),
            None => Transition::Exit,
        }
    }

    /// The shared part of a session; views add their own fields.
    pub fn session(&self) -> ViewSession {
        ViewSession {
            nav_index: self.focus.nav_index(),
            group: self.focus.group(),
            content_index: self.focus.content_index(),
            ..ViewSession::default()
        }
    }

    /// Focus path for the view's content root.
    pub fn content_path(&self) -> Option<[usize; 1]> {
        focus_path(self.content_focus())
    }

    pub fn draw(&mut self, screen: &mut ScreenBuffer, title: &str) {
        self.side_bar.draw(screen);

        let border = if self.focus.group() == FocusGroup::Content {
            Color::Yellow
        } else {
            Color::Gray
        };
        Frame::new(self.regions.content).color(border).title(title).draw(screen);

        let status = self.regions.status;
        let (text, fg) = match &self.status {
            Some((message, color)) => (format!(" {message}"), *color),
            None if self.focus.group() == FocusGroup::Navigation => (NAVIGATION_HINT.to_string(), Color::DarkGray),
            None => (CONTENT_HINT.to_string(), Color::DarkGray),
        };
        screen.write(status.x, status.y, &fit(&text, usize::from(status.width)), fg, Color::Black);
    }
}
