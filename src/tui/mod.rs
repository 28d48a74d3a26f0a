//! # TUI Adapter
//!
//! The terminal layer: owns the screen buffer and the active view, and runs
//! the blocking read → handle → draw → flush cycle.
//!
//! This is the only module that knows about crossterm. Output goes through
//! a ratatui [`Backend`], so the same [`App`] drives a real terminal or a
//! `TestBackend`.
//!
//! ## Frame Cycle
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │  size changed? ── yes ──▶ resize grids, clear screen,        │
//!   │       │                   rebuild view from its session      │
//!   │       ▼                                                      │
//!   │  clear staging ─▶ view.draw ─▶ flush diff ─▶ place cursor    │
//!   │       ▲                                                      │
//!   │       └──── view.handle_input(key) ◀── read_event (blocks)   │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no background work and no timers: the only suspension point is
//! the blocking key read.

pub mod component;
pub mod components;
pub mod editor;
pub mod event;
pub mod focus;
pub mod layout;
pub mod render;
pub mod views;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::SetCursorStyle;
use crossterm::execute;
use ratatui::backend::Backend;
use ratatui::layout::{Position, Size};

use crate::core::config::{DisplaySettings, ResolvedConfig};
use crate::core::inventory::{DataSource, Inventory};
use crate::tui::event::{Key, TuiEvent, read_event};
use crate::tui::render::ScreenBuffer;
use crate::tui::views::router::{self, HOME};
use crate::tui::views::{Transition, View, ViewContext, ViewSession};

/// Active view plus the screen it draws into.
pub struct App {
    view: Box<dyn View>,
    screen: ScreenBuffer,
    settings: DisplaySettings,
}

impl App {
    /// Start on the Home view, sized for `size`.
    pub fn new(size: Size, settings: DisplaySettings, data: &dyn DataSource) -> Self {
        let ctx = ViewContext {
            size,
            settings: &settings,
            data,
        };
        let view: Box<dyn View> = Box::new(views::home::HomeView::new(&ctx, ViewSession::entering(HOME)));
        Self {
            view,
            screen: ScreenBuffer::new(size),
            settings,
        }
    }

    pub fn view(&self) -> &dyn View {
        self.view.as_ref()
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    /// Handle one key. Returns `false` once the app should exit.
    pub fn handle_key(&mut self, key: Key, data: &mut dyn DataSource) -> bool {
        match self.view.handle_input(key, data) {
            Transition::Stay => true,
            Transition::Replace(next) => {
                info!("Switched to {}", router::title(next.index()));
                self.view = next;
                true
            }
            Transition::Exit => false,
        }
    }

    /// Rebuild the active view for the new terminal size. Grids are
    /// reallocated; the caller clears the physical screen.
    fn rebuild(&mut self, size: Size, data: &dyn DataSource) {
        debug!(
            "Terminal resized {}x{} -> {}x{}, rebuilding {}",
            self.screen.width(),
            self.screen.height(),
            size.width,
            size.height,
            router::title(self.view.index())
        );
        self.screen.resize(size);
        let ctx = ViewContext {
            size,
            settings: &self.settings,
            data,
        };
        if let Some(view) = router::build(self.view.index(), &ctx, self.view.session()) {
            self.view = view;
        }
    }

    /// Draw one frame to `backend`, writing only what changed.
    ///
    /// Returns the number of cells written.
    pub fn render<B: Backend>(&mut self, backend: &mut B, data: &dyn DataSource) -> Result<usize, B::Error> {
        let size = backend.size()?;
        if size != self.screen.size() {
            self.rebuild(size, data);
            backend.clear()?;
        }

        self.screen.clear();
        let cursor = self.view.draw(&mut self.screen);
        let written = self.screen.flush(backend)?;

        let position = cursor.and_then(|(x, y)| {
            let (x, y) = (u16::try_from(x).ok()?, u16::try_from(y).ok()?);
            (x < size.width && y < size.height).then_some(Position::new(x, y))
        });
        match position {
            Some(position) => {
                backend.set_cursor_position(position)?;
                backend.show_cursor()?;
            }
            None => backend.hide_cursor()?,
        }
        backend.flush()?;
        Ok(written)
    }
}

/// Restores the default cursor shape on exit.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), SetCursorStyle::SteadyBar)?;
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: &ResolvedConfig, data: &mut Inventory) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new().ok();
    let result = event_loop(terminal.backend_mut(), config.display.clone(), data);
    ratatui::restore();
    result
}

fn event_loop<B>(backend: &mut B, settings: DisplaySettings, data: &mut Inventory) -> std::io::Result<()>
where
    B: Backend<Error = std::io::Error>,
{
    let mut app = App::new(backend.size()?, settings, &*data);
    backend.clear()?;

    loop {
        app.render(backend, &*data)?;
        match read_event()? {
            TuiEvent::Key(key) => {
                if !app.handle_key(key, data) {
                    info!("Exit selected");
                    break;
                }
            }
            TuiEvent::Resize => {}
            TuiEvent::ForceQuit => {
                info!("Force quit (Ctrl+C)");
                break;
            }
        }
    }
    Ok(())
}
