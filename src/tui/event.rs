use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Logical key, independent of the terminal's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Tab,
    Backspace,
    Home,
    End,
    PageUp,
    PageDown,
    Plus,
    Minus,
    Char(char),
}

impl Key {
    /// The printable character this key produces, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Char(c) => Some(c),
            Key::Plus => Some('+'),
            Key::Minus => Some('-'),
            _ => None,
        }
    }

    /// Keys that move a selection within a list or table.
    pub fn is_list_navigation(self) -> bool {
        matches!(
            self,
            Key::Up | Key::Down | Key::Home | Key::End | Key::PageUp | Key::PageDown
        )
    }
}

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    /// Terminal dimensions changed; the loop re-measures on its next pass.
    Resize,
    /// Ctrl+C
    ForceQuit,
}

/// Block until the next event the UI cares about.
///
/// This is the only suspension point in the program.
pub fn read_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            // Windows reports releases too
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            let key = match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char('+')) => Key::Plus,
                (_, KeyCode::Char('-')) => Key::Minus,
                (_, KeyCode::Char(c)) => Key::Char(c),
                (_, KeyCode::Up) => Key::Up,
                (_, KeyCode::Down) => Key::Down,
                (_, KeyCode::Left) => Key::Left,
                (_, KeyCode::Right) => Key::Right,
                (_, KeyCode::Enter) => Key::Enter,
                (_, KeyCode::Esc) => Key::Escape,
                (_, KeyCode::Tab) => Key::Tab,
                (_, KeyCode::Backspace) => Key::Backspace,
                (_, KeyCode::Home) => Key::Home,
                (_, KeyCode::End) => Key::End,
                (_, KeyCode::PageUp) => Key::PageUp,
                (_, KeyCode::PageDown) => Key::PageDown,
                _ => return None,
            };
            Some(TuiEvent::Key(key))
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_plus_minus_are_logical_keys() {
        assert_eq!(translate(press(KeyCode::Char('+'), KeyModifiers::SHIFT)), Some(TuiEvent::Key(Key::Plus)));
        assert_eq!(translate(press(KeyCode::Char('-'), KeyModifiers::NONE)), Some(TuiEvent::Key(Key::Minus)));
    }

    #[test]
    fn test_ctrl_c_forces_quit() {
        assert_eq!(translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(TuiEvent::ForceQuit));
        assert_eq!(translate(press(KeyCode::Char('c'), KeyModifiers::NONE)), Some(TuiEvent::Key(Key::Char('c'))));
    }

    #[test]
    fn test_release_events_are_dropped() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(release), None);
    }

    #[test]
    fn test_resize_passes_through() {
        assert_eq!(translate(Event::Resize(100, 40)), Some(TuiEvent::Resize));
    }

    #[test]
    fn test_as_char() {
        assert_eq!(Key::Plus.as_char(), Some('+'));
        assert_eq!(Key::Char('x').as_char(), Some('x'));
        assert_eq!(Key::Enter.as_char(), None);
    }
}
