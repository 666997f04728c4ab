use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    /// Ctrl+C — quits regardless of mode.
    ForceQuit,
    /// Enter — submit search (Input mode) or open selection (Browse mode).
    Submit,
    /// Ctrl+R — fetch a random article.
    Random,
    Escape,
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap_or(false) {
        match event::read() {
            Ok(Event::Key(key_event)) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Random),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    _ => None,
                }
            }
            Ok(Event::Mouse(mouse_event)) => match mouse_event.kind {
                MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
                _ => None,
            },
            Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
