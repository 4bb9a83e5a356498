//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use taskdeck_protocol::{Message, SortType};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Only key presses are handled; releases, repeats, mouse and resize events
/// produce `None`.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_to_message(*key),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Esc` | Key-down `"Escape"` for keyboard listeners |
/// | `Down` or `Tab` | Focus next |
/// | `Up` or `Shift+Tab` | Focus previous |
/// | `Enter` or `Space` | Activate the focused element |
/// | `1` / `2` / `3` | Sort by default / date up / date down |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::KeyDown {
            key: "Escape".to_string(),
        }),

        KeyCode::Down | KeyCode::Tab => Some(Message::FocusNext),
        KeyCode::Up | KeyCode::BackTab => Some(Message::FocusPrev),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Activate),

        KeyCode::Char('1') => Some(select_sort(SortType::Default)),
        KeyCode::Char('2') => Some(select_sort(SortType::DateUp)),
        KeyCode::Char('3') => Some(select_sort(SortType::DateDown)),

        _ => None,
    }
}

fn select_sort(sort_type: SortType) -> Message {
    Message::SelectSort {
        key: sort_type.key().to_string(),
    }
}
