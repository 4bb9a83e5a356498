//! Host input messages.
//!
//! This module defines the message enum produced by the terminal input
//! handler and consumed by the application loop.

use serde::{Deserialize, Serialize};

/// Messages that represent user input in the terminal host.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Message;
///
/// let msg = Message::FocusNext;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Move focus to the next interactive element.
    FocusNext,
    /// Move focus to the previous interactive element.
    FocusPrev,
    /// Activate the focused element (click, or submit on an edit form).
    Activate,
    /// Pick a sort mode on the sort control.
    SelectSort {
        /// The sort key, as carried by the sort control.
        key: String,
    },
    /// A key press delivered to keyboard listeners.
    KeyDown {
        /// The key name, e.g. `"Escape"`.
        key: String,
    },
}

impl Message {
    /// Returns `true` if this message only moves focus.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Message;
    ///
    /// assert!(Message::FocusPrev.is_navigation());
    /// assert!(!Message::Activate.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::FocusNext | Self::FocusPrev)
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
