//! Key-down listener registry.
//!
//! The host owns a single [`Keyboard`] and hands it to whoever needs to
//! listen for key presses. Registering returns a [`Subscription`] token that
//! cannot be cloned; releasing it consumes the token, so a listener is
//! released at most once and a leak is visible as a token still held.
//!
//! The registry is only the host's dispatcher. The capability belongs to the
//! item holding the token: a key press reaches an item only while its own
//! subscription is live, and items never see each other's listeners.
//!
//! # Examples
//!
//! ```
//! use taskdeck_tui::keyboard::{Keyboard, is_escape};
//!
//! let mut keyboard = Keyboard::new();
//! let subscription = keyboard.subscribe();
//! assert_eq!(keyboard.len(), 1);
//!
//! assert!(keyboard.unsubscribe(subscription));
//! assert!(keyboard.is_empty());
//! assert!(is_escape("Esc"));
//! ```

use std::collections::BTreeSet;

/// Identifier of a live key-down listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Proof of a live key-down registration.
///
/// Hand it back to [`Keyboard::unsubscribe`] to release the listener.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a subscription leaves the listener registered"]
pub struct Subscription {
    id: ListenerId,
}

impl Subscription {
    /// Returns the id of the registered listener.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

/// Registry of key-down listeners.
#[derive(Debug, Default)]
pub struct Keyboard {
    listeners: BTreeSet<ListenerId>,
    next_id: u64,
}

impl Keyboard {
    /// Creates a registry with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener.
    pub fn subscribe(&mut self) -> Subscription {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id);
        Subscription { id }
    }

    /// Releases a listener.
    ///
    /// Returns `true` if the listener was still registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.listeners.remove(&subscription.id)
    }

    /// Returns `true` if the listener is registered.
    #[must_use]
    pub fn is_listening(&self, id: ListenerId) -> bool {
        self.listeners.contains(&id)
    }

    /// Returns the live listeners in registration order.
    ///
    /// The result is a snapshot: listeners may unsubscribe while the caller
    /// walks it.
    #[must_use]
    pub fn listeners(&self) -> Vec<ListenerId> {
        self.listeners.iter().copied().collect()
    }

    /// Returns the number of live listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Returns `true` for the escape key, under its current or legacy name.
#[must_use]
pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
