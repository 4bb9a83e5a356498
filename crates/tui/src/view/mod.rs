//! Views: one owned node each, plus callback slots for user actions.
//!
//! A view never changes presenter state itself. When the host delivers a
//! [`UiEvent`] to one of its nodes, the view runs the matching [`Slot`] and
//! hands the resulting [`Action`] back to the caller.
//!
//! Each slot holds at most one callback; registering again replaces the
//! previous one. An empty slot drops the event.

use std::fmt;

use crate::dom::{NodeId, NodeTree};
use crate::presenter::Action;

pub mod board;
pub mod card;
pub mod sort;

pub use board::{BoardView, CardListView, LoadMoreView, NO_CARDS_MESSAGE, NoCardsView};
pub use card::{CardEditView, CardTemplate, CardView};
pub use sort::SortView;

/// A user interaction delivered to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The node was clicked.
    Click,
    /// The form at the node was submitted.
    Submit,
    /// A sort option was picked, carrying its raw key.
    SortSelected(String),
}

/// A single callback for one kind of user action.
pub struct Slot<T> {
    callback: Option<Box<dyn Fn(T) -> Action>>,
}

impl<T> Slot<T> {
    /// Installs the callback, replacing any previous one.
    pub fn set(&mut self, callback: impl Fn(T) -> Action + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Returns `true` if a callback is installed.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Runs the callback, if any.
    pub fn emit(&self, value: T) -> Option<Action> {
        self.callback.as_ref().map(|callback| callback(value))
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self { callback: None }
    }
}

impl<T> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("is_set", &self.is_set())
            .finish()
    }
}

/// Common behavior of every view.
pub trait View {
    /// Returns the node owned by the view.
    fn node(&self) -> NodeId;

    /// Returns `true` if the view's node is mounted.
    fn is_mounted(&self, tree: &NodeTree) -> bool {
        tree.is_mounted(self.node())
    }

    /// Detaches the view's node, keeping it for a later mount.
    fn remove(&self, tree: &mut NodeTree) -> bool {
        tree.remove(self.node())
    }

    /// Detaches and frees the view's node.
    fn destroy(self, tree: &mut NodeTree)
    where
        Self: Sized,
    {
        tree.destroy(self.node());
    }
}
