//! The sort control.

use taskdeck_protocol::SortType;

use crate::dom::{Element, NodeId, NodeTree};
use crate::presenter::Action;

use super::{Slot, UiEvent, View};

/// The control listing the sort modes and highlighting the active one.
#[derive(Debug)]
pub struct SortView {
    node: NodeId,
    on_sort_type_change: Slot<SortType>,
}

impl SortView {
    /// Creates the view with a detached node showing the default mode.
    pub fn new(tree: &mut NodeTree) -> Self {
        Self {
            node: tree.create(Element::Sort {
                active: SortType::default(),
            }),
            on_sort_type_change: Slot::default(),
        }
    }

    /// Sets the handler for a picked sort mode, replacing any previous one.
    pub fn set_sort_type_change_handler(&mut self, handler: impl Fn(SortType) -> Action + 'static) {
        self.on_sort_type_change.set(handler);
    }

    /// Highlights `sort_type` as the active mode.
    pub fn set_active(&self, tree: &mut NodeTree, sort_type: SortType) {
        if let Some(Element::Sort { active }) = tree.element_mut(self.node) {
            *active = sort_type;
        }
    }

    /// Maps an interaction with this view to an action.
    ///
    /// Unknown sort keys resolve to the default mode.
    #[must_use]
    pub fn handle(&self, event: &UiEvent) -> Option<Action> {
        match event {
            UiEvent::SortSelected(key) => self.on_sort_type_change.emit(SortType::from_key(key)),
            _ => None,
        }
    }
}

impl View for SortView {
    fn node(&self) -> NodeId {
        self.node
    }
}
