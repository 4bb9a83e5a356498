//! The board shell and its non-task fragments.

use crate::dom::{Element, NodeId, NodeTree};
use crate::presenter::Action;

use super::{Slot, UiEvent, View};

/// Text of the empty-state banner.
pub const NO_CARDS_MESSAGE: &str = "Click «ADD NEW TASK» in menu to create your first task";

/// The board shell holding the sort control, the list and the load-more control.
#[derive(Debug)]
pub struct BoardView {
    node: NodeId,
}

impl BoardView {
    /// Creates the view with a detached node.
    pub fn new(tree: &mut NodeTree) -> Self {
        Self {
            node: tree.create(Element::Board),
        }
    }
}

impl View for BoardView {
    fn node(&self) -> NodeId {
        self.node
    }
}

/// The container receiving task rows.
#[derive(Debug)]
pub struct CardListView {
    node: NodeId,
}

impl CardListView {
    /// Creates the view with a detached node.
    pub fn new(tree: &mut NodeTree) -> Self {
        Self {
            node: tree.create(Element::CardList),
        }
    }
}

impl View for CardListView {
    fn node(&self) -> NodeId {
        self.node
    }
}

/// The banner shown when no task qualifies for display.
#[derive(Debug)]
pub struct NoCardsView {
    node: NodeId,
}

impl NoCardsView {
    /// Creates the view with a detached node.
    pub fn new(tree: &mut NodeTree) -> Self {
        Self {
            node: tree.create(Element::NoCards),
        }
    }
}

impl View for NoCardsView {
    fn node(&self) -> NodeId {
        self.node
    }
}

/// The "load more" control.
#[derive(Debug)]
pub struct LoadMoreView {
    node: NodeId,
    on_click: Slot<()>,
}

impl LoadMoreView {
    /// Creates the view with a detached node and no click handler.
    pub fn new(tree: &mut NodeTree) -> Self {
        Self {
            node: tree.create(Element::LoadMore),
            on_click: Slot::default(),
        }
    }

    /// Sets the click handler, replacing any previous one.
    pub fn set_click_handler(&mut self, handler: impl Fn() -> Action + 'static) {
        self.on_click.set(move |()| handler());
    }

    /// Maps an interaction with this view to an action.
    #[must_use]
    pub fn handle(&self, event: &UiEvent) -> Option<Action> {
        match event {
            UiEvent::Click => self.on_click.emit(()),
            _ => None,
        }
    }
}

impl View for LoadMoreView {
    fn node(&self) -> NodeId {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_more_only_reacts_to_clicks() {
        let mut tree = NodeTree::new();
        let mut view = LoadMoreView::new(&mut tree);
        assert_eq!(view.handle(&UiEvent::Click), None);

        view.set_click_handler(|| Action::LoadMore);
        assert_eq!(view.handle(&UiEvent::Click), Some(Action::LoadMore));
        assert_eq!(view.handle(&UiEvent::Submit), None);
    }

    #[test]
    fn views_start_detached() {
        let mut tree = NodeTree::new();
        let board = BoardView::new(&mut tree);
        let no_cards = NoCardsView::new(&mut tree);

        assert!(!board.is_mounted(&tree));
        assert_eq!(tree.element(no_cards.node()), Some(&Element::NoCards));

        no_cards.destroy(&mut tree);
        assert_eq!(tree.len(), 1);
    }
}
