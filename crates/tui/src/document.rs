//! The host page: node tree, keyboard and root container.

use crate::dom::{Element, NodeId, NodeTree};
use crate::keyboard::Keyboard;

/// Everything a presenter needs from its host.
///
/// The document owns the node tree and the keyboard registry; presenters
/// borrow it for the duration of one operation.
///
/// # Examples
///
/// ```
/// use taskdeck_tui::Document;
///
/// let doc = Document::new();
/// assert_eq!(doc.tree.outline(doc.body()), "body\n");
/// assert!(doc.keyboard.is_empty());
/// ```
#[derive(Debug)]
pub struct Document {
    /// All nodes of the page.
    pub tree: NodeTree,
    /// Key-down listeners.
    pub keyboard: Keyboard,
    body: NodeId,
}

impl Document {
    /// Creates a document holding only its root container.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = NodeTree::new();
        let body = tree.create(Element::Body);
        Self {
            tree,
            keyboard: Keyboard::new(),
            body,
        }
    }

    /// Returns the root container.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Returns the interactive nodes below the root, in document order.
    #[must_use]
    pub fn interactive_nodes(&self) -> Vec<NodeId> {
        self.tree
            .descendants(self.body)
            .into_iter()
            .filter(|id| self.tree.element(*id).is_some_and(Element::is_interactive))
            .collect()
    }

    /// Renders the whole page as indented text.
    #[must_use]
    pub fn outline(&self) -> String {
        self.tree.outline(self.body)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
