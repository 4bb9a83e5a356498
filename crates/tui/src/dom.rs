//! Render primitives: an arena of owned nodes.
//!
//! Every view owns exactly one node in a [`NodeTree`]. A node is either
//! mounted (it has a parent) or detached; the tree never reclaims a node on
//! its own, views free theirs with [`NodeTree::destroy`].
//!
//! Detachment is idempotent: [`NodeTree::remove`] on a detached node does
//! nothing. Replacement is strict: [`NodeTree::replace`] requires the old node
//! to be mounted and the new one detached, and reports a typed error otherwise.
//!
//! # Examples
//!
//! ```
//! use taskdeck_tui::dom::{Element, NodeTree, RenderPosition};
//!
//! let mut tree = NodeTree::new();
//! let body = tree.create(Element::Body);
//! let board = tree.create(Element::Board);
//! let list = tree.create(Element::CardList);
//!
//! tree.render(body, board, RenderPosition::BeforeEnd).unwrap();
//! tree.render(board, list, RenderPosition::BeforeEnd).unwrap();
//! assert_eq!(tree.outline(body), "body\n  board\n    list\n");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use taskdeck_protocol::SortType;

use crate::error::{Error, Result};
use crate::view::CardTemplate;

/// Handle to a node in a [`NodeTree`].
///
/// Ids are allocated monotonically and never reused, so a stale handle can
/// only ever point at nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a handle from a raw index.
    #[must_use]
    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a node is inserted relative to a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPosition {
    /// Immediately before the container, as its previous sibling.
    BeforeBegin,
    /// As the container's first child.
    AfterBegin,
    /// As the container's last child.
    #[default]
    BeforeEnd,
    /// Immediately after the container, as its next sibling.
    AfterEnd,
}

/// The content of a node: one variant per view template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// The host container.
    Body,
    /// The board shell.
    Board,
    /// The sort control, showing the active mode.
    Sort {
        /// The sort mode currently applied.
        active: SortType,
    },
    /// The container holding task rows.
    CardList,
    /// The empty-state banner.
    NoCards,
    /// The "load more" control.
    LoadMore,
    /// A task in read-only presentation.
    Card(CardTemplate),
    /// A task in edit presentation.
    CardEdit(CardTemplate),
}

impl Element {
    /// Returns `true` for elements the user can interact with.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(
            self,
            Self::Sort { .. } | Self::LoadMore | Self::Card(_) | Self::CardEdit(_)
        )
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body => f.write_str("body"),
            Self::Board => f.write_str("board"),
            Self::Sort { active } => write!(f, "sort [{}]", active.key()),
            Self::CardList => f.write_str("list"),
            Self::NoCards => f.write_str("no-cards"),
            Self::LoadMore => f.write_str("load-more"),
            Self::Card(template) => {
                write!(f, "card {:?}", template.description)?;
                if !template.due_date.is_empty() {
                    write!(f, " {}", template.due_date)?;
                }
                Ok(())
            }
            Self::CardEdit(template) => write!(f, "card-edit {:?}", template.description),
        }
    }
}

#[derive(Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena of nodes forming one or more trees.
#[derive(Debug, Default)]
pub struct NodeTree {
    nodes: BTreeMap<NodeId, Node>,
    next_id: usize,
}

impl NodeTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node holding `element`.
    pub fn create(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                element,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    /// Returns `true` if the node exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the element of a node.
    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(&id).map(|node| &node.element)
    }

    /// Returns the element of a node for in-place updates.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(&id).map(|node| &mut node.element)
    }

    /// Returns the parent of a node, if it is mounted.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    /// Returns the children of a node, in order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    /// Returns `true` if the node has a parent.
    #[must_use]
    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.parent(id).is_some()
    }

    /// Inserts `node` relative to `container`.
    ///
    /// A node that is already mounted elsewhere is moved.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is unknown, if `container` has no
    /// parent for a sibling position, or if `node` is an ancestor of
    /// `container`.
    pub fn render(
        &mut self,
        container: NodeId,
        node: NodeId,
        position: RenderPosition,
    ) -> Result<()> {
        self.ensure(container)?;
        self.ensure(node)?;
        if node == container || self.is_ancestor(node, container) {
            return Err(Error::Cycle { node, container });
        }

        let parent = match position {
            RenderPosition::AfterBegin | RenderPosition::BeforeEnd => container,
            RenderPosition::BeforeBegin | RenderPosition::AfterEnd => {
                self.parent(container).ok_or(Error::Detached(container))?
            }
        };

        self.detach(node);
        let index = match position {
            RenderPosition::AfterBegin => 0,
            RenderPosition::BeforeEnd => usize::MAX,
            RenderPosition::BeforeBegin => self.index_in_parent(parent, container),
            RenderPosition::AfterEnd => self.index_in_parent(parent, container) + 1,
        };
        self.attach(parent, node, index);
        Ok(())
    }

    /// Puts `new` in place of `old`, which becomes detached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detached`] if `old` is not mounted and
    /// [`Error::AlreadyMounted`] if `new` is.
    pub fn replace(&mut self, new: NodeId, old: NodeId) -> Result<()> {
        self.ensure(new)?;
        self.ensure(old)?;
        let parent = self.parent(old).ok_or(Error::Detached(old))?;
        if self.is_mounted(new) {
            return Err(Error::AlreadyMounted(new));
        }

        let index = self.index_in_parent(parent, old);
        if let Some(slot) = self
            .nodes
            .get_mut(&parent)
            .and_then(|node| node.children.get_mut(index))
        {
            *slot = new;
        }
        self.set_parent(old, None);
        self.set_parent(new, Some(parent));
        Ok(())
    }

    /// Detaches a node from its parent.
    ///
    /// Returns `true` if the node was mounted. Unknown and detached nodes are
    /// left alone.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.detach(id)
    }

    /// Detaches a node and frees it together with its whole subtree.
    pub fn destroy(&mut self, id: NodeId) {
        self.detach(id);
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                pending.extend(node.children);
            }
        }
    }

    /// Destroys every child of a node.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = self.children(id).to_vec();
        for child in children {
            self.destroy(child);
        }
    }

    /// Returns the nodes below `root` in document order, `root` excluded.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut pending: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            result.push(next);
            pending.extend(self.children(next).iter().rev());
        }
        result
    }

    /// Returns the first node below `root` whose element matches.
    #[must_use]
    pub fn find(&self, root: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.element(*id).is_some_and(&predicate))
    }

    /// Renders the subtree at `root` as indented text, one node per line.
    #[must_use]
    pub fn outline(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.write_outline(root, 0, &mut out);
        out
    }

    fn write_outline(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.nodes.get(&id) else {
            return;
        };
        out.push_str(&"  ".repeat(depth));
        out.push_str(&node.element.to_string());
        out.push('\n');
        for child in &node.children {
            self.write_outline(*child, depth + 1, out);
        }
    }

    fn ensure(&self, id: NodeId) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownNode(id))
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    fn index_in_parent(&self, parent: NodeId, child: NodeId) -> usize {
        self.children(parent)
            .iter()
            .position(|id| *id == child)
            .unwrap_or(0)
    }

    fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = parent;
        }
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, index: usize) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            let index = index.min(node.children.len());
            node.children.insert(index, child);
        }
        self.set_parent(child, Some(parent));
    }

    fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|child| *child != id);
        }
        self.set_parent(id, None);
        true
    }
}
