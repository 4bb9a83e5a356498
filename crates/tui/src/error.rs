//! Error types for the taskdeck-tui crate.
//!
//! The board performs no I/O, so every error here is a broken contract
//! between a presenter and the node tree rather than a runtime condition.

use thiserror::Error;

use crate::dom::NodeId;

/// Errors raised by node tree operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The node does not exist (never created, or already destroyed).
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The node must be mounted for this operation.
    #[error("node {0} is not mounted")]
    Detached(NodeId),

    /// The node must be detached for this operation.
    #[error("node {0} is already mounted")]
    AlreadyMounted(NodeId),

    /// Inserting the node would make it its own ancestor.
    #[error("cannot insert node {node} into its own subtree at {container}")]
    Cycle {
        /// The node being inserted.
        node: NodeId,
        /// The container it was inserted into.
        container: NodeId,
    },
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, Error>;
