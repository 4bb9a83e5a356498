//! Presenters: the state machines behind the board.
//!
//! - [`board`]: owns the task snapshots, sort mode and pagination cursor
//! - [`card`]: toggles one task between its row and its edit form

use taskdeck_protocol::SortType;

use crate::dom::NodeId;

pub mod board;
pub mod card;

pub use board::{BoardPresenter, CARD_COUNT_PER_STEP};
pub use card::{CardPresenter, Mode};

/// What a view asks the board presenter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Re-order the board.
    ChangeSortType(SortType),
    /// Reveal the next page of rows.
    LoadMore,
    /// Swap a card's row for its edit form. Carries the card's row node.
    OpenEditor(NodeId),
    /// Swap a card's edit form back for its row.
    CloseEditor(NodeId),
}
