//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of the sort control in rows.
pub const SORT_HEIGHT: u16 = 3;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and content (2 rows for the description
/// and the due-date/flags line).
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Height of the empty-state banner in rows.
pub const NO_CARDS_HEIGHT: u16 = 3;

/// Height of the load-more control in rows.
pub const LOAD_MORE_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering.
///
/// Header, status bar and one full card.
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + STATUS_BAR_HEIGHT + TASK_CARD_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Wide enough for the sort control's three labels.
pub const MIN_WIDTH: u16 = 60;
