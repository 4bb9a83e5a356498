//! Widget components for the taskdeck TUI.
//!
//! The widget system follows a functional rendering approach where each widget
//! is a pure function that renders state to a buffer. This enables easy testing
//! and composition.
//!
//! # Modules
//!
//! - [`document`]: Renders the node tree as a scrolling stack of blocks
//! - [`status_bar`]: Renders the footer with keybinding hints
//!
//! # Color Coding
//!
//! Card borders follow the task's [`CardColor`](taskdeck_protocol::CardColor);
//! overdue cards are drawn in red regardless of their color.

pub mod document;
pub mod status_bar;

// Re-export primary rendering functions for convenience
pub use document::{
    Placement, card_color, element_height, layout_document, render_document, scroll_offset,
};
pub use status_bar::render_status_bar;
