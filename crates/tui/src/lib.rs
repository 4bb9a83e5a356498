//! Terminal UI for the taskdeck application.
//!
//! This crate provides the task board: a presenter layer over an arena of
//! render nodes, and a Ratatui-based terminal host that draws the nodes and
//! feeds user input back to the presenters.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`dom`]: Node arena with mount, replace and detach primitives
//! - [`keyboard`]: Key-down listener registry with release tokens
//! - [`document`]: The host page bundling tree, keyboard and root container
//! - [`view`]: One node per view plus callback slots for user actions
//! - [`presenter`]: Board and card presenters
//! - [`app`]: Main application struct and run loop
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering of the document and the status bar
//!
//! # Example
//!
//! ```no_run
//! use taskdeck_protocol::dummy::dummy_tasks;
//! use taskdeck_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(&dummy_tasks())?;
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod document;
pub mod dom;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod layout;
pub mod presenter;
pub mod terminal;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use document::Document;
pub use error::{Error, Result};
pub use presenter::{BoardPresenter, CARD_COUNT_PER_STEP};
