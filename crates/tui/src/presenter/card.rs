//! Per-task presenter toggling between row and edit form.
//!
//! While a card is in [`Mode::Edit`] it holds exactly one keyboard
//! subscription, released on every path back to [`Mode::Display`]: escape,
//! submit, or destruction of the card.

use taskdeck_protocol::{Task, TaskId};
use tracing::trace;

use crate::document::Document;
use crate::dom::{NodeId, RenderPosition};
use crate::error::Result;
use crate::keyboard::{ListenerId, Subscription, is_escape};
use crate::view::{CardEditView, CardView, UiEvent, View};

use super::Action;

/// Which presentation of the task is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The read-only row.
    #[default]
    Display,
    /// The edit form.
    Edit,
}

/// Presenter for one rendered task.
#[derive(Debug)]
pub struct CardPresenter {
    task: Task,
    card: CardView,
    card_edit: CardEditView,
    mode: Mode,
    escape: Option<Subscription>,
}

impl CardPresenter {
    /// Creates both views for `task` and wires their callbacks.
    ///
    /// Nothing is mounted until [`render`](Self::render) is called.
    pub fn new(doc: &mut Document, task: Task) -> Self {
        let mut card = CardView::new(&mut doc.tree, &task);
        let mut card_edit = CardEditView::new(&mut doc.tree, &task);
        let row = card.node();
        card.set_edit_click_handler(move || Action::OpenEditor(row));
        card_edit.set_form_submit_handler(move || Action::CloseEditor(row));

        Self {
            task,
            card,
            card_edit,
            mode: Mode::Display,
            escape: None,
        }
    }

    /// Returns the task shown by this card.
    #[must_use]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the task's id.
    #[must_use]
    pub fn task_id(&self) -> TaskId {
        self.task.id
    }

    /// Returns the node of the read-only row.
    ///
    /// Unlike [`node`](Self::node) it does not change with the mode, so it
    /// names this card even when several cards show the same task.
    #[must_use]
    pub fn row(&self) -> NodeId {
        self.card.node()
    }

    /// Returns the current presentation.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the node currently mounted for this task.
    #[must_use]
    pub fn node(&self) -> NodeId {
        match self.mode {
            Mode::Display => self.card.node(),
            Mode::Edit => self.card_edit.node(),
        }
    }

    /// Returns `true` if `target` is one of this card's nodes.
    #[must_use]
    pub fn owns(&self, target: NodeId) -> bool {
        target == self.card.node() || target == self.card_edit.node()
    }

    /// Returns `true` if the keyboard listener belongs to this card.
    #[must_use]
    pub fn listens_with(&self, id: ListenerId) -> bool {
        self.escape.as_ref().is_some_and(|sub| sub.id() == id)
    }

    /// Appends the row to `container`.
    ///
    /// # Errors
    ///
    /// Returns an error if `container` is not a live node.
    pub fn render(&self, doc: &mut Document, container: NodeId) -> Result<()> {
        doc.tree
            .render(container, self.card.node(), RenderPosition::BeforeEnd)
    }

    /// Maps an interaction with one of this card's nodes to an action.
    #[must_use]
    pub fn handle(&self, target: NodeId, event: &UiEvent) -> Option<Action> {
        if target == self.card.node() {
            self.card.handle(event)
        } else if target == self.card_edit.node() {
            self.card_edit.handle(event)
        } else {
            None
        }
    }

    /// Swaps the row for the edit form and starts listening for escape.
    ///
    /// Does nothing if the form is already shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the row is not mounted.
    pub fn open_editor(&mut self, doc: &mut Document) -> Result<()> {
        if self.mode == Mode::Edit {
            return Ok(());
        }
        doc.tree.replace(self.card_edit.node(), self.card.node())?;
        self.escape = Some(doc.keyboard.subscribe());
        self.mode = Mode::Edit;
        trace!(task = %self.task.id, "editor opened");
        Ok(())
    }

    /// Swaps the edit form back for the row and stops listening for escape.
    ///
    /// Does nothing if the row is already shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is not mounted.
    pub fn close_editor(&mut self, doc: &mut Document) -> Result<()> {
        if self.mode == Mode::Display {
            return Ok(());
        }
        doc.tree.replace(self.card.node(), self.card_edit.node())?;
        self.release_escape(doc);
        self.mode = Mode::Display;
        trace!(task = %self.task.id, "editor closed");
        Ok(())
    }

    /// Handles a key press routed to this card's listener.
    ///
    /// Returns `true` if the key closed the editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is not mounted.
    pub fn handle_keydown(&mut self, doc: &mut Document, key: &str) -> Result<bool> {
        if self.mode != Mode::Edit || !is_escape(key) {
            return Ok(false);
        }
        self.close_editor(doc)?;
        Ok(true)
    }

    /// Releases the keyboard listener and frees both views.
    pub fn destroy(mut self, doc: &mut Document) {
        self.release_escape(doc);
        self.card.destroy(&mut doc.tree);
        self.card_edit.destroy(&mut doc.tree);
    }

    fn release_escape(&mut self, doc: &mut Document) {
        if let Some(subscription) = self.escape.take() {
            doc.keyboard.unsubscribe(subscription);
        }
    }
}
