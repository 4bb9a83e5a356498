//! Task card views: read-only row and edit form.

use chrono::{DateTime, Utc};
use taskdeck_protocol::task::format_due_date;
use taskdeck_protocol::{CardColor, Task, TaskId};

use crate::dom::{Element, NodeId, NodeTree};
use crate::presenter::Action;

use super::{Slot, UiEvent, View};

/// What a card shows about its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    /// The task the card belongs to.
    pub task_id: TaskId,
    /// The task's description.
    pub description: String,
    /// The card color.
    pub color: CardColor,
    /// Formatted due date, empty without a deadline.
    pub due_date: String,
    /// The deadline has passed.
    pub is_expired: bool,
    /// The task repeats on some weekday.
    pub is_repeating: bool,
    /// The task is archived.
    pub is_archive: bool,
    /// The task is a favorite.
    pub is_favorite: bool,
}

impl CardTemplate {
    /// Builds the template for `task` as of `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use taskdeck_protocol::Task;
    /// use taskdeck_tui::view::CardTemplate;
    ///
    /// let due = Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
    /// let task = Task::new("Do homework").with_due_date(due);
    ///
    /// let template = CardTemplate::new(&task, due);
    /// assert_eq!(template.due_date, "5 March");
    /// assert!(template.is_expired);
    /// ```
    #[must_use]
    pub fn new(task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            task_id: task.id,
            description: task.description.clone(),
            color: task.color,
            due_date: format_due_date(task.due_date),
            is_expired: task.is_expired(now),
            is_repeating: task.is_repeating(),
            is_archive: task.is_archive,
            is_favorite: task.is_favorite,
        }
    }
}

/// A task in read-only presentation.
#[derive(Debug)]
pub struct CardView {
    node: NodeId,
    on_edit_click: Slot<()>,
}

impl CardView {
    /// Creates the view for `task` with a detached node.
    pub fn new(tree: &mut NodeTree, task: &Task) -> Self {
        Self {
            node: tree.create(Element::Card(CardTemplate::new(task, Utc::now()))),
            on_edit_click: Slot::default(),
        }
    }

    /// Sets the edit-request handler, replacing any previous one.
    pub fn set_edit_click_handler(&mut self, handler: impl Fn() -> Action + 'static) {
        self.on_edit_click.set(move |()| handler());
    }

    /// Maps an interaction with this view to an action.
    #[must_use]
    pub fn handle(&self, event: &UiEvent) -> Option<Action> {
        match event {
            UiEvent::Click => self.on_edit_click.emit(()),
            _ => None,
        }
    }
}

impl View for CardView {
    fn node(&self) -> NodeId {
        self.node
    }
}

/// A task in edit presentation.
#[derive(Debug)]
pub struct CardEditView {
    node: NodeId,
    on_form_submit: Slot<()>,
}

impl CardEditView {
    /// Creates the form for `task` with a detached node.
    pub fn new(tree: &mut NodeTree, task: &Task) -> Self {
        Self {
            node: tree.create(Element::CardEdit(CardTemplate::new(task, Utc::now()))),
            on_form_submit: Slot::default(),
        }
    }

    /// Sets the submit handler, replacing any previous one.
    pub fn set_form_submit_handler(&mut self, handler: impl Fn() -> Action + 'static) {
        self.on_form_submit.set(move |()| handler());
    }

    /// Maps an interaction with this view to an action.
    #[must_use]
    pub fn handle(&self, event: &UiEvent) -> Option<Action> {
        match event {
            UiEvent::Submit => self.on_form_submit.emit(()),
            _ => None,
        }
    }
}

impl View for CardEditView {
    fn node(&self) -> NodeId {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use taskdeck_protocol::Repeating;

    #[test]
    fn template_reflects_task_flags() {
        let now = Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
        let task = Task::new("Plan the sprint")
            .with_color(CardColor::Pink)
            .with_repeating(Repeating {
                fr: true,
                ..Repeating::default()
            })
            .favorite();

        let template = CardTemplate::new(&task, now);

        assert_eq!(template.color, CardColor::Pink);
        assert_eq!(template.due_date, "");
        assert!(!template.is_expired);
        assert!(template.is_repeating);
        assert!(template.is_favorite);
        assert!(!template.is_archive);
    }

    #[test]
    fn card_clicks_request_edit_and_forms_submit() {
        let mut tree = NodeTree::new();
        let task = Task::new("Do homework");

        let mut card = CardView::new(&mut tree, &task);
        let mut form = CardEditView::new(&mut tree, &task);
        let row = card.node();
        card.set_edit_click_handler(move || Action::OpenEditor(row));
        form.set_form_submit_handler(move || Action::CloseEditor(row));

        assert_eq!(card.handle(&UiEvent::Click), Some(Action::OpenEditor(row)));
        assert_eq!(card.handle(&UiEvent::Submit), None);
        assert_eq!(form.handle(&UiEvent::Submit), Some(Action::CloseEditor(row)));
        assert_eq!(form.handle(&UiEvent::Click), None);
    }
}
