//! The board presenter.
//!
//! Owns two snapshots of the task collection: the original order, fixed at
//! [`init`](BoardPresenter::init), and the working order reflecting the
//! active sort. Rows are revealed a page at a time from the working order.
//!
//! # Render decision
//!
//! At init and after every sort change:
//!
//! 1. If every task is archived (vacuously true for no tasks), only the
//!    empty-state banner is shown.
//! 2. Otherwise the sort control and the first page of rows are shown, plus
//!    the load-more control when more than one page exists.

use taskdeck_protocol::{SortType, Task, TaskId, compare_down, compare_up};
use tracing::{debug, instrument};

use crate::document::Document;
use crate::dom::{NodeId, RenderPosition};
use crate::error::Result;
use crate::view::{
    BoardView, CardListView, LoadMoreView, NoCardsView, SortView, UiEvent, View,
};

use super::Action;
use super::card::{CardPresenter, Mode};

/// Number of rows revealed at init and by each load-more click.
pub const CARD_COUNT_PER_STEP: usize = 8;

/// Presenter for the whole task board.
///
/// # Examples
///
/// ```
/// use taskdeck_protocol::Task;
/// use taskdeck_tui::{BoardPresenter, Document};
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let mut board = BoardPresenter::new(&mut doc, body);
///
/// let tasks: Vec<_> = (0..10).map(|i| Task::new(format!("Task {i}"))).collect();
/// board.init(&mut doc, &tasks).unwrap();
/// assert_eq!(board.rendered_cards().len(), 8);
///
/// board.load_more(&mut doc).unwrap();
/// assert_eq!(board.rendered_cards().len(), 10);
/// ```
#[derive(Debug)]
pub struct BoardPresenter {
    container: NodeId,
    rendered_count: usize,
    current_sort_type: SortType,
    tasks: Vec<Task>,
    default_tasks: Vec<Task>,
    board: BoardView,
    sort: SortView,
    card_list: CardListView,
    no_cards: NoCardsView,
    load_more: LoadMoreView,
    cards: Vec<CardPresenter>,
}

impl BoardPresenter {
    /// Creates the presenter and its views, all detached.
    ///
    /// Nothing is mounted into `container` until [`init`](Self::init).
    pub fn new(doc: &mut Document, container: NodeId) -> Self {
        Self {
            container,
            rendered_count: CARD_COUNT_PER_STEP,
            current_sort_type: SortType::Default,
            tasks: Vec::new(),
            default_tasks: Vec::new(),
            board: BoardView::new(&mut doc.tree),
            sort: SortView::new(&mut doc.tree),
            card_list: CardListView::new(&mut doc.tree),
            no_cards: NoCardsView::new(&mut doc.tree),
            load_more: LoadMoreView::new(&mut doc.tree),
            cards: Vec::new(),
        }
    }

    /// Takes the task collection and renders the board.
    ///
    /// The presenter keeps its own copies: the working order and the original
    /// order never share storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is not a live node.
    #[instrument(skip_all, fields(tasks = tasks.len()))]
    pub fn init(&mut self, doc: &mut Document, tasks: &[Task]) -> Result<()> {
        self.tasks = tasks.to_vec();
        self.default_tasks = tasks.to_vec();

        doc.tree
            .render(self.container, self.board.node(), RenderPosition::BeforeEnd)?;
        doc.tree.render(
            self.board.node(),
            self.card_list.node(),
            RenderPosition::BeforeEnd,
        )?;

        self.render_board(doc)
    }

    /// Re-orders the board and renders the first page again.
    ///
    /// Picking the active mode again does nothing. Any open editor is
    /// discarded along with its row.
    ///
    /// # Errors
    ///
    /// Returns an error if a row cannot be mounted into the list.
    #[instrument(skip(self, doc))]
    pub fn change_sort_type(&mut self, doc: &mut Document, sort_type: SortType) -> Result<()> {
        if self.current_sort_type == sort_type {
            return Ok(());
        }

        self.sort_tasks(sort_type);
        self.sort.set_active(&mut doc.tree, sort_type);
        self.clear_card_list(doc);
        if !self.all_archived() {
            self.render_card_list(doc)?;
        }
        Ok(())
    }

    /// Reveals the next page of rows.
    ///
    /// Removes the load-more control once every row is shown. Does nothing
    /// while the control is not mounted.
    ///
    /// # Errors
    ///
    /// Returns an error if the list container is not a live node.
    #[instrument(skip_all, fields(rendered = self.rendered_count))]
    pub fn load_more(&mut self, doc: &mut Document) -> Result<()> {
        if !self.load_more.is_mounted(&doc.tree) {
            debug!("load-more control not mounted, ignoring");
            return Ok(());
        }

        let from = self.rendered_count;
        self.render_cards(doc, from, from + CARD_COUNT_PER_STEP)?;
        self.rendered_count += CARD_COUNT_PER_STEP;

        if self.rendered_count >= self.tasks.len() {
            self.load_more.remove(&mut doc.tree);
        }
        Ok(())
    }

    /// Delivers a user interaction to the view owning `target`.
    ///
    /// Interactions with nodes the board does not own are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting action breaks a tree invariant.
    pub fn dispatch(&mut self, doc: &mut Document, target: NodeId, event: UiEvent) -> Result<()> {
        let action = if target == self.sort.node() {
            self.sort.handle(&event)
        } else if target == self.load_more.node() {
            self.load_more.handle(&event)
        } else {
            self.cards
                .iter()
                .find(|card| card.owns(target))
                .and_then(|card| card.handle(target, &event))
        };

        match action {
            Some(action) => self.update(doc, action),
            None => Ok(()),
        }
    }

    /// Applies an action requested by one of the board's views.
    ///
    /// # Errors
    ///
    /// Returns an error if the action breaks a tree invariant.
    pub fn update(&mut self, doc: &mut Document, action: Action) -> Result<()> {
        debug!(?action, "board action");
        match action {
            Action::ChangeSortType(sort_type) => self.change_sort_type(doc, sort_type),
            Action::LoadMore => self.load_more(doc),
            Action::OpenEditor(row) => match self.card_mut(row) {
                Some(card) => card.open_editor(doc),
                None => Ok(()),
            },
            Action::CloseEditor(row) => match self.card_mut(row) {
                Some(card) => card.close_editor(doc),
                None => Ok(()),
            },
        }
    }

    /// Delivers a key press to every card listening for keys.
    ///
    /// Returns `true` if some card handled the key.
    ///
    /// # Errors
    ///
    /// Returns an error if closing an editor breaks a tree invariant.
    pub fn handle_keydown(&mut self, doc: &mut Document, key: &str) -> Result<bool> {
        let mut handled = false;
        for listener in doc.keyboard.listeners() {
            if let Some(card) = self.cards.iter_mut().find(|card| card.listens_with(listener)) {
                handled |= card.handle_keydown(doc, key)?;
            }
        }
        Ok(handled)
    }

    /// Tears the board down, releasing every keyboard listener and freeing
    /// all of its nodes. The container itself is left in place.
    #[instrument(skip_all, fields(cards = self.cards.len()))]
    pub fn destroy(mut self, doc: &mut Document) {
        self.clear_card_list(doc);
        let Self {
            board,
            sort,
            card_list,
            no_cards,
            load_more,
            ..
        } = self;
        sort.destroy(&mut doc.tree);
        no_cards.destroy(&mut doc.tree);
        load_more.destroy(&mut doc.tree);
        card_list.destroy(&mut doc.tree);
        board.destroy(&mut doc.tree);
    }

    /// Returns the tasks in working order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks in their original order.
    #[must_use]
    pub fn default_tasks(&self) -> &[Task] {
        &self.default_tasks
    }

    /// Returns the active sort mode.
    #[must_use]
    pub fn current_sort_type(&self) -> SortType {
        self.current_sort_type
    }

    /// Returns the pagination cursor.
    ///
    /// The number of rows shown is the smaller of this and the task count.
    #[must_use]
    pub fn rendered_count(&self) -> usize {
        self.rendered_count
    }

    /// Returns the presenters of the rows currently shown, in order.
    #[must_use]
    pub fn rendered_cards(&self) -> &[CardPresenter] {
        &self.cards
    }

    /// Returns the ids of the tasks currently in edit mode.
    #[must_use]
    pub fn editing(&self) -> Vec<TaskId> {
        self.cards
            .iter()
            .filter(|card| card.mode() == Mode::Edit)
            .map(CardPresenter::task_id)
            .collect()
    }

    /// Returns the node of the sort control.
    #[must_use]
    pub fn sort_node(&self) -> NodeId {
        self.sort.node()
    }

    /// Returns the node of the load-more control.
    #[must_use]
    pub fn load_more_node(&self) -> NodeId {
        self.load_more.node()
    }

    fn card_mut(&mut self, row: NodeId) -> Option<&mut CardPresenter> {
        self.cards.iter_mut().find(|card| card.row() == row)
    }

    fn all_archived(&self) -> bool {
        self.tasks.iter().all(|task| task.is_archive)
    }

    fn sort_tasks(&mut self, sort_type: SortType) {
        match sort_type {
            SortType::DateUp => self.tasks.sort_by(compare_up),
            SortType::DateDown => self.tasks.sort_by(compare_down),
            SortType::Default => self.tasks = self.default_tasks.clone(),
        }
        self.current_sort_type = sort_type;
    }

    fn render_sort(&mut self, doc: &mut Document) -> Result<()> {
        doc.tree
            .render(self.board.node(), self.sort.node(), RenderPosition::AfterBegin)?;
        self.sort
            .set_sort_type_change_handler(Action::ChangeSortType);
        Ok(())
    }

    fn render_card(&mut self, doc: &mut Document, task: Task) -> Result<()> {
        let card = CardPresenter::new(doc, task);
        card.render(doc, self.card_list.node())?;
        self.cards.push(card);
        Ok(())
    }

    fn render_cards(&mut self, doc: &mut Document, from: usize, to: usize) -> Result<()> {
        let to = to.min(self.tasks.len());
        let from = from.min(to);
        for task in self.tasks[from..to].to_vec() {
            self.render_card(doc, task)?;
        }
        Ok(())
    }

    fn render_no_cards(&self, doc: &mut Document) -> Result<()> {
        doc.tree.render(
            self.board.node(),
            self.no_cards.node(),
            RenderPosition::AfterBegin,
        )
    }

    fn render_load_more(&mut self, doc: &mut Document) -> Result<()> {
        doc.tree.render(
            self.board.node(),
            self.load_more.node(),
            RenderPosition::BeforeEnd,
        )?;
        self.load_more.set_click_handler(|| Action::LoadMore);
        Ok(())
    }

    fn clear_card_list(&mut self, doc: &mut Document) {
        for card in self.cards.drain(..) {
            card.destroy(doc);
        }
        doc.tree.clear_children(self.card_list.node());
        self.rendered_count = CARD_COUNT_PER_STEP;
    }

    fn render_card_list(&mut self, doc: &mut Document) -> Result<()> {
        self.render_cards(doc, 0, CARD_COUNT_PER_STEP)?;
        if self.tasks.len() > CARD_COUNT_PER_STEP {
            self.render_load_more(doc)?;
        }
        Ok(())
    }

    fn render_board(&mut self, doc: &mut Document) -> Result<()> {
        if self.all_archived() {
            debug!("every task archived, showing empty state");
            return self.render_no_cards(doc);
        }

        self.render_sort(doc)?;
        self.render_card_list(doc)
    }
}
