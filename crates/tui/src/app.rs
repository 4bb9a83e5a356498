//! Main application struct and run loop.
//!
//! This module provides the `App` struct which owns the document and the
//! board presenter, turns input messages into user interactions on the
//! focused node, and renders the result.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use taskdeck_protocol::{Message, Task};
use tracing::{debug, info};

use crate::{
    BoardPresenter, Document,
    dom::{Element, NodeId},
    error::Result,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    terminal::AppTerminal,
    view::UiEvent,
    widgets::{render_document, render_status_bar},
};

/// The main application struct.
///
/// Focus is an index into the document's interactive nodes. After every
/// update the index is kept pointing at the same node when it is still
/// interactive, and otherwise left at the same position, clamped to the new
/// node count. An edit form that replaces its row therefore keeps focus.
#[derive(Debug)]
pub struct App {
    document: Document,
    board: BoardPresenter,
    focus: usize,
    should_quit: bool,
}

impl App {
    /// Creates the application and renders the board for `tasks`.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial render fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_protocol::Task;
    /// use taskdeck_tui::App;
    ///
    /// let app = App::new(&[Task::new("Do homework")]).unwrap();
    /// assert_eq!(app.board().rendered_cards().len(), 1);
    /// ```
    pub fn new(tasks: &[Task]) -> Result<Self> {
        let mut document = Document::new();
        let body = document.body();
        let mut board = BoardPresenter::new(&mut document, body);
        board.init(&mut document, tasks)?;
        info!(tasks = tasks.len(), "board initialized");

        Ok(Self {
            document,
            board,
            focus: 0,
            should_quit: false,
        })
    }

    /// Returns the document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the board presenter.
    #[must_use]
    pub fn board(&self) -> &BoardPresenter {
        &self.board
    }

    /// Returns the focused node, if any node is focusable.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.document.interactive_nodes().get(self.focus).copied()
    }

    /// Returns whether the application should exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application based on a message.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting board action breaks a tree invariant.
    pub fn update(&mut self, msg: Message) -> Result<()> {
        debug!(?msg, "update");
        let focused = self.focused();
        let settled = msg.is_navigation() || msg.is_terminating();

        match msg {
            Message::Quit => self.should_quit = true,
            Message::FocusNext => self.move_focus(1),
            Message::FocusPrev => self.move_focus(-1),
            Message::Activate => {
                if let Some(target) = focused {
                    let event = match self.document.tree.element(target) {
                        Some(Element::CardEdit(_)) => UiEvent::Submit,
                        _ => UiEvent::Click,
                    };
                    self.board.dispatch(&mut self.document, target, event)?;
                }
            }
            Message::SelectSort { key } => {
                let sort = self.board.sort_node();
                if self.document.tree.is_mounted(sort) {
                    self.board
                        .dispatch(&mut self.document, sort, UiEvent::SortSelected(key))?;
                }
            }
            Message::KeyDown { key } => {
                self.board.handle_keydown(&mut self.document, &key)?;
            }
        }

        // Navigation and quit leave the tree untouched
        if settled {
            return Ok(());
        }
        self.resolve_focus(focused);
        Ok(())
    }

    fn move_focus(&mut self, delta: isize) {
        let count = self.document.interactive_nodes().len();
        if count == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(count as isize) as usize;
    }

    fn resolve_focus(&mut self, previous: Option<NodeId>) {
        let nodes = self.document.interactive_nodes();
        if let Some(index) = previous.and_then(|node| nodes.iter().position(|n| *n == node)) {
            self.focus = index;
        } else {
            self.focus = self.focus.min(nodes.len().saturating_sub(1));
        }
    }

    /// Renders the application to the frame.
    ///
    /// - If the terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - Otherwise renders the header, the document and the status bar.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let focused = self.focused();
        let buf = frame.buffer_mut();
        render_document(&self.document, focused, content_area, buf);
        render_status_bar(&self.status_message(), status_area, buf);
    }

    fn status_message(&self) -> String {
        let total = self.board.tasks().len();
        let shown = self.board.rendered_cards().len();
        format!("{shown} of {total} tasks")
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title and active sort mode.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, sort_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(22)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "taskdeck",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Tasks", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        let sort = Paragraph::new(Span::styled(
            self.board.current_sort_type().label(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(sort, sort_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail or an update breaks a
    /// tree invariant.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskdeck_protocol::dummy::dummy_tasks;
    /// use taskdeck_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(&dummy_tasks())?;
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg)?;
            }

            if self.should_quit {
                break;
            }
        }

        info!("quitting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, scenario_tasks};
    use ratatui::{Terminal, backend::TestBackend};
    use taskdeck_protocol::SortType;

    fn numbered(count: usize) -> Vec<Task> {
        (0..count).map(|i| Task::new(format!("Task {i}"))).collect()
    }

    fn focused_element(app: &App) -> Option<Element> {
        app.focused()
            .and_then(|node| app.document().tree.element(node).cloned())
    }

    fn escape() -> Message {
        Message::KeyDown {
            key: "Escape".to_string(),
        }
    }

    #[test]
    fn app_starts_focused_on_sort_control() {
        let app = App::new(&numbered(3)).unwrap();

        assert!(matches!(focused_element(&app), Some(Element::Sort { .. })));
        assert!(!app.should_quit());
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = App::new(&numbered(3)).unwrap();
        app.update(Message::Quit).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn app_quit_leaves_board_and_focus_alone() {
        let mut app = App::new(&numbered(10)).unwrap();
        app.update(Message::FocusPrev).unwrap();
        let focused = app.focused();
        let outline = app.document().outline();

        app.update(Message::Quit).unwrap();

        assert!(app.should_quit());
        assert_eq!(app.focused(), focused);
        assert_eq!(app.document().outline(), outline);
    }

    #[test]
    fn app_focus_wraps_around() {
        let mut app = App::new(&numbered(2)).unwrap();

        app.update(Message::FocusPrev).unwrap();
        assert_eq!(app.focused(), Some(app.board().rendered_cards()[1].node()));

        app.update(Message::FocusNext).unwrap();
        assert_eq!(app.focused(), Some(app.board().sort_node()));
    }

    #[test]
    fn app_activate_opens_and_submit_closes_editor() {
        let mut app = App::new(&numbered(2)).unwrap();
        app.update(Message::FocusNext).unwrap();

        app.update(Message::Activate).unwrap();
        assert!(matches!(focused_element(&app), Some(Element::CardEdit(_))));
        assert_eq!(app.board().editing().len(), 1);

        app.update(Message::Activate).unwrap();
        assert!(matches!(focused_element(&app), Some(Element::Card(_))));
        assert!(app.board().editing().is_empty());
        assert!(app.document().keyboard.is_empty());
    }

    #[test]
    fn app_escape_closes_editor_and_keeps_focus() {
        let mut app = App::new(&numbered(2)).unwrap();
        app.update(Message::FocusNext).unwrap();
        app.update(Message::FocusNext).unwrap();
        app.update(Message::Activate).unwrap();

        app.update(escape()).unwrap();

        assert!(app.board().editing().is_empty());
        assert_eq!(app.focused(), Some(app.board().rendered_cards()[1].node()));
    }

    #[test]
    fn app_load_more_moves_focus_to_next_revealed_row() {
        let mut app = App::new(&numbered(10)).unwrap();
        app.update(Message::FocusPrev).unwrap();
        assert_eq!(app.focused(), Some(app.board().load_more_node()));

        app.update(Message::Activate).unwrap();

        assert_eq!(app.board().rendered_cards().len(), 10);
        assert_eq!(app.focused(), Some(app.board().rendered_cards()[8].node()));
    }

    #[test]
    fn app_select_sort_reorders_board() {
        let mut app = App::new(&scenario_tasks()).unwrap();

        app.update(Message::SelectSort {
            key: "date-up".to_string(),
        })
        .unwrap();

        assert_eq!(app.board().current_sort_type(), SortType::DateUp);
        assert_eq!(app.board().rendered_cards()[0].task().description, "day 1");
        assert_eq!(app.focused(), Some(app.board().sort_node()));
    }

    #[test]
    fn app_select_sort_ignored_in_empty_state() {
        let mut app = App::new(&[]).unwrap();

        app.update(Message::SelectSort {
            key: "date-down".to_string(),
        })
        .unwrap();

        assert_eq!(app.board().current_sort_type(), SortType::Default);
        assert_eq!(app.focused(), None);
    }

    #[test]
    fn app_navigation_without_focusable_nodes_is_harmless() {
        let mut app = App::new(&[]).unwrap();
        app.update(Message::FocusNext).unwrap();
        app.update(Message::Activate).unwrap();
        app.update(escape()).unwrap();
        assert_eq!(app.focused(), None);
    }

    #[test]
    fn app_view_shows_too_small_message() {
        let app = App::new(&numbered(3)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

        terminal.draw(|frame| app.view(frame)).unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_renders_header_board_and_status() {
        let app = App::new(&numbered(10)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        terminal.draw(|frame| app.view(frame)).unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains("taskdeck"));
        assert!(content.contains("Task 0"));
        assert!(content.contains("8 of 10 tasks"));
    }
}
