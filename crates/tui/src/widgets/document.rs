//! Document rendering widget.
//!
//! The node tree is laid out as a vertical stack of blocks in document order.
//! Containers (`body`, `board`, `list`) take no room of their own; every
//! other element becomes one block of fixed height. When the stack is taller
//! than the viewport it is scrolled just enough to keep the focused block
//! visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use taskdeck_protocol::{CardColor, SortType};

use crate::document::Document;
use crate::dom::{Element, NodeId};
use crate::layout::{LOAD_MORE_HEIGHT, NO_CARDS_HEIGHT, SORT_HEIGHT, TASK_CARD_HEIGHT};
use crate::view::{CardTemplate, NO_CARDS_MESSAGE};

/// Where a block lands in the unscrolled stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The node rendered by the block.
    pub node: NodeId,
    /// Row of the block's first line, relative to the top of the stack.
    pub top: u16,
    /// Number of rows the block takes.
    pub height: u16,
}

impl Placement {
    /// Returns the row just below the block.
    #[must_use]
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Returns the color associated with a card color.
///
/// Black cards use gray so the border stays visible on dark terminals.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use taskdeck_protocol::CardColor;
/// use taskdeck_tui::widgets::card_color;
///
/// assert_eq!(card_color(CardColor::Black), Color::Gray);
/// assert_eq!(card_color(CardColor::Pink), Color::Magenta);
/// ```
#[must_use]
pub const fn card_color(color: CardColor) -> Color {
    match color {
        CardColor::Black => Color::Gray,
        CardColor::Yellow => Color::Yellow,
        CardColor::Blue => Color::Blue,
        CardColor::Green => Color::Green,
        CardColor::Pink => Color::Magenta,
    }
}

/// Returns the number of rows an element takes; zero for containers.
#[must_use]
pub const fn element_height(element: &Element) -> u16 {
    match element {
        Element::Body | Element::Board | Element::CardList => 0,
        Element::Sort { .. } => SORT_HEIGHT,
        Element::NoCards => NO_CARDS_HEIGHT,
        Element::LoadMore => LOAD_MORE_HEIGHT,
        Element::Card(_) | Element::CardEdit(_) => TASK_CARD_HEIGHT,
    }
}

/// Stacks the mounted elements of the document in document order.
#[must_use]
pub fn layout_document(doc: &Document) -> Vec<Placement> {
    let mut top = 0u16;
    let mut placements = Vec::new();
    for node in doc.tree.descendants(doc.body()) {
        let height = doc.tree.element(node).map_or(0, element_height);
        if height == 0 {
            continue;
        }
        placements.push(Placement { node, top, height });
        top = top.saturating_add(height);
    }
    placements
}

/// Returns the number of rows to scroll so the focused block is visible.
///
/// Without focus, or when the focused block already fits, nothing scrolls.
#[must_use]
pub fn scroll_offset(placements: &[Placement], focused: Option<NodeId>, viewport: u16) -> u16 {
    focused
        .and_then(|node| placements.iter().find(|p| p.node == node))
        .map_or(0, |p| p.bottom().saturating_sub(viewport))
}

/// Renders the document into `area`, highlighting the focused node.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use taskdeck_protocol::Task;
/// use taskdeck_tui::{BoardPresenter, Document};
/// use taskdeck_tui::widgets::render_document;
///
/// let mut doc = Document::new();
/// let body = doc.body();
/// let mut board = BoardPresenter::new(&mut doc, body);
/// board.init(&mut doc, &[Task::new("Do homework")]).unwrap();
///
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
/// render_document(&doc, None, area, &mut buf);
/// ```
pub fn render_document(doc: &Document, focused: Option<NodeId>, area: Rect, buf: &mut Buffer) {
    let placements = layout_document(doc);
    let offset = scroll_offset(&placements, focused, area.height);

    for placement in placements {
        // Blocks cut off at the top are skipped; the focused one never is
        let Some(top) = placement.top.checked_sub(offset) else {
            continue;
        };
        if top >= area.height {
            break;
        }
        let block_area = Rect {
            x: area.x,
            y: area.y + top,
            width: area.width,
            height: placement.height.min(area.height - top),
        };

        let is_focused = focused == Some(placement.node);
        match doc.tree.element(placement.node) {
            Some(Element::Sort { active }) => render_sort(*active, is_focused, block_area, buf),
            Some(Element::NoCards) => render_no_cards(block_area, buf),
            Some(Element::LoadMore) => render_load_more(is_focused, block_area, buf),
            Some(Element::Card(template)) => render_card(template, is_focused, block_area, buf),
            Some(Element::CardEdit(template)) => {
                render_card_edit(template, is_focused, block_area, buf);
            }
            _ => {}
        }
    }
}

fn focus_border(is_focused: bool, color: Color) -> (BorderType, Style) {
    if is_focused {
        (
            BorderType::Thick,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Plain, Style::default().fg(color))
    }
}

fn render_sort(active: SortType, is_focused: bool, area: Rect, buf: &mut Buffer) {
    let mut spans = Vec::new();
    for sort_type in SortType::ALL {
        let (marker, style) = if sort_type == active {
            (
                "● ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○ ", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{marker}{}", sort_type.label()), style));
        spans.push(Span::raw("   "));
    }

    let (border_type, border_style) =
        focus_border(is_focused, if is_focused { Color::Yellow } else { Color::DarkGray });
    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
        .render(area, buf);
}

fn render_no_cards(area: Rect, buf: &mut Buffer) {
    Paragraph::new(NO_CARDS_MESSAGE)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

fn render_load_more(is_focused: bool, area: Rect, buf: &mut Buffer) {
    let (border_type, border_style) =
        focus_border(is_focused, if is_focused { Color::Yellow } else { Color::DarkGray });
    Paragraph::new("LOAD MORE")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
        .render(area, buf);
}

fn render_card(template: &CardTemplate, is_focused: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let color = if template.is_expired {
        Color::Red
    } else {
        card_color(template.color)
    };
    let (border_type, border_style) = focus_border(is_focused, color);
    let title_style = if is_focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = vec![
        Line::from(Span::styled(
            truncate_string(&template.description, inner_width),
            title_style,
        )),
        details_line(template),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        )
        .render(area, buf);
}

fn render_card_edit(template: &CardTemplate, is_focused: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let border_style = if is_focused {
        Style::default()
            .fg(card_color(template.color))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(card_color(template.color))
    };
    let hint_style = Style::default().fg(Color::DarkGray);
    let key_style = Style::default().fg(Color::Yellow);

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = vec![
        Line::from(truncate_string(&template.description, inner_width)),
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::styled(" save  ", hint_style),
            Span::styled("Esc", key_style),
            Span::styled(" cancel", hint_style),
        ]),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .title(" Edit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(border_style),
        )
        .render(area, buf);
}

fn details_line(template: &CardTemplate) -> Line<'static> {
    let mut spans = Vec::new();
    if !template.due_date.is_empty() {
        let style = if template.is_expired {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(template.due_date.clone(), style));
    }
    let flags = [
        (template.is_repeating, "repeat"),
        (template.is_favorite, "favorite"),
        (template.is_archive, "archive"),
    ];
    for (set, flag) in flags {
        if set {
            if !spans.is_empty() {
                spans.push(Span::raw(" · "));
            }
            spans.push(Span::styled(flag, Style::default().fg(Color::DarkGray)));
        }
    }
    Line::from(spans)
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
