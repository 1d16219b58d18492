use hn_search_core::{AppViewModel, Body, ItemView};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use super::constants::*;
use super::state::{Focus, UiState};

/// Draws one frame from the view-model. Pure with respect to app state.
pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_form(frame, rows[0], view, ui);
    draw_error(frame, rows[1], view);
    draw_body(frame, rows[2], view);
    draw_pages(frame, rows[3], view, ui);
    frame.render_widget(
        Paragraph::new(HINTS).style(Style::default().add_modifier(Modifier::DIM)),
        rows[4],
    );
}

fn draw_form(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(area);

    let query_focused = ui.focus() == Focus::Query;
    frame.render_widget(
        Paragraph::new(view.query.as_str()).block(field_block(TITLE_QUERY, query_focused)),
        columns[0],
    );

    let size_focused = ui.focus() == Focus::PageSize;
    let size_text = view.page_size.to_string();
    frame.render_widget(
        Paragraph::new(size_text.as_str()).block(field_block(TITLE_PAGE_SIZE, size_focused)),
        columns[1],
    );

    let cursor = match ui.focus() {
        Focus::Query => Some((columns[0], view.query.chars().count())),
        Focus::PageSize => Some((columns[1], size_text.len())),
        Focus::Pages => None,
    };
    if let Some((field, text_len)) = cursor {
        let inner_right = field.x + field.width.saturating_sub(2);
        let x = (field.x + 1).saturating_add(text_len as u16).min(inner_right);
        frame.set_cursor_position(Position::new(x, field.y + 1));
    }
}

fn draw_error(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if view.show_error {
        frame.render_widget(
            Paragraph::new(NOTICE_ERROR).style(Style::default().fg(Color::Red)),
            area,
        );
    }
}

fn draw_body(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(TITLE_RESULTS)
        .title_bottom(format!(" {} hits ", view.total_hits));

    match &view.body {
        Body::Loading => {
            frame.render_widget(Paragraph::new(NOTICE_LOADING).block(block), area);
        }
        Body::List(items) => {
            let list = List::new(items.iter().map(item_line)).block(block);
            frame.render_widget(list, area);
        }
    }
}

fn item_line(item: &ItemView) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            item.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            item.url.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]))
}

fn draw_pages(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let focused = ui.focus() == Focus::Pages;
    let selected = ui.selected_button(view.page_buttons.len());

    let mut spans = Vec::with_capacity(view.page_buttons.len() * 2);
    for (index, page) in view.page_buttons.iter().enumerate() {
        let mut style = Style::default();
        if *page == view.current_page {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if focused && index == selected {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!("[{page}]"), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(field_block(TITLE_PAGES, focused)),
        area,
    );
}

fn field_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}
