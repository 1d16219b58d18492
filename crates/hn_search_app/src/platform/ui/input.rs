use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hn_search_core::{AppViewModel, Msg};

use super::state::{Focus, UiState};

/// Maps a key press to a core message. Focus movement, page-control
/// selection and quitting are handled here and produce no message.
pub fn handle_key(ui: &mut UiState, view: &AppViewModel, key: KeyEvent) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Esc || is_ctrl_char(key, 'c') {
        ui.request_quit();
        return None;
    }

    match key.code {
        KeyCode::Tab => {
            ui.set_focus(ui.focus().next());
            return None;
        }
        KeyCode::BackTab => {
            ui.set_focus(ui.focus().prev());
            return None;
        }
        _ => {}
    }

    match ui.focus() {
        Focus::Query => handle_query_key(view, key),
        Focus::PageSize => handle_page_size_key(view, key),
        Focus::Pages => handle_pages_key(ui, view, key),
    }
}

/// Pasted text goes into the search field when it has focus.
pub fn handle_paste(ui: &UiState, view: &AppViewModel, text: &str) -> Option<Msg> {
    if ui.focus() != Focus::Query {
        return None;
    }
    let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
    if pasted.is_empty() {
        return None;
    }
    Some(Msg::QueryChanged(format!("{}{}", view.query, pasted)))
}

fn handle_query_key(view: &AppViewModel, key: KeyEvent) -> Option<Msg> {
    match key.code {
        KeyCode::Enter => Some(Msg::SearchSubmitted),
        KeyCode::Backspace => {
            let mut query = view.query.clone();
            query.pop()?;
            Some(Msg::QueryChanged(query))
        }
        KeyCode::Char(c) if is_plain(key) => {
            Some(Msg::QueryChanged(format!("{}{}", view.query, c)))
        }
        _ => None,
    }
}

fn handle_page_size_key(view: &AppViewModel, key: KeyEvent) -> Option<Msg> {
    let text = view.page_size.to_string();
    match key.code {
        // Same form as the search field: submitting here submits the search.
        KeyCode::Enter => Some(Msg::SearchSubmitted),
        KeyCode::Backspace => {
            let mut text = text;
            text.pop();
            Some(Msg::PageSizeChanged(text))
        }
        KeyCode::Up => Some(Msg::PageSizeChanged((view.page_size + 1).to_string())),
        KeyCode::Down => Some(Msg::PageSizeChanged(view.page_size.saturating_sub(1).to_string())),
        KeyCode::Char(c) if c.is_ascii_digit() && is_plain(key) => {
            Some(Msg::PageSizeChanged(format!("{text}{c}")))
        }
        _ => None,
    }
}

fn handle_pages_key(ui: &mut UiState, view: &AppViewModel, key: KeyEvent) -> Option<Msg> {
    let count = view.page_buttons.len();
    match key.code {
        KeyCode::Left => {
            ui.move_selection(-1, count);
            None
        }
        KeyCode::Right => {
            ui.move_selection(1, count);
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => view
            .page_buttons
            .get(ui.selected_button(count))
            .map(|page| Msg::PageClicked(*page)),
        _ => None,
    }
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
