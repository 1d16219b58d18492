/// Which control receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    PageSize,
    Pages,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Query => Focus::PageSize,
            Focus::PageSize => Focus::Pages,
            Focus::Pages => Focus::Query,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Query => Focus::Pages,
            Focus::PageSize => Focus::Query,
            Focus::Pages => Focus::PageSize,
        }
    }
}

/// Terminal-only state that the core never sees: focus, the highlighted page
/// control and the quit request.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    focus: Focus,
    selected_button: usize,
    quit: bool,
}

impl UiState {
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Index of the highlighted page control, held inside `0..button_count`.
    pub fn selected_button(&self, button_count: usize) -> usize {
        self.selected_button.min(button_count.saturating_sub(1))
    }

    pub fn move_selection(&mut self, delta: isize, button_count: usize) {
        let current = self.selected_button(button_count);
        let max = button_count.saturating_sub(1);
        self.selected_button = current.saturating_add_signed(delta).min(max);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
