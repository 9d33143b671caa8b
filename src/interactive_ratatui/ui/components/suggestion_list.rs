use crate::formatters::terminology_formatter::format_suggestion_line;
use crate::interactive_ratatui::domain::models::SelectionDirection;
use crate::interactive_ratatui::ui::components::{Component, view_layout::Styles};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::terminology::Terminology;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Drop-down of search suggestions under the search bar, plus the error
/// and empty-state text shown in its place.
#[derive(Default)]
pub struct SuggestionList {
    suggestions: Vec<Terminology>,
    selected_index: Option<usize>,
    visible: bool,
    error: Option<String>,
    list_state: ListState,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_suggestions(&mut self, suggestions: &[Terminology]) {
        if self.suggestions.as_slice() != suggestions {
            self.suggestions = suggestions.to_vec();
            self.list_state = ListState::default();
        }
    }

    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected_index = index;
        self.list_state.select(index);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn render_placeholder(&self, f: &mut Frame, area: Rect) {
        let line = match &self.error {
            Some(error) => Line::from(Span::styled(error.as_str(), Styles::error())),
            None if self.suggestions.is_empty() => Line::from(Span::styled(
                "Type at least 2 characters to search NAMASTE terminology",
                Styles::dimmed(),
            )),
            None => Line::from(Span::styled(
                "Tab: show suggestions again",
                Styles::dimmed(),
            )),
        };

        let paragraph = Paragraph::new(line).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.visible || self.suggestions.is_empty() {
            self.render_placeholder(f, area);
            return;
        }

        let items: Vec<ListItem> = self
            .suggestions
            .iter()
            .map(|record| ListItem::new(format_suggestion_line(record)))
            .collect();

        let title = format!(" Suggestions ({}) ", self.suggestions.len());
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Styles::normal())
            .highlight_style(Styles::selected())
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => Some(Message::MoveSelection(SelectionDirection::Prev)),
            KeyCode::Down => Some(Message::MoveSelection(SelectionDirection::Next)),
            KeyCode::Enter => Some(Message::ConfirmSelection),
            KeyCode::Esc => Some(Message::DismissSuggestions),
            KeyCode::Tab => Some(Message::FocusSuggestions),
            _ => None,
        }
    }
}
