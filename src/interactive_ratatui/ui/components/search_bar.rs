use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::text_input::TextInput;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct SearchBar {
    input: TextInput,
    is_loading: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: &str) {
        self.input.sync_text(query);
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    #[cfg(test)]
    pub fn query(&self) -> &str {
        self.input.text()
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    fn title(&self) -> String {
        let mut title = " Search NAMASTE terminology ".to_string();
        if self.is_loading {
            title.push_str("[searching...] ");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!("- {msg} "));
        }
        title
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input = Paragraph::new(Line::from(self.input.render_cursor_spans()))
            .block(
                Block::default()
                    .title(self.title())
                    .borders(Borders::ALL)
                    .border_style(Styles::border_focused()),
            )
            .style(Styles::input());

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.input.handle_key(key) {
            Some(Message::QueryChanged(self.input.text().to_string()))
        } else {
            None
        }
    }
}
