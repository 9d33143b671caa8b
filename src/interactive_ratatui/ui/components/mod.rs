pub mod help_dialog;
pub mod scan_panel;
pub mod search_bar;
pub mod suggestion_list;
pub mod support_page;
pub mod terminology_card;
pub mod text_input;
pub mod view_layout;

#[cfg(test)]
mod help_dialog_test;
#[cfg(test)]
mod search_bar_test;
#[cfg(test)]
mod support_page_test;
#[cfg(test)]
mod text_input_test;
#[cfg(test)]
mod view_layout_test;

use crate::interactive_ratatui::constants::EXIT_PROMPT;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}
