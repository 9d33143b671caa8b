#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::help_dialog::HelpDialog;
    use crate::interactive_ratatui::domain::models::Mode;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn rows(dialog: &mut HelpDialog) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn row_of(rows: &[String], text: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(text))
    }

    #[test]
    fn test_current_view_listed_first() {
        let mut dialog = HelpDialog::new();
        dialog.set_context(Mode::Scan);

        let rows = rows(&mut dialog);

        let scan = row_of(&rows, "Scan Document:").unwrap();
        let search = row_of(&rows, "Search:").unwrap();
        assert!(scan < search);
        assert!(row_of(&rows, "Ctrl+D").is_some());
        assert!(row_of(&rows, "Ctrl+C twice").is_some());
    }

    #[test]
    fn test_help_context_falls_back_to_search() {
        let mut dialog = HelpDialog::new();
        dialog.set_context(Mode::Help);

        let rows = rows(&mut dialog);
        let search = row_of(&rows, "Search:").unwrap();
        let details = row_of(&rows, "Details:").unwrap();
        assert!(search < details);
    }

    #[test]
    fn test_any_key_closes() {
        let mut dialog = HelpDialog::new();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty());
        assert_eq!(dialog.handle_key(key), Some(Message::CloseHelp));
    }
}
