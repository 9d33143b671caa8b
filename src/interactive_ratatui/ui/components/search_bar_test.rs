#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::SearchBar;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn rendered(bar: &mut SearchBar) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_typing_emits_query_changed() {
        let mut bar = SearchBar::new();

        assert_eq!(
            bar.handle_key(key(KeyCode::Char('j'))),
            Some(Message::QueryChanged("j".to_string()))
        );
        assert_eq!(
            bar.handle_key(key(KeyCode::Char('w'))),
            Some(Message::QueryChanged("jw".to_string()))
        );
        assert_eq!(bar.query(), "jw");
    }

    #[test]
    fn test_cursor_keys_emit_nothing() {
        let mut bar = SearchBar::new();
        bar.set_query("vata");

        assert_eq!(bar.handle_key(key(KeyCode::Left)), None);
        assert_eq!(bar.handle_key(key(KeyCode::Home)), None);
        assert_eq!(bar.handle_key(key(KeyCode::Backspace)), None);
        assert_eq!(bar.query(), "vata");
    }

    #[test]
    fn test_set_query_from_state_keeps_cursor() {
        let mut bar = SearchBar::new();
        bar.set_query("vata");
        bar.handle_key(key(KeyCode::Home));

        bar.set_query("vata");
        assert_eq!(
            bar.handle_key(key(KeyCode::Char('x'))),
            Some(Message::QueryChanged("xvata".to_string()))
        );
    }

    #[test]
    fn test_render_shows_loading_and_message() {
        let mut bar = SearchBar::new();
        bar.set_query("jwara");
        bar.set_loading(true);
        bar.set_message(Some("Press Ctrl+C again to exit".to_string()));

        let screen = rendered(&mut bar);

        assert!(screen.contains("Search NAMASTE terminology"));
        assert!(screen.contains("[searching...]"));
        assert!(screen.contains("Press Ctrl+C again to exit"));
        assert!(screen.contains("jwara"));
        assert!(bar.is_loading());
    }
}
