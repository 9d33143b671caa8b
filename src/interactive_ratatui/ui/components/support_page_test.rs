#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::support_page::SupportPage;
    use crate::interactive_ratatui::domain::models::Mode;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(page: &mut SupportPage) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| page.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_lists_configured_endpoints() {
        let mut page = SupportPage::new("https://terms.example/api", "https://scan.example/v2");

        let text = screen(&mut page);

        assert!(text.contains("Support Center"));
        assert!(text.contains("https://terms.example/api/search?query=<text>"));
        assert!(text.contains("https://terms.example/api/lookup/<namaste_code>"));
        assert!(text.contains("https://scan.example/v2/scan/report"));
        assert!(text.contains("api-support@ayusandhi.gov.in"));
    }

    #[test]
    fn test_scrolling_is_local() {
        let mut page = SupportPage::new("a", "b");
        let key = |code| KeyEvent::new(code, KeyModifiers::empty());

        assert_eq!(page.handle_key(key(KeyCode::Down)), None);
        assert_eq!(page.handle_key(key(KeyCode::Down)), None);
        assert!(!screen(&mut page).contains("AyuSandhi maps"));

        page.reset_scroll();
        assert!(screen(&mut page).contains("AyuSandhi maps"));

        assert_eq!(
            page.handle_key(key(KeyCode::Esc)),
            Some(Message::Navigate(Mode::Search))
        );
    }
}
