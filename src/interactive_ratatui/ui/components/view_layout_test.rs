#[cfg(test)]
mod tests {
    use super::super::view_layout::{ColorScheme, Styles, ViewLayout};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};

    fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
        let width = buffer.area.width as usize;
        let content: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
        content
            .chunks(width)
            .any(|row| row.concat().contains(text))
    }

    #[test]
    fn test_view_layout_default_status() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ViewLayout::new("Terminology Details").render(f, f.area(), |_f, area| {
                    assert_eq!(area.height, 12 - 2 - 1);
                });
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Terminology Details"));
        assert!(buffer_contains_text(buffer, "F1: Help"));
    }

    #[test]
    fn test_view_layout_subtitle_and_status() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                ViewLayout::new("Scan Document")
                    .with_subtitle("Upload a prescription")
                    .with_status_text("Enter: Scan")
                    .render(f, f.area(), |_f, area| {
                        assert_eq!(area.height, 12 - 3 - 1);
                    });
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(buffer_contains_text(buffer, "Upload a prescription"));
        assert!(buffer_contains_text(buffer, "Enter: Scan"));
        assert!(!buffer_contains_text(buffer, "F1: Help"));
    }

    #[test]
    fn test_styles() {
        assert_eq!(Styles::title().fg, Some(ColorScheme::PRIMARY));
        assert!(Styles::selected().add_modifier.contains(Modifier::BOLD));
        assert_eq!(Styles::error().fg, Some(ColorScheme::ERROR));
        assert_eq!(Styles::dimmed().fg, Some(ColorScheme::TEXT_DIM));
    }
}
