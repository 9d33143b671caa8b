#[cfg(test)]
mod tests {
    use super::super::app_state::AppState;
    use super::super::renderer::*;
    use crate::interactive_ratatui::constants::SUGGESTION_PANEL_MAX_ROWS;
    use crate::schemas::terminology::Terminology;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_suggestion_panel_rows() {
        assert_eq!(suggestion_panel_rows(0), 1);
        assert_eq!(suggestion_panel_rows(3), 3);
        assert_eq!(
            suggestion_panel_rows(SUGGESTION_PANEL_MAX_ROWS as usize + 5),
            SUGGESTION_PANEL_MAX_ROWS
        );
        assert_eq!(suggestion_panel_rows(65_536), SUGGESTION_PANEL_MAX_ROWS);
    }

    #[test]
    fn test_large_result_list_renders() {
        let mut state = AppState::new();
        state.search.query = "jw".to_string();
        state.search.suggestions = (0..65_536)
            .map(|i| Terminology {
                namaste_code: Some(format!("AYUR-{i:05}")),
                display_name: Some("Jwara".to_string()),
                ..Default::default()
            })
            .collect();
        state.search.selected_index = Some(0);
        state.search.panel_visible = true;

        let mut renderer = Renderer::new("http://terminology.test", "http://scan.test");
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| renderer.render(f, &state)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Suggestions (65536)"));
        assert!(screen.contains("AYUR-00000"));
        assert!(screen.contains("AYUR-00009"));
    }
}
