use crate::interactive_ratatui::constants::{SEARCH_BAR_HEIGHT, SUGGESTION_PANEL_MAX_ROWS};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component, help_dialog::HelpDialog, scan_panel::ScanPanel, search_bar::SearchBar,
    suggestion_list::SuggestionList, support_page::SupportPage,
    terminology_card::TerminologyCard, view_layout::Styles,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

pub struct Renderer {
    search_bar: SearchBar,
    suggestion_list: SuggestionList,
    terminology_card: TerminologyCard,
    scan_panel: ScanPanel,
    support_page: SupportPage,
    help_dialog: HelpDialog,
    last_mode: Mode,
}

impl Renderer {
    pub fn new(terminology_url: &str, scan_url: &str) -> Self {
        Self {
            search_bar: SearchBar::new(),
            suggestion_list: SuggestionList::new(),
            terminology_card: TerminologyCard::new(),
            scan_panel: ScanPanel::new(),
            support_page: SupportPage::new(terminology_url, scan_url),
            help_dialog: HelpDialog::new(),
            last_mode: Mode::Search,
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let entering_support =
            state.mode == Mode::Support && !matches!(self.last_mode, Mode::Support | Mode::Help);
        if entering_support {
            self.support_page.reset_scroll();
        }
        self.last_mode = state.mode;

        self.render_view(f, state, state.mode);

        // The search bar shows messages itself
        if state.mode != Mode::Search {
            if let Some(message) = &state.ui.message {
                let area = f.area();
                let line = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
                render_footer(f, line, message);
            }
        }
    }

    fn render_view(&mut self, f: &mut Frame, state: &AppState, mode: Mode) {
        match mode {
            Mode::Search => self.render_search_mode(f, state),
            Mode::Details => self.render_detail_mode(f, state),
            Mode::Scan => self.render_scan_mode(f, state),
            Mode::Support => self.support_page.render(f, f.area()),
            Mode::Help => self.render_help_mode(f, state),
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState) {
        let panel_rows = suggestion_panel_rows(state.search.suggestions.len());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(panel_rows + 2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.search_bar.set_query(&state.search.query);
        self.search_bar
            .set_loading(state.search.is_loading || state.detail.is_loading);
        self.search_bar.set_message(state.ui.message.clone());

        self.suggestion_list
            .set_suggestions(&state.search.suggestions);
        self.suggestion_list
            .set_selected_index(state.search.selected_index);
        self.suggestion_list.set_visible(state.search.panel_visible);
        self.suggestion_list.set_error(state.search.error.clone());

        self.search_bar.render(f, chunks[0]);
        self.suggestion_list.render(f, chunks[1]);
        render_footer(
            f,
            chunks[3],
            "↑/↓: Select | Enter: Open | Esc: Hide | Tab: Show | F1: Help | F3: Scan | F4: Support",
        );
    }

    fn render_detail_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.terminology_card.set_record(state.detail.current.as_ref());
        self.terminology_card
            .set_scroll_offset(state.detail.scroll_offset);
        self.terminology_card.render(f, f.area());
    }

    fn render_scan_mode(&mut self, f: &mut Frame, state: &AppState) {
        self.scan_panel.set_path(&state.scan.file_input);
        self.scan_panel.set_scanning(state.scan.is_scanning);
        self.scan_panel.set_error(state.scan.error.clone());
        self.scan_panel.set_view(state.scan.view.as_ref());
        self.scan_panel
            .set_history(state.scan.history.entries(), state.scan.selected_history);
        self.scan_panel.render(f, f.area());
    }

    fn render_help_mode(&mut self, f: &mut Frame, state: &AppState) {
        let underneath = state.previous_mode.unwrap_or(Mode::Search);
        if underneath != Mode::Help {
            self.render_view(f, state, underneath);
        }

        self.help_dialog.set_context(underneath);
        self.help_dialog.render(f, f.area());
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }

    pub fn get_terminology_card_mut(&mut self) -> &mut TerminologyCard {
        &mut self.terminology_card
    }

    pub fn get_scan_panel_mut(&mut self) -> &mut ScanPanel {
        &mut self.scan_panel
    }

    pub fn get_support_page_mut(&mut self) -> &mut SupportPage {
        &mut self.support_page
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

/// List rows for the suggestion panel, at least one for the placeholder text
pub fn suggestion_panel_rows(count: usize) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .clamp(1, SUGGESTION_PANEL_MAX_ROWS)
}

fn render_footer(f: &mut Frame, area: Rect, text: &str) {
    let footer = Paragraph::new(text)
        .style(Styles::dimmed())
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
