use crate::api::scan::ALLOWED_EXTENSIONS;
use crate::formatters::terminology_formatter::{format_history_entry, format_scan_result};
use crate::interactive_ratatui::domain::models::{Mode, ScanView, SelectionDirection};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::text_input::TextInput;
use crate::interactive_ratatui::ui::components::view_layout::{Styles, ViewLayout};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::scan::ScanHistoryEntry;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

/// Document scan screen: path input, current result and recent scans
#[derive(Default)]
pub struct ScanPanel {
    path_input: TextInput,
    is_scanning: bool,
    error: Option<String>,
    view: Option<ScanView>,
    history: Vec<ScanHistoryEntry>,
    history_state: ListState,
}

impl ScanPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_path(&mut self, path: &str) {
        self.path_input.sync_text(path);
    }

    pub fn set_scanning(&mut self, is_scanning: bool) {
        self.is_scanning = is_scanning;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn set_view(&mut self, view: Option<&ScanView>) {
        self.view = view.cloned();
    }

    pub fn set_history(&mut self, history: &[ScanHistoryEntry], selected: Option<usize>) {
        if self.history.as_slice() != history {
            self.history = history.to_vec();
        }
        self.history_state.select(selected);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let title = if self.is_scanning {
            " Document path [scanning...] ".to_string()
        } else {
            format!(" Document path ({}) ", ALLOWED_EXTENSIONS.join(", "))
        };

        let input = Paragraph::new(Line::from(self.path_input.render_cursor_spans()))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Styles::border_focused()),
            )
            .style(Styles::input());
        f.render_widget(input, area);
    }

    fn render_result(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if let Some(error) = &self.error {
            vec![Line::from(Span::styled(error.as_str(), Styles::error()))]
        } else if self.is_scanning {
            vec![Line::from(Span::styled(
                "Processing document...",
                Styles::warning(),
            ))]
        } else if let Some(view) = &self.view {
            let mut lines = vec![Line::from(Span::styled(
                view.file_name.as_str(),
                Styles::success(),
            ))];
            lines.extend(
                format_scan_result(&view.result, false)
                    .lines()
                    .map(|line| Line::from(line.to_string())),
            );
            lines
        } else {
            vec![Line::from(Span::styled(
                "Enter a file path and press Enter to scan",
                Styles::dimmed(),
            ))]
        };

        let result = Paragraph::new(lines)
            .block(Block::default().title(" Result ").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(result, area);
    }

    fn render_history(&mut self, f: &mut Frame, area: Rect) {
        let title = format!(" Recent scans ({}) ", self.history.len());

        if self.history.is_empty() {
            let empty = Paragraph::new(Span::styled("No scans yet", Styles::dimmed()))
                .block(Block::default().title(title).borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .history
            .iter()
            .map(|entry| ListItem::new(format_history_entry(entry, false)))
            .collect();
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Styles::selected())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, area, &mut self.history_state);
    }
}

impl Component for ScanPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let layout = ViewLayout::new("Scan Document")
            .with_subtitle("Upload a prescription or report to map it to NAMASTE codes")
            .with_status_text(
                "Enter: Scan/View | ↑/↓: History | Ctrl+D: Download | Ctrl+L: Clear history | Esc: Search",
            );

        layout.render(f, area, |f, content| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(6),
                    Constraint::Length(8),
                ])
                .split(content);

            self.render_input(f, chunks[0]);
            self.render_result(f, chunks[1]);
            self.render_history(f, chunks[2]);
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('d') => return Some(Message::DownloadScanResult),
                KeyCode::Char('l') => return Some(Message::ClearScanHistory),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => Some(Message::Navigate(Mode::Search)),
            KeyCode::Up => Some(Message::SelectHistory(SelectionDirection::Prev)),
            KeyCode::Down => Some(Message::SelectHistory(SelectionDirection::Next)),
            KeyCode::Enter => {
                if self.path_input.text().trim().is_empty() {
                    Some(Message::ViewHistoryEntry)
                } else {
                    Some(Message::SubmitScan)
                }
            }
            _ => {
                if self.path_input.handle_key(key) {
                    Some(Message::ScanPathChanged(self.path_input.text().to_string()))
                } else {
                    None
                }
            }
        }
    }
}
