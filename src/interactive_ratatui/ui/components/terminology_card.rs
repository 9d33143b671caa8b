use crate::formatters::terminology_formatter::{detail_sections, format_status};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::{Styles, ViewLayout};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::terminology::Terminology;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Full detail view of one terminology record
#[derive(Default)]
pub struct TerminologyCard {
    record: Option<Terminology>,
    scroll_offset: usize,
}

impl TerminologyCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_record(&mut self, record: Option<&Terminology>) {
        if self.record.as_ref() != record {
            self.record = record.cloned();
        }
    }

    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    fn body_lines(record: &Terminology) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for section in detail_sections(record) {
            lines.push(Line::from(Span::styled(section.title, Styles::section())));
            for entry in section.lines {
                match entry.split_once(": ") {
                    Some((label, value)) => lines.push(Line::from(vec![
                        Span::styled(format!("  {label}: "), Styles::label()),
                        Span::styled(value.to_string(), Styles::normal()),
                    ])),
                    None => lines.push(Line::from(Span::styled(
                        format!("  {entry}"),
                        Styles::normal(),
                    ))),
                }
            }
            lines.push(Line::from(""));
        }

        lines
    }
}

impl Component for TerminologyCard {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(record) = &self.record else {
            let empty = Paragraph::new("No terminology selected").style(Styles::dimmed());
            f.render_widget(empty, area);
            return;
        };

        let subtitle = format!(
            "{} | {}",
            record.code().unwrap_or("No code"),
            format_status(record.status.as_deref())
        );
        let layout = ViewLayout::new(record.title())
            .with_subtitle(subtitle)
            .with_status_text("↑/↓ PgUp/PgDn: Scroll | Esc/Backspace: New search | F1: Help");

        let lines = Self::body_lines(record);
        // Keep at least one line on screen when scrolled past the end
        let max_scroll = lines.len().saturating_sub(1);
        let scroll = self.scroll_offset.min(max_scroll) as u16;

        layout.render(f, area, |f, content_area| {
            let body = Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL))
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            f.render_widget(body, content_area);
        });
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Message::BackToSearch),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollDetailUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDetailDown),
            KeyCode::PageUp => Some(Message::PageDetailUp),
            KeyCode::PageDown => Some(Message::PageDetailDown),
            _ => None,
        }
    }
}
