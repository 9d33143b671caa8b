use crate::interactive_ratatui::domain::models::Mode;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::{Styles, ViewLayout};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const CHANNELS: &[(&str, &str)] = &[
    ("Email", "api-support@ayusandhi.gov.in (response within 24 hours)"),
    ("Phone", "+91-1800-11-AYUSH (Mon-Fri, 10 AM - 5 PM IST)"),
    ("Live chat", "Mon-Fri, 9 AM - 6 PM IST"),
];

const FAQS: &[(&str, &str)] = &[
    (
        "What are the API rate limits?",
        "Public API allows 1000 requests per hour per IP address. Search is limited to 100 requests per minute and lookup to 200 requests per minute.",
    ),
    (
        "Is there offline access available?",
        "Not currently. Institutional partners can request bulk data exports for internal use.",
    ),
    (
        "How do I report API issues or bugs?",
        "Email api-support@ayusandhi.gov.in with the error, the request and response data, and timestamps.",
    ),
];

/// Static about/support screen. Scrolling is local to the page.
pub struct SupportPage {
    terminology_url: String,
    scan_url: String,
    scroll_offset: u16,
}

impl SupportPage {
    pub fn new(terminology_url: impl Into<String>, scan_url: impl Into<String>) -> Self {
        Self {
            terminology_url: terminology_url.into(),
            scan_url: scan_url.into(),
            scroll_offset: 0,
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0;
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let heading = |text: &'static str| Line::from(Span::styled(text, Styles::section()));
        let mut lines = vec![
            Line::from(
                "AyuSandhi maps traditional medicine diagnoses to NAMASTE codes and their ICD-11 \
                 TM2 and biomedicine counterparts.",
            ),
            Line::from(""),
            heading("Contact"),
        ];

        for (label, value) in CHANNELS {
            lines.push(Line::from(vec![
                Span::styled(format!("  {label}: "), Styles::label()),
                Span::raw(*value),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(heading("API Endpoints"));
        for (method, path) in [
            ("GET ", format!("{}/search?query=<text>", self.terminology_url)),
            ("GET ", format!("{}/lookup/<namaste_code>", self.terminology_url)),
            ("POST", format!("{}/scan/report", self.scan_url)),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("  {method} "), Styles::label()),
                Span::styled(path, Styles::code()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(heading("Frequently Asked Questions"));
        for (question, answer) in FAQS {
            lines.push(Line::from(Span::styled(format!("  {question}"), Styles::normal())));
            lines.push(Line::from(Span::styled(format!("    {answer}"), Styles::dimmed())));
        }

        lines
    }
}

impl Component for SupportPage {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = self.lines();
        self.scroll_offset = self
            .scroll_offset
            .min(lines.len().saturating_sub(1) as u16);
        let scroll = self.scroll_offset;

        ViewLayout::new("Support Center")
            .with_subtitle("We're here to help you")
            .with_status_text("↑/↓: Scroll | Esc: Search | F1: Help")
            .render(f, area, |f, content| {
                let body = Paragraph::new(lines)
                    .block(Block::default().borders(Borders::ALL))
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0));
                f.render_widget(body, content);
            });
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Message::Navigate(Mode::Search)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            _ => None,
        }
    }
}
