use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Title bar, content area and key hint footer shared by the full-screen
/// views (details, scan, support).
pub struct ViewLayout {
    title: String,
    subtitle: Option<String>,
    status_text: Option<String>,
}

impl ViewLayout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            status_text: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = Some(text.into());
        self
    }

    pub fn render<F>(&self, f: &mut Frame, area: Rect, render_content: F)
    where
        F: FnOnce(&mut Frame, Rect),
    {
        let title_height = if self.subtitle.is_some() { 3 } else { 2 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(f, chunks[0]);
        render_content(f, chunks[1]);
        self.render_status_bar(f, chunks[2]);
    }

    fn render_title_bar(&self, f: &mut Frame, area: Rect) {
        let mut lines = vec![Line::from(Span::styled(self.title.as_str(), Styles::title()))];
        if let Some(subtitle) = &self.subtitle {
            lines.push(Line::from(Span::styled(subtitle.as_str(), Styles::subtitle())));
        }

        let title = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(title, area);
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let text = self
            .status_text
            .as_deref()
            .unwrap_or("F1: Help | F2: Search | F3: Scan | F4: Support | Ctrl+C: Quit");

        let status = Paragraph::new(text)
            .style(Styles::dimmed())
            .alignment(Alignment::Center);
        f.render_widget(status, area);
    }
}

pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const ACCENT: Color = Color::Magenta;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn section() -> Style {
        Style::default()
            .fg(ColorScheme::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn code() -> Style {
        Style::default().fg(ColorScheme::ACCENT)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn input() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(ColorScheme::PRIMARY)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(ColorScheme::WARNING)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
