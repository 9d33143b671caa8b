use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::domain::models::Mode;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Key binding overlay. The section for the view underneath is listed first.
pub struct HelpDialog {
    context: Mode,
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self {
            context: Mode::Search,
        }
    }

    pub fn set_context(&mut self, mode: Mode) {
        self.context = match mode {
            Mode::Help => Mode::Search,
            other => other,
        };
    }

    fn section(mode: Mode) -> Vec<Line<'static>> {
        let bindings: &[(&str, &str)] = match mode {
            Mode::Search | Mode::Help => &[
                ("type", "Search (at least 2 characters)"),
                ("↑/↓", "Move through suggestions"),
                ("Enter", "Open the selected terminology"),
                ("Esc", "Hide suggestions"),
                ("Tab", "Show previous suggestions again"),
            ],
            Mode::Details => &[
                ("↑/↓ j/k", "Scroll"),
                ("PgUp/PgDn", "Scroll a page"),
                ("Esc/Backspace", "Back to a new search"),
            ],
            Mode::Scan => &[
                ("type", "Path of a PDF, DOC, DOCX or image"),
                ("Enter", "Scan the file, or view the selected history entry"),
                ("↑/↓", "Select a history entry"),
                ("Ctrl+D", "Download the processed report"),
                ("Ctrl+L", "Clear scan history"),
                ("Esc", "Back to search"),
            ],
            Mode::Support => &[("↑/↓", "Scroll"), ("Esc", "Back to search")],
        };

        let mut lines = vec![Line::from(Span::styled(
            format!("{}:", mode.label()),
            Styles::section(),
        ))];
        lines.extend(bindings.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<14}"), Styles::label()),
                Span::raw(*action),
            ])
        }));
        lines.push(Line::from(""));
        lines
    }

    fn help_text(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("AyuSandhi - NAMASTE Terminology", Styles::title())),
            Line::from(""),
        ];

        lines.extend(Self::section(self.context));
        for mode in [Mode::Search, Mode::Details, Mode::Scan, Mode::Support] {
            if mode != self.context {
                lines.extend(Self::section(mode));
            }
        }

        lines.push(Line::from(Span::styled("Global:", Styles::section())));
        for (key, action) in [
            ("F1", "This help"),
            ("F2 / F3 / F4", "Search / Scan / Support"),
            ("Ctrl+C twice", "Quit"),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), Styles::label()),
                Span::raw(action),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from("Press any key to close this help..."));
        lines
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = self.help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Styles::border_focused()),
            )
            .style(Styles::normal())
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        Some(Message::CloseHelp)
    }
}
