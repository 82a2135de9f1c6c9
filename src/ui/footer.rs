use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ↑/↓: Move │ Tab: Switch list │ Enter: Apply";
const EXIT_HINT: &str = " │ Q: Exit";
const QUIT_HINT: &str = " │ Ctrl+Q: Quit";
const POPUP_HINTS: &str = " ←/→: Choose │ Enter: Press │ A: Keep │ R/Esc: Revert";

pub struct Footer {
    popup_open: bool,
    exit_button: bool,
}

impl Footer {
    pub fn new(popup_open: bool, exit_button: bool) -> Self {
        Self {
            popup_open,
            exit_button,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = match (self.popup_open, self.exit_button) {
            (true, _) => POPUP_HINTS.to_string(),
            (false, true) => format!("{}{}", LIST_HINTS, EXIT_HINT),
            (false, false) => format!("{}{}", LIST_HINTS, QUIT_HINT),
        };
        let version = format!("v{} ", VERSION);

        // Char count, not bytes: the hints contain box-drawing glyphs.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
