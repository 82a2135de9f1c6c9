use crate::display::{ResolutionMode, WindowMode};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Live display mode, with a marker while a change awaits confirmation.
pub struct Header {
    mode: ResolutionMode,
    window_mode: WindowMode,
    pending: bool,
}

impl Header {
    pub fn new(mode: ResolutionMode, window_mode: WindowMode, pending: bool) -> Self {
        Self {
            mode,
            window_mode,
            pending,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (marker, marker_style) = if self.pending {
            ("◐ Previewing", Style::default().fg(STATUS_WARN))
        } else {
            ("● Applied", Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(marker, marker_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.mode.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.window_mode.label(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
