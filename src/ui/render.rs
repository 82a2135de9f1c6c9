use crate::settings::{Button, CountdownScheduler, SelectionKind};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions, split_lists};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const POPUP_MIN_WIDTH: u16 = 44;

pub fn draw<S: CountdownScheduler>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let (live, _) = app.live_mode();
    let header_widget = Header::new(live, app.screen_mode(), app.popup_visible());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let notice = app.surface().notice().filter(|_| body.height > 4);
    let lists_area = match notice {
        Some(_) => Rect {
            height: body.height - 2,
            ..body
        },
        None => body,
    };
    let (resolution_area, window_mode_area) = split_lists(lists_area);
    draw_list(frame, app, SelectionKind::Resolution, resolution_area);
    draw_list(frame, app, SelectionKind::WindowMode, window_mode_area);

    if let Some(notice) = notice {
        let notice_area = Rect {
            y: lists_area.y + lists_area.height,
            height: 2,
            ..body
        };
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(STATUS_ERROR)),
            Span::styled(notice.to_string(), Style::default().fg(HEADER_TEXT)),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(widget, notice_area);
    }

    let footer_widget = Footer::new(app.popup_visible(), app.has_exit_button());
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.popup_visible() {
        draw_popup(frame, app, body);
    }
}

fn draw_list<S: CountdownScheduler>(
    frame: &mut Frame<'_>,
    app: &App<S>,
    kind: SelectionKind,
    area: Rect,
) {
    let view = app.list(kind);
    let focused = app.focus() == kind && !app.popup_visible();
    let title = match kind {
        SelectionKind::Resolution => " Resolution ",
        SelectionKind::WindowMode => " Display Mode ",
    };

    let lines: Vec<Line> = if !view.enabled || view.options.is_empty() {
        vec![Line::from(Span::styled(
            "  No resolutions reported by the display",
            Style::default().fg(DISABLED_TEXT),
        ))]
    } else {
        let cursor = app.cursor(kind);
        view.options
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                let marker = if idx == view.shown { "● " } else { "  " };
                let mut line = Line::from(vec![
                    Span::styled(format!(" {}", marker), Style::default().fg(STATUS_OK)),
                    Span::styled(label.clone(), Style::default().fg(HEADER_TEXT)),
                ]);
                if focused && idx == cursor {
                    line = line.style(
                        Style::default()
                            .bg(ACTIVE_HIGHLIGHT)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                line
            })
            .collect()
    };

    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_popup<S: CountdownScheduler>(frame: &mut Frame<'_>, app: &App<S>, body: Rect) {
    let pending = app.settings().confirm.pending();
    let change = pending
        .and_then(|p| app.list(p.kind).options.get(p.index))
        .cloned()
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Switched to ", Style::default().fg(HEADER_TEXT)),
            Span::styled(change, Style::default().fg(ACCENT)),
        ]),
        Line::from(vec![
            Span::styled("  Reverting in ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                app.surface().countdown_text().to_string(),
                Style::default()
                    .fg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" s unless kept", Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        render_buttons(app.focused_button()),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = content_width.saturating_add(4).max(POPUP_MIN_WIDTH);
    let height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            " Keep these display settings? ",
            Style::default().fg(ACCENT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_buttons(focused: Button) -> Line<'static> {
    let style_for = |button: Button| {
        if button == focused {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        }
    };

    Line::from(vec![
        Span::raw("        "),
        Span::styled(" Keep ", style_for(Button::Accept)),
        Span::raw("    "),
        Span::styled(" Revert ", style_for(Button::Revert)),
    ])
}
