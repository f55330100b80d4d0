use crate::panel::HostPanel;
use crate::ui::app::{App, Focus};
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    palette_color, CONSOLE_TEXT, DETAIL_KEY, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    HELIOS_GOLD, MUTED, POPUP_BORDER,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, console) = layout_regions(frame.area());

    frame.render_widget(header_widget(app), header);
    frame.render_widget(Clear, body);
    frame.render_widget(Paragraph::new(panel_lines(app.panel())), body);
    frame.render_widget(console_widget(app), console);

    if app.focus() == Focus::Prompt {
        draw_prompt(frame, app);
    }
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let refreshed = match app.panels().refreshed_at() {
        Some(at) => format!("refreshed {}", at.format("%H:%M:%S")),
        None => "waiting for first poll".to_string(),
    };
    let line = Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("helios", Style::default().fg(HELIOS_GOLD).add_modifier(Modifier::BOLD)),
        Span::styled("  │  ", separator_style),
        Span::styled(app.endpoint().to_string(), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(refreshed, text_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

pub fn panel_lines(panel: Option<HostPanel>) -> Vec<Line<'static>> {
    let Some(panel) = panel else {
        return vec![Line::styled("  Fetching host details...", Style::default().fg(MUTED))];
    };

    let accent = Style::default().fg(HELIOS_GOLD).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled(panel.user.clone(), accent),
            Span::styled("@", Style::default().fg(HEADER_TEXT)),
            Span::styled(panel.host.clone(), accent),
        ]),
        Line::from(format!("  {}", panel.separator)),
    ];

    let key_style = Style::default().fg(DETAIL_KEY).add_modifier(Modifier::BOLD);
    for (key, value) in panel.rows {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(key, key_style),
            Span::raw(": "),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    for row in HostPanel::palette() {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(
            row.iter()
                .map(|&index| Span::styled("   ", Style::default().bg(palette_color(index)))),
        );
        lines.push(Line::from(spans));
    }
    lines
}

fn console_widget(app: &App) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(" > ", Style::default().fg(MUTED)),
        Span::styled(app.console_text(), Style::default().fg(CONSOLE_TEXT)),
        Span::styled("█", Style::default().fg(CONSOLE_TEXT)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .title(" console  [e] edit  [c] clear  [q] quit ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_prompt(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 20, frame.area());
    let area = Rect {
        height: area.height.max(3),
        ..area
    };
    let prompt = Paragraph::new(Line::from(vec![
        Span::raw(app.prompt_input().to_string()),
        Span::styled("█", Style::default().fg(HEADER_TEXT)),
    ]))
    .block(
        Block::default()
            .title(" Console text (empty clears, Esc cancels) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(prompt, area);
}
