use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::{
    app::App,
    shared::theme::{ModernIcons, ModernTheme},
    widgets::{checkbox_icon, key_hint, status_span, truncate_text},
};

/// Draw the main UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme.clone();

    let mut constraints = vec![
        Constraint::Length(3), // Header
        Constraint::Min(0),    // Todo list
    ];
    if app.config.debug_pane {
        constraints.push(Constraint::Length(8)); // Debug pane
    }
    constraints.push(Constraint::Length(4)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    draw_header(f, chunks[0], app, &theme);
    draw_todo_list(f, chunks[1], app, &theme);
    if app.config.debug_pane {
        draw_debug_pane(f, chunks[2], app, &theme);
        draw_footer(f, chunks[3], app, &theme);
    } else {
        draw_footer(f, chunks[2], app, &theme);
    }
}

/// Draw the header with title and activity indicator
fn draw_header(f: &mut Frame, area: Rect, app: &mut App, theme: &ModernTheme) {
    let mut spans = vec![
        Span::styled(
            format!("{} Send to Finish Em", ModernIcons::SEND),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if app.loading.is_loading() {
        let spinner = app.loading.get_spinner_char();
        let label = if app.loading.sending {
            "sending"
        } else {
            "scanning"
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{spinner} {label}"),
            Style::default().fg(theme.accent),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(header, area);
}

/// Draw the candidate list, or the empty/done states
fn draw_todo_list(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Todos ",
            Style::default().fg(theme.text_secondary),
        ));

    let lines: Vec<Line> = if app.has_submitted {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {} Done - all todos sent", ModernIcons::SUCCESS),
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Press r to scan again",
                Style::default().fg(theme.text_secondary),
            )),
        ]
    } else if app.selection.is_empty() {
        let notice = if app.loading.fetching {
            "  Scanning the document..."
        } else if app.last_scan_empty {
            "  No todos found in this document"
        } else {
            "  Press r to scan the document"
        };
        vec![
            Line::from(""),
            Line::from(Span::styled(
                notice,
                Style::default().fg(theme.text_secondary),
            )),
        ]
    } else {
        let text_width = area.width.saturating_sub(10) as usize;
        app.selection
            .items()
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let is_cursor = idx == app.cursor;
                let marker = if is_cursor { "▸ " } else { "  " };

                let text_style = if is_cursor {
                    Style::default()
                        .fg(theme.text_primary)
                        .add_modifier(Modifier::BOLD)
                } else if item.selected {
                    Style::default().fg(theme.text_primary)
                } else {
                    Style::default().fg(theme.text_disabled)
                };

                let checkbox_style = if item.selected {
                    Style::default().fg(theme.selected)
                } else {
                    Style::default().fg(theme.text_disabled)
                };

                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.accent)),
                    Span::styled(checkbox_icon(item.selected), checkbox_style),
                    Span::raw(" "),
                    Span::styled(truncate_text(&item.text, text_width), text_style),
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines).block(block);
    f.render_widget(list, area);
}

/// Draw the debug pane with per-item outcomes of the last sync cycle
fn draw_debug_pane(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let text_width = area.width.saturating_sub(4) as usize;
    let lines: Vec<Line> = app
        .debug_lines()
        .into_iter()
        .map(|line| {
            Line::from(Span::styled(
                truncate_text(&line, text_width),
                Style::default().fg(theme.text_secondary),
            ))
        })
        .collect();

    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Debug ",
                Style::default().fg(theme.text_secondary),
            )),
    );
    f.render_widget(pane, area);
}

/// Draw the footer: key hints and the current status message
fn draw_footer(f: &mut Frame, area: Rect, app: &App, theme: &ModernTheme) {
    let mut hints: Vec<Span> = Vec::new();
    hints.extend(key_hint("r", "refresh", theme));
    hints.extend(key_hint("space", "toggle", theme));
    hints.extend(key_hint("s", "submit", theme));
    hints.extend(key_hint("t", "theme", theme));
    hints.extend(key_hint("d", "debug", theme));
    hints.extend(key_hint("q", "quit", theme));

    let status_line = match &app.status_message {
        Some(message) => {
            let color = match message.message_type {
                crate::app::StatusType::Info => theme.info,
                crate::app::StatusType::Success => theme.success,
                crate::app::StatusType::Warning => theme.warning,
                crate::app::StatusType::Error => theme.danger,
            };
            Line::from(vec![
                status_span(&message.message_type, theme),
                Span::raw(" "),
                Span::styled(message.text.clone(), Style::default().fg(color)),
            ])
        }
        None => Line::from(""),
    };

    let footer = Paragraph::new(vec![Line::from(hints), status_line])
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(footer, area);
}
