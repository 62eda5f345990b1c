//! Status bar rendering with keybindings and parse summary

use crate::parser::token::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub selected: usize,
    pub token_count: usize,
    pub error_count: usize,
    /// Most frequent categories, most frequent first
    pub top_kinds: &'a [(TokenKind, usize)],
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let has_errors = data.error_count > 0;
    let bar_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let sep_style = bar_bg.fg(DEFAULT_THEME.comment);

    let mut left_spans = vec![
        Span::styled(
            format!(" Token {}/{} ", data.selected + 1, data.token_count),
            Style::default()
                .bg(if has_errors {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(
            format!("{} diagnostic(s)", data.error_count),
            bar_bg.fg(if has_errors {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.success
            }),
        ),
        Span::styled(" | ", sep_style),
    ];

    for (kind, count) in data.top_kinds {
        left_spans.push(Span::styled(
            format!("{} ×{} ", kind, count),
            bar_bg.fg(DEFAULT_THEME.secondary),
        ));
    }
    left_spans.push(Span::styled(format!(" {} ", data.message), bar_bg.fg(DEFAULT_THEME.fg)));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_bg)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_bg.fg(DEFAULT_THEME.fg);

    let right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" token ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_bg)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
