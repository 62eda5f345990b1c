//! Token stream pane

use super::utils::{clamp_scroll, pane_block, token_style, visible_height};
use crate::parser::token::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the token list, one token per row
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    follow_selection: bool,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Tokens ", is_focused);
    let visible = visible_height(area);

    let follow = follow_selection.then_some(selected);
    clamp_scroll(scroll, tokens.len(), visible, follow);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible)
        .map(|(idx, token)| {
            let mut line = Line::from(vec![
                Span::styled(
                    format!("{:>4}:{:<3} ", token.location.line, token.location.column),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<10}", token.kind.name()), token_style(token.kind)),
                Span::styled(format!("{:?}", token.literal), Style::default().fg(DEFAULT_THEME.fg)),
            ]);

            if idx == selected {
                line = line.style(
                    Style::default()
                        .bg(DEFAULT_THEME.selection_bg)
                        .add_modifier(Modifier::BOLD),
                );
            }

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
