//! Helpers shared by several panes

use crate::parser::token::TokenKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border reflects focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, min 1
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `offset` so the visible window stays inside `total` rows. When
/// `follow` is set, the window is first moved to include `row`.
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize, follow: Option<usize>) {
    if let Some(row) = follow {
        if row < *offset {
            *offset = row;
        } else if row >= offset.saturating_add(visible) {
            *offset = row + 1 - visible;
        }
    }

    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

/// Colour for a token category
pub(crate) fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Illegal => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
        TokenKind::Eof => Style::default().fg(DEFAULT_THEME.comment),
        TokenKind::Ident => Style::default().fg(DEFAULT_THEME.fg),
        TokenKind::Int => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::LBrace
        | TokenKind::RBrace => Style::default().fg(DEFAULT_THEME.delimiter),
        kind if kind.is_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll_follows_row() {
        let mut offset = 0;
        clamp_scroll(&mut offset, 100, 10, Some(25));
        assert_eq!(offset, 16);

        clamp_scroll(&mut offset, 100, 10, Some(3));
        assert_eq!(offset, 3);
    }

    #[test]
    fn test_clamp_scroll_limits() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 30, 10, None);
        assert_eq!(offset, 20);

        clamp_scroll(&mut offset, 5, 10, None);
        assert_eq!(offset, 0);
    }
}
