//! Source code pane rendering with token-driven highlighting
//!
//! Colours come from the real lexer output rather than a separate highlighter,
//! so what the pane shows is exactly how the source was tokenized. The
//! selected token is drawn on a highlighted background and its line number
//! is emphasised.

use super::utils::{clamp_scroll, pane_block, token_style, visible_height};
use crate::parser::token::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the source pane needs for one frame
pub struct SourceRenderData<'a> {
    pub source: &'a str,
    pub tokens: &'a [Token],
    pub selected: Option<&'a Token>,
    pub follow_selection: bool,
}

/// Split one source line into styled spans. `tokens` must be the tokens that
/// start on this line, in source order.
fn highlight_line(line: &str, tokens: &[&Token], selected: Option<&Token>) -> Vec<Span<'static>> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut col = 0;

    for &token in tokens {
        let start = token.location.column.saturating_sub(1).clamp(col, chars.len());
        let end = (start + token.literal.chars().count()).min(chars.len());

        if start > col {
            spans.push(Span::raw(chars[col..start].iter().collect::<String>()));
        }

        let mut style = token_style(token.kind);
        if selected.is_some_and(|sel| std::ptr::eq(sel, token)) {
            style = style
                .bg(DEFAULT_THEME.selection_bg)
                .add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(chars[start..end].iter().collect::<String>(), style));
        col = end;
    }

    if col < chars.len() {
        spans.push(Span::raw(chars[col..].iter().collect::<String>()));
    }

    spans
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: &SourceRenderData,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = data.source.lines().collect();
    let visible = visible_height(area);
    let selected_line = data.selected.map(|t| t.location.line);

    let follow = if data.follow_selection {
        selected_line.map(|line| line.saturating_sub(1))
    } else {
        None
    };
    clamp_scroll(scroll, lines.len(), visible, follow);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let on_line: Vec<&Token> = data
                .tokens
                .iter()
                .filter(|t| t.location.line == line_num && !t.literal.is_empty())
                .collect();

            let num_style = if selected_line == Some(line_num) {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(highlight_line(line, &on_line, data.selected));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn texts(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_line_keeps_whitespace() {
        let line = "let  x=10;";
        let tokens = Lexer::new(line).tokenize();
        let on_line: Vec<&Token> = tokens.iter().filter(|t| !t.literal.is_empty()).collect();

        let spans = highlight_line(line, &on_line, None);
        assert_eq!(texts(&spans), vec!["let", "  ", "x", "=", "10", ";"]);
        assert_eq!(texts(&spans).concat(), line);
    }

    #[test]
    fn test_highlight_line_marks_selection() {
        let line = "a b";
        let tokens = Lexer::new(line).tokenize();
        let on_line: Vec<&Token> = tokens.iter().take(2).collect();

        let spans = highlight_line(line, &on_line, Some(&tokens[1]));
        assert_eq!(spans[2].style.bg, Some(DEFAULT_THEME.selection_bg));
        assert_eq!(spans[0].style.bg, None);
    }
}
