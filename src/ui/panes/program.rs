//! Parsed program pane: rendered statements followed by diagnostics

use super::utils::{clamp_scroll, pane_block, visible_height};
use crate::parser::ast::Statement;
use crate::parser::ParseOutcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn statement_line(stmt: &Statement) -> Line<'static> {
    match stmt {
        Statement::Let(stmt) => Line::from(vec![
            Span::styled(
                format!("{:>4}:{:<3} ", stmt.token.location.line, stmt.token.location.column),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                "Let ",
                Style::default()
                    .fg(DEFAULT_THEME.keyword)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(stmt.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    }
}

/// Build every row of the pane
fn program_lines(outcome: &ParseOutcome) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = outcome.program.statements.iter().map(statement_line).collect();

    if lines.is_empty() {
        lines.push(Line::styled(
            "(no statements)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    lines.push(Line::raw(""));

    if outcome.is_clean() {
        lines.push(Line::styled(
            "No diagnostics",
            Style::default().fg(DEFAULT_THEME.success),
        ));
    } else {
        lines.push(Line::styled(
            format!("{} diagnostic(s)", outcome.errors.len()),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        ));
        for err in &outcome.errors {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>4}:{:<3} ", err.location.line, err.location.column),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(err.to_string(), Style::default().fg(DEFAULT_THEME.error)),
            ]));
        }
    }

    lines
}

/// Render the program pane
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    outcome: &ParseOutcome,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Program ", is_focused);
    let lines = program_lines(outcome);

    clamp_scroll(scroll, lines.len(), visible_height(area), None);

    let paragraph = Paragraph::new(lines).block(block).scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_clean_program_lines() {
        let lines = plain(&program_lines(&parse("let x = 1;")));
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("Let let x = ;"));
        assert_eq!(lines[2], "No diagnostics");
    }

    #[test]
    fn test_diagnostic_lines() {
        let lines = plain(&program_lines(&parse("let = 1;")));
        assert_eq!(lines[0], "(no statements)");
        assert_eq!(lines[2], "1 diagnostic(s)");
        assert!(lines[3].contains("expected next token to be IDENT, got ASSIGN instead"));
    }
}
