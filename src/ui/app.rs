//! Main TUI application state and logic

use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use crate::parser::{ParseOutcome, Parser};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::Duration;

/// How many categories the status bar lists
const TOP_KINDS: usize = 3;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Program,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> program)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Program,
            FocusedPane::Program => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Program,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Program => FocusedPane::Tokens,
        }
    }
}

/// Count tokens per category
pub fn count_kinds(tokens: &[Token]) -> FxHashMap<TokenKind, usize> {
    let mut counts = FxHashMap::default();
    for token in tokens {
        *counts.entry(token.kind).or_insert(0) += 1;
    }
    counts
}

/// The `n` most frequent categories, ties broken by declaration order.
/// `EOF` is left out since every stream ends with exactly one.
pub fn top_kinds(counts: &FxHashMap<TokenKind, usize>, n: usize) -> Vec<(TokenKind, usize)> {
    let mut ranked: Vec<(TokenKind, usize)> = TokenKind::ALL
        .iter()
        .filter(|kind| **kind != TokenKind::Eof)
        .filter_map(|kind| counts.get(kind).map(|count| (*kind, *count)))
        .collect();
    // Stable sort keeps declaration order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// The main application state
pub struct App {
    /// The source text being inspected
    pub source: String,

    /// Full token stream, including the trailing EOF
    pub tokens: Vec<Token>,

    /// Parse result for the same source
    pub outcome: ParseOutcome,

    /// Index into `tokens`
    pub selected: usize,

    /// Whether the source and token panes should scroll to the selection
    pub follow_selection: bool,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub program_scroll: usize,

    /// Cached for the status bar
    pub top_kinds: Vec<(TokenKind, usize)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Lex and parse `source` and set up the initial view
    pub fn new(source: String) -> Self {
        let tokens = Lexer::new(&source).tokenize();
        let outcome = Parser::from_source(&source).parse_program();
        let top_kinds = top_kinds(&count_kinds(&tokens), TOP_KINDS);

        let status_message = if outcome.is_clean() {
            String::from("Parsed cleanly")
        } else {
            String::from("Parsed with diagnostics")
        };

        App {
            source,
            tokens,
            outcome,
            selected: 0,
            follow_selection: true,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            tokens_scroll: 0,
            program_scroll: 0,
            top_kinds,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    pub fn selected_token(&self) -> Option<&Token> {
        self.tokens.get(self.selected)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Source (left) | Tokens + Program (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let source_data = super::panes::SourceRenderData {
            source: &self.source,
            tokens: &self.tokens,
            selected: self.tokens.get(self.selected),
            follow_selection: self.follow_selection,
        };
        super::panes::render_source_pane(
            frame,
            columns[0],
            &source_data,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.selected,
            self.follow_selection,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_program_pane(
            frame,
            right_rows[1],
            &self.outcome,
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        let status_data = super::panes::StatusRenderData {
            message: &self.status_message,
            selected: self.selected,
            token_count: self.tokens.len(),
            error_count: self.outcome.errors.len(),
            top_kinds: &self.top_kinds,
        };
        super::panes::render_status_bar(frame, main_chunks[1], &status_data);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.select(self.selected.saturating_sub(1)),
            KeyCode::Right => self.select(self.selected.saturating_add(1)),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.tokens.len().saturating_sub(1)),
            KeyCode::Up => {
                self.follow_selection = false;
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.follow_selection = false;
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Program => &mut self.program_scroll,
        }
    }

    /// Select the token at `index`, clamped to the stream
    fn select(&mut self, index: usize) {
        self.selected = index.min(self.tokens.len().saturating_sub(1));
        self.follow_selection = true;

        if let Some(token) = self.tokens.get(self.selected) {
            self.status_message = format!("{} {:?} at {}", token.kind, token.literal, token.location);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_top_kinds() {
        let tokens = Lexer::new("let a = 1; let b = 2;").tokenize();
        let top = top_kinds(&count_kinds(&tokens), 3);

        assert_eq!(
            top,
            vec![(TokenKind::Ident, 2), (TokenKind::Int, 2), (TokenKind::Assign, 2)]
        );
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = App::new(String::from("let x = 1;"));
        assert_eq!(app.tokens.len(), 6);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::End);
        assert_eq!(app.selected, 5);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected, 5);
        assert_eq!(app.selected_token().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn test_scrolling_stops_following() {
        let mut app = App::new(String::from("let x = 1;"));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);

        press(&mut app, KeyCode::Down);
        assert!(!app.follow_selection);
        assert_eq!(app.tokens_scroll, 1);

        press(&mut app, KeyCode::Right);
        assert!(app.follow_selection);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(String::new());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
