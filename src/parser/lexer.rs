//! Lexer (tokenizer) for Monkey source code
//!
//! Pull-based: every call to [`Lexer::next_token`] scans exactly one token.
//! The lexer never fails. Characters it does not recognise come back as
//! [`TokenKind::Illegal`] tokens, and the end of input is reported as
//! [`TokenKind::Eof`] on this and every later call.

use super::token::{lookup_ident, SourceLocation, Token, TokenKind};

/// Lexer for Monkey source code
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch` in `input`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    /// Character under examination, `None` once past the end
    ch: Option<char>,
    line: usize,
    column: usize,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            line: 1,
            column: 1,
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenize the entire input, including the trailing `EOF` token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let at_end = token.is(TokenKind::Eof);
            tokens.push(token);
            if at_end {
                break;
            }
        }

        tokens
    }

    /// Scan the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let loc = self.current_location();
        let Some(ch) = self.ch else {
            return Token::new(TokenKind::Eof, "", loc);
        };

        let token = match ch {
            '=' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==", loc)
                } else {
                    Token::new(TokenKind::Assign, "=", loc)
                }
            }
            '!' => {
                if self.peek_char() == Some('=') {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=", loc)
                } else {
                    Token::new(TokenKind::Bang, "!", loc)
                }
            }
            '+' => Token::new(TokenKind::Plus, "+", loc),
            '-' => Token::new(TokenKind::Minus, "-", loc),
            '*' => Token::new(TokenKind::Asterisk, "*", loc),
            '/' => Token::new(TokenKind::Slash, "/", loc),
            '<' => Token::new(TokenKind::Lt, "<", loc),
            '>' => Token::new(TokenKind::Gt, ">", loc),
            ',' => Token::new(TokenKind::Comma, ",", loc),
            ';' => Token::new(TokenKind::Semicolon, ";", loc),
            '(' => Token::new(TokenKind::LParen, "(", loc),
            ')' => Token::new(TokenKind::RParen, ")", loc),
            '{' => Token::new(TokenKind::LBrace, "{", loc),
            '}' => Token::new(TokenKind::RBrace, "}", loc),

            // Runs stop on the first non-matching character, which is left
            // as the current one, so these return without the final read.
            c if is_letter(c) => {
                let ident = self.read_while(is_letter);
                return Token::new(lookup_ident(&ident), ident, loc);
            }
            c if c.is_ascii_digit() => {
                let digits = self.read_while(|c| c.is_ascii_digit());
                return Token::new(TokenKind::Int, digits, loc);
            }

            other => Token::new(TokenKind::Illegal, other.to_string(), loc),
        };

        self.read_char();
        token
    }

    /// Consume a maximal run of characters satisfying `pred`
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.ch.is_some_and(&pred) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    /// Skip spaces, tabs, newlines and carriage returns
    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Advance to the next character. Past the end the cursor stays clamped
    /// at `input.len()`.
    fn read_char(&mut self) {
        if let Some(prev) = self.ch {
            if prev == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.position = self.read_position.min(self.input.len());
        self.read_position = self.position + 1;
        self.ch = self.input.get(self.position).copied();
    }

    /// Peek at the character after the current one without consuming
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.read_position).copied()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

/// Yields every token up to and including the first `EOF`, then stops.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}
