//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure:
//! the diagnostic type, the cursor primitives, and the [`Parser::parse_program`]
//! driver.
//!
//! # Parser Architecture
//!
//! The parser pulls tokens from its [`Lexer`] on demand and only ever holds two
//! of them: `cur_token`, the token being examined, and `peek_token`, the one
//! after it. Construct-specific routines live in `statements`, which extends
//! [`Parser`] with its own `impl` block.
//!
//! # Error handling
//!
//! Parsing is best-effort. A structural mismatch is recorded as a
//! [`ParseError`] by [`Parser::expect_peek`], the construct being parsed is
//! dropped, and the driver carries on with the next token. The caller gets the
//! (possibly incomplete) [`Program`] together with every diagnostic in a
//! [`ParseOutcome`].

use crate::parser::ast::Program;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: TokenKind,
    pub found: TokenKind,
    /// Where the offending token starts
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected next token to be {}, got {} instead",
            self.expected, self.found
        )
    }
}

impl std::error::Error for ParseError {}

/// Result of a parse: the program built so far plus every diagnostic, in the
/// order they were raised
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutcome {
    /// `true` when no diagnostic was raised and the program can be trusted
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Program, Vec<ParseError>> {
        if self.errors.is_empty() {
            Ok(self.program)
        } else {
            Err(self.errors)
        }
    }
}

/// Recursive descent parser for Monkey
pub struct Parser {
    lexer: Lexer,
    errors: Vec<ParseError>,
    pub(crate) cur_token: Token,
    pub(crate) peek_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            errors: Vec::new(),
            cur_token,
            peek_token,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the whole token stream.
    ///
    /// Consumes the parser: a parser is good for exactly one program.
    pub fn parse_program(mut self) -> ParseOutcome {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        ParseOutcome {
            program,
            errors: self.errors,
        }
    }

    /// Diagnostics recorded so far
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance if the next token is `kind`; otherwise record a diagnostic and
    /// stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError {
            expected,
            found: self.peek_token.kind,
            location: self.peek_token.location,
        });
    }
}
