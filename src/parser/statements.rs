//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! statement ::= let_stmt
//! let_stmt  ::= "let" IDENT "=" <tokens up to ";"> ";"
//! ```
//!
//! Any other token at statement position produces no statement; the driver
//! steps over it. New statement kinds are added as arms of
//! [`Parser::parse_statement`].

use crate::parser::ast::{Identifier, LetStatement, Statement};
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement starting at `cur_token`
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            _ => None,
        }
    }

    /// Parse `let <ident> = ...;`
    ///
    /// On a missing name or `=` the statement is dropped and the cursor is left
    /// where [`Parser::expect_peek`] stopped; no skip to the next `;` happens.
    /// On success the cursor ends on the terminating `;`, or on `EOF` if the
    /// input ends first.
    pub(crate) fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier::new(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        // TODO: parse the value expression instead of skipping to the `;`
        while !self.cur_token_is(TokenKind::Semicolon) && !self.cur_token_is(TokenKind::Eof) {
            self.next_token();
        }

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Node;

    fn let_names(source: &str) -> Vec<String> {
        let outcome = Parser::from_source(source).parse_program();
        outcome
            .program
            .statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Let(stmt) => stmt.name.value.clone(),
            })
            .collect()
    }

    #[test]
    fn test_parse_let_statements() {
        let source = "
            let x = 5;
            let y = 10;
            let foobar = 838383;
        ";
        let outcome = Parser::from_source(source).parse_program();

        assert!(outcome.is_clean(), "errors: {:?}", outcome.errors);
        assert_eq!(outcome.program.statements.len(), 3);
        for (stmt, expected) in outcome.program.statements.iter().zip(["x", "y", "foobar"]) {
            assert_eq!(stmt.token_literal(), "let");
            let Statement::Let(stmt) = stmt;
            assert_eq!(stmt.name.value, expected);
            assert_eq!(stmt.name.token_literal(), expected);
            assert!(stmt.value.is_none());
        }
    }

    #[test]
    fn test_let_ends_on_semicolon() {
        let mut parser = Parser::from_source("let x = 1 + 2 * y; z");
        let stmt = parser.parse_let_statement();

        assert!(stmt.is_some());
        assert_eq!(parser.cur_token.kind, TokenKind::Semicolon);
        assert_eq!(parser.peek_token.literal, "z");
    }

    #[test]
    fn test_let_without_semicolon_terminates() {
        let outcome = Parser::from_source("let x = 5").parse_program();
        assert!(outcome.is_clean());
        assert_eq!(outcome.program.statements.len(), 1);
    }

    #[test]
    fn test_failure_leaves_cursor_in_place() {
        let mut parser = Parser::from_source("let x 5;");
        assert!(parser.parse_let_statement().is_none());
        assert_eq!(parser.cur_token.literal, "x");
        assert_eq!(parser.peek_token.literal, "5");
    }

    #[test]
    fn test_non_let_tokens_are_skipped() {
        assert_eq!(let_names("5; foo; let a = 1; + - let b = 2;"), vec!["a", "b"]);
    }
}
