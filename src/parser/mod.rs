//! Monkey source code front end
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token categories, token values, keyword lookup
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST) and diagnostics
//! - [`ast`]: AST node definitions
//!
//! # Supported subset
//!
//! Only `let` statements are recognised, and their right-hand side is skipped
//! up to the terminating `;`. Every other token at statement position is
//! stepped over without a diagnostic.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use parse::{ParseError, ParseOutcome, Parser};

/// Lex and parse `source` in one go
pub fn parse(source: &str) -> ParseOutcome {
    Parser::from_source(source).parse_program()
}
