//! # Introduction
//!
//! Front end for the Monkey programming language: a lexer that turns source
//! text into typed tokens and a recursive descent parser that builds an AST
//! from them, reporting structural mistakes as diagnostics instead of
//! stopping at the first one.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Program + diagnostics
//! ```
//!
//! 1. [`parser`]: token model, lexer, AST and parser.
//! 2. [`repl`]: line-oriented read loop that echoes the token stream.
//! 3. [`ui`]: ratatui-based inspector for a source file; not part of the
//!    stable library API.
//!
//! ## Example
//!
//! ```
//! let outcome = monkey::parser::parse("let x = 5;");
//! assert!(outcome.is_clean());
//! assert_eq!(outcome.program.to_string(), "let x = ;");
//! ```

pub mod parser;
pub mod repl;
pub mod ui;
