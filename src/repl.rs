//! Read loop that echoes the token stream of every line
//!
//! Each line read from the input is lexed and its tokens are written back one
//! per line as `{Type:LET Literal:let}`. A line starting with `:ast` is parsed
//! instead, and the rendered program plus any diagnostics are written out.

use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use crossterm::style::{style, Color, Stylize};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

const AST_COMMAND: &str = ":ast";

pub struct Repl {
    /// Colour output with ANSI escapes
    color: bool,
}

impl Repl {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Run until `input` is exhausted
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;

            match line.trim_start().strip_prefix(AST_COMMAND) {
                Some(rest) => self.print_program(rest, out)?,
                None => self.echo_tokens(&line, out)?,
            }

            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)
    }

    fn echo_tokens<W: Write>(&self, line: &str, out: &mut W) -> io::Result<()> {
        for token in Lexer::new(line).take_while(|t| !t.is(TokenKind::Eof)) {
            if self.color {
                writeln!(
                    out,
                    "{{Type:{} Literal:{}}}",
                    style(token.kind.name()).with(kind_color(&token)),
                    token.literal
                )?;
            } else {
                writeln!(out, "{}", token)?;
            }
        }
        Ok(())
    }

    fn print_program<W: Write>(&self, source: &str, out: &mut W) -> io::Result<()> {
        let outcome = crate::parser::parse(source);

        writeln!(out, "{}", outcome.program)?;
        for err in &outcome.errors {
            if self.color {
                writeln!(out, "{}: {}", err.location, style(err).with(Color::Red))?;
            } else {
                writeln!(out, "{}: {}", err.location, err)?;
            }
        }
        Ok(())
    }
}

fn kind_color(token: &Token) -> Color {
    match token.kind {
        TokenKind::Illegal => Color::Red,
        TokenKind::Ident => Color::Reset,
        TokenKind::Int => Color::DarkYellow,
        kind if kind.is_keyword() => Color::Blue,
        _ => Color::Cyan,
    }
}
