// monkey: Monkey lexer/parser front end with token REPL and inspector

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use monkey::parser::lexer::Lexer;
use monkey::parser::parse;
use monkey::repl::Repl;
use monkey::ui::App;

/// What the command line asked for
enum Mode {
    Repl,
    Inspect(String),
    Tokens(String),
    Check(String),
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--tokens | --check] [file.monkey]", program_name);
    eprintln!();
    eprintln!("  {}                     # Start the token REPL", program_name);
    eprintln!("  {} prog.monkey         # Inspect a file in the TUI", program_name);
    eprintln!("  {} --tokens prog.monkey  # Print the token stream", program_name);
    eprintln!("  {} --check prog.monkey   # Report parse diagnostics", program_name);
}

fn parse_args(args: &[String]) -> Option<Mode> {
    match args {
        [] => Some(Mode::Repl),
        [flag, file] if flag == "--tokens" => Some(Mode::Tokens(file.clone())),
        [flag, file] if flag == "--check" => Some(Mode::Check(file.clone())),
        [file] if !file.starts_with("--") => Some(Mode::Inspect(file.clone())),
        _ => None,
    }
}

fn read_source(program_name: &str, path: &str) -> String {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        print_usage(program_name);
        std::process::exit(1);
    }

    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", path, e);
            std::process::exit(1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("monkey");

    let Some(mode) = parse_args(args.get(1..).unwrap_or(&[])) else {
        print_usage(program_name);
        std::process::exit(1);
    };

    match mode {
        Mode::Repl => {
            let stdout = io::stdout();
            let color = stdout.is_terminal();
            println!("Monkey token REPL. Type a line to see its tokens, `:ast <code>` to parse it.");
            Repl::new(color).run(io::stdin().lock(), &mut stdout.lock())?;
        }
        Mode::Tokens(path) => {
            let source = read_source(program_name, &path);
            for token in Lexer::new(&source) {
                println!("{}:{}\t{}", token.location.line, token.location.column, token);
            }
        }
        Mode::Check(path) => {
            let source = read_source(program_name, &path);
            let outcome = parse(&source);
            for err in &outcome.errors {
                eprintln!(
                    "{}:{}:{}: {}",
                    path, err.location.line, err.location.column, err
                );
            }
            if !outcome.is_clean() {
                std::process::exit(1);
            }
            eprintln!(
                "Parsed successfully. Found {} statement(s).",
                outcome.program.statements.len()
            );
        }
        Mode::Inspect(path) => {
            let source = read_source(program_name, &path);
            run_inspector(source)?;
        }
    }

    Ok(())
}

fn run_inspector(source: String) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(source);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
