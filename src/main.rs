use std::{fs::read_to_string, path::PathBuf, rc::Rc, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use scopec::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
    source_line,
};

/// Checks a source file and prints its syntax tree.
#[derive(Parser, Debug)]
#[command(name = "scopec")]
#[command(version)]
#[command(about = "Front end for a small statically scoped expression language")]
struct Cli {
    /// Source file to check
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// What to print once the file parses
    #[arg(long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Pretty-printed syntax tree
    Ast,
    /// Syntax tree as JSON
    Json,
    /// One token per line
    Tokens,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.to_string_lossy().into_owned());

    let file_contents = read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    let start = Instant::now();
    let tokens = match tokenize(file_contents.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => fail(&error, &file_contents),
    };
    info!("Tokenized in {:?}", start.elapsed());

    if cli.emit == Emit::Tokens {
        print_tokens(&tokens);
        return Ok(());
    }

    let parse_start = Instant::now();
    let ast = match parse(tokens, Rc::new(file_name)) {
        Ok(ast) => ast,
        Err(error) => fail(&error, &file_contents),
    };
    info!("Parsed in {:?}", parse_start.elapsed());

    match cli.emit {
        Emit::Json => println!("{}", ast_to_json(&ast)?),
        _ => println!("{:#?}", ast),
    }

    Ok(())
}

fn ast_to_json(ast: &[Stmt]) -> Result<String> {
    serde_json::to_string_pretty(ast).context("Failed to serialize the syntax tree")
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{} {} {:?}", token.line(), token.category(), token.value);
    }
}

fn fail(error: &Error, source: &str) -> ! {
    display_error(error, source);
    std::process::exit(1)
}

fn display_error(error: &Error, source: &str) {
    /*
        test.sc:2: SemanticError: variable not defined: 'y'
           |
         2 | let y = y;
           |
        help: declare `y` with `let` or `const` before using it
    */

    debug!("{} at line {}", error.get_error_name(), error.get_position().line());
    eprintln!("{}", error);

    let line = error.get_position().line();
    if let Some(line_text) = source_line(source, line) {
        let line_string = line.to_string();
        let padding = line_string.len() + 3;

        eprintln!("{:>padding$}", "|");
        eprintln!(" {} | {}", line_string, line_text.trim_end());
        eprintln!("{:>padding$}", "|");
    }

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("help: {}", tip);
    }
}
