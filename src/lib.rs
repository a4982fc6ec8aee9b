#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod scope;

/// A source location: the 1-based line number and the diagnostic label of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    #[cfg(test)]
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn file(&self) -> &str {
        &self.1
    }
}

/// Tokenizes and parses `source` in one go, labelling diagnostics with `file`.
pub fn parse_source(source: &str, file: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = tokenize(source.to_string(), Some(file.to_string()))?;
    parse(tokens, Rc::new(file.to_string()))
}

/// Returns the text of the 1-based `line` in `source`, without its line terminator.
pub fn source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line as usize - 1)
}
