//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser owns the token cursor and the scope table for exactly one
//! parse; statement and expression handlers are dispatched through the
//! lookup tables registered in `lookups`.

use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::ast::Stmt,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    scope::scope::ScopeTable,
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Functions visible in the global scope without a declaration.
pub const BUILTIN_FUNCTIONS: [&str; 1] = ["echo"];

/// Deepest allowed nesting of expressions and blocks combined.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// Newline tokens are layout only: every method that looks at the current
/// token first steps over them, counting lines as it goes.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Line of the token at `pos`, or of the end of input
    line: u32,
    /// The name of the source file being parsed
    file: Rc<String>,
    /// Declared names, innermost scope last
    scopes: ScopeTable,
    /// Expressions and blocks currently being parsed
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance with empty lookup tables and no scopes.
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            line: 1,
            file,
            scopes: ScopeTable::new(),
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    fn skip_newlines(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if token.kind != TokenKind::Newline {
                break;
            }
            self.pos += 1;
            self.line += 1;
        }
    }

    /// Returns the current token without advancing, or `None` at the end of input.
    pub fn current_token(&mut self) -> Option<&Token> {
        self.skip_newlines();
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.skip_newlines();
        match self.tokens.get(self.pos) {
            Some(token) => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            None => Err(self.error(ErrorImpl::UnexpectedEndOfInput {
                expected: String::from("more input"),
            })),
        }
    }

    /// Expects a token of the specified kind, naming it by its kind on failure.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_described(expected_kind, &expected_kind.to_string())
    }

    /// Expects a token of the specified kind, naming it by `expected` on failure.
    pub fn expect_described(
        &mut self,
        expected_kind: TokenKind,
        expected: &str,
    ) -> Result<Token, Error> {
        if self.current_token_kind() == Some(expected_kind) {
            self.advance()
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Builds the error for finding something other than `expected` at the current token.
    pub fn unexpected(&mut self, expected: &str) -> Error {
        let expected = String::from(expected);
        match self.current_token() {
            Some(token) => Error::new(
                ErrorImpl::ExpectedToken {
                    expected,
                    found: token.value.clone(),
                },
                token.position.clone(),
            ),
            None => self.error(ErrorImpl::UnexpectedEndOfInput { expected }),
        }
    }

    /// Checks if there are more tokens to parse, ignoring trailing newlines.
    pub fn has_tokens(&mut self) -> bool {
        self.current_token().is_some()
    }

    /// Wraps `error` with the parser's current position.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    /// Enters one more level of nesting, failing past `MAX_NESTING_DEPTH`.
    pub fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn scopes(&self) -> &ScopeTable {
        &self.scopes
    }

    pub fn enter_scope(&mut self) {
        self.scopes.enter();
    }

    pub fn exit_scope(&mut self) -> Result<(), Error> {
        self.scopes.exit().map_err(|error| self.error(error))?;
        Ok(())
    }

    pub fn declare_variable(&mut self, name: &str, mutable: bool) -> Result<(), Error> {
        self.scopes
            .declare_variable(name, mutable)
            .map_err(|error| self.error(error))
    }

    pub fn declare_function(&mut self, name: &str) -> Result<(), Error> {
        self.scopes
            .declare_function(name)
            .map_err(|error| self.error(error))
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix handlers do not touch the binding power table, so a token may
    /// carry both a prefix and an infix meaning.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a leading keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }
}

/// Parses a stream of tokens into the program's top-level statements.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, enters the global scope with the builtin
/// functions declared, and parses statements until the tokens run out.
/// The first error aborts the parse.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Vec<Stmt>, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    parser.enter_scope();
    for builtin in BUILTIN_FUNCTIONS {
        parser.declare_function(builtin)?;
    }

    let mut body = vec![];

    while parser.has_tokens() {
        if parser.current_token_kind() == Some(TokenKind::CloseCurly) {
            return Err(parser.error(ErrorImpl::UnmatchedCloseCurly));
        }

        if let Some(stmt) = parse_stmt(&mut parser)? {
            body.push(stmt);
        }
    }

    parser.exit_scope()?;
    debug!("parsed {} top-level statements", body.len());

    Ok(body)
}
