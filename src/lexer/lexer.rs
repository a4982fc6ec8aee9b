use std::rc::Rc;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the lexer position.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern {
            regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(),
            handler: symbol_handler,
        },
        RegexPattern {
            regex: Regex::new("^[0-9]+").unwrap(),
            handler: number_handler,
        },
        RegexPattern {
            regex: Regex::new("^ +").unwrap(),
            handler: skip_handler,
        },
        RegexPattern {
            regex: Regex::new("^\n").unwrap(),
            handler: newline_handler,
        },
        RegexPattern {
            regex: Regex::new("^\\{").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{"),
        },
        RegexPattern {
            regex: Regex::new("^\\}").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}"),
        },
        RegexPattern {
            regex: Regex::new("^\\(").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "("),
        },
        RegexPattern {
            regex: Regex::new("^\\)").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")"),
        },
        RegexPattern {
            regex: Regex::new("^=").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "="),
        },
        RegexPattern {
            regex: Regex::new("^;").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";"),
        },
        RegexPattern {
            regex: Regex::new("^:").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":"),
        },
        RegexPattern {
            regex: Regex::new("^,").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ","),
        },
        RegexPattern {
            regex: Regex::new("^\\+").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
        },
        RegexPattern {
            regex: Regex::new("^-").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-"),
        },
        RegexPattern {
            regex: Regex::new("^/").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/"),
        },
        RegexPattern {
            regex: Regex::new("^\\*").unwrap(),
            handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*"),
        },
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            line: 1,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        trace!(
            "{}:{} {} {:?}",
            self.file,
            token.line(),
            token.category(),
            token.value
        );
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    fn matched_len(&self, regex: &Regex) -> usize {
        regex.find(self.remainder()).map_or(0, |matched| matched.end())
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let len = lexer.matched_len(regex);
    let matched = lexer.remainder()[..len].to_string();

    lexer.push(MK_TOKEN!(TokenKind::Integer, matched, lexer.position()));
    lexer.advance_n(len);
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let len = lexer.matched_len(regex);
    lexer.advance_n(len);
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) {
    lexer.push(MK_TOKEN!(
        TokenKind::Newline,
        String::from("\n"),
        lexer.position()
    ));
    lexer.advance_n(1);
    lexer.line += 1;
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let len = lexer.matched_len(regex);
    let value = lexer.remainder()[..len].to_string();

    lexer.push(MK_TOKEN!(TokenKind::Identifier, value, lexer.position()));
    lexer.advance_n(len);
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                let character = lex.at().unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnexpectedCharacter { character },
                    lex.position(),
                ));
            }
        }
    }

    Ok(lex.tokens)
}
