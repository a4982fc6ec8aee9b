use std::fmt::Display;

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Plus,
    Dash,
    Slash,
    Star,

    Semicolon,
    Colon,
    Comma,

    Newline,
}

/// The coarse lexeme classes a token kind falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Identifier,
    Integer,
    Operator,
    Punctuation,
    Parenthesis,
    Newline,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::Integer => TokenCategory::Integer,
            TokenKind::Assignment
            | TokenKind::Plus
            | TokenKind::Dash
            | TokenKind::Slash
            | TokenKind::Star => TokenCategory::Operator,
            TokenKind::Semicolon | TokenKind::Colon | TokenKind::Comma => {
                TokenCategory::Punctuation
            }
            TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::OpenParen
            | TokenKind::CloseParen => TokenCategory::Parenthesis,
            TokenKind::Newline => TokenCategory::Newline,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::OpenCurly => write!(f, "'{{'"),
            TokenKind::CloseCurly => write!(f, "'}}'"),
            TokenKind::OpenParen => write!(f, "'('"),
            TokenKind::CloseParen => write!(f, "')'"),
            TokenKind::Assignment => write!(f, "'='"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Dash => write!(f, "'-'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Comma => write!(f, "','"),
        }
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenCategory::Identifier => write!(f, "identifier"),
            TokenCategory::Integer => write!(f, "integer"),
            TokenCategory::Operator => write!(f, "operator"),
            TokenCategory::Punctuation => write!(f, "punctuation"),
            TokenCategory::Parenthesis => write!(f, "parenthesis"),
            TokenCategory::Newline => write!(f, "newline"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {:?},\nline: {}}}",
            self.kind,
            self.value,
            self.line()
        )
    }
}

impl Token {
    pub fn line(&self) -> u32 {
        self.position.line()
    }

    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Whether this token is the identifier spelled `word`, such as a keyword.
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Identifier && self.value == word
    }
}
