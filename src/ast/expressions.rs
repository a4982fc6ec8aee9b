use std::fmt::Display;

use serde::Serialize;

use crate::lexer::tokens::TokenKind;

use super::ast::Expr;

/// Call of a declared function, e.g. `echo(1, x)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpr {
    pub name: String,
    #[serde(rename = "args")]
    pub arguments: Vec<Expr>,
}

/// Reference to a declared variable or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolExpr {
    pub name: String,
}

/// Integer literal. Literals are never negative; see `PrefixExpr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberExpr {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixExpr {
    #[serde(rename = "op")]
    pub operator: PrefixOperator,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryExpr {
    #[serde(rename = "op")]
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrefixOperator {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl PrefixOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(PrefixOperator::Plus),
            TokenKind::Dash => Some(PrefixOperator::Minus),
            _ => None,
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixOperator::Plus => write!(f, "+"),
            PrefixOperator::Minus => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Dash => Some(BinaryOperator::Subtract),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}
