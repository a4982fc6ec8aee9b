use serde::Serialize;

use super::{
    ast::{Expr, Stmt},
    types::{Parameter, ReturnType},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FnDeclStmt {
    pub name: String,
    #[serde(rename = "params")]
    pub parameters: Vec<Parameter>,
    pub return_type: ReturnType,
    pub body: Vec<Stmt>,
}

/// A `let` or `const` binding; the mutability lives in the enclosing `Stmt` variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarDeclStmt {
    pub name: String,
    #[serde(rename = "expr")]
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnStmt {
    #[serde(rename = "expr")]
    pub value: Expr,
}
