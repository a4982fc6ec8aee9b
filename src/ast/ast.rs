use serde::Serialize;

use super::{
    expressions::{BinaryExpr, BinaryOperator, CallExpr, NumberExpr, PrefixExpr, PrefixOperator, SymbolExpr},
    statements::{FnDeclStmt, ReturnStmt, VarDeclStmt},
};

/// Statement nodes.
///
/// A bare expression statement is stored as the expression itself and
/// serializes without a wrapper object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stmt {
    FunctionDeclaration(FnDeclStmt),
    MutableVariableAssignment(VarDeclStmt),
    ImmutableVariableAssignment(VarDeclStmt),
    FunctionReturn(ReturnStmt),
    #[serde(untagged)]
    Expression(Expr),
}

impl Stmt {
    pub fn name(&self) -> &'static str {
        match self {
            Stmt::FunctionDeclaration(_) => "function_declaration",
            Stmt::MutableVariableAssignment(_) => "mutable_variable_assignment",
            Stmt::ImmutableVariableAssignment(_) => "immutable_variable_assignment",
            Stmt::FunctionReturn(_) => "function_return",
            Stmt::Expression(expr) => expr.name(),
        }
    }
}

/// Expression nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    FunctionCall(CallExpr),
    Variable(SymbolExpr),
    Integer(NumberExpr),
    #[serde(rename = "unary_expression")]
    Unary(PrefixExpr),
    #[serde(rename = "binary_expression")]
    Binary(BinaryExpr),
}

impl Expr {
    pub fn name(&self) -> &'static str {
        match self {
            Expr::FunctionCall(_) => "function_call",
            Expr::Variable(_) => "variable",
            Expr::Integer(_) => "integer",
            Expr::Unary(_) => "unary_expression",
            Expr::Binary(_) => "binary_expression",
        }
    }

    pub fn integer(value: i64) -> Self {
        Expr::Integer(NumberExpr { value })
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(SymbolExpr {
            name: name.to_string(),
        })
    }

    pub fn call(name: &str, arguments: Vec<Expr>) -> Self {
        Expr::FunctionCall(CallExpr {
            name: name.to_string(),
            arguments,
        })
    }

    pub fn unary(operator: PrefixOperator, operand: Expr) -> Self {
        Expr::Unary(PrefixExpr {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
