/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt` and `Expr` node enums
/// - expressions: Payloads of the expression nodes and their operators
/// - statements: Payloads of the statement nodes
/// - types: Type annotations (return types and parameters)
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
