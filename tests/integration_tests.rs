//! Integration tests for the complete front end.
//!
//! These tests run source text through tokenization and parsing and check
//! the resulting syntax tree, its JSON form, and the diagnostics.

use pretty_assertions::assert_eq;
use scopec::{
    ast::{
        ast::{Expr, Stmt},
        expressions::BinaryOperator,
        statements::VarDeclStmt,
    },
    errors::errors::ErrorKind,
    parse_source,
};
use serde_json::json;

#[test]
fn test_const_binding_scenario() {
    let ast = parse_source("const x = 1 + 2;", "main.sc").unwrap();

    assert_eq!(
        ast,
        vec![Stmt::ImmutableVariableAssignment(VarDeclStmt {
            name: "x".to_string(),
            value: Expr::binary(BinaryOperator::Add, Expr::integer(1), Expr::integer(2)),
        })]
    );
}

#[test]
fn test_const_binding_json() {
    let ast = parse_source("const x = 1 + 2;", "main.sc").unwrap();

    assert_eq!(
        serde_json::to_value(&ast).unwrap(),
        json!([{
            "type": "immutable_variable_assignment",
            "name": "x",
            "expr": {
                "type": "binary_expression",
                "op": "+",
                "left": { "type": "integer", "value": 1 },
                "right": { "type": "integer", "value": 2 }
            }
        }])
    );
}

#[test]
fn test_function_declaration_json() {
    let ast = parse_source("fn add(a: int, b: int): int { return a + b; };", "main.sc").unwrap();

    assert_eq!(
        serde_json::to_value(&ast).unwrap(),
        json!([{
            "type": "function_declaration",
            "name": "add",
            "params": [
                { "name": "a", "type": "int" },
                { "name": "b", "type": "int" }
            ],
            "return_type": "int",
            "body": [{
                "type": "function_return",
                "expr": {
                    "type": "binary_expression",
                    "op": "+",
                    "left": { "type": "variable", "name": "a" },
                    "right": { "type": "variable", "name": "b" }
                }
            }]
        }])
    );
}

#[test]
fn test_expression_statement_json_has_no_wrapper() {
    let ast = parse_source("let n = 2;\necho(-n * 3);", "main.sc").unwrap();

    assert_eq!(
        serde_json::to_value(&ast[1]).unwrap(),
        json!({
            "type": "function_call",
            "name": "echo",
            "args": [{
                "type": "binary_expression",
                "op": "*",
                "left": {
                    "type": "unary_expression",
                    "op": "-",
                    "operand": { "type": "variable", "name": "n" }
                },
                "right": { "type": "integer", "value": 3 }
            }]
        })
    );
}

#[test]
fn test_program_with_several_functions() {
    let source = "\
const base = 10;

fn square(n: int): int {
  return n * n;
};

fn report(v: int): void {
  echo(v);
};

fn main(): void {
  let total = square(base) + square(-2);
  report(total);
};

main();
";
    let ast = parse_source(source, "program.sc").unwrap();

    let names: Vec<&str> = ast.iter().map(|stmt| stmt.name()).collect();
    assert_eq!(
        names,
        vec![
            "immutable_variable_assignment",
            "function_declaration",
            "function_declaration",
            "function_declaration",
            "function_call",
        ]
    );
}

#[test]
fn test_self_reference_diagnostic() {
    let error = parse_source("let y = y;", "main.sc").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Semantic);
    assert_eq!(
        error.to_string(),
        "main.sc:1: SemanticError: variable not defined: 'y'"
    );
}

#[test]
fn test_tab_diagnostic() {
    let error = parse_source("const a = 1;\n\tconst b = 2;", "main.sc").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().line(), 2);
}

#[test]
fn test_unknown_return_type_diagnostic() {
    let error = parse_source("fn f(): bool { return 1; };", "main.sc").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Type);
    assert_eq!(
        error.to_string(),
        "main.sc:1: TypeError: unrecognized return type 'bool'"
    );
}

#[test]
fn test_first_error_wins() {
    let error = parse_source("let a = b;\nfn f(): bool { return 1; };\n\t", "main.sc").unwrap_err();

    // The tab on line 3 is reached first, during tokenization.
    assert_eq!(error.kind(), ErrorKind::Lex);

    let error = parse_source("let a = b;\nfn f(): bool { return 1; };", "main.sc").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Semantic);
    assert_eq!(error.get_position().line(), 1);
}

#[test]
fn test_independent_parses_share_no_state() {
    parse_source("fn f(): int { return 1; };", "first.sc").unwrap();

    let error = parse_source("const x = f();", "second.sc").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Semantic);
    assert_eq!(error.get_position().file(), "second.sc");
}
