//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at_line(line: u32) -> Position {
    Position(line, Rc::new("test.sc".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '@' }, at_line(3));

    assert_eq!(error.get_error_name(), "UnexpectedCharacter");
    assert_eq!(error.kind(), ErrorKind::Lex);
    assert_eq!(error.get_position().line(), 3);
    assert_eq!(error.get_position().file(), "test.sc");
}

#[test]
fn test_error_display_format() {
    let error = Error::new(ErrorImpl::UnexpectedCharacter { character: '\t' }, at_line(2));
    assert_eq!(error.to_string(), "test.sc:2: LexError: unexpected character '\t'");

    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "+".to_string(),
        },
        at_line(1),
    );
    assert_eq!(error.to_string(), "test.sc:1: SyntaxError: unexpected token '+'");

    let error = Error::new(
        ErrorImpl::UnknownReturnType {
            type_: "bool".to_string(),
        },
        at_line(7),
    );
    assert_eq!(
        error.to_string(),
        "test.sc:7: TypeError: unrecognized return type 'bool'"
    );
}

#[test]
fn test_semantic_messages() {
    let cases = [
        (
            ErrorImpl::VariableAlreadyDeclared {
                variable: "x".to_string(),
            },
            "SemanticError: variable already defined",
        ),
        (
            ErrorImpl::VariableNotDeclared {
                variable: "y".to_string(),
            },
            "SemanticError: variable not defined",
        ),
        (
            ErrorImpl::FunctionAlreadyDeclared {
                function: "f".to_string(),
            },
            "SemanticError: function already declared",
        ),
        (
            ErrorImpl::FunctionNotDeclared {
                function: "g".to_string(),
            },
            "SemanticError: function not defined",
        ),
    ];

    for (error_impl, message) in cases {
        let error = Error::new(error_impl, at_line(1));
        assert_eq!(error.kind(), ErrorKind::Semantic);
        assert!(
            error.to_string().contains(message),
            "`{}` should contain `{}`",
            error,
            message
        );
    }
}

#[test]
fn test_syntax_kinds() {
    let errors = [
        ErrorImpl::ExpectedToken {
            expected: "';'".to_string(),
            found: "}".to_string(),
        },
        ErrorImpl::UnexpectedEndOfInput {
            expected: "expression".to_string(),
        },
        ErrorImpl::UnmatchedCloseCurly,
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        ErrorImpl::NestingTooDeep { limit: 256 },
    ];

    for error_impl in errors {
        assert_eq!(error_impl.kind(), ErrorKind::Syntax);
    }
}

#[test]
fn test_scope_underflow_kind() {
    let error = Error::new(ErrorImpl::ScopeUnderflow, Position::null());

    assert_eq!(error.kind(), ErrorKind::Scope);
    assert_eq!(error.to_string(), "<null>:0: ScopeError: no scope left to exit");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        at_line(1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: "';'".to_string(),
            found: "}".to_string(),
        },
        at_line(1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "did you miss a semicolon?"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
