use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::UnmatchedCloseCurly => "UnmatchedCloseCurly",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
            ErrorImpl::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            ErrorImpl::UnknownReturnType { .. } => "UnknownReturnType",
            ErrorImpl::ScopeUnderflow => "ScopeUnderflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character } if *character == '\t' => {
                ErrorTip::Suggestion(String::from("indent with spaces, tabs are not accepted"))
            }
            ErrorImpl::ExpectedToken { expected, .. } if expected == "';'" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::UnmatchedCloseCurly => {
                ErrorTip::Suggestion(String::from("remove the `}` or add the matching `{`"))
            }
            ErrorImpl::NumberParseError { .. } => ErrorTip::Suggestion(String::from(
                "integer literals must fit in a signed 64 bit integer",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression into intermediate `let` bindings",
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "declare `{}` with `let` or `const` before using it",
                variable
            )),
            ErrorImpl::FunctionNotDeclared { .. } => ErrorTip::Suggestion(String::from(
                "functions must be declared before they are called",
            )),
            ErrorImpl::UnknownReturnType { .. } => {
                ErrorTip::Suggestion(String::from("expected one of `void`, `int`"))
            }
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.position.file(),
            self.position.line(),
            self.kind(),
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

/// The diagnostic category an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Syntax,
    Semantic,
    Type,
    /// Unbalanced scope handling; never caused by user input alone.
    Scope,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lex => write!(f, "LexError"),
            ErrorKind::Syntax => write!(f, "SyntaxError"),
            ErrorKind::Semantic => write!(f, "SemanticError"),
            ErrorKind::Type => write!(f, "TypeError"),
            ErrorKind::Scope => write!(f, "ScopeError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter { character: char },
    #[error("unexpected token '{token}'")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, found '{found}'")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("unmatched closing brace '}}'")]
    UnmatchedCloseCurly,
    #[error("integer literal '{token}' is out of range")]
    NumberParseError { token: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("variable already defined: '{variable}'")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable not defined: '{variable}'")]
    VariableNotDeclared { variable: String },
    #[error("function already declared: '{function}'")]
    FunctionAlreadyDeclared { function: String },
    #[error("function not defined: '{function}'")]
    FunctionNotDeclared { function: String },
    #[error("unrecognized return type '{type_}'")]
    UnknownReturnType { type_: String },
    #[error("no scope left to exit")]
    ScopeUnderflow,
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::ExpectedToken { .. }
            | ErrorImpl::UnexpectedEndOfInput { .. }
            | ErrorImpl::UnmatchedCloseCurly
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Syntax,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::FunctionAlreadyDeclared { .. }
            | ErrorImpl::FunctionNotDeclared { .. } => ErrorKind::Semantic,
            ErrorImpl::UnknownReturnType { .. } => ErrorKind::Type,
            ErrorImpl::ScopeUnderflow => ErrorKind::Scope,
        }
    }
}
