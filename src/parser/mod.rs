//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree while validating every declaration and
//! use of a name against the scope table. It handles:
//!
//! - Statement parsing (function declarations, bindings, returns)
//! - Expression parsing (prefix and binary operators, calls, literals)
//! - Return type annotations
//! - Fail-fast reporting: the first error ends the parse
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
