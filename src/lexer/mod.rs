//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of identifiers, integer literals, operators and punctuation
//! - Line tracking through explicit newline tokens
//! - Rejection of any character outside the language's alphabet

pub mod lexer;
pub mod tokens;
