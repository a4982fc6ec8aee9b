//! Error types and error handling for the front end.
//!
//! This module defines the single error value returned by every stage:
//!
//! - Error structures carrying the source line and file label
//! - Specific error variants for lexing, syntax, scoping and return types
//! - The error category (`LexError`, `SyntaxError`, ...) of each variant
//! - Optional suggestions for the command line renderer

pub mod errors;

#[cfg(test)]
mod tests;
