//! Lexical scope tracking for semantic validation.
//!
//! Scopes are snapshots: entering a scope copies every name visible in the
//! enclosing one, so later declarations in the enclosing scope never leak into
//! a child that already exists.

pub mod scope;

#[cfg(test)]
mod tests;
