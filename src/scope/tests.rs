//! Unit tests for scope tracking.

use crate::errors::errors::ErrorImpl;

use super::scope::{Scope, ScopeTable};

#[test]
fn test_enter_copies_enclosing_names() {
    let mut table = ScopeTable::new();
    table.enter();
    table.declare_variable("a", true).unwrap();
    table.declare_variable("b", false).unwrap();
    table.declare_function("f").unwrap();

    table.enter();

    assert_eq!(table.depth(), 2);
    assert!(table.has_variable("a"));
    assert!(table.has_variable("b"));
    assert!(table.has_function("f"));
    assert!(!table.has_local_variable("a"));
    assert!(!table.has_local_function("f"));
}

#[test]
fn test_child_declarations_are_dropped_on_exit() {
    let mut table = ScopeTable::new();
    table.enter();
    table.enter();
    table.declare_variable("inner", false).unwrap();
    table.declare_function("helper").unwrap();

    let child = table.exit().unwrap();

    assert!(child.has_variable("inner"));
    assert!(!table.has_variable("inner"));
    assert!(!table.has_function("helper"));
}

#[test]
fn test_snapshot_isolation_from_later_ancestor_declarations() {
    let mut global = Scope::new();
    global.declare_variable("before", true);

    let child = global.child();
    global.declare_variable("after", true);
    global.declare_function("later");

    assert!(child.has_variable("before"));
    assert!(!child.has_variable("after"));
    assert!(!child.has_function("later"));
}

#[test]
fn test_reentering_sees_new_ancestor_declarations() {
    let mut table = ScopeTable::new();
    table.enter();
    table.enter();
    table.exit().unwrap();

    table.declare_function("g").unwrap();
    table.enter();

    assert!(table.has_function("g"));
}

#[test]
fn test_mutability_is_recorded() {
    let mut scope = Scope::new();
    scope.declare_variable("m", true);
    scope.declare_variable("i", false);

    assert_eq!(scope.is_mutable("m"), Some(true));
    assert_eq!(scope.is_mutable("i"), Some(false));
    assert_eq!(scope.is_mutable("missing"), None);
}

#[test]
fn test_shadowing_replaces_mutability() {
    let mut global = Scope::new();
    global.declare_variable("x", false);

    let mut child = global.child();
    child.declare_variable("x", true);

    assert_eq!(child.is_mutable("x"), Some(true));
    assert!(child.has_local_variable("x"));
    assert_eq!(global.is_mutable("x"), Some(false));
}

#[test]
fn test_variables_and_functions_are_separate() {
    let mut table = ScopeTable::new();
    table.enter();
    table.declare_function("echo").unwrap();

    assert!(table.has_function("echo"));
    assert!(!table.has_variable("echo"));
}

#[test]
fn test_exit_on_empty_table_fails() {
    let mut table = ScopeTable::new();

    assert_eq!(table.exit().unwrap_err(), ErrorImpl::ScopeUnderflow);

    table.enter();
    assert!(table.exit().is_ok());
    assert_eq!(table.exit().unwrap_err(), ErrorImpl::ScopeUnderflow);
}

#[test]
fn test_declare_on_empty_table_fails() {
    let mut table = ScopeTable::new();

    assert_eq!(table.declare_variable("x", true).unwrap_err(), ErrorImpl::ScopeUnderflow);
    assert_eq!(table.declare_function("f").unwrap_err(), ErrorImpl::ScopeUnderflow);
    assert!(!table.has_variable("x"));
    assert!(table.current().is_none());
}

#[test]
fn test_table_shadowing_replaces_mutability() {
    let mut table = ScopeTable::new();
    table.enter();
    table.declare_variable("x", false).unwrap();
    table.enter();
    table.declare_variable("x", true).unwrap();

    assert_eq!(table.current().unwrap().is_mutable("x"), Some(true));
    table.exit().unwrap();
    assert_eq!(table.current().unwrap().is_mutable("x"), Some(false));
}
