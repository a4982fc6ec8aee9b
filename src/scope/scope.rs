use std::collections::HashSet;

use log::debug;

use crate::errors::errors::ErrorImpl;

/// The names visible at one point of the program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub mutable_variables: HashSet<String>,
    pub immutable_variables: HashSet<String>,
    pub functions: HashSet<String>,
    /// Variables declared in this scope itself, as opposed to copied in on entry.
    local_variables: HashSet<String>,
    /// Functions declared in this scope itself.
    local_functions: HashSet<String>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    /// A fresh scope that sees everything this one sees and has declared nothing yet.
    pub fn child(&self) -> Self {
        Scope {
            mutable_variables: self.mutable_variables.clone(),
            immutable_variables: self.immutable_variables.clone(),
            functions: self.functions.clone(),
            local_variables: HashSet::new(),
            local_functions: HashSet::new(),
        }
    }

    pub fn declare_variable(&mut self, name: &str, mutable: bool) {
        if mutable {
            self.immutable_variables.remove(name);
            self.mutable_variables.insert(name.to_string());
        } else {
            self.mutable_variables.remove(name);
            self.immutable_variables.insert(name.to_string());
        }
        self.local_variables.insert(name.to_string());
    }

    pub fn declare_function(&mut self, name: &str) {
        self.functions.insert(name.to_string());
        self.local_functions.insert(name.to_string());
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.mutable_variables.contains(name) || self.immutable_variables.contains(name)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn has_local_variable(&self, name: &str) -> bool {
        self.local_variables.contains(name)
    }

    pub fn has_local_function(&self, name: &str) -> bool {
        self.local_functions.contains(name)
    }

    /// `Some(true)` for a `let` binding, `Some(false)` for `const` or a parameter.
    pub fn is_mutable(&self, name: &str) -> Option<bool> {
        if self.mutable_variables.contains(name) {
            Some(true)
        } else if self.immutable_variables.contains(name) {
            Some(false)
        } else {
            None
        }
    }
}

/// A stack of scope snapshots, innermost last.
///
/// Only the innermost scope is ever mutated. Lookups never walk the stack:
/// everything an ancestor could see was copied into the child on entry.
#[derive(Debug, Default)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl ScopeTable {
    pub fn new() -> Self {
        ScopeTable::default()
    }

    pub fn enter(&mut self) {
        let scope = match self.scopes.last() {
            Some(current) => current.child(),
            None => Scope::new(),
        };
        self.scopes.push(scope);
        debug!("entered scope at depth {}", self.scopes.len());
    }

    pub fn exit(&mut self) -> Result<Scope, ErrorImpl> {
        let scope = self.scopes.pop().ok_or(ErrorImpl::ScopeUnderflow)?;
        debug!("exited scope, depth now {}", self.scopes.len());
        Ok(scope)
    }

    /// Records `name` in the current scope. Duplicate checks are the caller's job.
    pub fn declare_variable(&mut self, name: &str, mutable: bool) -> Result<(), ErrorImpl> {
        let scope = self.current_mut()?;
        match scope.is_mutable(name) {
            Some(outer) => debug!(
                "`{}` shadows {} binding as {}",
                name,
                mutability(outer),
                mutability(mutable)
            ),
            None => debug!("declaring {} variable `{}`", mutability(mutable), name),
        }
        scope.declare_variable(name, mutable);
        Ok(())
    }

    pub fn declare_function(&mut self, name: &str) -> Result<(), ErrorImpl> {
        debug!("declaring function `{}`", name);
        self.current_mut()?.declare_function(name);
        Ok(())
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.current().is_some_and(|scope| scope.has_variable(name))
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.current().is_some_and(|scope| scope.has_function(name))
    }

    pub fn has_local_variable(&self, name: &str) -> bool {
        self.current().is_some_and(|scope| scope.has_local_variable(name))
    }

    pub fn has_local_function(&self, name: &str) -> bool {
        self.current().is_some_and(|scope| scope.has_local_function(name))
    }

    pub fn current(&self) -> Option<&Scope> {
        self.scopes.last()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    fn current_mut(&mut self) -> Result<&mut Scope, ErrorImpl> {
        self.scopes.last_mut().ok_or(ErrorImpl::ScopeUnderflow)
    }
}

fn mutability(mutable: bool) -> &'static str {
    if mutable {
        "mutable"
    } else {
        "immutable"
    }
}
