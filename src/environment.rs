use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::literal::Literal;
use crate::token::Token;

/// A lexical scope: a flat table of bindings plus an owned link to its
/// parent. No environment outlives the scope that created it, so the chain
/// is a plain owned tree rather than a shared, reference-counted one.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    parent: Option<Box<Environment>>,
    values: HashMap<String, Literal>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Creates a child scope nested inside `self`, taking ownership of it.
    pub fn child(self) -> Self {
        Environment {
            parent: Some(Box::new(self)),
            values: HashMap::new(),
        }
    }

    /// Discards this scope and returns its parent, restoring it as the
    /// current scope. Panics if called on the outermost scope, which would
    /// be a bug in the caller (every `child()` is matched by a `pop()`).
    pub fn pop(self) -> Self {
        *self.parent.expect("popped the outermost environment")
    }

    /// Binds `name` in this scope, shadowing any binding of the same name in
    /// an enclosing scope. Redefinition within the same scope is allowed.
    pub fn define(&mut self, name: &str, value: Literal) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &Token) -> Result<Literal, RuntimeError> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        if let Some(parent) = &self.parent {
            return parent.get(name);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }

    /// Assigns to an existing binding, walking outward through enclosing
    /// scopes. Unlike `define`, this never creates a new binding.
    pub fn assign(&mut self, name: &Token, value: Literal) -> Result<(), RuntimeError> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }

        if let Some(parent) = &mut self.parent {
            return parent.assign(name, value);
        }

        Err(RuntimeError {
            token: name.clone(),
            message: format!("Undefined variable '{}'.", name.lexeme),
        })
    }
}
