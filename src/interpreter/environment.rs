use std::collections::{BTreeMap, HashMap};

use crate::interpreter::value::Value;

/// Index of a scope inside an [`Environment`].
///
/// Ids are only meaningful for the environment that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The root scope every environment starts with.
    pub const ROOT: Self = Self(0);
}

/// One level of variable bindings.
#[derive(Debug, Default)]
struct Scope {
    values: HashMap<String, Value>,
    /// Non-owning link to the enclosing scope.
    parent: Option<ScopeId>,
}

/// Stores variable bindings for one run of the interpreter.
///
/// Scopes live in an arena and refer to their parent by index, so a child
/// never owns its parent. Lookups and assignments that miss locally walk the
/// parent chain; definitions always write to the given scope.
///
/// # Panics
/// Methods taking a [`ScopeId`] panic if the id came from a different
/// environment.
///
/// # Example
/// ```
/// use vilang::interpreter::{
///     environment::{Environment, ScopeId},
///     value::Value,
/// };
///
/// let mut env = Environment::new();
/// env.define(ScopeId::ROOT, "x", Value::Number(1.0));
///
/// let inner = env.push_scope(ScopeId::ROOT);
/// assert_eq!(env.get(inner, "x"), Some(&Value::Number(1.0)));
/// ```
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment containing only the empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope { values: HashMap::new(),
                                 parent: Some(parent), });
        ScopeId(self.scopes.len() - 1)
    }

    /// Returns the parent of `scope`, or `None` for a root.
    #[must_use]
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0].parent
    }

    /// Binds `name` in `scope` itself, replacing any existing local binding
    /// and shadowing bindings of the same name in ancestors.
    pub fn define(&mut self, scope: ScopeId, name: impl Into<String>, value: Value) {
        self.scopes[scope.0].values.insert(name.into(), value);
    }

    /// Looks up `name` starting at `scope` and walking outward.
    #[must_use]
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<&Value> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.values.get(name) {
                return Some(value);
            }
            current = scope.parent;
        }
        None
    }

    /// Rebinds the nearest existing `name`, starting at `scope`.
    ///
    /// Returns `false`, leaving every scope untouched, when no scope in the
    /// chain defines `name`.
    #[must_use]
    pub fn set(&mut self, scope: ScopeId, name: &str, value: Value) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &mut self.scopes[id.0];
            if let Some(slot) = scope.values.get_mut(name) {
                *slot = value;
                return true;
            }
            current = scope.parent;
        }
        false
    }

    /// Collects every binding visible from `scope`, inner scopes shadowing
    /// outer ones, ordered by name.
    #[must_use]
    pub fn snapshot(&self, scope: ScopeId) -> BTreeMap<String, Value> {
        let mut chain = Vec::new();
        let mut current = Some(scope);
        while let Some(id) = current {
            chain.push(id);
            current = self.scopes[id.0].parent;
        }

        let mut bindings = BTreeMap::new();
        for id in chain.into_iter().rev() {
            for (name, value) in &self.scopes[id.0].values {
                bindings.insert(name.clone(), value.clone());
            }
        }
        bindings
    }
}
