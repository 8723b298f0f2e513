use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Function values hold one of these for their captured scope, and every
/// call frame links back to one, so a single environment may be reachable
/// from many places at once. A recursive binding such as
/// `let f = fn() { f(); };` makes the handle chain cyclic; the cycle is
/// accepted and simply never collected.
pub type SharedEnv = Rc<RefCell<Environment>>;

/// A lexical scope: a mapping from names to values plus an optional link to
/// the enclosing scope.
///
/// Lookup walks outward along the chain; binding always writes the
/// innermost scope. The root environment is created by the driver and
/// survives across evaluations, which is what gives the REPL its
/// session-persistent bindings.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<SharedEnv>,
}

impl Environment {
    /// Creates a fresh root environment with no enclosing scope.
    #[must_use]
    pub fn root() -> SharedEnv {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Used for call frames: the new scope sees every binding of the
    /// captured scope but writes only its own store.
    #[must_use]
    pub fn enclosed(outer: SharedEnv) -> SharedEnv {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(outer), }))
    }

    /// Looks up `name` along the scope chain, innermost first.
    ///
    /// The bound value is returned as a clone; container values share their
    /// underlying storage with the binding, so the clone observes the same
    /// array or hash contents.
    ///
    /// # Parameters
    /// - `name`: The identifier to resolve.
    ///
    /// # Returns
    /// `Some(Value)` if the name is bound anywhere along the chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds `name` to `value` in this scope, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
