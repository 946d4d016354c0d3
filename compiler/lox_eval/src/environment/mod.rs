//! Scope chain for variable storage.
//!
//! Frames live in a `Vec` and refer to their enclosing frame by index, so
//! the chain needs no shared ownership. Frames are pushed and popped in
//! stack order; the current frame is always the last one.

use rustc_hash::FxHashMap;
use thiserror::Error;

use lox_ir::Name;

use crate::Value;

/// Index of a frame in an [`Environment`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The global frame; created with the environment, never popped.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        ScopeId(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// Lookup or assignment failed: no frame on the chain binds the name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("undefined variable {0:?}")]
    Undefined(Name),
}

/// A single frame.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<Name, Value>,
    enclosing: Option<ScopeId>,
}

impl Scope {
    fn with_enclosing(enclosing: ScopeId) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            enclosing: Some(enclosing),
        }
    }
}

/// Scope chain rooted at the global frame.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    /// An environment holding only an empty global frame.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
            current: ScopeId::GLOBAL,
        }
    }

    /// Bind `name` in the current frame, replacing any binding it already
    /// has there. Outer bindings of the same name are shadowed, not touched.
    pub fn define(&mut self, name: Name, value: Value) {
        self.frame_mut(self.current).bindings.insert(name, value);
    }

    /// Innermost binding of `name`, searching outward from the current
    /// frame.
    pub fn get(&self, name: Name) -> Result<&Value, ScopeError> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let frame = self.frame(scope_id);
            if let Some(value) = frame.bindings.get(&name) {
                return Ok(value);
            }
            id = frame.enclosing;
        }
        Err(ScopeError::Undefined(name))
    }

    /// Overwrite the innermost existing binding of `name`.
    ///
    /// Never creates a binding: if no frame on the chain has `name`, the
    /// environment is left unchanged.
    pub fn assign(&mut self, name: Name, value: Value) -> Result<(), ScopeError> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let frame = self.frame_mut(scope_id);
            if let Some(slot) = frame.bindings.get_mut(&name) {
                *slot = value;
                return Ok(());
            }
            id = frame.enclosing;
        }
        Err(ScopeError::Undefined(name))
    }

    /// Whether the current frame itself binds `name`.
    pub fn is_defined_locally(&self, name: Name) -> bool {
        self.frame(self.current).bindings.contains_key(&name)
    }

    /// Open a frame nested in the current one and make it current.
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId::from_index(self.scopes.len());
        self.scopes.push(Scope::with_enclosing(self.current));
        self.current = id;
        id
    }

    /// Discard the current frame and return to its enclosing frame.
    ///
    /// Popping the global frame is a no-op.
    pub fn pop_scope(&mut self) {
        if self.current == ScopeId::GLOBAL {
            return;
        }
        let enclosing = self.frame(self.current).enclosing.unwrap_or(ScopeId::GLOBAL);
        self.scopes.truncate(self.current.index());
        self.current = enclosing;
    }

    /// Number of frames on the chain, including the global frame.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn current(&self) -> ScopeId {
        self.current
    }

    fn frame(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    fn frame_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.index()]
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
