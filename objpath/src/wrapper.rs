//! A root value bound to a set of path operations.
//!
//! [`Wrapped`] adds no behavior of its own: every call is forwarded to its
//! [`PathOps`] with the bound value as root. Tests substitute a recording
//! implementation to check the forwarding.

use crate::core::engine::Engine;
use crate::core::value::Value;

/// String-path operations over an explicit root.
pub trait PathOps {
    fn has(&self, root: &Value, path: &str) -> bool;
    fn get(&self, root: &Value, path: &str) -> Value;
    fn set(&self, root: &mut Value, path: &str, value: Value);
    fn del(&self, root: &mut Value, path: &str);
    fn path(&self, path: &str) -> Vec<String>;
}

impl PathOps for Engine {
    fn has(&self, root: &Value, path: &str) -> bool {
        Engine::has(self, root, path)
    }

    fn get(&self, root: &Value, path: &str) -> Value {
        Engine::get(self, root, path)
    }

    fn set(&self, root: &mut Value, path: &str, value: Value) {
        Engine::set(self, root, path, value);
    }

    fn del(&self, root: &mut Value, path: &str) {
        Engine::del(self, root, path);
    }

    fn path(&self, path: &str) -> Vec<String> {
        Engine::path(self, path)
    }
}

impl<T: PathOps + ?Sized> PathOps for &T {
    fn has(&self, root: &Value, path: &str) -> bool {
        (**self).has(root, path)
    }

    fn get(&self, root: &Value, path: &str) -> Value {
        (**self).get(root, path)
    }

    fn set(&self, root: &mut Value, path: &str, value: Value) {
        (**self).set(root, path, value);
    }

    fn del(&self, root: &mut Value, path: &str) {
        (**self).del(root, path);
    }

    fn path(&self, path: &str) -> Vec<String> {
        (**self).path(path)
    }
}

/// One root value paired with the operations applied to it.
#[derive(Debug, Clone)]
pub struct Wrapped<S> {
    ops: S,
    data: Value,
}

impl<S: PathOps> Wrapped<S> {
    pub fn new(ops: S, data: Value) -> Self {
        Self { ops, data }
    }

    pub fn value(&self) -> &Value {
        &self.data
    }

    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.data
    }

    pub fn into_inner(self) -> Value {
        self.data
    }

    pub fn has(&self, path: &str) -> bool {
        self.ops.has(&self.data, path)
    }

    pub fn get(&self, path: &str) -> Value {
        self.ops.get(&self.data, path)
    }

    pub fn set(&mut self, path: &str, value: Value) {
        self.ops.set(&mut self.data, path, value);
    }

    pub fn del(&mut self, path: &str) {
        self.ops.del(&mut self.data, path);
    }

    pub fn path(&self, path: &str) -> Vec<String> {
        self.ops.path(path)
    }
}
