//! Test-only helpers for building values and observing forwarded calls.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::value::{Mapping, Value};
use crate::wrapper::PathOps;

/// Convert a `serde_json::json!` literal into a [`Value`].
pub fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

/// Build a shared base mapping from a JSON object literal.
///
/// Non-object literals produce an empty base.
pub fn base(json: serde_json::Value) -> Rc<Mapping> {
    match Value::from(json) {
        Value::Mapping(map) => Rc::new(map),
        _ => Rc::new(Mapping::new()),
    }
}

/// Mapping that owns the members of `own` and inherits those of `base`.
pub fn derived(base: Rc<Mapping>, own: serde_json::Value) -> Value {
    let mut map = Mapping::with_base(base);
    if let Value::Mapping(own) = Value::from(own) {
        for (key, value) in own.own_entries() {
            map.insert(key, value.clone());
        }
    }
    Value::Mapping(map)
}

/// One call observed by [`RecordingOps`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Has { root: Value, path: String },
    Get { root: Value, path: String },
    Set { root: Value, path: String, value: Value },
    Del { root: Value, path: String },
    Path { path: String },
}

/// [`PathOps`] double that records every call and touches nothing.
#[derive(Debug, Default)]
pub struct RecordingOps {
    calls: RefCell<Vec<Call>>,
}

impl RecordingOps {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PathOps for RecordingOps {
    fn has(&self, root: &Value, path: &str) -> bool {
        self.record(Call::Has {
            root: root.clone(),
            path: path.to_string(),
        });
        false
    }

    fn get(&self, root: &Value, path: &str) -> Value {
        self.record(Call::Get {
            root: root.clone(),
            path: path.to_string(),
        });
        Value::Null
    }

    fn set(&self, root: &mut Value, path: &str, value: Value) {
        self.record(Call::Set {
            root: root.clone(),
            path: path.to_string(),
            value,
        });
    }

    fn del(&self, root: &mut Value, path: &str) {
        self.record(Call::Del {
            root: root.clone(),
            path: path.to_string(),
        });
    }

    fn path(&self, path: &str) -> Vec<String> {
        self.record(Call::Path {
            path: path.to_string(),
        });
        Vec::new()
    }
}
