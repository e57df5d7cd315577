//! Dynamically shaped values traversed by the engine.
//!
//! A [`Value`] is either a scalar leaf, an ordered [`Value::Sequence`], or a
//! [`Mapping`]. Mappings carry two views of their members: the entries they
//! own directly, and the members they inherit from an optional shared base
//! mapping. The base chain is reference counted and never mutated through a
//! derived mapping.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A node in the traversed structure.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Short name of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

/// String-keyed container with directly-owned entries and an optional base.
///
/// Lookups through [`Mapping::get`] see owned entries first, then walk the
/// base chain. Writes and removals only ever touch owned entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    own: IndexMap<String, Value>,
    base: Option<Rc<Mapping>>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping that inherits every member of `base`.
    pub fn with_base(base: Rc<Mapping>) -> Self {
        Self {
            own: IndexMap::new(),
            base: Some(base),
        }
    }

    pub fn base(&self) -> Option<&Rc<Mapping>> {
        self.base.as_ref()
    }

    /// Owned entry for `key`, ignoring the base chain.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        self.own.get(key)
    }

    pub fn get_own_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.own.get_mut(key)
    }

    pub fn contains_own(&self, key: &str) -> bool {
        self.own.contains_key(key)
    }

    /// Member inherited from the base chain. Owned entries are not consulted.
    pub fn get_inherited(&self, key: &str) -> Option<&Value> {
        let mut base = self.base.as_deref();
        while let Some(map) = base {
            if let Some(value) = map.own.get(key) {
                return Some(value);
            }
            base = map.base.as_deref();
        }
        None
    }

    /// Visible member: owned entry first, then the base chain.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.own.get(key).or_else(|| self.get_inherited(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or overwrite an owned entry.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.own.insert(key.into(), value)
    }

    /// Remove an owned entry, keeping the order of the remaining ones.
    pub fn remove_own(&mut self, key: &str) -> Option<Value> {
        self.own.shift_remove(key)
    }

    /// Drop every owned entry. The base is kept.
    pub fn clear_own(&mut self) {
        self.own.clear();
    }

    pub fn own_len(&self) -> usize {
        self.own.len()
    }

    pub fn is_empty(&self) -> bool {
        self.own.is_empty()
    }

    pub fn own_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.own.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Every visible member, owned entries first, shadowed base members skipped.
    pub fn visible_entries(&self) -> Vec<(&str, &Value)> {
        let mut seen: IndexMap<&str, &Value> = IndexMap::new();
        let mut layer = Some(self);
        while let Some(map) = layer {
            for (key, value) in &map.own {
                seen.entry(key.as_str()).or_insert(value);
            }
            layer = map.base.as_deref();
        }
        seen.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            own: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            base: None,
        }
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no numeric representation and become `Null`.
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(map) => serde_json::Value::Object(
                map.visible_entries()
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Mapping(map) => {
                let entries = map.visible_entries();
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_with(key: &str, value: Value) -> Rc<Mapping> {
        Rc::new([(key, value)].into_iter().collect())
    }

    #[test]
    fn get_prefers_owned_entry_over_base() {
        let mut map = Mapping::with_base(base_with("k", Value::from("base")));
        assert_eq!(map.get("k"), Some(&Value::from("base")));
        assert!(!map.contains_own("k"));

        map.insert("k", Value::from("own"));
        assert_eq!(map.get("k"), Some(&Value::from("own")));
        assert_eq!(map.get_inherited("k"), Some(&Value::from("base")));
    }

    #[test]
    fn inherited_lookup_walks_the_whole_chain() {
        let grandparent = base_with("deep", Value::from(1_i64));
        let parent = Rc::new(Mapping::with_base(grandparent));
        let map = Mapping::with_base(parent);

        assert_eq!(map.get("deep"), Some(&Value::from(1_i64)));
        assert!(map.is_empty());
    }

    #[test]
    fn remove_own_keeps_remaining_order() {
        let mut map: Mapping = [
            ("a", Value::from(1_i64)),
            ("b", Value::from(2_i64)),
            ("c", Value::from(3_i64)),
        ]
        .into_iter()
        .collect();

        map.remove_own("b");

        let keys: Vec<&str> = map.own_entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn serialization_flattens_visible_members() {
        let mut map = Mapping::with_base(base_with("shared", Value::from(true)));
        map.insert("own", Value::from(42_i64));

        let json = serde_json::to_value(Value::Mapping(map)).expect("serialize");
        assert_eq!(json, json!({"own": 42, "shared": true}));
    }

    #[test]
    fn deserializes_from_json_text() {
        let value: Value = serde_json::from_str(r#"{"a":[1,null,"x"]}"#).expect("parse");
        assert_eq!(value, Value::from(json!({"a": [1, null, "x"]})));
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert!(Value::from(f64::NAN).is_null());
    }
}
