//! Path traversal over [`Value`] trees.
//!
//! All four operations descend one segment at a time with an explicit loop.
//! None of them fail: a path that cannot be followed reads as absent
//! (`has` is false, `get` yields the default) and makes writes a no-op.
//!
//! Member resolution at each step:
//! - a mapping resolves any segment as a key, owned entries first and then
//!   the base chain unless [`Flag::SkipProtoData`] is set;
//! - a sequence resolves a canonical integer as a position, and the segment
//!   `length` as its element count (an empty sequence has no members);
//! - scalars have no members.

use std::borrow::Cow;
use std::cell::Cell;

use anyhow::Result;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::core::index::parse_index;
use crate::core::path::PathArg;
use crate::core::tokenizer::Tokenizer;
use crate::core::value::{Mapping, Value};
use crate::wrapper::Wrapped;

/// Read-only member exposed by every non-empty sequence.
pub const LENGTH_MEMBER: &str = "length";

/// How far past its end `set` may extend a sequence with `Null` padding.
pub const MAX_SEQUENCE_GAP: usize = 1024;

/// Runtime switches that change membership semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Treat members inherited from a mapping's base as absent.
    SkipProtoData,
}

/// Traversal engine bound to one separator/escape pair.
///
/// The flag is interior-mutable so it can be toggled through shared
/// references (e.g. while a [`Wrapped`] borrows the engine). This makes the
/// engine `!Sync`; share it across threads only behind external locking.
#[derive(Debug, Default)]
pub struct Engine {
    tokenizer: Tokenizer,
    skip_proto_data: Cell<bool>,
}

impl Engine {
    /// Engine with `.` as separator and `\` as escape.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(config.separator.clone(), config.escape),
            skip_proto_data: Cell::new(config.skip_proto_data),
        })
    }

    /// Shorthand for [`Engine::with_config`] with only the path syntax set.
    pub fn with_separator(separator: impl Into<String>, escape: char) -> Result<Self> {
        Self::with_config(&EngineConfig {
            separator: separator.into(),
            escape,
            ..EngineConfig::default()
        })
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize `path` with this engine's separator and escape.
    pub fn path(&self, path: &str) -> Vec<String> {
        self.tokenizer.tokenize(path)
    }

    pub fn set_flag(&self, flag: Flag, enabled: bool) {
        match flag {
            Flag::SkipProtoData => self.skip_proto_data.set(enabled),
        }
        debug!(?flag, enabled, "engine flag changed");
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::SkipProtoData => self.skip_proto_data.get(),
        }
    }

    /// Bind `root` to this engine.
    pub fn bind(&self, root: Value) -> Wrapped<&Self> {
        Wrapped::new(self, root)
    }

    /// Whether `path` names a present member. The empty path never does.
    ///
    /// A member holding `Null` is present.
    pub fn has(&self, root: &Value, path: impl PathArg) -> bool {
        let segments = path.segments(&self.tokenizer);
        !segments.is_empty() && self.resolve(root, &segments).is_some()
    }

    /// Borrowing lookup. `None` when any step is absent; the empty path
    /// resolves to `root` itself.
    ///
    /// Only the computed `length` member of a sequence comes back owned.
    pub fn lookup<'a>(&self, root: &'a Value, path: impl PathArg) -> Option<Cow<'a, Value>> {
        let segments = path.segments(&self.tokenizer);
        self.resolve(root, &segments)
    }

    /// Read the value at `path`, or `Null` when absent.
    pub fn get(&self, root: &Value, path: impl PathArg) -> Value {
        self.get_or(root, path, Value::Null)
    }

    /// Read the value at `path`, or `default` when absent.
    pub fn get_or(&self, root: &Value, path: impl PathArg, default: Value) -> Value {
        match self.lookup(root, path) {
            Some(found) => found.into_owned(),
            None => default,
        }
    }

    /// Assign `value` at `path`, creating intermediate mappings as needed.
    ///
    /// Any intermediate member that cannot be descended with the following
    /// segment (absent, a scalar, a sequence addressed by a non-index, or
    /// inherited while the skip flag is set) is replaced by an empty
    /// mapping. The empty path assigns nothing.
    pub fn set(&self, root: &mut Value, path: impl PathArg, value: Value) {
        let segments = path.segments(&self.tokenizer);
        let Some((last, parents)) = segments.split_last() else {
            trace!("set with empty path ignored");
            return;
        };

        let mut current = root;
        for (depth, segment) in parents.iter().enumerate() {
            let next = &segments[depth + 1];
            match self.child_for_write(current, segment, next) {
                Some(child) => current = child,
                None => {
                    debug!(depth, segment = %segment, "set stopped at non-container root");
                    return;
                }
            }
        }

        assign(current, last, value);
    }

    /// Remove the member at `path`.
    ///
    /// The empty path clears every owned member of `root` in place. Missing
    /// intermediates abort without changes, and inherited members are never
    /// removed.
    pub fn del(&self, root: &mut Value, path: impl PathArg) {
        let segments = path.segments(&self.tokenizer);
        let Some((last, parents)) = segments.split_last() else {
            clear_own(root);
            return;
        };

        let mut current = root;
        for (depth, segment) in parents.iter().enumerate() {
            match self.owned_child_mut(current, segment) {
                Some(child) => current = child,
                None => {
                    trace!(depth, segment = %segment, "del target parent absent");
                    return;
                }
            }
        }

        match current {
            Value::Sequence(items) => match parse_index(last) {
                Some(index) if index < items.len() => {
                    items.remove(index);
                }
                _ => trace!(segment = %last, len = items.len(), "del index out of range"),
            },
            Value::Mapping(map) => {
                if map.remove_own(last).is_none() {
                    trace!(
                        segment = %last,
                        inherited = map.get_inherited(last).is_some(),
                        "del found no owned member"
                    );
                }
            }
            other => trace!(kind = other.kind(), "del parent is a scalar"),
        }
    }

    fn skips_inherited(&self) -> bool {
        self.skip_proto_data.get()
    }

    fn resolve<'a>(&self, root: &'a Value, segments: &[String]) -> Option<Cow<'a, Value>> {
        let mut current = Cow::Borrowed(root);
        for (depth, segment) in segments.iter().enumerate() {
            // Owned values are computed scalars and have no members.
            let next = match current {
                Cow::Borrowed(value) => self.member(value, segment),
                Cow::Owned(_) => None,
            };
            match next {
                Some(found) => current = found,
                None => {
                    trace!(depth, segment = %segment, "path not resolvable");
                    return None;
                }
            }
        }
        Some(current)
    }

    fn member<'a>(&self, value: &'a Value, segment: &str) -> Option<Cow<'a, Value>> {
        match value {
            Value::Mapping(map) => {
                let found = if self.skips_inherited() {
                    map.get_own(segment)
                } else {
                    map.get(segment)
                };
                found.map(Cow::Borrowed)
            }
            Value::Sequence(items) => match parse_index(segment) {
                Some(index) => items.get(index).map(Cow::Borrowed),
                None if segment == LENGTH_MEMBER && !items.is_empty() => {
                    Some(Cow::Owned(Value::from(items.len())))
                }
                None => None,
            },
            _ => None,
        }
    }

    /// Mutable child for `del`'s descent. Inherited containers belong to a
    /// shared base and are never descended for mutation.
    fn owned_child_mut<'a>(&self, value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
        match value {
            Value::Mapping(map) => map.get_own_mut(segment),
            Value::Sequence(items) => parse_index(segment).and_then(|index| items.get_mut(index)),
            _ => None,
        }
    }

    /// Mutable child for `set`'s descent, vivified so it accepts `next`.
    fn child_for_write<'a>(
        &self,
        value: &'a mut Value,
        segment: &str,
        next: &str,
    ) -> Option<&'a mut Value> {
        match value {
            Value::Mapping(map) => {
                let reusable = map
                    .get_own(segment)
                    .is_some_and(|child| accepts_segment(child, next));
                if !reusable {
                    let child = self.inherited_container(map, segment, next).unwrap_or_else(|| {
                        debug!(segment = %segment, "set creates mapping");
                        Value::Mapping(Mapping::new())
                    });
                    map.insert(segment, child);
                }
                map.get_own_mut(segment)
            }
            Value::Sequence(items) => {
                let index = writable_index(items, segment)?;
                if index >= items.len() {
                    items.resize(index.checked_add(1)?, Value::Null);
                }
                let slot = &mut items[index];
                if !accepts_segment(slot, next) {
                    debug!(segment = %segment, replaced = slot.kind(), "set creates mapping");
                    *slot = Value::Mapping(Mapping::new());
                }
                Some(slot)
            }
            _ => None,
        }
    }

    /// Copy of an inherited container to shadow with an owned entry, so the
    /// shared base is left untouched. `None` when inherited members are
    /// skipped or the inherited member cannot take `next`.
    fn inherited_container(&self, map: &Mapping, segment: &str, next: &str) -> Option<Value> {
        if self.skips_inherited() || map.contains_own(segment) {
            return None;
        }
        let inherited = map.get_inherited(segment)?;
        if !accepts_segment(inherited, next) {
            return None;
        }
        debug!(segment = %segment, "set copies inherited container");
        Some(inherited.clone())
    }
}

/// Whether `value` can be descended into with `segment` during `set`.
fn accepts_segment(value: &Value, segment: &str) -> bool {
    match value {
        Value::Mapping(_) => true,
        Value::Sequence(items) => writable_index(items, segment).is_some(),
        _ => false,
    }
}

/// Position `set` may write in `items`: an existing slot, or one at most
/// [`MAX_SEQUENCE_GAP`] past the end.
fn writable_index(items: &[Value], segment: &str) -> Option<usize> {
    let index = parse_index(segment)?;
    match index.checked_sub(items.len()) {
        Some(gap) if gap > MAX_SEQUENCE_GAP => None,
        _ => Some(index),
    }
}

fn assign(target: &mut Value, segment: &str, value: Value) {
    match target {
        Value::Mapping(map) => {
            map.insert(segment, value);
        }
        Value::Sequence(items) => match writable_index(items, segment) {
            Some(index) if index < items.len() => items[index] = value,
            Some(index) => {
                items.resize(index, Value::Null);
                items.push(value);
            }
            None => debug!(
                segment = %segment,
                len = items.len(),
                "set ignores non-index or out-of-reach member of sequence"
            ),
        },
        other => debug!(kind = other.kind(), "set ignores scalar target"),
    }
}

fn clear_own(root: &mut Value) {
    match root {
        Value::Mapping(map) => map.clear_own(),
        Value::Sequence(items) => items.clear(),
        other => trace!(kind = other.kind(), "clear ignores scalar"),
    }
}
