//! Read, write, check, and delete values inside nested structures by path.
//!
//! A path is either a delimited string such as `a.b.c` (with `\` escaping a
//! literal separator, as in `a\.b`) or an explicit list of segments. The
//! crate is split into:
//!
//! - **[`core`]**: the value model, the path tokenizer, and the traversal
//!   [`Engine`] with its four operations (`has`, `get`, `set`, `del`).
//!   Pure and deterministic.
//! - **[`wrapper`]**: [`Wrapped`], a root value bound to an engine.
//! - **[`config`]**: TOML-backed [`EngineConfig`].
//! - **[`logging`]**: opt-in tracing subscriber for diagnostics.
//!
//! ```
//! use objpath::{Engine, Value};
//! use serde_json::json;
//!
//! let engine = Engine::new();
//! let mut root = Value::from(json!({"a": {"b": [1, 2, 3]}}));
//!
//! assert_eq!(engine.get(&root, "a.b.1"), Value::from(2_i64));
//! engine.set(&mut root, "a.k.l", Value::from("x"));
//! engine.del(&mut root, "a.b.0");
//! assert_eq!(root, Value::from(json!({"a": {"b": [2, 3], "k": {"l": "x"}}})));
//! ```

pub mod config;
pub mod core;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod wrapper;

pub use crate::config::EngineConfig;
pub use crate::core::engine::{Engine, Flag};
pub use crate::core::path::PathArg;
pub use crate::core::tokenizer::Tokenizer;
pub use crate::core::value::{Mapping, Value};
pub use crate::wrapper::{PathOps, Wrapped};
