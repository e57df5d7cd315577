//! Deterministic, pure traversal logic.
//!
//! Core modules perform no I/O. They operate on in-memory [`value::Value`]
//! trees and return deterministic outputs suitable for tests.

pub mod engine;
pub mod index;
pub mod path;
pub mod tokenizer;
pub mod value;
