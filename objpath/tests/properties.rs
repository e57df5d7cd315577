//! Consistency properties that hold across operations.

use objpath::test_support::value;
use objpath::{Engine, Tokenizer, Value};
use serde_json::json;

fn roots() -> Vec<Value> {
    vec![
        value(json!({})),
        value(json!({"a": 1})),
        value(json!({"a": {"b": [1, {"c": 2}]}})),
        value(json!({"a": [], "x": "leaf"})),
        value(json!({"a.b": {"c": null}})),
    ]
}

fn paths() -> Vec<Vec<&'static str>> {
    vec![
        vec!["a"],
        vec!["a", "b"],
        vec!["a", "b", "1", "c"],
        vec!["a", "b", "0"],
        vec!["x", "y", "z"],
        vec!["a.b", "c"],
        vec!["a", "0"],
        vec![""],
    ]
}

#[test]
fn set_then_get_returns_written_value() {
    let engine = Engine::new();
    for root in roots() {
        for path in paths() {
            let mut target = root.clone();
            let written = value(json!({"written": path.join("/")}));
            engine.set(&mut target, &path, written.clone());
            assert_eq!(engine.get(&target, &path), written, "{path:?} on {root}");

            let text = engine.tokenizer().join(&path);
            if !text.is_empty() {
                assert_eq!(engine.get(&target, text.as_str()), written, "{text:?} on {root}");
            }
        }
    }
}

#[test]
fn del_then_has_is_false() {
    let engine = Engine::new();
    for root in roots() {
        // Removing a sequence element shifts its followers into the slot.
        for path in paths().into_iter().filter(|path| *path != ["a", "b", "0"]) {
            let mut target = root.clone();
            engine.del(&mut target, &path);
            assert!(!engine.has(&target, &path), "{path:?} on {root}");
        }
    }
}

#[test]
fn reads_leave_root_unchanged() {
    let engine = Engine::new();
    for root in roots() {
        let before = root.clone();
        for path in paths() {
            engine.has(&root, &path);
            engine.get(&root, &path);
        }
        assert_eq!(root, before);
    }
}

#[test]
fn set_leaves_siblings_unchanged() {
    let engine = Engine::new();
    let mut root = value(json!({"keep": {"x": [1, 2]}, "a": {"b": 1, "other": true}}));

    engine.set(&mut root, "a.b.c", Value::from(3_i64));

    assert_eq!(engine.get(&root, "keep"), value(json!({"x": [1, 2]})));
    assert_eq!(engine.get(&root, "a.other"), Value::Bool(true));
}

#[test]
fn del_leaves_siblings_unchanged() {
    let engine = Engine::new();
    let mut root = value(json!({"keep": {"x": [1, 2]}, "a": {"b": [1, 2, 3], "other": true}}));

    engine.del(&mut root, "a.b.1");

    assert_eq!(
        root,
        value(json!({"keep": {"x": [1, 2]}, "a": {"b": [1, 3], "other": true}}))
    );
}

#[test]
fn del_with_empty_path_keeps_container_kind() {
    let engine = Engine::new();

    let mut mapping = value(json!({"a": 1, "b": 2}));
    engine.del(&mut mapping, "");
    assert_eq!(mapping, value(json!({})));

    let mut sequence = value(json!([1, 2]));
    engine.del(&mut sequence, "");
    assert_eq!(sequence, value(json!([])));

    let mut scalar = Value::from(5_i64);
    engine.del(&mut scalar, "");
    assert_eq!(scalar, Value::from(5_i64));
}

#[test]
fn tokenize_join_round_trip() {
    let tokenizers = [
        Tokenizer::default(),
        Tokenizer::new("->", '\\'),
        Tokenizer::new("::", '%'),
    ];
    let inputs = [
        "a.b.c",
        r"a\.b.c\\d",
        "a->b->c",
        r"x\->y",
        "::lead",
        "trail::",
        "%:%:",
        "plain",
        r"end\",
    ];

    for tokenizer in &tokenizers {
        for input in inputs {
            let segments = tokenizer.tokenize(input);
            let rejoined = tokenizer.join(&segments);
            assert_eq!(
                tokenizer.tokenize(&rejoined),
                segments,
                "{input:?} via {rejoined:?} with {tokenizer:?}"
            );
        }
    }
}
