//! Tests for the four-way merge family: merge, modify, complete, defaults.

use optkit::options::{Key, Options};
use serde_json::json;

// ===== MERGE =====

#[test]
fn test_merge_overwrites_and_adds() {
    let mut opts = Options::from(json!({"a": 1}));
    opts.merge(json!({"a": 2, "b": 3})).unwrap();

    assert_eq!(opts.to_value(), json!({"a": 2, "b": 3}));
}

#[test]
fn test_merge_with_empty_is_identity() {
    let mut opts = Options::from(json!({"b": 2, "a": 1}));
    let before = opts.clone();

    opts.merge(Options::new()).unwrap();
    assert_eq!(opts, before);
    assert_eq!(opts.keys(), vec![Key::from("b"), Key::from("a")]);
}

#[test]
fn test_merge_recurses_into_nodes() {
    let mut opts = Options::from(json!({"db": {"host": "localhost", "port": 5432}}));
    opts.merge(json!({"db": {"port": 6543, "name": "app"}}))
        .unwrap();

    assert_eq!(
        opts.to_value(),
        json!({"db": {"host": "localhost", "port": 6543, "name": "app"}})
    );
}

#[test]
fn test_merge_appends_duplicate_integer_keys() {
    // Lists concatenate rather than overwrite positionally
    let mut opts = Options::from(json!(["a", "b"]));
    opts.merge(json!(["c", "d"])).unwrap();

    assert_eq!(opts.to_value(), json!(["a", "b", "c", "d"]));
}

#[test]
fn test_merge_node_replaces_leaf() {
    let mut opts = Options::from(json!({"log": "stderr"}));
    opts.merge(json!({"log": {"target": "stderr", "level": "info"}}))
        .unwrap();

    assert_eq!(
        opts.to_value(),
        json!({"log": {"target": "stderr", "level": "info"}})
    );
}

// ===== MODIFY =====

#[test]
fn test_modify_only_touches_existing_keys() {
    let mut opts = Options::from(json!({"a": 1}));
    opts.modify(json!({"a": 2, "b": 3})).unwrap();

    assert_eq!(opts.to_value(), json!({"a": 2}));
}

#[test]
fn test_modify_recurses_into_nodes() {
    let mut opts = Options::from(json!({"db": {"host": "localhost", "port": 5432}}));
    opts.modify(json!({"db": {"port": 6543, "name": "ignored"}}))
        .unwrap();

    assert_eq!(
        opts.to_value(),
        json!({"db": {"host": "localhost", "port": 6543}})
    );
}

// ===== COMPLETE =====

#[test]
fn test_complete_only_adds_missing_keys() {
    let mut opts = Options::from(json!({"a": 1}));
    opts.complete(json!({"a": 2, "b": 3}), &[]).unwrap();

    assert_eq!(opts.to_value(), json!({"a": 1, "b": 3}));
}

#[test]
fn test_complete_is_idempotent() {
    let mut opts = Options::from(json!({"a": 1}));
    let template = json!({"a": 2, "b": 3, "c": {"d": 4}});

    opts.complete(template.clone(), &[]).unwrap();
    let once = opts.clone();
    opts.complete(template, &[]).unwrap();

    assert_eq!(opts, once);
}

#[test]
fn test_complete_fills_nested_gaps() {
    let mut opts = Options::from(json!({"db": {"host": "remote"}}));
    opts.complete(json!({"db": {"host": "localhost", "port": 5432}}), &[])
        .unwrap();

    assert_eq!(
        opts.to_value(),
        json!({"db": {"host": "remote", "port": 5432}})
    );
}

#[test]
fn test_complete_skips_excluded_keys() {
    let mut opts = Options::from(json!({"a": 1}));
    opts.complete(json!({"b": 2, "secret": "x"}), &["secret"])
        .unwrap();

    assert_eq!(opts.to_value(), json!({"a": 1, "b": 2}));
}

// ===== DEFAULTS =====

#[test]
fn test_defaults_fills_absent_and_replaceable() {
    let mut opts = Options::from(json!({"name": "", "mode": null, "port": 8080}));
    opts.defaults([json!({"name": "svc", "mode": "dev", "port": 1, "extra": true})])
        .unwrap();

    assert_eq!(
        opts.to_value(),
        json!({"name": "svc", "mode": "dev", "port": 8080, "extra": true})
    );
}

#[test]
fn test_defaults_keeps_explicit_false() {
    let mut opts = Options::from(json!({"verbose": false}));
    opts.defaults([json!({"verbose": true})]).unwrap();

    assert_eq!(opts.get_as::<bool>("verbose"), Some(false));
}

#[test]
fn test_defaults_cascade_last_model_wins() {
    let mut opts = Options::from(json!({"a": ""}));
    opts.defaults([json!({"a": "first", "b": 1}), json!({"a": "second", "b": 2, "c": 3})])
        .unwrap();

    // Models apply back to front and a landed value stops being
    // replaceable, so the last model wins for shared keys
    assert_eq!(opts.get_as::<&str>("a"), Some("second"));
    assert_eq!(opts.get_as::<i64>("b"), Some(2));
    assert_eq!(opts.get_as::<i64>("c"), Some(3));
}

#[test]
fn test_defaults_recurses_into_nodes() {
    let mut opts = Options::from(json!({"db": {"host": "", "port": 5432}}));
    opts.defaults([json!({"db": {"host": "localhost", "port": 1, "name": "app"}})])
        .unwrap();

    assert_eq!(
        opts.to_value(),
        json!({"db": {"host": "localhost", "port": 5432, "name": "app"}})
    );
}

// ===== SHARED BEHAVIOR =====

#[test]
fn test_merge_family_coerces_non_map_input() {
    // Scalar input normalizes to an empty node, so the merges are no-ops
    let mut opts = Options::from(json!({"a": 1}));
    let before = opts.clone();

    opts.merge(json!(42)).unwrap();
    opts.modify(json!("text")).unwrap();
    opts.complete(json!(true), &[]).unwrap();
    opts.defaults([json!(null)]).unwrap();

    assert_eq!(opts, before);
}

#[test]
fn test_merge_accepts_options_by_reference() {
    let overrides = Options::from(json!({"b": 2}));
    let mut opts = Options::from(json!({"a": 1}));

    opts.merge(&overrides).unwrap();
    assert_eq!(opts.to_value(), json!({"a": 1, "b": 2}));
    // The source is still usable
    assert_eq!(overrides.len(), 1);
}
