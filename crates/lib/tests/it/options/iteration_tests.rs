//! Cursor iteration tests, including deletion during traversal.

use optkit::options::{Key, Options, Value};
use serde_json::json;

#[test]
fn test_cursor_walks_in_insertion_order() {
    let mut opts = Options::from(json!({"b": 2, "a": 1, "c": 3}));

    let mut seen = Vec::new();
    opts.rewind();
    while opts.valid() {
        let key = opts.current_key().unwrap().clone();
        let value = opts.current().unwrap().clone();
        seen.push((key, value));
        opts.next();
    }

    assert_eq!(
        seen,
        vec![
            (Key::from("b"), Value::Int(2)),
            (Key::from("a"), Value::Int(1)),
            (Key::from("c"), Value::Int(3)),
        ]
    );
}

#[test]
fn test_cursor_invalid_past_the_end() {
    let mut opts = Options::from(json!({"only": 1}));
    opts.rewind();
    assert!(opts.valid());

    opts.next();
    assert!(!opts.valid());
    assert!(opts.current().is_none());
    assert!(opts.current_key().is_none());

    // Advancing an invalid cursor stays invalid
    opts.next();
    assert!(!opts.valid());

    opts.rewind();
    assert!(opts.valid());
}

#[test]
fn test_delete_current_entry_resumes_on_successor() {
    // Removing the entry under the cursor must not skip the next element:
    // after one next() the cursor lands on the entry that followed the
    // deleted one.
    let mut opts = Options::from(json!({"a": 1, "b": 2, "c": 3}));

    opts.rewind();
    opts.next(); // cursor on "b"
    assert_eq!(opts.current_key(), Some(&Key::from("b")));

    opts.unset("b").unwrap();
    opts.next();
    assert_eq!(opts.current(), Some(&Value::Int(3)));
    assert_eq!(opts.current_key(), Some(&Key::from("c")));
}

#[test]
fn test_filtering_loop_visits_every_entry() {
    // The classic use case: delete matching entries while iterating and
    // still visit each remaining entry exactly once.
    let mut opts = Options::from(json!({"a": 1, "b": 2, "c": 3, "d": 4}));

    opts.rewind();
    while opts.valid() {
        let even = matches!(opts.current(), Some(Value::Int(n)) if n % 2 == 0);
        if even {
            let key = opts.current_key().unwrap().clone();
            opts.unset(key).unwrap();
        }
        opts.next();
    }

    assert_eq!(opts.to_value(), json!({"a": 1, "c": 3}));
}

#[test]
fn test_prev_wraps_to_invalid() {
    let mut opts = Options::from(json!({"a": 1, "b": 2}));

    opts.rewind();
    opts.next();
    opts.prev();
    assert_eq!(opts.current_key(), Some(&Key::from("a")));

    // Stepping back from the first entry invalidates the cursor
    opts.prev();
    assert!(!opts.valid());
}

#[test]
fn test_iter_and_into_iterator_agree() {
    let opts = Options::from(json!({"x": 1, "y": "two"}));

    let via_iter: Vec<_> = opts.iter().map(|(k, _)| k.clone()).collect();
    let via_into: Vec<_> = (&opts).into_iter().map(|(k, _)| k.clone()).collect();

    assert_eq!(via_iter, vec![Key::from("x"), Key::from("y")]);
    assert_eq!(via_iter, via_into);
}

#[test]
fn test_for_loop_over_reference() {
    let opts = Options::from(json!(["a", "b", "c"]));

    let mut count = 0;
    for (key, value) in &opts {
        assert_eq!(key.as_index(), Some(count));
        assert!(matches!(value, Value::Text(_)));
        count += 1;
    }
    assert_eq!(count, 3);
}
