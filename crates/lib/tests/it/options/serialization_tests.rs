//! Serialization tests: plain values, JSON, XML, and persisted state.

use optkit::Options;
use optkit::convert::EncodeFlags;
use optkit::options::Key;
use serde_json::json;

#[test]
fn test_to_value_round_trip_preserves_order() {
    let original = json!({"z": 1, "a": {"nested": [1, 2]}, "m": "text"});
    let opts = Options::from(original.clone());
    let plain = opts.to_value();

    assert_eq!(plain, original);
    // preserve_order keeps map insertion order, so key order survives too
    let keys: Vec<_> = plain.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);

    assert_eq!(Options::from(plain), opts);
}

#[test]
fn test_sequential_nodes_render_as_arrays() {
    let opts = Options::from(json!(["a", "b", "c"]));
    assert_eq!(opts.to_value(), json!(["a", "b", "c"]));

    // A gap in the indices forces map rendering
    let mut gapped = Options::new();
    gapped.set(0i64, "a").unwrap();
    gapped.set(2i64, "c").unwrap();
    assert_eq!(gapped.to_value(), json!({"0": "a", "2": "c"}));

    // An empty node renders as a map, not an empty list
    assert_eq!(Options::new().to_value(), json!({}));
}

#[test]
fn test_to_json_with_flags() {
    let opts = Options::from(json!({"port": "8080", "name": "svc"}));

    let compact = opts.to_json(&EncodeFlags::new()).unwrap();
    assert_eq!(compact, r#"{"port":"8080","name":"svc"}"#);

    let pretty = opts.to_json(&EncodeFlags::new().pretty(true)).unwrap();
    assert!(pretty.contains('\n'));

    let numeric = opts
        .to_json(&EncodeFlags::new().numeric_check(true))
        .unwrap();
    assert!(numeric.contains(r#""port":8080"#));
}

#[test]
fn test_from_json_round_trip() {
    let opts = Options::from_json(r#"{"a": 1, "b": {"c": true}}"#);

    assert_eq!(opts.get_as::<i64>("a"), Some(1));
    assert_eq!(
        opts.get_node("b").unwrap().get_as::<bool>("c"),
        Some(true)
    );

    let encoded = opts.to_json(&EncodeFlags::new()).unwrap();
    assert_eq!(Options::from_json(&encoded), opts);
}

#[test]
fn test_to_xml_through_a_node() {
    let opts = Options::from(json!({
        "name": "svc",
        "hosts": ["alpha", "beta"],
        "db": {"port": 5432},
    }));

    let xml = opts.to_xml().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
    assert!(xml.contains("<name>svc</name>"));
    assert!(xml.contains("<hosts><host>alpha</host><host>beta</host></hosts>"));
    assert!(xml.contains("<db><port>5432</port></db>"));
}

#[test]
fn test_serde_persists_entries_and_lock() {
    let mut opts = Options::from(json!({"z": 1, "a": 2}));
    opts.lock();
    // Move the cursor; transient iteration state must not persist
    opts.next();

    let stored = serde_json::to_string(&opts).unwrap();
    let restored: Options = serde_json::from_str(&stored).unwrap();

    assert_eq!(restored, opts);
    assert!(restored.is_locked());
    assert_eq!(restored.keys(), vec![Key::from("z"), Key::from("a")]);
    // The restored cursor starts at the first entry
    assert_eq!(restored.current_key(), Some(&Key::from("z")));
}

#[test]
fn test_display_uses_plain_rendering() {
    let opts = Options::from(json!({"a": 1, "list": [true, null]}));
    assert_eq!(format!("{opts}"), "{a: 1, list: {0: true, 1: null}}");
}
