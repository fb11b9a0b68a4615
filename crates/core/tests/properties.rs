//! Property-based tests for dotjson-core using proptest.

use dotjson_core::{ops, text, DotPath, JsonObject, JsonValue};
use proptest::prelude::*;

/// Arbitrary JSON trees: scalars at the leaves, arrays and objects above.
fn json_value() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        any::<i64>().prop_map(JsonValue::from),
        (-1.0e9f64..1.0e9f64).prop_map(JsonValue::from),
        "[a-z0-9 ]{0,8}".prop_map(JsonValue::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
            prop::collection::vec(("[a-z]{1,5}", inner), 0..4).prop_map(|entries| {
                let mut obj = JsonObject::new();
                for (k, v) in entries {
                    obj.insert(k, v);
                }
                JsonValue::Object(obj)
            }),
        ]
    })
}

/// Trees built from objects and scalar leaves only (no arrays), keyed with
/// lowercase names. Used by the laws that reason about object paths.
fn object_tree() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<i64>().prop_map(JsonValue::from),
        "[a-z0-9]{0,6}".prop_map(JsonValue::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop::collection::vec(("[a-z]{1,5}", inner), 0..4).prop_map(|entries| {
            let mut obj = JsonObject::new();
            for (k, v) in entries {
                obj.insert(k, v);
            }
            JsonValue::Object(obj)
        })
    })
}

/// Dotted paths over lowercase segments, matching the key alphabet of
/// `object_tree`.
fn lowercase_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,5}", 1..4).prop_map(|segs| segs.join("."))
}

/// Dotted paths over uppercase segments, guaranteed to miss any tree whose
/// keys are all lowercase.
fn uppercase_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z]{1,3}", 1..4).prop_map(|segs| segs.join("."))
}

proptest! {
    /// Rendering a document and parsing it back is the identity.
    #[test]
    fn render_parse_round_trip(value in json_value()) {
        let rendered = text::render_document(&value);
        let reparsed = text::parse(&rendered).unwrap();
        prop_assert_eq!(value, reparsed);
    }

    /// Compact and pretty container rendering re-parse to the same tree.
    /// (Scalars are excluded: value mode renders them bare, not as JSON.)
    #[test]
    fn compact_and_pretty_agree(value in json_value()) {
        if value.is_object() || value.is_array() {
            let compact = text::parse(&text::render_value(&value, false)).unwrap();
            let pretty = text::parse(&text::render_value(&value, true)).unwrap();
            prop_assert_eq!(compact, pretty);
        }
    }

    /// add followed by get returns the value just added when the parent
    /// chain is objects all the way down.
    #[test]
    fn add_then_get_round_trip(raw_path in lowercase_path(), value in json_value()) {
        let mut doc = JsonValue::Object(JsonObject::new());
        let path = DotPath::parse(&raw_path);
        prop_assert!(ops::add(&mut doc, &path, value.clone()));
        prop_assert_eq!(ops::get(&doc, &path), Some(&value));
    }

    /// replace on a path that cannot resolve leaves the document unchanged.
    #[test]
    fn replace_missing_is_identity(doc in object_tree(), raw_path in uppercase_path()) {
        let mut edited = doc.clone();
        let mutated = ops::replace(&mut edited, &DotPath::parse(&raw_path), JsonValue::Null);
        prop_assert!(!mutated);
        prop_assert_eq!(doc, edited);
    }

    /// del on a path that cannot resolve leaves the document unchanged.
    #[test]
    fn del_missing_is_noop(doc in object_tree(), raw_path in uppercase_path()) {
        let mut edited = doc.clone();
        let removed = ops::del(&mut edited, &DotPath::parse(&raw_path));
        prop_assert!(!removed);
        prop_assert_eq!(doc, edited);
    }

    /// Deleting the same object path twice is the same as deleting it once.
    #[test]
    fn del_twice_equals_del_once(doc in object_tree(), raw_path in lowercase_path()) {
        let path = DotPath::parse(&raw_path);
        let mut once = doc;
        ops::del(&mut once, &path);
        let mut twice = once.clone();
        ops::del(&mut twice, &path);
        prop_assert_eq!(once, twice);
    }

    /// get output re-parses to the value stored at the path (container
    /// values; bare scalars are not JSON by design).
    #[test]
    fn get_render_reparses_to_stored(raw_path in lowercase_path(), stored in json_value()) {
        let mut doc = JsonValue::Object(JsonObject::new());
        let path = DotPath::parse(&raw_path);
        ops::add(&mut doc, &path, stored.clone());
        let fetched = ops::get(&doc, &path).unwrap();
        if fetched.is_object() || fetched.is_array() {
            let rendered = text::render_value(fetched, false);
            prop_assert_eq!(text::parse(&rendered).unwrap(), stored);
        }
    }
}
