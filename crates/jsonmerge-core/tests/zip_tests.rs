//! Tests for the keyed-union helper `zip_longest`.
//!
//! Rows are sorted by key before comparison — the helper guarantees which
//! keys appear, not in what order.

use jsonmerge_core::zip_longest;
use serde_json::{json, Map, Value};

/// Helper: sort zip rows by key for order-insensitive comparison.
fn sorted<'a>(
    mut rows: Vec<(&'a str, Vec<Option<&'a Value>>)>,
) -> Vec<(&'a str, Vec<Option<&'a Value>>)> {
    rows.sort_by_key(|(key, _)| *key);
    rows
}

#[test]
fn single_map_yields_its_own_entries() {
    let doc = json!({"a": 1, "b": 2, "c": 3});
    let map = doc.as_object().unwrap();

    let rows = sorted(zip_longest(&[map]));
    assert_eq!(
        rows,
        vec![
            ("a", vec![Some(&json!(1))]),
            ("b", vec![Some(&json!(2))]),
            ("c", vec![Some(&json!(3))]),
        ]
    );
}

#[test]
fn empty_maps_yield_no_rows() {
    let empty = Map::new();
    let rows = zip_longest(&[&empty, &empty, &empty, &empty]);
    assert!(rows.is_empty());
}

#[test]
fn absent_keys_are_filled_with_none() {
    let x = json!({"a": 1, "b": 2, "c": 3});
    let y = json!({"a": true, "b": "hi"});
    let z = json!({"a": null});
    let (x, y, z) = (
        x.as_object().unwrap(),
        y.as_object().unwrap(),
        z.as_object().unwrap(),
    );

    let rows = sorted(zip_longest(&[x, y, z]));
    assert_eq!(
        rows,
        vec![
            // An explicit null is present — Some(Null), never a fill slot
            ("a", vec![Some(&json!(1)), Some(&json!(true)), Some(&json!(null))]),
            ("b", vec![Some(&json!(2)), Some(&json!("hi")), None]),
            ("c", vec![Some(&json!(3)), None, None]),
        ]
    );
}

#[test]
fn keys_cover_the_union_of_all_maps() {
    let a = json!({"only_a": 1, "shared": 2});
    let b = json!({"only_b": 3, "shared": 4});
    let rows = zip_longest(&[a.as_object().unwrap(), b.as_object().unwrap()]);

    let mut keys: Vec<&str> = rows.iter().map(|(key, _)| *key).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["only_a", "only_b", "shared"]);
}

#[test]
fn every_row_has_one_slot_per_input_map() {
    let a = json!({"k": 1});
    let b = json!({});
    let c = json!({"k": 2, "m": 3});
    let maps = [
        a.as_object().unwrap(),
        b.as_object().unwrap(),
        c.as_object().unwrap(),
    ];

    for (_, slots) in zip_longest(&maps) {
        assert_eq!(slots.len(), maps.len());
    }
}
