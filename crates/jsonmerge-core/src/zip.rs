//! Keyed union across any number of JSON maps.
//!
//! Like `Iterator::zip` but keyed: instead of pairing values by position,
//! [`zip_longest`] pairs them by map key, covering every key that appears
//! in *any* of the input maps. Keys a given map lacks are filled with
//! `None` — a missing key is represented outside the value domain, so an
//! explicit JSON `null` stays clearly distinguishable from absence.

use serde_json::{Map, Value};
use std::collections::HashSet;

/// For every key appearing in any of `maps`, yield the key together with
/// one slot per input map: `Some(&value)` where that map contains the key
/// (an explicit `null` counts as present), `None` where it does not.
///
/// Accepts any number of maps (the merge path uses exactly two). Keys are
/// emitted in first-seen order across the maps in input order; callers
/// must not rely on any particular ordering.
///
/// # Examples
///
/// ```rust
/// use jsonmerge_core::zip_longest;
/// use serde_json::json;
///
/// let a = json!({"a": 1, "b": 2});
/// let b = json!({"a": 11, "x": 100});
/// let rows = zip_longest(&[a.as_object().unwrap(), b.as_object().unwrap()]);
///
/// assert_eq!(rows.len(), 3);
/// let (_, slots) = rows.iter().find(|(key, _)| *key == "x").unwrap();
/// assert_eq!(slots[0], None);
/// assert_eq!(slots[1], Some(&json!(100)));
/// ```
pub fn zip_longest<'a>(
    maps: &[&'a Map<String, Value>],
) -> Vec<(&'a str, Vec<Option<&'a Value>>)> {
    let mut keys: Vec<&str> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for map in maps {
        for key in map.keys() {
            if seen.insert(key.as_str()) {
                keys.push(key.as_str());
            }
        }
    }

    keys.into_iter()
        .map(|key| (key, maps.iter().map(|map| map.get(key)).collect()))
        .collect()
}
