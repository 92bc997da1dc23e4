//! Pairwise deep-merge and the N-ary left fold over document sequences.
//!
//! The merge is a structural recursion over two values at a time:
//!
//! - **Object × Object**: keyed union of both key sets, colliding keys
//!   merged recursively.
//! - **Array × Array**: concatenation. Arrays carry no per-position
//!   identity, so elements are never paired up by index and never
//!   deduplicated — everything from both sides survives.
//! - **Everything else**: right-wins. The second operand replaces the
//!   first for scalar collisions and for any mismatch of kinds
//!   (scalar vs object, array vs object, and so on).
//!
//! Right-wins makes the merge non-commutative on purpose: folding a
//! document sequence left to right means later documents override earlier
//! ones wherever they disagree, while object keys and array elements
//! accumulate from all of them.

use crate::error::{MergeError, Result};
use crate::zip::zip_longest;
use serde_json::{Map, Value};

/// Merge `a` and `b`, returning the result. Neither input is mutated.
///
/// Total over all value pairs; never fails. The result is a pure function
/// of `(a, b)` — for object results the key set and each key's merged
/// value are deterministic.
///
/// # Examples
///
/// ```rust
/// use jsonmerge_core::merge;
/// use serde_json::json;
///
/// // Objects union their keys, second side wins collisions
/// let merged = merge(&json!({"a": 1, "b": 2}), &json!({"b": 20, "c": 30}));
/// assert_eq!(merged, json!({"a": 1, "b": 20, "c": 30}));
///
/// // Arrays concatenate
/// let merged = merge(&json!([1, 2]), &json!([3]));
/// assert_eq!(merged, json!([1, 2, 3]));
///
/// // Mismatched kinds resolve right-wins
/// let merged = merge(&json!({"a": 1}), &json!(123));
/// assert_eq!(merged, json!(123));
/// ```
pub fn merge(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => {
            let mut out = Map::with_capacity(a.len().max(b.len()));
            for (key, slots) in zip_longest(&[a, b]) {
                let merged = match (slots[0], slots[1]) {
                    (Some(x), Some(y)) => merge(x, y),
                    (Some(x), None) => x.clone(),
                    (None, Some(y)) => y.clone(),
                    // Every key comes from the union of both maps, so at
                    // least one slot is always populated.
                    (None, None) => Value::Null,
                };
                out.insert(key.to_string(), merged);
            }
            Value::Object(out)
        }
        (Value::Array(a), Value::Array(b)) => {
            Value::Array(a.iter().chain(b.iter()).cloned().collect())
        }
        (_, b) => b.clone(),
    }
}

/// Fold [`merge`] left to right across `docs`, returning the combined
/// document.
///
/// The accumulator starts as the first document; each subsequent document
/// is folded in as the right-hand operand, so later documents win every
/// leaf or kind conflict while object keys and array elements accumulate
/// from all of them. A single-document input is returned unchanged and
/// `merge` is never invoked for it.
///
/// # Errors
///
/// Returns [`MergeError::EmptyInput`] when `docs` is empty.
pub fn merge_all(docs: &[Value]) -> Result<Value> {
    let (first, rest) = docs.split_first().ok_or(MergeError::EmptyInput)?;
    let mut acc = first.clone();
    for doc in rest {
        acc = merge(&acc, doc);
    }
    Ok(acc)
}
