//! # jsonmerge-core
//!
//! Deep-merge an ordered sequence of JSON documents into a single combined
//! document.
//!
//! Merging is a recursive, type-dispatching reduction over two values at a
//! time, generalized to N documents by a left fold:
//!
//! - Two objects merge key-by-key: the result carries the union of both key
//!   sets, and colliding keys are merged recursively.
//! - Two arrays concatenate, first operand's elements then the second's.
//! - Anything else (scalars, or two values of different kinds) resolves
//!   right-wins: the second operand replaces the first. An explicit `null`
//!   is a real value and wins like any other.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonmerge_core::merge_all;
//! use serde_json::json;
//!
//! let docs = vec![
//!     json!({"server": {"host": "localhost"}, "tags": ["base"]}),
//!     json!({"server": {"port": 8080}, "tags": ["override"]}),
//! ];
//! let merged = merge_all(&docs).unwrap();
//! assert_eq!(
//!     merged,
//!     json!({"server": {"host": "localhost", "port": 8080}, "tags": ["base", "override"]})
//! );
//! ```
//!
//! ## Modules
//!
//! - [`merge`] — pairwise `merge` and the N-ary `merge_all` fold
//! - [`zip`] — keyed union across any number of JSON maps
//! - [`error`] — error types for the N-ary fold

pub mod error;
pub mod merge;
pub mod zip;

pub use error::MergeError;
pub use merge::{merge, merge_all};
pub use zip::zip_longest;
