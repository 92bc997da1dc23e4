//! Error types for the N-ary merge fold.

use thiserror::Error;

/// Errors that can occur when folding a sequence of documents.
///
/// Pairwise [`merge`](crate::merge::merge) itself is total and never fails;
/// the only error condition in this crate is handing the fold nothing to
/// fold.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MergeError {
    /// `merge_all` was given zero documents.
    #[error("no documents to merge")]
    EmptyInput,
}

/// Convenience alias used throughout jsonmerge-core.
pub type Result<T> = std::result::Result<T, MergeError>;
