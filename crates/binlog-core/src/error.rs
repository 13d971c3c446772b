//! Record generation errors.

use thiserror::Error;

/// Errors raised by a [`RecordSource`](crate::RecordSource).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// More records requested than there are non-negative `i32` ids.
    #[error("cannot generate {count} records: ids must fit in a non-negative i32")]
    CountOutOfRange { count: usize },

    /// A source returned a different number of records than requested.
    #[error("source produced {produced} records, expected {requested}")]
    ShortCount { requested: usize, produced: usize },

    /// The value policy was configured with an unusable parameter.
    #[error("invalid value policy: {detail}")]
    InvalidPolicy { detail: String },
}
