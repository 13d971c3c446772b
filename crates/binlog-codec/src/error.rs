//! Codec errors.

use std::fmt;

use thiserror::Error;

/// A field of the binary record layout, used to locate decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    NameLength,
    Name,
    ValueLength,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::NameLength => write!(f, "name length"),
            Field::Name => write!(f, "name"),
            Field::ValueLength => write!(f, "value length"),
            Field::Value => write!(f, "value"),
        }
    }
}

/// Errors that can occur while encoding or decoding records.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("truncated record: buffer ends inside {field} at offset {offset}")]
    Truncated { offset: usize, field: Field },

    #[error("invalid {field} {length} at offset {offset}")]
    InvalidLength {
        offset: usize,
        field: Field,
        length: i32,
    },

    #[error("{field} at offset {offset} is not valid UTF-8")]
    InvalidText { offset: usize, field: Field },

    #[error("{field} of record {id} is {len} bytes, longer than a length prefix can hold")]
    FieldTooLong { id: i32, field: Field, len: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
