//! Core data model for the binlog serialization benchmark.
//!
//! A benchmark run operates on an ordered sequence of [`Record`]s. Records are
//! produced in bulk by a [`RecordSource`], consumed read-only by every codec,
//! and dropped at the end of a size iteration.

pub mod error;
pub mod generate;
pub mod record;

pub use error::GenerationError;
pub use generate::{
    EmptyValues, PaddedValues, RandomValues, RecordGenerator, RecordSource, ValuePolicy,
    ValuePolicyKind, DEFAULT_VALUE_RANGE,
};
pub use record::Record;
