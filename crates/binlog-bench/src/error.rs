//! Benchmark errors.

use std::fmt;

use binlog_codec::{CodecError, Format};
use binlog_core::GenerationError;
use thiserror::Error;

/// The codec call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Encode,
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Encode => write!(f, "encode"),
            Stage::Decode => write!(f, "decode"),
        }
    }
}

/// Errors that abort a benchmark run.
///
/// Every variant raised while measuring carries the size being measured;
/// a failing size is never skipped or zero-filled.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("invalid benchmark configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("record generation failed at size {size}: {source}")]
    Generation {
        size: usize,
        source: GenerationError,
    },

    #[error("{format} {stage} failed at size {size}: {source}")]
    Codec {
        size: usize,
        format: Format,
        stage: Stage,
        source: CodecError,
    },

    #[error("{format} encoded size changed between trials at size {size}: {first} then {later} bytes")]
    UnstableSize {
        size: usize,
        format: Format,
        first: usize,
        later: usize,
    },

    #[error("{format} round trip did not reproduce the input at size {size}")]
    RoundTripMismatch { size: usize, format: Format },

    #[error("series length mismatch: {baseline} baseline values, {candidate} candidate values")]
    SeriesLength { baseline: usize, candidate: usize },
}
