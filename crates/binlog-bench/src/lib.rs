//! Benchmark harness for the binlog serialization comparison.
//!
//! For every size in a ladder the harness generates one record sequence,
//! runs a fixed number of encode/decode trials through both codecs, and
//! folds the per-call durations into [`BenchmarkSample`]s. Everything runs on
//! the calling thread, in ladder order, so measurements do not compete with
//! each other for CPU time.

pub mod config;
pub mod error;
pub mod harness;
pub mod results;
pub mod sample;
pub mod timer;

pub use config::{BenchConfig, DEFAULT_SIZES, DEFAULT_TRIALS};
pub use error::{BenchError, Stage};
pub use harness::Harness;
pub use results::{improvement, FormatResult, Metric, PerSizeResults, SizeResult};
pub use sample::BenchmarkSample;
pub use timer::{FixedTimer, MonotonicTimer, Timer};
