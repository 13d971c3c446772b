//! Errors from the report layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("series '{series}' has {actual} values but the chart has {expected} x values")]
    SeriesLength {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("cannot write report to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
