//! Per-size benchmark results and the series derived from them.

use binlog_codec::Format;
use serde::Serialize;

use crate::error::BenchError;
use crate::sample::BenchmarkSample;

/// Encode/decode timings and encoded size for one format at one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatResult {
    pub format: Format,
    pub encode: BenchmarkSample,
    pub decode: BenchmarkSample,
    /// Encoded length in bytes, identical across all trials of the size.
    pub encoded_len: usize,
}

impl FormatResult {
    /// Encoded length in KiB.
    pub fn encoded_kib(&self) -> f64 {
        self.encoded_len as f64 / 1024.0
    }
}

/// Both formats measured on the same input of `size` records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeResult {
    pub size: usize,
    pub binary: FormatResult,
    pub reference: FormatResult,
}

impl SizeResult {
    /// The result for `format`, if it was measured.
    pub fn get(&self, format: Format) -> Option<&FormatResult> {
        [&self.binary, &self.reference]
            .into_iter()
            .find(|r| r.format == format)
    }
}

/// A quantity plotted per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Average encode time, seconds.
    EncodeTime,
    /// Average decode time, seconds.
    DecodeTime,
    /// Encoded size, KiB.
    EncodedSize,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::EncodeTime, Metric::DecodeTime, Metric::EncodedSize];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::EncodeTime => "encode",
            Metric::DecodeTime => "decode",
            Metric::EncodedSize => "size",
        }
    }

    fn value(&self, result: &FormatResult) -> f64 {
        match self {
            Metric::EncodeTime => result.encode.average_secs(),
            Metric::DecodeTime => result.decode.average_secs(),
            Metric::EncodedSize => result.encoded_kib(),
        }
    }
}

/// The output of a benchmark run, one entry per ladder size in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerSizeResults {
    pub trials: u32,
    pub sizes: Vec<SizeResult>,
}

impl PerSizeResults {
    /// The size ladder (chart x axis).
    pub fn x_values(&self) -> Vec<usize> {
        self.sizes.iter().map(|s| s.size).collect()
    }

    /// One value per size for the binary side of the comparison.
    pub fn binary_series(&self, metric: Metric) -> Vec<f64> {
        self.sizes.iter().map(|s| metric.value(&s.binary)).collect()
    }

    /// One value per size for the reference side of the comparison.
    pub fn reference_series(&self, metric: Metric) -> Vec<f64> {
        self.sizes.iter().map(|s| metric.value(&s.reference)).collect()
    }

    /// Format measured on each side, taken from the first size.
    pub fn formats(&self) -> Option<(Format, Format)> {
        self.sizes
            .first()
            .map(|s| (s.binary.format, s.reference.format))
    }

    /// Values for `metric` at every size where `format` was measured.
    pub fn series(&self, metric: Metric, format: Format) -> Vec<f64> {
        self.sizes
            .iter()
            .filter_map(|s| s.get(format))
            .map(|r| metric.value(r))
            .collect()
    }

    pub fn encode_secs(&self, format: Format) -> Vec<f64> {
        self.series(Metric::EncodeTime, format)
    }

    pub fn decode_secs(&self, format: Format) -> Vec<f64> {
        self.series(Metric::DecodeTime, format)
    }

    pub fn size_kib(&self, format: Format) -> Vec<f64> {
        self.series(Metric::EncodedSize, format)
    }

    /// Improvement of the binary format over the reference format for `metric`,
    /// per size. `None` where the reference value is zero.
    pub fn improvement(&self, metric: Metric) -> Vec<Option<f64>> {
        self.sizes
            .iter()
            .map(|s| improvement_at(metric.value(&s.reference), metric.value(&s.binary)))
            .collect()
    }
}

/// Percentage reduction from `baseline` to `candidate` at matching indices:
/// `(a[i] - b[i]) / a[i] * 100`.
///
/// An index where the baseline is zero (or either value is not finite) has no
/// defined improvement and yields `None` rather than a NaN or infinity.
pub fn improvement(baseline: &[f64], candidate: &[f64]) -> Result<Vec<Option<f64>>, BenchError> {
    if baseline.len() != candidate.len() {
        return Err(BenchError::SeriesLength {
            baseline: baseline.len(),
            candidate: candidate.len(),
        });
    }
    Ok(baseline
        .iter()
        .zip(candidate)
        .map(|(&a, &b)| improvement_at(a, b))
        .collect())
}

fn improvement_at(a: f64, b: f64) -> Option<f64> {
    if a == 0.0 || !a.is_finite() || !b.is_finite() {
        None
    } else {
        Some((a - b) / a * 100.0)
    }
}
