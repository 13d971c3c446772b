//! Aggregated timing for one (size, format, direction).

use std::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Accumulated duration over a number of trials.
///
/// Built by folding trial durations; never mutated once produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BenchmarkSample {
    total: Duration,
    count: u32,
}

impl BenchmarkSample {
    pub fn new(total: Duration, count: u32) -> Self {
        Self { total, count }
    }

    /// Fold a sequence of trial durations into a sample.
    pub fn from_durations<I>(durations: I) -> Self
    where
        I: IntoIterator<Item = Duration>,
    {
        durations
            .into_iter()
            .fold(Self::default(), |sample, d| sample.with_trial(d))
    }

    /// A new sample with one more trial added.
    pub fn with_trial(self, duration: Duration) -> Self {
        Self {
            total: self.total + duration,
            count: self.count + 1,
        }
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// `total / count`; zero for an empty sample.
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            self.total / self.count
        }
    }

    /// Average in fractional seconds.
    pub fn average_secs(&self) -> f64 {
        self.average().as_secs_f64()
    }
}

impl Serialize for BenchmarkSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("BenchmarkSample", 3)?;
        s.serialize_field("total_secs", &self.total.as_secs_f64())?;
        s.serialize_field("count", &self.count)?;
        s.serialize_field("average_secs", &self.average_secs())?;
        s.end()
    }
}
