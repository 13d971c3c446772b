//! Benchmark harness: generate -> trials -> fold -> results.

use std::time::Duration;

use binlog_codec::{BinaryCodec, Codec, CodecError, Format, JsonCodec};
use binlog_core::{GenerationError, Record, RecordSource};
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::{BenchError, Stage};
use crate::results::{FormatResult, PerSizeResults, SizeResult};
use crate::sample::BenchmarkSample;
use crate::timer::{MonotonicTimer, Timer};

/// Timings and encoded length of one encode+decode cycle.
#[derive(Debug, Clone, Copy)]
struct Trial {
    encode: Duration,
    decode: Duration,
    encoded_len: usize,
}

/// Drives a binary codec and a reference codec over identical inputs.
pub struct Harness<T = MonotonicTimer> {
    binary: Box<dyn Codec>,
    reference: Box<dyn Codec>,
    timer: T,
}

impl Harness {
    /// binlog against JSON, timed with the monotonic clock.
    pub fn new() -> Self {
        Self::with_codecs(Box::new(BinaryCodec), Box::new(JsonCodec))
    }

    /// Compare arbitrary codecs, timed with the monotonic clock.
    pub fn with_codecs(binary: Box<dyn Codec>, reference: Box<dyn Codec>) -> Self {
        Self {
            binary,
            reference,
            timer: MonotonicTimer,
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Timer> Harness<T> {
    /// Replace the timer.
    pub fn with_timer<U: Timer>(self, timer: U) -> Harness<U> {
        Harness {
            binary: self.binary,
            reference: self.reference,
            timer,
        }
    }

    /// Run every size of the ladder in order.
    ///
    /// The first failure aborts the run; results for earlier sizes are
    /// discarded so that a partial series is never reported.
    pub fn run(
        &self,
        source: &mut dyn RecordSource,
        config: &BenchConfig,
    ) -> Result<PerSizeResults, BenchError> {
        config.validate()?;
        info!(
            sizes = config.sizes.len(),
            trials = config.trials,
            binary = %self.binary.format(),
            reference = %self.reference.format(),
            "starting benchmark"
        );

        let mut sizes = Vec::with_capacity(config.sizes.len());
        for &size in &config.sizes {
            sizes.push(self.run_size(source, size, config)?);
        }

        Ok(PerSizeResults {
            trials: config.trials,
            sizes,
        })
    }

    fn run_size(
        &self,
        source: &mut dyn RecordSource,
        size: usize,
        config: &BenchConfig,
    ) -> Result<SizeResult, BenchError> {
        let records = source
            .generate(size)
            .map_err(|source| BenchError::Generation { size, source })?;
        if records.len() != size {
            return Err(BenchError::Generation {
                size,
                source: GenerationError::ShortCount {
                    requested: size,
                    produced: records.len(),
                },
            });
        }

        let mut binary_trials = Vec::with_capacity(config.trials as usize);
        let mut reference_trials = Vec::with_capacity(config.trials as usize);
        for trial in 0..config.trials {
            let b = self.trial(&*self.binary, &records, size, config.verify)?;
            let r = self.trial(&*self.reference, &records, size, config.verify)?;
            debug!(
                size,
                trial,
                binary_encode = ?b.encode,
                binary_decode = ?b.decode,
                reference_encode = ?r.encode,
                reference_decode = ?r.decode,
                "trial complete"
            );
            binary_trials.push(b);
            reference_trials.push(r);
        }

        let binary = fold_trials(self.binary.format(), size, &binary_trials)?;
        let reference = fold_trials(self.reference.format(), size, &reference_trials)?;

        for result in [&binary, &reference] {
            if result.encode.average().is_zero() || result.decode.average().is_zero() {
                warn!(
                    size,
                    format = %result.format,
                    "average duration is zero; clock resolution too coarse for this size"
                );
            }
        }
        info!(
            size,
            binary_encode_secs = binary.encode.average_secs(),
            binary_decode_secs = binary.decode.average_secs(),
            binary_bytes = binary.encoded_len,
            reference_encode_secs = reference.encode.average_secs(),
            reference_decode_secs = reference.decode.average_secs(),
            reference_bytes = reference.encoded_len,
            "size complete"
        );

        Ok(SizeResult {
            size,
            binary,
            reference,
        })
    }

    fn trial(
        &self,
        codec: &dyn Codec,
        records: &[Record],
        size: usize,
        verify: bool,
    ) -> Result<Trial, BenchError> {
        let format = codec.format();
        let codec_error = |stage: Stage, source: CodecError| BenchError::Codec {
            size,
            format,
            stage,
            source,
        };

        let (encoded, encode) = self.timer.time(|| codec.encode(records));
        let encoded = encoded.map_err(|e| codec_error(Stage::Encode, e))?;

        let (decoded, decode) = self.timer.time(|| codec.decode(&encoded));
        let decoded = decoded.map_err(|e| codec_error(Stage::Decode, e))?;

        if verify && decoded.as_slice() != records {
            return Err(BenchError::RoundTripMismatch { size, format });
        }

        Ok(Trial {
            encode,
            decode,
            encoded_len: encoded.len(),
        })
    }
}

/// Fold trials into a [`FormatResult`], taking the encoded length from the
/// first trial and requiring every later trial to match it.
fn fold_trials(format: Format, size: usize, trials: &[Trial]) -> Result<FormatResult, BenchError> {
    let first = trials.first().map_or(0, |t| t.encoded_len);
    if let Some(t) = trials.iter().find(|t| t.encoded_len != first) {
        return Err(BenchError::UnstableSize {
            size,
            format,
            first,
            later: t.encoded_len,
        });
    }
    Ok(FormatResult {
        format,
        encode: BenchmarkSample::from_durations(trials.iter().map(|t| t.encode)),
        decode: BenchmarkSample::from_durations(trials.iter().map(|t| t.decode)),
        encoded_len: first,
    })
}
