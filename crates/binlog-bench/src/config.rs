//! Benchmark configuration.

use crate::error::BenchError;

/// Record counts exercised when no ladder is configured.
pub const DEFAULT_SIZES: [usize; 10] = [
    10, 100, 1_000, 10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000,
];

/// Trials per size when none is configured.
pub const DEFAULT_TRIALS: u32 = 10;

/// Inputs to a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Size ladder: record counts, strictly increasing.
    pub sizes: Vec<usize>,
    /// Encode/decode trials per size and format.
    pub trials: u32,
    /// Compare every decoded sequence with its input (outside the timed region).
    pub verify: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            verify: true,
        }
    }
}

impl BenchConfig {
    pub fn new(sizes: Vec<usize>, trials: u32) -> Self {
        Self {
            sizes,
            trials,
            verify: true,
        }
    }

    /// Check the trial count and the shape of the ladder.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig {
                detail: "trial count must be at least 1".into(),
            });
        }
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig {
                detail: "size ladder is empty".into(),
            });
        }
        if let Some(pair) = self.sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(BenchError::InvalidConfig {
                detail: format!(
                    "size ladder must be strictly increasing ({} followed by {})",
                    pair[0], pair[1]
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sizes.len(), 10);
        assert_eq!(config.trials, 10);
        assert!(config.verify);
    }

    #[test]
    fn zero_trials_rejected() {
        let config = BenchConfig::new(vec![1, 2], 0);
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn empty_ladder_rejected() {
        assert!(BenchConfig::new(vec![], 1).validate().is_err());
    }

    #[test]
    fn non_increasing_ladder_rejected() {
        let err = BenchConfig::new(vec![10, 100, 100], 1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("100 followed by 100"));
        assert!(BenchConfig::new(vec![5, 1], 1).validate().is_err());
    }

    #[test]
    fn zero_size_allowed() {
        assert!(BenchConfig::new(vec![0, 1, 5], 3).validate().is_ok());
    }
}
