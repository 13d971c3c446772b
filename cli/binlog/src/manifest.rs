//! `binlog.toml` manifest parsing.
//!
//! Every section and key is optional. Values set here sit between command-line
//! flags (which win) and the built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name searched for by [`BinlogManifest::find_and_load`].
pub const MANIFEST_FILE: &str = "binlog.toml";

/// The top-level manifest structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinlogManifest {
    /// Benchmark ladder and trial settings.
    #[serde(default)]
    pub bench: Option<BenchSection>,
    /// Test-data generation settings.
    #[serde(default)]
    pub data: Option<DataSection>,
    /// Report output settings.
    #[serde(default)]
    pub report: Option<ReportSection>,
}

/// `[bench]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchSection {
    /// Record counts to measure, strictly increasing.
    #[serde(default)]
    pub sizes: Option<Vec<usize>>,
    /// Trials per size.
    #[serde(default)]
    pub trials: Option<u32>,
    /// Compare decoded output to the input after each trial.
    #[serde(default)]
    pub verify: Option<bool>,
}

/// `[data]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    /// Value policy name (random, empty, padded).
    #[serde(default)]
    pub policy: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Exclusive upper bound for `value_{k}` under the random policy.
    #[serde(default)]
    pub value_range: Option<u32>,
    /// Value length under the padded policy.
    #[serde(default)]
    pub value_len: Option<usize>,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    /// HTML report path, relative to the manifest directory.
    #[serde(default)]
    pub output: Option<String>,
}

impl BinlogManifest {
    /// Search upward from `start_dir` for a `binlog.toml` file, parse and return
    /// it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: BinlogManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing binlog.toml")
    }

    pub fn sizes(&self) -> Option<&[usize]> {
        self.bench.as_ref().and_then(|b| b.sizes.as_deref())
    }

    pub fn trials(&self) -> Option<u32> {
        self.bench.as_ref().and_then(|b| b.trials)
    }

    pub fn verify(&self) -> Option<bool> {
        self.bench.as_ref().and_then(|b| b.verify)
    }

    pub fn policy(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.policy.as_deref())
    }

    pub fn seed(&self) -> Option<u64> {
        self.data.as_ref().and_then(|d| d.seed)
    }

    pub fn value_range(&self) -> Option<u32> {
        self.data.as_ref().and_then(|d| d.value_range)
    }

    pub fn value_len(&self) -> Option<usize> {
        self.data.as_ref().and_then(|d| d.value_len)
    }

    pub fn output(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.output.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[bench]
sizes = [10, 100, 1000]
trials = 5
verify = false

[data]
policy = "padded"
seed = 42
value_range = 500
value_len = 64

[report]
output = "out/report.html"
"#;
        let manifest = BinlogManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.sizes(), Some(&[10, 100, 1000][..]));
        assert_eq!(manifest.trials(), Some(5));
        assert_eq!(manifest.verify(), Some(false));
        assert_eq!(manifest.policy(), Some("padded"));
        assert_eq!(manifest.seed(), Some(42));
        assert_eq!(manifest.value_range(), Some(500));
        assert_eq!(manifest.value_len(), Some(64));
        assert_eq!(manifest.output(), Some("out/report.html"));
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = BinlogManifest::from_str("").unwrap();
        assert!(manifest.sizes().is_none());
        assert!(manifest.trials().is_none());
        assert!(manifest.policy().is_none());
        assert!(manifest.output().is_none());
    }

    #[test]
    fn parse_partial_section() {
        let manifest = BinlogManifest::from_str("[bench]\ntrials = 3\n").unwrap();
        assert_eq!(manifest.trials(), Some(3));
        assert!(manifest.sizes().is_none());
        assert!(manifest.verify().is_none());
    }

    #[test]
    fn reject_unknown_key() {
        assert!(BinlogManifest::from_str("[bench]\ntrails = 3\n").is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        let bad = "this is not valid toml [[[";
        assert!(BinlogManifest::from_str(bad).is_err());
    }

    #[test]
    fn reject_negative_size() {
        assert!(BinlogManifest::from_str("[bench]\nsizes = [10, -1]\n").is_err());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[bench]\ntrials = 2\n").unwrap();

        let (manifest, found_dir) = BinlogManifest::find_and_load(dir.path()).unwrap().unwrap();
        assert_eq!(manifest.trials(), Some(2));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[data]\nseed = 7\n").unwrap();

        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = BinlogManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.seed(), Some(7));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[bench]\ntrials = \"many\"\n").unwrap();

        let err = BinlogManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
