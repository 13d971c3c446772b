//! CLI command implementations.

pub mod generate;
pub mod inspect;
pub mod run;

use anyhow::{bail, Context, Result};
use binlog_codec::Format;
use binlog_core::{RecordGenerator, ValuePolicy, ValuePolicyKind, DEFAULT_VALUE_RANGE};
use tracing::debug;

use crate::manifest::BinlogManifest;

/// Seed used when neither the command line nor the manifest sets one.
pub const DEFAULT_SEED: u64 = 1;

/// Value length for the padded policy when none is configured.
pub const DEFAULT_VALUE_LEN: usize = 16;

/// Data-generation flags shared by `run` and `generate`.
#[derive(Debug, Clone, Default)]
pub struct DataOptions {
    pub policy: Option<String>,
    pub seed: Option<u64>,
    pub value_len: Option<usize>,
}

/// Build the record source (CLI flag > manifest > default).
pub fn build_source(
    manifest: Option<&BinlogManifest>,
    opts: &DataOptions,
) -> Result<RecordGenerator<Box<dyn ValuePolicy>>> {
    let policy_name = opts
        .policy
        .as_deref()
        .or_else(|| manifest.and_then(|m| m.policy()))
        .unwrap_or("random");
    let kind = ValuePolicyKind::parse(policy_name)?;
    let seed = opts
        .seed
        .or_else(|| manifest.and_then(|m| m.seed()))
        .unwrap_or(DEFAULT_SEED);
    let value_range = manifest
        .and_then(|m| m.value_range())
        .unwrap_or(DEFAULT_VALUE_RANGE);
    let value_len = opts
        .value_len
        .or_else(|| manifest.and_then(|m| m.value_len()))
        .unwrap_or(DEFAULT_VALUE_LEN);

    debug!(policy = kind.name(), seed, value_range, value_len, "record source");
    let policy = kind
        .build(seed, value_range, value_len)
        .with_context(|| format!("building '{}' value policy", kind.name()))?;
    Ok(RecordGenerator::new(policy))
}

/// Parse a dataset format flag, defaulting to binlog.
pub fn parse_format(format: Option<&str>) -> Result<Format> {
    match format {
        None => Ok(Format::Binary),
        Some(name) => match Format::parse(name) {
            Some(f) => Ok(f),
            None => bail!("unknown format '{name}' (expected binlog or json)"),
        },
    }
}

#[cfg(test)]
mod tests {
    use binlog_core::RecordSource;

    use super::*;

    #[test]
    fn default_source_is_random() {
        let mut source = build_source(None, &DataOptions::default()).unwrap();
        let records = source.generate(3).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].name(), "name_2");
        assert!(records[0].value().starts_with("value_"));
    }

    #[test]
    fn flag_overrides_manifest_policy() {
        let manifest = BinlogManifest::from_str("[data]\npolicy = \"padded\"\n").unwrap();
        let opts = DataOptions {
            policy: Some("empty".into()),
            ..DataOptions::default()
        };
        let mut source = build_source(Some(&manifest), &opts).unwrap();
        assert_eq!(source.generate(1).unwrap()[0].value(), "");
    }

    #[test]
    fn manifest_value_len_applies() {
        let manifest =
            BinlogManifest::from_str("[data]\npolicy = \"padded\"\nvalue_len = 9\n").unwrap();
        let mut source = build_source(Some(&manifest), &DataOptions::default()).unwrap();
        assert_eq!(source.generate(1).unwrap()[0].value().len(), 9);
    }

    #[test]
    fn same_seed_same_records() {
        let opts = DataOptions {
            seed: Some(99),
            ..DataOptions::default()
        };
        let a = build_source(None, &opts).unwrap().generate(20).unwrap();
        let b = build_source(None, &opts).unwrap().generate(20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_unknown_policy_and_zero_range() {
        let opts = DataOptions {
            policy: Some("gaussian".into()),
            ..DataOptions::default()
        };
        assert!(build_source(None, &opts).is_err());

        let manifest = BinlogManifest::from_str("[data]\nvalue_range = 0\n").unwrap();
        assert!(build_source(Some(&manifest), &DataOptions::default()).is_err());
    }

    #[test]
    fn format_flag() {
        assert_eq!(parse_format(None).unwrap(), Format::Binary);
        assert_eq!(parse_format(Some("json")).unwrap(), Format::Json);
        assert!(parse_format(Some("xml")).is_err());
    }
}
