//! `binlog generate`: write a generated dataset to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use binlog_codec::codec_for;
use binlog_core::RecordSource;
use binlog_report::format_bytes;
use tracing::info;

use crate::commands::{build_source, parse_format, DataOptions};
use crate::manifest::BinlogManifest;

/// Generate `count` records and write them to `output` (relative to `cwd`).
pub fn run(
    cwd: &Path,
    manifest: Option<&BinlogManifest>,
    count: usize,
    format: Option<&str>,
    output: &str,
    data: &DataOptions,
) -> Result<PathBuf> {
    let format = parse_format(format)?;
    let mut source = build_source(manifest, data)?;
    let records = source
        .generate(count)
        .with_context(|| format!("generating {count} records"))?;
    let bytes = codec_for(format)
        .encode(&records)
        .with_context(|| format!("encoding {count} records as {format}"))?;

    let path = cwd.join(output);
    fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(count, format = %format, bytes = bytes.len(), "dataset written");

    println!(
        "Wrote {count} records ({}, {format}) to {}",
        format_bytes(bytes.len()),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use binlog_codec::{encoded_len, BinaryCodec, Codec, JsonCodec};

    use super::*;

    fn empty_values() -> DataOptions {
        DataOptions {
            policy: Some("empty".into()),
            ..DataOptions::default()
        }
    }

    #[test]
    fn writes_binlog_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = run(dir.path(), None, 4, None, "data.binlog", &empty_values()).unwrap();

        let bytes = fs::read(&path).unwrap();
        let records = BinaryCodec.decode(&bytes).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(bytes.len(), encoded_len(&records));
        assert_eq!(records[3].name(), "name_3");
        assert_eq!(records[3].value(), "");
    }

    #[test]
    fn writes_json_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = run(dir.path(), None, 2, Some("json"), "data.json", &empty_values()).unwrap();

        let records = JsonCodec.decode(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), 0);
    }

    #[test]
    fn zero_records_is_an_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = run(dir.path(), None, 0, None, "empty.binlog", &empty_values()).unwrap();
        assert!(fs::read(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            dir.path(),
            None,
            1,
            None,
            "nope/data.binlog",
            &DataOptions::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("writing"));
    }
}
