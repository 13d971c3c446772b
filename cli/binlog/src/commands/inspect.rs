//! `binlog inspect`: decode a dataset and show what it holds.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use binlog_codec::{codec_for, BinaryCodec, Format};
use binlog_report::format_bytes;

use crate::commands::parse_format;

/// Records listed when no `--limit` is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Pick the format from the flag, else from a `.json` extension, else binlog.
fn resolve_format(path: &Path, format: Option<&str>) -> Result<Format> {
    if format.is_some() {
        return parse_format(format);
    }
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    Ok(if is_json { Format::Json } else { Format::Binary })
}

/// Describe the dataset in `bytes`: count, size and the first `limit`
/// records. A binlog dataset with `limit == 0` is only walked for its framing,
/// so no text is decoded.
pub fn describe(bytes: &[u8], format: Format, limit: usize) -> Result<String> {
    let mut out = String::new();
    let _ = writeln!(out, "Format:  {format}");

    if format == Format::Binary && limit == 0 {
        let count = BinaryCodec
            .record_count(bytes)
            .context("walking binlog framing")?;
        let _ = writeln!(out, "Records: {count}");
        let _ = writeln!(out, "Size:    {} ({} bytes)", format_bytes(bytes.len()), bytes.len());
        return Ok(out);
    }

    let records = codec_for(format)
        .decode(bytes)
        .with_context(|| format!("decoding {format} data"))?;
    let _ = writeln!(out, "Records: {}", records.len());
    let _ = writeln!(out, "Size:    {} ({} bytes)", format_bytes(bytes.len()), bytes.len());

    if !records.is_empty() && limit > 0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:>10}  {:<24}  value", "id", "name");
        for record in records.iter().take(limit) {
            let _ = writeln!(
                out,
                "{:>10}  {:<24}  {}",
                record.id(),
                record.name(),
                record.value()
            );
        }
        if records.len() > limit {
            let _ = writeln!(out, "  ... {} more", records.len() - limit);
        }
    }
    Ok(out)
}

/// Inspect the dataset at `path` (relative to `cwd`).
pub fn run(cwd: &Path, path: &str, format: Option<&str>, limit: Option<usize>) -> Result<()> {
    let path = cwd.join(path);
    let format = resolve_format(&path, format)?;
    let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let text = describe(&bytes, format, limit.unwrap_or(DEFAULT_LIMIT))
        .with_context(|| format!("inspecting {}", path.display()))?;
    print!("{text}");
    Ok(())
}
