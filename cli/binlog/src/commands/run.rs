//! `binlog run`: benchmark both codecs and write the report.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use binlog_bench::{BenchConfig, Harness, DEFAULT_SIZES, DEFAULT_TRIALS};
use binlog_report::{charts_from_results, summary_json, summary_table, Page};
use serde_json::json;
use tracing::{debug, info};

use crate::commands::{build_source, DataOptions};
use crate::manifest::BinlogManifest;

/// Report path used when neither the command line nor the manifest sets one.
pub const DEFAULT_OUTPUT: &str = "serialization_deserialization_chart.html";

const PAGE_TITLE: &str = "Serialization Benchmark: JSON vs binlog";

/// How the summary is printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryFormat {
    Text,
    Json,
}

impl SummaryFormat {
    fn parse(s: Option<&str>) -> Result<Self> {
        match s {
            None | Some("text") => Ok(SummaryFormat::Text),
            Some("json") => Ok(SummaryFormat::Json),
            Some(other) => bail!("unknown summary format '{other}' (expected text or json)"),
        }
    }
}

/// Flags accepted by `binlog run`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub sizes: Option<Vec<usize>>,
    pub trials: Option<u32>,
    pub data: DataOptions,
    pub output: Option<String>,
    pub format: Option<String>,
    pub no_verify: bool,
}

/// Resolve the benchmark configuration (CLI flag > manifest > default).
pub fn resolve_config(manifest: Option<&BinlogManifest>, opts: &RunOptions) -> BenchConfig {
    let sizes = opts
        .sizes
        .clone()
        .or_else(|| manifest.and_then(|m| m.sizes()).map(<[usize]>::to_vec))
        .unwrap_or_else(|| DEFAULT_SIZES.to_vec());
    let trials = opts
        .trials
        .or_else(|| manifest.and_then(|m| m.trials()))
        .unwrap_or(DEFAULT_TRIALS);
    let verify = !opts.no_verify && manifest.and_then(|m| m.verify()).unwrap_or(true);
    BenchConfig {
        sizes,
        trials,
        verify,
    }
}

/// Resolve the report path. A flag is relative to `cwd`, a manifest entry to
/// the manifest's directory.
pub fn resolve_output(
    cwd: &Path,
    manifest: Option<(&BinlogManifest, &Path)>,
    output: Option<&str>,
) -> PathBuf {
    if let Some(path) = output {
        return cwd.join(path);
    }
    match manifest.and_then(|(m, dir)| m.output().map(|o| dir.join(o))) {
        Some(path) => path,
        None => cwd.join(DEFAULT_OUTPUT),
    }
}

/// Run the benchmark, print the summary and write the HTML report.
///
/// Returns the path of the written report.
pub fn run(
    cwd: &Path,
    manifest: Option<(&BinlogManifest, &Path)>,
    opts: &RunOptions,
) -> Result<PathBuf> {
    let summary_format = SummaryFormat::parse(opts.format.as_deref())?;
    let manifest_only = manifest.map(|(m, _)| m);
    let config = resolve_config(manifest_only, opts);
    config.validate()?;
    let output = resolve_output(cwd, manifest, opts.output.as_deref());
    let mut source = build_source(manifest_only, &opts.data)?;

    debug!(
        sizes = ?config.sizes,
        trials = config.trials,
        verify = config.verify,
        output = %output.display(),
        "resolved configuration"
    );
    let results = Harness::new()
        .run(&mut source, &config)
        .context("benchmark failed")?;

    let table = summary_table(&results);
    let mut page = Page::new(PAGE_TITLE).with_summary(table.clone());
    page.add_charts(charts_from_results(&results)?);
    page.write_html(&output)
        .with_context(|| format!("writing report {}", output.display()))?;
    info!(path = %output.display(), "report written");

    match summary_format {
        SummaryFormat::Text => {
            print!("{table}");
            println!();
            println!("Report written to {}", output.display());
        }
        SummaryFormat::Json => {
            let mut summary = summary_json(&results);
            summary["report"] = json!(output.display().to_string());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(output)
}
