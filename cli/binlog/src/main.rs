//! binlog CLI: benchmark the binlog record format against JSON, and
//! generate or inspect datasets in either format.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::run::RunOptions;
use commands::DataOptions;
use manifest::BinlogManifest;

#[derive(Parser)]
#[command(
    name = "binlog",
    version,
    about = "Binary record codec and serialization benchmark"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark binlog against JSON and write an HTML report
    Run {
        /// Comma-separated record counts (e.g., 10,100,1000)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,
        /// Encode/decode trials per size
        #[arg(long)]
        trials: Option<u32>,
        /// Value policy (random, empty, padded)
        #[arg(long)]
        policy: Option<String>,
        /// Seed for generated values
        #[arg(long)]
        seed: Option<u64>,
        /// Value length for the padded policy
        #[arg(long)]
        value_len: Option<usize>,
        /// Report path (default: serialization_deserialization_chart.html)
        #[arg(long)]
        output: Option<String>,
        /// Summary format (text, json)
        #[arg(long)]
        format: Option<String>,
        /// Skip comparing decoded records with the input
        #[arg(long)]
        no_verify: bool,
    },
    /// Write a generated dataset
    Generate {
        /// Number of records
        #[arg(long)]
        count: usize,
        /// Dataset format (binlog, json)
        #[arg(long)]
        format: Option<String>,
        /// Output file
        #[arg(long)]
        output: String,
        /// Value policy (random, empty, padded)
        #[arg(long)]
        policy: Option<String>,
        /// Seed for generated values
        #[arg(long)]
        seed: Option<u64>,
        /// Value length for the padded policy
        #[arg(long)]
        value_len: Option<usize>,
    },
    /// Decode a dataset and print its contents
    Inspect {
        /// Dataset file
        path: String,
        /// Dataset format (binlog, json); inferred from the extension if omitted
        #[arg(long)]
        format: Option<String>,
        /// Number of records to list
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Log to stderr so stdout carries only the summary. `RUST_LOG` overrides
/// the default `info` level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Run {
            sizes,
            trials,
            policy,
            seed,
            value_len,
            output,
            format,
            no_verify,
        } => {
            let loaded = load_manifest_optional(&cwd)?;
            let opts = RunOptions {
                sizes,
                trials,
                data: DataOptions {
                    policy,
                    seed,
                    value_len,
                },
                output,
                format,
                no_verify,
            };
            let manifest = loaded.as_ref().map(|(m, dir)| (m, dir.as_path()));
            commands::run::run(&cwd, manifest, &opts)?;
            Ok(())
        }

        Commands::Generate {
            count,
            format,
            output,
            policy,
            seed,
            value_len,
        } => {
            let loaded = load_manifest_optional(&cwd)?;
            let data = DataOptions {
                policy,
                seed,
                value_len,
            };
            commands::generate::run(
                &cwd,
                loaded.as_ref().map(|(m, _)| m),
                count,
                format.as_deref(),
                &output,
                &data,
            )?;
            Ok(())
        }

        Commands::Inspect {
            path,
            format,
            limit,
        } => commands::inspect::run(&cwd, &path, format.as_deref(), limit),
    }
}

/// Load `binlog.toml` from `cwd` or any parent, if present.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<Option<(BinlogManifest, PathBuf)>> {
    BinlogManifest::find_and_load(cwd)
}
