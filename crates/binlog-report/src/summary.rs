//! Adapters from harness results to charts, text and JSON.

use std::fmt::Write;

use binlog_bench::{FormatResult, Metric, PerSizeResults};
use binlog_codec::Format;
use serde_json::{json, Map, Value};

use crate::chart::Chart;
use crate::error::ReportError;
use crate::format::{format_bytes, format_duration, format_percent, ratio_bar, series_label};

const X_LABEL: &str = "Number of Records";
const BAR_WIDTH: usize = 20;

fn chart_text(metric: Metric) -> (&'static str, &'static str) {
    match metric {
        Metric::EncodeTime => ("Average Serialization Time", "Time (seconds)"),
        Metric::DecodeTime => ("Average Deserialization Time", "Time (seconds)"),
        Metric::EncodedSize => ("File Size Comparison", "Size (KB)"),
    }
}

/// Series labels for the binary and reference sides. Two sides measuring
/// the same format are told apart by a suffix on the reference label.
fn side_labels(results: &PerSizeResults) -> (String, String) {
    let (binary, reference) = results
        .formats()
        .unwrap_or((Format::Binary, Format::Json));
    let binary_label = series_label(binary).to_string();
    let mut reference_label = series_label(reference).to_string();
    if binary == reference {
        reference_label.push_str(" (reference)");
    }
    (binary_label, reference_label)
}

/// One chart per metric, each with the reference series followed by the
/// binary series.
pub fn charts_from_results(results: &PerSizeResults) -> Result<Vec<Chart>, ReportError> {
    let (binary_label, reference_label) = side_labels(results);
    Metric::ALL
        .iter()
        .map(|&metric| {
            let (title, y_label) = chart_text(metric);
            Chart::new(title, X_LABEL, y_label, results.x_values())
                .with_series(reference_label.as_str(), results.reference_series(metric))?
                .with_series(binary_label.as_str(), results.binary_series(metric))
        })
        .collect()
}

/// Fixed-width text table of averages, sizes and improvements.
pub fn summary_table(results: &PerSizeResults) -> String {
    let encode_gain = results.improvement(Metric::EncodeTime);
    let decode_gain = results.improvement(Metric::DecodeTime);
    let size_gain = results.improvement(Metric::EncodedSize);
    let (binary_label, reference_label) = side_labels(results);

    let mut text = String::new();
    let _ = writeln!(
        text,
        "=== Serialization Benchmark ({} trials per size) ===",
        results.trials
    );
    let _ = writeln!(text, "ref = {reference_label}, bin = {binary_label}");
    let _ = writeln!(text);
    let _ = writeln!(
        text,
        "{:>8} | {:>9} {:>9} {:>7} | {:>9} {:>9} {:>7} | {:>9} {:>9} {:>7}",
        "records",
        "ref enc",
        "bin enc",
        "gain",
        "ref dec",
        "bin dec",
        "gain",
        "ref size",
        "bin size",
        "gain"
    );
    for (i, s) in results.sizes.iter().enumerate() {
        let _ = writeln!(
            text,
            "{:>8} | {:>9} {:>9} {:>7} | {:>9} {:>9} {:>7} | {:>9} {:>9} {:>7}",
            s.size,
            format_duration(s.reference.encode.average()),
            format_duration(s.binary.encode.average()),
            format_percent(encode_gain[i]),
            format_duration(s.reference.decode.average()),
            format_duration(s.binary.decode.average()),
            format_percent(decode_gain[i]),
            format_bytes(s.reference.encoded_len),
            format_bytes(s.binary.encoded_len),
            format_percent(size_gain[i]),
        );
    }

    text.push('\n');
    let _ = writeln!(
        text,
        "{} SIZE RELATIVE TO {}",
        binary_label.to_uppercase(),
        reference_label.to_uppercase()
    );
    for s in &results.sizes {
        let _ = writeln!(
            text,
            "{:>8}  {}",
            s.size,
            ratio_bar(s.binary.encoded_len, s.reference.encoded_len, BAR_WIDTH)
        );
    }
    text
}

fn format_json(result: &FormatResult) -> Value {
    json!({
        "format": result.format,
        "encode_secs": result.encode.average_secs(),
        "decode_secs": result.decode.average_secs(),
        "bytes": result.encoded_len,
    })
}

/// Machine-readable summary. Undefined improvements are `null`.
pub fn summary_json(results: &PerSizeResults) -> Value {
    let gains: Vec<(Metric, Vec<Option<f64>>)> = Metric::ALL
        .iter()
        .map(|&metric| (metric, results.improvement(metric)))
        .collect();

    let sizes: Vec<Value> = results
        .sizes
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let improvement: Map<String, Value> = gains
                .iter()
                .map(|(metric, values)| (metric.name().to_string(), json!(values[i])))
                .collect();
            json!({
                "records": s.size,
                "binary": format_json(&s.binary),
                "reference": format_json(&s.reference),
                "improvement_percent": improvement,
            })
        })
        .collect();

    json!({
        "trials": results.trials,
        "sizes": sizes,
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use binlog_bench::{BenchConfig, BenchmarkSample, Harness, SizeResult};
    use binlog_codec::BinaryCodec;
    use binlog_core::{EmptyValues, RecordGenerator};

    use super::*;

    fn format_result(format: Format, micros: u64, len: usize) -> FormatResult {
        FormatResult {
            format,
            encode: BenchmarkSample::new(Duration::from_micros(micros * 3), 3),
            decode: BenchmarkSample::new(Duration::from_micros(micros * 3), 3),
            encoded_len: len,
        }
    }

    fn results() -> PerSizeResults {
        PerSizeResults {
            trials: 3,
            sizes: vec![
                SizeResult {
                    size: 0,
                    binary: FormatResult {
                        format: Format::Binary,
                        encode: BenchmarkSample::new(Duration::ZERO, 3),
                        decode: BenchmarkSample::new(Duration::ZERO, 3),
                        encoded_len: 0,
                    },
                    reference: FormatResult {
                        format: Format::Json,
                        encode: BenchmarkSample::new(Duration::ZERO, 3),
                        decode: BenchmarkSample::new(Duration::ZERO, 3),
                        encoded_len: 2,
                    },
                },
                SizeResult {
                    size: 100,
                    binary: format_result(Format::Binary, 10, 1024),
                    reference: format_result(Format::Json, 40, 2048),
                },
            ],
        }
    }

    #[test]
    fn three_charts_with_two_series() {
        let charts = charts_from_results(&results()).unwrap();
        assert_eq!(charts.len(), 3);
        assert_eq!(charts[0].title, "Average Serialization Time");
        assert_eq!(charts[1].title, "Average Deserialization Time");
        assert_eq!(charts[2].title, "File Size Comparison");
        assert_eq!(charts[2].y_label, "Size (KB)");
        for chart in &charts {
            assert_eq!(chart.x_label, "Number of Records");
            assert_eq!(chart.x_values, vec![0, 100]);
            assert_eq!(chart.series[0].name, "JSON");
            assert_eq!(chart.series[1].name, "Binlog");
        }
        assert_eq!(charts[2].series[1].values, vec![0.0, 1.0]);
    }

    #[test]
    fn table_marks_undefined_improvement() {
        let table = summary_table(&results());
        assert!(table.contains("3 trials per size"));
        assert!(table.contains("n/a"));
        assert!(table.contains("75.0%"));
        assert!(table.contains("50.0%"));
        assert!(table.contains("1.0 KB"));
    }

    #[test]
    fn json_uses_null_for_undefined() {
        let json = summary_json(&results());
        assert_eq!(json["trials"], 3);
        let zero = &json["sizes"][0];
        assert!(zero["improvement_percent"]["encode"].is_null());
        assert_eq!(zero["reference"]["format"], "json");
        assert_eq!(zero["reference"]["bytes"], 2);
        assert_eq!(zero["binary"]["format"], "binlog");
        assert_eq!(zero["binary"]["bytes"], 0);
        let hundred = &json["sizes"][1];
        assert_eq!(hundred["improvement_percent"]["size"], 50.0);
        assert_eq!(hundred["records"], 100);
    }

    #[test]
    fn charts_runs_with_other_codecs() {
        let harness = Harness::with_codecs(Box::new(BinaryCodec), Box::new(BinaryCodec));
        let mut source = RecordGenerator::new(EmptyValues);
        let results = harness
            .run(&mut source, &BenchConfig::new(vec![1, 2], 1))
            .unwrap();

        let charts = charts_from_results(&results).unwrap();
        assert_eq!(charts.len(), 3);
        for chart in &charts {
            assert_eq!(chart.series.len(), 2);
            assert_eq!(chart.series[0].name, "Binlog (reference)");
            assert_eq!(chart.series[1].name, "Binlog");
            assert!(chart.series.iter().all(|s| s.values.len() == 2));
        }
        assert_eq!(charts[2].series[0].values, charts[2].series[1].values);

        let table = summary_table(&results);
        assert!(table.contains("BINLOG SIZE RELATIVE TO BINLOG (REFERENCE)"));
        let json = summary_json(&results);
        assert_eq!(json["sizes"][1]["reference"]["format"], "binlog");
        assert_eq!(json["sizes"][1]["improvement_percent"]["size"], 0.0);
    }
}
