//! Shared formatting helpers for reports.

use std::time::Duration;

use binlog_codec::Format;

/// Human label for a format's chart series.
pub fn series_label(format: Format) -> &'static str {
    match format {
        Format::Binary => "Binlog",
        Format::Json => "JSON",
    }
}

/// Render an ASCII bar showing `part` as a share of `whole`.
///
/// `ratio_bar(1, 4, 8)` gives `[██░░░░░░]  25.0%`.
pub fn ratio_bar(part: usize, whole: usize, bar_width: usize) -> String {
    if whole == 0 {
        let empty = "░".repeat(bar_width);
        return format!("[{empty}]    n/a");
    }

    let percent = (part as f64 / whole as f64) * 100.0;
    let filled = ((percent / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);

    format!(
        "[{}{}] {percent:5.1}%",
        "█".repeat(filled),
        "░".repeat(bar_width - filled)
    )
}

/// Format a duration with a unit suited to its magnitude.
pub fn format_duration(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns < 1_000 {
        format!("{ns}ns")
    } else if ns < 1_000_000 {
        format!("{:.1}us", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.1}ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

/// Format a byte count into a human-readable string.
pub fn format_bytes(bytes: usize) -> String {
    if bytes < 1_024 {
        format!("{bytes} B")
    } else if bytes < 1_024 * 1_024 {
        format!("{:.1} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1_024.0 * 1_024.0))
    }
}

/// Format an improvement percentage; undefined values print as `n/a`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "n/a".to_string(),
    }
}

/// Compact axis label for a chart value.
pub(crate) fn format_axis_value(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else if v.abs() >= 100.0 {
        format!("{v:.0}")
    } else if v.abs() >= 0.01 {
        format!("{v:.2}")
    } else {
        format!("{v:.1e}")
    }
}

/// Escape text for inclusion in HTML or SVG.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
