//! Report sink for benchmark results.
//!
//! Consumes the harness's per-size series and renders them as an HTML page
//! of inline SVG line charts, a fixed-width text summary, or JSON.

pub mod chart;
pub mod error;
pub mod format;
pub mod page;
pub mod summary;

pub use chart::{Chart, Series};
pub use error::ReportError;
pub use format::{format_bytes, format_duration, format_percent, ratio_bar, series_label};
pub use page::Page;
pub use summary::{charts_from_results, summary_json, summary_table};
