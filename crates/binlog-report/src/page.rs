//! A self-contained HTML page of charts.

use std::fs;
use std::path::Path;

use crate::chart::Chart;
use crate::error::ReportError;
use crate::format::escape_html;

/// An HTML report: a title, an optional preformatted summary, and charts.
#[derive(Debug, Clone, Default)]
pub struct Page {
    title: String,
    summary: Option<String>,
    charts: Vec<Chart>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: None,
            charts: Vec::new(),
        }
    }

    /// Attach a preformatted text summary shown above the charts.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn add_chart(&mut self, chart: Chart) {
        self.charts.push(chart);
    }

    pub fn add_charts(&mut self, charts: impl IntoIterator<Item = Chart>) {
        self.charts.extend(charts);
    }

    /// Render the full HTML document.
    pub fn render_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&format!("<title>{title}</title>\n"));
        html.push_str(
            "<style>body{font-family:sans-serif;margin:24px;} \
             .chart{margin:16px 0;} pre{background:#f6f8fa;padding:12px;}</style>\n",
        );
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("<h1>{title}</h1>\n"));
        if let Some(summary) = &self.summary {
            html.push_str(&format!("<pre>{}</pre>\n", escape_html(summary)));
        }
        for chart in &self.charts {
            html.push_str("<div class=\"chart\">\n");
            html.push_str(&chart.render_svg());
            html.push_str("</div>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    /// Write the rendered page to `path`, replacing any existing file.
    pub fn write_html(&self, path: &Path) -> Result<(), ReportError> {
        fs::write(path, self.render_html()).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let mut page = Page::new("Serialization Benchmark").with_summary("size <= 10");
        for title in ["A", "B", "C"] {
            page.add_chart(
                Chart::new(title, "x", "y", vec![1, 2])
                    .with_series("JSON", vec![1.0, 2.0])
                    .unwrap(),
            );
        }
        page
    }

    #[test]
    fn one_svg_per_chart() {
        let html = page().render_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("<svg").count(), 3);
        assert!(html.contains("<title>Serialization Benchmark</title>"));
        assert!(html.contains("size &lt;= 10"));
    }

    #[test]
    fn write_html_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        page().write_html(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, page().render_html());
    }

    #[test]
    fn write_html_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("report.html");
        let err = page().write_html(&path).unwrap_err();
        match err {
            ReportError::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
