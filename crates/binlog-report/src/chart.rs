//! Line charts rendered as inline SVG.
//!
//! The x axis is categorical: each x value gets an evenly spaced slot, so a
//! ladder like 10, 100, 1000, 10000 stays readable. The y axis starts at zero
//! and ends at a rounded-up maximum.

use std::fmt::Write;

use crate::error::ReportError;
use crate::format::{escape_html, format_axis_value};

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 380.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 64.0;
const Y_TICKS: usize = 5;

const PALETTE: [&str; 6] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272",
];

/// A named series of y values, one per chart x value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

/// A titled line chart over a shared x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_values: Vec<usize>,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        x_values: Vec<usize>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_values,
            series: Vec::new(),
        }
    }

    /// Add a series; it must have exactly one value per x value.
    pub fn with_series(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, ReportError> {
        let name = name.into();
        if values.len() != self.x_values.len() {
            return Err(ReportError::SeriesLength {
                series: name,
                expected: self.x_values.len(),
                actual: values.len(),
            });
        }
        self.series.push(Series { name, values });
        Ok(self)
    }

    /// Largest finite value across all series.
    fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    fn x_position(&self, index: usize) -> f64 {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let slots = self.x_values.len().max(1) as f64;
        MARGIN_LEFT + plot_width * (index as f64 + 0.5) / slots
    }

    fn y_position(value: f64, y_max: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        HEIGHT - MARGIN_BOTTOM - plot_height * (value / y_max)
    }

    /// Render the chart as a standalone `<svg>` element.
    pub fn render_svg(&self) -> String {
        let y_max = nice_ceiling(self.max_value());
        let plot_bottom = HEIGHT - MARGIN_BOTTOM;
        let plot_right = WIDTH - MARGIN_RIGHT;
        let mut svg = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="22" text-anchor="middle" font-size="16" font-weight="bold">{}</text>"#,
            WIDTH / 2.0,
            escape_html(&self.title)
        );

        // Gridlines and y tick labels
        for i in 0..=Y_TICKS {
            let value = y_max * i as f64 / Y_TICKS as f64;
            let y = Self::y_position(value, y_max);
            let _ = writeln!(
                svg,
                r##"  <line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{plot_right}" y2="{y:.1}" stroke="#e0e0e0"/>"##
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="{:.1}" text-anchor="end">{}</text>"#,
                MARGIN_LEFT - 8.0,
                y + 4.0,
                format_axis_value(value)
            );
        }

        // Axes
        let _ = writeln!(
            svg,
            r##"  <line x1="{MARGIN_LEFT}" y1="{plot_bottom}" x2="{plot_right}" y2="{plot_bottom}" stroke="#333"/>"##
        );
        let _ = writeln!(
            svg,
            r##"  <line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{plot_bottom}" stroke="#333"/>"##
        );

        // X tick labels
        for (i, x_value) in self.x_values.iter().enumerate() {
            let _ = writeln!(
                svg,
                r#"  <text x="{:.1}" y="{}" text-anchor="middle">{x_value}</text>"#,
                self.x_position(i),
                plot_bottom + 18.0
            );
        }

        // Axis labels
        let _ = writeln!(
            svg,
            r#"  <text x="{}" y="{}" text-anchor="middle">{}</text>"#,
            MARGIN_LEFT + (plot_right - MARGIN_LEFT) / 2.0,
            HEIGHT - 16.0,
            escape_html(&self.x_label)
        );
        let _ = writeln!(
            svg,
            r#"  <text x="16" y="{}" text-anchor="middle" transform="rotate(-90 16 {})">{}</text>"#,
            HEIGHT / 2.0,
            HEIGHT / 2.0,
            escape_html(&self.y_label)
        );

        // Series lines, points and legend
        for (s, series) in self.series.iter().enumerate() {
            let color = PALETTE[s % PALETTE.len()];
            let points: Vec<(f64, f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, &v)| (self.x_position(i), Self::y_position(v, y_max), v))
                .collect();

            let path: Vec<String> = points
                .iter()
                .map(|(x, y, _)| format!("{x:.1},{y:.1}"))
                .collect();
            let _ = writeln!(
                svg,
                r#"  <polyline fill="none" stroke="{color}" stroke-width="2" points="{}"/>"#,
                path.join(" ")
            );
            for (x, y, v) in &points {
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{color}"><title>{}: {v}</title></circle>"#,
                    escape_html(&series.name)
                );
            }

            let legend_x = MARGIN_LEFT + 120.0 * s as f64;
            let _ = writeln!(
                svg,
                r#"  <rect x="{legend_x}" y="34" width="14" height="10" fill="{color}"/>"#
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{}" y="43">{}</text>"#,
                legend_x + 20.0,
                escape_html(&series.name)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Round `max` up to 1, 2 or 5 times a power of ten. Non-positive input maps to 1.
fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}
