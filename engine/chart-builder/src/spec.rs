//! Chart specification types
//!
//! The serializable contract handed to the rendering layer: an ordered list
//! of traces, shape overlays, annotations, and layout/axis configuration.
//! Field vocabulary follows the Plotly-style renderer the dashboard frontend
//! uses, but nothing here depends on any drawing library.

use serde::{Deserialize, Serialize};

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    /// Connected line with markers at each week.
    Line,
    /// Closed filled polygon.
    Area,
    /// Vertical bar.
    Bar,
    /// Invisible markers that only carry hover text.
    HoverProxy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl LineStyle {
    pub fn solid(color: &str, width: f64) -> Self {
        Self { color: color.to_string(), width, dash: None }
    }

    pub fn dashed(color: &str, width: f64) -> Self {
        Self { color: color.to_string(), width, dash: Some("dash".to_string()) }
    }

    pub fn dotted(color: &str, width: f64) -> Self {
        Self { color: color.to_string(), width, dash: Some("dot".to_string()) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

/// One series in a chart specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,

    /// Bar start value, for waterfall-style stacked deltas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,

    /// Fill color for `Area` polygons and bars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,

    /// Per-point hover text; traces without it skip hover entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<Vec<String>>,

    /// Renderer-side hover template (e.g. for average reference lines).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_template: Option<String>,

    /// Static label drawn on the trace (bar value labels).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_group_title: Option<String>,

    pub show_legend: bool,
}

impl Trace {
    pub fn new(kind: TraceKind, name: &str, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            kind,
            name: name.to_string(),
            x,
            y,
            base: None,
            line: None,
            marker: None,
            fill_color: None,
            hover_text: None,
            hover_template: None,
            text: None,
            legend_group: None,
            legend_group_title: None,
            show_legend: true,
        }
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = Some(marker);
        self
    }

    pub fn with_fill_color(mut self, color: &str) -> Self {
        self.fill_color = Some(color.to_string());
        self
    }

    pub fn with_legend_group(mut self, group: &str, title: &str) -> Self {
        self.legend_group = Some(group.to_string());
        self.legend_group_title = Some(title.to_string());
        self
    }

    pub fn hidden_from_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }
}

/// A line overlay drawn on top of the traces (waterfall reference lines).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub line: LineStyle,
}

/// A text label pinned to chart coordinates.
///
/// `raw_value` is the metric being labeled; `display_position` is where the
/// label is actually drawn after overlap spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f64,
    pub raw_value: f64,
    pub display_position: f64,
    pub label: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// [min, max]; renderer autoscale when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,

    /// Fixed tick interval (1.0 for week axes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<f64>,

    /// Category labels for bar charts, indexed by x position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub x_axis: Axis,
    pub y_axis: Axis,

    /// "group" or "overlay" for bar charts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<String>,

    /// Unified per-week hover on the overview chart.
    pub unified_hover: bool,
}

/// A complete chart handed to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub traces: Vec<Trace>,
    pub shapes: Vec<Shape>,
    pub annotations: Vec<Annotation>,
    pub layout: Layout,
}

pub mod colors {
    //! Shared color vocabulary for the dashboard charts.

    pub const DRAFT: &str = "blue";
    pub const ACTUAL_BEST: &str = "green";
    pub const ACTUAL_LINEUP: &str = "orange";
    pub const EFFICIENCY: &str = "purple";

    pub const POSITIVE_FILL: &str = "rgba(0, 255, 0, 0.2)";
    pub const NEGATIVE_FILL: &str = "rgba(255, 0, 0, 0.2)";
    pub const ACHIEVED_FILL: &str = "rgba(0, 255, 0, 0.1)";

    pub const BAR_DRAFT: &str = "rgba(30, 144, 255, 0.8)";
    pub const BAR_POSITIVE: &str = "rgba(46, 204, 113, 0.8)";
    pub const BAR_NEGATIVE: &str = "rgba(231, 76, 60, 0.8)";
    pub const BAR_ACTUAL: &str = "rgba(241, 196, 15, 0.8)";
    pub const BAR_UNREALIZED: &str = "rgba(241, 196, 15, 0.3)";

    pub const REFERENCE: &str = "gray";
}
