//! Chart specification assembly
//!
//! Composes the pipeline outputs from `lineup-core` into chart-ready
//! specifications for the rendering layer: the season overview line chart
//! with crossing-aware fill areas, the season breakdown waterfall, the
//! per-week position comparison, and the summary-card scalars. Everything
//! here is presentation shape only; the geometry and metrics come from the
//! core crate.

pub mod overview;
pub mod spec;
pub mod summary;
pub mod waterfall;
pub mod week_detail;

pub use overview::{season_overview, ViewMode};
pub use spec::{Annotation, Axis, ChartSpec, Layout, LineStyle, MarkerStyle, Shape, Trace, TraceKind};
pub use summary::{season_summary, SeasonSummary, SummaryCards};
pub use waterfall::season_breakdown;
pub use week_detail::{week_detail, StarterComparison, WeekDetail};
