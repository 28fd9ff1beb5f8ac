//! Lineup pipeline core
//!
//! Pure data-to-chart transformations for the season dashboard: turning raw
//! per-week lineup records into ordered point series, deriving season metrics
//! from the three scenario series (drafted, actual-best, actual-lineup),
//! splitting the gap between two series into crossing-aware fill polygons,
//! and spacing annotation labels so they never overlap.
//!
//! Everything in this crate is synchronous and side-effect free; fetching and
//! serving live in their own crates.

pub mod annotate;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod segments;
pub mod types;

pub use annotate::place;
pub use error::{DataError, PipelineError};
pub use extract::{extract, find_week, week_total};
pub use metrics::{compute, mean};
pub use segments::split;
pub use types::{
    DerivedMetrics, FillRegion, PlayerScore, Polarity, RawLineupRecord, ScenarioSeries, WeekEntry,
    WeekPoint, WeeklySeries,
};
