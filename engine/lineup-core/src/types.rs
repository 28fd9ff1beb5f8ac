use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One starter entry as it arrives from the lineup backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerScore {
    /// Player name (e.g., "Lamar Jackson")
    pub name: String,

    /// Fantasy points scored. Optional at the wire level so a missing field
    /// is reported as a `DataError` during extraction rather than failing
    /// deserialization of the whole record.
    pub points: Option<f64>,
}

/// Starters (or bench players) grouped by position name.
///
/// A `BTreeMap` keeps position iteration order deterministic, which in turn
/// keeps the assembled chart specifications byte-identical across runs.
pub type PositionMap = BTreeMap<String, Vec<PlayerScore>>;

/// One week of a lineup scenario as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekEntry {
    /// Starting lineup by position. Absent when the backend record is
    /// malformed; the extractor turns that into `DataError::MissingStarters`.
    #[serde(default)]
    pub starters: Option<PositionMap>,

    /// Bench players by position, when the backend includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bench: Option<PositionMap>,
}

/// Raw per-week lineup record: week-number-as-text -> week entry.
///
/// JSON object keys are always strings on the wire, so week numbers arrive
/// as text and are coerced to integers by the extractor.
pub type RawLineupRecord = HashMap<String, WeekEntry>;

/// Total points scored in one week of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekPoint {
    pub week: u32,
    pub points: f64,
}

/// Extraction output: weeks, total points, and per-week hover text, aligned
/// positionally. `weeks` is strictly ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySeries {
    pub weeks: Vec<u32>,
    pub points: Vec<f64>,
    pub hover: Vec<String>,
}

impl WeeklySeries {
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn week_points(&self) -> impl Iterator<Item = WeekPoint> + '_ {
        self.weeks
            .iter()
            .zip(self.points.iter())
            .map(|(&week, &points)| WeekPoint { week, points })
    }
}

/// The three parallel scenario series for one team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSeries {
    /// Best possible lineup from the originally drafted roster.
    pub draft: WeeklySeries,

    /// Best possible lineup from the roster after all transactions.
    pub actual_best: WeeklySeries,

    /// Lineup the user actually started.
    pub actual_lineup: WeeklySeries,
}

impl ScenarioSeries {
    /// Derive season metrics from the three series.
    pub fn metrics(&self) -> Result<DerivedMetrics, crate::error::PipelineError> {
        crate::metrics::compute(&self.draft, &self.actual_best, &self.actual_lineup)
    }
}

/// Season metrics derived from the three scenario series. Computed fresh per
/// request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub avg_draft: f64,
    pub avg_actual_best: f64,
    pub avg_actual_lineup: f64,

    /// Per-week `actual_best - draft` (transaction impact by week).
    pub weekly_diffs: Vec<f64>,

    /// Per-week `100 * actual_lineup / actual_best`, 0 when the best lineup
    /// scored 0.
    pub lineup_efficiency: Vec<f64>,

    pub avg_efficiency: f64,

    /// Chart y-axis bounds: `min(80, 0.8 * global_min)` and
    /// `1.1 * global_max`.
    pub y_min: f64,
    pub y_max: f64,
}

/// Which series is on top within a fill region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// The conventional upper series is above.
    Positive,
    /// The conventional lower series is above.
    Negative,
}

/// One closed polygon to render as a filled area between two series: the
/// upper polyline forward, then the lower polyline reversed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRegion {
    pub x_path: Vec<f64>,
    pub y_path: Vec<f64>,
    pub polarity: Polarity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_record_deserializes_with_string_week_keys() {
        let json = r#"{
            "2": {"starters": {"QB": [{"name": "A", "points": 21.5}]}},
            "1": {"starters": {"RB": [{"name": "B", "points": 9.0}, {"name": "C", "points": 8.0}]}}
        }"#;
        let record: RawLineupRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.len(), 2);
        let week2 = &record["2"];
        assert_eq!(week2.starters.as_ref().unwrap()["QB"][0].points, Some(21.5));
    }

    #[test]
    fn missing_fields_survive_deserialization_for_later_validation() {
        // Shape errors are reported by the extractor with the week named,
        // so the wire types must accept them.
        let json = r#"{
            "1": {},
            "2": {"starters": {"QB": [{"name": "NoScore"}]}}
        }"#;
        let record: RawLineupRecord = serde_json::from_str(json).unwrap();
        assert!(record["1"].starters.is_none());
        assert_eq!(record["2"].starters.as_ref().unwrap()["QB"][0].points, None);
    }

    #[test]
    fn empty_backend_response_is_an_empty_record() {
        let record: RawLineupRecord = serde_json::from_str("{}").unwrap();
        assert!(record.is_empty());
    }
}
