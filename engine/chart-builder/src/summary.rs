//! Summary-card scalars
//!
//! The plain numbers behind the dashboard's card row: draft baseline, best
//! possible, actual points (weekly averages), the signed transaction impact,
//! lineup efficiency, and points left on the bench. Raw values stay f64;
//! display formatting lives in `SummaryCards`.

use lineup_core::types::ScenarioSeries;
use lineup_core::PipelineError;
use serde::{Deserialize, Serialize};

/// Season summary figures, all weekly averages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub weeks: usize,
    pub draft_baseline: f64,
    pub best_possible: f64,
    pub actual_points: f64,

    /// `best_possible - draft_baseline`: value added or lost through roster
    /// moves.
    pub transaction_impact: f64,

    /// `actual_points / best_possible * 100`, 0 when the best lineup never
    /// scored.
    pub lineup_efficiency: f64,

    /// `best_possible - actual_points`: weekly points left on the bench.
    pub points_on_bench: f64,
}

/// Display-formatted summary values for card rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCards {
    pub draft_baseline: String,
    pub best_possible: String,
    pub actual_points: String,
    pub transaction_impact: String,
    pub transaction_direction: String,
    pub lineup_efficiency: String,
    pub points_on_bench: String,
}

/// Compute the summary scalars for one team's season.
pub fn season_summary(series: &ScenarioSeries) -> Result<SeasonSummary, PipelineError> {
    let metrics = series.metrics()?;
    let transaction_impact = metrics.avg_actual_best - metrics.avg_draft;
    let lineup_efficiency = if metrics.avg_actual_best > 0.0 {
        metrics.avg_actual_lineup / metrics.avg_actual_best * 100.0
    } else {
        0.0
    };

    Ok(SeasonSummary {
        weeks: series.draft.len(),
        draft_baseline: metrics.avg_draft,
        best_possible: metrics.avg_actual_best,
        actual_points: metrics.avg_actual_lineup,
        transaction_impact,
        lineup_efficiency,
        points_on_bench: metrics.avg_actual_best - metrics.avg_actual_lineup,
    })
}

impl SeasonSummary {
    pub fn cards(&self) -> SummaryCards {
        SummaryCards {
            draft_baseline: format!("{:.1}", self.draft_baseline),
            best_possible: format!("{:.1}", self.best_possible),
            actual_points: format!("{:.1}", self.actual_points),
            transaction_impact: format!("{:+.1}", self.transaction_impact),
            transaction_direction: if self.transaction_impact > 0.0 {
                "POSITIVE".to_string()
            } else {
                "NEGATIVE".to_string()
            },
            lineup_efficiency: format!("{:.0}%", self.lineup_efficiency),
            points_on_bench: format!("{:.1}", self.points_on_bench),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::types::WeeklySeries;

    fn scenario(draft: &[f64], best: &[f64], actual: &[f64]) -> ScenarioSeries {
        let make = |points: &[f64]| WeeklySeries {
            weeks: (1..=points.len() as u32).collect(),
            points: points.to_vec(),
            hover: vec![String::new(); points.len()],
        };
        ScenarioSeries {
            draft: make(draft),
            actual_best: make(best),
            actual_lineup: make(actual),
        }
    }

    #[test]
    fn summary_decomposes_the_season() {
        let summary = season_summary(&scenario(
            &[100.0, 110.0],
            &[120.0, 110.0],
            &[100.0, 105.0],
        ))
        .unwrap();

        assert_eq!(summary.weeks, 2);
        assert_eq!(summary.draft_baseline, 105.0);
        assert_eq!(summary.best_possible, 115.0);
        assert_eq!(summary.actual_points, 102.5);
        assert_eq!(summary.transaction_impact, 10.0);
        assert_eq!(summary.points_on_bench, 12.5);
        assert!((summary.lineup_efficiency - 89.1304).abs() < 1e-3);
    }

    #[test]
    fn zero_week_season_summarizes_to_zeroes() {
        let summary = season_summary(&ScenarioSeries::default()).unwrap();
        assert_eq!(summary.weeks, 0);
        assert_eq!(summary.draft_baseline, 0.0);
        assert_eq!(summary.lineup_efficiency, 0.0);
    }

    #[test]
    fn cards_format_sign_and_percent() {
        let summary = season_summary(&scenario(&[120.0], &[100.0], &[90.0])).unwrap();
        let cards = summary.cards();
        assert_eq!(cards.transaction_impact, "-20.0");
        assert_eq!(cards.transaction_direction, "NEGATIVE");
        assert_eq!(cards.lineup_efficiency, "90%");
        assert_eq!(cards.points_on_bench, "10.0");
    }

    #[test]
    fn positive_impact_gets_plus_sign() {
        let summary = season_summary(&scenario(&[100.0], &[110.0], &[105.0])).unwrap();
        let cards = summary.cards();
        assert_eq!(cards.transaction_impact, "+10.0");
        assert_eq!(cards.transaction_direction, "POSITIVE");
    }
}
