//! Single-week analysis
//!
//! For one selected week, compares the lineup actually started against the
//! optimal lineup position by position, decomposes the week's total into
//! draft value, transaction impact, and lineup-decision impact, and lists
//! every starter slot with its actual and optimal occupant. Weeks absent
//! from any scenario yield `None` so the caller can render a
//! data-unavailable state instead of a partial chart.

use lineup_core::extract::{find_week, week_total};
use lineup_core::types::{PositionMap, RawLineupRecord};
use lineup_core::DataError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::spec::colors;
use crate::spec::{Axis, ChartSpec, Trace, TraceKind};

/// Per-position color palette shared with the frontend.
const POSITION_COLORS: &[(&str, &str)] = &[
    ("QB", "#E41A1C"),
    ("RB", "#377EB8"),
    ("WR", "#4DAF4A"),
    ("TE", "#984EA3"),
    ("FLEX", "#FF7F00"),
    ("D/ST", "#FFFF33"),
    ("K", "#A65628"),
];

const FALLBACK_COLOR: &str = "#999999";
const OPTIMAL_COLOR: &str = "rgba(160, 160, 160, 0.6)";

/// One week's comparison package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDetail {
    pub week: u32,
    pub draft_total: f64,
    pub best_total: f64,
    pub actual_total: f64,
    pub chart: ChartSpec,
    /// Draft value / transactions / lineup decisions / actual total steps.
    pub breakdown: ChartSpec,
    /// One row per starter slot, actual vs. optimal occupant.
    pub starters: Vec<StarterComparison>,
}

/// One starter slot compared between the started and the optimal lineup.
///
/// Slots are matched by position and index; a position with more slots on
/// one side than the other pads the short side with an empty name and zero
/// points. `diff` is optimal minus actual, so a negative value marks points
/// lost to the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarterComparison {
    pub slot: String,
    pub actual_name: String,
    pub actual_points: f64,
    pub optimal_name: String,
    pub optimal_points: f64,
    pub diff: f64,
}

fn position_color(position: &str) -> &'static str {
    POSITION_COLORS
        .iter()
        .find(|(name, _)| *name == position)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Build the slot-by-slot starter table from the two starter maps.
fn starter_comparisons(actual: &PositionMap, best: &PositionMap) -> Vec<StarterComparison> {
    let positions: BTreeSet<&str> = actual
        .keys()
        .chain(best.keys())
        .map(String::as_str)
        .collect();

    let mut rows = Vec::new();
    for position in positions {
        let actual_players = actual.get(position).map(Vec::as_slice).unwrap_or(&[]);
        let best_players = best.get(position).map(Vec::as_slice).unwrap_or(&[]);
        let slots = actual_players.len().max(best_players.len());

        for i in 0..slots {
            let slot = if slots > 1 {
                format!("{position}-{}", i + 1)
            } else {
                position.to_string()
            };
            let (actual_name, actual_points) = actual_players
                .get(i)
                .map(|p| (p.name.clone(), p.points.unwrap_or_default()))
                .unwrap_or_default();
            let (optimal_name, optimal_points) = best_players
                .get(i)
                .map(|p| (p.name.clone(), p.points.unwrap_or_default()))
                .unwrap_or_default();
            rows.push(StarterComparison {
                slot,
                actual_name,
                actual_points,
                optimal_name,
                optimal_points,
                diff: optimal_points - actual_points,
            });
        }
    }
    rows
}

/// Decompose one week's total the same way the season chart decomposes
/// averages: draft value, then the signed transaction and lineup-decision
/// steps, then the banked total.
fn week_breakdown(week: u32, draft_total: f64, best_total: f64, actual_total: f64) -> ChartSpec {
    let transaction_impact = best_total - draft_total;
    let decision_impact = actual_total - best_total;
    let signed_color = |value: f64| {
        if value > 0.0 {
            colors::BAR_POSITIVE
        } else {
            colors::BAR_NEGATIVE
        }
    };

    let mut chart = ChartSpec::default();

    let mut draft_bar = Trace::new(TraceKind::Bar, "Draft Value", vec![0.0], vec![draft_total])
        .with_fill_color(colors::BAR_DRAFT);
    draft_bar.text = Some(format!("{draft_total:.1}"));
    chart.traces.push(draft_bar);

    let mut transaction_bar =
        Trace::new(TraceKind::Bar, "Transactions", vec![1.0], vec![transaction_impact])
            .with_fill_color(signed_color(transaction_impact));
    transaction_bar.base = Some(draft_total);
    transaction_bar.text = Some(format!("{transaction_impact:+.1}"));
    chart.traces.push(transaction_bar);

    let mut decision_bar =
        Trace::new(TraceKind::Bar, "Lineup Decisions", vec![2.0], vec![decision_impact])
            .with_fill_color(signed_color(decision_impact));
    decision_bar.base = Some(best_total);
    decision_bar.text = Some(format!("{decision_impact:+.1}"));
    chart.traces.push(decision_bar);

    let mut actual_bar =
        Trace::new(TraceKind::Bar, "Actual Points", vec![3.0], vec![actual_total])
            .with_fill_color(colors::BAR_ACTUAL);
    actual_bar.text = Some(format!("{actual_total:.1}"));
    chart.traces.push(actual_bar);

    chart.layout.title = format!("Week {week}: Performance Components");
    chart.layout.bar_mode = Some("overlay".to_string());
    chart.layout.x_axis = Axis {
        title: None,
        range: None,
        tick_interval: None,
        tick_labels: Some(vec![
            "Draft Value".to_string(),
            "Transactions".to_string(),
            "Lineup Decisions".to_string(),
            "Actual Points".to_string(),
        ]),
    };
    chart.layout.y_axis = Axis {
        title: Some("Points".to_string()),
        range: None,
        tick_interval: None,
        tick_labels: None,
    };
    chart
}

fn points_by_position(starters: &PositionMap) -> Vec<(String, f64)> {
    starters
        .iter()
        .map(|(position, players)| {
            let total = players.iter().filter_map(|p| p.points).sum();
            (position.clone(), total)
        })
        .collect()
}

/// Build the week-detail comparison, or `None` when the week is missing from
/// any of the three scenarios.
pub fn week_detail(
    draft: &RawLineupRecord,
    actual_best: &RawLineupRecord,
    actual_lineup: &RawLineupRecord,
    week: u32,
) -> Result<Option<WeekDetail>, DataError> {
    let (Some(draft_entry), Some(best_entry), Some(actual_entry)) = (
        find_week(draft, week),
        find_week(actual_best, week),
        find_week(actual_lineup, week),
    ) else {
        return Ok(None);
    };

    let draft_total = week_total(week, draft_entry)?;
    let best_total = week_total(week, best_entry)?;
    let actual_total = week_total(week, actual_entry)?;

    let best_starters = best_entry
        .starters
        .as_ref()
        .ok_or(DataError::MissingStarters { week })?;
    let actual_starters = actual_entry
        .starters
        .as_ref()
        .ok_or(DataError::MissingStarters { week })?;

    let best_by_position = points_by_position(best_starters);
    let actual_by_position = points_by_position(actual_starters);

    let positions: BTreeSet<&str> = best_by_position
        .iter()
        .chain(actual_by_position.iter())
        .map(|(position, _)| position.as_str())
        .collect();

    let lookup = |table: &[(String, f64)], position: &str| -> f64 {
        table
            .iter()
            .find(|(name, _)| name == position)
            .map(|(_, points)| *points)
            .unwrap_or(0.0)
    };

    let xs: Vec<f64> = (0..positions.len()).map(|i| i as f64).collect();
    let mut actual_trace = Trace::new(
        TraceKind::Bar,
        "Actual lineup",
        xs.clone(),
        positions
            .iter()
            .map(|p| lookup(&actual_by_position, p))
            .collect(),
    );
    actual_trace.hover_text = Some(
        positions
            .iter()
            .map(|p| format!("{p}: {:.1} pts started", lookup(&actual_by_position, p)))
            .collect(),
    );
    // Per-position accents come from the fixed palette; the renderer applies
    // the first color as the trace tint.
    actual_trace.fill_color = positions
        .first()
        .map(|p| position_color(p).to_string());

    let mut optimal_trace = Trace::new(
        TraceKind::Bar,
        "Optimal lineup",
        xs,
        positions
            .iter()
            .map(|p| lookup(&best_by_position, p))
            .collect(),
    )
    .with_fill_color(OPTIMAL_COLOR);
    optimal_trace.hover_text = Some(
        positions
            .iter()
            .map(|p| format!("{p}: {:.1} pts optimal", lookup(&best_by_position, p)))
            .collect(),
    );

    let mut chart = ChartSpec::default();
    chart.traces.push(actual_trace);
    chart.traces.push(optimal_trace);
    chart.layout.title = format!("Week {week}: Actual vs. Optimal Lineup");
    chart.layout.bar_mode = Some("group".to_string());
    chart.layout.x_axis = Axis {
        title: Some("Position".to_string()),
        range: None,
        tick_interval: None,
        tick_labels: Some(positions.iter().map(|p| p.to_string()).collect()),
    };
    chart.layout.y_axis = Axis {
        title: Some("Points".to_string()),
        range: None,
        tick_interval: None,
        tick_labels: None,
    };

    Ok(Some(WeekDetail {
        week,
        draft_total,
        best_total,
        actual_total,
        chart,
        breakdown: week_breakdown(week, draft_total, best_total, actual_total),
        starters: starter_comparisons(actual_starters, best_starters),
    }))
}
