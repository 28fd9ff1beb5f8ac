//! Season overview chart
//!
//! The main dashboard chart: two scenario lines with crossing-aware fill
//! areas between them, dashed season-average reference lines, an invisible
//! hover-proxy trace carrying per-week tooltip text, and average labels
//! spaced so they never overlap. Two toggle states: roster comparison
//! (drafted vs. actual-best) and lineup comparison (actual-best vs. the
//! lineup actually started).

use lineup_core::types::{DerivedMetrics, FillRegion, Polarity, ScenarioSeries, WeeklySeries};
use lineup_core::{place, split, PipelineError};
use tracing::warn;

use crate::spec::colors;
use crate::spec::{Annotation, Axis, ChartSpec, LineStyle, MarkerStyle, Trace, TraceKind};

/// Minimum vertical distance between average labels, in points.
const ANNOTATION_GAP: f64 = 7.0;

/// Which comparison the overview chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Drafted roster vs. actual roster, both optimally started.
    #[default]
    RosterComparison,
    /// Actual roster optimally started vs. the lineup actually started.
    LineupComparison,
}

impl ViewMode {
    /// Parse a view-mode request parameter. Unknown values yield `None`,
    /// which renders the chart without comparison-specific elements.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "roster_comparison" => Some(Self::RosterComparison),
            "lineup_comparison" => Some(Self::LineupComparison),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RosterComparison => "roster_comparison",
            Self::LineupComparison => "lineup_comparison",
        }
    }
}

/// Assemble the season overview chart for one team.
pub fn season_overview(
    series: &ScenarioSeries,
    mode: Option<ViewMode>,
) -> Result<ChartSpec, PipelineError> {
    let metrics = series.metrics()?;
    let mut chart = ChartSpec::default();

    match mode {
        Some(ViewMode::RosterComparison) => add_roster_comparison(&mut chart, series, &metrics)?,
        Some(ViewMode::LineupComparison) => add_lineup_comparison(&mut chart, series, &metrics)?,
        None => warn!("unrecognized view mode, rendering layout only"),
    }

    apply_common_layout(&mut chart, series, &metrics, mode);
    Ok(chart)
}

fn add_roster_comparison(
    chart: &mut ChartSpec,
    series: &ScenarioSeries,
    metrics: &DerivedMetrics,
) -> Result<(), PipelineError> {
    let draft = &series.draft;
    let best = &series.actual_best;

    chart.traces.push(
        scenario_line(draft, "Best possible lineup", colors::DRAFT, 2.0, 8.0)
            .with_legend_group("draft", "Drafted Team Performance"),
    );
    chart.traces.push(
        scenario_line(best, "Best possible lineup", colors::ACTUAL_BEST, 2.0, 8.0)
            .with_legend_group("actual", "Actual Team Performance"),
    );

    // Fill the band between the two lines: actual-best on top is a week the
    // roster moves paid off.
    let regions = split(&draft.weeks, &best.points, &draft.points)?;
    for region in regions {
        chart.traces.push(fill_trace(
            &region,
            match region.polarity {
                Polarity::Positive => ("Positive impact areas", colors::POSITIVE_FILL),
                Polarity::Negative => ("Negative impact areas", colors::NEGATIVE_FILL),
            },
        ));
    }

    chart.traces.push(average_line(
        draft,
        metrics.avg_draft,
        colors::DRAFT,
        "Best drafted team average: %{y:.1f} pts<extra></extra>",
        ("draft", "Drafted Team Performance"),
    ));
    chart.traces.push(average_line(
        best,
        metrics.avg_actual_best,
        colors::ACTUAL_BEST,
        "Best actual team average: %{y:.1f} pts<extra></extra>",
        ("actual", "Actual Team Performance"),
    ));

    let hover: Vec<String> = draft
        .weeks
        .iter()
        .enumerate()
        .map(|(i, week)| {
            let diff = metrics.weekly_diffs[i];
            format!(
                "<b>Week {week}</b><br>Best drafted: {:.1} pts<br>Best actual: {:.1} pts<br>Difference: {}{:.1} pts",
                draft.points[i],
                best.points[i],
                if diff > 0.0 { "+" } else { "" },
                diff,
            )
        })
        .collect();
    chart.traces.push(hover_proxy(&draft.weeks, hover));

    // No weeks means no averages worth labeling.
    if draft.is_empty() {
        return Ok(());
    }
    let label_x = draft.weeks.last().copied().unwrap_or(0) as f64 + 0.5;
    let positions = place(&[metrics.avg_draft, metrics.avg_actual_best], ANNOTATION_GAP);
    chart.annotations.push(Annotation {
        x: label_x,
        raw_value: metrics.avg_draft,
        display_position: positions[0],
        label: format!("Avg: {:.1}", metrics.avg_draft),
        color: colors::DRAFT.to_string(),
        hover_text: Some("Best draft lineup average".to_string()),
    });
    chart.annotations.push(Annotation {
        x: label_x,
        raw_value: metrics.avg_actual_best,
        display_position: positions[1],
        label: format!("Avg: {:.1}", metrics.avg_actual_best),
        color: colors::ACTUAL_BEST.to_string(),
        hover_text: Some("Best actual lineup average".to_string()),
    });
    Ok(())
}

fn add_lineup_comparison(
    chart: &mut ChartSpec,
    series: &ScenarioSeries,
    metrics: &DerivedMetrics,
) -> Result<(), PipelineError> {
    let best = &series.actual_best;
    let actual = &series.actual_lineup;

    chart.traces.push(
        scenario_line(best, "Best possible lineup", colors::ACTUAL_BEST, 2.0, 8.0)
            .with_legend_group("best", "Best Possible Team Performance"),
    );
    chart.traces.push(
        scenario_line(actual, "Actual lineup", colors::ACTUAL_LINEUP, 3.0, 10.0)
            .with_legend_group("actual", "Actual Team Performance"),
    );

    // Here a Positive region (best above actual) is bench points lost, so
    // the polarity-to-color mapping flips relative to the roster view.
    let regions = split(&best.weeks, &best.points, &actual.points)?;
    for region in regions {
        chart.traces.push(fill_trace(
            &region,
            match region.polarity {
                Polarity::Positive => ("Points left on bench", colors::NEGATIVE_FILL),
                Polarity::Negative => ("Points above optimal", colors::POSITIVE_FILL),
            },
        ));
    }

    // Points actually banked, filled down to the zero line.
    if !actual.is_empty() {
        let mut x_path: Vec<f64> = actual.weeks.iter().map(|&w| w as f64).collect();
        x_path.extend(actual.weeks.iter().rev().map(|&w| w as f64));
        let mut y_path = actual.points.clone();
        y_path.extend(std::iter::repeat(0.0).take(actual.len()));
        chart.traces.push(
            Trace::new(TraceKind::Area, "Points achieved", x_path, y_path)
                .with_fill_color(colors::ACHIEVED_FILL)
                .with_legend_group("fill_areas", "Fill areas")
                .hidden_from_legend(),
        );
    }

    chart.traces.push(average_line(
        best,
        metrics.avg_actual_best,
        colors::ACTUAL_BEST,
        "Best possible lineup average: %{y:.1f} pts<extra></extra>",
        ("best", "Best Possible Team Performance"),
    ));
    chart.traces.push(average_line(
        actual,
        metrics.avg_actual_lineup,
        colors::ACTUAL_LINEUP,
        "Actual lineup average: %{y:.1f} pts<extra></extra>",
        ("actual", "Actual Team Performance"),
    ));

    let hover: Vec<String> = actual
        .weeks
        .iter()
        .enumerate()
        .map(|(i, week)| {
            format!(
                "<b>Week {week}</b><br>Actual: {:.1} pts<br>Best possible: {:.1} pts<br>Efficiency: {:.1}%",
                actual.points[i], best.points[i], metrics.lineup_efficiency[i],
            )
        })
        .collect();
    chart.traces.push(hover_proxy(&actual.weeks, hover));

    if actual.is_empty() {
        return Ok(());
    }
    let label_x = actual.weeks.last().copied().unwrap_or(0) as f64 + 0.5;
    let positions = place(
        &[
            metrics.avg_actual_best,
            metrics.avg_actual_lineup,
            metrics.avg_efficiency,
        ],
        ANNOTATION_GAP,
    );
    chart.annotations.push(Annotation {
        x: label_x,
        raw_value: metrics.avg_actual_best,
        display_position: positions[0],
        label: format!("Avg: {:.1}", metrics.avg_actual_best),
        color: colors::ACTUAL_BEST.to_string(),
        hover_text: Some("Best possible lineup average".to_string()),
    });
    chart.annotations.push(Annotation {
        x: label_x,
        raw_value: metrics.avg_actual_lineup,
        display_position: positions[1],
        label: format!("Avg: {:.1}", metrics.avg_actual_lineup),
        color: colors::ACTUAL_LINEUP.to_string(),
        hover_text: Some("Actual lineup average".to_string()),
    });
    chart.annotations.push(Annotation {
        x: label_x,
        raw_value: metrics.avg_efficiency,
        display_position: positions[2],
        label: format!("Avg Efficiency: {:.1}%", metrics.avg_efficiency),
        color: colors::EFFICIENCY.to_string(),
        hover_text: Some("Average lineup efficiency".to_string()),
    });
    Ok(())
}

fn apply_common_layout(
    chart: &mut ChartSpec,
    series: &ScenarioSeries,
    metrics: &DerivedMetrics,
    mode: Option<ViewMode>,
) {
    let (title, subtitle) = match mode {
        Some(ViewMode::RosterComparison) => (
            "Season Performance: Drafted vs. Actual Roster Comparison",
            "Green areas show weeks with positive transaction impact, red areas show negative impact",
        ),
        Some(ViewMode::LineupComparison) => (
            "Season Performance: Lineup Decision Comparison",
            "Red areas show potential points left on the bench, green areas show points achieved",
        ),
        None => ("Season Performance", ""),
    };

    let first_week = series.draft.weeks.first().copied().unwrap_or(1) as f64;
    let last_week = series.draft.weeks.last().copied().unwrap_or(1) as f64;

    chart.layout.title = title.to_string();
    chart.layout.subtitle = (!subtitle.is_empty()).then(|| subtitle.to_string());
    chart.layout.x_axis = Axis {
        title: Some("Week".to_string()),
        // Half a week of margin on the left, room for the average labels on
        // the right.
        range: Some([first_week - 0.5, last_week + 1.5]),
        tick_interval: Some(1.0),
        tick_labels: None,
    };
    chart.layout.y_axis = Axis {
        title: Some("Points".to_string()),
        range: Some([metrics.y_min, metrics.y_max]),
        tick_interval: None,
        tick_labels: None,
    };
    chart.layout.unified_hover = true;
}

fn scenario_line(
    series: &WeeklySeries,
    name: &str,
    color: &str,
    width: f64,
    marker_size: f64,
) -> Trace {
    Trace::new(
        TraceKind::Line,
        name,
        series.weeks.iter().map(|&w| w as f64).collect(),
        series.points.clone(),
    )
    .with_line(LineStyle::solid(color, width))
    .with_marker(MarkerStyle { size: marker_size, color: None, opacity: None })
}

fn fill_trace(region: &FillRegion, (name, color): (&str, &str)) -> Trace {
    Trace::new(
        TraceKind::Area,
        name,
        region.x_path.clone(),
        region.y_path.clone(),
    )
    .with_fill_color(color)
    .with_legend_group("fill_areas", "Fill areas")
    .hidden_from_legend()
}

fn average_line(
    series: &WeeklySeries,
    average: f64,
    color: &str,
    hover_template: &str,
    (group, group_title): (&str, &str),
) -> Trace {
    let first = series.weeks.first().copied().unwrap_or(0) as f64;
    let last = series.weeks.last().copied().unwrap_or(0) as f64;
    let mut trace = Trace::new(
        TraceKind::Line,
        "Season average",
        vec![first, last],
        vec![average, average],
    )
    .with_line(LineStyle::dashed(color, 1.0))
    .with_legend_group(group, group_title);
    trace.hover_template = Some(hover_template.to_string());
    trace
}

fn hover_proxy(weeks: &[u32], hover: Vec<String>) -> Trace {
    let mut trace = Trace::new(
        TraceKind::HoverProxy,
        "hover_data",
        weeks.iter().map(|&w| w as f64).collect(),
        vec![0.0; weeks.len()],
    )
    .with_marker(MarkerStyle { size: 0.0, color: None, opacity: Some(0.0) })
    .hidden_from_legend();
    trace.hover_text = Some(hover);
    trace
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
    fn roster_view_contains_lines_fills_averages_and_proxy() {
        let series = scenario(&[100.0, 110.0], &[120.0, 115.0], &[95.0, 100.0]);
        let chart = season_overview(&series, Some(ViewMode::RosterComparison)).unwrap();

        let lines = chart.traces.iter().filter(|t| t.kind == TraceKind::Line).count();
        // Two scenario lines plus two average lines.
        assert_eq!(lines, 4);
        assert_eq!(
            chart.traces.iter().filter(|t| t.kind == TraceKind::Area).count(),
            1
        );
        assert_eq!(
            chart.traces.iter().filter(|t| t.kind == TraceKind::HoverProxy).count(),
            1
        );
        assert_eq!(chart.annotations.len(), 2);
    }

    #[test]
    fn roster_fills_are_colored_by_polarity() {
        // Crossing season: one favorable region, one unfavorable.
        let series = scenario(&[100.0, 120.0], &[120.0, 100.0], &[90.0, 90.0]);
        let chart = season_overview(&series, Some(ViewMode::RosterComparison)).unwrap();

        let fills: Vec<&Trace> =
            chart.traces.iter().filter(|t| t.kind == TraceKind::Area).collect();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].fill_color.as_deref(), Some(colors::POSITIVE_FILL));
        assert_eq!(fills[1].fill_color.as_deref(), Some(colors::NEGATIVE_FILL));
    }

    #[test]
    fn lineup_view_marks_bench_loss_red_and_adds_achieved_fill() {
        let series = scenario(&[100.0, 100.0], &[120.0, 118.0], &[100.0, 110.0]);
        let chart = season_overview(&series, Some(ViewMode::LineupComparison)).unwrap();

        let fills: Vec<&Trace> =
            chart.traces.iter().filter(|t| t.kind == TraceKind::Area).collect();
        // Bench-loss band plus the achieved-points fill to zero.
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].fill_color.as_deref(), Some(colors::NEGATIVE_FILL));
        assert_eq!(fills[1].name, "Points achieved");
        assert_eq!(chart.annotations.len(), 3);
    }

    #[test]
    fn annotations_are_spaced_and_order_preserving() {
        // Averages 1 point apart would overlap without placement.
        let series = scenario(&[100.0, 100.0], &[101.0, 101.0], &[99.0, 99.0]);
        let chart = season_overview(&series, Some(ViewMode::RosterComparison)).unwrap();

        let draft = &chart.annotations[0];
        let best = &chart.annotations[1];
        assert_eq!(draft.display_position, 100.0);
        assert_eq!(best.display_position, 107.0);
        assert!(draft.raw_value < best.raw_value);
    }

    #[test]
    fn unknown_mode_renders_layout_only() {
        let series = scenario(&[100.0], &[110.0], &[105.0]);
        assert_eq!(ViewMode::parse("everything"), None);
        let chart = season_overview(&series, None).unwrap();
        assert!(chart.traces.is_empty());
        assert!(chart.annotations.is_empty());
        assert_eq!(chart.layout.title, "Season Performance");
    }

    #[test]
    fn view_mode_parsing_round_trips() {
        assert_eq!(ViewMode::parse("roster_comparison"), Some(ViewMode::RosterComparison));
        assert_eq!(ViewMode::parse("lineup_comparison"), Some(ViewMode::LineupComparison));
        assert_eq!(ViewMode::default(), ViewMode::RosterComparison);
        assert_eq!(ViewMode::RosterComparison.as_str(), "roster_comparison");
    }

    #[test]
    fn empty_season_builds_without_fault() {
        let chart = season_overview(&ScenarioSeries::default(), Some(ViewMode::RosterComparison))
            .unwrap();
        assert_eq!(chart.layout.y_axis.range, Some([0.0, 0.0]));
        assert!(chart.traces.iter().all(|t| t.kind != TraceKind::Area));
        assert!(chart.annotations.is_empty());
    }

    #[test]
    fn empty_season_carries_no_average_labels_in_either_view() {
        for mode in [ViewMode::RosterComparison, ViewMode::LineupComparison] {
            let chart = season_overview(&ScenarioSeries::default(), Some(mode)).unwrap();
            assert!(chart.annotations.is_empty());
        }
    }

    #[test]
    fn identical_inputs_serialize_identically() {
        let series = scenario(&[100.0, 105.0], &[110.0, 102.0], &[95.0, 101.0]);
        let a = season_overview(&series, Some(ViewMode::LineupComparison)).unwrap();
        let b = season_overview(&series, Some(ViewMode::LineupComparison)).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
