//! Season breakdown waterfall
//!
//! Decomposes the season into three steps: the draft baseline, the signed
//! impact of roster transactions, and the points actually banked with the
//! unrealized remainder stacked on top. All bars are weekly averages.

use lineup_core::types::ScenarioSeries;
use lineup_core::PipelineError;

use crate::spec::colors;
use crate::spec::{Annotation, Axis, ChartSpec, LineStyle, Shape, Trace, TraceKind};

/// Assemble the season breakdown chart for one team.
pub fn season_breakdown(series: &ScenarioSeries) -> Result<ChartSpec, PipelineError> {
    let metrics = series.metrics()?;
    let transaction_impact = metrics.avg_actual_best - metrics.avg_draft;
    let unrealized = metrics.avg_actual_best - metrics.avg_actual_lineup;
    let efficiency = if metrics.avg_actual_best > 0.0 {
        metrics.avg_actual_lineup / metrics.avg_actual_best * 100.0
    } else {
        0.0
    };

    let mut chart = ChartSpec::default();

    let mut draft_bar = Trace::new(TraceKind::Bar, "Draft Baseline", vec![0.0], vec![metrics.avg_draft])
        .with_fill_color(colors::BAR_DRAFT);
    draft_bar.text = Some(format!("{:.1}", metrics.avg_draft));
    draft_bar.hover_template = Some(
        "Draft Value: %{y:.1f} pts<br>Baseline weekly points if you never changed your roster<extra></extra>"
            .to_string(),
    );
    chart.traces.push(draft_bar);

    // Signed delta based at the draft average; the renderer draws negative
    // impacts downward from the baseline.
    let mut impact_bar = Trace::new(TraceKind::Bar, "Transaction Impact", vec![1.0], vec![transaction_impact])
        .with_fill_color(if transaction_impact > 0.0 {
            colors::BAR_POSITIVE
        } else {
            colors::BAR_NEGATIVE
        });
    impact_bar.base = Some(metrics.avg_draft);
    impact_bar.text = Some(format!("{transaction_impact:+.1}"));
    impact_bar.hover_template = Some(
        "Transaction Impact: %{text} pts<br>Effect of all your add/drops and trades<extra></extra>"
            .to_string(),
    );
    chart.traces.push(impact_bar);

    let mut actual_bar = Trace::new(TraceKind::Bar, "Actual Points", vec![2.0], vec![metrics.avg_actual_lineup])
        .with_fill_color(colors::BAR_ACTUAL);
    actual_bar.text = Some(format!("{:.1}", metrics.avg_actual_lineup));
    actual_bar.hover_template =
        Some("Actual Points: %{y:.1f} pts<br>Points actually scored<extra></extra>".to_string());
    chart.traces.push(actual_bar);

    // Transparent extension from the actual total up to the best possible.
    let mut unrealized_bar =
        Trace::new(TraceKind::Bar, "Unrealized Potential", vec![2.0], vec![unrealized])
            .with_fill_color(colors::BAR_UNREALIZED)
            .hidden_from_legend();
    unrealized_bar.base = Some(metrics.avg_actual_lineup);
    unrealized_bar.text = Some(format!("{:.1}", metrics.avg_actual_best));
    unrealized_bar.hover_template = Some(
        "Unrealized Potential: %{y:.1f} pts<br>Points left on the table due to lineup decisions<extra></extra>"
            .to_string(),
    );
    chart.traces.push(unrealized_bar);

    // Dotted references: draft baseline across the full width, best-possible
    // over the final column.
    chart.shapes.push(Shape {
        x0: -0.5,
        y0: metrics.avg_draft,
        x1: 2.5,
        y1: metrics.avg_draft,
        line: LineStyle::dotted(colors::REFERENCE, 1.0),
    });
    chart.shapes.push(Shape {
        x0: 1.5,
        y0: metrics.avg_actual_best,
        x1: 2.5,
        y1: metrics.avg_actual_best,
        line: LineStyle::dotted(colors::REFERENCE, 1.0),
    });

    chart.annotations.push(Annotation {
        x: 2.0,
        raw_value: efficiency,
        display_position: metrics.avg_actual_best,
        label: format!("{efficiency:.0}% Efficient"),
        color: colors::EFFICIENCY.to_string(),
        hover_text: Some("Share of the best possible points your lineups captured".to_string()),
    });

    chart.layout.title = "Season Performance Breakdown".to_string();
    chart.layout.bar_mode = Some("overlay".to_string());
    chart.layout.x_axis = Axis {
        title: None,
        range: None,
        tick_interval: None,
        tick_labels: Some(vec![
            "Draft Baseline".to_string(),
            "Transactions".to_string(),
            "Actual".to_string(),
        ]),
    };
    chart.layout.y_axis = Axis {
        title: Some("Weekly Points Average".to_string()),
        range: None,
        tick_interval: None,
        tick_labels: None,
    };
    Ok(chart)
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
    fn bars_carry_the_decomposed_averages() {
        let series = scenario(&[100.0, 110.0], &[120.0, 110.0], &[100.0, 105.0]);
        let chart = season_breakdown(&series).unwrap();

        assert_eq!(chart.traces.len(), 4);
        assert_eq!(chart.traces[0].y, vec![105.0]);
        // +10 transaction impact, based at the draft average.
        assert_eq!(chart.traces[1].y, vec![10.0]);
        assert_eq!(chart.traces[1].base, Some(105.0));
        assert_eq!(chart.traces[1].fill_color.as_deref(), Some(colors::BAR_POSITIVE));
        assert_eq!(chart.traces[2].y, vec![102.5]);
        // Unrealized: 115 best - 102.5 actual.
        assert_eq!(chart.traces[3].y, vec![12.5]);
        assert_eq!(chart.traces[3].base, Some(102.5));
    }

    #[test]
    fn negative_transaction_impact_is_signed_and_red() {
        let series = scenario(&[120.0], &[100.0], &[90.0]);
        let chart = season_breakdown(&series).unwrap();

        assert_eq!(chart.traces[1].y, vec![-20.0]);
        assert_eq!(chart.traces[1].fill_color.as_deref(), Some(colors::BAR_NEGATIVE));
        assert_eq!(chart.traces[1].text.as_deref(), Some("-20.0"));
    }

    #[test]
    fn reference_lines_sit_at_draft_and_best_averages() {
        let series = scenario(&[100.0], &[110.0], &[105.0]);
        let chart = season_breakdown(&series).unwrap();

        assert_eq!(chart.shapes.len(), 2);
        assert_eq!(chart.shapes[0].y0, 100.0);
        assert_eq!((chart.shapes[1].x0, chart.shapes[1].y0), (1.5, 110.0));
    }

    #[test]
    fn efficiency_readout_guards_zero_best() {
        let series = scenario(&[0.0], &[0.0], &[0.0]);
        let chart = season_breakdown(&series).unwrap();
        assert_eq!(chart.annotations[0].label, "0% Efficient");
    }

    #[test]
    fn efficiency_readout_rounds_to_whole_percent() {
        let series = scenario(&[100.0], &[120.0], &[90.0]);
        let chart = season_breakdown(&series).unwrap();
        assert_eq!(chart.annotations[0].label, "75% Efficient");
    }
}
