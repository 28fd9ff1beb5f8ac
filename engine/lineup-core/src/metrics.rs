//! Derived season metrics
//!
//! Given the three week-aligned scenario series, computes averages, per-week
//! transaction diffs, lineup efficiency ratios, and the chart y-axis bounds.
//! All arithmetic is f64; rounding happens only at presentation time.

use crate::error::PipelineError;
use crate::types::{DerivedMetrics, WeeklySeries};

/// Arithmetic mean, defined as 0 for empty input so zero-week seasons never
/// divide by zero.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Compute derived metrics from the three scenario series.
///
/// The series must be week-aligned; a length mismatch or a differing week
/// set is reported rather than silently diffed index-by-index.
pub fn compute(
    draft: &WeeklySeries,
    actual_best: &WeeklySeries,
    actual_lineup: &WeeklySeries,
) -> Result<DerivedMetrics, PipelineError> {
    if draft.len() != actual_best.len() || draft.len() != actual_lineup.len() {
        return Err(PipelineError::SeriesLengthMismatch {
            draft: draft.len(),
            actual_best: actual_best.len(),
            actual_lineup: actual_lineup.len(),
        });
    }
    for (index, ((&d, &b), &l)) in draft
        .weeks
        .iter()
        .zip(actual_best.weeks.iter())
        .zip(actual_lineup.weeks.iter())
        .enumerate()
    {
        if d != b || d != l {
            return Err(PipelineError::WeekMisalignment {
                index,
                draft: d,
                actual_best: b,
                actual_lineup: l,
            });
        }
    }

    let weekly_diffs: Vec<f64> = actual_best
        .points
        .iter()
        .zip(draft.points.iter())
        .map(|(best, draft)| best - draft)
        .collect();

    let lineup_efficiency: Vec<f64> = actual_lineup
        .points
        .iter()
        .zip(actual_best.points.iter())
        .map(|(&actual, &best)| if best > 0.0 { actual / best * 100.0 } else { 0.0 })
        .collect();

    let all_points = draft
        .points
        .iter()
        .chain(actual_best.points.iter())
        .chain(actual_lineup.points.iter());
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;
    for &p in all_points {
        global_min = global_min.min(p);
        global_max = global_max.max(p);
    }

    // Keeps the axis stable near typical scoring ranges while always
    // including the full data range with 10% headroom.
    let (y_min, y_max) = if draft.is_empty() {
        (0.0, 0.0)
    } else {
        (80.0_f64.min(global_min * 0.8), global_max * 1.1)
    };

    Ok(DerivedMetrics {
        avg_draft: mean(&draft.points),
        avg_actual_best: mean(&actual_best.points),
        avg_actual_lineup: mean(&actual_lineup.points),
        avg_efficiency: mean(&lineup_efficiency),
        weekly_diffs,
        lineup_efficiency,
        y_min,
        y_max,
    })
}
