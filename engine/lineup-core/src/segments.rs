//! Crossing-aware fill-region computation
//!
//! Partitions the area between two piecewise-linear series into contiguous
//! same-polarity polygons. Where the series swap order between two sampled
//! weeks, the exact linear-interpolation crossing point is inserted and
//! shared by both adjacent regions, so the rendered fill areas meet without
//! gaps or overlaps.

use crate::error::PipelineError;
use crate::types::{FillRegion, Polarity};

/// A contiguous same-polarity run of (x, upper, lower) points, flushed into
/// one closed polygon when the polarity changes or the input ends.
struct RunBuffer {
    polarity: Polarity,
    xs: Vec<f64>,
    upper: Vec<f64>,
    lower: Vec<f64>,
}

impl RunBuffer {
    fn new(polarity: Polarity) -> Self {
        Self { polarity, xs: Vec::new(), upper: Vec::new(), lower: Vec::new() }
    }

    fn push(&mut self, x: f64, upper: f64, lower: f64) {
        // Adjacent segments share their boundary week; keep it once.
        if self.xs.last() == Some(&x) {
            return;
        }
        self.xs.push(x);
        self.upper.push(upper);
        self.lower.push(lower);
    }

    /// Close the polygon: upper polyline forward, lower polyline reversed.
    fn into_region(self) -> FillRegion {
        let mut x_path = self.xs.clone();
        x_path.extend(self.xs.iter().rev());
        let mut y_path = self.upper;
        y_path.extend(self.lower.into_iter().rev());
        FillRegion { x_path, y_path, polarity: self.polarity }
    }
}

/// Split the band between two series into polarity-tagged fill regions.
///
/// `upper` is the series that is on top when a region is `Positive`. Output
/// geometry only; color and legend assignment belong to the chart builders.
pub fn split(
    weeks: &[u32],
    upper: &[f64],
    lower: &[f64],
) -> Result<Vec<FillRegion>, PipelineError> {
    if weeks.len() != upper.len() || weeks.len() != lower.len() {
        return Err(PipelineError::SegmentInputMismatch {
            weeks: weeks.len(),
            upper: upper.len(),
            lower: lower.len(),
        });
    }

    let mut regions = Vec::new();
    let mut run: Option<RunBuffer> = None;

    for i in 0..weeks.len().saturating_sub(1) {
        let (x1, x2) = (weeks[i] as f64, weeks[i + 1] as f64);
        let (a1, a2) = (upper[i], upper[i + 1]);
        let (b1, b2) = (lower[i], lower[i + 1]);

        let crosses = (a1 > b1 && a2 < b2) || (a1 < b1 && a2 > b2);

        if !crosses {
            let polarity = if a1 >= b1 && a2 >= b2 {
                Polarity::Positive
            } else if b1 >= a1 && b2 >= a2 {
                Polarity::Negative
            } else {
                // Unreachable given the crossing test; reported rather than
                // dropped so a rendered chart never silently loses a band.
                return Err(PipelineError::InconsistentSegment { week: x1 });
            };
            append_segment(&mut regions, &mut run, polarity, (x1, a1, b1), (x2, a2, b2));
            continue;
        }

        // Both series as lines y = m*x + c over [x1, x2].
        let m1 = (a2 - a1) / (x2 - x1);
        let c1 = a1 - m1 * x1;
        let m2 = (b2 - b1) / (x2 - x1);
        let c2 = b1 - m2 * x1;
        if m1 == m2 {
            // Parallel lines cannot cross; co-occurring with a detected
            // crossing means the inputs are not finite numbers.
            return Err(PipelineError::InconsistentSegment { week: x1 });
        }
        let x_cross = (c2 - c1) / (m1 - m2);
        let y_cross = m1 * x_cross + c1;

        let (first, second) = if a1 > b1 {
            (Polarity::Positive, Polarity::Negative)
        } else {
            (Polarity::Negative, Polarity::Positive)
        };
        append_segment(
            &mut regions,
            &mut run,
            first,
            (x1, a1, b1),
            (x_cross, y_cross, y_cross),
        );
        append_segment(
            &mut regions,
            &mut run,
            second,
            (x_cross, y_cross, y_cross),
            (x2, a2, b2),
        );
    }

    if let Some(last) = run.take() {
        regions.push(last.into_region());
    }
    Ok(regions)
}

/// Append one segment, flushing the running region first if its polarity
/// differs. Points are (x, upper_y, lower_y); for `Negative` segments the
/// geometric upper is the conventional lower series.
fn append_segment(
    regions: &mut Vec<FillRegion>,
    run: &mut Option<RunBuffer>,
    polarity: Polarity,
    start: (f64, f64, f64),
    end: (f64, f64, f64),
) {
    if let Some(current) = run.take() {
        if current.polarity == polarity {
            *run = Some(current);
        } else {
            regions.push(current.into_region());
        }
    }
    let buffer = run.get_or_insert_with(|| RunBuffer::new(polarity));

    let ((x1, a1, b1), (x2, a2, b2)) = (start, end);
    match polarity {
        Polarity::Positive => {
            buffer.push(x1, a1, b1);
            buffer.push(x2, a2, b2);
        }
        Polarity::Negative => {
            buffer.push(x1, b1, a1);
            buffer.push(x2, b2, a2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positive_region_when_no_crossing() {
        // Upper series above at both weeks: one positive polygon, no injected
        // crossing point.
        let regions = split(&[1, 2], &[15.0, 18.0], &[10.0, 12.0]).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].polarity, Polarity::Positive);
        assert_eq!(regions[0].x_path, vec![1.0, 2.0, 2.0, 1.0]);
        assert_eq!(regions[0].y_path, vec![15.0, 18.0, 12.0, 10.0]);
    }

    #[test]
    fn crossing_splits_at_interpolated_point() {
        // Lines swap order between the two weeks; they meet at (1.5, 15).
        let regions = split(&[1, 2], &[20.0, 10.0], &[10.0, 20.0]).unwrap();
        assert_eq!(regions.len(), 2);

        assert_eq!(regions[0].polarity, Polarity::Positive);
        assert_eq!(regions[0].x_path, vec![1.0, 1.5, 1.5, 1.0]);
        assert_eq!(regions[0].y_path, vec![20.0, 15.0, 15.0, 10.0]);

        assert_eq!(regions[1].polarity, Polarity::Negative);
        assert_eq!(regions[1].x_path, vec![1.5, 2.0, 2.0, 1.5]);
        assert_eq!(regions[1].y_path, vec![15.0, 20.0, 10.0, 15.0]);
    }

    #[test]
    fn contiguous_same_polarity_segments_merge_into_one_region() {
        let regions = split(&[1, 2, 3], &[15.0, 18.0, 16.0], &[10.0, 12.0, 11.0]).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].x_path, vec![1.0, 2.0, 3.0, 3.0, 2.0, 1.0]);
        assert_eq!(regions[0].y_path, vec![15.0, 18.0, 16.0, 11.0, 12.0, 10.0]);
    }

    #[test]
    fn polarity_flip_without_strict_crossing_starts_a_new_region() {
        // Series touch exactly at week 2; no interior crossing, but the band
        // changes sides.
        let regions = split(&[1, 2, 3], &[15.0, 12.0, 10.0], &[10.0, 12.0, 14.0]).unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].polarity, Polarity::Positive);
        assert_eq!(regions[1].polarity, Polarity::Negative);
        assert_eq!(regions[1].x_path, vec![2.0, 3.0, 3.0, 2.0]);
        assert_eq!(regions[1].y_path, vec![12.0, 14.0, 10.0, 12.0]);
    }

    #[test]
    fn equal_series_count_as_positive() {
        let regions = split(&[1, 2], &[10.0, 10.0], &[10.0, 10.0]).unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].polarity, Polarity::Positive);
    }

    #[test]
    fn multiple_crossings_alternate_polarity() {
        let regions = split(
            &[1, 2, 3],
            &[20.0, 10.0, 20.0],
            &[10.0, 20.0, 10.0],
        )
        .unwrap();
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].polarity, Polarity::Positive);
        assert_eq!(regions[1].polarity, Polarity::Negative);
        assert_eq!(regions[2].polarity, Polarity::Positive);
        // The middle region spans crossing to crossing.
        assert_eq!(regions[1].x_path, vec![1.5, 2.0, 2.5, 2.5, 2.0, 1.5]);
    }

    #[test]
    fn fewer_than_two_weeks_produce_no_regions() {
        assert!(split(&[], &[], &[]).unwrap().is_empty());
        assert!(split(&[1], &[10.0], &[12.0]).unwrap().is_empty());
    }

    #[test]
    fn misaligned_input_is_rejected() {
        let err = split(&[1, 2], &[10.0], &[10.0, 11.0]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::SegmentInputMismatch { weeks: 2, upper: 1, lower: 2 }
        );
    }

    #[test]
    fn nan_input_is_reported_as_inconsistent() {
        let err = split(&[1, 2], &[f64::NAN, 10.0], &[5.0, 20.0]).unwrap_err();
        assert_eq!(err, PipelineError::InconsistentSegment { week: 1.0 });
    }
}
