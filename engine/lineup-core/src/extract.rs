//! Weekly series extraction
//!
//! Turns a raw per-week lineup record (week key -> starters by position ->
//! player points) into an ordered-by-week sequence of total points with
//! per-week hover text. Week keys arrive as text and are coerced to integers
//! before sorting, so callers always see strictly ascending weeks.

use crate::error::DataError;
use crate::types::{RawLineupRecord, WeekEntry, WeeklySeries};

/// Extract an ordered weekly series from a raw lineup record.
///
/// Malformed entries (non-numeric week key, missing `starters`, a starter
/// without a `points` value) are reported as `DataError` with the offending
/// week named, never silently zeroed.
pub fn extract(record: &RawLineupRecord) -> Result<WeeklySeries, DataError> {
    let mut keyed: Vec<(u32, &WeekEntry)> = Vec::with_capacity(record.len());
    for (key, entry) in record {
        let week = key
            .trim()
            .parse::<u32>()
            .map_err(|_| DataError::BadWeekKey { key: key.clone() })?;
        keyed.push((week, entry));
    }
    keyed.sort_by_key(|(week, _)| *week);

    // "3" and "03" would both coerce to 3; two entries for one week means
    // the backend handed us something we cannot order.
    for pair in keyed.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(DataError::DuplicateWeek { week: pair[0].0 });
        }
    }

    let mut series = WeeklySeries::default();
    for (week, entry) in keyed {
        let (total, hover) = week_summary(week, entry)?;
        series.weeks.push(week);
        series.points.push(total);
        series.hover.push(hover);
    }
    Ok(series)
}

/// Total points for one week entry, validating every starter on the way.
pub fn week_total(week: u32, entry: &WeekEntry) -> Result<f64, DataError> {
    week_summary(week, entry).map(|(total, _)| total)
}

fn week_summary(week: u32, entry: &WeekEntry) -> Result<(f64, String), DataError> {
    let starters = entry
        .starters
        .as_ref()
        .ok_or(DataError::MissingStarters { week })?;

    let mut total = 0.0;
    let mut lines = Vec::new();
    for (position, players) in starters {
        for player in players {
            let points = player.points.ok_or_else(|| DataError::MissingPoints {
                week,
                position: position.clone(),
                name: player.name.clone(),
            })?;
            total += points;
            lines.push(format!("{position}: {} ({points} pts)", player.name));
        }
    }
    Ok((total, lines.join("<br>")))
}

/// Look up one week in a raw record, tolerating numeric-string key variants.
pub fn find_week(record: &RawLineupRecord, week: u32) -> Option<&WeekEntry> {
    record
        .iter()
        .find(|(key, _)| key.trim().parse::<u32>() == Ok(week))
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlayerScore, PositionMap};

    fn player(name: &str, points: f64) -> PlayerScore {
        PlayerScore { name: name.to_string(), points: Some(points) }
    }

    fn week_entry(players: &[(&str, &str, f64)]) -> WeekEntry {
        let mut starters = PositionMap::new();
        for (position, name, points) in players {
            starters
                .entry(position.to_string())
                .or_default()
                .push(player(name, *points));
        }
        WeekEntry { starters: Some(starters), bench: None }
    }

    #[test]
    fn weeks_sorted_regardless_of_key_order() {
        let mut record = RawLineupRecord::new();
        record.insert("3".to_string(), week_entry(&[("QB", "A", 10.0)]));
        record.insert("1".to_string(), week_entry(&[("QB", "B", 11.0)]));
        record.insert("2".to_string(), week_entry(&[("QB", "C", 12.0)]));

        let series = extract(&record).unwrap();
        assert_eq!(series.weeks, vec![1, 2, 3]);
        assert_eq!(series.points, vec![11.0, 12.0, 10.0]);
    }

    #[test]
    fn sums_points_across_positions() {
        let mut record = RawLineupRecord::new();
        record.insert(
            "1".to_string(),
            week_entry(&[("QB", "A", 20.0), ("RB", "B", 10.0), ("RB", "C", 8.0)]),
        );

        let series = extract(&record).unwrap();
        assert_eq!(series.points, vec![38.0]);
    }

    #[test]
    fn hover_lists_starters_in_position_order() {
        let mut record = RawLineupRecord::new();
        record.insert(
            "1".to_string(),
            week_entry(&[("RB", "Back", 10.0), ("QB", "Quarter", 20.0)]),
        );

        let series = extract(&record).unwrap();
        assert_eq!(series.hover[0], "QB: Quarter (20 pts)<br>RB: Back (10 pts)");
    }

    #[test]
    fn empty_record_extracts_to_empty_series() {
        let series = extract(&RawLineupRecord::new()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn non_numeric_week_key_is_reported() {
        let mut record = RawLineupRecord::new();
        record.insert("playoffs".to_string(), week_entry(&[("QB", "A", 1.0)]));

        let err = extract(&record).unwrap_err();
        assert_eq!(err, DataError::BadWeekKey { key: "playoffs".to_string() });
    }

    #[test]
    fn duplicate_week_after_coercion_is_reported() {
        let mut record = RawLineupRecord::new();
        record.insert("2".to_string(), week_entry(&[("QB", "A", 1.0)]));
        record.insert("02".to_string(), week_entry(&[("QB", "B", 2.0)]));

        let err = extract(&record).unwrap_err();
        assert_eq!(err, DataError::DuplicateWeek { week: 2 });
    }

    #[test]
    fn missing_starters_is_reported_with_week() {
        let mut record = RawLineupRecord::new();
        record.insert("4".to_string(), WeekEntry::default());

        let err = extract(&record).unwrap_err();
        assert_eq!(err, DataError::MissingStarters { week: 4 });
    }

    #[test]
    fn missing_points_names_week_and_player() {
        let mut starters = PositionMap::new();
        starters.insert(
            "QB".to_string(),
            vec![PlayerScore { name: "NoScore".to_string(), points: None }],
        );
        let mut record = RawLineupRecord::new();
        record.insert("7".to_string(), WeekEntry { starters: Some(starters), bench: None });

        let err = extract(&record).unwrap_err();
        assert_eq!(
            err,
            DataError::MissingPoints {
                week: 7,
                position: "QB".to_string(),
                name: "NoScore".to_string(),
            }
        );
    }

    #[test]
    fn find_week_matches_padded_keys() {
        let mut record = RawLineupRecord::new();
        record.insert("05".to_string(), week_entry(&[("QB", "A", 9.0)]));

        assert!(find_week(&record, 5).is_some());
        assert!(find_week(&record, 6).is_none());
    }
}
