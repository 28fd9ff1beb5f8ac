//! Error types for the lineup pipeline

use thiserror::Error;

/// Errors raised while validating raw lineup data at the ingestion boundary.
///
/// The backend's wire format is loosely shaped, so every field the pipeline
/// depends on is checked here and reported with the offending week named,
/// instead of letting a missing field surface as a fault deep in a chart
/// builder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("week key '{key}' is not a number")]
    BadWeekKey { key: String },

    #[error("week {week} appears more than once in the lineup record")]
    DuplicateWeek { week: u32 },

    #[error("week {week} is missing its starters map")]
    MissingStarters { week: u32 },

    #[error("week {week}: {position} starter '{name}' has no points value")]
    MissingPoints {
        week: u32,
        position: String,
        name: String,
    },
}

/// Errors raised by the derived-metric and fill-segment stages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error(
        "scenario series are misaligned: draft={draft} weeks, actual_best={actual_best} weeks, actual_lineup={actual_lineup} weeks"
    )]
    SeriesLengthMismatch {
        draft: usize,
        actual_best: usize,
        actual_lineup: usize,
    },

    #[error(
        "scenario series cover different weeks at index {index}: draft week {draft}, actual_best week {actual_best}, actual_lineup week {actual_lineup}"
    )]
    WeekMisalignment {
        index: usize,
        draft: u32,
        actual_best: u32,
        actual_lineup: u32,
    },

    #[error("fill input is misaligned: {weeks} weeks, {upper} upper points, {lower} lower points")]
    SegmentInputMismatch {
        weeks: usize,
        upper: usize,
        lower: usize,
    },

    #[error("segment starting at week {week} is neither positive, negative, nor crossing")]
    InconsistentSegment { week: f64 },
}
