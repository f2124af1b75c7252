//! Flat record codec
//!
//! Converts cards and review logs to and from `HashMap<String, String>`.
//! The scheduler never depends on this module; it only reads the public
//! fields of the data model.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::fsrs::FsrsError;
use crate::memory::{Card, Rating, ReviewLog, State};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Storage error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Required key absent from the record
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    /// Numeric field that does not parse
    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber {
        /// Record key
        field: &'static str,
        /// Raw value
        value: String,
    },
    /// Invalid timestamp
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// State or rating code out of range
    #[error("Invalid enum value: {0}")]
    InvalidEnum(#[from] FsrsError),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, StorageError>;

// ============================================================================
// FORMAT
// ============================================================================

/// Flat string-keyed record
pub type FlatRecord = HashMap<String, String>;

/// Timestamp pattern (UTC, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Placeholder for a card that has never been reviewed
pub const NO_TIMESTAMP: &str = "N/A";

/// Format a timestamp, dropping sub-second precision
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` timestamp as UTC.
///
/// Malformed input is reported, never repaired.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| StorageError::InvalidTimestamp(format!("{raw:?}: {e}")))
}

fn field<'a>(map: &'a FlatRecord, key: &'static str) -> Result<&'a str> {
    map.get(key)
        .map(String::as_str)
        .ok_or(StorageError::MissingField(key))
}

fn number<T: FromStr>(map: &FlatRecord, key: &'static str) -> Result<T> {
    let raw = field(map, key)?;
    raw.trim().parse().map_err(|_| StorageError::InvalidNumber {
        field: key,
        value: raw.to_string(),
    })
}

fn timestamp(map: &FlatRecord, key: &'static str) -> Result<DateTime<Utc>> {
    parse_timestamp(field(map, key)?)
}

// ============================================================================
// CARD
// ============================================================================

/// Encode a card
pub fn card_to_map(card: &Card) -> FlatRecord {
    let mut map = FlatRecord::with_capacity(9);
    map.insert("due".into(), format_timestamp(card.due));
    map.insert("stability".into(), card.stability.to_string());
    map.insert("difficulty".into(), card.difficulty.to_string());
    map.insert("elapsedDays".into(), card.elapsed_days.to_string());
    map.insert("scheduledDays".into(), card.scheduled_days.to_string());
    map.insert("reps".into(), card.reps.to_string());
    map.insert("lapses".into(), card.lapses.to_string());
    map.insert("state".into(), card.state.value().to_string());
    map.insert(
        "lastReview".into(),
        card.last_review
            .map(format_timestamp)
            .unwrap_or_else(|| NO_TIMESTAMP.to_string()),
    );
    map
}

/// Decode a card
pub fn card_from_map(map: &FlatRecord) -> Result<Card> {
    let last_review = match field(map, "lastReview")? {
        NO_TIMESTAMP => None,
        raw => Some(parse_timestamp(raw)?),
    };

    Ok(Card {
        due: timestamp(map, "due")?,
        stability: number(map, "stability")?,
        difficulty: number(map, "difficulty")?,
        elapsed_days: number(map, "elapsedDays")?,
        scheduled_days: number(map, "scheduledDays")?,
        reps: number(map, "reps")?,
        lapses: number(map, "lapses")?,
        state: State::try_from(number::<i64>(map, "state")?)?,
        last_review,
    })
}

// ============================================================================
// REVIEW LOG
// ============================================================================

/// Encode a review log
pub fn review_log_to_map(log: &ReviewLog) -> FlatRecord {
    let mut map = FlatRecord::with_capacity(5);
    map.insert("rating".into(), log.rating.value().to_string());
    map.insert("scheduledDays".into(), log.scheduled_days.to_string());
    map.insert("elapsedDays".into(), log.elapsed_days.to_string());
    map.insert("review".into(), format_timestamp(log.review));
    map.insert("state".into(), log.state.value().to_string());
    map
}

/// Decode a review log
pub fn review_log_from_map(map: &FlatRecord) -> Result<ReviewLog> {
    Ok(ReviewLog {
        rating: Rating::try_from(number::<i64>(map, "rating")?)?,
        scheduled_days: number(map, "scheduledDays")?,
        elapsed_days: number(map, "elapsedDays")?,
        review: timestamp(map, "review")?,
        state: State::try_from(number::<i64>(map, "state")?)?,
    })
}
