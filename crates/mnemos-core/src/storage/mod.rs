//! Storage Module
//!
//! Flat string-keyed records for persisting cards and review logs:
//! - Integer encodings for states and ratings
//! - `YYYY-MM-DDTHH:MM:SS` UTC timestamps, `"N/A"` for a missing last review
//! - Shortest round-trip float formatting so numeric fields survive exactly

mod record;

pub use record::{
    card_from_map, card_to_map, format_timestamp, parse_timestamp, review_log_from_map,
    review_log_to_map, FlatRecord, Result, StorageError, NO_TIMESTAMP, TIMESTAMP_FORMAT,
};
