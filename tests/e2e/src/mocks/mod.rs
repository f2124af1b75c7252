//! Test Data Fixtures
//!
//! Pinned weight sets, start times and rating scripts with their known
//! interval histories.

use chrono::{DateTime, TimeZone, Utc};
use mnemos_core::{FSRSParameters, FSRSScheduler, Rating};

/// Weight set the reference histories were produced with
pub const TEST_WEIGHTS: [f64; 19] = [
    0.4197, 1.1869, 3.0412, 15.2441, 7.1434, 0.6477, 1.0007, 0.0674, 1.6597, 0.1712, 1.1178,
    2.0225, 0.0904, 0.3025, 2.1214, 0.2498, 2.9466, 0.4891, 0.6468,
];

/// Ratings for the long review history: six Goods, two lapses, five Goods
pub const LONG_HISTORY_RATINGS: [Rating; 13] = [
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Again,
    Rating::Again,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
];

/// Intervals for [`LONG_HISTORY_RATINGS`], each review at the previous due date
pub const LONG_HISTORY_INTERVALS: [u32; 13] = [0, 4, 17, 62, 198, 563, 0, 0, 9, 27, 74, 190, 457];

/// Ratings for the memory-state history
pub const MEMO_RATINGS: [Rating; 6] = [
    Rating::Again,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
    Rating::Good,
];

/// Days waited before each review of [`MEMO_RATINGS`] after the first
pub const MEMO_DAY_OFFSETS: [i64; 6] = [0, 0, 1, 3, 8, 21];

/// Intervals chosen along the memory-state history
pub const MEMO_INTERVALS: [u32; 6] = [0, 1, 2, 4, 11, 29];

/// Good-branch stability after the memory-state history
pub const MEMO_FINAL_STABILITY: f64 = 71.4554;

/// Good-branch difficulty after the memory-state history
pub const MEMO_FINAL_DIFFICULTY: f64 = 5.0976;

/// Fixed start of every scripted timeline
pub fn fixed_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 11, 29, 12, 30, 0).unwrap()
}

/// Parameters with [`TEST_WEIGHTS`] and default tunables
pub fn test_parameters() -> FSRSParameters {
    FSRSParameters::with_weights(TEST_WEIGHTS.to_vec()).expect("test weights are valid")
}

/// Scheduler with [`TEST_WEIGHTS`]
pub fn test_scheduler() -> FSRSScheduler {
    FSRSScheduler::new(test_parameters())
}

/// Round to four decimal places
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
