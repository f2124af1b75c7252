//! # Mnemos Core
//!
//! Card scheduling engine for spaced-repetition learning, built on the
//! 19-weight FSRS memory model:
//!
//! - **Memory model**: stability and difficulty updates, same-day short-term
//!   stability, and a power-law forgetting curve
//! - **State machine**: New → Learning → Review ⇄ Relearning, producing four
//!   mutually exclusive candidate outcomes per review
//! - **Deterministic**: every operation is a pure function of
//!   `(card, rating, now, parameters)`; time is injected, never read
//! - **Flat records**: string-keyed persistence of cards and review logs
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use mnemos_core::{Card, FSRSScheduler, Rating, State};
//!
//! let scheduler = FSRSScheduler::default();
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//!
//! // First review of a new card
//! let (card, log) = scheduler.review(&Card::new(now), Rating::Good, now);
//! assert_eq!(card.state, State::Learning);
//! assert_eq!(log.state, State::New);
//!
//! // Preview every possible answer for the next review
//! let outcomes = scheduler.schedule_all(&card, card.due);
//! for (rating, info) in outcomes.iter() {
//!     println!("{rating}: due {}", info.card.due);
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod clock;
pub mod fsrs;
pub mod memory;
pub mod storage;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Data model
pub use memory::{Card, Rating, ReviewLog, SchedulingInfo, State};

// FSRS algorithm
pub use fsrs::{
    // Core functions for advanced usage
    forgetting_curve,
    FSRSParameters,
    FSRSScheduler,
    FsrsError,
    MemoryModel,
    ScheduledOutcomes,
    SchedulingCards,
    DEFAULT_WEIGHTS,
};

// Time sources
pub use clock::{Clock, FixedClock, SystemClock};

// Storage layer
pub use storage::{
    card_from_map, card_to_map, review_log_from_map, review_log_to_map, FlatRecord, StorageError,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// FSRS model weight count
pub const FSRS_WEIGHT_COUNT: usize = fsrs::WEIGHT_COUNT;

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Card, Clock, FSRSParameters, FSRSScheduler, FsrsError, Rating, ReviewLog,
        ScheduledOutcomes, SchedulingInfo, State, SystemClock,
    };
}
