//! FSRS (Free Spaced Repetition Scheduler) Module
//!
//! The 19-weight FSRS memory model with same-day short-term stability.
//!
//! Reference: https://github.com/open-spaced-repetition/fsrs4anki
//!
//! ## Pieces
//! - [`FSRSParameters`]: validated weights, target retention, maximum interval
//! - [`MemoryModel`]: stability/difficulty formulas and the forgetting curve
//! - [`SchedulingCards`]: the per-rating state-transition table
//! - [`FSRSScheduler`]: one review, end to end
//!
//! ## Core Formulas:
//! - Retrievability: R = (1 + FACTOR * t / S)^DECAY where DECAY = -0.5, FACTOR = 0.9^(1/DECAY) - 1
//! - Interval: t = S/FACTOR * (r^(1/DECAY) - 1), clamped to [1, maximum_interval]

mod algorithm;
mod engine;
mod error;
mod parameters;
mod scheduler;

pub use algorithm::{
    decay_factor,
    // Core functions
    forgetting_curve,
    MemoryModel,
    // Constants
    DECAY,
    MAX_DIFFICULTY,
    MIN_DIFFICULTY,
    MIN_INITIAL_STABILITY,
};

pub use parameters::{
    FSRSParameters, DEFAULT_MAXIMUM_INTERVAL, DEFAULT_RETENTION, DEFAULT_WEIGHTS, WEIGHT_COUNT,
};

pub use scheduler::{
    schedule_branches, ScheduledOutcomes, SchedulingCards, HARD_STEP_DELAY_MINUTES,
    NEW_AGAIN_DELAY_MINUTES, NEW_GOOD_DELAY_MINUTES, NEW_HARD_DELAY_MINUTES,
    RELAPSE_DELAY_MINUTES,
};

pub use engine::FSRSScheduler;

pub use error::{FsrsError, Result};
