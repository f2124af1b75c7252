//! Card - the scheduling state of one memorization item
//!
//! A card carries:
//! - Its learning state (new, learning, review, relearning)
//! - The two latent memory parameters, stability and difficulty
//! - Review counters and the due date chosen by the last decision

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::State;
use crate::fsrs::{DECAY, decay_factor, forgetting_curve};

/// Seconds in one day, for whole-day elapsed time
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Scheduling state of a memorization item
///
/// Cards are plain values: the scheduler never mutates its input, and each
/// candidate outcome is a fresh copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// When the card is next due for review
    pub due: DateTime<Utc>,
    /// Memory stability (days until recall probability decays to 90%)
    pub stability: f64,
    /// Inherent difficulty (1.0 = easy, 10.0 = hard)
    pub difficulty: f64,
    /// Whole days between the previous two reviews
    pub elapsed_days: u32,
    /// Interval chosen by the last scheduling decision, in days
    pub scheduled_days: u32,
    /// Number of reviews performed
    pub reps: u32,
    /// Number of Again ratings given while in Review
    pub lapses: u32,
    /// Current learning state
    pub state: State,
    /// When the card was last reviewed; `None` until the first review
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_review: Option<DateTime<Utc>>,
}

impl Card {
    /// Create a never-reviewed card that is due at `now`.
    ///
    /// Stability and difficulty stay at zero until the first rating seeds
    /// them.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            due: now,
            stability: 0.0,
            difficulty: 0.0,
            elapsed_days: 0,
            scheduled_days: 0,
            reps: 0,
            lapses: 0,
            state: State::New,
            last_review: None,
        }
    }

    /// Check if the card is due at the given time
    pub fn is_due_at(&self, now: DateTime<Utc>) -> bool {
        self.due <= now
    }

    /// Whole days since the last review, or `None` if never reviewed.
    ///
    /// Spans where `now` precedes the last review count as zero days.
    pub fn days_since_review(&self, now: DateTime<Utc>) -> Option<u32> {
        self.last_review.map(|last| {
            let seconds = now.signed_duration_since(last).num_seconds().max(0);
            u32::try_from(seconds / SECONDS_PER_DAY).unwrap_or(u32::MAX)
        })
    }

    /// Current probability of recall.
    ///
    /// Only cards in Review have a meaningful long-term retrievability; every
    /// other state returns `None`.
    pub fn retrievability(&self, now: DateTime<Utc>) -> Option<f64> {
        if self.state != State::Review || self.stability <= 0.0 {
            return None;
        }
        let elapsed = self.days_since_review(now)?;
        Some(forgetting_curve(
            elapsed,
            self.stability,
            DECAY,
            decay_factor(DECAY),
        ))
    }
}
