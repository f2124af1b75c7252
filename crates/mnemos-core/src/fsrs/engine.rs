//! FSRS review engine
//!
//! Orchestrates one review: prepares the card (elapsed days, repetition count,
//! last review), runs the four-branch state machine, and for the
//! single-outcome entry points selects the branch for the given rating.
//!
//! The engine is a pure function of `(card, rating, now, parameters)`. The
//! only place the clock is consulted is the `*_with_clock` boundary methods,
//! which read an injected [`Clock`] once and delegate.

use chrono::{DateTime, Utc};

use super::algorithm::MemoryModel;
use super::error::Result;
use super::parameters::FSRSParameters;
use super::scheduler::{ScheduledOutcomes, schedule_branches};
use crate::clock::Clock;
use crate::memory::{Card, Rating, ReviewLog, State};

/// FSRS scheduler configured with one immutable parameter set
///
/// `Send + Sync`; share it behind an `Arc` or clone it freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FSRSScheduler {
    model: MemoryModel,
}

impl FSRSScheduler {
    /// Create a scheduler for a validated parameter set
    pub fn new(params: FSRSParameters) -> Self {
        Self {
            model: MemoryModel::new(params),
        }
    }

    /// Parameter set in use
    pub fn parameters(&self) -> &FSRSParameters {
        self.model.parameters()
    }

    /// Underlying memory model
    pub fn model(&self) -> &MemoryModel {
        &self.model
    }

    /// Whole days between the card's last review and `now` (0 for New cards)
    pub fn elapsed_days(&self, card: &Card, now: DateTime<Utc>) -> u32 {
        if card.state == State::New {
            return 0;
        }
        card.days_since_review(now).unwrap_or(0)
    }

    /// Compute all four candidate outcomes for reviewing `card` at `now`.
    ///
    /// The input card is not modified.
    pub fn schedule_all(&self, card: &Card, now: DateTime<Utc>) -> ScheduledOutcomes {
        let mut card = card.clone();
        card.elapsed_days = self.elapsed_days(&card, now);
        card.last_review = Some(now);
        card.reps = card.reps.saturating_add(1);

        tracing::debug!(
            state = %card.state,
            elapsed_days = card.elapsed_days,
            reps = card.reps,
            stability = card.stability,
            difficulty = card.difficulty,
            "Scheduling review branches"
        );

        schedule_branches(&self.model, &card, now)
    }

    /// Review `card` with `rating` at `now`, returning the updated card and
    /// its log entry.
    pub fn review(&self, card: &Card, rating: Rating, now: DateTime<Utc>) -> (Card, ReviewLog) {
        let (card, log) = self.schedule_all(card, now).into_info(rating).into_parts();

        tracing::debug!(
            rating = %rating,
            from = %log.state,
            to = %card.state,
            scheduled_days = card.scheduled_days,
            "Card reviewed"
        );

        (card, log)
    }

    /// Review with an integer-encoded rating (1=Again .. 4=Easy).
    ///
    /// # Errors
    ///
    /// [`FsrsError::InvalidRating`](super::FsrsError::InvalidRating) if the
    /// value is outside 1..=4; out-of-range ratings are never coerced.
    pub fn review_rating_value(
        &self,
        card: &Card,
        rating: i64,
        now: DateTime<Utc>,
    ) -> Result<(Card, ReviewLog)> {
        let rating = Rating::try_from(rating).inspect_err(|e| {
            tracing::warn!("Rejected review: {}", e);
        })?;
        Ok(self.review(card, rating, now))
    }

    /// [`schedule_all`](Self::schedule_all) at the clock's current time
    pub fn schedule_all_with_clock(&self, card: &Card, clock: &impl Clock) -> ScheduledOutcomes {
        self.schedule_all(card, clock.now())
    }

    /// [`review`](Self::review) at the clock's current time
    pub fn review_with_clock(
        &self,
        card: &Card,
        rating: Rating,
        clock: &impl Clock,
    ) -> (Card, ReviewLog) {
        self.review(card, rating, clock.now())
    }

    /// Probability of recall for a Review card at `now`, `None` otherwise
    pub fn retrievability(&self, card: &Card, now: DateTime<Utc>) -> Option<f64> {
        if card.state != State::Review || card.stability <= 0.0 {
            return None;
        }
        let elapsed = card.days_since_review(now)?;
        Some(self.model.forgetting_curve(elapsed, card.stability))
    }
}
