//! Four-branch scheduling state machine
//!
//! Given a card already prepared for review (elapsed days, repetition count
//! and last review set), derive one candidate outcome per rating. Each
//! branch starts from its own copy of the card.
//!
//! | pre-state             | Again                 | Hard     | Good     | Easy     |
//! |-----------------------|-----------------------|----------|----------|----------|
//! | New                   | Learning              | Learning | Learning | Review   |
//! | Learning / Relearning | same                  | same     | Review   | Review   |
//! | Review                | Relearning, lapses+1  | Review   | Review   | Review   |

use std::ops::Index;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::algorithm::MemoryModel;
use crate::memory::{Card, Rating, ReviewLog, SchedulingInfo, State};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Delay before a New card rated Again comes back
pub const NEW_AGAIN_DELAY_MINUTES: i64 = 1;

/// Delay before a New card rated Hard comes back
pub const NEW_HARD_DELAY_MINUTES: i64 = 5;

/// Delay before a New card rated Good comes back
pub const NEW_GOOD_DELAY_MINUTES: i64 = 10;

/// Delay before an Again outside New comes back
pub const RELAPSE_DELAY_MINUTES: i64 = 5;

/// Delay for a Hard branch with a zero-day interval
pub const HARD_STEP_DELAY_MINUTES: i64 = 10;

fn after_minutes(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    now.checked_add_signed(Duration::minutes(minutes))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

fn after_days(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now.checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// ============================================================================
// SCHEDULING CARDS
// ============================================================================

/// The four branch cards under construction
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingCards {
    /// Branch for Again
    pub again: Card,
    /// Branch for Hard
    pub hard: Card,
    /// Branch for Good
    pub good: Card,
    /// Branch for Easy
    pub easy: Card,
}

impl SchedulingCards {
    /// Four independent copies of `card`
    pub fn new(card: &Card) -> Self {
        Self {
            again: card.clone(),
            hard: card.clone(),
            good: card.clone(),
            easy: card.clone(),
        }
    }

    /// Branch card for a rating
    pub fn get_mut(&mut self, rating: Rating) -> &mut Card {
        match rating {
            Rating::Again => &mut self.again,
            Rating::Hard => &mut self.hard,
            Rating::Good => &mut self.good,
            Rating::Easy => &mut self.easy,
        }
    }

    /// Apply the state-transition table for a card leaving `state`
    pub fn update_state(&mut self, state: State) {
        match state {
            State::New => {
                self.again.state = State::Learning;
                self.hard.state = State::Learning;
                self.good.state = State::Learning;
                self.easy.state = State::Review;
            }
            State::Learning | State::Relearning => {
                self.again.state = state;
                self.hard.state = state;
                self.good.state = State::Review;
                self.easy.state = State::Review;
            }
            State::Review => {
                self.again.state = State::Relearning;
                self.hard.state = State::Review;
                self.good.state = State::Review;
                self.easy.state = State::Review;
                self.again.lapses = self.again.lapses.saturating_add(1);
            }
        }
    }

    /// Seed difficulty and stability from the first rating
    pub fn init_ds(&mut self, model: &MemoryModel) {
        for rating in Rating::ALL {
            let card = self.get_mut(rating);
            card.difficulty = model.init_difficulty(rating);
            card.stability = model.init_stability(rating);
        }
    }

    /// Update difficulty and stability for a card that has been reviewed before
    pub fn next_ds(
        &mut self,
        model: &MemoryModel,
        last_difficulty: f64,
        last_stability: f64,
        retrievability: f64,
        state: State,
    ) {
        for rating in Rating::ALL {
            let stability = match (state, rating) {
                (State::Review, Rating::Again) => {
                    model.next_forget_stability(last_difficulty, last_stability, retrievability)
                }
                (State::Review, _) => model.next_recall_stability(
                    last_difficulty,
                    last_stability,
                    retrievability,
                    rating,
                ),
                _ => model.short_term_stability(last_stability, rating),
            };

            let card = self.get_mut(rating);
            card.difficulty = model.next_difficulty(last_difficulty, rating);
            card.stability = stability;
        }
    }

    /// Minute-granularity steps for a card's first review; only Easy gets days
    pub fn schedule_new(&mut self, now: DateTime<Utc>, easy_interval: u32) {
        self.again.scheduled_days = 0;
        self.hard.scheduled_days = 0;
        self.good.scheduled_days = 0;
        self.easy.scheduled_days = easy_interval;

        self.again.due = after_minutes(now, NEW_AGAIN_DELAY_MINUTES);
        self.hard.due = after_minutes(now, NEW_HARD_DELAY_MINUTES);
        self.good.due = after_minutes(now, NEW_GOOD_DELAY_MINUTES);
        self.easy.due = after_days(now, easy_interval);
    }

    /// Assign intervals and due dates; Again always relapses to a short step
    pub fn schedule(
        &mut self,
        now: DateTime<Utc>,
        hard_interval: u32,
        good_interval: u32,
        easy_interval: u32,
    ) {
        self.again.scheduled_days = 0;
        self.hard.scheduled_days = hard_interval;
        self.good.scheduled_days = good_interval;
        self.easy.scheduled_days = easy_interval;

        self.again.due = after_minutes(now, RELAPSE_DELAY_MINUTES);
        self.hard.due = if hard_interval > 0 {
            after_days(now, hard_interval)
        } else {
            after_minutes(now, HARD_STEP_DELAY_MINUTES)
        };
        self.good.due = after_days(now, good_interval);
        self.easy.due = after_days(now, easy_interval);
    }

    /// Pair every branch with its review log.
    ///
    /// `card` is the prepared pre-review card: its state and elapsed days are
    /// what the logs record.
    pub fn record_log(self, card: &Card, now: DateTime<Utc>) -> ScheduledOutcomes {
        let log = |rating: Rating, branch: &Card| ReviewLog {
            rating,
            scheduled_days: branch.scheduled_days,
            elapsed_days: card.elapsed_days,
            review: now,
            state: card.state,
        };

        ScheduledOutcomes {
            again: SchedulingInfo {
                review_log: log(Rating::Again, &self.again),
                card: self.again,
            },
            hard: SchedulingInfo {
                review_log: log(Rating::Hard, &self.hard),
                card: self.hard,
            },
            good: SchedulingInfo {
                review_log: log(Rating::Good, &self.good),
                card: self.good,
            },
            easy: SchedulingInfo {
                review_log: log(Rating::Easy, &self.easy),
                card: self.easy,
            },
        }
    }
}

/// Run the state machine for a prepared card.
///
/// The caller has already set `elapsed_days`, `last_review = now` and the
/// incremented `reps`; `state`, `difficulty` and `stability` are still the
/// pre-review values.
pub fn schedule_branches(model: &MemoryModel, card: &Card, now: DateTime<Utc>) -> ScheduledOutcomes {
    let mut s = SchedulingCards::new(card);
    s.update_state(card.state);

    match card.state {
        State::New => {
            s.init_ds(model);
            let easy_interval = model.next_interval(s.easy.stability);
            s.schedule_new(now, easy_interval);
        }
        State::Learning | State::Relearning => {
            let retrievability = model.forgetting_curve(card.elapsed_days, card.stability);
            s.next_ds(model, card.difficulty, card.stability, retrievability, card.state);

            let hard_interval = 0;
            let good_interval = model.next_interval(s.good.stability);
            let easy_interval = model
                .next_interval(s.easy.stability)
                .max(good_interval.saturating_add(1));
            s.schedule(now, hard_interval, good_interval, easy_interval);
        }
        State::Review => {
            let retrievability = model.forgetting_curve(card.elapsed_days, card.stability);
            s.next_ds(model, card.difficulty, card.stability, retrievability, card.state);

            let mut hard_interval = model.next_interval(s.hard.stability);
            let mut good_interval = model.next_interval(s.good.stability);
            hard_interval = hard_interval.min(good_interval);
            good_interval = good_interval.max(hard_interval.saturating_add(1));
            let easy_interval = model
                .next_interval(s.easy.stability)
                .max(good_interval.saturating_add(1));
            s.schedule(now, hard_interval, good_interval, easy_interval);
        }
    }

    s.record_log(card, now)
}

// ============================================================================
// OUTCOMES
// ============================================================================

/// The four mutually exclusive outcomes of one review, indexed by rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledOutcomes {
    /// Outcome if rated Again
    pub again: SchedulingInfo,
    /// Outcome if rated Hard
    pub hard: SchedulingInfo,
    /// Outcome if rated Good
    pub good: SchedulingInfo,
    /// Outcome if rated Easy
    pub easy: SchedulingInfo,
}

impl ScheduledOutcomes {
    /// Outcome for a rating
    pub fn get(&self, rating: Rating) -> &SchedulingInfo {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }

    /// Take the outcome for a rating, dropping the other three
    pub fn into_info(self, rating: Rating) -> SchedulingInfo {
        match rating {
            Rating::Again => self.again,
            Rating::Hard => self.hard,
            Rating::Good => self.good,
            Rating::Easy => self.easy,
        }
    }

    /// Outcomes in rating order
    pub fn iter(&self) -> impl Iterator<Item = (Rating, &SchedulingInfo)> {
        Rating::ALL.into_iter().map(move |rating| (rating, self.get(rating)))
    }

    /// Scheduled days per rating, `[again, hard, good, easy]`
    pub fn intervals(&self) -> [u32; 4] {
        Rating::ALL.map(|rating| self.get(rating).card.scheduled_days)
    }
}

impl Index<Rating> for ScheduledOutcomes {
    type Output = SchedulingInfo;

    fn index(&self, rating: Rating) -> &Self::Output {
        self.get(rating)
    }
}
