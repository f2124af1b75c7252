//! Review Session Harness
//!
//! Keeps one card, the scheduler and a simulated "now" together so journey
//! tests can read like the learner's timeline:
//!
//! ```rust,ignore
//! let mut session = ReviewSession::new(FSRSScheduler::default(), start);
//! session.review_and_wait(Rating::Good);
//! session.review_and_wait(Rating::Good);
//! session.advance_days(3);
//! session.review(Rating::Again);
//! assert_eq!(session.card().lapses, 1);
//! ```

use chrono::{DateTime, Duration, Utc};
use mnemos_core::{Card, FSRSScheduler, Rating, ReviewLog, ScheduledOutcomes};

/// One card under review with a simulated timeline
pub struct ReviewSession {
    scheduler: FSRSScheduler,
    card: Card,
    now: DateTime<Utc>,
    history: Vec<ReviewLog>,
}

impl ReviewSession {
    /// Fresh New card due at `start`
    pub fn new(scheduler: FSRSScheduler, start: DateTime<Utc>) -> Self {
        Self::with_card(scheduler, Card::new(start), start)
    }

    /// Continue from an existing card
    pub fn with_card(scheduler: FSRSScheduler, card: Card, now: DateTime<Utc>) -> Self {
        Self {
            scheduler,
            card,
            now,
            history: Vec::new(),
        }
    }

    /// Current card
    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Simulated current time
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Scheduler in use
    pub fn scheduler(&self) -> &FSRSScheduler {
        &self.scheduler
    }

    /// Logs of every review so far
    pub fn history(&self) -> &[ReviewLog] {
        &self.history
    }

    /// Scheduled days chosen at each review so far
    pub fn intervals(&self) -> Vec<u32> {
        self.history.iter().map(|log| log.scheduled_days).collect()
    }

    /// Move the simulated clock forward
    pub fn advance_days(&mut self, days: i64) {
        self.now += Duration::days(days);
    }

    /// Jump the simulated clock to the card's due date
    pub fn jump_to_due(&mut self) {
        self.now = self.card.due;
    }

    /// All four candidate outcomes at the current time
    pub fn preview(&self) -> ScheduledOutcomes {
        self.scheduler.schedule_all(&self.card, self.now)
    }

    /// Review at the current time and keep the outcome
    pub fn review(&mut self, rating: Rating) -> &Card {
        let (card, log) = self.scheduler.review(&self.card, rating, self.now);
        self.card = card;
        self.history.push(log);
        &self.card
    }

    /// Review now, then move the clock to the new due date
    pub fn review_and_wait(&mut self, rating: Rating) -> &Card {
        self.review(rating);
        self.jump_to_due();
        &self.card
    }

    /// Replace the card, e.g. after a persistence round trip
    pub fn replace_card(&mut self, card: Card) {
        self.card = card;
    }
}
