//! Review logs and scheduling outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Card, Rating, State};

/// Immutable audit record of one scheduling decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewLog {
    /// Rating this decision answers
    pub rating: Rating,
    /// Interval chosen for this rating, in days
    pub scheduled_days: u32,
    /// Whole days since the previous review at review time
    pub elapsed_days: u32,
    /// When the review happened
    pub review: DateTime<Utc>,
    /// State the card was in before the review
    pub state: State,
}

/// One candidate outcome: the card as it would be after `rating`, plus its log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingInfo {
    /// Updated card
    pub card: Card,
    /// Log entry for this outcome
    pub review_log: ReviewLog,
}

impl SchedulingInfo {
    /// Split into the `(card, log)` pair
    pub fn into_parts(self) -> (Card, ReviewLog) {
        (self.card, self.review_log)
    }
}
