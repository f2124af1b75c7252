//! Memory module - Core types and data structures
//!
//! The scheduling data model:
//! - Cards with their learning state and memory parameters
//! - Learner ratings and the four learning states
//! - Review logs and the per-rating scheduling outcome pairs

mod card;
mod review_log;

pub use card::Card;
pub use review_log::{ReviewLog, SchedulingInfo};

use serde::{Deserialize, Serialize};

use crate::fsrs::FsrsError;

// ============================================================================
// RATING
// ============================================================================

/// Learner feedback for one review (integer encoding 1-4).
///
/// - Again (1): failed to recall
/// - Hard (2): recalled with serious difficulty
/// - Good (3): recalled after some hesitation
/// - Easy (4): recalled effortlessly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rating {
    /// Failed to recall
    Again = 1,
    /// Recalled with difficulty
    Hard = 2,
    /// Recalled normally
    Good = 3,
    /// Recalled effortlessly
    Easy = 4,
}

impl Rating {
    /// All ratings in ascending order
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    /// Integer encoding (1-4)
    #[inline]
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Rating as a float, for use in the model formulas
    #[inline]
    pub fn as_f64(self) -> f64 {
        self as u8 as f64
    }

    /// Zero-based slot (Again = 0 .. Easy = 3)
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }
}

impl TryFrom<i64> for Rating {
    type Error = FsrsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Rating::Again),
            2 => Ok(Rating::Hard),
            3 => Ok(Rating::Good),
            4 => Ok(Rating::Easy),
            _ => Err(FsrsError::InvalidRating(value)),
        }
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// STATE
// ============================================================================

/// Learning state of a card (integer encoding 0-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum State {
    /// Never reviewed
    #[default]
    New = 0,
    /// First same-session learning steps
    Learning = 1,
    /// Graduated to day-granularity intervals
    Review = 2,
    /// Lapsed from Review, back in short-term steps
    Relearning = 3,
}

impl State {
    /// Integer encoding (0-3)
    #[inline]
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Learning and Relearning share the short-term scheduling path
    #[inline]
    pub fn is_short_term(self) -> bool {
        matches!(self, State::Learning | State::Relearning)
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            State::New => "new",
            State::Learning => "learning",
            State::Review => "review",
            State::Relearning => "relearning",
        }
    }
}

impl TryFrom<i64> for State {
    type Error = FsrsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(State::New),
            1 => Ok(State::Learning),
            2 => Ok(State::Review),
            3 => Ok(State::Relearning),
            _ => Err(FsrsError::InvalidState(value)),
        }
    }
}

impl From<State> for i64 {
    fn from(state: State) -> Self {
        state.value()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
