//! FSRS memory model
//!
//! Stateless formulas over (difficulty, stability, retrievability, rating).
//! Everything here is a pure function of its arguments plus the immutable
//! parameter set; nothing reads the clock.
//!
//! ## Formulas
//! - Retrievability: `R = (1 + FACTOR * t / S)^DECAY`, `FACTOR = 0.9^(1/DECAY) - 1`
//! - Interval: `t = S / FACTOR * (r^(1/DECAY) - 1)` for target retention `r`
//! - Difficulty: linear update by rating, mean-reverted toward `D0(Easy)`

use super::parameters::FSRSParameters;
use crate::memory::Rating;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Forgetting curve exponent
pub const DECAY: f64 = -0.5;

/// Lower difficulty bound
pub const MIN_DIFFICULTY: f64 = 1.0;

/// Upper difficulty bound
pub const MAX_DIFFICULTY: f64 = 10.0;

/// Floor for the stability seeded by a first rating
pub const MIN_INITIAL_STABILITY: f64 = 0.1;

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Curve scale such that `R(S, S) = 0.9` for the given decay
#[inline]
pub fn decay_factor(decay: f64) -> f64 {
    0.9_f64.powf(1.0 / decay) - 1.0
}

/// Probability of recall after `elapsed_days` at the given stability.
///
/// Equals 1.0 at `elapsed_days = 0` and decreases monotonically with time.
#[inline]
pub fn forgetting_curve(elapsed_days: u32, stability: f64, decay: f64, factor: f64) -> f64 {
    (1.0 + factor * f64::from(elapsed_days) / stability).powf(decay)
}

#[inline]
fn clamp_difficulty(difficulty: f64) -> f64 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

// ============================================================================
// MEMORY MODEL
// ============================================================================

/// FSRS memory model bound to one parameter set
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryModel {
    params: FSRSParameters,
    decay: f64,
    factor: f64,
}

impl MemoryModel {
    /// Bind the formulas to a parameter set
    pub fn new(params: FSRSParameters) -> Self {
        Self {
            params,
            decay: DECAY,
            factor: decay_factor(DECAY),
        }
    }

    /// Parameter set in use
    pub fn parameters(&self) -> &FSRSParameters {
        &self.params
    }

    /// Forgetting curve exponent
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Forgetting curve scale
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[inline]
    fn w(&self, index: usize) -> f64 {
        self.params.weight(index)
    }

    /// Stability seeded by the first rating: `max(w[rating-1], 0.1)`
    pub fn init_stability(&self, rating: Rating) -> f64 {
        self.w(rating.index()).max(MIN_INITIAL_STABILITY)
    }

    /// Difficulty seeded by the first rating: `w4 - e^(w5 * (rating-1)) + 1`, clamped
    pub fn init_difficulty(&self, rating: Rating) -> f64 {
        clamp_difficulty(self.w(4) - (self.w(5) * (rating.as_f64() - 1.0)).exp() + 1.0)
    }

    /// Retrievability after `elapsed_days` at the given stability
    pub fn forgetting_curve(&self, elapsed_days: u32, stability: f64) -> f64 {
        forgetting_curve(elapsed_days, stability, self.decay, self.factor)
    }

    /// Whole-day interval at which predicted retrievability falls to the
    /// target retention, clamped to `[1, maximum_interval]`.
    pub fn next_interval(&self, stability: f64) -> u32 {
        let retention = self.params.request_retention();
        let raw = stability / self.factor * (retention.powf(1.0 / self.decay) - 1.0);
        let maximum = self.params.maximum_interval();
        let rounded = raw.round();

        // NaN lands on the lower bound
        if !(rounded >= 1.0) {
            1
        } else if rounded >= f64::from(maximum) {
            maximum
        } else {
            rounded as u32
        }
    }

    /// Difficulty after a review, pulled toward `D0(Easy)` by `w7`
    pub fn next_difficulty(&self, difficulty: f64, rating: Rating) -> f64 {
        let next = difficulty - self.w(6) * (rating.as_f64() - 3.0);
        clamp_difficulty(self.mean_reversion(self.init_difficulty(Rating::Easy), next))
    }

    /// `w7 * init + (1 - w7) * current`
    pub fn mean_reversion(&self, init: f64, current: f64) -> f64 {
        self.w(7) * init + (1.0 - self.w(7)) * current
    }

    /// Same-session stability update for Learning/Relearning cards
    pub fn short_term_stability(&self, stability: f64, rating: Rating) -> f64 {
        stability * (self.w(17) * (rating.as_f64() - 3.0 + self.w(18))).exp()
    }

    /// Stability after a successful recall (Hard, Good or Easy in Review)
    pub fn next_recall_stability(
        &self,
        difficulty: f64,
        stability: f64,
        retrievability: f64,
        rating: Rating,
    ) -> f64 {
        let hard_penalty = if rating == Rating::Hard { self.w(15) } else { 1.0 };
        let easy_bonus = if rating == Rating::Easy { self.w(16) } else { 1.0 };

        stability
            * (1.0
                + self.w(8).exp()
                    * (11.0 - difficulty)
                    * stability.powf(-self.w(9))
                    * (((1.0 - retrievability) * self.w(10)).exp() - 1.0)
                    * hard_penalty
                    * easy_bonus)
    }

    /// Stability after a lapse (Again in Review)
    pub fn next_forget_stability(
        &self,
        difficulty: f64,
        stability: f64,
        retrievability: f64,
    ) -> f64 {
        self.w(11)
            * difficulty.powf(-self.w(12))
            * ((stability + 1.0).powf(self.w(13)) - 1.0)
            * ((1.0 - retrievability) * self.w(14)).exp()
    }
}

impl Default for MemoryModel {
    fn default() -> Self {
        Self::new(FSRSParameters::default())
    }
}
