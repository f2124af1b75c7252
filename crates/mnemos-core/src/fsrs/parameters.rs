//! FSRS parameter set
//!
//! The 19 model weights plus the two scheduling tunables. A parameter set is
//! validated once at construction and never changes afterwards, so a single
//! instance can be shared freely between schedulers and threads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{FsrsError, Result};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Number of model weights
pub const WEIGHT_COUNT: usize = 19;

/// Default weights (versioned constant, reproduced bit-for-bit)
pub const DEFAULT_WEIGHTS: [f64; WEIGHT_COUNT] = [
    0.4072, 1.1829, 3.1262, 15.4722, 7.2102, 0.5316, 1.0651, 0.0234, 1.616, 0.1544, 1.0824,
    1.9813, 0.0953, 0.2975, 2.2042, 0.2407, 2.9466, 0.5034, 0.6567,
];

/// Default target probability of recall
pub const DEFAULT_RETENTION: f64 = 0.9;

/// Default upper bound on any scheduled interval, in days (~100 years)
pub const DEFAULT_MAXIMUM_INTERVAL: u32 = 36500;

// ============================================================================
// PARAMETERS
// ============================================================================

/// Validated FSRS configuration
///
/// Serializes with camelCase keys (`w`, `requestRetention`,
/// `maximumInterval`). Deserialization goes through the same validation as
/// [`FSRSParameters::new`], and every key may be omitted to take its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ParameterDocument")]
pub struct FSRSParameters {
    w: [f64; WEIGHT_COUNT],
    request_retention: f64,
    maximum_interval: u32,
}

/// Raw, unvalidated parameter document as it appears in config files
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ParameterDocument {
    w: Option<Vec<f64>>,
    request_retention: Option<f64>,
    maximum_interval: Option<u32>,
}

impl TryFrom<ParameterDocument> for FSRSParameters {
    type Error = FsrsError;

    fn try_from(doc: ParameterDocument) -> Result<Self> {
        Self::new(doc.w, doc.request_retention, doc.maximum_interval)
    }
}

impl FSRSParameters {
    /// Build a parameter set, filling omitted values with the defaults.
    ///
    /// # Errors
    ///
    /// - [`FsrsError::InvalidWeights`] if `w` is supplied with a length other than 19
    /// - [`FsrsError::InvalidRetention`] if `request_retention` is not in (0, 1)
    /// - [`FsrsError::InvalidMaximumInterval`] if `maximum_interval` is 0
    pub fn new(
        w: Option<Vec<f64>>,
        request_retention: Option<f64>,
        maximum_interval: Option<u32>,
    ) -> Result<Self> {
        let w = match w {
            Some(values) => {
                let actual = values.len();
                <[f64; WEIGHT_COUNT]>::try_from(values).map_err(|_| {
                    tracing::warn!(actual, "Rejected FSRS weight vector");
                    FsrsError::InvalidWeights {
                        expected: WEIGHT_COUNT,
                        actual,
                    }
                })?
            }
            None => DEFAULT_WEIGHTS,
        };

        let request_retention = request_retention.unwrap_or(DEFAULT_RETENTION);
        // Also rejects NaN
        if !(request_retention > 0.0 && request_retention < 1.0) {
            tracing::warn!(request_retention, "Rejected FSRS request retention");
            return Err(FsrsError::InvalidRetention(request_retention));
        }

        let maximum_interval = maximum_interval.unwrap_or(DEFAULT_MAXIMUM_INTERVAL);
        if maximum_interval == 0 {
            tracing::warn!("Rejected FSRS maximum interval of 0 days");
            return Err(FsrsError::InvalidMaximumInterval(maximum_interval));
        }

        Ok(Self {
            w,
            request_retention,
            maximum_interval,
        })
    }

    /// Parameter set with custom weights and default tunables
    pub fn with_weights(w: Vec<f64>) -> Result<Self> {
        Self::new(Some(w), None, None)
    }

    /// Parse a JSON parameter document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: ParameterDocument = serde_json::from_str(json)?;
        Self::try_from(doc)
    }

    /// Load a JSON parameter document from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let params = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            request_retention = params.request_retention,
            maximum_interval = params.maximum_interval,
            "Loaded FSRS parameters"
        );
        Ok(params)
    }

    /// All 19 weights
    pub fn weights(&self) -> &[f64; WEIGHT_COUNT] {
        &self.w
    }

    /// Single weight by index. Panics if `index >= 19`.
    #[inline]
    pub fn weight(&self, index: usize) -> f64 {
        self.w[index]
    }

    /// Target probability of recall
    pub fn request_retention(&self) -> f64 {
        self.request_retention
    }

    /// Upper bound on scheduled intervals, in days
    pub fn maximum_interval(&self) -> u32 {
        self.maximum_interval
    }
}

impl Default for FSRSParameters {
    fn default() -> Self {
        Self {
            w: DEFAULT_WEIGHTS,
            request_retention: DEFAULT_RETENTION,
            maximum_interval: DEFAULT_MAXIMUM_INTERVAL,
        }
    }
}
