//! Historical observation model.
//!
//! One completed job reduced to the fixed feature vector the duration
//! model trains on, paired with the duration actually worked. The core
//! does not define where these come from — any provider that yields an
//! ordered sequence of records will do.

use serde::{Deserialize, Serialize};

use crate::prediction::FeatureVector;

/// An observed (features, duration) training pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// `[property_sqft, tree_count, complexity_score, crew_size]`.
    pub features: FeatureVector,
    /// Observed duration in minutes (> 0).
    pub duration_minutes: f64,
}

impl HistoricalRecord {
    /// Creates a record from a feature vector and observed duration.
    pub fn new(features: FeatureVector, duration_minutes: f64) -> Self {
        Self {
            features,
            duration_minutes,
        }
    }
}
