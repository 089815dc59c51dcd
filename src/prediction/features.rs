//! Feature extraction for the duration model.
//!
//! Reduces a job to the fixed 4-dimensional vector the model trains
//! and predicts on. Extraction is pure and total: unsurveyed fields
//! fall back to documented derivations, so the same job always yields
//! the same complete vector.

use crate::models::Job;

/// Number of model features.
pub const FEATURE_COUNT: usize = 4;

/// Feature labels, in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] =
    ["property_sqft", "tree_count", "complexity_score", "crew_size"];

/// `[property_sqft, tree_count, complexity_score, crew_size]`.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Minutes-to-sqft ratio used when a property was never surveyed:
/// one minute of estimated work covers roughly this much lawn.
const SQFT_PER_ESTIMATED_MINUTE: f64 = 15.0;

/// Extracts the model feature vector from a job.
///
/// Defaulting rules for unsurveyed fields:
/// - area: `estimated_duration × 15` sqft
/// - tree count: 2 for tree services, 1 otherwise
pub fn extract_features(job: &Job) -> FeatureVector {
    let area = job
        .property_sqft
        .unwrap_or(f64::from(job.estimated_duration) * SQFT_PER_ESTIMATED_MINUTE);
    let tree_count = job
        .tree_count
        .unwrap_or(if job.category.is_tree_service() { 2 } else { 1 });

    [
        area,
        f64::from(tree_count),
        job.category.complexity_score(),
        f64::from(job.crew_size_needed),
    ]
}
