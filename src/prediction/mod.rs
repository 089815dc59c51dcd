//! Duration prediction.
//!
//! Turns a work order into a fixed-length feature vector and serves a
//! learned duration estimate with an uncertainty band. All model and
//! data irregularities are absorbed here — the optimizer above has no
//! fallback path of its own, so every query returns a usable estimate.

mod features;
mod predictor;

pub use features::{extract_features, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use predictor::{DurationPrediction, DurationPredictor, ModelInfo, TrainingReport};
