//! Crew scheduling for field-service work orders.
//!
//! Assigns lawn/landscaping jobs to crews with limited daily capacity,
//! substituting a learned duration estimate for the human-entered one.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `EnhancedJob`, `Crew`, `Route`,
//!   `HistoricalRecord`
//! - **`prediction`**: Feature extraction and the regression-backed
//!   `DurationPredictor`
//! - **`optimizer`**: `ScheduleOptimizer` — greedy crew-day packing,
//!   efficiency metrics, recommendations
//! - **`validation`**: Input integrity checks (duplicate IDs,
//!   non-positive capacities)
//! - **`demo`**: Sample jobs, crews, and historical training data
//!
//! # Architecture
//!
//! The predictor owns the only cross-call state (the fitted model,
//! trained once behind a one-time initialization). The optimizer is a
//! pure pipeline over its inputs: extract features per job, query the
//! predictor, pack jobs into crew-days in a single greedy pass, then
//! derive report metrics from the resulting routes. Prediction failures
//! are absorbed inside the predictor with documented fallbacks; the
//! optimizer never sees them.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Breiman (2001), "Random Forests"

pub mod demo;
pub mod models;
pub mod optimizer;
pub mod prediction;
pub mod validation;
