//! Schedule optimization.
//!
//! Packs enhanced jobs into crew-days and derives report metrics from
//! the packing.
//!
//! # Pipeline
//!
//! 1. **`engine`**: validate inputs, enhance each job with a learned
//!    duration, orchestrate the stages below
//! 2. **`greedy`**: single-pass crew-by-crew packing under skill-fit
//!    ordering and hour budgets
//! 3. **`metrics`**: `EfficiencyReport` — derived efficiency/savings
//!    figures for one run
//! 4. **`insights`**: human-readable recommendation strings

mod engine;
mod greedy;
mod insights;
mod metrics;

pub use engine::{OptimizationResult, ScheduleOptimizer};
pub use greedy::{assign_jobs, skill_fit, TRAVEL_MINUTES};
pub use insights::recommendations;
pub use metrics::EfficiencyReport;
