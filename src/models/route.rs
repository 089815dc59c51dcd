//! Route (crew-day solution) model.
//!
//! A route is the ordered set of jobs one crew takes for the day,
//! with aggregate time metrics. Job order is assignment order, not
//! travel order — real turn-by-turn sequencing is outside the core.

use serde::{Deserialize, Serialize};

use super::EnhancedJob;

/// Jobs assigned to one crew for one scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// The crew this route belongs to.
    pub crew_id: String,
    /// Crew display name (denormalized for reporting).
    pub crew_name: String,
    /// Assigned jobs in acceptance order.
    pub jobs: Vec<EnhancedJob>,
    /// Aggregate inter-job travel (minutes).
    pub total_drive_minutes: u32,
    /// Sum of predicted durations of assigned jobs (minutes).
    pub total_work_minutes: u32,
    /// Crew-utilization score, 70–95.
    pub efficiency_score: u32,
    /// Whether learned durations were used for packing.
    pub ml_optimized: bool,
}

impl Route {
    /// Number of assigned jobs.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Work time formatted as `"{hours}h {minutes}m"`.
    pub fn total_work_time(&self) -> String {
        format!(
            "{}h {}m",
            self.total_work_minutes / 60,
            self.total_work_minutes % 60
        )
    }

    /// Drive time formatted as `"{n} minutes"`.
    pub fn total_drive_time(&self) -> String {
        format!("{} minutes", self.total_drive_minutes)
    }
}
