//! Greedy crew-day packing.
//!
//! # Algorithm
//!
//! 1. Crews are visited in input order — the first crew gets first
//!    pick of high-value jobs.
//! 2. Per crew, eligible jobs (headcount fits, still unassigned) are
//!    sorted by skill fit, then high priority, stable for true ties.
//! 3. The sorted list is walked once, accepting every job that still
//!    fits the crew's minute budget including fixed inter-job travel.
//!
//! A single forward pass per crew, no backtracking: a crew's route is
//! final once built. Acceptance removes a job from the shared pool;
//! rejection leaves it available to later crews. Jobs no crew can fit
//! are silently left unassigned.
//!
//! # Complexity
//! O(c · n log n) where c=crews, n=jobs.

use crate::models::{Crew, EnhancedJob, Job, Route};

/// Fixed inter-job travel estimate (minutes). Stands in for a real
/// distance oracle.
pub const TRAVEL_MINUTES: u32 = 25;

/// Skill-fit score when the crew carries the required capability.
const FULL_MATCH: f64 = 1.0;
/// Skill-fit score when it does not.
const PARTIAL_MATCH: f64 = 0.5;

/// Utilization score parameters: 70 base + 8 per job, saturating at 95.
const EFFICIENCY_BASE: u32 = 70;
const EFFICIENCY_PER_JOB: u32 = 8;
const EFFICIENCY_CAP: u32 = 95;

/// Scores how well a crew's capabilities match a job's category.
///
/// 1.0 when the crew carries the skill the service category requires,
/// 0.5 otherwise — a partial match keeps the job schedulable by a
/// generalist crew at lower preference.
pub fn skill_fit(job: &Job, crew: &Crew) -> f64 {
    if crew.has_skill(job.category.required_skill()) {
        FULL_MATCH
    } else {
        PARTIAL_MATCH
    }
}

/// Packs jobs into one route per crew, in crew input order.
pub fn assign_jobs(jobs: &[EnhancedJob], crews: &[Crew]) -> Vec<Route> {
    // Shared pool as an explicit mask: acceptance flips a flag, so the
    // single-pass contract never mutates a list mid-iteration.
    let mut assigned = vec![false; jobs.len()];
    let mut routes = Vec::with_capacity(crews.len());

    for crew in crews {
        let mut candidates: Vec<(usize, f64)> = jobs
            .iter()
            .enumerate()
            .filter(|(i, j)| !assigned[*i] && j.job.crew_size_needed <= crew.headcount)
            .map(|(i, j)| (i, skill_fit(&j.job, crew)))
            .collect();

        // Primary: skill fit descending. Tie-break: high priority first.
        // Stable sort keeps source order for true ties.
        candidates.sort_by(|a, b| {
            b.1.total_cmp(&a.1).then_with(|| {
                jobs[b.0]
                    .job
                    .priority
                    .is_high()
                    .cmp(&jobs[a.0].job.priority.is_high())
            })
        });

        let budget = crew.available_minutes();
        let mut used_minutes: u32 = 0;
        let mut route_jobs: Vec<EnhancedJob> = Vec::new();

        for (idx, _fit) in candidates {
            let needed = jobs[idx].predicted_duration + TRAVEL_MINUTES;
            if f64::from(used_minutes + needed) <= budget {
                used_minutes += needed;
                assigned[idx] = true;
                route_jobs.push(jobs[idx].clone());
            }
        }

        let total_work_minutes = route_jobs.iter().map(|j| j.predicted_duration).sum();
        let job_count = route_jobs.len() as u32;
        routes.push(Route {
            crew_id: crew.id.clone(),
            crew_name: crew.name.clone(),
            jobs: route_jobs,
            total_drive_minutes: TRAVEL_MINUTES * job_count,
            total_work_minutes,
            efficiency_score: (EFFICIENCY_BASE + EFFICIENCY_PER_JOB * job_count).min(EFFICIENCY_CAP),
            ml_optimized: true,
        });
    }

    routes
}
