//! Optimization engine.
//!
//! Orchestrates one run: validate inputs, enhance every job with a
//! learned duration, pack jobs into crew-days, then derive the
//! efficiency report and recommendations from the result.
//!
//! The engine assumes the predictor's contract — every query returns a
//! usable estimate — so there is no fallback handling here. Malformed
//! inputs, by contrast, fail fast before any prediction runs.

use serde::Serialize;

use super::greedy::assign_jobs;
use super::insights::recommendations;
use super::metrics::EfficiencyReport;
use crate::models::{Crew, EnhancedJob, Job, Route};
use crate::prediction::{extract_features, DurationPredictor, ModelInfo};
use crate::validation::{validate_input, ValidationError};

/// Full result of one optimization run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Run status indicator.
    pub status: String,
    /// One route per input crew, in input order.
    pub routes: Vec<Route>,
    /// Derived run-level metrics.
    pub efficiency_report: EfficiencyReport,
    /// Ordered narrative recommendations.
    pub recommendations: Vec<String>,
    /// Metadata about the duration model that served this run.
    pub model_info: ModelInfo,
}

/// Greedy schedule optimizer over a learned duration model.
///
/// Owns its predictor (injected at construction); one optimizer can
/// serve many runs, sharing the trained model across them.
///
/// # Example
///
/// ```
/// use crewsched::demo;
/// use crewsched::optimizer::ScheduleOptimizer;
/// use crewsched::prediction::DurationPredictor;
///
/// let predictor = DurationPredictor::new(demo::historical_records());
/// let optimizer = ScheduleOptimizer::new(predictor);
///
/// let result = optimizer
///     .optimize(&demo::sample_jobs(), &demo::sample_crews())
///     .unwrap();
/// assert_eq!(result.status, "success");
/// assert_eq!(result.routes.len(), 3);
/// ```
#[derive(Debug)]
pub struct ScheduleOptimizer {
    predictor: DurationPredictor,
}

impl ScheduleOptimizer {
    /// Creates an optimizer over the given predictor.
    pub fn new(predictor: DurationPredictor) -> Self {
        Self { predictor }
    }

    /// The underlying duration predictor.
    pub fn predictor(&self) -> &DurationPredictor {
        &self.predictor
    }

    /// Runs one optimization over the given jobs and crews.
    ///
    /// Fails fast with the full list of caller-contract violations if
    /// the inputs are malformed; predictor-internal failures never
    /// surface here.
    pub fn optimize(
        &self,
        jobs: &[Job],
        crews: &[Crew],
    ) -> Result<OptimizationResult, Vec<ValidationError>> {
        validate_input(jobs, crews)?;

        let enhanced = self.enhance(jobs);
        let routes = assign_jobs(&enhanced, crews);
        let efficiency_report = EfficiencyReport::calculate(&enhanced, crews, &routes);
        let recommendations = recommendations(&enhanced, &routes);

        Ok(OptimizationResult {
            status: "success".to_string(),
            routes,
            efficiency_report,
            recommendations,
            model_info: self.predictor.model_info(),
        })
    }

    /// Order-preserving 1:1 enhancement. Input jobs are cloned, never
    /// mutated; each copy carries the prediction alongside the
    /// original estimate.
    fn enhance(&self, jobs: &[Job]) -> Vec<EnhancedJob> {
        jobs.iter()
            .map(|job| {
                let prediction = self.predictor.predict(&extract_features(job));
                EnhancedJob {
                    predicted_duration: prediction.minutes,
                    prediction_confidence: prediction.confidence,
                    original_estimate: job.estimated_duration,
                    job: job.clone(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::models::{Priority, ServiceCategory};
    use std::collections::HashSet;

    fn optimizer_with_demo_model() -> ScheduleOptimizer {
        ScheduleOptimizer::new(DurationPredictor::new(demo::historical_records()))
    }

    /// Predictor with no history: predictions come from the linear
    /// heuristic, which tests can compute by hand.
    fn optimizer_with_fallback_model() -> ScheduleOptimizer {
        ScheduleOptimizer::new(DurationPredictor::new(Vec::new()))
    }

    #[test]
    fn test_single_job_single_crew() {
        let jobs = vec![Job::new("j1", ServiceCategory::RoutineMowing, 90)
            .with_priority(Priority::Medium)
            .with_crew_size(2)];
        let crews = vec![Crew::new("c1", 3)
            .with_name("Crew One")
            .with_skill("mowing")
            .with_available_hours(8.0)];

        let result = optimizer_with_demo_model().optimize(&jobs, &crews).unwrap();

        assert_eq!(result.status, "success");
        assert_eq!(result.routes.len(), 1);
        let route = &result.routes[0];
        assert_eq!(route.job_count(), 1);
        assert_eq!(route.crew_id, "c1");
        // Work time reflects the predicted duration, not the estimate
        assert_eq!(route.total_work_minutes, route.jobs[0].predicted_duration);
        assert_eq!(route.jobs[0].original_estimate, 90);
        assert!(result.efficiency_report.efficiency_gain >= 20);
    }

    #[test]
    fn test_overflowing_job_left_unassigned() {
        // Fallback heuristic: 600/20 + 0×15 + 1×30 = 60 minutes.
        // 60 + 25 travel > the crew's 60-minute day → rejected.
        let jobs = vec![Job::new("j1", ServiceCategory::RoutineMowing, 45)
            .with_crew_size(1)
            .with_property_sqft(600.0)
            .with_tree_count(0)];
        let crews = vec![Crew::new("tight", 2)
            .with_skill("mowing")
            .with_available_hours(1.0)];

        let result = optimizer_with_fallback_model().optimize(&jobs, &crews).unwrap();

        assert_eq!(result.routes[0].job_count(), 0);
        assert_eq!(result.routes[0].total_work_minutes, 0);
    }

    #[test]
    fn test_demo_run_respects_invariants() {
        let jobs = demo::sample_jobs();
        let crews = demo::sample_crews();
        let result = optimizer_with_demo_model().optimize(&jobs, &crews).unwrap();

        // One route per crew, in input order
        assert_eq!(result.routes.len(), crews.len());
        for (route, crew) in result.routes.iter().zip(&crews) {
            assert_eq!(route.crew_id, crew.id);
        }

        // No job appears twice, and every routed job came from the input
        let input_ids: HashSet<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        let mut seen = HashSet::new();
        for route in &result.routes {
            for job in &route.jobs {
                assert!(input_ids.contains(job.job.id.as_str()));
                assert!(seen.insert(job.job.id.clone()), "job routed twice");
            }
        }

        // Capacity and headcount hold on every route
        for (route, crew) in result.routes.iter().zip(&crews) {
            let used = route.total_work_minutes + 25 * route.job_count() as u32;
            assert!(f64::from(used) <= crew.available_minutes());
            for job in &route.jobs {
                assert!(job.job.crew_size_needed <= crew.headcount);
            }
        }

        assert!((20..=45).contains(&result.efficiency_report.efficiency_gain));
        assert!((88..=96).contains(&result.efficiency_report.success_probability));
        assert!(result
            .recommendations
            .iter()
            .any(|l| l.contains("$0 ongoing cost")));
    }

    #[test]
    fn test_enhancement_preserves_order_and_originals() {
        let jobs = demo::sample_jobs();
        let optimizer = optimizer_with_demo_model();
        let enhanced = optimizer.enhance(&jobs);

        assert_eq!(enhanced.len(), jobs.len());
        for (e, j) in enhanced.iter().zip(&jobs) {
            assert_eq!(e.job.id, j.id);
            assert_eq!(e.original_estimate, j.estimated_duration);
            assert!(e.predicted_duration >= 30);
            assert!((75.0..=95.0).contains(&e.prediction_confidence));
        }
    }

    #[test]
    fn test_malformed_input_fails_fast() {
        let jobs = vec![Job::new("j1", ServiceCategory::RoutineMowing, 0)];
        let crews = vec![Crew::new("c1", 2)];

        let err = optimizer_with_demo_model()
            .optimize(&jobs, &crews)
            .unwrap_err();
        assert!(!err.is_empty());
    }

    #[test]
    fn test_result_serializes() {
        let result = optimizer_with_demo_model()
            .optimize(&demo::sample_jobs(), &demo::sample_crews())
            .unwrap();

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "success");
        assert!(value["routes"].is_array());
        assert!(value["efficiency_report"]["efficiency_gain"].is_u64());
        assert_eq!(value["model_info"]["model_kind"], "Random Forest Regressor");
    }
}
