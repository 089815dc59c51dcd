//! Recommendation strings derived from one run.
//!
//! Ordered, conditionally-included narrative lines for the response
//! payload. The cost-comparison line is always present; the rest
//! appear only when the run gives them something to say.

use crate::models::{EnhancedJob, Route};

/// Routes at or above this many jobs count as running at capacity.
const CAPACITY_JOB_THRESHOLD: usize = 3;

const COST_COMPARISON: &str = "Self-hosted duration model delivers enterprise-grade \
     optimization at $0 ongoing cost vs $200+/month for commercial prediction APIs";

/// Builds the recommendation list for one optimization run.
pub fn recommendations(jobs: &[EnhancedJob], routes: &[Route]) -> Vec<String> {
    let mut lines = Vec::new();

    if !jobs.is_empty() {
        let avg_confidence =
            jobs.iter().map(|j| j.prediction_confidence).sum::<f64>() / jobs.len() as f64;
        lines.push(format!(
            "Duration model predicts job lengths with {avg_confidence:.0}% average confidence, \
             enabling precise resource allocation"
        ));
    }

    let buffer_minutes: u32 = jobs.iter().map(EnhancedJob::buffer_minutes).sum();
    if buffer_minutes > 0 {
        lines.push(format!(
            "Learned estimates identify {buffer_minutes} minutes of daily scheduling buffer, \
             allowing additional service capacity"
        ));
    }

    lines.push(COST_COMPARISON.to_string());

    let crews_at_capacity = routes
        .iter()
        .filter(|r| r.job_count() >= CAPACITY_JOB_THRESHOLD)
        .count();
    if crews_at_capacity > 0 {
        lines.push(format!(
            "{crews_at_capacity} crew(s) operating at optimal capacity - consider expansion \
             to capture additional demand"
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, ServiceCategory};

    fn enhanced(id: &str, original: u32, predicted: u32, confidence: f64) -> EnhancedJob {
        EnhancedJob {
            job: Job::new(id, ServiceCategory::RoutineMowing, original),
            predicted_duration: predicted,
            prediction_confidence: confidence,
            original_estimate: original,
        }
    }

    fn route_of(jobs: Vec<EnhancedJob>) -> Route {
        let work: u32 = jobs.iter().map(|j| j.predicted_duration).sum();
        let count = jobs.len() as u32;
        Route {
            crew_id: "c1".into(),
            crew_name: "C1".into(),
            jobs,
            total_drive_minutes: 25 * count,
            total_work_minutes: work,
            efficiency_score: 70,
            ml_optimized: true,
        }
    }

    #[test]
    fn test_cost_comparison_always_present() {
        let lines = recommendations(&[], &[]);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("$0 ongoing cost"));
    }

    #[test]
    fn test_confidence_line_requires_jobs() {
        let jobs = vec![enhanced("j1", 90, 90, 88.0), enhanced("j2", 90, 90, 92.0)];
        let lines = recommendations(&jobs, &[]);
        assert!(lines[0].contains("90% average confidence"));

        let none = recommendations(&[], &[]);
        assert!(!none.iter().any(|l| l.contains("confidence")));
    }

    #[test]
    fn test_buffer_line_requires_undercutting_prediction() {
        // Model saves 30 minutes on j1 only
        let jobs = vec![enhanced("j1", 120, 90, 90.0), enhanced("j2", 60, 80, 90.0)];
        let lines = recommendations(&jobs, &[]);
        assert!(lines.iter().any(|l| l.contains("30 minutes of daily scheduling buffer")));

        // Model adds time everywhere → no buffer line
        let slower = vec![enhanced("j1", 60, 90, 90.0)];
        let lines = recommendations(&slower, &[]);
        assert!(!lines.iter().any(|l| l.contains("buffer")));
    }

    #[test]
    fn test_capacity_line_requires_busy_route() {
        let busy = route_of(vec![
            enhanced("a", 60, 60, 90.0),
            enhanced("b", 60, 60, 90.0),
            enhanced("c", 60, 60, 90.0),
        ]);
        let quiet = route_of(vec![enhanced("d", 60, 60, 90.0)]);

        let lines = recommendations(&[], &[busy, quiet]);
        assert!(lines.iter().any(|l| l.starts_with("1 crew(s)")));

        let lines = recommendations(&[], &[route_of(vec![])]);
        assert!(!lines.iter().any(|l| l.contains("crew(s)")));
    }

    #[test]
    fn test_line_order() {
        let jobs = vec![enhanced("j1", 120, 90, 90.0)];
        let busy = route_of(vec![
            enhanced("a", 60, 60, 90.0),
            enhanced("b", 60, 60, 90.0),
            enhanced("c", 60, 60, 90.0),
        ]);

        let lines = recommendations(&jobs, &[busy]);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("confidence"));
        assert!(lines[1].contains("buffer"));
        assert!(lines[2].contains("$0 ongoing cost"));
        assert!(lines[3].contains("crew(s)"));
    }
}
