//! Input validation for optimization requests.
//!
//! Checks the caller contract before any prediction or packing runs.
//! The greedy pass assumes well-formed numeric fields, so violations
//! fail fast here instead of silently degrading downstream. Detects:
//! - Duplicate job or crew IDs
//! - Non-positive duration estimates and crew-size requirements
//! - Non-positive crew headcounts and hour budgets

use crate::models::{Crew, Job};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs or two crews share the same ID.
    DuplicateId,
    /// A job's duration estimate is zero.
    NonPositiveDuration,
    /// A job's crew-size requirement is zero.
    NonPositiveCrewRequirement,
    /// A crew has no workers.
    NonPositiveHeadcount,
    /// A crew has no hours in its day.
    NonPositiveHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of one optimization request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], crews: &[Crew]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if job.estimated_duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Job '{}' has a zero duration estimate", job.id),
            ));
        }
        if job.crew_size_needed == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCrewRequirement,
                format!("Job '{}' requires a crew of zero", job.id),
            ));
        }
    }

    let mut crew_ids = HashSet::new();
    for crew in crews {
        if !crew_ids.insert(crew.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate crew ID: {}", crew.id),
            ));
        }
        if crew.headcount == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHeadcount,
                format!("Crew '{}' has no workers", crew.id),
            ));
        }
        if crew.available_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!("Crew '{}' has no available hours", crew.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
