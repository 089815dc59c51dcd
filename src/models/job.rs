//! Job (work order) model.
//!
//! A job is a single service visit to be scheduled: mowing a lawn,
//! clearing a property, trimming trees. Jobs arrive with a
//! human-entered duration estimate; the optimizer replaces it with a
//! learned estimate before packing jobs into crew-days.

use serde::{Deserialize, Serialize};

/// Service classification for a job.
///
/// Drives the skill a crew must carry and the complexity score fed to
/// the duration model. Categories outside the three core services use
/// `Other` with a free-form label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    /// Recurring lawn mowing visit.
    RoutineMowing,
    /// Seasonal or storm cleanup of a property.
    LargeCleanup,
    /// Tree pruning and removal work.
    TreeTrimming,
    /// Domain-specific service with a custom label.
    Other(String),
}

impl ServiceCategory {
    /// Canonical snake_case label. `Other` returns its own label.
    pub fn name(&self) -> &str {
        match self {
            ServiceCategory::RoutineMowing => "routine_mowing",
            ServiceCategory::LargeCleanup => "large_cleanup",
            ServiceCategory::TreeTrimming => "tree_trimming",
            ServiceCategory::Other(label) => label,
        }
    }

    /// The capability tag a crew needs to be a full match for this
    /// service. Unmapped categories fall back to the baseline skill.
    pub fn required_skill(&self) -> &'static str {
        match self {
            ServiceCategory::RoutineMowing => "mowing",
            ServiceCategory::LargeCleanup => "cleanup",
            ServiceCategory::TreeTrimming => "tree_work",
            ServiceCategory::Other(_) => "mowing",
        }
    }

    /// Fixed per-category complexity score for the duration model.
    pub fn complexity_score(&self) -> f64 {
        match self {
            ServiceCategory::RoutineMowing => 1.0,
            ServiceCategory::LargeCleanup => 3.0,
            ServiceCategory::TreeTrimming => 4.0,
            ServiceCategory::Other(_) => 2.0,
        }
    }

    /// Whether the category label indicates tree work.
    pub fn is_tree_service(&self) -> bool {
        self.name().contains("tree")
    }
}

/// Scheduling priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Whether this is the tie-breaking `High` level.
    #[inline]
    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High)
    }
}

/// A field-service work order.
///
/// # Invariants
/// `estimated_duration` and `crew_size_needed` are required and
/// positive (checked by [`crate::validation::validate_input`]).
/// Missing `property_sqft`/`tree_count` are derivable from the
/// duration and category during feature extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Customer display name.
    pub customer: String,
    /// Service address (opaque to the core).
    pub address: String,
    /// Service classification.
    pub category: ServiceCategory,
    /// Human-entered duration estimate (minutes, > 0).
    pub estimated_duration: u32,
    /// Scheduling priority.
    pub priority: Priority,
    /// Minimum crew headcount required (> 0).
    pub crew_size_needed: u32,
    /// Property area in square feet, if surveyed.
    pub property_sqft: Option<f64>,
    /// Tree count on the property, if surveyed.
    pub tree_count: Option<u32>,
}

impl Job {
    /// Creates a new job with the given ID and required fields.
    pub fn new(id: impl Into<String>, category: ServiceCategory, estimated_duration: u32) -> Self {
        Self {
            id: id.into(),
            customer: String::new(),
            address: String::new(),
            category,
            estimated_duration,
            priority: Priority::Medium,
            crew_size_needed: 1,
            property_sqft: None,
            tree_count: None,
        }
    }

    /// Sets the customer name.
    pub fn with_customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = customer.into();
        self
    }

    /// Sets the service address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the required crew headcount.
    pub fn with_crew_size(mut self, crew_size_needed: u32) -> Self {
        self.crew_size_needed = crew_size_needed;
        self
    }

    /// Sets the surveyed property area (sqft).
    pub fn with_property_sqft(mut self, sqft: f64) -> Self {
        self.property_sqft = Some(sqft);
        self
    }

    /// Sets the surveyed tree count.
    pub fn with_tree_count(mut self, count: u32) -> Self {
        self.tree_count = Some(count);
        self
    }
}

/// A job enriched with a learned duration estimate.
///
/// Produced once per optimization run as a copy of the input job —
/// callers' jobs are never mutated. Retains the original estimate so
/// reports can compare human and model numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedJob {
    /// The underlying work order.
    pub job: Job,
    /// Model-predicted duration (minutes, ≥ 30).
    pub predicted_duration: u32,
    /// Prediction confidence (percentage, 0–100).
    pub prediction_confidence: f64,
    /// The human-entered estimate retained for comparison (minutes).
    pub original_estimate: u32,
}

impl EnhancedJob {
    /// Minutes the model shaved off the human estimate (0 if it added).
    pub fn buffer_minutes(&self) -> u32 {
        self.original_estimate.saturating_sub(self.predicted_duration)
    }
}
