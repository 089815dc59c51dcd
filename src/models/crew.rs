//! Crew model.
//!
//! A crew is the unit of capacity: a named team with a headcount, a
//! set of capability tags, and a daily hour budget. Crews are supplied
//! per request and never mutated by the optimizer.

use serde::{Deserialize, Serialize};

/// A service crew available for one scheduling day.
///
/// # Invariants
/// `headcount` ≥ 1 and `available_hours` > 0 (checked by
/// [`crate::validation::validate_input`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crew {
    /// Unique crew identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of workers on the crew.
    pub headcount: u32,
    /// Capability tags (e.g., "mowing", "tree_work").
    pub skills: Vec<String>,
    /// Hours available in the scheduling day.
    pub available_hours: f64,
    /// Where the crew starts its day (opaque to the core).
    pub start_location: String,
}

impl Crew {
    /// Creates a new crew with the given ID and headcount.
    pub fn new(id: impl Into<String>, headcount: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            headcount,
            skills: Vec::new(),
            available_hours: 8.0,
            start_location: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a capability tag.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Sets the daily hour budget.
    pub fn with_available_hours(mut self, hours: f64) -> Self {
        self.available_hours = hours;
        self
    }

    /// Sets the start location.
    pub fn with_start_location(mut self, location: impl Into<String>) -> Self {
        self.start_location = location.into();
        self
    }

    /// Whether this crew carries a given capability tag.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s == name)
    }

    /// Daily budget in minutes.
    #[inline]
    pub fn available_minutes(&self) -> f64 {
        self.available_hours * 60.0
    }
}
