//! Scheduling domain models.
//!
//! Core data types for one optimization run: the work orders coming in,
//! the crews available to serve them, and the routes going out.
//!
//! # Lifecycle
//!
//! | Type | Created by | Lives for |
//! |------|-----------|-----------|
//! | `Job` | caller | one request |
//! | `Crew` | caller | one request |
//! | `EnhancedJob` | optimizer | one run |
//! | `Route` | optimizer | one run (returned) |
//! | `HistoricalRecord` | data provider | predictor lifetime |

mod crew;
mod history;
mod job;
mod route;

pub use crew::Crew;
pub use history::HistoricalRecord;
pub use job::{EnhancedJob, Job, Priority, ServiceCategory};
pub use route::Route;
