//! Demo dataset.
//!
//! A small Austin, TX lawn-care operation: seven open work orders,
//! three crews, and eighteen completed jobs for model training. Used
//! by tests as shared fixtures and by external glue for demo
//! responses; the core itself never depends on this data.

use crate::models::{Crew, HistoricalRecord, Job, Priority, ServiceCategory};

/// Seven open work orders across the three core service types.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job::new("job_1", ServiceCategory::RoutineMowing, 90)
            .with_customer("Wilson Family")
            .with_address("1234 Oak Street, Austin TX")
            .with_priority(Priority::Medium)
            .with_crew_size(2)
            .with_property_sqft(1200.0)
            .with_tree_count(2),
        Job::new("job_2", ServiceCategory::LargeCleanup, 240)
            .with_customer("City Parks Department")
            .with_address("Downtown Central Park, Austin TX")
            .with_priority(Priority::High)
            .with_crew_size(3)
            .with_property_sqft(3000.0)
            .with_tree_count(5),
        Job::new("job_3", ServiceCategory::TreeTrimming, 180)
            .with_customer("Johnson Residence")
            .with_address("5678 Pine Avenue, Austin TX")
            .with_priority(Priority::Medium)
            .with_crew_size(2)
            .with_property_sqft(1500.0)
            .with_tree_count(8),
        Job::new("job_4", ServiceCategory::RoutineMowing, 75)
            .with_customer("Martinez Property")
            .with_address("2100 Cedar Lane, Austin TX")
            .with_priority(Priority::Low)
            .with_crew_size(2)
            .with_property_sqft(900.0)
            .with_tree_count(1),
        Job::new("job_5", ServiceCategory::LargeCleanup, 300)
            .with_customer("Sunset Office Complex")
            .with_address("4500 Business Park Dr, Austin TX")
            .with_priority(Priority::High)
            .with_crew_size(3)
            .with_property_sqft(4200.0)
            .with_tree_count(3),
        Job::new("job_6", ServiceCategory::RoutineMowing, 60)
            .with_customer("Thompson Family")
            .with_address("7890 Maple Street, Austin TX")
            .with_priority(Priority::Medium)
            .with_crew_size(1)
            .with_property_sqft(800.0)
            .with_tree_count(1),
        Job::new("job_7", ServiceCategory::TreeTrimming, 210)
            .with_customer("Green Valley HOA")
            .with_address("3300 Valley View Rd, Austin TX")
            .with_priority(Priority::Medium)
            .with_crew_size(2)
            .with_property_sqft(1800.0)
            .with_tree_count(12),
    ]
}

/// Three crews with staggered skills and hour budgets.
pub fn sample_crews() -> Vec<Crew> {
    vec![
        Crew::new("crew_alpha", 3)
            .with_name("Team Alpha")
            .with_skill("mowing")
            .with_skill("cleanup")
            .with_skill("tree_work")
            .with_skill("landscaping")
            .with_available_hours(8.0)
            .with_start_location("Main Office"),
        Crew::new("crew_bravo", 2)
            .with_name("Team Bravo")
            .with_skill("mowing")
            .with_skill("cleanup")
            .with_skill("basic_trimming")
            .with_available_hours(8.0)
            .with_start_location("North Depot"),
        Crew::new("crew_charlie", 2)
            .with_name("Team Charlie")
            .with_skill("mowing")
            .with_skill("landscaping")
            .with_available_hours(6.0)
            .with_start_location("South Station"),
    ]
}

/// Eighteen completed jobs: `[sqft, trees, complexity, crew]` → minutes.
pub fn historical_records() -> Vec<HistoricalRecord> {
    [
        ([800.0, 1.0, 1.0, 2.0], 75.0),
        ([1200.0, 2.0, 2.0, 2.0], 90.0),
        ([2000.0, 0.0, 1.0, 3.0], 120.0),
        ([1500.0, 4.0, 3.0, 2.0], 180.0),
        ([3000.0, 3.0, 2.0, 3.0], 200.0),
        ([1000.0, 6.0, 4.0, 2.0], 240.0),
        ([2500.0, 2.0, 1.0, 3.0], 150.0),
        ([1800.0, 5.0, 3.0, 3.0], 210.0),
        ([900.0, 1.0, 1.0, 2.0], 70.0),
        ([1600.0, 3.0, 2.0, 2.0], 110.0),
        ([2200.0, 1.0, 2.0, 3.0], 130.0),
        ([1300.0, 7.0, 4.0, 2.0], 260.0),
        ([2800.0, 2.0, 1.0, 3.0], 160.0),
        ([1100.0, 4.0, 3.0, 2.0], 190.0),
        ([1900.0, 1.0, 1.0, 2.0], 95.0),
        ([4200.0, 5.0, 3.0, 3.0], 300.0),
        ([800.0, 1.0, 1.0, 1.0], 60.0),
        ([1800.0, 12.0, 4.0, 2.0], 210.0),
    ]
    .into_iter()
    .map(|(features, minutes)| HistoricalRecord::new(features, minutes))
    .collect()
}
