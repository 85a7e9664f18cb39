//! Fluent builder APIs for seed scenarios.
//!
//! The [`ScenarioBuilder`] composes the hotel, review, and booking
//! generators into one data set and optionally seeds it.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
