//! Seed data generation for springnext.
//!
//! This crate fills the backend's MongoDB database with synthetic hotels,
//! reviews, and bookings for local development and manual testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let settings = MongoSettings::from_env();
//! let config = SeedConfig {
//!     hotel_count: 5,
//!     review_count: 10,
//!     drop_first: true,
//!     ..Default::default()
//! };
//!
//! let summary = run(&settings, &config).await?;
//! ```

pub mod builders;
pub mod config;
pub mod db;
pub mod generators;
pub mod runner;

// Re-export the shared vocabulary
pub use stays::{Amenity, BookingStatus, MealPreference, collections};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioMetrics, ScenarioResult};
    pub use crate::config::{MongoSettings, SeedConfig};
    pub use crate::db::{SeedError, Seeder};
    pub use crate::generators::{BookingGenerator, HotelGenerator, ReviewGenerator};
    pub use crate::runner::{SeedSummary, run};
    pub use crate::{Amenity, BookingStatus, MealPreference, collections};
}
