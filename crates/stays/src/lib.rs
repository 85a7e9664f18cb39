//! Domain vocabulary shared by the springnext hotel backend and its tooling.
//!
//! The backend stores schema-less documents in MongoDB; this crate pins down
//! the names those documents are written under so that producers (the seeder)
//! and consumers agree on them.

pub mod models;

pub use models::{Amenity, BookingStatus, MealPreference, ParseVariantError, collections};
