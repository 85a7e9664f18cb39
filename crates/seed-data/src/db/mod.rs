//! Database integration for seeding generated data.
//!
//! The [`Seeder`] writes generated records into MongoDB collections with
//! batched `insertMany` calls and progress reporting.

mod seeder;

pub use seeder::{SeedError, Seeder, booking_document, hotel_document, review_document};
