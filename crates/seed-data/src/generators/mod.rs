//! Entity generators for seed data.
//!
//! This module provides generators for the documents the backend reads:
//! - [`HotelGenerator`]: Hotels with sequential IDs, prices, stars, and amenities
//! - [`ReviewGenerator`]: Reviews spread uniformly over the generated hotels
//! - [`BookingGenerator`]: Bookings with stay dates and status history
//!
//! Every generator takes the random source as an argument, so a seeded RNG
//! reproduces the same content.

pub mod booking;
pub mod hotel;
pub mod review;

pub use booking::{BookingGenConfig, BookingGenerator, GeneratedBooking};
pub use hotel::{GeneratedHotel, HotelGenConfig, HotelGenerator};
pub use review::{GeneratedReview, ReviewGenConfig, ReviewGenerator};
