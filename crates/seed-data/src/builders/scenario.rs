//! Fluent builder for constructing seed scenarios.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::config::SeedConfig;
use crate::db::{SeedError, Seeder};
use crate::generators::{
    booking::{BookingGenConfig, BookingGenerator, GeneratedBooking},
    hotel::{GeneratedHotel, HotelGenConfig, HotelGenerator},
    review::{GeneratedReview, ReviewGenConfig, ReviewGenerator},
};

/// Result of building (and optionally seeding) a scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub hotels: Vec<GeneratedHotel>,
    pub reviews: Vec<GeneratedReview>,
    pub bookings: Vec<GeneratedBooking>,
    /// Metrics from scenario generation (populated if metrics tracking enabled).
    pub metrics: Option<ScenarioMetrics>,
}

/// Timing and count metrics from scenario generation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioMetrics {
    /// Time spent generating data (milliseconds).
    pub generation_time_ms: u64,
    /// Time spent seeding database (milliseconds, 0 if build_data used).
    pub seeding_time_ms: u64,
    pub hotel_count: usize,
    pub review_count: usize,
    pub booking_count: usize,
}

/// Builder for hotel/review/booking scenarios.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_hotels(5)
///     .with_reviews(10)
///     .build(&seeder, &mut rng)
///     .await?;
/// ```
pub struct ScenarioBuilder {
    hotel_count: usize,
    hotel_config: HotelGenConfig,

    review_count: usize,
    review_config: ReviewGenConfig,

    booking_count: usize,
    booking_config: BookingGenConfig,

    track_metrics: bool,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a builder with the command-line defaults: 10 hotels, 50 reviews, no bookings.
    pub fn new() -> Self {
        Self {
            hotel_count: 10,
            hotel_config: HotelGenConfig::default(),
            review_count: 50,
            review_config: ReviewGenConfig::default(),
            booking_count: 0,
            booking_config: BookingGenConfig::default(),
            track_metrics: false,
        }
    }

    /// Creates a builder with the counts of a seeding run.
    pub fn from_config(config: &SeedConfig) -> Self {
        Self::new()
            .with_hotels(config.hotel_count)
            .with_reviews(config.review_count)
            .with_bookings(config.booking_count)
    }

    /// A small data set with every collection populated, for local UI work.
    pub fn demo() -> Self {
        Self::new().with_hotels(20).with_reviews(100).with_bookings(30)
    }

    /// Sets the number of hotels to generate.
    pub fn with_hotels(mut self, count: usize) -> Self {
        self.hotel_count = count;
        self
    }

    /// Sets the hotel generation configuration.
    pub fn with_hotel_config(mut self, config: HotelGenConfig) -> Self {
        self.hotel_config = config;
        self
    }

    /// Sets the number of reviews to generate.
    pub fn with_reviews(mut self, count: usize) -> Self {
        self.review_count = count;
        self
    }

    /// Sets the review generation configuration.
    pub fn with_review_config(mut self, config: ReviewGenConfig) -> Self {
        self.review_config = config;
        self
    }

    /// Sets the number of bookings to generate.
    pub fn with_bookings(mut self, count: usize) -> Self {
        self.booking_count = count;
        self
    }

    /// Sets the booking generation configuration.
    pub fn with_booking_config(mut self, config: BookingGenConfig) -> Self {
        self.booking_config = config;
        self
    }

    /// Enables metrics tracking.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Checks that reviews and bookings have hotels to reference.
    pub fn validate(&self) -> Result<(), SeedError> {
        SeedConfig {
            hotel_count: self.hotel_count,
            review_count: self.review_count,
            booking_count: self.booking_count,
            ..Default::default()
        }
        .validate()
    }

    /// Builds the scenario (generates data but doesn't seed database).
    pub fn build_data(&self, rng: &mut impl Rng) -> Result<ScenarioResult, SeedError> {
        self.validate()?;
        let start_time = Instant::now();

        let hotels = self.generate_hotels(rng);
        let reviews = self.generate_reviews(rng);
        let bookings = self.generate_bookings(&hotels, rng);

        let metrics = self.track_metrics.then(|| ScenarioMetrics {
            generation_time_ms: start_time.elapsed().as_millis() as u64,
            seeding_time_ms: 0,
            hotel_count: hotels.len(),
            review_count: reviews.len(),
            booking_count: bookings.len(),
        });

        Ok(ScenarioResult {
            hotels,
            reviews,
            bookings,
            metrics,
        })
    }

    /// Builds and seeds the scenario into the database.
    ///
    /// Each kind is generated and inserted before the next one is generated,
    /// so a failure part-way leaves the earlier collections populated.
    pub async fn build(
        self,
        seeder: &Seeder,
        rng: &mut impl Rng,
    ) -> Result<ScenarioResult, SeedError> {
        self.validate()?;

        let mut generation = std::time::Duration::ZERO;
        let mut seeding = std::time::Duration::ZERO;

        let started = Instant::now();
        let hotels = self.generate_hotels(rng);
        generation += started.elapsed();

        let started = Instant::now();
        seeder.seed_hotels(&hotels).await?;
        seeding += started.elapsed();

        let started = Instant::now();
        let reviews = self.generate_reviews(rng);
        generation += started.elapsed();

        let started = Instant::now();
        seeder.seed_reviews(&reviews).await?;
        seeding += started.elapsed();

        let started = Instant::now();
        let bookings = self.generate_bookings(&hotels, rng);
        generation += started.elapsed();

        let started = Instant::now();
        seeder.seed_bookings(&bookings).await?;
        seeding += started.elapsed();

        let metrics = self.track_metrics.then(|| ScenarioMetrics {
            generation_time_ms: generation.as_millis() as u64,
            seeding_time_ms: seeding.as_millis() as u64,
            hotel_count: hotels.len(),
            review_count: reviews.len(),
            booking_count: bookings.len(),
        });

        Ok(ScenarioResult {
            hotels,
            reviews,
            bookings,
            metrics,
        })
    }

    fn generate_hotels(&self, rng: &mut impl Rng) -> Vec<GeneratedHotel> {
        HotelGenerator::with_config(self.hotel_config.clone())
            .generate_batch(self.hotel_count, rng)
    }

    fn generate_reviews(&self, rng: &mut impl Rng) -> Vec<GeneratedReview> {
        ReviewGenerator::with_config(self.review_config.clone()).generate_batch(
            self.review_count,
            self.hotel_count,
            rng,
        )
    }

    fn generate_bookings(
        &self,
        hotels: &[GeneratedHotel],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedBooking> {
        BookingGenerator::with_config(self.booking_config.clone()).generate_batch(
            self.booking_count,
            hotels,
            rng,
        )
    }
}
