//! Review generation.

use fake::{
    Fake,
    faker::{lorem::en::Sentence, name::en::Name},
};
use rand::Rng;
use time::OffsetDateTime;

/// Generated review ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedReview {
    /// Sampled hotel ID. Not checked against the database.
    pub hotel_id: i64,
    pub user_name: String,
    pub rating: i32,
    pub text: String,
    pub created_at: OffsetDateTime,
}

/// Configuration for review generation.
#[derive(Debug, Clone)]
pub struct ReviewGenConfig {
    /// Rating bounds (inclusive).
    pub rating_range: (i32, i32),
    /// Approximate number of words in the review text.
    pub words: usize,
}

impl Default for ReviewGenConfig {
    fn default() -> Self {
        Self {
            rating_range: (1, 5),
            words: 20,
        }
    }
}

/// Generates reviews spread uniformly over a range of hotel IDs.
pub struct ReviewGenerator {
    config: ReviewGenConfig,
}

impl ReviewGenerator {
    /// Creates a new review generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ReviewGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ReviewGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single review for the given hotel.
    pub fn generate(&self, hotel_id: i64, rng: &mut impl Rng) -> GeneratedReview {
        let user_name: String = Name().fake_with_rng(rng);
        let words = self.config.words;
        let text: String = Sentence(words..words + 1).fake_with_rng(rng);

        GeneratedReview {
            hotel_id,
            user_name,
            rating: rng.gen_range(self.config.rating_range.0..=self.config.rating_range.1),
            text,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Generates `count` reviews, each referencing a hotel ID sampled with
    /// replacement from `1..=hotel_count`.
    ///
    /// Returns an empty batch when there are no hotels to reference.
    pub fn generate_batch(
        &self,
        count: usize,
        hotel_count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedReview> {
        if hotel_count == 0 {
            return Vec::new();
        }

        (0..count)
            .map(|_| {
                let hotel_id = rng.gen_range(1..=hotel_count as i64);
                self.generate(hotel_id, rng)
            })
            .collect()
    }
}

impl Default for ReviewGenerator {
    fn default() -> Self {
        Self::new()
    }
}
