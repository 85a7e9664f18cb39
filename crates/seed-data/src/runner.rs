//! End-to-end seeding run: connect, optionally drop, generate and insert.

use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::info;

use crate::builders::{ScenarioBuilder, ScenarioMetrics};
use crate::config::{MongoSettings, SeedConfig};
use crate::db::{SeedError, Seeder};
use stays::collections;

/// What a seeding run wrote, and where.
#[derive(Debug, Clone, Serialize)]
pub struct SeedSummary {
    /// Connection string with any password redacted.
    pub uri: String,
    pub database: String,
    pub dropped: Vec<String>,
    pub hotels: usize,
    pub reviews: usize,
    pub bookings: usize,
    pub seed: Option<u64>,
    pub metrics: Option<ScenarioMetrics>,
}

/// Collections cleared by `--drop`. `bookings` is only touched when bookings are seeded.
pub fn collections_to_drop(config: &SeedConfig) -> Vec<&'static str> {
    let mut names = vec![collections::HOTELS, collections::REVIEWS];
    if config.booking_count > 0 {
        names.push(collections::BOOKINGS);
    }
    names
}

/// Seeds `settings.database` according to `config`.
///
/// Steps run strictly in order and the first failure aborts the run; nothing
/// already written is rolled back.
pub async fn run(settings: &MongoSettings, config: &SeedConfig) -> Result<SeedSummary, SeedError> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let seeder = Seeder::connect(settings)
        .await?
        .with_batch_size(config.batch_size);
    info!(database = %settings.database, "Connected to {}", settings.redacted_uri());

    let dropped = if config.drop_first {
        let names = collections_to_drop(config);
        seeder.drop_collections(&names).await?;
        names
    } else {
        Vec::new()
    };

    let result = ScenarioBuilder::from_config(config)
        .with_metrics(true)
        .build(&seeder, &mut rng)
        .await?;

    let summary = SeedSummary {
        uri: settings.redacted_uri(),
        database: settings.database.clone(),
        dropped: dropped.into_iter().map(String::from).collect(),
        hotels: result.hotels.len(),
        reviews: result.reviews.len(),
        bookings: result.bookings.len(),
        seed: config.seed,
        metrics: result.metrics,
    };

    info!(
        "Done. Inserted hotels and reviews into {}/{}",
        summary.uri, summary.database
    );

    Ok(summary)
}
