//! Seed MongoDB with hotels and reviews (and optionally bookings).
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed -- --uri mongodb://localhost:27017 --db springnext --hotels 20 --reviews 100
//! ```
//!
//! `MONGODB_URI` and `MONGODB_DATABASE` are used when `--uri` / `--db` are
//! not given; a `.env` file in the working directory is loaded first.

use clap::Parser;
use seed_data::config::{
    DATABASE_ENV, DEFAULT_DATABASE, DEFAULT_URI, MongoSettings, SeedConfig, URI_ENV,
};
use seed_data::runner;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "seed")]
#[command(about = "Seed MongoDB with hotels and reviews", long_about = None)]
#[command(version)]
struct SeedArgs {
    /// MongoDB URI
    #[arg(long, env = URI_ENV, default_value = DEFAULT_URI, hide_env_values = true)]
    uri: String,

    /// Database name
    #[arg(long, env = DATABASE_ENV, default_value = DEFAULT_DATABASE)]
    db: String,

    /// Number of hotels to create
    #[arg(long, default_value_t = 10)]
    hotels: usize,

    /// Total number of reviews to create (distributed across hotels)
    #[arg(long, default_value_t = 50)]
    reviews: usize,

    /// Number of bookings to create against the seeded hotels
    #[arg(long, default_value_t = 0)]
    bookings: usize,

    /// Drop existing hotels and reviews collections before seeding
    #[arg(long)]
    drop: bool,

    /// Seed for the random generator, for reproducible content
    #[arg(long)]
    seed: Option<u64>,

    /// Documents per insert request
    #[arg(long, default_value_t = 1000)]
    batch_size: usize,

    /// Print the run summary as JSON when done
    #[arg(long)]
    json_summary: bool,
}

impl SeedArgs {
    fn settings(&self) -> MongoSettings {
        MongoSettings {
            uri: self.uri.clone(),
            database: self.db.clone(),
        }
    }

    fn config(&self) -> SeedConfig {
        SeedConfig {
            hotel_count: self.hotels,
            review_count: self.reviews,
            booking_count: self.bookings,
            drop_first: self.drop,
            seed: self.seed,
            batch_size: self.batch_size,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment win over .env
    dotenvy::dotenv().ok();

    let args = SeedArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let summary = runner::run(&args.settings(), &args.config()).await?;

    if let Some(metrics) = &summary.metrics {
        tracing::info!("  Hotels: {}", summary.hotels);
        tracing::info!("  Reviews: {}", summary.reviews);
        if summary.bookings > 0 {
            tracing::info!("  Bookings: {}", summary.bookings);
        }
        tracing::debug!(
            "  Generation: {}ms, seeding: {}ms",
            metrics.generation_time_ms,
            metrics.seeding_time_ms
        );
    }

    if args.json_summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
