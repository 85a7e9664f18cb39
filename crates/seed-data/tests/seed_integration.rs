//! Integration tests for seeding a live MongoDB.
//!
//! These tests verify end-to-end functionality including:
//! - Hotel and review counts and ID ranges after a run
//! - `--drop` leaving only the freshly seeded documents
//! - Rerunning without drop duplicating the hotel ID sequence
//! - Bookings referencing seeded hotels
//!
//! To run these tests, you need a reachable MongoDB and `MONGODB_URI` set.
//!
//! Run with: `MONGODB_URI=mongodb://localhost:27017 cargo nextest run -p seed-data seed_integration`
//!
//! Note: Each test seeds its own throwaway database and drops it afterwards,
//! so they can safely run against a development server.

use std::collections::HashSet;
use std::env;

use bson::{Document, doc};
use futures_util::TryStreamExt;
use mongodb::Database;
use seed_data::prelude::*;
use uuid::Uuid;

/// Settings for a fresh database, skipping tests if MONGODB_URI is not set.
fn get_test_settings() -> Option<MongoSettings> {
    match env::var("MONGODB_URI") {
        Ok(uri) => Some(MongoSettings {
            uri,
            database: format!("seed_test_{}", Uuid::new_v4().simple()),
        }),
        Err(_) => {
            eprintln!("Skipping test: MONGODB_URI not set");
            None
        }
    }
}

async fn connect(settings: &MongoSettings) -> Database {
    Seeder::connect(settings)
        .await
        .expect("client options should parse")
        .database()
        .clone()
}

async fn all_docs(db: &Database, name: &str) -> Vec<Document> {
    db.collection::<Document>(name)
        .find(doc! {})
        .await
        .unwrap()
        .try_collect()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_seed_hotels_and_reviews() {
    let Some(settings) = get_test_settings() else {
        return;
    };
    let db = connect(&settings).await;

    let config = SeedConfig {
        hotel_count: 5,
        review_count: 10,
        drop_first: true,
        seed: Some(12345),
        ..Default::default()
    };
    let summary = run(&settings, &config).await.unwrap();

    assert_eq!(summary.hotels, 5);
    assert_eq!(summary.reviews, 10);
    assert_eq!(summary.dropped, ["hotels", "reviews"]);

    let hotels = all_docs(&db, collections::HOTELS).await;
    let mut ids: Vec<i64> = hotels.iter().map(|h| h.get_i64("hotelId").unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    for hotel in &hotels {
        let stars = hotel.get_i32("stars").unwrap();
        assert!((2..=5).contains(&stars));

        let price = hotel.get_f64("price_per_night").unwrap();
        assert!((40.0..=450.0).contains(&price));

        let amenities: Vec<&str> = hotel
            .get_array("amenities")
            .unwrap()
            .iter()
            .map(|a| a.as_str().unwrap())
            .collect();
        let distinct: HashSet<_> = amenities.iter().collect();
        assert!((2..=5).contains(&amenities.len()));
        assert_eq!(distinct.len(), amenities.len());
        assert!(amenities.iter().all(|a| a.parse::<Amenity>().is_ok()));
    }

    let reviews = all_docs(&db, collections::REVIEWS).await;
    assert_eq!(reviews.len(), 10);
    for review in &reviews {
        assert!((1..=5).contains(&review.get_i64("hotelId").unwrap()));
        assert!((1..=5).contains(&review.get_i32("rating").unwrap()));
    }

    db.drop().await.unwrap();
}

#[tokio::test]
async fn test_drop_replaces_previous_data() {
    let Some(settings) = get_test_settings() else {
        return;
    };
    let db = connect(&settings).await;

    let first = SeedConfig {
        hotel_count: 8,
        review_count: 20,
        ..Default::default()
    };
    run(&settings, &first).await.unwrap();

    let second = SeedConfig {
        hotel_count: 3,
        review_count: 4,
        drop_first: true,
        ..Default::default()
    };
    run(&settings, &second).await.unwrap();

    let seeder = Seeder::new(db.clone());
    assert_eq!(seeder.count(collections::HOTELS).await.unwrap(), 3);
    assert_eq!(seeder.count(collections::REVIEWS).await.unwrap(), 4);

    db.drop().await.unwrap();
}

#[tokio::test]
async fn test_rerun_without_drop_duplicates_ids() {
    let Some(settings) = get_test_settings() else {
        return;
    };
    let db = connect(&settings).await;

    let config = SeedConfig {
        hotel_count: 2,
        review_count: 0,
        ..Default::default()
    };
    run(&settings, &config).await.unwrap();
    run(&settings, &config).await.unwrap();

    let hotels = all_docs(&db, collections::HOTELS).await;
    let mut ids: Vec<i64> = hotels.iter().map(|h| h.get_i64("hotelId").unwrap()).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 1, 2, 2]);

    let seeder = Seeder::new(db.clone());
    assert_eq!(seeder.count(collections::REVIEWS).await.unwrap(), 0);

    db.drop().await.unwrap();
}

#[tokio::test]
async fn test_small_batches_and_bookings() {
    let Some(settings) = get_test_settings() else {
        return;
    };
    let db = connect(&settings).await;

    let config = SeedConfig {
        hotel_count: 4,
        review_count: 9,
        booking_count: 6,
        drop_first: true,
        batch_size: 2,
        ..Default::default()
    };
    let summary = run(&settings, &config).await.unwrap();
    assert_eq!(summary.dropped, ["hotels", "reviews", "bookings"]);

    let seeder = Seeder::new(db.clone());
    assert_eq!(seeder.count(collections::REVIEWS).await.unwrap(), 9);

    let bookings = all_docs(&db, collections::BOOKINGS).await;
    assert_eq!(bookings.len(), 6);
    for booking in &bookings {
        let hotel_id: i64 = booking.get_str("hotelId").unwrap().parse().unwrap();
        assert!((1..=4).contains(&hotel_id));
        assert!(booking.get_str("status").unwrap().parse::<BookingStatus>().is_ok());
    }

    db.drop().await.unwrap();
}

#[tokio::test]
async fn test_zero_hotels_with_reviews_is_rejected() {
    let Some(settings) = get_test_settings() else {
        return;
    };
    let db = connect(&settings).await;

    let config = SeedConfig {
        hotel_count: 0,
        review_count: 5,
        ..Default::default()
    };
    let err = run(&settings, &config).await.unwrap_err();
    assert!(matches!(err, SeedError::InvalidConfig(_)));

    // Nothing was written
    let names = db.list_collection_names().await.unwrap();
    assert!(names.is_empty());
}
