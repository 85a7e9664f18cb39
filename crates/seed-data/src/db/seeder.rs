//! Database seeding utilities.

use bson::{DateTime, Document, doc};
use mongodb::{Client, Collection, Database};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::MongoSettings;
use crate::generators::{GeneratedBooking, GeneratedHotel, GeneratedReview};
use stays::collections;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Converts a generated hotel into its stored document shape.
pub fn hotel_document(hotel: &GeneratedHotel) -> Document {
    doc! {
        "hotelId": hotel.hotel_id,
        "name": hotel.name.clone(),
        "city": hotel.city.clone(),
        "country": hotel.country.clone(),
        "description": hotel.description.clone(),
        "price_per_night": hotel.price_per_night,
        "stars": hotel.stars,
        "amenities": hotel.amenities.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
        "createdAt": DateTime::from_time_0_3(hotel.created_at),
    }
}

/// Converts a generated review into its stored document shape.
pub fn review_document(review: &GeneratedReview) -> Document {
    doc! {
        "hotelId": review.hotel_id,
        "userName": review.user_name.clone(),
        "rating": review.rating,
        "text": review.text.clone(),
        "createdAt": DateTime::from_time_0_3(review.created_at),
    }
}

/// Converts a generated booking into its stored document shape.
pub fn booking_document(booking: &GeneratedBooking) -> Document {
    doc! {
        "userId": booking.user_id.to_string(),
        "userEmail": booking.user_email.clone(),
        "hotelId": booking.hotel_id.clone(),
        "hotelName": booking.hotel_name.clone(),
        "fullName": booking.full_name.clone(),
        "email": booking.email.clone(),
        "phone": booking.phone.clone(),
        "checkIn": booking.check_in.to_string(),
        "checkOut": booking.check_out.to_string(),
        "nights": booking.nights,
        "rooms": booking.rooms,
        "adults": booking.adults,
        "children": booking.children,
        "pricePerNight": booking.price_per_night,
        "totalPrice": booking.total_price,
        "mealPreference": booking.meal_preference.as_str(),
        "specialRequests": booking.special_requests.clone(),
        "status": booking.status.as_str(),
        "bookingDate": DateTime::from_time_0_3(booking.booking_date),
        "cancellationDate": booking.cancellation_date.map(DateTime::from_time_0_3),
        "cancellationReason": booking.cancellation_reason.clone(),
    }
}

/// Database seeder for inserting generated data.
pub struct Seeder {
    db: Database,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder writing into the given database.
    pub fn new(db: Database) -> Self {
        Self {
            db,
            batch_size: 1000,
        }
    }

    /// Creates a client for `settings.uri` and selects `settings.database`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces as an
    /// error from the first operation rather than from this call.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, SeedError> {
        let client = Client::with_uri_str(&settings.uri).await?;
        Ok(Self::new(client.database(&settings.database)))
    }

    /// Sets the batch size for bulk operations.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Drops the given collections. Missing collections are not an error.
    pub async fn drop_collections(&self, names: &[&str]) -> Result<(), SeedError> {
        let quoted: Vec<String> = names.iter().map(|n| format!("'{n}'")).collect();
        info!("Dropping existing collections {}...", quoted.join(" and "));

        for name in names {
            self.collection(name).drop().await?;
        }

        Ok(())
    }

    /// Seeds hotels into the `hotels` collection. Returns the number inserted.
    pub async fn seed_hotels(&self, hotels: &[GeneratedHotel]) -> Result<usize, SeedError> {
        let docs = hotels.iter().map(hotel_document).collect();
        self.insert_documents(collections::HOTELS, docs).await
    }

    /// Seeds reviews into the `reviews` collection. Returns the number inserted.
    pub async fn seed_reviews(&self, reviews: &[GeneratedReview]) -> Result<usize, SeedError> {
        let docs = reviews.iter().map(review_document).collect();
        self.insert_documents(collections::REVIEWS, docs).await
    }

    /// Seeds bookings into the `bookings` collection. Returns the number inserted.
    pub async fn seed_bookings(&self, bookings: &[GeneratedBooking]) -> Result<usize, SeedError> {
        let docs = bookings.iter().map(booking_document).collect();
        self.insert_documents(collections::BOOKINGS, docs).await
    }

    /// Inserts documents in `batch_size` chunks. Empty input is skipped
    /// without touching the database.
    async fn insert_documents(&self, name: &str, docs: Vec<Document>) -> Result<usize, SeedError> {
        if docs.is_empty() {
            return Ok(0);
        }

        info!("Inserting {} {}...", docs.len(), name);

        let collection = self.collection(name);
        let mut inserted = 0;
        for chunk in docs.chunks(self.batch_size) {
            let result = collection.insert_many(chunk).await?;
            inserted += result.inserted_ids.len();

            if inserted < docs.len() {
                debug!("  Inserted {}/{} {}", inserted, docs.len(), name);
            }
        }

        Ok(inserted)
    }

    /// Counts all documents in a collection.
    pub async fn count(&self, name: &str) -> Result<u64, SeedError> {
        Ok(self.collection(name).count_documents(doc! {}).await?)
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }

    /// Returns a reference to the database for advanced usage.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
