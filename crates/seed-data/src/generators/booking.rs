//! Booking generation against previously generated hotels.

use fake::{
    Fake,
    faker::{name::en::Name, phone_number::en::PhoneNumber},
};
use rand::Rng;
use rand_distr::{Distribution, Poisson};
use time::{Date, Duration, OffsetDateTime};
use uuid::Uuid;

use stays::{BookingStatus, MealPreference};

use super::hotel::GeneratedHotel;

/// Generated booking ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedBooking {
    pub user_id: Uuid,
    pub user_email: String,
    /// Stored as a string, matching the backend's booking model.
    pub hotel_id: String,
    pub hotel_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: Date,
    pub check_out: Date,
    pub nights: i32,
    pub rooms: i32,
    pub adults: i32,
    pub children: i32,
    pub price_per_night: f64,
    pub total_price: f64,
    pub meal_preference: MealPreference,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub booking_date: OffsetDateTime,
    pub cancellation_date: Option<OffsetDateTime>,
    pub cancellation_reason: Option<String>,
}

/// Configuration for booking generation.
#[derive(Debug, Clone)]
pub struct BookingGenConfig {
    /// Check-in offsets relative to today, in days (inclusive).
    pub check_in_window: (i64, i64),
    /// Average nights beyond the first.
    pub avg_extra_nights: f64,
    /// Probability that a not-yet-completed booking was cancelled.
    pub cancellation_probability: f64,
    /// Probability that the guest left a special request.
    pub special_request_probability: f64,
    /// Maximum days between booking and check-in.
    pub max_lead_days: i64,
}

impl Default for BookingGenConfig {
    fn default() -> Self {
        Self {
            check_in_window: (-90, 120),
            avg_extra_nights: 2.0,
            cancellation_probability: 0.15,
            special_request_probability: 0.3,
            max_lead_days: 60,
        }
    }
}

/// Generates bookings for a set of hotels.
pub struct BookingGenerator {
    config: BookingGenConfig,
}

impl BookingGenerator {
    /// Creates a new booking generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: BookingGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: BookingGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single booking at `hotel`, relative to `now`.
    ///
    /// Stays that ended before today are `COMPLETED`; the rest are `CONFIRMED`
    /// unless they were cancelled.
    pub fn generate(
        &self,
        hotel: &GeneratedHotel,
        now: OffsetDateTime,
        rng: &mut impl Rng,
    ) -> GeneratedBooking {
        let full_name: String = Name().fake_with_rng(rng);
        let email = generate_email(&full_name, rng);
        let phone: String = PhoneNumber().fake_with_rng(rng);

        let today = now.date();
        let (earliest, latest) = self.config.check_in_window;
        let check_in = today + Duration::days(rng.gen_range(earliest..=latest));
        let nights = 1 + self.sample_extra_nights(rng);
        let check_out = check_in + Duration::days(nights as i64);

        let adults = rng.gen_range(1..=4);
        let children = if rng.gen_bool(0.3) {
            rng.gen_range(1..=3)
        } else {
            0
        };
        let rooms = rng.gen_range(1..=(adults + 1) / 2);

        let total_price = round_cents(hotel.price_per_night * nights as f64 * rooms as f64);

        // Booked some time before check-in, but never in the future.
        let lead = Duration::days(rng.gen_range(1..=self.config.max_lead_days.max(1)));
        let booking_date = (check_in.midnight().assume_utc() - lead).min(now);

        let (status, cancellation_date, cancellation_reason) = if check_out < today {
            (BookingStatus::Completed, None, None)
        } else if rng.gen_bool(self.config.cancellation_probability.clamp(0.0, 1.0)) {
            let window = (now - booking_date).whole_hours().max(1);
            let cancelled_at = booking_date + Duration::hours(rng.gen_range(0..=window));
            (
                BookingStatus::Cancelled,
                Some(cancelled_at.min(now)),
                Some(pick(CANCELLATION_REASONS, rng).to_string()),
            )
        } else {
            (BookingStatus::Confirmed, None, None)
        };

        let special_requests = rng
            .gen_bool(self.config.special_request_probability.clamp(0.0, 1.0))
            .then(|| pick(SPECIAL_REQUESTS, rng).to_string());

        let meal_preference = MealPreference::ALL[rng.gen_range(0..MealPreference::ALL.len())];

        GeneratedBooking {
            user_id: uuid::Builder::from_random_bytes(rng.r#gen()).into_uuid(),
            user_email: email.clone(),
            hotel_id: hotel.hotel_id.to_string(),
            hotel_name: hotel.name.clone(),
            full_name,
            email,
            phone,
            check_in,
            check_out,
            nights,
            rooms,
            adults,
            children,
            price_per_night: hotel.price_per_night,
            total_price,
            meal_preference,
            special_requests,
            status,
            booking_date,
            cancellation_date,
            cancellation_reason,
        }
    }

    /// Generates `count` bookings at hotels picked uniformly from `hotels`.
    ///
    /// Returns an empty batch when there are no hotels to book.
    pub fn generate_batch(
        &self,
        count: usize,
        hotels: &[GeneratedHotel],
        rng: &mut impl Rng,
    ) -> Vec<GeneratedBooking> {
        if hotels.is_empty() {
            return Vec::new();
        }

        let now = OffsetDateTime::now_utc();
        (0..count)
            .map(|_| {
                let hotel = &hotels[rng.gen_range(0..hotels.len())];
                self.generate(hotel, now, rng)
            })
            .collect()
    }

    fn sample_extra_nights(&self, rng: &mut impl Rng) -> i32 {
        match Poisson::new(self.config.avg_extra_nights) {
            Ok(poisson) => (poisson.sample(rng) as i32).min(13),
            Err(_) => 0,
        }
    }
}

impl Default for BookingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

const CANCELLATION_REASONS: &[&str] = &[
    "Change of plans",
    "Found a better price",
    "Travel dates changed",
    "Flight cancelled",
    "Personal emergency",
    "Booked by mistake",
];

const SPECIAL_REQUESTS: &[&str] = &[
    "Late check-in, arriving after 10pm",
    "Quiet room away from the elevator",
    "Extra pillows please",
    "High floor if possible",
    "Airport pickup required",
    "Celebrating an anniversary",
    "Baby cot in the room",
    "Early check-in if available",
];

fn pick<'a>(items: &[&'a str], rng: &mut impl Rng) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates an email from a name.
fn generate_email(name: &str, rng: &mut impl Rng) -> String {
    let normalized: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");

    let suffix: u32 = rng.gen_range(1..9999);
    let domains = ["gmail.com", "outlook.com", "yahoo.com", "proton.me"];
    let domain = domains[rng.gen_range(0..domains.len())];

    format!("{normalized}{suffix}@{domain}")
}
