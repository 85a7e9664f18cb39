//! Hotel generation.

use fake::{
    Fake,
    faker::{
        address::en::{CityName, CountryName},
        company::en::CompanyName,
        lorem::en::Paragraph,
    },
};
use rand::{Rng, seq::SliceRandom};
use time::OffsetDateTime;

use stays::Amenity;

/// Generated hotel ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedHotel {
    pub hotel_id: i64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub price_per_night: f64,
    pub stars: i32,
    pub amenities: Vec<Amenity>,
    pub created_at: OffsetDateTime,
}

/// Configuration for hotel generation.
#[derive(Debug, Clone)]
pub struct HotelGenConfig {
    /// Nightly price bounds (inclusive), rounded to cents after sampling.
    pub price_range: (f64, f64),
    /// Star rating bounds (inclusive).
    pub stars_range: (i32, i32),
    /// Number of distinct amenities per hotel (inclusive).
    pub amenities_range: (usize, usize),
    /// Sentences in the description paragraph.
    pub description_sentences: usize,
}

impl Default for HotelGenConfig {
    fn default() -> Self {
        Self {
            price_range: (40.0, 450.0),
            stars_range: (2, 5),
            amenities_range: (2, 5),
            description_sentences: 3,
        }
    }
}

/// Generates hotels with sequential IDs.
pub struct HotelGenerator {
    config: HotelGenConfig,
}

impl HotelGenerator {
    /// Creates a new hotel generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: HotelGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: HotelGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single hotel with the given ID.
    pub fn generate(&self, hotel_id: i64, rng: &mut impl Rng) -> GeneratedHotel {
        let company: String = CompanyName().fake_with_rng(rng);
        let city: String = CityName().fake_with_rng(rng);
        let country: String = CountryName().fake_with_rng(rng);
        let sentences = self.config.description_sentences;
        let description: String = Paragraph(sentences..sentences + 1).fake_with_rng(rng);

        GeneratedHotel {
            hotel_id,
            name: format!("{company} Hotel"),
            city,
            country,
            description,
            price_per_night: self.generate_price(rng),
            stars: rng.gen_range(self.config.stars_range.0..=self.config.stars_range.1),
            amenities: self.generate_amenities(rng),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Generates `count` hotels with IDs `1..=count`.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedHotel> {
        (1..=count as i64).map(|id| self.generate(id, rng)).collect()
    }

    fn generate_price(&self, rng: &mut impl Rng) -> f64 {
        let (min, max) = self.config.price_range;
        let raw: f64 = rng.gen_range(min..=max);
        ((raw * 100.0).round() / 100.0).clamp(min, max)
    }

    /// Picks distinct amenities without replacement.
    fn generate_amenities(&self, rng: &mut impl Rng) -> Vec<Amenity> {
        let (min, max) = self.config.amenities_range;
        let count = rng.gen_range(min..=max).min(Amenity::ALL.len());

        Amenity::ALL.choose_multiple(rng, count).copied().collect()
    }
}

impl Default for HotelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_generate_hotel() {
        let hotel_gen = HotelGenerator::new();
        let mut rng = rand::thread_rng();
        let hotel = hotel_gen.generate(7, &mut rng);

        assert_eq!(hotel.hotel_id, 7);
        assert!(hotel.name.ends_with(" Hotel"));
        assert!(!hotel.city.is_empty());
        assert!(!hotel.country.is_empty());
        assert!(!hotel.description.is_empty());
    }

    #[test]
    fn test_batch_ids_are_sequential() {
        let hotel_gen = HotelGenerator::new();
        let mut rng = rand::thread_rng();
        let hotels = hotel_gen.generate_batch(25, &mut rng);

        let ids: Vec<i64> = hotels.iter().map(|h| h.hotel_id).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_batch() {
        let hotel_gen = HotelGenerator::new();
        let mut rng = rand::thread_rng();
        assert!(hotel_gen.generate_batch(0, &mut rng).is_empty());
    }

    #[test]
    fn test_field_ranges() {
        let hotel_gen = HotelGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);

        for hotel in hotel_gen.generate_batch(500, &mut rng) {
            assert!((2..=5).contains(&hotel.stars));

            assert!((40.0..=450.0).contains(&hotel.price_per_night));
            let cents = hotel.price_per_night * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);

            let distinct: HashSet<_> = hotel.amenities.iter().collect();
            assert!((2..=5).contains(&hotel.amenities.len()));
            assert_eq!(distinct.len(), hotel.amenities.len());
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let hotel_gen = HotelGenerator::new();
        let a = hotel_gen.generate_batch(5, &mut StdRng::seed_from_u64(12345));
        let b = hotel_gen.generate_batch(5, &mut StdRng::seed_from_u64(12345));

        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.city, y.city);
            assert_eq!(x.price_per_night, y.price_per_night);
            assert_eq!(x.stars, y.stars);
            assert_eq!(x.amenities, y.amenities);
        }
    }

    #[test]
    fn test_custom_config() {
        let hotel_gen = HotelGenerator::with_config(HotelGenConfig {
            stars_range: (5, 5),
            amenities_range: (7, 7),
            ..Default::default()
        });
        let mut rng = rand::thread_rng();
        let hotel = hotel_gen.generate(1, &mut rng);

        assert_eq!(hotel.stars, 5);
        assert_eq!(hotel.amenities.len(), Amenity::ALL.len());
    }
}
