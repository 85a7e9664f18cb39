use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names of the MongoDB collections the backend reads from.
pub mod collections {
    pub const HOTELS: &str = "hotels";
    pub const REVIEWS: &str = "reviews";
    pub const BOOKINGS: &str = "bookings";
}

#[derive(Debug, Error)]
#[error("Unknown {kind}: {value}")]
pub struct ParseVariantError {
    kind: &'static str,
    value: String,
}

/// Amenities a hotel can advertise. The backend treats them as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Parking,
    Pool,
    Gym,
    Spa,
    Restaurant,
    Bar,
}

impl Amenity {
    pub const ALL: [Amenity; 7] = [
        Amenity::Wifi,
        Amenity::Parking,
        Amenity::Pool,
        Amenity::Gym,
        Amenity::Spa,
        Amenity::Restaurant,
        Amenity::Bar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Parking => "parking",
            Amenity::Pool => "pool",
            Amenity::Gym => "gym",
            Amenity::Spa => "spa",
            Amenity::Restaurant => "restaurant",
            Amenity::Bar => "bar",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Amenity {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseVariantError {
                kind: "amenity",
                value: s.to_string(),
            })
    }
}

/// Lifecycle state of a booking, stored upper-case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "COMPLETED" => Ok(BookingStatus::Completed),
            _ => Err(ParseVariantError {
                kind: "booking status",
                value: s.to_string(),
            }),
        }
    }
}

/// Meal option picked at booking time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPreference {
    #[default]
    None,
    Veg,
    Nonveg,
}

impl MealPreference {
    pub const ALL: [MealPreference; 3] = [
        MealPreference::None,
        MealPreference::Veg,
        MealPreference::Nonveg,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealPreference::None => "none",
            MealPreference::Veg => "veg",
            MealPreference::Nonveg => "nonveg",
        }
    }
}

impl fmt::Display for MealPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealPreference {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealPreference::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseVariantError {
                kind: "meal preference",
                value: s.to_string(),
            })
    }
}
