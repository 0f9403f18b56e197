use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::RecordId;

/// Lowest accepted place rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted place rating
pub const MAX_RATING: u8 = 5;

/// Mean Earth radius in kilometres
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres (haversine)
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// A point of interest with visitation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: RecordId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub date_visited: Option<DateTime<Utc>>,
    /// 1-5, only meaningful once visited
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: String,
    /// Photo file names, in display order
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub is_visited: bool,
    #[serde(default)]
    pub is_in_bucket_list: bool,
}

impl Place {
    /// Create a new, unvisited place with a fresh id
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            country: country.into(),
            city: city.into(),
            coordinate,
            date_visited: None,
            rating: None,
            notes: String::new(),
            photos: Vec::new(),
            tags: BTreeSet::new(),
            is_visited: false,
            is_in_bucket_list: false,
        }
    }

    /// Set the rating, rejecting values outside 1-5
    pub fn with_rating(mut self, rating: u8) -> Result<Self> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            crate::bail_invalid!("rating", format!("{} (expected 1-5)", rating));
        }
        self.rating = Some(rating);
        Ok(self)
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photos.push(photo.into());
        self
    }

    pub fn with_date_visited(mut self, date: DateTime<Utc>) -> Self {
        self.date_visited = Some(date);
        self
    }

    /// "city, country" label used by reverse geocoding and listings
    pub fn location_label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Whether `query` occurs in the name, city, country or any tag (case-insensitive)
    pub fn matches_text(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.city.to_lowercase().contains(&query)
            || self.country.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}
