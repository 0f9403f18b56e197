//! Location lookup and destination recommendations
//!
//! Real geocoding lives outside this crate. [`LocationService`] is the seam a
//! host plugs a provider into; [`CatalogLocationService`] answers from the
//! built-in list of popular destinations and needs no network.

mod recommend;

pub use recommend::{
    random_destination, random_destinations, DestinationPreferences, Recommendation, Season,
};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{LocationFailure, MapdError, Result};
use crate::model::{Coordinate, Place};

/// Reverse geocoding only reports catalog entries this close to the query point
pub const REVERSE_GEOCODE_RADIUS_KM: f64 = 50.0;

/// A named point returned by a location search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterest {
    pub name: String,
    pub city: String,
    pub country: String,
    pub coordinate: Coordinate,
}

impl PointOfInterest {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            country: country.into(),
            coordinate,
        }
    }

    /// An unvisited place with a fresh id, ready for the record store
    pub fn to_place(&self) -> Place {
        Place::new(&self.name, &self.country, &self.city, self.coordinate)
    }

    fn matches_text(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name, &self.city, &self.country]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Free-text place search and reverse geocoding
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Points matching `query`, nearest to `center` first when one is given.
    ///
    /// Fails with [`MapdError::Location`] when the provider is unreachable or
    /// nothing matches.
    async fn search(&self, query: &str, center: Option<Coordinate>) -> Result<Vec<PointOfInterest>>;

    /// "city, country" for a coordinate, if the provider knows one
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Option<String>;
}

/// Offline service backed by the popular destinations catalog
#[derive(Debug, Clone)]
pub struct CatalogLocationService {
    entries: Vec<PointOfInterest>,
}

impl Default for CatalogLocationService {
    fn default() -> Self {
        Self::new(popular_destinations())
    }
}

impl CatalogLocationService {
    pub fn new(entries: Vec<PointOfInterest>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PointOfInterest] {
        &self.entries
    }
}

#[async_trait]
impl LocationService for CatalogLocationService {
    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str, center: Option<Coordinate>) -> Result<Vec<PointOfInterest>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MapdError::Location(LocationFailure::NoResults));
        }

        let mut found: Vec<PointOfInterest> = self
            .entries
            .iter()
            .filter(|poi| poi.matches_text(query))
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(MapdError::Location(LocationFailure::NoResults));
        }

        if let Some(center) = center {
            found.sort_by(|a, b| {
                a.coordinate
                    .distance_km(&center)
                    .total_cmp(&b.coordinate.distance_km(&center))
            });
        }

        tracing::debug!(results = found.len(), "catalog search");
        Ok(found)
    }

    async fn reverse_geocode(&self, coordinate: Coordinate) -> Option<String> {
        self.entries
            .iter()
            .map(|poi| (poi.coordinate.distance_km(&coordinate), poi))
            .filter(|(distance, _)| *distance <= REVERSE_GEOCODE_RADIUS_KM)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, poi)| format!("{}, {}", poi.city, poi.country))
    }
}

/// The built-in destination catalog
pub fn popular_destinations() -> Vec<PointOfInterest> {
    let entry = |name: &str, country: &str, city: &str, lat: f64, lon: f64| {
        PointOfInterest::new(name, city, country, Coordinate::new(lat, lon))
    };

    vec![
        entry("Machu Picchu", "Peru", "Cusco", -13.1631, -72.5450),
        entry("Great Wall of China", "China", "Beijing", 40.4319, 116.5704),
        entry("Santorini", "Greece", "Santorini", 36.3932, 25.4615),
        entry("Bali", "Indonesia", "Denpasar", -8.3405, 115.0920),
        entry("Iceland Blue Lagoon", "Iceland", "Reykjavik", 63.8804, -22.4495),
        entry("Safari Kenya", "Kenya", "Nairobi", -1.2921, 36.8219),
        entry("Taj Mahal", "India", "Agra", 27.1751, 78.0421),
        entry("Northern Lights Norway", "Norway", "Tromsø", 69.6492, 18.9553),
        entry("Grand Canyon", "USA", "Arizona", 36.1069, -112.1129),
        entry("Cherry Blossoms Japan", "Japan", "Tokyo", 35.6762, 139.6503),
    ]
}
