//! Place and trip filtering utilities

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, Utc};

use crate::model::{Place, Trip, TripType};

/// Minimum rating for the "high rated" place filter
pub const HIGH_RATING: u8 = 4;

/// Category chip applied after the text search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaceCategory {
    #[default]
    All,
    /// Visited in the current calendar month
    Recent,
    HighRated,
    /// Exact tag match
    Tag(String),
}

/// Filter configuration for places
#[derive(Debug, Clone, Default)]
pub struct PlaceFilter {
    /// Case-insensitive substring over name, city, country and tags
    pub search: Option<String>,
    pub category: PlaceCategory,
}

impl PlaceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text search; an empty string disables it
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn with_category(mut self, category: PlaceCategory) -> Self {
        self.category = category;
        self
    }

    /// Check if a place matches all configured filters
    pub fn matches(&self, place: &Place, now: DateTime<Utc>) -> bool {
        if let Some(search) = &self.search {
            if !place.matches_text(search) {
                return false;
            }
        }

        match &self.category {
            PlaceCategory::All => true,
            PlaceCategory::Recent => place
                .date_visited
                .is_some_and(|d| d.year() == now.year() && d.month() == now.month()),
            PlaceCategory::HighRated => place.rating.is_some_and(|r| r >= HIGH_RATING),
            PlaceCategory::Tag(tag) => place.tags.contains(tag),
        }
    }

    /// Matching places, most recently visited first
    pub fn apply(&self, places: &[Place], now: DateTime<Utc>) -> Vec<Place> {
        let mut matched: Vec<Place> = places
            .iter()
            .filter(|p| self.matches(p, now))
            .cloned()
            .collect();
        sort_places(&mut matched);
        matched
    }
}

/// Dated places newest first, then undated places by name
pub fn sort_places(places: &mut [Place]) {
    places.sort_by(|a, b| match (a.date_visited, b.date_visited) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripCategory {
    #[default]
    All,
    /// At most one traveler
    Solo,
    /// More than one traveler
    Group,
    Type(TripType),
}

/// Filter configuration for trips
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    /// Case-insensitive substring over the trip name and destination
    pub search: Option<String>,
    pub category: TripCategory,
}

impl TripFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text search; an empty string disables it
    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    pub fn with_category(mut self, category: TripCategory) -> Self {
        self.category = category;
        self
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(search) = &self.search {
            if !trip.matches_text(search) {
                return false;
            }
        }

        match self.category {
            TripCategory::All => true,
            TripCategory::Solo => trip.number_of_travelers <= 1,
            TripCategory::Group => trip.number_of_travelers > 1,
            TripCategory::Type(trip_type) => trip.trip_type == trip_type,
        }
    }

    /// Matching trips ordered by departure
    pub fn apply<'a, I>(&self, trips: I) -> Vec<Trip>
    where
        I: IntoIterator<Item = &'a Trip>,
    {
        let mut matched: Vec<Trip> = trips
            .into_iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();
        matched.sort_by_key(|t| t.start_date);
        matched
    }
}
