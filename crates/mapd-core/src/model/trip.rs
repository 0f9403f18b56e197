use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChecklistItem, Place};
use crate::error::MapdError;
use crate::id::RecordId;

const SECONDS_PER_DAY: i64 = 86_400;

/// Who is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TripType {
    #[default]
    Solo,
    Couple,
    Family,
    Friends,
}

impl TripType {
    pub const ALL: [TripType; 4] = [
        TripType::Solo,
        TripType::Couple,
        TripType::Family,
        TripType::Friends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Solo => "Solo",
            TripType::Couple => "Couple",
            TripType::Family => "Family",
            TripType::Friends => "Friends",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = MapdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("trip type", s, &Self::ALL, |t| t.as_str())
    }
}

/// A planned or completed journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: RecordId,
    pub name: String,
    pub destination: Place,
    pub start_date: DateTime<Utc>,
    /// Expected to be >= start_date, not enforced
    pub end_date: DateTime<Utc>,
    pub number_of_travelers: u32,
    pub trip_type: TripType,
    /// In generation order
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub is_completed: bool,
}

impl Trip {
    /// Create a solo trip for one traveler with an empty checklist.
    ///
    /// The checklist is filled in when the trip is added to a store.
    pub fn new(
        name: impl Into<String>,
        destination: Place,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::generate(),
            name: name.into(),
            destination,
            start_date,
            end_date,
            number_of_travelers: 1,
            trip_type: TripType::default(),
            checklist: Vec::new(),
            is_completed: false,
        }
    }

    pub fn with_travelers(mut self, count: u32) -> Self {
        self.number_of_travelers = count;
        self
    }

    pub fn with_trip_type(mut self, trip_type: TripType) -> Self {
        self.trip_type = trip_type;
        self
    }

    /// Whole days between start and end, never less than 1
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(1)
    }

    /// Number of checklist items marked complete
    pub fn completed_items(&self) -> usize {
        self.checklist.iter().filter(|i| i.is_completed).count()
    }

    /// Fraction of checklist items completed, 0.0 for an empty checklist
    pub fn checklist_progress(&self) -> f64 {
        if self.checklist.is_empty() {
            return 0.0;
        }
        self.completed_items() as f64 / self.checklist.len() as f64
    }

    /// Days from `now` until departure, floored. Negative once the trip has started.
    pub fn days_until_departure(&self, now: DateTime<Utc>) -> i64 {
        (self.start_date - now)
            .num_seconds()
            .div_euclid(SECONDS_PER_DAY)
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date > now
    }

    /// Started and not yet ended; both bounds inclusive
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_date <= now && now <= self.end_date
    }

    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.end_date < now
    }

    /// Whether `query` occurs in the trip name or the destination's name, city or country
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.destination.name.to_lowercase().contains(&needle)
            || self.destination.city.to_lowercase().contains(&needle)
            || self.destination.country.to_lowercase().contains(&needle)
    }
}
