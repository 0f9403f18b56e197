use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Place, Trip};
use crate::error::MapdError;
use crate::id::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TravelStyle {
    #[default]
    Adventure,
    Relaxation,
    Cultural,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
}

impl TravelStyle {
    pub const ALL: [TravelStyle; 4] = [
        TravelStyle::Adventure,
        TravelStyle::Relaxation,
        TravelStyle::Cultural,
        TravelStyle::FoodAndDrink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Adventure => "Adventure",
            TravelStyle::Relaxation => "Relaxation",
            TravelStyle::Cultural => "Cultural",
            TravelStyle::FoodAndDrink => "Food & Drink",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = MapdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("travel style", s, &Self::ALL, |t| t.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TravelInterest {
    Museums,
    Nature,
    Food,
    Nightlife,
    History,
    Adventure,
    Beaches,
    Architecture,
    Shopping,
    Photography,
    Wildlife,
    Festivals,
    Wellness,
    Luxury,
}

impl TravelInterest {
    pub const ALL: [TravelInterest; 14] = [
        TravelInterest::Museums,
        TravelInterest::Nature,
        TravelInterest::Food,
        TravelInterest::Nightlife,
        TravelInterest::History,
        TravelInterest::Adventure,
        TravelInterest::Beaches,
        TravelInterest::Architecture,
        TravelInterest::Shopping,
        TravelInterest::Photography,
        TravelInterest::Wildlife,
        TravelInterest::Festivals,
        TravelInterest::Wellness,
        TravelInterest::Luxury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelInterest::Museums => "Museums",
            TravelInterest::Nature => "Nature",
            TravelInterest::Food => "Food",
            TravelInterest::Nightlife => "Nightlife",
            TravelInterest::History => "History",
            TravelInterest::Adventure => "Adventure",
            TravelInterest::Beaches => "Beaches",
            TravelInterest::Architecture => "Architecture",
            TravelInterest::Shopping => "Shopping",
            TravelInterest::Photography => "Photography",
            TravelInterest::Wildlife => "Wildlife",
            TravelInterest::Festivals => "Festivals",
            TravelInterest::Wellness => "Wellness",
            TravelInterest::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for TravelInterest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelInterest {
    type Err = MapdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse_label("travel interest", s, &Self::ALL, |t| t.as_str())
    }
}

/// The single user's travel account state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// May be empty; renderers substitute a placeholder
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_image_name: Option<String>,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub interests: Vec<TravelInterest>,
    #[serde(default)]
    pub has_completed_onboarding: bool,
    #[serde(default)]
    pub has_location_permission: bool,
    #[serde(default)]
    pub visited_places: Vec<Place>,
    #[serde(default)]
    pub bucket_list: Vec<Place>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

/// Summary counters shown on the profile screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub visited_places: usize,
    pub countries_visited: usize,
    pub bucket_list: usize,
    pub trips: usize,
    /// Sum of hops between consecutive visited places, in insertion order
    pub total_distance_km: f64,
}

impl Profile {
    pub fn is_visited(&self, id: &RecordId) -> bool {
        self.visited_places.iter().any(|p| &p.id == id)
    }

    pub fn is_in_bucket_list(&self, id: &RecordId) -> bool {
        self.bucket_list.iter().any(|p| &p.id == id)
    }

    /// Number of distinct countries among visited places
    pub fn countries_visited(&self) -> usize {
        self.visited_places
            .iter()
            .map(|p| p.country.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Distance travelled hopping between visited places in the order they were added
    pub fn total_distance_km(&self) -> f64 {
        self.visited_places
            .windows(2)
            .map(|pair| pair[0].coordinate.distance_km(&pair[1].coordinate))
            .sum()
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            visited_places: self.visited_places.len(),
            countries_visited: self.countries_visited(),
            bucket_list: self.bucket_list.len(),
            trips: self.trips.len(),
            total_distance_km: self.total_distance_km(),
        }
    }
}
