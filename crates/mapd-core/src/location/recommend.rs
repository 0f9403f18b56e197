use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{popular_destinations, PointOfInterest};
use crate::checklist::DEFAULT_HOME_COUNTRY;
use crate::model::{Coordinate, Profile};

/// Northern-hemisphere season of a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Season for a 1-based month; out-of-range months count as winter
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn of(date: DateTime<Utc>) -> Self {
        Self::from_month(date.month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints on random destination picks
#[derive(Debug, Clone)]
pub struct DestinationPreferences {
    /// Only destinations in `home_country`
    pub domestic_only: bool,
    pub home_country: String,
    /// With `origin`, skip destinations farther than this
    pub max_distance_km: f64,
    pub origin: Option<Coordinate>,
    /// (name, country) pairs to leave out, lowercased
    known: HashSet<(String, String)>,
}

impl Default for DestinationPreferences {
    fn default() -> Self {
        Self {
            domestic_only: false,
            home_country: DEFAULT_HOME_COUNTRY.to_string(),
            max_distance_km: 10_000.0,
            origin: None,
            known: HashSet::new(),
        }
    }
}

impl DestinationPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domestic_only(mut self, home_country: impl Into<String>) -> Self {
        self.domestic_only = true;
        self.home_country = home_country.into();
        self
    }

    pub fn within(mut self, origin: Coordinate, max_distance_km: f64) -> Self {
        self.origin = Some(origin);
        self.max_distance_km = max_distance_km;
        self
    }

    /// Leave out everything the profile already visited or bucket-listed
    pub fn excluding(mut self, profile: &Profile) -> Self {
        self.known.extend(
            profile
                .visited_places
                .iter()
                .chain(&profile.bucket_list)
                .map(|p| known_key(&p.name, &p.country)),
        );
        self
    }

    fn allows(&self, poi: &PointOfInterest) -> bool {
        if self.domestic_only && poi.country != self.home_country {
            return false;
        }
        if let Some(origin) = self.origin {
            if poi.coordinate.distance_km(&origin) > self.max_distance_km {
                return false;
            }
        }
        !self.known.contains(&known_key(&poi.name, &poi.country))
    }
}

fn known_key(name: &str, country: &str) -> (String, String) {
    (name.to_lowercase(), country.to_lowercase())
}

/// A suggested destination with a short pitch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub destination: PointOfInterest,
    pub description: String,
}

impl From<PointOfInterest> for Recommendation {
    fn from(destination: PointOfInterest) -> Self {
        let description = format!("Discover the beauty of {}", destination.name);
        Self {
            destination,
            description,
        }
    }
}

fn candidates(prefs: &DestinationPreferences) -> Vec<PointOfInterest> {
    popular_destinations()
        .into_iter()
        .filter(|poi| prefs.allows(poi))
        .collect()
}

/// One random catalog destination, or `None` when the preferences exclude all
pub fn random_destination<R: Rng + ?Sized>(
    prefs: &DestinationPreferences,
    rng: &mut R,
) -> Option<Recommendation> {
    candidates(prefs).choose(rng).cloned().map(Recommendation::from)
}

/// Up to `count` distinct random catalog destinations
pub fn random_destinations<R: Rng + ?Sized>(
    count: usize,
    prefs: &DestinationPreferences,
    rng: &mut R,
) -> Vec<Recommendation> {
    let mut pool = candidates(prefs);
    pool.shuffle(rng);
    pool.truncate(count);
    tracing::debug!(count = pool.len(), domestic_only = prefs.domestic_only, "picked destinations");
    pool.into_iter().map(Recommendation::from).collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::model::Place;

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(5), Season::Spring);
        assert_eq!(Season::from_month(6), Season::Summer);
        assert_eq!(Season::from_month(9), Season::Fall);
        assert_eq!(Season::from_month(11), Season::Fall);
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(
            Season::of(Utc.with_ymd_and_hms(2025, 7, 4, 0, 0, 0).unwrap()),
            Season::Summer
        );
    }

    #[test]
    fn test_domestic_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let prefs = DestinationPreferences::new().domestic_only("USA");

        let picks = random_destinations(5, &prefs, &mut rng);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].destination.name, "Grand Canyon");
        assert_eq!(picks[0].description, "Discover the beauty of Grand Canyon");

        let none = DestinationPreferences::new().domestic_only("Atlantis");
        assert!(random_destination(&none, &mut rng).is_none());
    }

    #[test]
    fn test_picks_are_distinct() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks = random_destinations(3, &DestinationPreferences::new(), &mut rng);

        assert_eq!(picks.len(), 3);
        let names: HashSet<_> = picks.iter().map(|p| p.destination.name.clone()).collect();
        assert_eq!(names.len(), 3);
        assert_eq!(random_destinations(50, &DestinationPreferences::new(), &mut rng).len(), 10);
    }

    #[test]
    fn test_excludes_known_places() {
        let mut profile = Profile::default();
        profile.visited_places.push(Place::new(
            "Taj Mahal",
            "India",
            "Agra",
            Coordinate::new(27.1751, 78.0421),
        ));
        profile.bucket_list.push(Place::new(
            "bali",
            "INDONESIA",
            "Denpasar",
            Coordinate::new(-8.3405, 115.0920),
        ));

        let prefs = DestinationPreferences::new().excluding(&profile);
        let mut rng = StdRng::seed_from_u64(1);
        let picks = random_destinations(10, &prefs, &mut rng);

        assert_eq!(picks.len(), 8);
        assert!(picks
            .iter()
            .all(|p| p.destination.name != "Taj Mahal" && p.destination.name != "Bali"));
    }

    #[test]
    fn test_distance_limit() {
        let athens = Coordinate::new(37.98, 23.73);
        let prefs = DestinationPreferences::new().within(athens, 500.0);
        let mut rng = StdRng::seed_from_u64(3);

        let pick = random_destination(&prefs, &mut rng).unwrap();
        assert_eq!(pick.destination.name, "Santorini");
    }
}
