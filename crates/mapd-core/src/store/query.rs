use std::cmp::Reverse;

use super::RecordStore;
use crate::blob::BlobStore;
use crate::clock::Clock;
use crate::id::RecordId;
use crate::model::{Place, Trip};
use crate::query::{PlaceFilter, TripFilter};

impl<B: BlobStore, C: Clock> RecordStore<B, C> {
    pub fn trip(&self, trip_id: &RecordId) -> Option<&Trip> {
        self.profile.trips.iter().find(|t| &t.id == trip_id)
    }

    pub fn visited_place(&self, place_id: &RecordId) -> Option<&Place> {
        self.profile.visited_places.iter().find(|p| &p.id == place_id)
    }

    pub fn bucket_list_place(&self, place_id: &RecordId) -> Option<&Place> {
        self.profile.bucket_list.iter().find(|p| &p.id == place_id)
    }

    /// Visited places, most recent visit first; undated places last
    pub fn recent_visited_places(&self, limit: usize) -> Vec<Place> {
        let mut places = self.profile.visited_places.clone();
        // Option orders None below Some, so undated places sink to the end
        places.sort_by_key(|p| Reverse(p.date_visited));
        places.truncate(limit);
        places
    }

    /// Trips that have not started yet, soonest first
    pub fn upcoming_trips(&self) -> Vec<Trip> {
        let now = self.clock.now();
        let mut trips: Vec<Trip> = self
            .profile
            .trips
            .iter()
            .filter(|t| t.is_upcoming(now))
            .cloned()
            .collect();
        trips.sort_by_key(|t| t.start_date);
        trips
    }

    /// Trips in progress, start and end inclusive
    pub fn active_trips(&self) -> Vec<Trip> {
        let now = self.clock.now();
        self.profile
            .trips
            .iter()
            .filter(|t| t.is_active(now))
            .cloned()
            .collect()
    }

    /// Trips that have ended, most recently ended first
    pub fn past_trips(&self) -> Vec<Trip> {
        let now = self.clock.now();
        let mut trips: Vec<Trip> = self
            .profile
            .trips
            .iter()
            .filter(|t| t.is_past(now))
            .cloned()
            .collect();
        trips.sort_by_key(|t| Reverse(t.end_date));
        trips
    }

    pub fn filter_visited_places(&self, filter: &PlaceFilter) -> Vec<Place> {
        filter.apply(&self.profile.visited_places, self.clock.now())
    }

    pub fn filter_bucket_list(&self, filter: &PlaceFilter) -> Vec<Place> {
        filter.apply(&self.profile.bucket_list, self.clock.now())
    }

    pub fn filter_trips(&self, filter: &TripFilter) -> Vec<Trip> {
        filter.apply(&self.profile.trips)
    }
}
