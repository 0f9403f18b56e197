//! The record store
//!
//! Single source of truth for the user's profile and travel records. Every
//! mutating operation applies its change in memory first and then writes the
//! whole profile to the blob store. The returned `Result` only reports the
//! write: on `Err` the in-memory state is still updated and stays
//! authoritative until a later save succeeds.
//!
//! Operations that target a missing record are no-ops and report `Ok(false)`.

mod query;

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::blob::BlobStore;
use crate::checklist::ChecklistGenerator;
use crate::clock::{Clock, SystemClock};
use crate::config::{BlobKeys, MapdConfig};
use crate::error::{MapdError, Result};
use crate::id::RecordId;
use crate::model::{ChecklistItem, Place, Profile, TravelInterest, TravelStyle, Trip};
use crate::trace_time;

/// Owns the profile and persists it through a [`BlobStore`]
#[derive(Debug)]
pub struct RecordStore<B: BlobStore, C: Clock = SystemClock> {
    blobs: B,
    clock: C,
    keys: BlobKeys,
    generator: ChecklistGenerator,
    recent_places_limit: usize,
    profile: Profile,
    first_launch: bool,
}

impl<B: BlobStore> RecordStore<B, SystemClock> {
    /// Open with the wall clock
    pub fn open_with_system_clock(blobs: B, config: &MapdConfig) -> Result<Self> {
        Self::open(blobs, SystemClock, config)
    }
}

impl<B: BlobStore, C: Clock> RecordStore<B, C> {
    /// Load the profile and record the launch.
    ///
    /// A missing or undecodable profile blob yields the default profile;
    /// decode failures are logged and the blob is replaced on the next save.
    /// Any other read error is returned so the stored profile is never
    /// overwritten by an empty one.
    #[tracing::instrument(skip_all, fields(profile_key = %config.keys.profile))]
    pub fn open(blobs: B, clock: C, config: &MapdConfig) -> Result<Self> {
        let keys = config.keys.clone();
        let profile = match load_profile(&blobs, &keys.profile) {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                tracing::debug!("no stored profile, starting empty");
                Profile::default()
            }
            Err(e @ MapdError::CorruptBlob { .. }) => {
                tracing::warn!(error = %e, "stored profile undecodable, starting empty");
                Profile::default()
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to read stored profile");
                return Err(e);
            }
        };

        let first_launch = !has_launched_before(&blobs, &keys.first_launch);
        if first_launch {
            if let Err(e) = blobs.save(&keys.first_launch, b"true") {
                tracing::warn!(error = %e, "failed to record first launch");
            }
        }

        Ok(Self {
            blobs,
            clock,
            keys,
            generator: ChecklistGenerator::new(config.home_country.clone()),
            recent_places_limit: config.recent_places_limit,
            profile,
            first_launch,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// True when no launch had been recorded before this store was opened.
    ///
    /// Distinguishes a new user from one whose profile blob went missing.
    pub fn is_first_launch(&self) -> bool {
        self.first_launch
    }

    pub fn is_onboarding_complete(&self) -> bool {
        self.profile.has_completed_onboarding
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Configured default for [`RecordStore::recent_visited_places`]
    pub fn recent_places_limit(&self) -> usize {
        self.recent_places_limit
    }

    pub fn generator(&self) -> &ChecklistGenerator {
        &self.generator
    }

    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// Write the current profile to the blob store
    pub fn save(&self) -> Result<()> {
        let start = Instant::now();
        let bytes = serde_json::to_vec(&self.profile)?;
        self.blobs.save(&self.keys.profile, &bytes)?;
        trace_time!(start, "save_profile", bytes = bytes.len());
        Ok(())
    }

    pub fn update_profile(
        &mut self,
        name: impl Into<String>,
        travel_style: TravelStyle,
        interests: Vec<TravelInterest>,
    ) -> Result<()> {
        self.profile.name = name.into();
        self.profile.travel_style = travel_style;
        self.profile.interests = interests;
        tracing::debug!(style = %travel_style, "profile updated");
        self.save()
    }

    pub fn complete_onboarding(&mut self) -> Result<()> {
        self.profile.has_completed_onboarding = true;
        self.save()
    }

    pub fn set_location_permission(&mut self, granted: bool) -> Result<()> {
        self.profile.has_location_permission = granted;
        self.save()
    }

    /// Mark a place visited now, moving it out of the bucket list.
    ///
    /// A place that is already visited keeps its original visit date.
    pub fn add_visited_place(&mut self, place: Place) -> Result<()> {
        let now = self.clock.now();
        self.profile.bucket_list.retain(|p| p.id != place.id);

        if self.profile.is_visited(&place.id) {
            tracing::debug!(place_id = %place.id, "place already visited");
        } else {
            tracing::debug!(place_id = %place.id, name = %place.name, "adding visited place");
            self.profile.visited_places.push(Place {
                is_visited: true,
                is_in_bucket_list: false,
                date_visited: Some(now),
                ..place
            });
        }

        self.save()
    }

    /// Add a place to the bucket list unless it is already there or visited.
    ///
    /// Any rating on the incoming place is dropped.
    pub fn add_to_bucket_list(&mut self, place: Place) -> Result<()> {
        if self.profile.is_in_bucket_list(&place.id) || self.profile.is_visited(&place.id) {
            tracing::debug!(place_id = %place.id, "place already tracked, not adding to bucket list");
        } else {
            tracing::debug!(place_id = %place.id, name = %place.name, "adding to bucket list");
            self.profile.bucket_list.push(Place {
                is_in_bucket_list: true,
                rating: None,
                ..place
            });
        }

        self.save()
    }

    /// Returns whether an entry was removed
    pub fn remove_from_bucket_list(&mut self, place_id: &RecordId) -> Result<bool> {
        let before = self.profile.bucket_list.len();
        self.profile.bucket_list.retain(|p| &p.id != place_id);
        let removed = self.profile.bucket_list.len() < before;
        self.save()?;
        Ok(removed)
    }

    /// Generate the trip's checklist and append it
    pub fn add_trip(&mut self, mut trip: Trip) -> Result<()> {
        let duration = trip.duration_days();
        trip.checklist =
            self.generator
                .generate(&trip.destination.country, trip.trip_type, duration);
        tracing::debug!(
            trip_id = %trip.id,
            duration,
            items = trip.checklist.len(),
            "adding trip"
        );
        self.profile.trips.push(trip);
        self.save()
    }

    /// Replace the stored trip with the same id. Returns whether it was found.
    pub fn update_trip(&mut self, trip: Trip) -> Result<bool> {
        let Some(index) = self.profile.trips.iter().position(|t| t.id == trip.id) else {
            tracing::debug!(trip_id = %trip.id, "update of unknown trip ignored");
            return Ok(false);
        };

        self.profile.trips[index] = trip;
        self.save()?;
        Ok(true)
    }

    /// Returns whether a trip was removed
    pub fn delete_trip(&mut self, trip_id: &RecordId) -> Result<bool> {
        let before = self.profile.trips.len();
        self.profile.trips.retain(|t| &t.id != trip_id);
        let removed = self.profile.trips.len() < before;
        self.save()?;
        Ok(removed)
    }

    /// Replace one checklist item of one trip. Returns whether both were found.
    pub fn update_checklist_item(&mut self, trip_id: &RecordId, item: ChecklistItem) -> Result<bool> {
        let position = self
            .profile
            .trips
            .iter()
            .position(|t| &t.id == trip_id)
            .and_then(|ti| {
                self.profile.trips[ti]
                    .checklist
                    .iter()
                    .position(|i| i.id == item.id)
                    .map(|ii| (ti, ii))
            });

        let Some((trip_index, item_index)) = position else {
            tracing::debug!(trip_id = %trip_id, item_id = %item.id, "checklist item not found");
            return Ok(false);
        };

        self.profile.trips[trip_index].checklist[item_index] = item;
        self.save()?;
        Ok(true)
    }

    /// Look up a trip for mutation through [`RecordStore::update_trip`]
    pub fn require_trip(&self, trip_id: &RecordId) -> Result<&Trip> {
        self.trip(trip_id)
            .ok_or_else(|| MapdError::not_found("trip", trip_id))
    }
}

fn load_profile<B: BlobStore>(blobs: &B, key: &str) -> Result<Option<Profile>> {
    let Some(bytes) = blobs.load(key)? else {
        return Ok(None);
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| MapdError::CorruptBlob {
            key: key.to_string(),
            reason: e.to_string(),
        })
}

fn has_launched_before<B: BlobStore>(blobs: &B, key: &str) -> bool {
    match blobs.load(key) {
        Ok(Some(bytes)) => serde_json::from_slice::<bool>(&bytes).unwrap_or(false),
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read launch marker");
            false
        }
    }
}
