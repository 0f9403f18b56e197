//! Smart checklist generation for new trips
//!
//! The generator is a fixed rule table. Order matters: clients show items in
//! generation order, grouped by category as emitted.

use crate::model::{ChecklistCategory, ChecklistItem, Priority, TripType};

/// Home country assumed when none is configured
pub const DEFAULT_HOME_COUNTRY: &str = "USA";

/// Trips of this many days or fewer get carry-on packing
const LIGHT_LUGGAGE_MAX_DAYS: i64 = 3;

/// Builds the default checklist for a trip
#[derive(Debug, Clone)]
pub struct ChecklistGenerator {
    home_country: String,
}

impl Default for ChecklistGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_COUNTRY)
    }
}

impl ChecklistGenerator {
    pub fn new(home_country: impl Into<String>) -> Self {
        Self {
            home_country: home_country.into(),
        }
    }

    pub fn home_country(&self) -> &str {
        &self.home_country
    }

    /// Generate the checklist for a trip to `destination_country` lasting `duration_days`.
    ///
    /// Yields 14 items for international trips (visa check included) and 13
    /// for domestic ones. `_trip_type` is accepted for future rules and does
    /// not change the output.
    pub fn generate(
        &self,
        destination_country: &str,
        _trip_type: TripType,
        duration_days: i64,
    ) -> Vec<ChecklistItem> {
        use ChecklistCategory::*;
        use Priority::*;

        let mut items = vec![
            ChecklistItem::new("Valid Passport", Documents, High),
            ChecklistItem::new("Flight Tickets", Documents, High),
            ChecklistItem::new("Travel Insurance", Documents, Medium),
        ];

        if destination_country != self.home_country {
            items.push(ChecklistItem::new("Check Visa Requirements", Documents, High));
        }

        items.push(ChecklistItem::new("Check Vaccination Requirements", Health, Medium));
        items.push(ChecklistItem::new("Pack Medications", Health, Medium));

        if duration_days <= LIGHT_LUGGAGE_MAX_DAYS {
            items.push(ChecklistItem::new("Pack Light Luggage", Packing, Low));
        } else {
            items.push(ChecklistItem::new("Pack Checked Luggage", Packing, Medium));
        }

        items.extend([
            ChecklistItem::new("Weather-appropriate Clothing", Packing, Medium),
            ChecklistItem::new("Phone Charger", Packing, Medium),
            ChecklistItem::new("Exchange Currency", Preparation, Medium),
            ChecklistItem::new("Notify Bank of Travel", Preparation, Medium),
            ChecklistItem::new("Download Offline Maps", Preparation, Low),
            ChecklistItem::new("Research Local Attractions", Activities, Low),
            ChecklistItem::new("Book Accommodation", Activities, High),
        ]);

        tracing::debug!(
            destination_country,
            duration_days,
            items = items.len(),
            "generated checklist"
        );
        items
    }
}

/// Generate a checklist assuming the default home country
pub fn generate(
    destination_country: &str,
    trip_type: TripType,
    duration_days: i64,
) -> Vec<ChecklistItem> {
    ChecklistGenerator::default().generate(destination_country, trip_type, duration_days)
}
