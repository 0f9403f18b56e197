//! Shared output helpers

use chrono::{DateTime, Utc};
use serde::Serialize;

use mapd_core::error::Result;
use mapd_core::model::{Place, Trip};

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `<id>  <name> (<city, country>)` plus rating, visit date and tags when set
pub fn place_line(place: &Place) -> String {
    let mut line = format!("{}  {} ({})", place.id, place.name, place.location_label());
    if let Some(rating) = place.rating {
        line.push_str(&format!("  {}/5", rating));
    }
    if let Some(date) = place.date_visited {
        line.push_str(&format!("  visited {}", date.format("%Y-%m-%d")));
    }
    if !place.tags.is_empty() {
        let tags: Vec<&str> = place.tags.iter().map(String::as_str).collect();
        line.push_str(&format!("  [{}]", tags.join(", ")));
    }
    line
}

/// One-line trip summary with dates, status and checklist progress
pub fn trip_line(trip: &Trip, now: DateTime<Utc>) -> String {
    format!(
        "{}  {} -> {}  {} to {}  {}  {}/{} packed",
        trip.id,
        trip.name,
        trip.destination.location_label(),
        trip.start_date.format("%Y-%m-%d"),
        trip.end_date.format("%Y-%m-%d"),
        trip_status(trip, now),
        trip.completed_items(),
        trip.checklist.len()
    )
}

pub fn trip_status(trip: &Trip, now: DateTime<Utc>) -> &'static str {
    if trip.is_completed {
        "completed"
    } else if trip.is_active(now) {
        "active"
    } else if trip.is_upcoming(now) {
        "upcoming"
    } else {
        "past"
    }
}
