//! Trip subcommands

use chrono::{DateTime, Utc};
use clap::Subcommand;
use mapd_core::id::RecordId;
use mapd_core::model::TripType;

use super::parse::{parse_date, parse_record_id, parse_trip_type};

#[derive(Subcommand, Debug)]
pub enum TripCommands {
    /// Plan a trip; its checklist is generated automatically
    Add {
        /// Trip name
        #[arg(long)]
        name: String,

        /// Destination name (defaults to the city)
        #[arg(long)]
        destination: Option<String>,

        /// Destination country
        #[arg(long)]
        country: String,

        /// Destination city
        #[arg(long)]
        city: String,

        /// Destination latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Destination longitude
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Departure (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        start: DateTime<Utc>,

        /// Return (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        end: DateTime<Utc>,

        /// Number of travelers
        #[arg(long, default_value_t = 1)]
        travelers: u32,

        /// Trip type (Solo, Couple, Family, Friends)
        #[arg(long = "type", value_parser = parse_trip_type, default_value = "Solo")]
        trip_type: TripType,
    },

    /// List trips
    List {
        /// Only trips that have not started
        #[arg(long, conflicts_with_all = ["active", "past"])]
        upcoming: bool,

        /// Only trips in progress
        #[arg(long, conflicts_with = "past")]
        active: bool,

        /// Only trips that have ended
        #[arg(long)]
        past: bool,

        /// Case-insensitive text over trip name and destination
        #[arg(long, short)]
        search: Option<String>,

        /// Only trips with one traveler
        #[arg(long, conflicts_with_all = ["group", "trip_type"])]
        solo: bool,

        /// Only trips with several travelers
        #[arg(long, conflicts_with = "trip_type")]
        group: bool,

        /// Only trips of this type
        #[arg(long = "type", value_parser = parse_trip_type)]
        trip_type: Option<TripType>,
    },

    /// Show a trip with its checklist
    Show {
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },

    /// Tick (or untick) a checklist item
    Check {
        #[arg(value_parser = parse_record_id)]
        trip_id: RecordId,

        #[arg(value_parser = parse_record_id)]
        item_id: RecordId,

        /// Mark the item incomplete again
        #[arg(long)]
        undo: bool,
    },

    /// Mark a trip completed
    Complete {
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },

    /// Delete a trip
    Delete {
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },
}
