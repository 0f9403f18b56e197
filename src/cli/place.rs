//! Place subcommands: visited places and the bucket list

use clap::{Args, Subcommand};
use mapd_core::id::RecordId;

use super::parse::parse_record_id;

/// Where a new place is
#[derive(Args, Debug, Clone, Default)]
pub struct PlaceLocation {
    /// Place name
    #[arg(long)]
    pub name: Option<String>,

    /// Country
    #[arg(long)]
    pub country: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum PlaceCommands {
    /// Mark a place visited, either new or promoted from the bucket list
    Visit {
        /// Bucket list entry to promote instead of describing a new place
        #[arg(long, value_parser = parse_record_id, conflicts_with_all = ["name", "country", "city", "lat", "lon"])]
        id: Option<RecordId>,

        #[command(flatten)]
        location: PlaceLocation,

        /// Rating from 1 to 5
        #[arg(long)]
        rating: Option<u8>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// Tag (can be specified multiple times)
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
    },

    /// Add a place to the bucket list
    Wish {
        #[command(flatten)]
        location: PlaceLocation,

        /// Tag (can be specified multiple times)
        #[arg(long, action = clap::ArgAction::Append)]
        tag: Vec<String>,
    },

    /// Remove a place from the bucket list
    Unwish {
        /// Bucket list entry id
        #[arg(value_parser = parse_record_id)]
        id: RecordId,
    },

    /// List visited places (or the bucket list)
    List {
        /// List the bucket list instead of visited places
        #[arg(long)]
        bucket: bool,

        /// Case-insensitive text over name, city, country and tags
        #[arg(long, short)]
        search: Option<String>,

        /// Only places visited this month
        #[arg(long, conflicts_with_all = ["high_rated", "tag"])]
        recent: bool,

        /// Only places rated 4 or higher
        #[arg(long, conflicts_with = "tag")]
        high_rated: bool,

        /// Only places with this exact tag
        #[arg(long, short)]
        tag: Option<String>,
    },

    /// Most recently visited places
    Recent {
        /// How many to show (defaults to the configured limit)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}
