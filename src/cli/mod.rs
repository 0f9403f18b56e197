//! CLI argument parsing for mapd
//!
//! Global flags: --data-dir, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;
pub mod place;
pub mod profile;
pub mod trip;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use output::OutputFormat;
pub use place::PlaceCommands;
pub use profile::ProfileCommands;
pub use trip::TripCommands;

/// Mapd - travel journal for visited places, bucket lists and trips
#[derive(Parser, Debug)]
#[command(name = "mapd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the profile blob and config.toml
    #[arg(long, global = true, env = "MAPD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and phase timing on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show or edit the traveler profile
    Profile(ProfileArgs),

    /// Record visited places and manage the bucket list
    Place(PlaceArgs),

    /// Plan trips and work through their checklists
    Trip(TripArgs),

    /// Suggest random destinations from the catalog
    Recommend(RecommendArgs),

    /// Search the destination catalog
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Args, Debug)]
pub struct PlaceArgs {
    #[command(subcommand)]
    pub command: PlaceCommands,
}

#[derive(Args, Debug)]
pub struct TripArgs {
    #[command(subcommand)]
    pub command: TripCommands,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Number of destinations to suggest
    #[arg(long, short = 'n', default_value_t = 3)]
    pub count: usize,

    /// Only destinations in the configured home country
    #[arg(long)]
    pub domestic: bool,

    /// Fixed seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to match against name, city and country
    pub query: String,

    /// Latitude to sort results around (requires --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude to sort results around (requires --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,
}
