//! Profile subcommands

use clap::Subcommand;
use mapd_core::model::{TravelInterest, TravelStyle};

use super::parse::{parse_interest, parse_travel_style};

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the profile with travel statistics
    Show,

    /// Replace name, travel style and interests
    Set {
        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// Travel style (Adventure, Relaxation, Cultural, Food & Drink)
        #[arg(long, value_parser = parse_travel_style, default_value = "Adventure")]
        style: TravelStyle,

        /// Interest (can be specified multiple times)
        #[arg(long = "interest", value_parser = parse_interest, action = clap::ArgAction::Append)]
        interests: Vec<TravelInterest>,
    },

    /// Mark onboarding as finished
    Onboard,

    /// Record whether location access was granted
    Permission {
        #[arg(action = clap::ArgAction::Set)]
        granted: bool,
    },
}
