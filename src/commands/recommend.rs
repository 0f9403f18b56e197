//! `mapd recommend` - random destinations from the catalog

use mapd_core::error::Result;
use mapd_core::location::{random_destinations, DestinationPreferences, Season};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::dispatch::Store;
use super::format::print_json;
use crate::cli::{Cli, RecommendArgs};

pub fn execute(cli: &Cli, store: &Store, args: &RecommendArgs) -> Result<()> {
    let mut prefs = DestinationPreferences::new().excluding(store.profile());
    if args.domestic {
        prefs = prefs.domestic_only(store.generator().home_country());
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let picks = random_destinations(args.count, &prefs, &mut rng);
    let season = Season::of(store.now());

    if cli.format.is_json() {
        return print_json(&serde_json::json!({
            "season": season,
            "destinations": picks,
        }));
    }

    if picks.is_empty() {
        if !cli.quiet {
            println!("No destinations left to suggest");
        }
        return Ok(());
    }

    if !cli.quiet {
        println!("Ideas for {}:", season);
    }
    for pick in &picks {
        println!(
            "{} ({}, {})  {}",
            pick.destination.name, pick.destination.city, pick.destination.country, pick.description
        );
    }
    Ok(())
}
