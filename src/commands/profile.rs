//! `mapd profile` commands

use mapd_core::display;
use mapd_core::error::Result;

use super::dispatch::Store;
use super::format::print_json;
use crate::cli::{Cli, ProfileCommands};

pub fn execute(cli: &Cli, store: &mut Store, command: &ProfileCommands) -> Result<()> {
    match command {
        ProfileCommands::Show => show(cli, store),
        ProfileCommands::Set {
            name,
            style,
            interests,
        } => {
            store.update_profile(name.clone(), *style, interests.clone())?;
            if !cli.quiet && !cli.format.is_json() {
                println!("Profile updated");
            }
            show_if_json(cli, store)
        }
        ProfileCommands::Onboard => {
            store.complete_onboarding()?;
            if !cli.quiet && !cli.format.is_json() {
                println!("Onboarding complete");
            }
            show_if_json(cli, store)
        }
        ProfileCommands::Permission { granted } => {
            store.set_location_permission(*granted)?;
            if !cli.quiet && !cli.format.is_json() {
                println!(
                    "Location permission {}",
                    if *granted { "granted" } else { "revoked" }
                );
            }
            show_if_json(cli, store)
        }
    }
}

fn show_if_json(cli: &Cli, store: &Store) -> Result<()> {
    if cli.format.is_json() {
        show(cli, store)?;
    }
    Ok(())
}

fn show(cli: &Cli, store: &Store) -> Result<()> {
    let profile = store.profile();
    let stats = profile.stats();

    if cli.format.is_json() {
        return print_json(&serde_json::json!({
            "name": profile.name,
            "travelStyle": profile.travel_style,
            "interests": profile.interests,
            "hasCompletedOnboarding": profile.has_completed_onboarding,
            "hasLocationPermission": profile.has_location_permission,
            "firstLaunch": store.is_first_launch(),
            "stats": stats,
            "display": {
                "travelStyle": display::travel_style(profile.travel_style),
                "interests": profile
                    .interests
                    .iter()
                    .map(|i| display::travel_interest(*i))
                    .collect::<Vec<_>>(),
            },
        }));
    }

    let name = if profile.name.is_empty() {
        "Traveler"
    } else {
        profile.name.as_str()
    };
    let style = display::travel_style(profile.travel_style);

    println!("{}", name);
    println!("Style: {} ({})", style.label, style.description);
    if !profile.interests.is_empty() {
        println!("Interests:");
        for interest in &profile.interests {
            let info = display::travel_interest(*interest);
            println!("  {}: {}", info.label, info.description);
        }
    }
    if !cli.quiet {
        println!(
            "Onboarding: {}",
            if store.is_onboarding_complete() { "done" } else { "pending" }
        );
        println!(
            "Location access: {}",
            if profile.has_location_permission { "granted" } else { "not granted" }
        );
    }
    println!();
    println!("Places visited:    {}", stats.visited_places);
    println!("Countries visited: {}", stats.countries_visited);
    println!("Bucket list:       {}", stats.bucket_list);
    println!("Trips:             {}", stats.trips);
    println!("Distance:          {:.0} km", stats.total_distance_km);
    Ok(())
}
