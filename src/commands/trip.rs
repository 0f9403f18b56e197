//! `mapd trip` commands

use chrono::{DateTime, Utc};
use mapd_core::bail_invalid;
use mapd_core::display;
use mapd_core::error::{MapdError, Result};
use mapd_core::model::{Coordinate, Place, Trip};
use mapd_core::query::{TripCategory, TripFilter};

use super::dispatch::Store;
use super::format::{print_json, trip_line, trip_status};
use crate::cli::{Cli, TripCommands};

pub fn execute(cli: &Cli, store: &mut Store, command: &TripCommands) -> Result<()> {
    match command {
        TripCommands::Add {
            name,
            destination,
            country,
            city,
            lat,
            lon,
            start,
            end,
            travelers,
            trip_type,
        } => {
            if end < start {
                bail_invalid!("trip dates", format!("end {} is before start {}", end, start));
            }
            let destination = Place::new(
                destination.as_deref().unwrap_or(city),
                country,
                city,
                Coordinate::new(*lat, *lon),
            );
            let trip = Trip::new(name, destination, *start, *end)
                .with_travelers(*travelers)
                .with_trip_type(*trip_type);
            let id = trip.id.clone();
            store.add_trip(trip)?;

            let trip = store.require_trip(&id)?;
            if cli.format.is_json() {
                print_json(trip)
            } else if cli.quiet {
                println!("{}", trip.id);
                Ok(())
            } else {
                println!("Planned: {}", trip_line(trip, store.now()));
                Ok(())
            }
        }
        TripCommands::List {
            upcoming,
            active,
            past,
            search,
            solo,
            group,
            trip_type,
        } => {
            let category = match (solo, group, trip_type) {
                (true, _, _) => TripCategory::Solo,
                (_, true, _) => TripCategory::Group,
                (_, _, Some(trip_type)) => TripCategory::Type(*trip_type),
                _ => TripCategory::All,
            };
            let filter = TripFilter::new()
                .with_search(search.as_deref())
                .with_category(category);

            // Timeline lists keep their own ordering; the filter narrows them
            let trips: Vec<Trip> = if *upcoming {
                keep_matching(store.upcoming_trips(), &filter)
            } else if *active {
                keep_matching(store.active_trips(), &filter)
            } else if *past {
                keep_matching(store.past_trips(), &filter)
            } else {
                store.filter_trips(&filter)
            };
            list(cli, &trips, store.now())
        }
        TripCommands::Show { id } => show(cli, store.require_trip(id)?, store.now()),
        TripCommands::Check {
            trip_id,
            item_id,
            undo,
        } => {
            let item = store
                .require_trip(trip_id)?
                .checklist
                .iter()
                .find(|i| &i.id == item_id)
                .ok_or_else(|| MapdError::not_found("checklist item", item_id))?
                .completed(!undo);
            store.update_checklist_item(trip_id, item)?;
            let trip = store.require_trip(trip_id)?;
            if cli.format.is_json() {
                return show(cli, trip, store.now());
            }
            if !cli.quiet {
                println!(
                    "{}/{} items complete ({:.0}%)",
                    trip.completed_items(),
                    trip.checklist.len(),
                    trip.checklist_progress() * 100.0
                );
            }
            Ok(())
        }
        TripCommands::Complete { id } => {
            let mut trip = store.require_trip(id)?.clone();
            trip.is_completed = true;
            store.update_trip(trip)?;
            if cli.format.is_json() {
                return show(cli, store.require_trip(id)?, store.now());
            }
            if !cli.quiet {
                println!("Completed {}", id);
            }
            Ok(())
        }
        TripCommands::Delete { id } => {
            if !store.delete_trip(id)? {
                return Err(MapdError::not_found("trip", id));
            }
            if cli.format.is_json() {
                return print_json(&serde_json::json!({ "deleted": id }));
            }
            if !cli.quiet {
                println!("Deleted {}", id);
            }
            Ok(())
        }
    }
}

fn keep_matching(trips: Vec<Trip>, filter: &TripFilter) -> Vec<Trip> {
    trips.into_iter().filter(|t| filter.matches(t)).collect()
}

fn list(cli: &Cli, trips: &[Trip], now: DateTime<Utc>) -> Result<()> {
    if cli.format.is_json() {
        return print_json(trips);
    }
    if trips.is_empty() {
        if !cli.quiet {
            println!("No trips found");
        }
        return Ok(());
    }
    for trip in trips {
        println!("{}", trip_line(trip, now));
    }
    Ok(())
}

fn show(cli: &Cli, trip: &Trip, now: DateTime<Utc>) -> Result<()> {
    if cli.format.is_json() {
        return print_json(&serde_json::json!({
            "trip": trip,
            "status": trip_status(trip, now),
            "durationDays": trip.duration_days(),
            "daysUntilDeparture": trip.days_until_departure(now),
            "completedItems": trip.completed_items(),
            "checklistProgress": trip.checklist_progress(),
            "display": {
                "tripType": display::trip_type(trip.trip_type),
                "checklist": trip
                    .checklist
                    .iter()
                    .map(|item| serde_json::json!({
                        "id": item.id,
                        "category": display::checklist_category(item.category),
                        "priority": display::priority(item.priority),
                    }))
                    .collect::<Vec<_>>(),
            },
        }));
    }

    println!("{}  {}", trip.id, trip.name);
    println!(
        "Destination: {} ({})",
        trip.destination.name,
        trip.destination.location_label()
    );
    println!(
        "Dates: {} to {} ({} days)",
        trip.start_date.format("%Y-%m-%d"),
        trip.end_date.format("%Y-%m-%d"),
        trip.duration_days()
    );
    println!(
        "Travelers: {} ({})",
        trip.number_of_travelers, trip.trip_type
    );
    let status = trip_status(trip, now);
    if status == "upcoming" {
        println!("Departs in {} days", trip.days_until_departure(now));
    } else {
        println!("Status: {}", status);
    }
    println!(
        "Checklist: {}/{} ({:.0}%)",
        trip.completed_items(),
        trip.checklist.len(),
        trip.checklist_progress() * 100.0
    );
    for item in &trip.checklist {
        println!(
            "  [{}] {}  {} ({}, {})",
            if item.is_completed { "x" } else { " " },
            item.id,
            item.title,
            item.category,
            item.priority
        );
    }
    Ok(())
}

