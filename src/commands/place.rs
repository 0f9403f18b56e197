//! `mapd place` commands: visited places and the bucket list

use mapd_core::error::{MapdError, Result};
use mapd_core::id::RecordId;
use mapd_core::model::{Coordinate, Place};
use mapd_core::query::{PlaceCategory, PlaceFilter};
use mapd_core::{bail_invalid, bail_usage};

use super::dispatch::Store;
use super::format::{place_line, print_json};
use crate::cli::place::PlaceLocation;
use crate::cli::{Cli, PlaceCommands};

pub fn execute(cli: &Cli, store: &mut Store, command: &PlaceCommands) -> Result<()> {
    match command {
        PlaceCommands::Visit {
            id,
            location,
            rating,
            notes,
            tag,
        } => {
            let place = match id {
                Some(id) => promote_from_bucket_list(store, id)?,
                None => new_place(location)?,
            };
            let place = annotate(place, *rating, notes.as_deref(), tag)?;
            let id = place.id.clone();
            store.add_visited_place(place)?;
            report(cli, store.visited_place(&id), "Visited")
        }
        PlaceCommands::Wish { location, tag } => {
            let place = annotate(new_place(location)?, None, None, tag)?;
            let id = place.id.clone();
            store.add_to_bucket_list(place)?;
            report(cli, store.bucket_list_place(&id), "Added to bucket list")
        }
        PlaceCommands::Unwish { id } => {
            if !store.remove_from_bucket_list(id)? {
                return Err(MapdError::not_found("bucket list place", id));
            }
            if cli.format.is_json() {
                print_json(&serde_json::json!({ "removed": id }))
            } else {
                if !cli.quiet {
                    println!("Removed {} from bucket list", id);
                }
                Ok(())
            }
        }
        PlaceCommands::List {
            bucket,
            search,
            recent,
            high_rated,
            tag,
        } => {
            let category = match (recent, high_rated, tag) {
                (true, _, _) => PlaceCategory::Recent,
                (_, true, _) => PlaceCategory::HighRated,
                (_, _, Some(tag)) => PlaceCategory::Tag(tag.clone()),
                _ => PlaceCategory::All,
            };
            let filter = PlaceFilter::new()
                .with_search(search.as_deref())
                .with_category(category);
            let places = if *bucket {
                store.filter_bucket_list(&filter)
            } else {
                store.filter_visited_places(&filter)
            };
            list(cli, &places)
        }
        PlaceCommands::Recent { limit } => {
            let limit = limit.unwrap_or_else(|| store.recent_places_limit());
            list(cli, &store.recent_visited_places(limit))
        }
    }
}

fn promote_from_bucket_list(store: &Store, id: &RecordId) -> Result<Place> {
    store
        .bucket_list_place(id)
        .cloned()
        .ok_or_else(|| MapdError::not_found("bucket list place", id))
}

fn new_place(location: &PlaceLocation) -> Result<Place> {
    let (Some(name), Some(country), Some(city), Some(lat), Some(lon)) = (
        &location.name,
        &location.country,
        &location.city,
        location.lat,
        location.lon,
    ) else {
        bail_usage!("a new place needs --name, --country, --city, --lat and --lon");
    };

    if !(-90.0..=90.0).contains(&lat) {
        bail_invalid!("latitude", lat);
    }
    if !(-180.0..=180.0).contains(&lon) {
        bail_invalid!("longitude", lon);
    }

    Ok(Place::new(name, country, city, Coordinate::new(lat, lon)))
}

fn annotate(place: Place, rating: Option<u8>, notes: Option<&str>, tags: &[String]) -> Result<Place> {
    let mut place = match rating {
        Some(rating) => place.with_rating(rating)?,
        None => place,
    };
    if let Some(notes) = notes {
        place = place.with_notes(notes);
    }
    if !tags.is_empty() {
        place = place.with_tags(tags.iter().cloned());
    }
    Ok(place)
}

fn report(cli: &Cli, place: Option<&Place>, verb: &str) -> Result<()> {
    let Some(place) = place else {
        return Ok(());
    };
    if cli.format.is_json() {
        return print_json(place);
    }
    if cli.quiet {
        println!("{}", place.id);
    } else {
        println!("{}: {}", verb, place_line(place));
    }
    Ok(())
}

fn list(cli: &Cli, places: &[Place]) -> Result<()> {
    if cli.format.is_json() {
        return print_json(places);
    }
    if places.is_empty() {
        if !cli.quiet {
            println!("No places found");
        }
        return Ok(());
    }
    for place in places {
        println!("{}", place_line(place));
    }
    Ok(())
}
