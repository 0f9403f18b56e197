//! `mapd search` - look up destinations in the catalog

use futures::executor::block_on;
use mapd_core::error::Result;
use mapd_core::location::{CatalogLocationService, LocationService};
use mapd_core::model::Coordinate;

use super::format::print_json;
use crate::cli::{Cli, SearchArgs};

pub fn execute(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let service = CatalogLocationService::default();
    let center = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
        _ => None,
    };

    let results = block_on(service.search(&args.query, center))?;

    if cli.format.is_json() {
        return print_json(&results);
    }

    for poi in &results {
        match center {
            Some(center) => println!(
                "{} ({}, {})  {:.0} km",
                poi.name,
                poi.city,
                poi.country,
                poi.coordinate.distance_km(&center)
            ),
            None => println!("{} ({}, {})", poi.name, poi.city, poi.country),
        }
    }

    if let Some(center) = center {
        if let Some(label) = block_on(service.reverse_geocode(center)) {
            if !cli.quiet {
                println!("You are near {}", label);
            }
        }
    }
    Ok(())
}
