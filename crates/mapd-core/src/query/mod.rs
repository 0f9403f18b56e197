//! Filtering and ordering of place and trip lists

mod filter;

pub use filter::{sort_places, PlaceCategory, PlaceFilter, TripCategory, TripFilter};
