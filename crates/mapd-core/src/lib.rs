//! Mapd Core Library
//!
//! Core domain logic for the Mapd travel journal: the user profile, visited
//! places, bucket list, trips and their generated checklists.

pub mod blob;
pub mod checklist;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod id;
pub mod location;
pub mod logging;
pub mod model;
pub mod query;
pub mod store;
