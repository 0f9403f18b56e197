//! Integration tests for the mapd subcommands

mod catalog;
mod place;
mod profile;
mod support;
mod trip;
