//! CLI commands for mapd

pub mod dispatch;
pub mod format;
pub mod place;
pub mod profile;
pub mod recommend;
pub mod search;
pub mod trip;
