//! Command dispatch logic for mapd

use std::time::Instant;

use mapd_core::config::resolve_data_dir;
use mapd_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub use command::Store;
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    debug!(elapsed = ?start.elapsed(), data_dir = %data_dir.display(), "resolve_data_dir");

    let ctx = CommandContext::new(cli, &data_dir, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
