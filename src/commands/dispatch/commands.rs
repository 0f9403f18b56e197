//! Command implementations for all mapd commands

use mapd_core::error::Result;

use super::command::{Command, CommandContext};
use super::trace_command;
use crate::cli::Commands;
use crate::commands;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Profile(args) => {
                let mut store = ctx.open_store()?;
                commands::profile::execute(ctx.cli, &mut store, &args.command)?;
            }
            Commands::Place(args) => {
                let mut store = ctx.open_store()?;
                commands::place::execute(ctx.cli, &mut store, &args.command)?;
            }
            Commands::Trip(args) => {
                let mut store = ctx.open_store()?;
                commands::trip::execute(ctx.cli, &mut store, &args.command)?;
            }
            Commands::Recommend(args) => {
                let store = ctx.open_store()?;
                commands::recommend::execute(ctx.cli, &store, args)?;
            }
            Commands::Search(args) => commands::search::execute(ctx.cli, args)?,
        }
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}
