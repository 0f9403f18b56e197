//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use mapd_core::blob::FileBlobStore;
use mapd_core::config::MapdConfig;
use mapd_core::error::Result;
use mapd_core::store::RecordStore;

use super::trace_command;
use crate::cli::Cli;

/// The record store as the binary uses it: blobs on disk, wall clock
pub type Store = RecordStore<FileBlobStore>;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub data_dir: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, data_dir: &'a Path, start: Instant) -> Self {
        Self {
            cli,
            data_dir,
            start,
        }
    }

    pub fn config(&self) -> Result<MapdConfig> {
        MapdConfig::load_or_default(self.data_dir)
    }

    /// Load config.toml and open the record store in the data directory
    pub fn open_store(&self) -> Result<Store> {
        let config = self.config()?;
        let store = RecordStore::open_with_system_clock(FileBlobStore::new(self.data_dir), &config)?;
        trace_command!(self.cli, self.start, "open_store");
        Ok(store)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("mapd {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A travel journal for visited places, bucket lists and trips.");
        println!();
        println!("Run `mapd --help` for usage information.");
        Ok(())
    }
}
