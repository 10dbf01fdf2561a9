//! Command dispatch logic for graphseek

use std::time::Instant;

use crate::cli::Cli;
use graphseek_core::config::SearchConfig;
use graphseek_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub(crate) use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = SearchConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), config = ?config, "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
