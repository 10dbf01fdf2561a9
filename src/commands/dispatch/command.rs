//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use graphseek_core::config::SearchConfig;
use graphseek_core::error::Result;
use graphseek_core::graph::{Graph, GraphSpec};
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: SearchConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: SearchConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Read a graph file, filling in the configured default weight
    pub fn load_graph(&self, path: &Path) -> Result<Graph<String>> {
        let graph = GraphSpec::load(path)?.into_graph(self.config.default_weight()?)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            vertices = graph.len(),
            edges = graph.edge_count(),
            "build_graph"
        );
        Ok(graph)
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
        println!("graphseek {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Find a hidden vertex in a weighted graph with shortest-path edge feedback.");
        println!();
        println!("Run `graphseek --help` for usage information.");
        Ok(())
    }
}
