//! Routes each subcommand to its implementation

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{median, search, targets, tree};
use graphseek_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search {
                graph,
                target,
                strategy,
                max_queries,
            } => search::execute(
                ctx,
                search::SearchParams {
                    graph,
                    target: target.as_deref(),
                    strategy: *strategy,
                    max_queries: *max_queries,
                },
            ),
            Commands::Median {
                graph,
                vertices,
                strategy,
            } => median::execute(ctx, graph, vertices, *strategy),
            Commands::Tree { graph, start } => tree::execute(ctx, graph, start),
            Commands::Targets {
                graph,
                start,
                neighbor,
            } => targets::execute(ctx, graph, start, neighbor),
        }
    }
}
