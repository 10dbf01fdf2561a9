//! `graphseek search` command - locate the target vertex
//!
//! With `--target` the answers come from a simulated truthful oracle. Without
//! it every query is put to the user on stdin, with prompts on stderr so that
//! stdout carries only the result.

mod prompt;

use std::io;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::dispatch::CommandContext;
use graphseek_core::error::Result;
use graphseek_core::graph::MedianStrategy;
use graphseek_core::search::{QueryResult, SearchEngine, SearchOutcome, TruthfulOracle};

pub use prompt::PromptOracle;

pub struct SearchParams<'a> {
    pub graph: &'a Path,
    pub target: Option<&'a str>,
    pub strategy: Option<MedianStrategy>,
    pub max_queries: Option<usize>,
}

/// Execute the search command
pub fn execute(ctx: &CommandContext, params: SearchParams) -> Result<()> {
    let graph = ctx.load_graph(params.graph)?;

    let mut config = ctx.config.clone();
    if let Some(strategy) = params.strategy {
        config.median_strategy = strategy;
    }
    if let Some(limit) = params.max_queries {
        if limit == 0 {
            graphseek_core::bail_usage!("--max-queries must be at least 1");
        }
        config.max_queries = Some(limit);
    }

    let engine = SearchEngine::from_config(&graph, &config)?;

    let outcome = match params.target {
        Some(target) => {
            let mut oracle = TruthfulOracle::new(&graph, target.to_string())?;
            engine.run(&mut oracle)?
        }
        None => {
            let stdin = io::stdin();
            let mut oracle = PromptOracle::new(&graph, stdin.lock(), io::stderr());
            engine.run(&mut oracle)?
        }
    };

    tracing::debug!(elapsed = ?ctx.start.elapsed(), queries = outcome.query_count(), "search");

    print_outcome(ctx.cli, &outcome)
}

fn print_outcome(cli: &Cli, outcome: &SearchOutcome<String>) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", outcome.target);
                return Ok(());
            }
            for (i, record) in outcome.queries.iter().enumerate() {
                match &record.answer {
                    QueryResult::Found => {
                        println!("query {}: {} is the target", i + 1, record.vertex);
                    }
                    QueryResult::Feedback(edge) => {
                        println!(
                            "query {}: {} -> {} ({} remaining)",
                            i + 1,
                            record.vertex,
                            edge.target,
                            record.remaining
                        );
                    }
                }
            }
            println!(
                "target: {} ({} {})",
                outcome.target,
                outcome.query_count(),
                if outcome.query_count() == 1 {
                    "query"
                } else {
                    "queries"
                }
            );
        }
    }
    Ok(())
}
