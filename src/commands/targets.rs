//! `graphseek targets` command - candidates consistent with one feedback edge

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphseek_core::error::Result;
use graphseek_core::graph::possible_targets;

/// Execute the targets command
pub fn execute(ctx: &CommandContext, graph_path: &Path, start: &str, neighbor: &str) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;
    let start = start.to_string();
    let edge = graph.edge(&start, &neighbor.to_string())?.clone();

    let targets = possible_targets(&graph, &start, &edge)?;
    let ordered: Vec<&String> = graph
        .vertices()
        .iter()
        .filter(|vertex| targets.contains(*vertex))
        .collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "edge": edge,
                "targets": ordered,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} targets via {}", ordered.len(), edge);
            }
            for vertex in ordered {
                println!("{}", vertex);
            }
        }
    }
    Ok(())
}
