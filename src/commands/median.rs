//! `graphseek median` command - vertex minimizing the total distance to a subset

use std::path::Path;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphseek_core::error::Result;
use graphseek_core::graph::{MedianStrategy, ShortestPathTree};

/// Execute the median command
pub fn execute(
    ctx: &CommandContext,
    graph_path: &Path,
    vertices: &[String],
    strategy: Option<MedianStrategy>,
) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;

    let subset: Vec<String> = if vertices.is_empty() {
        graph.vertices().to_vec()
    } else {
        vertices.to_vec()
    };

    let strategy = strategy.unwrap_or(ctx.config.median_strategy);
    let median = strategy.selector(&graph)?.median(&subset)?;
    let total = ShortestPathTree::compute(&graph, &median)?.sum_of_distances(&subset)?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "median": median,
                "subset_size": subset.len(),
                "total_distance": total,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", median);
            if !ctx.cli.quiet {
                println!(
                    "total distance {} over {} vertices",
                    total,
                    subset.len()
                );
            }
        }
    }
    Ok(())
}
