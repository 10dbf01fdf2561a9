//! `graphseek tree` command - shortest-path tree from one vertex
//!
//! Lists every vertex with its distance and all of its tied predecessor edges.

use std::path::Path;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use graphseek_core::error::Result;
use graphseek_core::graph::{Edge, ShortestPathTree};

#[derive(Serialize)]
struct TreeRow<'a> {
    vertex: &'a str,
    /// `None` when unreachable
    distance: Option<f64>,
    predecessors: &'a [Edge<String>],
}

/// Execute the tree command
pub fn execute(ctx: &CommandContext, graph_path: &Path, start: &str) -> Result<()> {
    let graph = ctx.load_graph(graph_path)?;
    let start = start.to_string();
    let tree = ShortestPathTree::compute(&graph, &start)?;

    let rows = graph
        .vertices()
        .iter()
        .map(|vertex| {
            let distance = if tree.is_reachable(vertex)? {
                Some(tree.distance(vertex)?)
            } else {
                None
            };
            Ok(TreeRow {
                vertex: vertex.as_str(),
                distance,
                predecessors: tree.predecessors(vertex)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "start": start,
                "vertices": rows,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for row in &rows {
                match row.distance {
                    None => println!("{}: unreachable", row.vertex),
                    Some(_) if row.vertex == start => println!("{}: 0 (start)", row.vertex),
                    Some(distance) => {
                        let sources: Vec<&str> = row
                            .predecessors
                            .iter()
                            .map(|edge| edge.source.as_str())
                            .collect();
                        println!("{}: {} via {}", row.vertex, distance, sources.join(", "));
                    }
                }
            }
        }
    }
    Ok(())
}
