//! Graph files
//!
//! A graph file lists the vertices and the undirected edges between them:
//!
//! ```toml
//! vertices = ["a", "b", "c"]
//! edges = [["a", "b"], ["b", "c", 2.5]]
//! ```
//!
//! Two-element edges take the default weight. The format is picked from the
//! file extension: `.toml`, `.json`, `.yaml` or `.yml`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SeekError};
use crate::graph::{Graph, Weight};

/// One undirected edge as written in a graph file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeSpec {
    Weighted(String, String, f64),
    Unit(String, String),
}

/// On-disk description of a graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Serialization format of a graph file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "toml" => Ok(GraphFormat::Toml),
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            _ => crate::bail_unsupported!(
                "graph file extension",
                path.display(),
                ".toml, .json, .yaml, .yml"
            ),
        }
    }
}

impl GraphSpec {
    /// Parse a graph description in the given format
    pub fn parse(content: &str, format: GraphFormat) -> Result<Self> {
        Ok(match format {
            GraphFormat::Toml => toml::from_str(content)?,
            GraphFormat::Json => serde_json::from_str(content)?,
            GraphFormat::Yaml => serde_yaml::from_str(content)?,
        })
    }

    /// Read a graph file, choosing the format from its extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = GraphFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            SeekError::Other(format!(
                "failed to read graph from {}: {}",
                path.display(),
                e
            ))
        })?;

        let spec = Self::parse(&content, format)?;
        debug!(
            path = %path.display(),
            vertices = spec.vertices.len(),
            edges = spec.edges.len(),
            "load_graph"
        );
        Ok(spec)
    }

    /// Build the graph, using `default_weight` for edges written without one
    pub fn into_graph(self, default_weight: Weight) -> Result<Graph<String>> {
        let mut graph = Graph::new(self.vertices)?;
        for edge in self.edges {
            match edge {
                EdgeSpec::Weighted(u, v, weight) => graph.add_edge(u, v, Weight::new(weight)?)?,
                EdgeSpec::Unit(u, v) => graph.add_edge(u, v, default_weight)?,
            }
        }
        Ok(graph)
    }
}
