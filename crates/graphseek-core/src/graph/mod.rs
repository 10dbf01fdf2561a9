//! Weighted graphs and shortest-path algorithms
//!
//! Provides the pieces the vertex search is built from:
//! - `Graph`: static weighted undirected incidence structure
//! - `ShortestPathTree`: Dijkstra keeping every tied predecessor edge
//! - `possible_targets`: vertices whose shortest paths use a given edge
//! - `find_median` / `DistanceTable`: sum-of-distances median selection
//! - `GraphSpec`: graph files in TOML, JSON or YAML

pub mod algos;
pub mod spec;
pub mod types;
pub mod weighted;

pub use algos::{
    find_median, possible_targets, DistanceTable, MedianSelector, MedianStrategy, OnDemandMedian,
    ShortestPathTree,
};
pub use spec::{EdgeSpec, GraphSpec};
pub use types::{Edge, Vertex, Weight};
pub use weighted::Graph;
