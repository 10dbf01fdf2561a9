//! graphseek core library
//!
//! Locates a hidden target vertex in a weighted undirected graph by querying
//! graph medians and eliminating candidates with shortest-path edge feedback.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;

pub use graph::{Edge, Graph, Weight};
pub use search::{binary_search, Oracle, QueryResult, SearchEngine, TruthfulOracle};
