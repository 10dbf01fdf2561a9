//! CLI argument parsing for graphseek
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graphseek_core::graph::MedianStrategy;

pub use output::OutputFormat;
use parse::parse_median_strategy;

/// graphseek - find a hidden vertex in a weighted graph
#[derive(Parser, Debug)]
#[command(name = "graphseek")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log each query and phase timings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ~/.config/graphseek/config.toml)
    #[arg(long, global = true, env = "GRAPHSEEK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a graph for a hidden target vertex
    Search {
        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,

        /// Answer queries automatically for this target instead of prompting
        #[arg(long, short)]
        target: Option<String>,

        /// Median strategy (on_demand, precomputed)
        #[arg(long, value_parser = parse_median_strategy)]
        strategy: Option<MedianStrategy>,

        /// Give up after this many queries
        #[arg(long)]
        max_queries: Option<usize>,
    },

    /// Print the median of a set of vertices
    Median {
        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,

        /// Vertices to take the median of (all vertices if omitted)
        vertices: Vec<String>,

        /// Median strategy (on_demand, precomputed)
        #[arg(long, value_parser = parse_median_strategy)]
        strategy: Option<MedianStrategy>,
    },

    /// Print shortest distances and predecessor edges from a vertex
    Tree {
        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,

        /// Source vertex
        start: String,
    },

    /// List the vertices whose shortest paths from START leave through NEIGHBOR
    Targets {
        /// Graph file (.toml, .json, .yaml)
        graph: PathBuf,

        /// Queried vertex
        start: String,

        /// Neighbor of START the feedback edge leads to
        neighbor: String,
    },
}
