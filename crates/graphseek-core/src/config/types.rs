//! Configuration type definitions

use crate::graph::MedianStrategy;
use serde::{Deserialize, Serialize};

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How medians are computed during the search
    #[serde(default)]
    pub median_strategy: MedianStrategy,

    /// Reject oracle feedback that is not an edge out of the queried vertex
    #[serde(default = "default_validate_feedback")]
    pub validate_feedback: bool,

    /// Give up after this many oracle queries (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_queries: Option<usize>,

    /// Weight for graph-file edges written without one
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

fn default_validate_feedback() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            median_strategy: MedianStrategy::default(),
            validate_feedback: default_validate_feedback(),
            max_queries: None,
            default_weight: default_weight(),
        }
    }
}
