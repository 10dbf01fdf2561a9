//! Vertex search with shortest-path edge feedback
//!
//! Each round queries the median of the remaining candidates. The oracle either
//! confirms the target or names an edge on a shortest path toward it, and only
//! the candidates whose shortest paths from the median use that edge survive.
//! Because the median minimizes the total distance to the candidates, at most
//! half of them survive each round.

pub mod oracle;

use crate::config::SearchConfig;
use crate::error::{Result, SeekError};
use crate::graph::{possible_targets, Edge, Graph, MedianSelector, MedianStrategy, Vertex};
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

pub use oracle::{Oracle, QueryResult, TruthfulOracle};

/// Knobs for a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Reject feedback that is not an edge out of the queried vertex
    pub validate_feedback: bool,
    /// Fail instead of issuing more than this many queries
    pub max_queries: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            validate_feedback: true,
            max_queries: None,
        }
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            validate_feedback: config.validate_feedback,
            max_queries: config.max_queries,
        }
    }
}

/// One question and its answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRecord<V> {
    pub vertex: V,
    #[serde(flatten)]
    pub answer: QueryResult<V>,
    /// Candidates left after applying the answer
    pub remaining: usize,
}

/// Result of a completed search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome<V> {
    pub target: V,
    pub queries: Vec<QueryRecord<V>>,
}

impl<V> SearchOutcome<V> {
    pub fn query_count(&self) -> usize {
        self.queries.len()
    }
}

/// Runs the median elimination loop over one graph
pub struct SearchEngine<'g, V> {
    graph: &'g Graph<V>,
    selector: Box<dyn MedianSelector<V> + 'g>,
    options: SearchOptions,
}

impl<'g, V: Vertex + 'g> SearchEngine<'g, V> {
    /// Engine with the precomputed distance table and default options
    pub fn new(graph: &'g Graph<V>) -> Result<Self> {
        Self::with_strategy(graph, MedianStrategy::default())
    }

    pub fn with_strategy(graph: &'g Graph<V>, strategy: MedianStrategy) -> Result<Self> {
        Ok(Self {
            graph,
            selector: strategy.selector(graph)?,
            options: SearchOptions::default(),
        })
    }

    pub fn from_config(graph: &'g Graph<V>, config: &SearchConfig) -> Result<Self> {
        Ok(Self::with_strategy(graph, config.median_strategy)?.with_options(config.into()))
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Query medians until the oracle confirms a vertex or one candidate is left
    #[tracing::instrument(skip_all, fields(vertices = self.graph.len()))]
    pub fn run<O: Oracle<V> + ?Sized>(&self, oracle: &mut O) -> Result<SearchOutcome<V>> {
        let began = Instant::now();
        let mut candidates: Vec<V> = self.graph.vertices().to_vec();
        let mut queries: Vec<QueryRecord<V>> = Vec::new();

        while candidates.len() > 1 {
            if let Some(limit) = self.options.max_queries {
                if queries.len() >= limit {
                    return Err(SeekError::QueryLimitExceeded { limit });
                }
            }

            let median = self.selector.median(&candidates)?;
            let answer = oracle.query(&median)?;

            let remaining = match &answer {
                QueryResult::Found => 1,
                QueryResult::Feedback(edge) => {
                    self.check_feedback(&median, edge)?;
                    let legal = possible_targets(self.graph, &median, edge)?;
                    candidates.retain(|vertex| legal.contains(vertex));
                    candidates.len()
                }
            };

            debug!(
                query = queries.len() + 1,
                median = ?median,
                answer = ?answer,
                remaining,
                "query"
            );

            let found = matches!(answer, QueryResult::Found);
            queries.push(QueryRecord {
                vertex: median.clone(),
                answer,
                remaining,
            });

            if found {
                crate::trace_time!(began, "search", queries = queries.len());
                return Ok(SearchOutcome {
                    target: median,
                    queries,
                });
            }
        }

        let target = candidates.pop().ok_or(SeekError::NoCandidatesRemaining)?;
        crate::trace_time!(began, "search", queries = queries.len());
        debug!(target = ?target, queries = queries.len(), "search_complete");

        Ok(SearchOutcome { target, queries })
    }

    fn check_feedback(&self, queried: &V, edge: &Edge<V>) -> Result<()> {
        self.graph.index_of(&edge.source)?;
        self.graph.index_of(&edge.target)?;

        if !self.options.validate_feedback {
            return Ok(());
        }
        if !edge.is_incident_to(queried) {
            crate::bail_feedback!(
                queried,
                format!("edge {:?} -> {:?} does not leave it", edge.source, edge.target)
            );
        }
        if !self.graph.incident_edges(queried)?.contains(edge) {
            crate::bail_feedback!(
                queried,
                format!("{:?} -> {:?} is not an edge of the graph", edge.source, edge.target)
            );
        }
        Ok(())
    }
}

/// Find the oracle's target, returning only the vertex
pub fn binary_search<V: Vertex, O: Oracle<V> + ?Sized>(
    graph: &Graph<V>,
    oracle: &mut O,
) -> Result<V> {
    Ok(SearchEngine::new(graph)?.run(oracle)?.target)
}
