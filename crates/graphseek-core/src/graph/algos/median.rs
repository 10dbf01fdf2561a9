//! Graph median selection
//!
//! The median of a subset `S` is the vertex `m` of the whole graph minimizing
//! `sum over s in S of distance(m, s)`. Ties go to the vertex declared first.

use crate::error::{Result, SeekError};
use crate::graph::algos::ShortestPathTree;
use crate::graph::types::Vertex;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

/// Picks the median of a candidate subset
pub trait MedianSelector<V> {
    fn median(&self, subset: &[V]) -> Result<V>;
}

/// How the search engine computes medians
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedianStrategy {
    /// Recompute one shortest-path tree per vertex on every call
    OnDemand,
    /// Compute the all-pairs distance table once and reuse it
    #[default]
    Precomputed,
}

impl MedianStrategy {
    /// Build the selector for `graph`
    pub fn selector<'g, V: Vertex + 'g>(
        self,
        graph: &'g Graph<V>,
    ) -> Result<Box<dyn MedianSelector<V> + 'g>> {
        Ok(match self {
            MedianStrategy::OnDemand => Box::new(OnDemandMedian::new(graph)),
            MedianStrategy::Precomputed => Box::new(DistanceTable::build(graph)?),
        })
    }
}

impl FromStr for MedianStrategy {
    type Err = SeekError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "on_demand" => Ok(MedianStrategy::OnDemand),
            "precomputed" => Ok(MedianStrategy::Precomputed),
            other => Err(SeekError::unsupported(
                "median strategy",
                other,
                "on_demand, precomputed",
            )),
        }
    }
}

impl fmt::Display for MedianStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MedianStrategy::OnDemand => write!(f, "on_demand"),
            MedianStrategy::Precomputed => write!(f, "precomputed"),
        }
    }
}

/// Index of the smallest total, keeping the first on ties
fn arg_min(totals: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, total) in totals.into_iter().enumerate() {
        if best.is_none_or(|(_, best_total)| total < best_total) {
            best = Some((idx, total));
        }
    }
    best.map(|(idx, _)| idx)
}

/// The vertex of `graph` minimizing the total distance to `subset`.
///
/// Computes a shortest-path tree from every vertex, so each call costs
/// `|V|` Dijkstra runs. See [`DistanceTable`] for repeated queries.
#[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.len()))]
pub fn find_median<'a, V: Vertex + 'a>(
    graph: &Graph<V>,
    subset: impl IntoIterator<Item = &'a V>,
) -> Result<V> {
    let began = Instant::now();
    let subset: Vec<&V> = subset.into_iter().collect();

    let totals = graph
        .vertices()
        .iter()
        .map(|root| {
            ShortestPathTree::compute(graph, root)?.sum_of_distances(subset.iter().copied())
        })
        .collect::<Result<Vec<f64>>>()?;

    let idx = arg_min(totals.iter().copied()).ok_or(SeekError::EmptyGraph)?;
    crate::trace_time!(began, "find_median", subset = subset.len());
    debug!(median = ?graph.vertex_at(idx), total = totals[idx], "median");

    Ok(graph.vertex_at(idx).clone())
}

/// Median selection that recomputes shortest-path trees on every call
#[derive(Debug, Clone, Copy)]
pub struct OnDemandMedian<'g, V> {
    graph: &'g Graph<V>,
}

impl<'g, V: Vertex> OnDemandMedian<'g, V> {
    pub fn new(graph: &'g Graph<V>) -> Self {
        Self { graph }
    }
}

impl<V: Vertex> MedianSelector<V> for OnDemandMedian<'_, V> {
    fn median(&self, subset: &[V]) -> Result<V> {
        find_median(self.graph, subset)
    }
}

/// All-pairs shortest distances, computed once for a static graph
#[derive(Debug, Clone)]
pub struct DistanceTable<'g, V> {
    graph: &'g Graph<V>,
    rows: Vec<Vec<f64>>,
}

impl<'g, V: Vertex> DistanceTable<'g, V> {
    #[tracing::instrument(level = "debug", skip_all, fields(vertices = graph.len()))]
    pub fn build(graph: &'g Graph<V>) -> Result<Self> {
        let began = Instant::now();
        let rows = graph
            .vertices()
            .iter()
            .map(|root| {
                let tree = ShortestPathTree::compute(graph, root)?;
                Ok((0..graph.len()).map(|idx| tree.distance_at(idx)).collect())
            })
            .collect::<Result<Vec<Vec<f64>>>>()?;
        crate::trace_time!(began, "distance_table");

        Ok(Self { graph, rows })
    }
}

impl<V: Vertex> MedianSelector<V> for DistanceTable<'_, V> {
    fn median(&self, subset: &[V]) -> Result<V> {
        let columns = subset
            .iter()
            .map(|vertex| self.graph.index_of(vertex))
            .collect::<Result<Vec<usize>>>()?;

        let totals = self
            .rows
            .iter()
            .map(|row| columns.iter().map(|&col| row[col]).sum::<f64>());

        let idx = arg_min(totals).ok_or(SeekError::EmptyGraph)?;
        debug!(median = ?self.graph.vertex_at(idx), "median");
        Ok(self.graph.vertex_at(idx).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Weight;

    fn path(n: usize) -> Graph<usize> {
        let mut graph = Graph::new(0..n).unwrap();
        for i in 1..n {
            graph.add_unit_edge(i - 1, i).unwrap();
        }
        graph
    }

    #[test]
    fn test_median_of_odd_path_is_middle() {
        let graph = path(7);
        assert_eq!(find_median(&graph, graph.vertices()).unwrap(), 3);
    }

    #[test]
    fn test_median_of_even_path_is_first_central_vertex() {
        let graph = path(6);
        // 2 and 3 tie; 2 is declared first
        assert_eq!(find_median(&graph, graph.vertices()).unwrap(), 2);
    }

    #[test]
    fn test_median_may_lie_outside_subset() {
        // star: the hub is closest to any two leaves
        let mut graph = Graph::new(["hub", "x", "y", "z"]).unwrap();
        for leaf in ["x", "y", "z"] {
            graph.add_unit_edge("hub", leaf).unwrap();
        }
        assert_eq!(find_median(&graph, &["x", "y", "z"]).unwrap(), "hub");
    }

    #[test]
    fn test_median_respects_weights() {
        let graph = Graph::from_edges(
            ["a", "b", "c"],
            [
                ("a", "b", Weight::new(10.0).unwrap()),
                ("b", "c", Weight::new(1.0).unwrap()),
            ],
        )
        .unwrap();
        assert_eq!(find_median(&graph, &["a", "b", "c"]).unwrap(), "b");
        assert_eq!(find_median(&graph, &["b", "c"]).unwrap(), "b");
    }

    #[test]
    fn test_empty_subset_picks_first_vertex() {
        let graph = path(4);
        assert_eq!(find_median(&graph, &[]).unwrap(), 0);
    }

    #[test]
    fn test_empty_graph_has_no_median() {
        let graph: Graph<usize> = Graph::new(Vec::new()).unwrap();
        assert!(matches!(
            find_median(&graph, &[]),
            Err(SeekError::EmptyGraph)
        ));
        let table = DistanceTable::build(&graph).unwrap();
        assert!(matches!(table.median(&[]), Err(SeekError::EmptyGraph)));
    }

    #[test]
    fn test_unknown_subset_vertex_is_an_error() {
        let graph = path(3);
        assert!(matches!(
            find_median(&graph, &[1, 9]),
            Err(SeekError::UnknownVertex { .. })
        ));
        let table = DistanceTable::build(&graph).unwrap();
        assert!(matches!(
            table.median(&[9]),
            Err(SeekError::UnknownVertex { .. })
        ));
    }

    #[test]
    fn test_distance_table_agrees_with_find_median() {
        let graph = Graph::from_edges(
            ["a", "b", "c", "d", "e", "f"],
            [
                ("a", "b", Weight::new(2.0).unwrap()),
                ("b", "c", Weight::new(1.0).unwrap()),
                ("c", "d", Weight::new(3.0).unwrap()),
                ("a", "e", Weight::new(1.0).unwrap()),
                ("e", "f", Weight::new(1.0).unwrap()),
                ("f", "d", Weight::new(1.0).unwrap()),
            ],
        )
        .unwrap();
        let table = DistanceTable::build(&graph).unwrap();

        let subsets: [&[&str]; 4] = [
            &["a", "b", "c", "d", "e", "f"],
            &["c", "d"],
            &["a"],
            &["b", "f", "d"],
        ];
        for subset in subsets {
            let owned: Vec<&str> = subset.to_vec();
            assert_eq!(
                table.median(&owned).unwrap(),
                find_median(&graph, subset).unwrap(),
                "subset {subset:?}"
            );
        }
    }

    #[test]
    fn test_strategy_selectors_agree() {
        let graph = path(5);
        let on_demand = MedianStrategy::OnDemand.selector(&graph).unwrap();
        let precomputed = MedianStrategy::Precomputed.selector(&graph).unwrap();
        assert_eq!(on_demand.median(&[0, 1, 4]).unwrap(), 1);
        assert_eq!(precomputed.median(&[0, 1, 4]).unwrap(), 1);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!(
            "on-demand".parse::<MedianStrategy>().unwrap(),
            MedianStrategy::OnDemand
        );
        assert_eq!(
            "Precomputed".parse::<MedianStrategy>().unwrap(),
            MedianStrategy::Precomputed
        );
        assert!("fastest".parse::<MedianStrategy>().is_err());
        assert_eq!(MedianStrategy::default().to_string(), "precomputed");
    }
}
