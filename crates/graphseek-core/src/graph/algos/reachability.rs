//! Which targets remain possible after edge feedback

use crate::error::Result;
use crate::graph::algos::ShortestPathTree;
use crate::graph::types::{Edge, Vertex};
use crate::graph::Graph;
use std::collections::HashSet;
use tracing::trace;

impl<V: Vertex> ShortestPathTree<'_, V> {
    /// Memo table (indexed by vertex position) of whether `edge` lies on some
    /// shortest path from the start to that vertex.
    ///
    /// `edge` is on a path to `w` exactly when it is a predecessor of its own
    /// target and `w` can be reached from that target by walking predecessor
    /// links forwards. Each vertex is marked at most once, so branching ties and
    /// zero-weight cycles do not cause re-traversal.
    pub fn edge_reachable(&self, edge: &Edge<V>) -> Result<Vec<bool>> {
        let graph = self.graph();
        let n = graph.len();
        let mut reachable = vec![false; n];

        let entry = graph.index_of(&edge.target)?;
        graph.index_of(&edge.source)?;
        if !self.predecessors_at(entry).contains(edge) {
            return Ok(reachable);
        }

        // successors[u] = vertices having an edge out of u among their predecessors
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); n];
        for idx in 0..n {
            for pred in self.predecessors_at(idx) {
                successors[graph.index_of(&pred.source)?].push(idx);
            }
        }

        let mut stack = vec![entry];
        reachable[entry] = true;
        while let Some(current) = stack.pop() {
            for &next in &successors[current] {
                if !reachable[next] {
                    reachable[next] = true;
                    stack.push(next);
                }
            }
        }

        Ok(reachable)
    }
}

/// Vertices `w` such that `edge` lies on some shortest path from `start` to `w`.
///
/// `edge` should leave `start`; an edge that is on no shortest path out of
/// `start` yields the empty set.
#[tracing::instrument(level = "debug", skip(graph), fields(vertices = graph.len()))]
pub fn possible_targets<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    edge: &Edge<V>,
) -> Result<HashSet<V>> {
    let tree = ShortestPathTree::compute(graph, start)?;
    let reachable = tree.edge_reachable(edge)?;

    let targets: HashSet<V> = graph
        .vertices()
        .iter()
        .zip(reachable)
        .filter_map(|(vertex, keep)| keep.then(|| vertex.clone()))
        .collect();

    trace!(count = targets.len(), "possible_targets");
    Ok(targets)
}
