use crate::error::Result;
use crate::graph::types::{Edge, Vertex};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;
use tracing::trace;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Single-source shortest paths, keeping every tied predecessor edge.
///
/// For each vertex `v` other than the start, `predecessors(v)` holds every edge
/// `u -> v` with `distance(u) + weight == distance(v)`. The start vertex never
/// has predecessors. Unreachable vertices sit at infinity with no predecessors.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g, V> {
    graph: &'g Graph<V>,
    start: usize,
    distance: Vec<f64>,
    predecessors: Vec<Vec<Edge<V>>>,
}

impl<'g, V: Vertex> ShortestPathTree<'g, V> {
    /// Run Dijkstra from `start`.
    ///
    /// Relies on non-negative weights, which `Weight` guarantees.
    #[tracing::instrument(level = "trace", skip(graph), fields(vertices = graph.len()))]
    pub fn compute(graph: &'g Graph<V>, start: &V) -> Result<Self> {
        let began = Instant::now();
        let start_idx = graph.index_of(start)?;
        let n = graph.len();

        let mut distance = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Vec<Edge<V>>> = vec![Vec::new(); n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        distance[start_idx] = 0.0;
        heap.push(Reverse(HeapEntry {
            vertex: start_idx,
            distance: 0.0,
        }));

        while let Some(Reverse(HeapEntry {
            vertex: current,
            distance: popped,
        })) = heap.pop()
        {
            // Outdated entry: a shorter distance was pushed after this one
            if settled[current] || popped > distance[current] {
                continue;
            }
            settled[current] = true;

            for edge in graph.incident_at(current) {
                let next = graph.index_of(&edge.target)?;
                if next == start_idx {
                    continue;
                }

                let candidate = distance[current] + edge.weight.value();
                let previous = distance[next];

                if candidate < previous {
                    distance[next] = candidate;
                    predecessors[next].clear();
                    predecessors[next].push(edge.clone());
                    heap.push(Reverse(HeapEntry {
                        vertex: next,
                        distance: candidate,
                    }));
                } else if candidate == previous && !predecessors[next].contains(edge) {
                    predecessors[next].push(edge.clone());
                }
            }
        }

        crate::trace_time!(began, "shortest_path_tree", vertices = n);
        trace!(reachable = settled.iter().filter(|s| **s).count(), "tree_complete");

        Ok(Self {
            graph,
            start: start_idx,
            distance,
            predecessors,
        })
    }

    pub fn start(&self) -> &V {
        self.graph.vertex_at(self.start)
    }

    pub fn graph(&self) -> &'g Graph<V> {
        self.graph
    }

    /// Shortest distance from the start, `f64::INFINITY` when unreachable
    pub fn distance(&self, vertex: &V) -> Result<f64> {
        Ok(self.distance[self.graph.index_of(vertex)?])
    }

    /// Every edge that ends a shortest path from the start to `vertex`
    pub fn predecessors(&self, vertex: &V) -> Result<&[Edge<V>]> {
        Ok(&self.predecessors[self.graph.index_of(vertex)?])
    }

    pub fn is_reachable(&self, vertex: &V) -> Result<bool> {
        Ok(self.distance(vertex)?.is_finite())
    }

    /// Total distance from the start to every vertex of `subset`
    pub fn sum_of_distances<'a>(&self, subset: impl IntoIterator<Item = &'a V>) -> Result<f64>
    where
        V: 'a,
    {
        subset
            .into_iter()
            .try_fold(0.0, |total, vertex| Ok(total + self.distance(vertex)?))
    }

    /// One shortest path from the start to `vertex`, following first predecessors.
    ///
    /// Returns `None` when `vertex` is unreachable and an empty path for the start.
    pub fn path_to(&self, vertex: &V) -> Result<Option<Vec<Edge<V>>>> {
        let mut current = self.graph.index_of(vertex)?;
        if !self.distance[current].is_finite() {
            return Ok(None);
        }

        let mut path = Vec::new();
        while current != self.start {
            // The first predecessor always comes from a vertex settled earlier,
            // so this walk reaches the start.
            let Some(edge) = self.predecessors[current].first() else {
                break;
            };
            path.push(edge.clone());
            current = self.graph.index_of(&edge.source)?;
        }
        path.reverse();

        Ok(Some(path))
    }

    pub(crate) fn distance_at(&self, idx: usize) -> f64 {
        self.distance[idx]
    }

    pub(crate) fn predecessors_at(&self, idx: usize) -> &[Edge<V>] {
        &self.predecessors[idx]
    }
}
