//! Static weighted undirected graph

use crate::error::{Result, SeekError};
use crate::graph::types::{Edge, Vertex, Weight};
use std::collections::HashMap;

/// Weighted undirected graph stored as per-vertex incidence lists.
///
/// Vertices keep their declaration order, which is the iteration order used by
/// every algorithm (and therefore the median tie-break). Each undirected edge is
/// stored twice, once in the incidence list of each endpoint.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    incident: Vec<Vec<Edge<V>>>,
    edge_count: usize,
}

impl<V: Vertex> Graph<V> {
    /// Declare the vertex set; every vertex starts with an empty incidence list
    pub fn new(vertices: impl IntoIterator<Item = V>) -> Result<Self> {
        let mut graph = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            incident: Vec::new(),
            edge_count: 0,
        };

        for vertex in vertices {
            if graph.index.contains_key(&vertex) {
                return Err(SeekError::duplicate_vertex(&vertex));
            }
            graph.index.insert(vertex.clone(), graph.vertices.len());
            graph.vertices.push(vertex);
            graph.incident.push(Vec::new());
        }

        Ok(graph)
    }

    /// Declare the vertices and add every `(u, v, weight)` edge
    pub fn from_edges(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertices)?;
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Insert the undirected edge as the mirrored pair `u -> v` and `v -> u`
    pub fn add_edge(&mut self, u: V, v: V, weight: Weight) -> Result<()> {
        let u_idx = self.index_of(&u)?;
        let v_idx = self.index_of(&v)?;

        let forward = Edge::new(u, v, weight);
        let backward = forward.reversed();
        self.incident[u_idx].push(forward);
        self.incident[v_idx].push(backward);
        self.edge_count += 1;

        Ok(())
    }

    /// Insert an edge with the default weight of 1
    pub fn add_unit_edge(&mut self, u: V, v: V) -> Result<()> {
        self.add_edge(u, v, Weight::DEFAULT)
    }

    /// The edge record from `u` to `v`.
    ///
    /// Intended for simple graphs; with parallel edges the first one added wins.
    pub fn edge(&self, u: &V, v: &V) -> Result<&Edge<V>> {
        self.incident_edges(u)?
            .iter()
            .find(|e| &e.target == v)
            .ok_or_else(|| SeekError::edge_not_found(u, v))
    }

    /// Edges leaving `vertex`, in insertion order
    pub fn incident_edges(&self, vertex: &V) -> Result<&[Edge<V>]> {
        let idx = self.index_of(vertex)?;
        Ok(&self.incident[idx])
    }

    /// Vertices in declaration order
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Position of `vertex` in declaration order
    pub fn index_of(&self, vertex: &V) -> Result<usize> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| SeekError::unknown_vertex(vertex))
    }

    pub(crate) fn vertex_at(&self, idx: usize) -> &V {
        &self.vertices[idx]
    }

    pub(crate) fn incident_at(&self, idx: usize) -> &[Edge<V>] {
        &self.incident[idx]
    }
}
