use crate::error::{Result, SeekError};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a graph vertex.
///
/// Any cloneable, hashable type works; the binary uses `String`.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

/// Length of an edge.
///
/// Always finite and non-negative, which is what Dijkstra relies on.
/// `-0.0` is stored as `0.0` so equal weights hash equally.
#[derive(Debug, Clone, Copy, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    pub const DEFAULT: Weight = Weight(1.0);
    pub const ZERO: Weight = Weight(0.0);

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(SeekError::InvalidWeight { value });
        }
        // collapses -0.0
        Ok(Weight(value + 0.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Weight {}

impl Hash for Weight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Weight {
    type Error = SeekError;

    fn try_from(value: f64) -> Result<Self> {
        Weight::new(value)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(value as f64)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directed half of an undirected edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
    pub weight: Weight,
}

impl<V: Vertex> Edge<V> {
    pub fn new(source: V, target: V, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The same edge walked in the opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
        }
    }

    pub fn is_incident_to(&self, vertex: &V) -> bool {
        &self.source == vertex
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
