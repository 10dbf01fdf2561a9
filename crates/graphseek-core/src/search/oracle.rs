use crate::error::{Result, SeekError};
use crate::graph::{Edge, Graph, ShortestPathTree, Vertex};
use serde::Serialize;

/// Answer to "is this vertex the target?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "answer", content = "edge", rename_all = "snake_case")]
pub enum QueryResult<V> {
    /// The queried vertex is the target
    Found,
    /// An edge out of the queried vertex lying on a shortest path to the target
    Feedback(Edge<V>),
}

/// Anything that knows the target.
///
/// When asked about `vertex` it must answer `Found` if `vertex` is the target
/// and otherwise an edge leaving `vertex` on some shortest path to the target.
/// Errors abort the search.
pub trait Oracle<V> {
    fn query(&mut self, vertex: &V) -> Result<QueryResult<V>>;
}

impl<V, F> Oracle<V> for F
where
    F: FnMut(&V) -> Result<QueryResult<V>>,
{
    fn query(&mut self, vertex: &V) -> Result<QueryResult<V>> {
        self(vertex)
    }
}

/// Oracle that answers truthfully for a fixed target.
///
/// Feedback is the mirror of the first predecessor edge of the queried vertex
/// in the shortest-path tree rooted at the target.
#[derive(Debug, Clone)]
pub struct TruthfulOracle<'g, V> {
    target: V,
    tree: ShortestPathTree<'g, V>,
    queries: usize,
}

impl<'g, V: Vertex> TruthfulOracle<'g, V> {
    pub fn new(graph: &'g Graph<V>, target: V) -> Result<Self> {
        let tree = ShortestPathTree::compute(graph, &target)?;
        Ok(Self {
            target,
            tree,
            queries: 0,
        })
    }

    pub fn target(&self) -> &V {
        &self.target
    }

    /// Number of questions answered so far
    pub fn queries(&self) -> usize {
        self.queries
    }
}

impl<V: Vertex> Oracle<V> for TruthfulOracle<'_, V> {
    fn query(&mut self, vertex: &V) -> Result<QueryResult<V>> {
        self.queries += 1;
        if vertex == &self.target {
            return Ok(QueryResult::Found);
        }

        // x -> vertex on a shortest path from the target means vertex -> x
        // is on a shortest path back to it
        let toward_target = self
            .tree
            .predecessors(vertex)?
            .first()
            .map(Edge::reversed)
            .ok_or_else(|| {
                SeekError::Other(format!(
                    "target {:?} is unreachable from {:?}",
                    self.target, vertex
                ))
            })?;

        Ok(QueryResult::Feedback(toward_target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Weight;

    #[test]
    fn test_truthful_oracle_points_along_shortest_path() {
        let graph = Graph::from_edges(
            ["a", "b", "c"],
            [
                ("a", "b", Weight::from(1)),
                ("b", "c", Weight::from(1)),
                ("a", "c", Weight::from(5)),
            ],
        )
        .unwrap();
        let mut oracle = TruthfulOracle::new(&graph, "c").unwrap();

        assert_eq!(oracle.query(&"c").unwrap(), QueryResult::Found);
        assert_eq!(
            oracle.query(&"a").unwrap(),
            QueryResult::Feedback(graph.edge(&"a", &"b").unwrap().clone())
        );
        assert_eq!(oracle.queries(), 2);
        assert_eq!(oracle.target(), &"c");
    }

    #[test]
    fn test_truthful_oracle_reports_unreachable_target() {
        let graph = Graph::new(["a", "b"]).unwrap();
        let mut oracle = TruthfulOracle::new(&graph, "b").unwrap();
        assert!(matches!(oracle.query(&"a"), Err(SeekError::Other(_))));
    }

    #[test]
    fn test_closures_are_oracles() {
        let mut asked = Vec::new();
        let mut oracle = |vertex: &u32| -> Result<QueryResult<u32>> {
            asked.push(*vertex);
            Ok(QueryResult::Found)
        };
        assert_eq!(oracle.query(&4).unwrap(), QueryResult::Found);
        assert_eq!(asked, vec![4]);
    }

    #[test]
    fn test_query_result_serializes_with_tag() {
        let found: QueryResult<String> = QueryResult::Found;
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            serde_json::json!({"answer": "found"})
        );

        let feedback = QueryResult::Feedback(Edge::new("a".to_string(), "b".to_string(), Weight::DEFAULT));
        let json = serde_json::to_value(&feedback).unwrap();
        assert_eq!(json["answer"], "feedback");
        assert_eq!(json["edge"]["target"], "b");
        assert_eq!(json["edge"]["weight"], 1.0);
    }
}
