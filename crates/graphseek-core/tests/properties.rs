//! Property tests for shortest-path trees, medians and the search loop
//!
//! Graphs are small (at most 7 vertices) so brute-force path enumeration stays
//! cheap. Integer weights keep every distance exact.

use graphseek_core::error::Result;
use graphseek_core::graph::{find_median, possible_targets, Graph, ShortestPathTree, Weight};
use graphseek_core::search::{Oracle, QueryResult, SearchEngine, TruthfulOracle};
use proptest::prelude::*;
use proptest::sample::Index;

/// Any graph: possibly disconnected, zero weights allowed
fn arb_graph() -> impl Strategy<Value = Graph<usize>> {
    (1usize..=7)
        .prop_flat_map(|n| {
            let edges = proptest::collection::vec((0..n, 0..n, 0u32..5), 0..12);
            (Just(n), edges)
        })
        .prop_map(|(n, edges)| {
            let mut graph = Graph::new(0..n).unwrap();
            for (u, v, w) in edges {
                if u != v {
                    graph.add_edge(u, v, Weight::from(w)).unwrap();
                }
            }
            graph
        })
}

/// Connected graph with positive weights: a random spanning tree plus chords
fn arb_connected_graph() -> impl Strategy<Value = Graph<usize>> {
    (1usize..=7)
        .prop_flat_map(|n| {
            let parents = proptest::collection::vec((any::<Index>(), 1u32..5), n - 1);
            let chords = proptest::collection::vec((0..n, 0..n, 1u32..5), 0..6);
            (Just(n), parents, chords)
        })
        .prop_map(|(n, parents, chords)| {
            let mut graph = Graph::new(0..n).unwrap();
            for (i, (parent, w)) in parents.into_iter().enumerate() {
                let child = i + 1;
                graph
                    .add_edge(parent.index(child), child, Weight::from(w))
                    .unwrap();
            }
            for (u, v, w) in chords {
                if u != v {
                    graph.add_edge(u, v, Weight::from(w)).unwrap();
                }
            }
            graph
        })
}

/// Shortest distances by enumerating every simple path from `start`
fn brute_force_distances(graph: &Graph<usize>, start: usize) -> Vec<f64> {
    fn walk(
        graph: &Graph<usize>,
        at: usize,
        dist: f64,
        visited: &mut [bool],
        best: &mut [f64],
    ) {
        if dist < best[at] {
            best[at] = dist;
        }
        visited[at] = true;
        for edge in graph.incident_edges(&at).unwrap() {
            if !visited[edge.target] {
                walk(graph, edge.target, dist + edge.weight.value(), visited, best);
            }
        }
        visited[at] = false;
    }

    let mut best = vec![f64::INFINITY; graph.len()];
    let mut visited = vec![false; graph.len()];
    walk(graph, start, 0.0, &mut visited, &mut best);
    best
}

fn ceil_log2(n: usize) -> usize {
    (usize::BITS - (n.max(1) - 1).leading_zeros()) as usize
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn distances_match_brute_force(graph in arb_graph()) {
        for &start in graph.vertices() {
            let tree = ShortestPathTree::compute(&graph, &start).unwrap();
            let expected = brute_force_distances(&graph, start);
            for &v in graph.vertices() {
                prop_assert_eq!(tree.distance(&v).unwrap(), expected[v]);
            }
        }
    }

    #[test]
    fn predecessors_are_sound(graph in arb_graph()) {
        for &start in graph.vertices() {
            let tree = ShortestPathTree::compute(&graph, &start).unwrap();
            for &v in graph.vertices() {
                let preds = tree.predecessors(&v).unwrap();
                let dist = tree.distance(&v).unwrap();
                if v == start || dist.is_infinite() {
                    prop_assert!(preds.is_empty());
                    continue;
                }
                prop_assert!(!preds.is_empty());
                for edge in preds {
                    prop_assert_eq!(edge.target, v);
                    prop_assert_eq!(
                        tree.distance(&edge.source).unwrap() + edge.weight.value(),
                        dist
                    );
                }
            }
        }
    }

    #[test]
    fn edges_are_symmetric(graph in arb_graph()) {
        for &u in graph.vertices() {
            for edge in graph.incident_edges(&u).unwrap() {
                let mirror = graph.edge(&edge.target, &u).unwrap();
                prop_assert_eq!(mirror.target, u);
            }
        }
    }

    #[test]
    fn truthful_search_never_loses_the_target(graph in arb_connected_graph()) {
        let engine = SearchEngine::new(&graph).unwrap();

        for &target in graph.vertices() {
            let mut truthful = TruthfulOracle::new(&graph, target).unwrap();
            let mut checked = |vertex: &usize| -> Result<QueryResult<usize>> {
                let answer = truthful.query(vertex)?;
                if let QueryResult::Feedback(edge) = &answer {
                    let legal = possible_targets(&graph, vertex, edge)?;
                    assert!(legal.contains(&target), "feedback at {vertex} dropped {target}");
                }
                Ok(answer)
            };

            let outcome = engine.run(&mut checked).unwrap();
            prop_assert_eq!(outcome.target, target);
            // positive weights: each answer keeps at most half the candidates
            prop_assert!(outcome.query_count() <= ceil_log2(graph.len()));
        }
    }

    #[test]
    fn median_of_path_is_central(n in 1usize..20) {
        let mut graph = Graph::new(0..n).unwrap();
        for i in 1..n {
            graph.add_unit_edge(i - 1, i).unwrap();
        }
        let median = find_median(&graph, graph.vertices()).unwrap();
        let expected = if n % 2 == 1 { n / 2 } else { n / 2 - 1 };
        prop_assert_eq!(median, expected);
    }
}
