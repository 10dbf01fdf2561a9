use std::io::{BufRead, Write};

use graphseek_core::error::{Result, SeekError};
use graphseek_core::graph::Graph;
use graphseek_core::search::{Oracle, QueryResult};

/// Oracle that asks a person.
///
/// Each query asks whether the vertex is the target. On "no" the adjacency
/// lists are shown and a neighbor closer to the target is read, re-asking until
/// the answer names a neighbor of the queried vertex.
pub struct PromptOracle<'g, R, W> {
    graph: &'g Graph<String>,
    input: R,
    output: W,
}

impl<'g, R: BufRead, W: Write> PromptOracle<'g, R, W> {
    pub fn new(graph: &'g Graph<String>, input: R, output: W) -> Self {
        Self {
            graph,
            input,
            output,
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SeekError::Other(
                "input closed before the target was found".to_string(),
            ));
        }
        Ok(line.trim().to_string())
    }

    fn print_adjacency(&mut self) -> Result<()> {
        writeln!(self.output, "adjacency:")?;
        for vertex in self.graph.vertices() {
            let neighbors: Vec<String> = self
                .graph
                .incident_edges(vertex)?
                .iter()
                .map(|edge| format!("{} ({})", edge.target, edge.weight))
                .collect();
            writeln!(self.output, "  {}: {}", vertex, neighbors.join(", "))?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Oracle<String> for PromptOracle<'_, R, W> {
    fn query(&mut self, vertex: &String) -> Result<QueryResult<String>> {
        let reply = self.ask(&format!("is '{}' the target? [y/N]", vertex))?;
        if reply.to_lowercase().starts_with('y') {
            return Ok(QueryResult::Found);
        }

        self.print_adjacency()?;
        let graph = self.graph;
        loop {
            let next = self.ask(&format!("next vertex from '{}' toward the target:", vertex))?;
            match graph.edge(vertex, &next) {
                Ok(edge) => return Ok(QueryResult::Feedback(edge.clone())),
                Err(_) => writeln!(self.output, "'{}' is not a neighbor of '{}'", next, vertex)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn triangle() -> Graph<String> {
        let mut graph = Graph::new(["a", "b", "c"].map(String::from)).unwrap();
        graph.add_unit_edge("a".into(), "b".into()).unwrap();
        graph.add_unit_edge("b".into(), "c".into()).unwrap();
        graph
    }

    #[test]
    fn test_yes_means_found() {
        let graph = triangle();
        let mut output = Vec::new();
        let mut oracle = PromptOracle::new(&graph, Cursor::new("Y\n"), &mut output);

        assert_eq!(oracle.query(&"b".into()).unwrap(), QueryResult::Found);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("is 'b' the target? [y/N]"));
        assert!(!shown.contains("adjacency"));
    }

    #[test]
    fn test_any_answer_starting_with_y_means_found() {
        let graph = triangle();
        for reply in ["yeah\nb\n", "Yep\n", "y\n"] {
            let mut oracle = PromptOracle::new(&graph, Cursor::new(reply), Vec::new());
            assert_eq!(
                oracle.query(&"a".into()).unwrap(),
                QueryResult::Found,
                "reply {reply:?}"
            );
        }
    }

    #[test]
    fn test_blank_answer_means_no() {
        let graph = triangle();
        let mut oracle = PromptOracle::new(&graph, Cursor::new("\nb\n"), Vec::new());
        assert_eq!(
            oracle.query(&"a".into()).unwrap(),
            QueryResult::Feedback(graph.edge(&"a".into(), &"b".into()).unwrap().clone())
        );
    }

    #[test]
    fn test_reasks_until_a_neighbor_is_named() {
        let graph = triangle();
        let mut output = Vec::new();
        let mut oracle = PromptOracle::new(&graph, Cursor::new("n\nzz\nc\nb\n"), &mut output);

        let answer = oracle.query(&"a".into()).unwrap();
        assert_eq!(
            answer,
            QueryResult::Feedback(graph.edge(&"a".into(), &"b".into()).unwrap().clone())
        );

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("  b: a (1), c (1)"));
        assert!(shown.contains("'zz' is not a neighbor of 'a'"));
        assert!(shown.contains("'c' is not a neighbor of 'a'"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let graph = triangle();
        let mut oracle = PromptOracle::new(&graph, Cursor::new("n\n"), Vec::new());
        assert!(matches!(
            oracle.query(&"a".into()),
            Err(SeekError::Other(_))
        ));
    }
}
