//! Graphviz DOT export for [`Graph`].

use std::fmt::Write;

use crate::graph::{Graph, Weight};

impl<W: Weight> Graph<W> {
    /// Generates a DOT representation of the graph for visualization.
    ///
    /// Symmetric adjacency pairs are not merged: an undirected edge is drawn as
    /// two arcs. The output can be rendered with Graphviz, e.g.
    /// `dot -Tpng graph.dot -o graph.png`.
    ///
    /// # Arguments
    ///
    /// * `title` - Optional graph label
    ///
    /// # Examples
    ///
    /// ```rust
    /// use edgewise::Graph;
    ///
    /// let mut graph: Graph<u32> = Graph::new(2);
    /// graph.add_directed_edge(0, 1, 7)?;
    ///
    /// let dot = graph.to_dot(Some("demo"));
    /// assert!(dot.contains("v0 -> v1 [label=\"7\"];"));
    /// # Ok::<(), edgewise::Error>(())
    /// ```
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        let mut dot = String::new();

        dot.push_str("digraph G {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=circle, fontname=\"Courier\", fontsize=10];\n");
        dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

        for vertex in self.vertices() {
            let _ = writeln!(dot, "    {vertex};");
        }

        dot.push('\n');

        for edge in self.edges() {
            let _ = writeln!(
                dot,
                "    {} -> {} [label=\"{}\"];",
                edge.src,
                edge.dest,
                escape_dot(&edge.weight.to_string())
            );
        }

        dot.push_str("}\n");
        dot
    }
}

/// Escapes characters with special meaning inside a quoted DOT string.
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_lists_vertices_and_arcs() {
        let mut graph: Graph<i32> = Graph::new(3);
        graph.add_edge(0, 1, -2).unwrap();

        let dot = graph.to_dot(None);
        assert!(dot.starts_with("digraph G {\n"));
        assert!(dot.contains("    v2;\n"));
        assert!(dot.contains("v0 -> v1 [label=\"-2\"];"));
        assert!(dot.contains("v1 -> v0 [label=\"-2\"];"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_title_is_escaped() {
        let graph: Graph<u32> = Graph::new(1);
        let dot = graph.to_dot(Some("say \"hi\"\nthere"));
        assert!(dot.contains("label=\"say \\\"hi\\\"\\nthere\";"));
    }
}
