//! Adjacency-list graph store.
//!
//! [`Graph`] fixes its vertex count at construction and grows only by edges.
//! Each vertex owns an ordered list of `(neighbour, weight)` entries; insertion
//! order is preserved and determines traversal order.

use std::fmt;

use crate::{
    config::{DfsStrategy, EngineConfig},
    graph::{
        algorithms::{self, ShortestPaths, SpanningForest},
        Adjacency, Edge, VertexId, Weight,
    },
    Error, Result,
};

/// A weighted graph stored as adjacency lists.
///
/// # Type Parameters
///
/// * `W` - The edge weight type; see [`Weight`]
///
/// # Examples
///
/// ```rust
/// use edgewise::{Graph, VertexId};
///
/// let mut graph: Graph<u32> = Graph::new(4);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(0, 2, 4)?;
/// graph.add_edge(2, 3, 1)?;
///
/// assert_eq!(graph.bfs(0)?, vec![VertexId::new(0), VertexId::new(1), VertexId::new(2), VertexId::new(3)]);
/// assert_eq!(graph.count_connected_components(), 1);
///
/// let paths = graph.dijkstra(0)?;
/// assert_eq!(paths.distance(3).and_then(|d| d.finite()), Some(4));
/// # Ok::<(), edgewise::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W> {
    /// One neighbour list per vertex
    adjacency: Vec<Vec<(VertexId, W)>>,
    /// Total number of directed adjacency entries
    entry_count: usize,
}

impl<W: Weight> Graph<W> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
            entry_count: 0,
        }
    }

    /// Creates a graph with `vertex_count` vertices, reserving room for
    /// `edges_per_vertex` entries in every neighbour list.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, edges_per_vertex: usize) -> Self {
        Graph {
            adjacency: (0..vertex_count)
                .map(|_| Vec::with_capacity(edges_per_vertex))
                .collect(),
            entry_count: 0,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of directed adjacency entries. An undirected edge
    /// counts twice, a directed one once.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// # Errors
    ///
    /// See [`Graph::add_edge_with`].
    pub fn add_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.add_edge_with(u, v, weight, false)
    }

    /// Adds a directed edge from `u` to `v`.
    ///
    /// # Errors
    ///
    /// See [`Graph::add_edge_with`].
    pub fn add_directed_edge(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.add_edge_with(u, v, weight, true)
    }

    /// Adds an edge from `u` to `v`, and from `v` to `u` unless `directed`.
    ///
    /// Parallel edges and self-loops are accepted as-is. An undirected self-loop
    /// adds two entries to the same list.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidVertex`] if `u` or `v` is out of range
    /// - [`Error::InvalidWeight`] if `weight` is not finite (NaN or infinite)
    ///
    /// The graph is left unchanged on error.
    pub fn add_edge_with(&mut self, u: usize, v: usize, weight: W, directed: bool) -> Result<()> {
        let u = self.check_vertex(u)?;
        let v = self.check_vertex(v)?;
        if !weight.is_valid() {
            return Err(Error::InvalidWeight { src: u, dest: v });
        }

        self.adjacency[u.index()].push((v, weight));
        self.entry_count += 1;
        if !directed {
            self.adjacency[v.index()].push((u, weight));
            self.entry_count += 1;
        }
        Ok(())
    }

    /// Returns the `(neighbour, weight)` entries of `vertex` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Result<&[(VertexId, W)]> {
        let vertex = self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex.index()])
    }

    /// Returns the number of adjacency entries of `vertex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.neighbors(vertex).map(<[_]>::len)
    }

    /// Returns an iterator over all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertex_count()).map(VertexId::new)
    }

    /// Returns every adjacency entry as an [`Edge`].
    ///
    /// An undirected edge therefore appears twice, once per direction. Both
    /// copies are harmless for [`Graph::minimum_spanning_forest`], which never
    /// accepts the second.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<W>> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, list)| {
                list.iter().map(move |&(dest, weight)| Edge {
                    src: VertexId::new(src),
                    dest,
                    weight,
                })
            })
            .collect()
    }

    /// Returns the breadth-first visitation order from `start`.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::InvalidVertex`] if `start` is out of range
    pub fn bfs(&self, start: usize) -> Result<Vec<VertexId>> {
        let start = self.check_start(start)?;
        let order: Vec<VertexId> = algorithms::bfs(self, start).collect();
        tracing::debug!(%start, visited = order.len(), "bfs finished");
        Ok(order)
    }

    /// Returns the depth-first visitation order from `start` (iterative).
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::InvalidVertex`] if `start` is out of range
    pub fn dfs(&self, start: usize) -> Result<Vec<VertexId>> {
        let start = self.check_start(start)?;
        let order: Vec<VertexId> = algorithms::dfs(self, start).collect();
        tracing::debug!(%start, visited = order.len(), "dfs finished");
        Ok(order)
    }

    /// Returns the depth-first visitation order from `start` using recursion,
    /// bounded by [`EngineConfig::DEFAULT_RECURSION_LIMIT`].
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::InvalidVertex`] if `start` is out of range
    /// - [`Error::RecursionLimit`] if the search nests too deep
    pub fn dfs_recursive(&self, start: usize) -> Result<Vec<VertexId>> {
        let config = EngineConfig::default().with_dfs(DfsStrategy::Recursive);
        self.dfs_with(&config, start)
    }

    /// Returns the depth-first visitation order using the configured strategy.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::dfs_recursive`]; [`Error::RecursionLimit`] only applies
    /// to [`DfsStrategy::Recursive`].
    pub fn dfs_with(&self, config: &EngineConfig, start: usize) -> Result<Vec<VertexId>> {
        match config.dfs {
            DfsStrategy::Iterative => self.dfs(start),
            DfsStrategy::Recursive => {
                let start = self.check_start(start)?;
                let order = algorithms::dfs_recursive(self, start, config.recursion_limit)?;
                tracing::debug!(%start, visited = order.len(), "recursive dfs finished");
                Ok(order)
            }
        }
    }

    /// Returns the BFS level of every vertex from `start`, `None` if unreachable.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::InvalidVertex`] if `start` is out of range
    pub fn hop_distances(&self, start: usize) -> Result<Vec<Option<usize>>> {
        let start = self.check_start(start)?;
        Ok(algorithms::hop_distances(self, start))
    }

    /// Returns a path with the fewest edges from `start` to `end`, if any.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::InvalidVertex`] if `start` or `end` is out of range
    pub fn shortest_hop_path(&self, start: usize, end: usize) -> Result<Option<Vec<VertexId>>> {
        let start = self.check_start(start)?;
        let end = self.check_vertex(end)?;
        Ok(algorithms::shortest_hop_path(self, start, end))
    }

    /// Returns the number of connected components. An empty graph has none.
    #[must_use]
    pub fn count_connected_components(&self) -> usize {
        let count = algorithms::count_connected_components(self);
        tracing::debug!(vertex_count = self.vertex_count(), count, "components counted");
        count
    }

    /// Returns the vertices of every connected component.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        algorithms::connected_components(self)
    }

    /// Returns `true` if the adjacency lists contain a directed cycle.
    ///
    /// Undirected edges are two opposite entries and count as a cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }

    /// Returns one directed cycle, closed (first == last), if any.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<VertexId>> {
        let cycle = algorithms::find_cycle(self);
        tracing::debug!(found = cycle.is_some(), "cycle search finished");
        cycle
    }

    /// Computes shortest distances from `source` with the default linear-scan frontier.
    ///
    /// # Errors
    ///
    /// See [`Graph::dijkstra_with`].
    pub fn dijkstra(&self, source: usize) -> Result<ShortestPaths<W>> {
        self.dijkstra_with(&EngineConfig::default(), source)
    }

    /// Computes shortest distances from `source` with the configured frontier.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no vertices
    /// - [`Error::InvalidVertex`] if `source` is out of range
    /// - [`Error::NegativeWeight`] if any adjacency entry has a negative weight
    pub fn dijkstra_with(&self, config: &EngineConfig, source: usize) -> Result<ShortestPaths<W>> {
        let source = self.check_start(source)?;
        if let Some((src, dest)) = algorithms::find_negative_edge(self) {
            return Err(Error::NegativeWeight { src, dest });
        }
        Ok(algorithms::dijkstra(self, source, config.frontier))
    }

    /// Builds a minimum spanning forest over the graph's edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGraph`] if the graph has no vertices.
    pub fn minimum_spanning_forest(&self) -> Result<SpanningForest<W>> {
        algorithms::kruskal_mst(&self.edges(), self.vertex_count())
    }

    fn check_vertex(&self, vertex: usize) -> Result<VertexId> {
        if vertex < self.vertex_count() {
            Ok(VertexId::new(vertex))
        } else {
            Err(invalid_vertex!(vertex, self.vertex_count()))
        }
    }

    fn check_start(&self, start: usize) -> Result<VertexId> {
        if self.is_empty() {
            return Err(Error::EmptyGraph);
        }
        self.check_vertex(start)
    }
}

impl<W: Weight> Adjacency for Graph<W> {
    type Weight = W;

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn adjacent(&self, vertex: VertexId) -> &[(VertexId, W)] {
        &self.adjacency[vertex.index()]
    }
}

/// Renders the adjacency-list view, one line per vertex: `v -> (n, w) (n, w)`.
impl<W: Weight> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex} ->")?;
            for (neighbor, weight) in list {
                write!(f, " ({}, {weight})", neighbor.index())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
