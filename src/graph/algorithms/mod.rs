//! Graph algorithms.
//!
//! Adjacency-based algorithms are generic over [`Adjacency`](crate::graph::Adjacency)
//! and take already-validated start vertices. Edge-list algorithms take a slice of
//! [`Edge`](crate::Edge)s plus a vertex count and validate it themselves.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs`] - Breadth-first search iterator
//! - [`dfs`] - Depth-first search iterator
//! - [`dfs_recursive`] - Recursive depth-first search, depth-bounded
//! - [`hop_distances`] - BFS level of every vertex
//! - [`shortest_hop_path`] - Path with the fewest edges
//!
//! ## Components and Cycles
//!
//! - [`count_connected_components`] - Number of connected components
//! - [`connected_components`] - The components themselves
//! - [`has_cycle`] - Check if a graph contains any cycle
//! - [`find_cycle`] - Find a cycle if one exists
//!
//! ## Weighted
//!
//! - [`dijkstra`] - Single-source shortest paths, non-negative weights
//! - [`kruskal_mst`] - Minimum spanning forest
//! - [`karger_min_cut`] / [`karger_min_cut_trials`] - Randomized global minimum cut
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | Components | O(V + E) | Reachability partitions |
//! | Cycle detection | O(V + E) | Dependency validation |
//! | Dijkstra (linear scan) | O(V² + E) | Dense graphs |
//! | Dijkstra (binary heap) | O((V + E) log V) | Sparse graphs |
//! | Kruskal | O(E log E) | Minimum spanning forest |
//! | Karger (one trial) | O(E α(V)) | Global min cut estimate |
//!
//! # Examples
//!
//! ```rust
//! use edgewise::{graph::algorithms, Graph, VertexId};
//!
//! let mut graph: Graph<u32> = Graph::new(3);
//! graph.add_directed_edge(0, 1, 1)?;
//! graph.add_directed_edge(1, 2, 1)?;
//!
//! let order: Vec<VertexId> = algorithms::dfs(&graph, VertexId::new(0)).collect();
//! assert_eq!(order, vec![VertexId::new(0), VertexId::new(1), VertexId::new(2)]);
//! assert!(!algorithms::has_cycle(&graph));
//! # Ok::<(), edgewise::Error>(())
//! ```

mod components;
mod cycles;
mod min_cut;
pub(crate) mod mst;
mod shortest_path;
mod traversal;

pub use components::{connected_components, count_connected_components};
pub use cycles::{find_cycle, has_cycle};
pub use min_cut::{karger_min_cut, karger_min_cut_trials};
pub use mst::{kruskal_mst, SpanningForest};
pub use shortest_path::{dijkstra, find_negative_edge, Distance, ShortestPaths};
pub use traversal::{
    bfs, dfs, dfs_recursive, hop_distances, shortest_hop_path, BfsIterator, DfsIterator,
};
