//! Adjacency-list graph store and the algorithms that run on it.
//!
//! # Architecture
//!
//! - [`Graph`] owns the vertex count and one ordered neighbour list per vertex
//! - [`VertexId`] is the positional identity of a vertex
//! - [`Edge`] is the `(src, dest, weight)` triple used by edge-list algorithms
//! - [`Weight`] abstracts over integer and float edge weights
//! - [`Adjacency`] is the read-only view every traversal and shortest-path algorithm is
//!   generic over
//!
//! Undirected edges are stored as two directed adjacency entries. Multi-edges and
//! self-loops are kept as inserted; nothing is deduplicated.
//!
//! # Validation
//!
//! Public methods on [`Graph`] validate vertex indices and weights once and return
//! [`Error`](crate::Error) on bad input. The functions in [`algorithms`] take
//! [`VertexId`]s without reporting errors: an out-of-range start or source
//! reaches nothing, so traversals are empty, level tables and distance tables
//! are all unreachable, and hop paths are `None`.

pub mod algorithms;
mod dot;
mod edge;
mod store;
mod vertex;
mod weight;

pub use edge::Edge;
pub use store::Graph;
pub use vertex::VertexId;
pub use weight::Weight;

/// Read-only access to an adjacency list.
///
/// All traversal and shortest-path algorithms are written against this trait so
/// they can borrow the graph immutably for the duration of a query.
pub trait Adjacency {
    /// The edge weight type.
    type Weight: Weight;

    /// Returns the number of vertices `V`; valid vertices are `[0, V)`.
    fn vertex_count(&self) -> usize;

    /// Returns the `(neighbour, weight)` entries of `vertex` in insertion order.
    ///
    /// # Panics
    ///
    /// May panic if `vertex` is not in `[0, V)`. Callers validate first.
    fn adjacent(&self, vertex: VertexId) -> &[(VertexId, Self::Weight)];
}
