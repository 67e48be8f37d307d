//! Vertex identifier for adjacency-list graphs.
//!
//! Vertices have no payload of their own: identity is positional, so a vertex is
//! simply an index in `[0, V)`. [`VertexId`] wraps that index so it cannot be
//! mixed up with weights, counts or other integers flowing through the algorithms.

use std::fmt;

/// A strongly-typed identifier for a vertex of a [`Graph`](crate::Graph).
///
/// `VertexId` wraps a `usize` index in `[0, V)`. Every public entry point that
/// accepts a vertex validates it against the vertex count of the graph and
/// returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) when it is out of
/// range, so constructing an arbitrary `VertexId` is always safe.
///
/// # Examples
///
/// ```rust
/// use edgewise::VertexId;
///
/// let v = VertexId::new(3);
/// assert_eq!(v.index(), 3);
/// assert_eq!(v, VertexId::from(3));
/// assert_eq!(format!("{v}"), "v3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// # Arguments
    ///
    /// * `index` - The raw vertex index (0-based)
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw index value of this vertex.
    ///
    /// The index can be used directly to address per-vertex tables such as
    /// distance or visited arrays.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_id_roundtrip() {
        let vertex: VertexId = 123usize.into();
        assert_eq!(vertex.index(), 123);

        let raw: usize = VertexId::new(789).into();
        assert_eq!(raw, 789);
    }

    #[test]
    fn test_vertex_id_ordering() {
        let mut vertices = vec![VertexId::new(3), VertexId::new(1), VertexId::new(2)];
        vertices.sort();
        assert_eq!(
            vertices,
            vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)]
        );
    }

    #[test]
    fn test_vertex_id_hash() {
        let mut set: HashSet<VertexId> = HashSet::new();
        set.insert(VertexId::new(1));
        set.insert(VertexId::new(2));
        set.insert(VertexId::new(1));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_vertex_id_formatting() {
        let vertex = VertexId::new(42);
        assert_eq!(format!("{vertex:?}"), "VertexId(42)");
        assert_eq!(format!("{vertex}"), "v42");
    }

    #[test]
    fn test_vertex_id_table_indexing() {
        let distances = [0u32, 4, 9, 16];
        assert_eq!(distances[VertexId::new(2).index()], 9);
    }
}
