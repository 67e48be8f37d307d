//! Supporting data structures used by the graph algorithms.
//!
//! - [`BitSet`] - Fixed-size visited flags
//! - [`DisjointSet`] - Union-Find with path compression and union by rank

mod bitset;
mod disjoint_set;

pub use bitset::BitSet;
pub use disjoint_set::DisjointSet;
