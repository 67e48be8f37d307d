//! # edgewise Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the edgewise library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all edgewise operations
pub use crate::Error;

/// The result type used throughout edgewise
pub use crate::Result;

/// Algorithm variant selection
pub use crate::config::{DfsStrategy, EngineConfig, FrontierSelection};

// ================================================================================================
// Graph Store
// ================================================================================================

/// Store, identities and weights
pub use crate::graph::{Adjacency, Edge, Graph, VertexId, Weight};

// ================================================================================================
// Algorithm Results
// ================================================================================================

/// Shortest-path and spanning-forest results
pub use crate::graph::algorithms::{Distance, ShortestPaths, SpanningForest};

/// Union-Find
pub use crate::utils::DisjointSet;
