// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # edgewise
//!
//! [![Crates.io](https://img.shields.io/crates/v/edgewise.svg)](https://crates.io/crates/edgewise)
//! [![Documentation](https://docs.rs/edgewise/badge.svg)](https://docs.rs/edgewise)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](LICENSE-APACHE)
//!
//! Classic graph algorithms over a weighted adjacency-list store: traversal, connectivity,
//! cycle detection, union-find, shortest paths, minimum spanning forests and randomized
//! minimum cuts.
//!
//! ## Features
//!
//! - **Validated store** - Vertex indices and weights are checked once, at insertion or
//!   query time, and reported through [`Error`]
//! - **Deterministic traversal** - Iterative and recursive DFS produce identical orders
//! - **Generic weights** - Integer and float weights through the [`Weight`] trait
//! - **Stack-safe defaults** - Production paths are iterative; recursive variants are
//!   depth-bounded
//!
//! ## Quick Start
//!
//! ```rust
//! use edgewise::prelude::*;
//!
//! let mut graph: Graph<u32> = Graph::new(4);
//! graph.add_edge(0, 1, 1)?;
//! graph.add_edge(1, 2, 2)?;
//! graph.add_edge(0, 2, 4)?;
//! graph.add_edge(2, 3, 1)?;
//!
//! let order: Vec<usize> = graph.dfs(0)?.into_iter().map(VertexId::index).collect();
//! assert_eq!(order, vec![0, 1, 2, 3]);
//!
//! let paths = graph.dijkstra(0)?;
//! let dist: Vec<Option<u32>> = paths.distances().iter().map(|d| d.finite()).collect();
//! assert_eq!(dist, vec![Some(0), Some(1), Some(3), Some(4)]);
//!
//! let forest = graph.minimum_spanning_forest()?;
//! assert!(forest.is_spanning_tree());
//! assert_eq!(forest.total_weight(), 4);
//! # Ok::<(), edgewise::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`Graph`] store, [`VertexId`], [`Edge`], [`Weight`] and all algorithms
//!   under [`graph::algorithms`]
//! - [`utils`] - Supporting data structures: [`utils::DisjointSet`] and [`utils::BitSet`]
//! - [`config`] - [`EngineConfig`] for selecting algorithm variants
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` level when an
//! algorithm finishes and at `trace` level for individual steps. Install any subscriber
//! to see them; none is installed by the library.

#[macro_use]
pub(crate) mod error;

/// Algorithm variant selection.
pub mod config;

/// The graph store and its algorithms.
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use edgewise::prelude::*;
///
/// let mut graph: Graph<i64> = Graph::new(2);
/// graph.add_edge(0, 1, 3)?;
/// assert_eq!(graph.count_connected_components(), 1);
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

/// Supporting data structures.
pub mod utils;

/// `edgewise` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `edgewise` Error type
///
/// Returned by every fallible operation in this crate.
pub use error::Error;

pub use config::{DfsStrategy, EngineConfig, FrontierSelection};
pub use graph::{Edge, Graph, VertexId, Weight};
