//! Configuration for algorithm variants.
//!
//! Most callers never need this module: the plain [`Graph`](crate::Graph) methods use
//! [`EngineConfig::default`]. It exists for callers that want the recursive reference
//! traversal, the heap-backed Dijkstra frontier, or a different recursion budget.

use strum::{Display, EnumIter, EnumString};

/// How Dijkstra picks the next vertex to finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum FrontierSelection {
    /// Scan every non-finalized vertex for the minimum distance. `O(V² + E)`.
    #[default]
    LinearScan,
    /// Pop the minimum from a binary heap with lazy deletion. `O((V + E) log V)`.
    BinaryHeap,
}

/// Which depth-first search implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum DfsStrategy {
    /// Explicit stack; no depth limit.
    #[default]
    Iterative,
    /// Call-stack recursion bounded by [`EngineConfig::recursion_limit`].
    Recursive,
}

/// Configuration for the traversal and shortest-path engines.
///
/// # Examples
///
/// ```rust
/// use edgewise::{DfsStrategy, EngineConfig, FrontierSelection};
///
/// let config = EngineConfig::default()
///     .with_frontier(FrontierSelection::BinaryHeap)
///     .with_dfs(DfsStrategy::Recursive)
///     .with_recursion_limit(512);
///
/// assert_eq!(config.recursion_limit, 512);
/// assert_eq!("binary-heap".parse::<FrontierSelection>().unwrap(), config.frontier);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Frontier selection used by Dijkstra (default: linear scan).
    pub frontier: FrontierSelection,

    /// Depth-first search implementation (default: iterative).
    pub dfs: DfsStrategy,

    /// Maximum recursion depth for the recursive reference implementations (default: 4096).
    pub recursion_limit: usize,
}

impl EngineConfig {
    /// Default recursion depth for the recursive DFS.
    pub const DEFAULT_RECURSION_LIMIT: usize = 4_096;

    /// Sets the Dijkstra frontier selection.
    #[must_use]
    pub fn with_frontier(mut self, frontier: FrontierSelection) -> Self {
        self.frontier = frontier;
        self
    }

    /// Sets the depth-first search strategy.
    #[must_use]
    pub fn with_dfs(mut self, dfs: DfsStrategy) -> Self {
        self.dfs = dfs;
        self
    }

    /// Sets the recursion limit for recursive variants.
    #[must_use]
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierSelection::default(),
            dfs: DfsStrategy::default(),
            recursion_limit: Self::DEFAULT_RECURSION_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.frontier, FrontierSelection::LinearScan);
        assert_eq!(config.dfs, DfsStrategy::Iterative);
        assert_eq!(config.recursion_limit, EngineConfig::DEFAULT_RECURSION_LIMIT);
    }

    #[test]
    fn test_strategy_names_roundtrip() {
        for frontier in FrontierSelection::iter() {
            let parsed: FrontierSelection = frontier.to_string().parse().unwrap();
            assert_eq!(parsed, frontier);
        }
        for dfs in DfsStrategy::iter() {
            let parsed: DfsStrategy = dfs.to_string().parse().unwrap();
            assert_eq!(parsed, dfs);
        }
        assert_eq!(FrontierSelection::LinearScan.to_string(), "linear-scan");
        assert!("depth-first".parse::<DfsStrategy>().is_err());
    }
}
