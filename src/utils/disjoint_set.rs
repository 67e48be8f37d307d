//! Union-Find (disjoint set) with path compression and union by rank.
//!
//! [`DisjointSet`] maintains a partition of the elements `[0, n)`. Each element
//! stores a parent pointer and each root a rank; following parent pointers from
//! any element terminates at a root whose parent is itself.
//!
//! # Invariants
//!
//! - `parent[root] == root` for every root, and every parent chain is finite
//! - a root's rank only increases when two roots of equal rank are merged
//! - `find` never changes which elements share a set, only the tree shape
//!
//! Path compression together with union by rank keeps trees shallow, giving
//! near-constant amortized `find` and `union`.
//!
//! # Examples
//!
//! ```rust
//! use edgewise::utils::DisjointSet;
//!
//! let mut sets = DisjointSet::new(5);
//! assert!(sets.union(0, 1)?);
//! assert!(sets.union(3, 4)?);
//! assert!(!sets.union(1, 0)?); // already together
//!
//! assert!(sets.same(0, 1)?);
//! assert!(!sets.same(1, 3)?);
//! assert_eq!(sets.set_count(), 3);
//! # Ok::<(), edgewise::Error>(())
//! ```

use crate::Result;

/// A partition of `[0, n)` into disjoint sets.
///
/// Public methods validate their arguments and return
/// [`Error::InvalidVertex`](crate::Error::InvalidVertex) for elements outside
/// `[0, n)`. The crate-internal `root` and `link` helpers
/// operate on validated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative (root) of the set containing `x`.
    ///
    /// Every element visited on the way to the root is re-pointed directly at the
    /// root. Runs iteratively, so arbitrarily long chains cannot exhaust the stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `x` is out of range.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root(x))
    }

    /// Recursive formulation of [`find`](Self::find).
    ///
    /// Compresses the path on the way back out of the recursion. Kept as a
    /// reference implementation; returns the same root as `find`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `x` is out of range.
    pub fn find_recursive(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root_recursive(x))
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root of lower rank is attached under the root of higher rank. On equal
    /// ranks the root of `y` goes under the root of `x`, whose rank grows by one.
    ///
    /// # Returns
    ///
    /// `true` if two distinct sets were merged, `false` if `x` and `y` were
    /// already in the same set (no-op).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if either element is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;

        let (rx, ry) = (self.root(x), self.root(y));
        if rx == ry {
            return Ok(false);
        }
        self.link(rx, ry);
        Ok(true)
    }

    /// Returns `true` if `x` and `y` belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if either element is out of range.
    pub fn same(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.root(x) == self.root(y))
    }

    /// Returns the rank stored for `x`. Only meaningful for roots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`](crate::Error::InvalidVertex) if `x` is out of range.
    pub fn rank(&self, x: usize) -> Result<u8> {
        self.check(x)?;
        Ok(self.rank[x])
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(invalid_vertex!(x, self.parent.len()))
        }
    }

    /// Iterative two-pass find: locate the root, then re-point the path at it.
    pub(crate) fn root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn root_recursive(&mut self, x: usize) -> usize {
        let parent = self.parent[x];
        if parent == x {
            return x;
        }
        let root = self.root_recursive(parent);
        self.parent[x] = root;
        root
    }

    /// Links two distinct roots by rank and returns the surviving root.
    pub(crate) fn link(&mut self, rx: usize, ry: usize) -> usize {
        debug_assert_ne!(rx, ry);
        self.sets -= 1;

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => {
                self.parent[rx] = ry;
                ry
            }
            std::cmp::Ordering::Greater => {
                self.parent[ry] = rx;
                rx
            }
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
                rx
            }
        }
    }
}
