//! A fixed-size bit set for per-vertex flags.
//!
//! Traversals and Dijkstra keep one boolean per vertex (visited, finalized).
//! [`BitSet`] packs those flags 64 to a word, is allocated fresh for every
//! algorithm invocation, and dropped when the invocation returns.
//!
//! # Example
//!
//! ```rust
//! use edgewise::utils::BitSet;
//!
//! let mut visited = BitSet::new(100);
//! assert!(visited.insert(42));
//! assert!(!visited.insert(42));
//! assert!(visited.contains(42));
//! assert_eq!(visited.count(), 1);
//! ```

/// A fixed-capacity set of small integers backed by a bit vector.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, stored as a vector of words.
    words: Vec<u64>,
    /// The number of addressable bits.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set able to hold indices `[0, capacity)`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            len: capacity,
        }
    }

    /// Returns the capacity of this bit set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Sets the bit at `index`, returning `true` if it was previously clear.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn insert(&mut self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        let mask = 1u64 << (index % 64);
        let word = &mut self.words[index / 64];
        let was_clear = *word & mask == 0;
        *word |= mask;
        was_clear
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        assert!(index < self.len, "index out of bounds");
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Returns the number of bits set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl std::fmt::Debug for BitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries((0..self.len).filter(|&i| self.contains(i)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitset_insert_reports_novelty() {
        let mut bs = BitSet::new(10);
        assert!(bs.insert(3));
        assert!(!bs.insert(3));
        assert!(bs.contains(3));
        assert!(!bs.contains(4));
        assert_eq!(bs.count(), 1);
    }

    #[test]
    fn test_bitset_word_boundaries() {
        let mut bs = BitSet::new(130);
        assert!(bs.is_empty());
        for idx in [0, 63, 64, 127, 128, 129] {
            bs.insert(idx);
        }
        assert_eq!(bs.count(), 6);
        assert!(bs.contains(64));
        assert!(!bs.contains(65));
        assert_eq!(bs.len(), 130);
    }

    #[test]
    fn test_bitset_debug() {
        let mut bs = BitSet::new(8);
        bs.insert(1);
        bs.insert(5);
        assert_eq!(format!("{bs:?}"), "{1, 5}");
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_bitset_out_of_bounds() {
        let mut bs = BitSet::new(4);
        bs.insert(4);
    }
}
