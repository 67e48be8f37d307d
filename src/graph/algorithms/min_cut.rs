//! Randomized global minimum cut (Karger's contraction algorithm).
//!
//! A single trial repeatedly picks a uniformly random edge whose endpoints are
//! still in different super-vertices and contracts it, until two super-vertices
//! remain. The edges crossing between them form a cut. One trial finds the
//! minimum cut with probability at least `2 / (V * (V - 1))`, so callers
//! normally run [`karger_min_cut_trials`] and keep the smallest result.
//!
//! Contraction is tracked with a [`DisjointSet`]; edges that become internal to
//! a super-vertex are dropped from the candidate list as they are drawn. When
//! the candidates run out with more than two super-vertices left, the input was
//! disconnected and the cut is `0`.

use rand::Rng;

use crate::{
    graph::{algorithms::mst::validate_edges, Edge, Weight},
    utils::DisjointSet,
    Error, Result,
};

/// Runs one contraction trial and returns the size of the cut it found.
///
/// Weights are ignored; every edge counts once. Parallel edges count
/// individually and self-loops never cross a cut.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if `vertex_count == 0`
/// - [`Error::InvalidVertex`] if an endpoint is out of range
/// - [`Error::InvalidWeight`] if a weight is not finite (NaN or infinite)
pub fn karger_min_cut<W, R>(edges: &[Edge<W>], vertex_count: usize, rng: &mut R) -> Result<usize>
where
    W: Weight,
    R: Rng + ?Sized,
{
    if vertex_count == 0 {
        return Err(Error::EmptyGraph);
    }
    validate_edges(edges, vertex_count)?;

    Ok(contract(edges, vertex_count, rng))
}

/// Runs `trials` independent contraction trials and returns the smallest cut.
///
/// At least one trial is always run.
///
/// # Errors
///
/// Same as [`karger_min_cut`].
///
/// # Examples
///
/// ```rust
/// use edgewise::{graph::algorithms::karger_min_cut_trials, Edge};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// // Two triangles joined by the bridge 2 -- 3
/// let edges = [
///     Edge::new(0, 1, 1u32),
///     Edge::new(1, 2, 1),
///     Edge::new(2, 0, 1),
///     Edge::new(3, 4, 1),
///     Edge::new(4, 5, 1),
///     Edge::new(5, 3, 1),
///     Edge::new(2, 3, 1),
/// ];
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(karger_min_cut_trials(&edges, 6, 64, &mut rng)?, 1);
/// # Ok::<(), edgewise::Error>(())
/// ```
pub fn karger_min_cut_trials<W, R>(
    edges: &[Edge<W>],
    vertex_count: usize,
    trials: usize,
    rng: &mut R,
) -> Result<usize>
where
    W: Weight,
    R: Rng + ?Sized,
{
    if vertex_count == 0 {
        return Err(Error::EmptyGraph);
    }
    validate_edges(edges, vertex_count)?;

    let mut best = usize::MAX;
    for trial in 0..trials.max(1) {
        let cut = contract(edges, vertex_count, rng);
        tracing::trace!(trial, cut, "contraction trial");
        best = best.min(cut);
        if best == 0 {
            break;
        }
    }

    tracing::debug!(vertex_count, edge_count = edges.len(), trials, best, "karger finished");
    Ok(best)
}

fn contract<W, R>(edges: &[Edge<W>], vertex_count: usize, rng: &mut R) -> usize
where
    W: Weight,
    R: Rng + ?Sized,
{
    let mut sets = DisjointSet::new(vertex_count);
    let mut candidates: Vec<(usize, usize)> = edges
        .iter()
        .filter(|e| !e.is_self_loop())
        .map(|e| (e.src.index(), e.dest.index()))
        .collect();

    while sets.set_count() > 2 && !candidates.is_empty() {
        let pick = rng.gen_range(0..candidates.len());
        let (u, v) = candidates[pick];
        let (ru, rv) = (sets.root(u), sets.root(v));
        if ru == rv {
            candidates.swap_remove(pick);
            continue;
        }
        sets.link(ru, rv);
    }

    edges
        .iter()
        .filter(|e| sets.root(e.src.index()) != sets.root(e.dest.index()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;
    use rand::{rngs::StdRng, SeedableRng};

    fn cycle(n: usize) -> Vec<Edge<u32>> {
        (0..n).map(|v| Edge::new(v, (v + 1) % n, 1)).collect()
    }

    #[test]
    fn test_cycle_min_cut_is_two() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(karger_min_cut_trials(&cycle(8), 8, 200, &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_single_trial_is_an_upper_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let cut = karger_min_cut(&cycle(6), 6, &mut rng).unwrap();
            assert!(cut >= 2);
            assert!(cut <= 6);
        }
    }

    #[test]
    fn test_disconnected_cut_is_zero() {
        let edges = [Edge::new(0, 1, 1u32), Edge::new(2, 3, 1u32), Edge::new(3, 4, 1u32)];
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(karger_min_cut(&edges, 6, &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_parallel_edges_count_individually() {
        let edges = [Edge::new(0, 1, 1u32), Edge::new(1, 0, 1u32), Edge::new(0, 1, 1u32)];
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(karger_min_cut(&edges, 2, &mut rng).unwrap(), 3);
    }

    #[test]
    fn test_tiny_graphs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(karger_min_cut::<u32, _>(&[], 1, &mut rng).unwrap(), 0);
        assert_eq!(
            karger_min_cut::<u32, _>(&[], 0, &mut rng),
            Err(Error::EmptyGraph)
        );
        assert_eq!(
            karger_min_cut_trials(&[Edge::new(0, 5, 1u32)], 2, 4, &mut rng),
            Err(Error::InvalidVertex {
                vertex: VertexId::new(5),
                vertex_count: 2
            })
        );
    }

    #[test]
    fn test_zero_trials_runs_once() {
        let mut rng = StdRng::seed_from_u64(5);
        let edges = [Edge::new(0, 1, 1u32)];
        assert_eq!(karger_min_cut_trials(&edges, 2, 0, &mut rng).unwrap(), 1);
    }
}
