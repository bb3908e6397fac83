//! Permutation building blocks.
//!
//! Crossover and mutation primitives for permutation-encoded genomes. These
//! operate on `usize` index slices over the value set `0..n` and are
//! domain-agnostic: tours, orderings, and any permutation problem can use
//! them directly.
//!
//! The crossover here is an order crossover with a *repair* step: segment
//! collisions are substituted with the next unvisited value from the base
//! parent, which guarantees a valid permutation for every segment draw at
//! the cost of not exactly preserving the donor's sub-ordering on collision.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

/// Checks that `perm` is a permutation of `0..perm.len()`.
pub fn is_valid_permutation(perm: &[usize]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Order crossover with collision repair.
///
/// Builds one offspring from `base` and `donor`:
///
/// 1. Copy `base[..start]` verbatim.
/// 2. Copy `donor[start..end]`, reversed when `reverse` is set.
/// 3. Copy `base[end..]`.
///
/// In steps 2 and 3, a value already present in the offspring is replaced by
/// the first unvisited value scanning `base` from `start`; when the tail scan
/// is exhausted the scan falls back to the whole of `base`. Because the
/// offspring is strictly shorter than `base` at that point, the fallback
/// always finds a value, so the result is a permutation for every choice of
/// `start`, `end`, and `reverse` — including the degenerate `start == end`
/// and `end == n` draws.
///
/// # Panics
/// Panics if the parents differ in length or `start <= end <= len` is
/// violated.
pub fn order_crossover_with_repair(
    base: &[usize],
    donor: &[usize],
    start: usize,
    end: usize,
    reverse: bool,
) -> Vec<usize> {
    let n = base.len();
    assert_eq!(n, donor.len(), "parents must have equal length");
    assert!(start <= end && end <= n, "segment out of bounds");

    let mut child = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    for &v in &base[..start] {
        child.push(v);
        visited[v] = true;
    }

    let segment = donor[start..end].iter().copied();
    if reverse {
        for v in segment.rev() {
            place_with_repair(v, base, start, &mut child, &mut visited);
        }
    } else {
        for v in segment {
            place_with_repair(v, base, start, &mut child, &mut visited);
        }
    }

    for &v in &base[end..] {
        place_with_repair(v, base, start, &mut child, &mut visited);
    }

    debug_assert!(is_valid_permutation(&child), "offspring is not a permutation");
    child
}

/// Appends `value` to the offspring, substituting a collision with the next
/// unvisited value from `base` (tail scan from `start`, then full scan).
fn place_with_repair(
    value: usize,
    base: &[usize],
    start: usize,
    child: &mut Vec<usize>,
    visited: &mut [bool],
) {
    let v = if visited[value] {
        base[start..]
            .iter()
            .copied()
            .find(|&c| !visited[c])
            .or_else(|| base.iter().copied().find(|&c| !visited[c]))
            .expect("offspring shorter than parent must leave an unvisited value")
    } else {
        value
    };
    child.push(v);
    visited[v] = true;
}

/// Reverses a random contiguous segment.
///
/// The segment starts at a uniform position and extends for a length drawn
/// from `min_len..=max_len`, truncated at the end of the slice.
///
/// # Complexity
/// O(n) worst case for the reversal
pub fn reverse_segment<R: Rng>(perm: &mut [usize], min_len: usize, max_len: usize, rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let start = rng.random_range(0..n);
    let len = rng.random_range(min_len..=max_len);
    let end = (start + len).min(n);
    perm[start..end].reverse();
}

/// Swaps two uniform random positions, repeated `0..=max_swaps` times.
///
/// # Complexity
/// O(max_swaps)
pub fn random_swaps<R: Rng>(perm: &mut [usize], max_swaps: usize, rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    for _ in 0..rng.random_range(0..=max_swaps) {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        perm.swap(i, j);
    }
}

/// Rotates the whole sequence by a signed offset, wrapping around.
///
/// Positive offsets rotate right (each value moves toward the back),
/// negative offsets rotate left. Zero is a no-op.
pub fn rotate_signed(perm: &mut [usize], offset: isize) {
    let n = perm.len();
    if n < 2 || offset == 0 {
        return;
    }
    let k = offset.unsigned_abs() % n;
    if offset > 0 {
        perm.rotate_right(k);
    } else {
        perm.rotate_left(k);
    }
}
