//! Shared layout for the implicit-binary-tree structures.
//!
//! A sequence of logical length `L` lives in the leaves of a complete binary
//! tree with `N = L.next_power_of_two()` leaves, flattened into one array:
//! node `k` (1-based) has children `2k` and `2k + 1`, the root is node 1 and
//! leaf `i` sits at slot `N + i`. Slots `[L, N)` are identity padding and are
//! never externally addressable; every public operation range-checks against
//! `L`.

/// Range update / point query tree
pub mod dual;
/// Range update / range fold tree with lazy propagation
pub mod lazy;
/// Point update / range fold tree
pub mod segment;

/// Bottom-up ordered stack of boundary ancestors.
///
/// At most one ancestor per tree level per boundary, so 64 slots cover any
/// 64-bit index space without spilling to the heap.
#[cfg(feature = "smallvec")]
pub(crate) type AncestorPath = smallvec::SmallVec<[usize; 64]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type AncestorPath = Vec<usize>;

#[cfg(all(not(feature = "smallvec"), not(feature = "std")))]
use alloc::vec::Vec;

/// Number of leaves covered by node `k` in a tree with `leaves` leaves.
#[inline]
pub(crate) fn node_width(leaves: usize, k: usize) -> usize {
    leaves >> k.ilog2()
}

/// Enumerates the ancestors that must be kept consistent around the
/// boundaries of the half-open leaf range `[start, end)`.
///
/// Walks both boundary slots upward in leaf space, recording a node whenever
/// the boundary cuts through it (a boundary whose index is still a multiple
/// of the level width is a proper node edge and needs no fixing, which the
/// lowest-set-bit quotients `x`/`y` capture), then records the shared
/// ancestors up to the root. The result is ordered children-first: iterate it
/// in reverse to propagate pending actions top-down, forward to rebuild node
/// data bottom-up.
///
/// One enumeration serves both phases, which is what keeps range operations
/// O(log N) instead of O(log² N).
pub(crate) fn ancestor_path(start: usize, end: usize, leaves: usize) -> AncestorPath {
    let mut path = AncestorPath::new();
    let mut kl = start + leaves;
    let mut kr = end + leaves;
    let x = (kl / (kl & kl.wrapping_neg())) >> 1;
    let y = (kr / (kr & kr.wrapping_neg())) >> 1;
    while 0 < kl && kl < kr {
        if kl <= x {
            path.push(kl);
        }
        if kr <= y {
            path.push(kr);
        }
        kl >>= 1;
        kr >>= 1;
    }
    while kl > 0 {
        path.push(kl);
        kl >>= 1;
    }
    path
}
