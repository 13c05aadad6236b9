use super::{ancestor_path, node_width, AncestorPath};
use crate::{check_index, into_range, Action, Error, Monoid};
use core::ops::RangeBounds;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Range update / range fold tree over a [Monoid] and an [Action].
///
/// The union of [SegmentTree](crate::SegmentTree) and
/// [DualSegmentTree](crate::DualSegmentTree): both operations run in
/// O(log N) by deferring updates in per-node lazy slots. Heavier per
/// operation than either specialized tree; prefer those when only one side
/// is needed.
///
/// Internally `dat[k]` holds the fold of `k`'s subtree *before* `k`'s own
/// pending action is applied; resolving a node applies the pending action
/// (scaled to the node's width) and hands it to the children's lazy slots.
/// Every read path resolves the nodes it visits, so callers always observe
/// fully materialized values.
///
/// # Example
///
/// ```
/// use rangefold::{LazySegmentTree, algebra::{add::I64AddAction, min::I64MinMonoid}};
///
/// let mut tree: LazySegmentTree<I64MinMonoid, I64AddAction> =
///     LazySegmentTree::from_slice([0, 1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(tree.fold(3..5).unwrap(), 3);
/// tree.apply(0..5, 10).unwrap();
/// assert_eq!(tree.fold(0..4).unwrap(), 10);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "M: Default, A: Default"))]
#[derive(Clone, Debug)]
pub struct LazySegmentTree<M: Monoid, A: Action<M>> {
    dat: Vec<M::Value>,
    laz: Vec<A::Value>,
    leaves: usize,
    len: usize,
}

impl<M: Monoid, A: Action<M>> LazySegmentTree<M, A> {
    /// Creates an identity-filled tree over `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::ZeroCapacity);
        }
        let leaves = len.next_power_of_two();
        Ok(Self {
            dat: vec![M::IDENTITY; leaves << 1],
            laz: vec![A::IDENTITY; leaves << 1],
            leaves,
            len,
        })
    }

    /// Builds a tree from an initial sequence in O(n).
    pub fn from_slice(src: impl AsRef<[M::Value]>) -> Result<Self, Error> {
        let src = src.as_ref();
        let mut tree = Self::with_capacity(src.len())?;
        tree.dat[tree.leaves..tree.leaves + src.len()].copy_from_slice(src);
        for k in (1..tree.leaves).rev() {
            tree.dat[k] = M::combine(tree.dat[k << 1], tree.dat[k << 1 | 1]);
        }
        Ok(tree)
    }

    /// Logical length of the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; the sequence length is fixed and positive.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Composes `action` into every element of the half-open range, O(log N).
    ///
    /// Three phases over one ancestor enumeration: resolve the boundary
    /// ancestors top-down, compose `action` into the canonical nodes covering
    /// the range, then rebuild the same ancestors bottom-up from their
    /// resolved children. An empty range is a no-op.
    pub fn apply<R>(&mut self, range: R, action: A::Value) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        let range = into_range(&range, self.len)?;
        if range.start >= range.end {
            return Ok(());
        }
        let path = ancestor_path(range.start, range.end, self.leaves);
        self.resolve_down(&path);
        let mut l = range.start + self.leaves;
        let mut r = range.end + self.leaves;
        while l < r {
            if l & 1 != 0 {
                self.laz[l] = A::compose(self.laz[l], action);
                l += 1;
            }
            if r & 1 != 0 {
                r -= 1;
                self.laz[r] = A::compose(self.laz[r], action);
            }
            l >>= 1;
            r >>= 1;
        }
        for &k in path.iter() {
            self.dat[k] = M::combine(self.resolve(k << 1), self.resolve(k << 1 | 1));
        }
        Ok(())
    }

    /// Folds the half-open range under the monoid, O(log N).
    ///
    /// Takes `&mut self`: pending actions along the boundary paths are forced
    /// so the canonical nodes read current data. An empty range folds to
    /// [Monoid::IDENTITY].
    pub fn fold<R>(&mut self, range: R) -> Result<M::Value, Error>
    where
        R: RangeBounds<usize>,
    {
        let range = into_range(&range, self.len)?;
        if range.start >= range.end {
            return Ok(M::IDENTITY);
        }
        let path = ancestor_path(range.start, range.end, self.leaves);
        self.resolve_down(&path);
        let mut left = M::IDENTITY;
        let mut right = M::IDENTITY;
        let mut l = range.start + self.leaves;
        let mut r = range.end + self.leaves;
        while l < r {
            if l & 1 != 0 {
                let forced = self.resolve(l);
                left = M::combine(left, forced);
                l += 1;
            }
            if r & 1 != 0 {
                r -= 1;
                let forced = self.resolve(r);
                right = M::combine(forced, right);
            }
            l >>= 1;
            r >>= 1;
        }
        Ok(M::combine(left, right))
    }

    /// Returns the fully resolved value at `index`, O(log N).
    ///
    /// Takes `&mut self`: every pending action on the root-to-leaf path is
    /// forced on the way down.
    pub fn get(&mut self, index: usize) -> Result<M::Value, Error> {
        check_index(index, self.len)?;
        let target = self.leaves + index;
        for shift in (1..=self.leaves.ilog2()).rev() {
            self.resolve(target >> shift);
        }
        Ok(self.resolve(target))
    }

    /// Resets every element and pending action to the identities.
    pub fn clear(&mut self) {
        self.dat = vec![M::IDENTITY; self.leaves << 1];
        self.laz = vec![A::IDENTITY; self.leaves << 1];
    }

    fn resolve_down(&mut self, path: &AncestorPath) {
        for &k in path.iter().rev() {
            self.resolve(k);
        }
    }

    /// Forces node `k`: applies its pending action to `dat[k]` scaled to the
    /// node's width, pushes the action into the children's lazy slots when
    /// `k` is internal, clears the slot and returns the current value.
    fn resolve(&mut self, k: usize) -> M::Value {
        let pending = self.laz[k];
        if pending != A::IDENTITY {
            let width = node_width(self.leaves, k);
            self.dat[k] = A::apply(self.dat[k], A::scale(pending, width));
            if k < self.leaves {
                let (l, r) = (k << 1, k << 1 | 1);
                self.laz[l] = A::compose(self.laz[l], pending);
                self.laz[r] = A::compose(self.laz[r], pending);
            }
            self.laz[k] = A::IDENTITY;
        }
        self.dat[k]
    }
}

#[cfg(all(test, feature = "sum", feature = "min"))]
mod tests {
    use super::*;
    use crate::algebra::{
        add::I64AddAction,
        min::I64MinMonoid,
        sum::{I64SumMonoid, U64SumMonoid},
    };

    #[test]
    fn sum_fold_with_add_action() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(tree.fold(3..5).unwrap(), 7);
        tree.apply(0..5, 10).unwrap();
        assert_eq!(tree.fold(0..4).unwrap(), 46);
        assert_eq!(tree.fold(0..6).unwrap(), 65);
    }

    #[test]
    fn min_fold_with_add_action() {
        let mut tree: LazySegmentTree<I64MinMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(tree.fold(3..5).unwrap(), 3);
        tree.apply(0..5, 10).unwrap();
        assert_eq!(tree.fold(0..4).unwrap(), 10);
        // index 5 was outside the applied range
        assert_eq!(tree.fold(0..6).unwrap(), 5);
    }

    #[test]
    fn nested_applies_compose() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64; 8]).unwrap();
        tree.apply(0..8, 1).unwrap();
        tree.apply(2..6, 10).unwrap();
        tree.apply(3..4, 100).unwrap();
        assert_eq!(tree.fold(0..8).unwrap(), 8 + 40 + 100);
        assert_eq!(tree.fold(3..4).unwrap(), 111);
        assert_eq!(tree.fold(2..3).unwrap(), 11);
        assert_eq!(tree.fold(6..8).unwrap(), 2);
    }

    #[test]
    fn point_reads_force_pending_actions() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64, 1, 2, 3, 4, 5]).unwrap();
        tree.apply(1..5, 7).unwrap();
        assert_eq!(tree.get(0).unwrap(), 0);
        assert_eq!(tree.get(1).unwrap(), 8);
        assert_eq!(tree.get(4).unwrap(), 11);
        assert_eq!(tree.get(5).unwrap(), 5);
        // folds after point reads still see the same sequence
        assert_eq!(tree.fold(0..6).unwrap(), 15 + 4 * 7);
    }

    #[test]
    fn folds_are_stable_across_repeats() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([3i64, 1, 4, 1, 5]).unwrap();
        tree.apply(1..4, 2).unwrap();
        let first = tree.fold(0..5).unwrap();
        for _ in 0..4 {
            assert_eq!(tree.fold(0..5).unwrap(), first);
        }
    }

    #[test]
    fn empty_ranges_do_nothing() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(tree.fold(2..2).unwrap(), 0);
        tree.apply(2..2, 1_000).unwrap();
        tree.apply(5..1, 1_000).unwrap();
        assert_eq!(tree.fold(0..6).unwrap(), 15);
    }

    #[test]
    fn bounds_are_enforced_before_mutation() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64, 1, 2, 3, 4, 5]).unwrap();
        assert!(tree.apply(3..9, 5).unwrap_err().is_out_of_bounds());
        assert!(tree.fold(0..7).unwrap_err().is_out_of_bounds());
        assert_eq!(
            tree.get(6).unwrap_err(),
            Error::IndexOutOfBounds { index: 6, len: 6 }
        );
        assert_eq!(tree.fold(0..6).unwrap(), 15);
    }

    #[test]
    fn single_element_tree() {
        let mut tree: LazySegmentTree<U64SumMonoid, crate::algebra::add::U64AddAction> =
            LazySegmentTree::with_capacity(1).unwrap();
        tree.apply(0..1, 9).unwrap();
        assert_eq!(tree.get(0).unwrap(), 9);
        assert_eq!(tree.fold(0..1).unwrap(), 9);
    }

    #[test]
    fn wide_then_narrow_applies_scale_correctly() {
        // a pending action sitting high in the tree must be scaled per node
        // width as it is pushed toward the leaves
        let mut tree: LazySegmentTree<U64SumMonoid, crate::algebra::add::U64AddAction> =
            LazySegmentTree::from_slice([0u64; 16]).unwrap();
        tree.apply(0..16, 3).unwrap();
        assert_eq!(tree.fold(0..16).unwrap(), 48);
        assert_eq!(tree.fold(5..6).unwrap(), 3);
        assert_eq!(tree.fold(4..12).unwrap(), 24);
    }

    #[test]
    fn point_read_after_full_range_apply() {
        // a full-range apply parks the action on the root; a point read must
        // still force it all the way down
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([0i64, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        tree.apply(0..8, 10).unwrap();
        assert_eq!(tree.get(0).unwrap(), 10);
        assert_eq!(tree.get(7).unwrap(), 17);
        assert_eq!(tree.fold(0..8).unwrap(), 28 + 80);
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree: LazySegmentTree<I64SumMonoid, I64AddAction> =
            LazySegmentTree::from_slice([1i64; 6]).unwrap();
        tree.apply(0..6, 5).unwrap();
        tree.clear();
        assert_eq!(tree.fold(0..6).unwrap(), 0);
        assert_eq!(tree.get(3).unwrap(), 0);
    }
}
