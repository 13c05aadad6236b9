use super::{ancestor_path, AncestorPath};
use crate::{check_index, into_range, Action, Error, Monoid};
use core::ops::RangeBounds;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Range update / point query tree over an [Action].
///
/// The dual of [SegmentTree](crate::SegmentTree): updates are composed into
/// the O(log N) canonical nodes covering a range and only pushed down when a
/// point read descends through them. Because nothing is ever folded upward,
/// data is kept for the leaves alone.
///
/// # Example
///
/// ```
/// use rangefold::{DualSegmentTree, algebra::{add::I64AddAction, sum::I64SumMonoid}};
///
/// let mut tree: DualSegmentTree<I64SumMonoid, I64AddAction> =
///     DualSegmentTree::from_slice([0, 1, 2, 3, 4, 5]).unwrap();
/// tree.apply(0..3, 10).unwrap();
/// tree.apply(2..4, 10).unwrap();
/// assert_eq!(tree.get(2).unwrap(), 22);
/// assert_eq!(tree.get(4).unwrap(), 4);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "M: Default, A: Default"))]
#[derive(Clone, Debug)]
pub struct DualSegmentTree<M: Monoid, A: Action<M>> {
    dat: Vec<M::Value>,
    laz: Vec<A::Value>,
    leaves: usize,
    len: usize,
}

impl<M: Monoid, A: Action<M>> DualSegmentTree<M, A> {
    /// Creates an identity-filled tree over `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::ZeroCapacity);
        }
        let leaves = len.next_power_of_two();
        Ok(Self {
            dat: vec![M::IDENTITY; leaves],
            laz: vec![A::IDENTITY; leaves << 1],
            leaves,
            len,
        })
    }

    /// Builds a tree from an initial sequence in O(n).
    pub fn from_slice(src: impl AsRef<[M::Value]>) -> Result<Self, Error> {
        let src = src.as_ref();
        let mut tree = Self::with_capacity(src.len())?;
        tree.dat[..src.len()].copy_from_slice(src);
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
    /// An empty range is a no-op. Boundary ancestors are propagated top-down
    /// first so that a later read cannot push a stale ancestor's pending
    /// action over the one composed here.
    pub fn apply<R>(&mut self, range: R, action: A::Value) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        let range = into_range(&range, self.len)?;
        if range.start >= range.end {
            return Ok(());
        }
        let path = ancestor_path(range.start, range.end, self.leaves);
        self.propagate_down(&path);
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
        Ok(())
    }

    /// Returns the fully resolved value at `index`, O(log N).
    ///
    /// Takes `&mut self`: every pending action on the root-to-leaf path is
    /// pushed down on the way.
    pub fn get(&mut self, index: usize) -> Result<M::Value, Error> {
        check_index(index, self.len)?;
        let target = self.leaves + index;
        for shift in (1..=self.leaves.ilog2()).rev() {
            self.propagate(target >> shift);
        }
        self.propagate(target);
        Ok(self.dat[index])
    }

    /// Resets every element and pending action to the identities.
    pub fn clear(&mut self) {
        self.dat = vec![M::IDENTITY; self.leaves];
        self.laz = vec![A::IDENTITY; self.leaves << 1];
    }

    fn propagate_down(&mut self, path: &AncestorPath) {
        for &k in path.iter().rev() {
            self.propagate(k);
        }
    }

    /// Pushes node `k`'s pending action one level down (or into the leaf
    /// value) and clears the slot.
    fn propagate(&mut self, k: usize) {
        let pending = self.laz[k];
        if pending != A::IDENTITY {
            if k < self.leaves {
                let (l, r) = (k << 1, k << 1 | 1);
                self.laz[l] = A::compose(self.laz[l], pending);
                self.laz[r] = A::compose(self.laz[r], pending);
            } else {
                self.dat[k - self.leaves] = A::apply(self.dat[k - self.leaves], pending);
            }
            self.laz[k] = A::IDENTITY;
        }
    }
}
