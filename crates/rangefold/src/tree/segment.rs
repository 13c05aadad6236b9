use crate::{check_index, into_range, Error, Monoid};
use core::ops::RangeBounds;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Point update / range fold tree over a [Monoid].
///
/// The classic segment tree: `update` rebuilds the O(log N) ancestor chain of
/// one leaf, `fold` walks the canonical decomposition of a half-open range
/// with separate left and right accumulators, so the operator need not
/// commute.
///
/// # Example
///
/// ```
/// use rangefold::{SegmentTree, algebra::min::I64MinMonoid};
///
/// let mut tree: SegmentTree<I64MinMonoid> =
///     SegmentTree::from_slice([5, 2, 8, -1, 3]).unwrap();
/// assert_eq!(tree.fold(0..3).unwrap(), 2);
/// tree.update(1, |v| v + 10).unwrap();
/// assert_eq!(tree.fold(0..3).unwrap(), 5);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "M: Default"))]
#[derive(Clone, Debug)]
pub struct SegmentTree<M: Monoid> {
    dat: Vec<M::Value>,
    leaves: usize,
    len: usize,
}

impl<M: Monoid> SegmentTree<M> {
    /// Creates an identity-filled tree over `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::ZeroCapacity);
        }
        let leaves = len.next_power_of_two();
        Ok(Self {
            dat: vec![M::IDENTITY; leaves << 1],
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

    /// Returns the value at `index` in O(1).
    pub fn get(&self, index: usize) -> Result<M::Value, Error> {
        check_index(index, self.len)?;
        Ok(self.dat[self.leaves + index])
    }

    /// Replaces the value at `index` with `f(current)` and rebuilds its
    /// ancestors, O(log N).
    pub fn update(
        &mut self,
        index: usize,
        f: impl FnOnce(M::Value) -> M::Value,
    ) -> Result<(), Error> {
        check_index(index, self.len)?;
        let mut k = self.leaves + index;
        self.dat[k] = f(self.dat[k]);
        k >>= 1;
        while k > 0 {
            self.dat[k] = M::combine(self.dat[k << 1], self.dat[k << 1 | 1]);
            k >>= 1;
        }
        Ok(())
    }

    /// Overwrites the value at `index`, O(log N).
    pub fn set(&mut self, index: usize, value: M::Value) -> Result<(), Error> {
        self.update(index, |_| value)
    }

    /// Folds the half-open range under the monoid, O(log N).
    ///
    /// An empty range folds to [Monoid::IDENTITY].
    pub fn fold<R>(&self, range: R) -> Result<M::Value, Error>
    where
        R: RangeBounds<usize>,
    {
        let range = into_range(&range, self.len)?;
        let mut left = M::IDENTITY;
        let mut right = M::IDENTITY;
        let mut l = range.start + self.leaves;
        let mut r = range.end.max(range.start) + self.leaves; // degenerate ranges fold to the identity
        while l < r {
            if l & 1 != 0 {
                left = M::combine(left, self.dat[l]);
                l += 1;
            }
            if r & 1 != 0 {
                r -= 1;
                right = M::combine(self.dat[r], right);
            }
            l >>= 1;
            r >>= 1;
        }
        Ok(M::combine(left, right))
    }

    /// Resets every element to the identity, reallocating the backing array.
    pub fn clear(&mut self) {
        self.dat = vec![M::IDENTITY; self.leaves << 1];
    }
}
