use crate::{check_index, into_range, Error, Monoid};
use core::ops::RangeBounds;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Prefix-fold structure (binary indexed tree) over a [Monoid].
///
/// Point composition and prefix folds are O(log n) for any monoid and carry a
/// lighter constant factor than [SegmentTree](crate::SegmentTree). Arbitrary
/// range folds, point reads and [Self::update] subtract one prefix from
/// another, so they additionally need [Monoid::combine_inverse]; without it
/// they fail with [Error::Unsupported].
///
/// # Example
///
/// ```
/// use rangefold::{FenwickTree, algebra::sum::U64SumMonoid};
///
/// let mut tree: FenwickTree<U64SumMonoid> =
///     FenwickTree::from_slice([0, 1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(tree.fold(3..5).unwrap(), 7);
/// tree.update(2, |v| v * 2).unwrap();
/// assert_eq!(tree.fold(0..4).unwrap(), 8);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "M: Default"))]
#[derive(Clone, Debug)]
pub struct FenwickTree<M: Monoid> {
    /// 1-indexed; `dat[k]` folds the `lowest_set_bit(k)` elements ending at `k`.
    dat: Vec<M::Value>,
    len: usize,
}

impl<M: Monoid> FenwickTree<M> {
    /// Creates an identity-filled structure over `len` elements.
    pub fn with_capacity(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(Self {
            dat: vec![M::IDENTITY; len + 1],
            len,
        })
    }

    /// Builds the structure from an initial sequence in O(n).
    ///
    /// Each node folds in its slice element, then hands its partial fold to
    /// the next ancestor, so no node is visited twice.
    pub fn from_slice(src: impl AsRef<[M::Value]>) -> Result<Self, Error> {
        let src = src.as_ref();
        let mut tree = Self::with_capacity(src.len())?;
        for i in 1..=src.len() {
            tree.dat[i] = M::combine(tree.dat[i], src[i - 1]);
            let parent = i + lowest_set_bit(i);
            if parent <= tree.len {
                tree.dat[parent] = M::combine(tree.dat[parent], tree.dat[i]);
            }
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

    /// Folds element `index` with `value` in place, O(log n).
    ///
    /// This is the structure's native write: it composes on top of the
    /// current element and needs no inverse.
    pub fn affect(&mut self, index: usize, value: M::Value) -> Result<(), Error> {
        check_index(index, self.len)?;
        let mut k = index + 1;
        while k <= self.len {
            self.dat[k] = M::combine(self.dat[k], value);
            k += lowest_set_bit(k);
        }
        Ok(())
    }

    /// Folds the prefix `[0, end)`, O(log n). Works for any monoid and is
    /// faster than a general range fold.
    pub fn prefix_fold(&self, end: usize) -> Result<M::Value, Error> {
        if end > self.len {
            return Err(Error::RangeOutOfBounds {
                start: 0,
                end,
                len: self.len,
            });
        }
        let mut acc = M::IDENTITY;
        let mut k = end;
        while k > 0 {
            acc = M::combine(self.dat[k], acc);
            k -= lowest_set_bit(k);
        }
        Ok(acc)
    }

    /// Folds the half-open range as `prefix(end)` minus `prefix(start)`,
    /// O(log n). Needs [Monoid::combine_inverse].
    pub fn fold<R>(&self, range: R) -> Result<M::Value, Error>
    where
        R: RangeBounds<usize>,
    {
        let range = into_range(&range, self.len)?;
        if range.start >= range.end {
            return Ok(M::IDENTITY);
        }
        if range.start == 0 {
            return self.prefix_fold(range.end);
        }
        let inverse = M::combine_inverse()
            .ok_or(Error::Unsupported("range fold needs an invertible monoid"))?;
        Ok(inverse(
            self.prefix_fold(range.end)?,
            self.prefix_fold(range.start)?,
        ))
    }

    /// Returns the value at `index`, O(log n). Needs [Monoid::combine_inverse]
    /// unless `index` is 0.
    pub fn get(&self, index: usize) -> Result<M::Value, Error> {
        check_index(index, self.len)?;
        self.fold(index..index + 1)
    }

    /// Replaces the value at `index` with `f(current)`, O(log n). Needs
    /// [Monoid::combine_inverse].
    pub fn update(
        &mut self,
        index: usize,
        f: impl FnOnce(M::Value) -> M::Value,
    ) -> Result<(), Error> {
        check_index(index, self.len)?;
        let inverse = M::combine_inverse()
            .ok_or(Error::Unsupported("point update needs an invertible monoid"))?;
        let current = self.fold(index..index + 1)?;
        self.affect(index, inverse(f(current), current))
    }

    /// Resets every element to the identity, reallocating the backing array.
    pub fn clear(&mut self) {
        self.dat = vec![M::IDENTITY; self.len + 1];
    }
}

#[inline]
fn lowest_set_bit(k: usize) -> usize {
    k & k.wrapping_neg()
}
