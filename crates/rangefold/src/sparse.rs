use crate::{into_range, Error, Monoid};
use core::ops::RangeBounds;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Static O(1) range-fold structure over an idempotent [Monoid].
///
/// A doubling table: `levels[l][i]` folds `[i, i + 2^l)`. A query picks the
/// largest power-of-two window fitting the range and combines the two
/// covering windows; they overlap, which is why the operator must satisfy
/// `combine(x, x) == x` on top of associativity (min, max, bitwise and/or,
/// gcd — but not sums or xor). Construction refuses monoids that do not
/// report [Monoid::idempotent].
///
/// The table is immutable after the O(n log n) build; there is no update
/// operation and folds never mutate internal state.
///
/// # Example
///
/// ```
/// use rangefold::{SparseTable, algebra::min::I64MinMonoid};
///
/// let table: SparseTable<I64MinMonoid> =
///     SparseTable::from_slice([2, 4, 6, -1, 43, 21, -4, 4]).unwrap();
/// assert_eq!(table.fold(3..5).unwrap(), -1);
/// assert_eq!(table.fold(0..3).unwrap(), 2);
/// assert_eq!(table.fold(0..8).unwrap(), -4);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(bound = "M: Default"))]
#[derive(Clone, Debug)]
pub struct SparseTable<M: Monoid> {
    /// `levels[l][i]` holds the fold of `[i, i + 2^l)`; level `l` has
    /// `n - 2^l + 1` entries.
    levels: Vec<Vec<M::Value>>,
    len: usize,
}

impl<M: Monoid> SparseTable<M> {
    /// Builds the doubling table from a sequence, O(n log n) time and space.
    ///
    /// Fails with [Error::ZeroCapacity] on an empty slice and
    /// [Error::Unsupported] when the monoid is not idempotent.
    pub fn from_slice(src: impl AsRef<[M::Value]>) -> Result<Self, Error> {
        let src = src.as_ref();
        if src.is_empty() {
            return Err(Error::ZeroCapacity);
        }
        if !M::idempotent() {
            return Err(Error::Unsupported(
                "sparse table folds overlapping windows and needs an idempotent monoid",
            ));
        }
        let len = src.len();
        let height = len.ilog2() as usize + 1;
        let mut levels = Vec::with_capacity(height);
        levels.push(src.to_vec());
        for level in 1..height {
            let half = 1 << (level - 1);
            let prev = &levels[level - 1];
            let row = (0..len - (half << 1) + 1)
                .map(|i| M::combine(prev[i], prev[i + half]))
                .collect();
            levels.push(row);
        }
        Ok(Self { levels, len })
    }

    /// Logical length of the sequence.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; empty tables are not constructible.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Folds the half-open range in O(1).
    ///
    /// An empty range folds to [Monoid::IDENTITY].
    pub fn fold<R>(&self, range: R) -> Result<M::Value, Error>
    where
        R: RangeBounds<usize>,
    {
        let range = into_range(&range, self.len)?;
        if range.start >= range.end {
            return Ok(M::IDENTITY);
        }
        let level = (range.end - range.start).ilog2() as usize;
        Ok(M::combine(
            self.levels[level][range.start],
            self.levels[level][range.end - (1 << level)],
        ))
    }
}
