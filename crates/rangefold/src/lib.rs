//! rangefold maintains fixed-length sequences under range folds and range updates
//!
//! The crate provides five array-backed implicit-binary-tree structures that
//! share one algebraic data model ([Monoid] + [Action]):
//!
//! - [SegmentTree]: point update / range fold
//! - [DualSegmentTree]: range update / point query
//! - [LazySegmentTree]: range update / range fold with lazy propagation
//! - [FenwickTree]: prefix folds over an invertible operator
//! - [SparseTable]: O(1) range folds over a static sequence and an idempotent operator
//!
//! # Example
//!
//! ```
//! use rangefold::{LazySegmentTree, algebra::{sum::U64SumMonoid, add::U64AddAction}};
//!
//! let mut tree: LazySegmentTree<U64SumMonoid, U64AddAction> =
//!     LazySegmentTree::from_slice([0, 1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(tree.fold(3..5).unwrap(), 7);
//! tree.apply(0..5, 10).unwrap();
//! assert_eq!(tree.fold(0..4).unwrap(), 46);
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(nonstandard_style, missing_copy_implementations, missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::{
    fmt,
    fmt::Display,
    matches,
    ops::{Bound, Range, RangeBounds},
    write,
};

/// Monoid and action contracts plus a set of pre-defined algebra implementations
pub mod algebra;
/// Prefix-fold structure over an invertible monoid
pub mod fenwick;
/// Static idempotent-operator structure with O(1) folds
pub mod sparse;
/// Implicit-binary-tree structures sharing a flat-array layout
pub mod tree;

pub use algebra::{Action, Monoid};
pub use fenwick::FenwickTree;
pub use sparse::SparseTable;
pub use tree::{dual::DualSegmentTree, lazy::LazySegmentTree, segment::SegmentTree};

/// A type containing error variants that may arise when operating on a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The queried half-open range does not fit within the sequence
    RangeOutOfBounds {
        /// Inclusive start of the rejected range
        start: usize,
        /// Exclusive end of the rejected range
        end: usize,
        /// Logical length of the sequence
        len: usize,
    },
    /// The queried index does not fit within the sequence
    IndexOutOfBounds {
        /// The rejected index
        index: usize,
        /// Logical length of the sequence
        len: usize,
    },
    /// A structure was requested with capacity zero
    ZeroCapacity,
    /// The operation needs a capability the supplied algebra does not provide
    Unsupported(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RangeOutOfBounds { start, end, len } => {
                write!(f, "segment [{start}, {end}) is not in [0, {len})")
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is not in [0, {len})")
            }
            Error::ZeroCapacity => {
                write!(f, "structures over an empty sequence are not representable")
            }
            Error::Unsupported(what) => write!(f, "unsupported operation: {what}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Returns `true` if the error represents an out-of-bounds range or index
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(
            self,
            Error::RangeOutOfBounds { .. } | Error::IndexOutOfBounds { .. }
        )
    }
    /// Returns `true` if the error represents [Error::Unsupported]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}

/// Resolves a generic range against the logical sequence length.
///
/// Rejects ranges reaching past `len` before the caller mutates anything.
/// Degenerate ranges (`start >= end`) resolve fine and are treated by callers
/// as no-ops.
#[inline]
pub(crate) fn into_range<R>(range: &R, len: usize) -> Result<Range<usize>, Error>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&n) => n,
        // an excluded start of usize::MAX has no representable successor
        Bound::Excluded(&n) => match n.checked_add(1) {
            Some(start) => start,
            None => return Err(Error::RangeOutOfBounds { start: n, end: len, len }),
        },
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&n) => match n.checked_add(1) {
            Some(end) => end,
            None => return Err(Error::RangeOutOfBounds { start, end: n, len }),
        },
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };
    if start > len || end > len {
        return Err(Error::RangeOutOfBounds { start, end, len });
    }
    Ok(start..end)
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), Error> {
    if index >= len {
        return Err(Error::IndexOutOfBounds { index, len });
    }
    Ok(())
}
