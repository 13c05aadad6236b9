use core::fmt::Debug;

/// Range-add actions over the bundled sum/min/max monoids
pub mod add;
/// Max monoids (idempotent)
#[cfg(feature = "max")]
pub mod max;
/// Min monoids (idempotent)
#[cfg(feature = "min")]
pub mod min;
/// Sum monoids (invertible)
#[cfg(feature = "sum")]
pub mod sum;

/// Type alias for an inverse combine function.
///
/// `f(a, b)` removes `b`'s contribution from `a`, i.e.
/// `f(combine(x, b), b) == x`. The structures in this crate use it for
/// prefix subtraction, which additionally assumes the operator commutes;
/// all bundled invertible monoids do.
pub type InverseFn<T> = fn(T, T) -> T;

/// Fold-side algebra: an identity element plus an associative combine operator.
///
/// Laws (relied upon, never checked):
/// - `combine(IDENTITY, x) == combine(x, IDENTITY) == x`
/// - `combine(a, combine(b, c)) == combine(combine(a, b), c)`
///
/// `combine` need not commute; every structure folds left-to-right.
///
/// # Example
///
/// A bitwise-or monoid, usable with [SegmentTree](crate::SegmentTree) and,
/// since `x | x == x`, with [SparseTable](crate::SparseTable):
///
/// ```
/// use rangefold::Monoid;
///
/// #[derive(Default, Debug, Clone, Copy)]
/// struct BitOrMonoid;
///
/// impl Monoid for BitOrMonoid {
///     const IDENTITY: Self::Value = 0;
///     type Value = u64;
///
///     fn combine(a: u64, b: u64) -> u64 {
///         a | b
///     }
///     fn idempotent() -> bool {
///         true
///     }
/// }
/// ```
pub trait Monoid: Default + Debug + Clone + 'static {
    /// Identity value for [Self::Value].
    ///
    /// Padding slots beyond the logical sequence length hold this value.
    const IDENTITY: Self::Value;

    /// Element type the sequence is made of.
    type Value: ValueBounds;

    /// Combines two values into a new one. Must be associative.
    fn combine(a: Self::Value, b: Self::Value) -> Self::Value;

    /// Returns a function that removes the second value's contribution from
    /// the first, or `None` when the operator has no inverse.
    ///
    /// Structures that need invertibility ([FenwickTree](crate::FenwickTree)
    /// range folds) probe this at call time and surface
    /// [Error::Unsupported](crate::Error::Unsupported) on `None`.
    fn combine_inverse() -> Option<InverseFn<Self::Value>> {
        None
    }

    /// Returns `true` when `combine(x, x) == x` for every value.
    ///
    /// [SparseTable](crate::SparseTable) folds two overlapping windows, so it
    /// refuses monoids that do not opt in here.
    fn idempotent() -> bool {
        false
    }

    /// Returns `true` if the monoid supports invertibility
    #[doc(hidden)]
    fn invertible() -> bool {
        Self::combine_inverse().is_some()
    }
}

/// Update-side algebra: how range updates transform sequence values.
///
/// An action value is composed into tree nodes on
/// [apply](crate::LazySegmentTree::apply) and materialized lazily. Laws:
/// - `compose(IDENTITY, u) == compose(u, IDENTITY) == u`, `compose` associative
/// - `apply(apply(t, u1), u2) == apply(t, compose(u1, u2))` (actions compose
///   left-to-right: the first argument of `compose` is the older action)
/// - `apply(t, scale(u, w))` equals folding `w` independent applications of
///   `u` under the monoid, which is what lets a width-`w` node absorb one
///   scaled action instead of `w` leaf applications
pub trait Action<M: Monoid>: Default + Debug + Clone + 'static {
    /// Identity action meaning "nothing pending".
    ///
    /// Lazy slots holding this value are skipped during propagation. The
    /// comparison uses `==` on [Self::Value], so equality must be total and
    /// decidable for every value the caller feeds in; a genuine pending
    /// action that compares equal to the identity is a no-op by the laws
    /// above and may be skipped.
    const IDENTITY: Self::Value;

    /// Action type composed into the trees' lazy slots.
    type Value: ValueBounds + PartialEq;

    /// Composes two actions; `b` is applied after `a`. Must be associative.
    fn compose(a: Self::Value, b: Self::Value) -> Self::Value;

    /// Applies an action to a sequence value.
    fn apply(value: M::Value, action: Self::Value) -> M::Value;

    /// Reweights an action for a node covering `width` leaves.
    ///
    /// The default is the identity reweighting, correct whenever the action's
    /// effect on a fold is independent of interval width (e.g. adding a
    /// constant under a min-fold). Override it when the effect scales, e.g.
    /// `action * width` for adding a constant under a sum-fold.
    #[inline]
    fn scale(action: Self::Value, width: usize) -> Self::Value {
        let _ = width;
        action
    }
}

/// Trait bounds for sequence and action values
#[cfg(not(feature = "serde"))]
pub trait ValueBounds: Default + Debug + Clone + Copy + Send {}

/// Trait bounds for sequence and action values
#[cfg(feature = "serde")]
pub trait ValueBounds:
    Default + Debug + Clone + Copy + Send + serde::Serialize + for<'a> serde::Deserialize<'a>
{
}

#[cfg(not(feature = "serde"))]
impl<T> ValueBounds for T where T: Default + Debug + Clone + Copy + Send {}

#[cfg(feature = "serde")]
impl<T> ValueBounds for T where
    T: Default + Debug + Clone + Copy + Send + serde::Serialize + for<'a> serde::Deserialize<'a>
{
}
