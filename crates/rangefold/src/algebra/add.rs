//! Range-add actions.
//!
//! One action struct per primitive, implementing [Action] against each
//! bundled monoid it is meaningful for. Adding a constant scales with
//! interval width under a sum-fold (`scale(u, w) = u * w`) but not under a
//! min/max-fold, where the default width-independent [Action::scale] applies.

use super::Action;

macro_rules! add_action {
    ($struct:tt, $type:ty, $sum:tt, $min:tt, $max:tt) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        #[cfg(feature = "sum")]
        impl Action<super::sum::$sum> for $struct {
            const IDENTITY: Self::Value = 0 as $type;

            type Value = $type;

            #[inline]
            fn compose(a: Self::Value, b: Self::Value) -> Self::Value {
                a.wrapping_add(b)
            }
            #[inline]
            fn apply(value: $type, action: Self::Value) -> $type {
                value.wrapping_add(action)
            }
            #[inline]
            fn scale(action: Self::Value, width: usize) -> Self::Value {
                action.wrapping_mul(width as $type)
            }
        }

        #[cfg(feature = "min")]
        impl Action<super::min::$min> for $struct {
            const IDENTITY: Self::Value = 0 as $type;

            type Value = $type;

            #[inline]
            fn compose(a: Self::Value, b: Self::Value) -> Self::Value {
                a.wrapping_add(b)
            }
            #[inline]
            fn apply(value: $type, action: Self::Value) -> $type {
                value.wrapping_add(action)
            }
        }

        #[cfg(feature = "max")]
        impl Action<super::max::$max> for $struct {
            const IDENTITY: Self::Value = 0 as $type;

            type Value = $type;

            #[inline]
            fn compose(a: Self::Value, b: Self::Value) -> Self::Value {
                a.wrapping_add(b)
            }
            #[inline]
            fn apply(value: $type, action: Self::Value) -> $type {
                value.wrapping_add(action)
            }
        }
    };
}

add_action!(U16AddAction, u16, U16SumMonoid, U16MinMonoid, U16MaxMonoid);
add_action!(U32AddAction, u32, U32SumMonoid, U32MinMonoid, U32MaxMonoid);
add_action!(U64AddAction, u64, U64SumMonoid, U64MinMonoid, U64MaxMonoid);
add_action!(I16AddAction, i16, I16SumMonoid, I16MinMonoid, I16MaxMonoid);
add_action!(I32AddAction, i32, I32SumMonoid, I32MinMonoid, I32MaxMonoid);
add_action!(I64AddAction, i64, I64SumMonoid, I64MinMonoid, I64MaxMonoid);

macro_rules! float_add_action {
    ($struct:tt, $type:ty, $sum:tt, $min:tt, $max:tt) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        #[cfg(feature = "sum")]
        impl Action<super::sum::$sum> for $struct {
            const IDENTITY: Self::Value = 0.0;

            type Value = $type;

            #[inline]
            fn compose(a: Self::Value, b: Self::Value) -> Self::Value {
                a + b
            }
            #[inline]
            fn apply(value: $type, action: Self::Value) -> $type {
                value + action
            }
            #[inline]
            fn scale(action: Self::Value, width: usize) -> Self::Value {
                action * width as $type
            }
        }

        #[cfg(feature = "min")]
        impl Action<super::min::$min> for $struct {
            const IDENTITY: Self::Value = 0.0;

            type Value = $type;

            #[inline]
            fn compose(a: Self::Value, b: Self::Value) -> Self::Value {
                a + b
            }
            #[inline]
            fn apply(value: $type, action: Self::Value) -> $type {
                value + action
            }
        }

        #[cfg(feature = "max")]
        impl Action<super::max::$max> for $struct {
            const IDENTITY: Self::Value = 0.0;

            type Value = $type;

            #[inline]
            fn compose(a: Self::Value, b: Self::Value) -> Self::Value {
                a + b
            }
            #[inline]
            fn apply(value: $type, action: Self::Value) -> $type {
                value + action
            }
        }
    };
}

float_add_action!(F32AddAction, f32, F32SumMonoid, F32MinMonoid, F32MaxMonoid);
float_add_action!(F64AddAction, f64, F64SumMonoid, F64MinMonoid, F64MaxMonoid);

#[cfg(all(test, feature = "sum", feature = "min"))]
mod tests {
    use super::*;
    use crate::algebra::{min::U64MinMonoid, sum::U64SumMonoid};

    #[test]
    fn scaling_matches_repeated_application() {
        // adding 10 to each of 4 summed slots equals one scaled action
        let scaled = <U64AddAction as Action<U64SumMonoid>>::scale(10, 4);
        assert_eq!(scaled, 40);
        let unscaled = <U64AddAction as Action<U64MinMonoid>>::scale(10, 4);
        assert_eq!(unscaled, 10);
    }

    #[test]
    fn composition_is_additive() {
        let composed = <U64AddAction as Action<U64SumMonoid>>::compose(3, 4);
        assert_eq!(
            <U64AddAction as Action<U64SumMonoid>>::apply(5, composed),
            12
        );
    }
}
