use super::{InverseFn, Monoid};

macro_rules! sum_monoid {
    ($struct:tt, $type:ty) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        impl Monoid for $struct {
            const IDENTITY: Self::Value = 0 as $type;

            type Value = $type;

            #[inline]
            fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
                a.wrapping_add(b)
            }

            // Wrapping keeps the group law intact when an update removes more
            // than a node currently holds; intermediate wrap-around cancels
            // out on the next prefix subtraction.
            #[inline]
            fn combine_inverse() -> Option<InverseFn<Self::Value>> {
                Some(|a, b| a.wrapping_sub(b))
            }
        }
    };
}

sum_monoid!(U16SumMonoid, u16);
sum_monoid!(U32SumMonoid, u32);
sum_monoid!(U64SumMonoid, u64);
sum_monoid!(I16SumMonoid, i16);
sum_monoid!(I32SumMonoid, i32);
sum_monoid!(I64SumMonoid, i64);

macro_rules! float_sum_monoid {
    ($struct:tt, $type:ty) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        impl Monoid for $struct {
            const IDENTITY: Self::Value = 0.0;

            type Value = $type;

            #[inline]
            fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
                a + b
            }

            // No inverse: prefix subtraction under rounding drifts away from
            // the true fold, so float Fenwick range folds stay unsupported.
        }
    };
}

float_sum_monoid!(F32SumMonoid, f32);
float_sum_monoid!(F64SumMonoid, f64);
