use super::Monoid;

#[inline]
fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

macro_rules! min_monoid {
    ($struct:tt, $type:ty, $identity:expr) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        impl Monoid for $struct {
            const IDENTITY: Self::Value = $identity;

            type Value = $type;

            #[inline]
            fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
                min(a, b)
            }

            fn idempotent() -> bool {
                true
            }
        }
    };
}

min_monoid!(U16MinMonoid, u16, u16::MAX);
min_monoid!(U32MinMonoid, u32, u32::MAX);
min_monoid!(U64MinMonoid, u64, u64::MAX);
min_monoid!(I16MinMonoid, i16, i16::MAX);
min_monoid!(I32MinMonoid, i32, i32::MAX);
min_monoid!(I64MinMonoid, i64, i64::MAX);
min_monoid!(F32MinMonoid, f32, f32::INFINITY);
min_monoid!(F64MinMonoid, f64, f64::INFINITY);
