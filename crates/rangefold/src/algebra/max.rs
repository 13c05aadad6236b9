use super::Monoid;

#[inline]
fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

macro_rules! max_monoid {
    ($struct:tt, $type:ty, $identity:expr) => {
        #[derive(Default, Debug, Clone, Copy)]
        #[allow(missing_docs)]
        pub struct $struct;

        impl Monoid for $struct {
            const IDENTITY: Self::Value = $identity;

            type Value = $type;

            #[inline]
            fn combine(a: Self::Value, b: Self::Value) -> Self::Value {
                max(a, b)
            }

            fn idempotent() -> bool {
                true
            }
        }
    };
}

max_monoid!(U16MaxMonoid, u16, u16::MIN);
max_monoid!(U32MaxMonoid, u32, u32::MIN);
max_monoid!(U64MaxMonoid, u64, u64::MIN);
max_monoid!(I16MaxMonoid, i16, i16::MIN);
max_monoid!(I32MaxMonoid, i32, i32::MIN);
max_monoid!(I64MaxMonoid, i64, i64::MIN);
max_monoid!(F32MaxMonoid, f32, f32::NEG_INFINITY);
max_monoid!(F64MaxMonoid, f64, f64::NEG_INFINITY);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_absorbs() {
        assert_eq!(I64MaxMonoid::combine(I64MaxMonoid::IDENTITY, -5), -5);
        assert_eq!(U64MaxMonoid::combine(3, 9), 9);
        assert!(I32MaxMonoid::idempotent());
    }
}
