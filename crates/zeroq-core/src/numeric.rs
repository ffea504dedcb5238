//! Numeric capability set shared by ranges, sequences and checked sums.

pub trait Numeric: Copy + PartialOrd + std::fmt::Debug {
    fn zero() -> Self;
    fn one() -> Self;

    /// `None` on overflow. Floats never overflow here.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Exact conversion of a count/offset, `None` when not representable.
    fn from_usize(n: usize) -> Option<Self>;

    /// `self * n`, `None` on overflow.
    fn checked_mul_usize(self, n: usize) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn zero() -> Self { 0 }
            #[inline]
            fn one() -> Self { 1 }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> { <$t>::checked_add(self, rhs) }
            #[inline]
            fn from_usize(n: usize) -> Option<Self> { <$t>::try_from(n).ok() }
            #[inline]
            fn checked_mul_usize(self, n: usize) -> Option<Self> {
                <$t>::try_from(n).ok().and_then(|n| <$t>::checked_mul(self, n))
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            #[inline]
            fn zero() -> Self { 0.0 }
            #[inline]
            fn one() -> Self { 1.0 }
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> { Some(self + rhs) }
            #[inline]
            fn from_usize(n: usize) -> Option<Self> { Some(n as $t) }
            #[inline]
            fn checked_mul_usize(self, n: usize) -> Option<Self> { Some(self * n as $t) }
        }
    )*};
}

impl_numeric_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric_float!(f32, f64);
