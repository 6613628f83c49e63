/*!
# Edge Weights

Graphs are generic over their weight type. Any primitive integer or float works as a weight;
all algorithms only rely on the operations collected in [`Weight`].

Distance arrays fill the slots of unreachable nodes with [`Weight::infinity`]: `MAX` for integers,
`+inf` for floats. No distance exceeds it, but reachability is never derived from it; distances are
added with [`Weight::checked_sum`] so that leaving the range of the type is detected.
*/

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, Sub},
};

use num::{CheckedAdd, One, Zero};

/// Numeric type usable as edge weight, distance and flow capacity.
pub trait Weight:
    Copy + Debug + PartialOrd + Zero + One + Add<Output = Self> + Sub<Output = Self>
{
    /// Sentinel no distance can exceed
    fn infinity() -> Self;

    /// Returns `self + other` or `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Returns *true* if the weight is strictly below zero
    #[inline]
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Total order on weights. Incomparable values (`NaN`) are treated as equal.
    #[inline]
    fn cmp_weight(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }

    /// Returns the smaller of both values
    #[inline]
    fn min_weight(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn infinity() -> Self {
                    <$t>::MAX
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn infinity() -> Self {
                    <$t>::INFINITY
                }

                #[inline]
                fn checked_sum(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_integer_weight!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_weight!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels() {
        assert_eq!(<i64 as Weight>::infinity(), i64::MAX);
        assert_eq!(<u8 as Weight>::infinity(), 255);
        assert_eq!(<f64 as Weight>::infinity(), f64::INFINITY);
    }

    #[test]
    fn checked_sums() {
        assert_eq!(200u8.checked_sum(55), Some(255));
        assert_eq!(200u8.checked_sum(56), None);
        assert_eq!((-100i8).checked_sum(-28), Some(-128));
        assert_eq!((-100i8).checked_sum(-29), None);
        assert_eq!(2_000_000_000i32.checked_sum(-2_000_000_000), Some(0));
        assert_eq!(f32::MAX.checked_sum(f32::MAX), Some(f32::INFINITY));
    }

    #[test]
    fn negativity_and_order() {
        assert!((-1i32).is_negative());
        assert!(!0i32.is_negative());
        assert!(!(0.5f64).is_negative());

        assert_eq!(1.0f64.cmp_weight(&2.0), Ordering::Less);
        assert_eq!(f64::NAN.cmp_weight(&2.0), Ordering::Equal);
        assert_eq!(4u8.min_weight(2), 2);
    }
}
