//! Edge weight abstraction.
//!
//! Edge weights may be integers or floats. The algorithms only need a handful of
//! operations on them: an additive identity, addition, a sign test and a total
//! ordering for sorting. [`Weight`] captures exactly that, and is implemented for
//! the primitive numeric types.

use std::{cmp::Ordering, fmt};

/// Numeric type usable as an edge weight.
///
/// Integer implementations saturate on overflow instead of wrapping, so a
/// pathological path sum clamps to the type's maximum rather than becoming a
/// small (and wrongly preferred) distance. Float implementations report
/// non-finite values (`NaN` and the infinities) as invalid; graphs refuse such
/// weights on insertion.
pub trait Weight: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    /// The additive identity.
    fn zero() -> Self;

    /// Adds two weights; integers saturate at their maximum.
    #[must_use]
    fn add_weight(self, other: Self) -> Self;

    /// Returns `true` if the weight is strictly below zero.
    fn is_negative(&self) -> bool;

    /// Returns `true` if the weight is a finite, orderable value.
    fn is_valid(&self) -> bool {
        true
    }

    /// Total ordering used for sorting edge lists.
    fn cmp_weight(&self, other: &Self) -> Ordering;
}

macro_rules! impl_weight_signed {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn add_weight(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline]
            fn is_negative(&self) -> bool {
                *self < 0
            }

            #[inline]
            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

macro_rules! impl_weight_unsigned {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn add_weight(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline]
            fn is_negative(&self) -> bool {
                false
            }

            #[inline]
            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

macro_rules! impl_weight_float {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn add_weight(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn is_negative(&self) -> bool {
                *self < 0.0
            }

            #[inline]
            fn is_valid(&self) -> bool {
                self.is_finite()
            }

            #[inline]
            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.total_cmp(other)
            }
        }
    )*};
}

impl_weight_signed!(i32, i64);
impl_weight_unsigned!(u32, u64, usize);
impl_weight_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_weights_saturate() {
        assert_eq!(u32::MAX.add_weight(1), u32::MAX);
        assert_eq!(i64::MAX.add_weight(5), i64::MAX);
        assert_eq!(3i32.add_weight(4), 7);
    }

    #[test]
    fn test_sign() {
        assert!((-1i32).is_negative());
        assert!(!0i64.is_negative());
        assert!(!7u64.is_negative());
        assert!((-0.5f64).is_negative());
        assert!(!0.0f32.is_negative());
    }

    #[test]
    fn test_float_validity() {
        assert!(1.5f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f32::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f32::NEG_INFINITY.is_valid());
        assert!(f64::MAX.is_valid());
    }

    #[test]
    fn test_cmp_weight_sorts() {
        let mut weights = vec![2.5f64, -1.0, 0.0, 10.25];
        weights.sort_unstable_by(Weight::cmp_weight);
        assert_eq!(weights, vec![-1.0, 0.0, 2.5, 10.25]);

        let mut ints = vec![9u32, 3, 5];
        ints.sort_unstable_by(Weight::cmp_weight);
        assert_eq!(ints, vec![3, 5, 9]);
    }
}
