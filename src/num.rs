//! `num-traits` integration, so `Ratio` drops into code generic over numbers.
//!
//! Trait methods delegate to the inherent ones through fully qualified paths:
//! several share a name with an inherent method that takes `&self`, and
//! `Pow::pow` takes `self`, which would otherwise win method resolution.

use core::iter::{Product, Sum};

use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, FromPrimitive, Inv, Num, One,
    Pow, Signed, ToPrimitive, Zero,
};

use crate::error::RatioError;
use crate::fmt::parse_radix;
use crate::policy::Policy;
use crate::ratio_trait::RatioInteger;
use crate::Ratio;

impl<T: RatioInteger, P: Policy> Zero for Ratio<T, P> {
    #[inline]
    fn zero() -> Self {
        Ratio::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Ratio::is_zero(self)
    }
}

impl<T: RatioInteger, P: Policy> One for Ratio<T, P> {
    #[inline]
    fn one() -> Self {
        Ratio::one()
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.as_ratio() == (T::ONE, T::ONE)
    }
}

impl<T: RatioInteger, P: Policy> Num for Ratio<T, P> {
    type FromStrRadixErr = RatioError;

    /// Parses `n` or `n/d` with both parts in `radix`.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, RatioError> {
        parse_radix(s, radix)
    }
}

impl<T: RatioInteger, P: Policy> Signed for Ratio<T, P> {
    #[inline]
    fn abs(&self) -> Self {
        Ratio::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if *self <= *other {
            Ratio::zero()
        } else {
            *self - *other
        }
    }

    #[inline]
    fn signum(&self) -> Self {
        Ratio::signum(self)
    }

    #[inline]
    fn is_positive(&self) -> bool {
        Ratio::is_positive(self)
    }

    #[inline]
    fn is_negative(&self) -> bool {
        Ratio::is_negative(self)
    }
}

impl<T: RatioInteger, P: Policy> Inv for Ratio<T, P> {
    type Output = Self;

    #[inline]
    fn inv(self) -> Self {
        Ratio::recip(&self)
    }
}

impl<T: RatioInteger, P: Policy> Inv for &Ratio<T, P> {
    type Output = Ratio<T, P>;

    #[inline]
    fn inv(self) -> Ratio<T, P> {
        Ratio::recip(self)
    }
}

impl<T: RatioInteger, P: Policy> Pow<i32> for Ratio<T, P> {
    type Output = Self;

    #[inline]
    fn pow(self, exp: i32) -> Self {
        Ratio::pow(&self, exp)
    }
}

impl<T: RatioInteger, P: Policy> Pow<i32> for &Ratio<T, P> {
    type Output = Ratio<T, P>;

    #[inline]
    fn pow(self, exp: i32) -> Ratio<T, P> {
        Ratio::pow(self, exp)
    }
}

/// Integer conversions truncate toward zero. Infinity and NaN have no integer
/// value; `to_f64` maps them to their float counterparts.
impl<T: RatioInteger, P: Policy> ToPrimitive for Ratio<T, P> {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().ok()?.to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().ok()?.to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().ok()?.to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().ok()?.to_u128()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(Ratio::to_f64(self))
    }
}

/// Integers convert when they fit in `T`; floats convert exactly when the
/// exact value fits.
impl<T: RatioInteger, P: Policy> FromPrimitive for Ratio<T, P> {
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Ratio::from_integer)
    }

    fn from_i128(n: i128) -> Option<Self> {
        T::from_i128(n).map(Ratio::from_integer)
    }

    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Ratio::from_integer)
    }

    fn from_u128(n: u128) -> Option<Self> {
        T::from_u128(n).map(Ratio::from_integer)
    }

    fn from_f64(n: f64) -> Option<Self> {
        Ratio::from_float(n).ok()
    }
}

// ============================================================================
// CHECKED ARITHMETIC
// ============================================================================

macro_rules! impl_checked_binop {
    ($Checked:ident, $checked:ident, $try_op:ident) => {
        impl<T: RatioInteger, P: Policy> $Checked for Ratio<T, P> {
            #[inline]
            fn $checked(&self, other: &Self) -> Option<Self> {
                self.$try_op(other).ok()
            }
        }
    };
}

impl_checked_binop!(CheckedAdd, checked_add, try_add);
impl_checked_binop!(CheckedSub, checked_sub, try_sub);
impl_checked_binop!(CheckedMul, checked_mul, try_mul);
impl_checked_binop!(CheckedDiv, checked_div, try_div);

impl<T: RatioInteger, P: Policy> CheckedNeg for Ratio<T, P> {
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        self.try_neg().ok()
    }
}

// ============================================================================
// ITERATOR FOLDS
// ============================================================================

impl<T: RatioInteger, P: Policy> Sum for Ratio<T, P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Ratio::zero(), |acc, r| acc + r)
    }
}

impl<'a, T: RatioInteger, P: Policy> Sum<&'a Ratio<T, P>> for Ratio<T, P> {
    fn sum<I: Iterator<Item = &'a Ratio<T, P>>>(iter: I) -> Self {
        iter.fold(Ratio::zero(), |acc, r| acc + r)
    }
}

impl<T: RatioInteger, P: Policy> Product for Ratio<T, P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Ratio::one(), |acc, r| acc * r)
    }
}

impl<'a, T: RatioInteger, P: Policy> Product<&'a Ratio<T, P>> for Ratio<T, P> {
    fn product<I: Iterator<Item = &'a Ratio<T, P>>>(iter: I) -> Self {
        iter.fold(Ratio::one(), |acc, r| acc * r)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{
        CheckedAdd, CheckedDiv, CheckedNeg, FromPrimitive, Inv, Num, One, Pow, Signed,
        ToPrimitive, Zero,
    };

    use crate::{RatioError, RatioI32, RatioI64};

    fn mean<N: Num + Copy + FromPrimitive>(values: &[N]) -> Option<N> {
        let count = N::from_usize(values.len())?;
        let total = values.iter().fold(N::zero(), |acc, &v| acc + v);
        Some(total / count)
    }

    #[test]
    fn test_generic_num_code() {
        let values = [RatioI64::new(1, 2), RatioI64::new(1, 3), RatioI64::new(1, 6)];
        assert_eq!(mean(&values), Some(RatioI64::new(1, 3)));
    }

    #[test]
    fn test_zero_one() {
        assert!(<RatioI32 as Zero>::zero().is_zero());
        assert!(<RatioI32 as One>::one().is_one());
        assert!(!RatioI32::nan().is_one());
        assert!(!Zero::is_zero(&RatioI32::nan()));
    }

    #[test]
    fn test_from_str_radix() {
        assert_eq!(RatioI32::from_str_radix("ff/10", 16), Ok(RatioI32::new(255, 16)));
        assert_eq!(RatioI32::from_str_radix("-101", 2), Ok(RatioI32::from_integer(-5)));
        assert_eq!(
            RatioI32::from_str_radix("1.5", 16),
            Err(RatioError::Parse {
                input: "1.5".to_string()
            })
        );
        assert!(RatioI32::from_str_radix("1", 40).is_err());
    }

    #[test]
    fn test_signed() {
        let a = RatioI32::new(-3, 4);
        assert_eq!(Signed::abs(&a), RatioI32::new(3, 4));
        assert_eq!(Signed::signum(&a), RatioI32::from_integer(-1));
        assert_eq!(Signed::abs_sub(&a, &RatioI32::one()), RatioI32::zero());
        assert_eq!(Signed::abs_sub(&RatioI32::one(), &a), RatioI32::new(7, 4));
        assert!(Signed::is_negative(&a));
    }

    #[test]
    fn test_inv_and_pow() {
        let a = RatioI32::new(2, 3);
        assert_eq!(a.inv(), RatioI32::new(3, 2));
        assert_eq!((&a).inv(), RatioI32::new(3, 2));
        assert_eq!(Pow::pow(a, 2), RatioI32::new(4, 9));
        assert_eq!(Pow::pow(&a, -1), RatioI32::new(3, 2));
    }

    #[test]
    fn test_to_primitive() {
        assert_eq!(RatioI32::new(7, 2).to_i64(), Some(3));
        assert_eq!(RatioI32::new(-7, 2).to_i128(), Some(-3));
        assert_eq!(RatioI32::new(-7, 2).to_u64(), None);
        assert_eq!(RatioI32::infinity().to_i64(), None);
        assert_eq!(ToPrimitive::to_f64(&RatioI32::new(1, 4)), Some(0.25));
        assert_eq!(ToPrimitive::to_f64(&RatioI32::infinity()), Some(f64::INFINITY));
    }

    #[test]
    fn test_from_primitive() {
        assert_eq!(RatioI32::from_i64(-9), Some(RatioI32::from_integer(-9)));
        assert_eq!(RatioI32::from_i64(i64::MAX), None);
        assert_eq!(RatioI32::from_u128(7), Some(RatioI32::from_integer(7)));
        assert_eq!(<RatioI32 as FromPrimitive>::from_f64(0.375), Some(RatioI32::new(3, 8)));
        assert_eq!(<RatioI32 as FromPrimitive>::from_f64(1e-30), None);
    }

    #[test]
    fn test_checked_ops() {
        let max = RatioI32::from_integer(i32::MAX);
        assert_eq!(max.checked_add(&RatioI32::one()), None);
        assert_eq!(
            RatioI32::new(1, 2).checked_add(&RatioI32::new(1, 3)),
            Some(RatioI32::new(5, 6))
        );
        assert_eq!(RatioI32::one().checked_div(&RatioI32::zero()), None);
        assert_eq!(RatioI32::from_integer(i32::MIN).checked_neg(), None);
    }

    #[test]
    fn test_sum_and_product() {
        let values = [RatioI64::new(1, 2), RatioI64::new(1, 3), RatioI64::new(1, 6)];
        assert_eq!(values.iter().sum::<RatioI64>(), RatioI64::one());
        assert_eq!(values.into_iter().product::<RatioI64>(), RatioI64::new(1, 36));
        let empty: [RatioI64; 0] = [];
        assert_eq!(empty.iter().sum::<RatioI64>(), RatioI64::zero());
        assert_eq!(empty.iter().product::<RatioI64>(), RatioI64::one());
    }
}
