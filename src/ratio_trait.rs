//! Backing-integer abstraction for `Ratio<T>`.
//!
//! [`RatioInteger`] is implemented for every primitive signed integer, from
//! `i8` to `i128` plus `isize`. It exposes exactly the checked, overflowing and
//! magnitude operations the rational algorithms need, so that the algorithms
//! can be written once and the overflow policy decided in one place.
//!
//! Magnitudes are carried as `u128`. Every supported type's absolute value
//! fits there, including `|T::MIN|`, which does not fit in `T` itself. Sign
//! canonicalization and reduction go through magnitudes for that reason.
//!
//! # Example
//!
//! ```
//! use fixed_ratio::{gcd, lcm, RatioInteger};
//!
//! assert_eq!(gcd(-48i32, 18), 6);
//! assert_eq!(lcm(4i64, -6), Some(12));
//! assert_eq!(i8::MIN.magnitude(), 128);
//! ```

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::num::ParseIntError;
use core::ops::Neg;
use core::str::FromStr;

use crypto_bigint::U128;
use num_traits::{FromPrimitive, Num, ToPrimitive};

/// Fixed-width signed integer usable as the numerator and denominator of a `Ratio`.
pub trait RatioInteger:
    Copy
    + Debug
    + Display
    + Default
    + Hash
    + Ord
    + Send
    + Sync
    + 'static
    + Num<FromStrRadixErr = ParseIntError>
    + Neg<Output = Self>
    + FromStr<Err = ParseIntError>
    + ToPrimitive
    + FromPrimitive
{
    /// Number of bits in this integer type.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// The value two, used for parity checks.
    const TWO: Self;

    /// The value ten, used for decimal rounding.
    const TEN: Self;

    /// Smallest representable value.
    const MIN: Self;

    /// Largest representable value.
    const MAX: Self;

    /// Returns `true` if the value is strictly below zero.
    fn is_negative(self) -> bool;

    /// Returns `-1`, `0` or `1`.
    fn signum(self) -> Self;

    /// Absolute value as an unsigned magnitude. Never overflows.
    fn magnitude(self) -> u128;

    /// Build a value from a sign and a magnitude, `None` if it does not fit.
    fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self>;

    /// Build a value from a sign and a magnitude, truncating to `BITS` bits.
    fn wrapping_from_magnitude(negative: bool, magnitude: u128) -> Self;

    /// Checked addition.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Checked subtraction.
    fn checked_sub(self, other: Self) -> Option<Self>;

    /// Checked multiplication.
    fn checked_mul(self, other: Self) -> Option<Self>;

    /// Addition returning the wrapped result and an overflow flag.
    fn overflowing_add(self, other: Self) -> (Self, bool);

    /// Subtraction returning the wrapped result and an overflow flag.
    fn overflowing_sub(self, other: Self) -> (Self, bool);

    /// Multiplication returning the wrapped result and an overflow flag.
    fn overflowing_mul(self, other: Self) -> (Self, bool);

    /// Negation returning the wrapped result and an overflow flag.
    fn overflowing_neg(self) -> (Self, bool);

    /// Exponentiation returning the wrapped result and an overflow flag.
    fn overflowing_pow(self, exp: u32) -> (Self, bool);

    /// Quotient rounded toward negative infinity for a positive divisor.
    fn div_euclid(self, other: Self) -> Self;

    /// Non-negative remainder matching [`div_euclid`](RatioInteger::div_euclid).
    fn rem_euclid(self, other: Self) -> Self;

    /// Lossy conversion to `f64`.
    fn as_f64(self) -> f64;
}

/// Macro to implement RatioInteger for a primitive signed integer.
macro_rules! impl_ratio_integer {
    ($($type:ty),* $(,)?) => {$(
        impl RatioInteger for $type {
            const BITS: u32 = <$type>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const TEN: Self = 10;
            const MIN: Self = <$type>::MIN;
            const MAX: Self = <$type>::MAX;

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn signum(self) -> Self {
                <$type>::signum(self)
            }

            #[inline(always)]
            fn magnitude(self) -> u128 {
                self.unsigned_abs() as u128
            }

            #[inline]
            fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                let max = <$type>::MAX as u128;
                if magnitude <= max {
                    let value = magnitude as $type;
                    Some(if negative { -value } else { value })
                } else if negative && magnitude == max + 1 {
                    Some(<$type>::MIN)
                } else {
                    None
                }
            }

            #[inline]
            fn wrapping_from_magnitude(negative: bool, magnitude: u128) -> Self {
                let value = magnitude as $type;
                if negative {
                    value.wrapping_neg()
                } else {
                    value
                }
            }

            #[inline(always)]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$type>::checked_add(self, other)
            }

            #[inline(always)]
            fn checked_sub(self, other: Self) -> Option<Self> {
                <$type>::checked_sub(self, other)
            }

            #[inline(always)]
            fn checked_mul(self, other: Self) -> Option<Self> {
                <$type>::checked_mul(self, other)
            }

            #[inline(always)]
            fn overflowing_add(self, other: Self) -> (Self, bool) {
                <$type>::overflowing_add(self, other)
            }

            #[inline(always)]
            fn overflowing_sub(self, other: Self) -> (Self, bool) {
                <$type>::overflowing_sub(self, other)
            }

            #[inline(always)]
            fn overflowing_mul(self, other: Self) -> (Self, bool) {
                <$type>::overflowing_mul(self, other)
            }

            #[inline(always)]
            fn overflowing_neg(self) -> (Self, bool) {
                <$type>::overflowing_neg(self)
            }

            #[inline(always)]
            fn overflowing_pow(self, exp: u32) -> (Self, bool) {
                <$type>::overflowing_pow(self, exp)
            }

            #[inline(always)]
            fn div_euclid(self, other: Self) -> Self {
                <$type>::div_euclid(self, other)
            }

            #[inline(always)]
            fn rem_euclid(self, other: Self) -> Self {
                <$type>::rem_euclid(self, other)
            }

            #[inline(always)]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_ratio_integer!(i8, i16, i32, i64, i128, isize);

/// Greatest common divisor of two magnitudes.
///
/// Euclid's algorithm runs on `u128` only while the larger operand needs more
/// than 64 bits; once both fit, it switches to native `u64` remainders, which
/// are several times cheaper.
///
/// `gcd_magnitude(0, n) == n`, `gcd_magnitude(m, 0) == m` and
/// `gcd_magnitude(0, 0) == 0`.
pub fn gcd_magnitude(mut a: u128, mut b: u128) -> u128 {
    if a < b {
        core::mem::swap(&mut a, &mut b);
    }

    while b != 0 && a > u64::MAX as u128 {
        let rem = a % b;
        a = b;
        b = rem;
    }

    if b == 0 {
        return a;
    }
    gcd_u64(a as u64, b as u64) as u128
}

/// Greatest common divisor of `|m|` and `|n|`.
///
/// The result is non-negative except in the one case where it is not
/// representable: when it equals `|T::MIN|` (only for `gcd(MIN, 0)`,
/// `gcd(0, MIN)` and `gcd(MIN, MIN)`) it wraps to `T::MIN`, like
/// `T::wrapping_abs`.
#[inline]
pub fn gcd<T: RatioInteger>(m: T, n: T) -> T {
    T::wrapping_from_magnitude(false, gcd_magnitude(m.magnitude(), n.magnitude()))
}

/// Least common multiple of `|m|` and `|n|`.
///
/// Zero if either argument is zero, `None` if the result does not fit in `T`.
pub fn lcm<T: RatioInteger>(m: T, n: T) -> Option<T> {
    if m == T::ZERO || n == T::ZERO {
        return Some(T::ZERO);
    }
    let (m, n) = (m.magnitude(), n.magnitude());
    let product = (m / gcd_magnitude(m, n)).checked_mul(n)?;
    T::from_magnitude(false, product)
}

/// Compare `a * b` with `c * d` exactly, for any `u128` magnitudes.
///
/// Products that fit in 128 bits are compared directly; otherwise both sides
/// are computed as 256-bit `(lo, hi)` pairs.
pub fn cmp_products(a: u128, b: u128, c: u128, d: u128) -> Ordering {
    if let (Some(lhs), Some(rhs)) = (a.checked_mul(b), c.checked_mul(d)) {
        return lhs.cmp(&rhs);
    }

    let (lhs_lo, lhs_hi) = U128::from_u128(a).mul_wide(&U128::from_u128(b));
    let (rhs_lo, rhs_hi) = U128::from_u128(c).mul_wide(&U128::from_u128(d));

    lhs_hi.cmp(&rhs_hi).then(lhs_lo.cmp(&rhs_lo))
}

/// Fast u64 GCD using the Euclidean algorithm.
#[inline]
fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(48i32, 18), 6);
        assert_eq!(gcd(-48i32, 18), 6);
        assert_eq!(gcd(48i32, -18), 6);
        assert_eq!(gcd(100i64, 35), 5);
    }

    #[test]
    fn test_gcd_zero_cases() {
        assert_eq!(gcd(0i32, 7), 7);
        assert_eq!(gcd(-7i32, 0), 7);
        assert_eq!(gcd(0i32, 0), 0);
    }

    #[test]
    fn test_gcd_min_wraps() {
        assert_eq!(gcd(i32::MIN, 0), i32::MIN);
        assert_eq!(gcd(i32::MIN, i32::MIN), i32::MIN);
        assert_eq!(gcd(i32::MIN, 6), 2);
    }

    #[test]
    fn test_gcd_magnitude_crosses_u64_boundary() {
        let a = (u64::MAX as u128) * 6;
        let b = (u64::MAX as u128) * 4;
        assert_eq!(gcd_magnitude(a, b), (u64::MAX as u128) * 2);
        assert_eq!(gcd_magnitude(3, a), 3);
    }

    #[test]
    fn test_gcd_i128_extremes() {
        assert_eq!(gcd(i128::MAX, i128::MAX - 1), 1);
        assert_eq!(gcd(i128::MIN, 1i128 << 100), 1i128 << 100);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4i32, 6), Some(12));
        assert_eq!(lcm(-4i32, 6), Some(12));
        assert_eq!(lcm(0i32, 6), Some(0));
        assert_eq!(lcm(i8::MAX, 2), None);
    }

    #[test]
    fn test_magnitude_round_trip() {
        assert_eq!(i8::MIN.magnitude(), 128);
        assert_eq!(i8::from_magnitude(true, 128), Some(i8::MIN));
        assert_eq!(i8::from_magnitude(false, 128), None);
        assert_eq!(i8::from_magnitude(true, 5), Some(-5));
        assert_eq!(i8::wrapping_from_magnitude(false, 128), i8::MIN);
        assert_eq!(i128::from_magnitude(true, 1u128 << 127), Some(i128::MIN));
    }

    #[test]
    fn test_cmp_products_wide() {
        let big = u128::MAX;
        assert_eq!(cmp_products(big, big, big, big - 1), Ordering::Greater);
        assert_eq!(cmp_products(big - 1, big, big, big - 1), Ordering::Equal);
        assert_eq!(cmp_products(3, 4, 2, 6), Ordering::Equal);
        assert_eq!(cmp_products(1 << 100, 1 << 100, 1, big), Ordering::Greater);
    }
}
