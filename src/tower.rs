//! Numeric-tower operations: rounding, integer conversion, powers, floor
//! division and remainder, and best rational approximation.

use crate::error::{settle, RatioError, RatioResult};
use crate::policy::{self, OverflowMode, Policy};
use crate::ratio_trait::{gcd, RatioInteger};
use crate::Ratio;

impl<T: RatioInteger, P: Policy> Ratio<T, P> {
    // ========================================================================
    // ROUNDING
    // ========================================================================

    /// Largest integer not above the value. Infinity and NaN pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// assert_eq!(RatioI32::new(-7, 3).floor(), -3);
    /// assert_eq!(RatioI32::new(7, 3).floor(), 2);
    /// ```
    #[inline]
    pub fn floor(&self) -> Self {
        if !self.is_finite() {
            return *self;
        }
        Self::from_integer(self.numer().div_euclid(self.denom()))
    }

    /// Smallest integer not below the value. Infinity and NaN pass through.
    #[inline]
    pub fn ceil(&self) -> Self {
        if !self.is_finite() {
            return *self;
        }
        let (numer, denom) = self.as_ratio();
        let floor = numer.div_euclid(denom);
        if numer.rem_euclid(denom) == T::ZERO {
            Self::from_integer(floor)
        } else {
            Self::from_integer(floor + T::ONE)
        }
    }

    /// Integer part, rounding toward zero. Infinity and NaN pass through.
    #[inline]
    pub fn trunc(&self) -> Self {
        if !self.is_finite() {
            return *self;
        }
        Self::from_integer(self.numer() / self.denom())
    }

    /// Fractional part, `self - self.trunc()`, carrying the sign of `self`.
    ///
    /// Infinity and NaN have no fractional part and give NaN.
    pub fn fract(&self) -> Self {
        let (numer, denom) = self.as_ratio();
        if denom == T::ZERO {
            return Self::new_raw(T::ZERO, T::ZERO);
        }
        // gcd(n % d, d) == gcd(n, d), and n % d == 0 only when d == 1.
        Self::new_raw(numer % denom, denom)
    }

    /// Nearest integer, ties to even.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// assert_eq!(RatioI32::new(5, 2).round(), 2);
    /// assert_eq!(RatioI32::new(7, 2).round(), 4);
    /// assert_eq!(RatioI32::new(-5, 2).round(), -2);
    /// assert_eq!(RatioI32::new(8, 3).round(), 3);
    /// ```
    pub fn round(&self) -> Self {
        if !self.is_finite() {
            return *self;
        }
        let (numer, denom) = self.as_ratio();
        let floor = numer.div_euclid(denom);
        let rem = numer.rem_euclid(denom);

        // 2 * rem against denom, without the doubling.
        let up = match rem.cmp(&(denom - rem)) {
            core::cmp::Ordering::Less => false,
            core::cmp::Ordering::Greater => true,
            core::cmp::Ordering::Equal => floor.rem_euclid(T::TWO) != T::ZERO,
        };
        if up {
            Self::from_integer(floor + T::ONE)
        } else {
            Self::from_integer(floor)
        }
    }

    /// Round to `digits` decimal places, ties to even.
    ///
    /// A negative `digits` rounds to tens, hundreds and so on. Infinity and
    /// NaN pass through.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] under every policy if `10^|digits|` does not
    /// fit in `T`, and under a checked policy if the scaled value does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI64;
    ///
    /// let r = RatioI64::new(22, 7);
    /// assert_eq!(r.round_digits(2).unwrap(), RatioI64::new(157, 50));
    /// assert_eq!(RatioI64::from_integer(1250).round_digits(-2).unwrap(), 1200i64);
    /// ```
    pub fn round_digits(&self, digits: i32) -> RatioResult<Self> {
        if !self.is_finite() {
            return Ok(*self);
        }
        // The scale never wraps, whatever the policy.
        let (scale, overflowed) = T::TEN.overflowing_pow(digits.unsigned_abs());
        if overflowed {
            log::debug!("10^{} does not fit in {} bits", digits.unsigned_abs(), T::BITS);
            return Err(RatioError::Overflow);
        }
        let scale = Self::from_integer(scale);
        if digits >= 0 {
            self.try_mul(&scale)?.round().try_div(&scale)
        } else {
            self.try_div(&scale)?.round().try_mul(&scale)
        }
    }

    /// Convert to the backing integer, truncating toward zero.
    ///
    /// # Errors
    ///
    /// [`RatioError::NotFinite`] for infinity and NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::{RatioError, RatioI32};
    ///
    /// assert_eq!(RatioI32::new(-7, 2).to_integer(), Ok(-3));
    /// assert_eq!(RatioI32::infinity().to_integer(), Err(RatioError::NotFinite));
    /// ```
    #[inline]
    pub fn to_integer(&self) -> RatioResult<T> {
        if !self.is_finite() {
            return Err(RatioError::NotFinite);
        }
        Ok(self.numer() / self.denom())
    }

    // ========================================================================
    // POWERS
    // ========================================================================

    /// Raise to an integer power.
    ///
    /// Numerator and denominator are raised independently, which keeps them
    /// coprime. A negative exponent takes the reciprocal first. `x^0` is one
    /// for every `x` except NaN.
    ///
    /// # Errors
    ///
    /// - [`RatioError::InvalidPower`] for zero to a negative power
    /// - [`RatioError::Overflow`] under a checked policy
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::{RatioError, RatioI64};
    ///
    /// assert_eq!(RatioI64::new(-2, 3).try_pow(3), Ok(RatioI64::new(-8, 27)));
    /// assert_eq!(RatioI64::new(2, 3).try_pow(-2), Ok(RatioI64::new(9, 4)));
    /// assert_eq!(RatioI64::zero().try_pow(-1), Err(RatioError::InvalidPower));
    /// ```
    pub fn try_pow(&self, exp: i32) -> RatioResult<Self> {
        if self.is_nan() {
            return Ok(*self);
        }
        if exp == 0 {
            return Ok(Self::one());
        }
        if self.is_infinite() {
            if exp < 0 {
                return Ok(Self::zero());
            }
            return Ok(Self::signed_infinity(self.is_negative() && exp % 2 != 0));
        }

        let base = if exp < 0 {
            if self.is_zero() {
                return Err(RatioError::InvalidPower);
            }
            self.try_recip()?
        } else {
            *self
        };

        let exp = exp.unsigned_abs();
        let numer = policy::pow::<T, P>(base.numer(), exp)?;
        let denom = policy::pow::<T, P>(base.denom(), exp)?;
        match P::OVERFLOW {
            OverflowMode::Checked => Ok(Self::new_raw(numer, denom)),
            OverflowMode::Wrapping => Self::try_new(numer, denom),
        }
    }

    /// Raise to an integer power.
    ///
    /// # Panics
    ///
    /// Panics where [`try_pow`](Ratio::try_pow) would return an error.
    #[inline]
    #[track_caller]
    pub fn pow(&self, exp: i32) -> Self {
        settle(self.try_pow(exp))
    }

    // ========================================================================
    // FLOOR DIVISION AND REMAINDER
    // ========================================================================

    /// Both operands over their least common denominator: `(a, b, l)` with
    /// `self == a/l` and `other == b/l`.
    fn aligned(&self, other: &Self) -> RatioResult<(T, T, T)> {
        if !self.is_finite() || !other.is_finite() {
            return Err(RatioError::NotFinite);
        }
        if other.is_zero() {
            return Err(RatioError::DivisionByZero);
        }

        let (na, da) = self.as_ratio();
        let (nb, db) = other.as_ratio();
        let g = gcd(da, db);
        let a = policy::mul::<T, P>(na, db / g)?;
        let b = policy::mul::<T, P>(nb, da / g)?;
        let l = policy::mul::<T, P>(da / g, db)?;
        Ok((a, b, l))
    }

    /// Floor of `self / other` as an integer.
    ///
    /// # Errors
    ///
    /// - [`RatioError::DivisionByZero`] if `other` is zero
    /// - [`RatioError::NotFinite`] if either operand is infinite or NaN
    /// - [`RatioError::Overflow`] under a checked policy
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// let a = RatioI32::new(-7, 2);
    /// assert_eq!(a.floor_div(&RatioI32::from_integer(2)), Ok(-2));
    /// ```
    pub fn floor_div(&self, other: &Self) -> RatioResult<T> {
        let (a, b, _) = self.aligned(other)?;
        floor_quotient::<T, P>(a, b)
    }

    /// Remainder of floor division, `self - floor_div(self, other) * other`.
    ///
    /// The result has the sign of `other`, like Python's `%`.
    ///
    /// # Errors
    ///
    /// As [`floor_div`](Ratio::floor_div).
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// let a = RatioI32::new(-7, 2);
    /// assert_eq!(a.try_rem(&RatioI32::from_integer(2)), Ok(RatioI32::new(1, 2)));
    /// assert_eq!(a.try_rem(&RatioI32::from_integer(-2)), Ok(RatioI32::new(-3, 2)));
    /// ```
    pub fn try_rem(&self, other: &Self) -> RatioResult<Self> {
        let (a, b, l) = self.aligned(other)?;
        Self::try_new(floor_remainder(a, b), l)
    }

    /// Floor quotient and remainder together.
    ///
    /// # Errors
    ///
    /// As [`floor_div`](Ratio::floor_div).
    pub fn div_rem(&self, other: &Self) -> RatioResult<(T, Self)> {
        let (a, b, l) = self.aligned(other)?;
        let q = floor_quotient::<T, P>(a, b)?;
        Ok((q, Self::try_new(floor_remainder(a, b), l)?))
    }

    // ========================================================================
    // APPROXIMATION
    // ========================================================================

    /// The closest ratio with denominator at most `max_denominator`.
    ///
    /// Walks the continued-fraction expansion to the last convergent within
    /// the bound, then picks between it and the best semiconvergent. Values
    /// that already satisfy the bound, and infinity and NaN, are returned
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`RatioError::InvalidMaxDenominator`] if `max_denominator < 1`
    /// - [`RatioError::Overflow`] if a convergent numerator does not fit in `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI64;
    ///
    /// let pi = RatioI64::from_float(std::f64::consts::PI).unwrap();
    /// assert_eq!(pi.limit_denominator(10).unwrap(), RatioI64::new(22, 7));
    /// assert_eq!(pi.limit_denominator(1000).unwrap(), RatioI64::new(355, 113));
    /// ```
    pub fn limit_denominator(&self, max_denominator: T) -> RatioResult<Self> {
        if max_denominator < T::ONE {
            return Err(RatioError::InvalidMaxDenominator);
        }
        if !self.is_finite() || self.denom() <= max_denominator {
            return Ok(*self);
        }

        let (mut p0, mut q0, mut p1, mut q1) = (T::ZERO, T::ONE, T::ONE, T::ZERO);
        let (mut n, mut d) = self.as_ratio();
        loop {
            let a = n.div_euclid(d);
            let q2 = match a.checked_mul(q1).and_then(|aq| aq.checked_add(q0)) {
                Some(q2) if q2 <= max_denominator => q2,
                _ => break,
            };
            let p2 = a
                .checked_mul(p1)
                .and_then(|ap| ap.checked_add(p0))
                .ok_or(RatioError::Overflow)?;
            (p0, q0, p1, q1) = (p1, q1, p2, q2);
            (n, d) = (d, n.rem_euclid(d));
        }

        let k = (max_denominator - q0) / q1;
        let semi_denom = k * q1 + q0;
        let semi_numer = k
            .checked_mul(p1)
            .and_then(|kp| kp.checked_add(p0))
            .ok_or(RatioError::Overflow)?;

        // The candidates are 1/(q1 * semi_denom) apart and the convergent is
        // d/(q1 * denom) away from self.
        let convergent_closer = 2u128
            .checked_mul(d.magnitude())
            .and_then(|v| v.checked_mul(semi_denom.magnitude()))
            .map_or(false, |v| v <= self.denom().magnitude());

        if convergent_closer {
            Ok(Self::new_raw(p1, q1))
        } else {
            Ok(Self::new_raw(semi_numer, semi_denom))
        }
    }
}

// T::MIN / -1 and T::MIN % -1 trap, so -1 is handled apart in both helpers.

/// Floor quotient of `a / b`, `b != 0`.
fn floor_quotient<T: RatioInteger, P: Policy>(a: T, b: T) -> RatioResult<T> {
    if b == -T::ONE {
        return policy::neg::<T, P>(a);
    }
    let q = a / b;
    let r = a % b;
    if r != T::ZERO && r.is_negative() != b.is_negative() {
        Ok(q - T::ONE)
    } else {
        Ok(q)
    }
}

/// Divisor-signed remainder of `a / b`, `b != 0`. Always representable.
fn floor_remainder<T: RatioInteger>(a: T, b: T) -> T {
    if b == -T::ONE {
        return T::ZERO;
    }
    let r = a % b;
    if r != T::ZERO && r.is_negative() != b.is_negative() {
        r + b
    } else {
        r
    }
}
