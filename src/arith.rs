//! Arithmetic: `+ - * /`, negation, reciprocal, increment and decrement.
//!
//! Addition and subtraction interleave GCDs with the cross products (Knuth,
//! TAOCP 4.5.1) and multiplication and division cancel across operands first,
//! so intermediate values stay as small as the result allows. Whatever
//! overflow remains is decided by the policy.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::error::{settle, RatioError, RatioResult};
use crate::policy::{self, OverflowMode, Policy};
use crate::ratio_trait::{gcd, RatioInteger};
use crate::Ratio;

impl<T: RatioInteger, P: Policy> Ratio<T, P> {
    // ========================================================================
    // ARITHMETIC - ADDITION
    // ========================================================================

    /// Add two ratios.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] under a checked policy if the reduced sum, or
    /// an unavoidable intermediate product, does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI64;
    ///
    /// let sum = RatioI64::new(1, 6).try_add(&RatioI64::new(1, 3)).unwrap();
    /// assert_eq!(sum.as_ratio(), (1, 2));
    /// ```
    pub fn try_add(&self, other: &Self) -> RatioResult<Self> {
        if let Some(special) = self.extended_sum(other, false) {
            return Ok(special);
        }
        self.add_sub_finite(other, false)
    }

    /// Subtract another ratio.
    ///
    /// Computed directly rather than as `self + (-other)`, so subtracting a
    /// value with numerator `T::MIN` does not need to negate it.
    pub fn try_sub(&self, other: &Self) -> RatioResult<Self> {
        if let Some(special) = self.extended_sum(other, true) {
            return Ok(special);
        }
        self.add_sub_finite(other, true)
    }

    /// Sum or difference when at least one operand is infinite or NaN.
    fn extended_sum(&self, other: &Self, subtract: bool) -> Option<Self> {
        if self.is_finite() && other.is_finite() {
            return None;
        }
        if self.is_nan() || other.is_nan() {
            return Some(Self::new_raw(T::ZERO, T::ZERO));
        }

        let other_negative = other.is_negative() != subtract;
        Some(match (self.is_infinite(), other.is_infinite()) {
            (true, true) if self.is_negative() == other_negative => *self,
            (true, true) => Self::new_raw(T::ZERO, T::ZERO),
            (true, false) => *self,
            _ => Self::signed_infinity(other_negative),
        })
    }

    fn add_sub_finite(&self, other: &Self, subtract: bool) -> RatioResult<Self> {
        let (na, da) = self.as_ratio();
        let (nb, db) = other.as_ratio();
        let combine = |x: T, y: T| {
            if subtract {
                policy::sub::<T, P>(x, y)
            } else {
                policy::add::<T, P>(x, y)
            }
        };

        let g = gcd(da, db);
        if g == T::ONE {
            let numer = combine(
                policy::mul::<T, P>(na, db)?,
                policy::mul::<T, P>(da, nb)?,
            )?;
            return Self::try_new(numer, policy::mul::<T, P>(da, db)?);
        }

        let s = da / g;
        let t = combine(
            policy::mul::<T, P>(na, db / g)?,
            policy::mul::<T, P>(nb, s)?,
        )?;
        let g2 = gcd(t, g);
        if g2 == T::ONE {
            return Self::try_new(t, policy::mul::<T, P>(s, db)?);
        }
        Self::try_new(t / g2, policy::mul::<T, P>(s, db / g2)?)
    }

    // ========================================================================
    // ARITHMETIC - MULTIPLICATION AND DIVISION
    // ========================================================================

    /// Multiply two ratios, cancelling `gcd(na, db)` and `gcd(nb, da)` first.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// // The 3 cancels before multiplying, so 15/24 is never formed.
    /// let product = RatioI32::new(3, 4).try_mul(&RatioI32::new(5, 6)).unwrap();
    /// assert_eq!(product.as_ratio(), (5, 8));
    ///
    /// let big = RatioI32::new(i32::MAX, 2);
    /// assert_eq!(big.try_mul(&RatioI32::new(2, i32::MAX)).unwrap(), RatioI32::one());
    /// ```
    pub fn try_mul(&self, other: &Self) -> RatioResult<Self> {
        if !self.is_finite() || !other.is_finite() {
            if self.is_nan() || other.is_nan() || self.is_zero() || other.is_zero() {
                return Ok(Self::new_raw(T::ZERO, T::ZERO));
            }
            return Ok(Self::signed_infinity(self.is_negative() != other.is_negative()));
        }

        let (na, da) = self.as_ratio();
        let (nb, db) = other.as_ratio();
        let g1 = gcd(na, db);
        let g2 = gcd(nb, da);

        let numer = policy::mul::<T, P>(na / g1, nb / g2)?;
        let denom = policy::mul::<T, P>(da / g2, db / g1)?;
        Self::try_new(numer, denom)
    }

    /// Divide by another ratio.
    ///
    /// # Errors
    ///
    /// - [`RatioError::DivisionByZero`] if `other` is the rational zero and
    ///   `self` is finite. An infinite dividend keeps its sign instead.
    /// - [`RatioError::Overflow`] under a checked policy
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::{RatioError, RatioI32};
    ///
    /// let q = RatioI32::new(3, 4).try_div(&RatioI32::new(5, 6)).unwrap();
    /// assert_eq!(q.as_ratio(), (9, 10));
    ///
    /// assert_eq!(RatioI32::one().try_div(&RatioI32::zero()), Err(RatioError::DivisionByZero));
    /// assert_eq!(RatioI32::infinity().try_div(&RatioI32::zero()), Ok(RatioI32::infinity()));
    /// ```
    pub fn try_div(&self, other: &Self) -> RatioResult<Self> {
        if self.is_nan() || other.is_nan() {
            return Ok(Self::new_raw(T::ZERO, T::ZERO));
        }
        if other.is_zero() {
            if self.is_infinite() {
                return Ok(*self);
            }
            return Err(RatioError::DivisionByZero);
        }
        if self.is_infinite() {
            if other.is_infinite() {
                return Ok(Self::new_raw(T::ZERO, T::ZERO));
            }
            return Ok(Self::signed_infinity(self.is_negative() != other.is_negative()));
        }
        if other.is_infinite() {
            return Ok(Self::zero());
        }

        let (na, da) = self.as_ratio();
        let (nb, db) = other.as_ratio();
        let g1 = gcd(na, nb);
        let g2 = gcd(da, db);

        let numer = policy::mul::<T, P>(na / g1, db / g2)?;
        let denom = policy::mul::<T, P>(da / g2, nb / g1)?;
        Self::try_new(numer, denom)
    }

    // ========================================================================
    // SIGN
    // ========================================================================

    /// Negate the ratio.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`] under a checked policy for numerator `T::MIN`.
    #[inline]
    pub fn try_neg(&self) -> RatioResult<Self> {
        Ok(Self::new_raw(policy::neg::<T, P>(self.numer())?, self.denom()))
    }

    /// Get the absolute value.
    ///
    /// # Panics
    ///
    /// Panics under a checked policy if the numerator is `T::MIN`.
    #[inline]
    #[track_caller]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            settle(self.try_neg())
        } else {
            *self
        }
    }

    /// `-1`, `0` or `1` by sign; NaN for NaN.
    #[inline]
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            return *self;
        }
        Self::from_integer(self.numer().signum())
    }

    // ========================================================================
    // RECIPROCAL
    // ========================================================================

    /// Get the reciprocal (1/x).
    ///
    /// Zero maps to positive infinity, infinities to zero and NaN to itself.
    ///
    /// # Errors
    ///
    /// - [`RatioError::DivisionByZero`] for zero under a policy without
    ///   extended values
    /// - [`RatioError::Overflow`] under a checked policy for numerator
    ///   `T::MIN`, whose reciprocal has an unrepresentable denominator
    pub fn try_recip(&self) -> RatioResult<Self> {
        let (numer, denom) = self.as_ratio();
        if numer == T::ZERO {
            if denom == T::ZERO {
                return Ok(*self);
            }
            if !P::EXTENDED_VALUES {
                return Err(RatioError::DivisionByZero);
            }
            return Ok(Self::signed_infinity(false));
        }
        if denom == T::ZERO {
            return Ok(Self::zero());
        }

        // A reduced pair swapped is still reduced; only the sign moves.
        if numer.is_negative() {
            let flipped = policy::neg::<T, P>(denom)?;
            return Ok(Self::new_raw(flipped, policy::neg::<T, P>(numer)?));
        }
        Ok(Self::new_raw(denom, numer))
    }

    /// Get the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics where [`try_recip`](Ratio::try_recip) would return an error.
    #[inline]
    #[track_caller]
    pub fn recip(&self) -> Self {
        settle(self.try_recip())
    }

    /// Replace the ratio with its reciprocal, leaving it unchanged on error.
    pub fn try_reciprocal(&mut self) -> RatioResult<&mut Self> {
        *self = self.try_recip()?;
        Ok(self)
    }

    /// Replace the ratio with its reciprocal.
    ///
    /// # Panics
    ///
    /// Panics where [`try_recip`](Ratio::try_recip) would return an error.
    #[inline]
    #[track_caller]
    pub fn reciprocal(&mut self) -> &mut Self {
        *self = self.recip();
        self
    }

    // ========================================================================
    // INCREMENT / DECREMENT
    // ========================================================================

    /// Add one in place by adding the denominator to the numerator.
    ///
    /// `gcd(n + d, d) == gcd(n, d)`, so no reduction pass is needed. Infinity
    /// and NaN are left unchanged. On error the ratio is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// let mut r = RatioI32::new(1, 3);
    /// r.try_inc().unwrap();
    /// assert_eq!(r.as_ratio(), (4, 3));
    /// ```
    pub fn try_inc(&mut self) -> RatioResult<&mut Self> {
        if self.is_finite() {
            let numer = policy::add::<T, P>(self.numer(), self.denom())?;
            *self = self.with_numer(numer)?;
        }
        Ok(self)
    }

    /// Subtract one in place by subtracting the denominator from the numerator.
    pub fn try_dec(&mut self) -> RatioResult<&mut Self> {
        if self.is_finite() {
            let numer = policy::sub::<T, P>(self.numer(), self.denom())?;
            *self = self.with_numer(numer)?;
        }
        Ok(self)
    }

    /// Prefix increment.
    ///
    /// # Panics
    ///
    /// Panics under a checked policy on overflow.
    #[inline]
    #[track_caller]
    pub fn inc(&mut self) -> &mut Self {
        settle(self.try_inc())
    }

    /// Prefix decrement.
    ///
    /// # Panics
    ///
    /// Panics under a checked policy on overflow.
    #[inline]
    #[track_caller]
    pub fn dec(&mut self) -> &mut Self {
        settle(self.try_dec())
    }

    /// Postfix increment: increments in place and returns the previous value.
    #[inline]
    #[track_caller]
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    /// Postfix decrement: decrements in place and returns the previous value.
    #[inline]
    #[track_caller]
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }

    fn with_numer(&self, numer: T) -> RatioResult<Self> {
        match P::OVERFLOW {
            OverflowMode::Checked => Ok(Self::new_raw(numer, self.denom())),
            // A wrapped numerator may share factors with the denominator.
            OverflowMode::Wrapping => Self::try_new(numer, self.denom()),
        }
    }
}

// ============================================================================
// OPERATOR TRAIT IMPLEMENTATIONS
// ============================================================================

/// Implements a binary operator and its assign form for any right-hand side
/// that converts into a `Ratio`, which covers ratios, references to ratios and
/// bare integers alike.
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $try_op:ident) => {
        impl<T: RatioInteger, P: Policy, R: Into<Ratio<T, P>>> $Op<R> for Ratio<T, P> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(self, other: R) -> Self {
                settle(self.$try_op(&other.into()))
            }
        }

        impl<T: RatioInteger, P: Policy, R: Into<Ratio<T, P>>> $Op<R> for &Ratio<T, P> {
            type Output = Ratio<T, P>;

            #[inline]
            #[track_caller]
            fn $op(self, other: R) -> Ratio<T, P> {
                settle(self.$try_op(&other.into()))
            }
        }

        impl<T: RatioInteger, P: Policy, R: Into<Ratio<T, P>>> $OpAssign<R> for Ratio<T, P> {
            #[inline]
            #[track_caller]
            fn $op_assign(&mut self, other: R) {
                *self = settle(self.$try_op(&other.into()));
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, try_add);
forward_binop!(Sub, sub, SubAssign, sub_assign, try_sub);
forward_binop!(Mul, mul, MulAssign, mul_assign, try_mul);
forward_binop!(Div, div, DivAssign, div_assign, try_div);
forward_binop!(Rem, rem, RemAssign, rem_assign, try_rem);

impl<T: RatioInteger, P: Policy> Neg for Ratio<T, P> {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self {
        settle(self.try_neg())
    }
}

impl<T: RatioInteger, P: Policy> Neg for &Ratio<T, P> {
    type Output = Ratio<T, P>;

    #[inline]
    #[track_caller]
    fn neg(self) -> Ratio<T, P> {
        settle(self.try_neg())
    }
}

/// Integers on the left-hand side. The orphan rule rules out a blanket
/// `impl<T> Add<Ratio<T>> for T`, so each primitive gets its own.
macro_rules! impl_integer_lhs {
    ($($int:ty),* $(,)?) => {$(
        impl_integer_lhs!(@op $int, Add, add);
        impl_integer_lhs!(@op $int, Sub, sub);
        impl_integer_lhs!(@op $int, Mul, mul);
        impl_integer_lhs!(@op $int, Div, div);
        impl_integer_lhs!(@op $int, Rem, rem);
    )*};
    (@op $int:ty, $Op:ident, $op:ident) => {
        impl<P: Policy> $Op<Ratio<$int, P>> for $int {
            type Output = Ratio<$int, P>;

            #[inline]
            #[track_caller]
            fn $op(self, other: Ratio<$int, P>) -> Ratio<$int, P> {
                Ratio::from_integer(self).$op(other)
            }
        }

        impl<P: Policy> $Op<&Ratio<$int, P>> for $int {
            type Output = Ratio<$int, P>;

            #[inline]
            #[track_caller]
            fn $op(self, other: &Ratio<$int, P>) -> Ratio<$int, P> {
                Ratio::from_integer(self).$op(other)
            }
        }
    };
}

impl_integer_lhs!(i8, i16, i32, i64, i128, isize);
