//! Exact rational numbers over fixed-width signed integers.
//!
//! This library provides `Ratio<T, P>`, a numerator/denominator pair over any
//! primitive signed integer (`i8` through `i128`) kept in canonical reduced
//! form after every operation, usable wherever a built-in numeric type is.
//!
//! # Features
//!
//! - **Canonical form**: denominator is never negative, numerator and
//!   denominator are coprime, zero is always `0/1`
//! - **Overflow-aware arithmetic**: GCD-interleaved addition and
//!   cross-cancelling multiplication (Knuth, TAOCP 4.5.1) delay overflow, and
//!   comparisons are exact even when cross products exceed the backing type
//! - **Total arithmetic**: under the default policy a zero denominator yields
//!   signed infinity or NaN instead of failing
//! - **Selectable policy**: [`Extended`], [`Strict`] or [`Wrapping`]
//!
//! # Design Philosophy
//!
//! Every public operation returns a fully normalized value or fails outright.
//! Fallible operations come in two shapes: `try_*` methods returning
//! [`RatioResult`], and the operator traits, which panic with the error
//! message the way primitive integer operators do.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use fixed_ratio::Ratio;
//!
//! let a = Ratio::<i64>::new(3, 4);
//! let b = Ratio::<i64>::new(5, 6);
//!
//! assert_eq!(a + b, Ratio::new(19, 12));
//! assert_eq!(a - b, Ratio::new(-1, 12));
//! assert_eq!(a * b, Ratio::new(5, 8));
//! assert_eq!(a / b, Ratio::new(9, 10));
//! assert_eq!((a * b).to_string(), "5/8");
//! ```
//!
//! ## Extended Values
//!
//! ```
//! use fixed_ratio::RatioI32;
//!
//! let inf = RatioI32::new(7, 0);
//! let zero = RatioI32::zero();
//!
//! assert_eq!(inf.as_ratio(), (1, 0));
//! assert!((inf * zero).is_nan());
//! assert!((inf - inf).is_nan());
//! assert!(zero < inf);
//! ```
//!
//! ## Overflow Handling
//!
//! ```
//! use fixed_ratio::{Ratio, RatioError, Wrapping};
//!
//! let max = Ratio::<i32>::from_integer(i32::MAX);
//! assert_eq!(max.try_add(&Ratio::one()), Err(RatioError::Overflow));
//!
//! let wrapping = Ratio::<i32, Wrapping>::from_integer(i32::MAX) + 1;
//! assert_eq!(wrapping.numer(), i32::MIN);
//! ```

pub mod policy;
pub mod ratio_trait;

mod arith;
mod cmp;
mod error;
mod fmt;
mod num;
mod tower;

pub use crate::error::{RatioError, RatioResult};
pub use crate::policy::{Extended, ExtendedPolicy, OverflowMode, Policy, Strict, Wrapping};
pub use crate::ratio_trait::{cmp_products, gcd, gcd_magnitude, lcm, RatioInteger};

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// A rational number stored as a reduced numerator/denominator pair.
///
/// # Type Parameters
///
/// - `T`: the backing integer, any [`RatioInteger`]
/// - `P`: the [`Policy`], [`Extended`] unless specified
///
/// # Invariants
///
/// - The denominator is never negative; the numerator carries the sign
/// - Numerator and denominator are coprime whenever both are nonzero
/// - Zero is always `0/1`
/// - Positive infinity is `1/0`, negative infinity `-1/0`, NaN `0/0`
///   (extended policies only)
///
/// The wrapping policy keeps these invariants only while no overflow occurs.
///
/// # Examples
///
/// ```
/// use fixed_ratio::Ratio;
///
/// let r = Ratio::<i32>::new(-3, -6);
/// assert_eq!(r.numer(), 1);
/// assert_eq!(r.denom(), 2);
///
/// let r = Ratio::<i32>::new(1, -2);
/// assert_eq!(r.as_ratio(), (-1, 2));
/// ```
pub struct Ratio<T: RatioInteger, P: Policy = Extended> {
    numer: T,
    denom: T,
    policy: PhantomData<fn() -> P>,
}

impl<T: RatioInteger, P: Policy> Ratio<T, P> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a ratio without normalization.
    ///
    /// The caller is responsible for passing a pair already in canonical form;
    /// the other constructors are preferable unless that is known.
    ///
    /// The policy is not consulted either: under [`Strict`], `new_raw(1, 0)`
    /// builds an infinity that no checked constructor or operation would
    /// produce. Use [`try_new`](Ratio::try_new) when the pair may have a
    /// zero denominator.
    #[inline(always)]
    pub const fn new_raw(numer: T, denom: T) -> Self {
        Self {
            numer,
            denom,
            policy: PhantomData,
        }
    }

    /// Create a normalized ratio.
    ///
    /// # Errors
    ///
    /// - [`RatioError::ZeroDenominator`] if `denom` is zero and the policy has
    ///   no extended values
    /// - [`RatioError::Overflow`] if the reduced form does not fit, as for
    ///   `1 / T::MIN`
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::{Ratio, RatioError, Strict};
    ///
    /// assert_eq!(Ratio::<i32>::try_new(4, 6).unwrap().as_ratio(), (2, 3));
    /// assert!(Ratio::<i32>::try_new(-5, 0).unwrap().is_infinite());
    /// assert_eq!(Ratio::<i32, Strict>::try_new(1, 0), Err(RatioError::ZeroDenominator));
    /// assert_eq!(Ratio::<i8>::try_new(1, i8::MIN), Err(RatioError::Overflow));
    /// ```
    pub fn try_new(numer: T, denom: T) -> RatioResult<Self> {
        let (numer, denom, _) = normalize::<T, P>(numer, denom)?;
        Ok(Self::new_raw(numer, denom))
    }

    /// Create a normalized ratio.
    ///
    /// # Panics
    ///
    /// Panics where [`try_new`](Ratio::try_new) would return an error.
    #[inline]
    #[track_caller]
    pub fn new(numer: T, denom: T) -> Self {
        error::settle(Self::try_new(numer, denom))
    }

    /// Create the ratio `n/1`.
    #[inline(always)]
    pub const fn from_integer(n: T) -> Self {
        Self::new_raw(n, T::ONE)
    }

    /// Create a ratio representing 0.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::new_raw(T::ZERO, T::ONE)
    }

    /// Create a ratio representing 1.
    #[inline(always)]
    pub const fn one() -> Self {
        Self::new_raw(T::ONE, T::ONE)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The numerator; carries the sign.
    #[inline(always)]
    pub const fn numer(&self) -> T {
        self.numer
    }

    /// The denominator; never negative.
    #[inline(always)]
    pub const fn denom(&self) -> T {
        self.denom
    }

    /// The `(numerator, denominator)` pair.
    #[inline(always)]
    pub const fn as_ratio(&self) -> (T, T) {
        (self.numer, self.denom)
    }

    // ========================================================================
    // PREDICATES
    // ========================================================================

    /// Check if the ratio is the rational zero.
    #[inline(always)]
    pub fn is_zero(&self) -> bool {
        self.numer == T::ZERO && self.denom != T::ZERO
    }

    /// Check if the ratio represents an integer (denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom == T::ONE
    }

    /// Check if the ratio is an ordinary rational number.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.denom != T::ZERO
    }

    /// Check if the ratio is positive or negative infinity.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.denom == T::ZERO && self.numer != T::ZERO
    }

    /// Check if the ratio is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.denom == T::ZERO && self.numer == T::ZERO
    }

    /// Check if the ratio is above zero, including positive infinity.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer > T::ZERO
    }

    /// Check if the ratio is below zero, including negative infinity.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    // ========================================================================
    // FLOAT CONVERSION
    // ========================================================================

    /// Convert an `f64` exactly.
    ///
    /// Every finite float is a dyadic rational `m * 2^e`; the result is that
    /// value exactly, not an approximation. NaN and infinities map to the
    /// extended values.
    ///
    /// # Errors
    ///
    /// - [`RatioError::Overflow`] if the exact value needs a numerator or
    ///   denominator wider than `T`
    /// - [`RatioError::NotFinite`] for NaN or infinity under a policy without
    ///   extended values
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI64;
    ///
    /// assert_eq!(RatioI64::from_float(0.75).unwrap().as_ratio(), (3, 4));
    /// assert_eq!(RatioI64::from_float(-2.5).unwrap().as_ratio(), (-5, 2));
    /// assert!(RatioI64::from_float(f64::NAN).unwrap().is_nan());
    /// ```
    pub fn from_float(f: f64) -> RatioResult<Self> {
        if !f.is_finite() {
            if !P::EXTENDED_VALUES {
                return Err(RatioError::NotFinite);
            }
            return Ok(if f.is_nan() {
                Self::new_raw(T::ZERO, T::ZERO)
            } else {
                Self::signed_infinity(f.is_sign_negative())
            });
        }

        let bits = f.to_bits();
        let negative = bits >> 63 == 1;
        let exponent_field = ((bits >> 52) & 0x7ff) as i32;
        let fraction = bits & ((1u64 << 52) - 1);

        let (mut mantissa, mut exponent) = if exponent_field == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), exponent_field - 1075)
        };

        if mantissa == 0 {
            return Ok(Self::zero());
        }

        let trailing = mantissa.trailing_zeros();
        mantissa >>= trailing;
        exponent += trailing as i32;

        if exponent >= 0 {
            let shift = exponent as u32;
            let significant = u64::BITS - mantissa.leading_zeros();
            if significant + shift > u128::BITS {
                return Err(RatioError::Overflow);
            }
            let numer = T::from_magnitude(negative, (mantissa as u128) << shift)
                .ok_or(RatioError::Overflow)?;
            return Ok(Self::from_integer(numer));
        }

        let shift = exponent.unsigned_abs();
        if shift > T::BITS - 2 {
            return Err(RatioError::Overflow);
        }
        let numer =
            T::from_magnitude(negative, mantissa as u128).ok_or(RatioError::Overflow)?;
        let denom = T::from_magnitude(false, 1u128 << shift).ok_or(RatioError::Overflow)?;

        // An odd mantissa over a power of two is already coprime.
        Ok(Self::new_raw(numer, denom))
    }

    /// Nearest `f64`. Infinities and NaN map to their float counterparts.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// assert_eq!(RatioI32::new(1, 2).to_f64(), 0.5);
    /// assert_eq!(RatioI32::new(-1, 0).to_f64(), f64::NEG_INFINITY);
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer.as_f64() / self.denom.as_f64()
    }

    /// Nearest `f32`, by way of [`to_f64`](Ratio::to_f64).
    #[inline]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    #[inline(always)]
    pub(crate) fn signed_infinity(negative: bool) -> Self {
        let unit = if negative { -T::ONE } else { T::ONE };
        Self::new_raw(unit, T::ZERO)
    }
}

impl<T: RatioInteger, P: ExtendedPolicy> Ratio<T, P> {
    /// Positive infinity, `1/0`.
    #[inline(always)]
    pub fn infinity() -> Self {
        Self::signed_infinity(false)
    }

    /// Negative infinity, `-1/0`.
    #[inline(always)]
    pub fn neg_infinity() -> Self {
        Self::signed_infinity(true)
    }

    /// NaN, `0/0`.
    #[inline(always)]
    pub fn nan() -> Self {
        Self::new_raw(T::ZERO, T::ZERO)
    }
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Bring `numer/denom` into canonical form.
///
/// Returns the canonical pair together with the common factor that was divided
/// out, as a magnitude since it can be `|T::MIN|`:
///
/// - a negative denominator moves its sign to the numerator
/// - numerator and denominator are divided by their GCD
/// - `0/d` becomes `0/1` for any nonzero `d`
/// - `n/0` becomes `±1/0` and `0/0` stays `0/0`, or fails with
///   [`RatioError::ZeroDenominator`] under a policy without extended values
///
/// Normalizing a canonical pair returns it unchanged with a common factor of 1.
///
/// # Examples
///
/// ```
/// use fixed_ratio::{normalize, Extended};
///
/// assert_eq!(normalize::<i32, Extended>(6, -4), Ok((-3, 2, 2)));
/// assert_eq!(normalize::<i32, Extended>(-3, 2), Ok((-3, 2, 1)));
/// assert_eq!(normalize::<i32, Extended>(0, -9), Ok((0, 1, 9)));
/// assert_eq!(normalize::<i32, Extended>(-9, 0), Ok((-1, 0, 9)));
/// ```
pub fn normalize<T: RatioInteger, P: Policy>(numer: T, denom: T) -> RatioResult<(T, T, u128)> {
    if denom == T::ZERO {
        if !P::EXTENDED_VALUES {
            return Err(RatioError::ZeroDenominator);
        }
        return Ok((numer.signum(), T::ZERO, numer.magnitude()));
    }
    if numer == T::ZERO {
        return Ok((T::ZERO, T::ONE, denom.magnitude()));
    }

    let (numer_mag, denom_mag) = (numer.magnitude(), denom.magnitude());
    let common = gcd_magnitude(numer_mag, denom_mag);
    let negative = numer.is_negative() != denom.is_negative();

    let numer = policy::from_magnitude::<T, P>(negative, numer_mag / common)?;
    let denom = policy::from_magnitude::<T, P>(false, denom_mag / common)?;
    Ok((numer, denom, common))
}

// ============================================================================
// VALUE-TYPE TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: RatioInteger, P: Policy> Clone for Ratio<T, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: RatioInteger, P: Policy> Copy for Ratio<T, P> {}

impl<T: RatioInteger, P: Policy> Default for Ratio<T, P> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger, P: Policy> core::fmt::Debug for Ratio<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ratio")
            .field("numer", &self.numer)
            .field("denom", &self.denom)
            .field("policy", &P::NAME)
            .finish()
    }
}

impl<T: RatioInteger, P: Policy> Hash for Ratio<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numer.hash(state);
        self.denom.hash(state);
    }
}

impl<T: RatioInteger, P: Policy> From<T> for Ratio<T, P> {
    #[inline(always)]
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: RatioInteger, P: Policy> From<&Ratio<T, P>> for Ratio<T, P> {
    #[inline(always)]
    fn from(r: &Ratio<T, P>) -> Self {
        *r
    }
}

impl<T: RatioInteger, P: Policy> From<(T, T)> for Ratio<T, P> {
    /// Normalizing conversion from a `(numerator, denominator)` pair.
    ///
    /// Panics where [`Ratio::try_new`] would return an error.
    #[track_caller]
    fn from((numer, denom): (T, T)) -> Self {
        Self::new(numer, denom)
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Ratio using 8-bit integers.
pub type RatioI8 = Ratio<i8>;

/// Ratio using 16-bit integers.
pub type RatioI16 = Ratio<i16>;

/// Ratio using 32-bit integers.
pub type RatioI32 = Ratio<i32>;

/// Ratio using 64-bit integers (recommended for most use cases).
pub type RatioI64 = Ratio<i64>;

/// Ratio using 128-bit integers.
pub type RatioI128 = Ratio<i128>;

/// Ratio using pointer-sized integers.
pub type RatioIsize = Ratio<isize>;

/// The default rational type: 64-bit, extended values, checked overflow.
pub type Rational = RatioI64;

/// Ratio that rejects zero denominators instead of producing infinity or NaN.
pub type StrictRatio<T> = Ratio<T, Strict>;

/// Ratio whose backing arithmetic wraps on overflow.
pub type WrappingRatio<T> = Ratio<T, Wrapping>;
