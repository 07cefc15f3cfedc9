//! Policies selecting zero-denominator semantics and overflow behavior.
//!
//! A `Ratio<T, P>` carries its policy as a zero-sized type parameter, so the
//! choice costs nothing at runtime and the branches on it fold away.
//!
//! | Policy       | zero denominator         | backing overflow          |
//! |--------------|--------------------------|---------------------------|
//! | [`Extended`] | `±inf` / `nan` values    | `RatioError::Overflow`    |
//! | [`Strict`]   | `RatioError::ZeroDenominator` | `RatioError::Overflow` |
//! | [`Wrapping`] | `±inf` / `nan` values    | wraps silently            |

use crate::error::{RatioError, RatioResult};
use crate::ratio_trait::RatioInteger;

/// What happens when an intermediate value does not fit in the backing integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowMode {
    /// Fail with [`RatioError::Overflow`].
    Checked,
    /// Wrap around, two's complement style. Results are then exact modulo
    /// `2^BITS` only, and a wrapped denominator of zero reads as infinity.
    Wrapping,
}

/// Compile-time configuration of a `Ratio`.
pub trait Policy: 'static {
    /// Whether a zero denominator produces infinity or NaN instead of an error.
    const EXTENDED_VALUES: bool;

    /// Overflow handling for intermediate integer arithmetic.
    const OVERFLOW: OverflowMode;

    /// Short name used in `Debug` output.
    const NAME: &'static str;
}

/// Marker for policies that admit infinity and NaN.
///
/// Gates the constructors that produce extended values directly.
pub trait ExtendedPolicy: Policy {}

/// Infinity and NaN for zero denominators, checked overflow. The default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Extended;

/// Zero denominators are errors, checked overflow. Models the integer tower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strict;

/// Infinity and NaN for zero denominators, wrapping overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Wrapping;

impl Policy for Extended {
    const EXTENDED_VALUES: bool = true;
    const OVERFLOW: OverflowMode = OverflowMode::Checked;
    const NAME: &'static str = "Extended";
}

impl Policy for Strict {
    const EXTENDED_VALUES: bool = false;
    const OVERFLOW: OverflowMode = OverflowMode::Checked;
    const NAME: &'static str = "Strict";
}

impl Policy for Wrapping {
    const EXTENDED_VALUES: bool = true;
    const OVERFLOW: OverflowMode = OverflowMode::Wrapping;
    const NAME: &'static str = "Wrapping";
}

impl ExtendedPolicy for Extended {}
impl ExtendedPolicy for Wrapping {}

// ============================================================================
// POLICY-AWARE INTEGER ARITHMETIC
// ============================================================================

#[inline]
pub(crate) fn add<T: RatioInteger, P: Policy>(a: T, b: T) -> RatioResult<T> {
    settle::<T, P>(a.overflowing_add(b), "addition", a, b)
}

#[inline]
pub(crate) fn sub<T: RatioInteger, P: Policy>(a: T, b: T) -> RatioResult<T> {
    settle::<T, P>(a.overflowing_sub(b), "subtraction", a, b)
}

#[inline]
pub(crate) fn mul<T: RatioInteger, P: Policy>(a: T, b: T) -> RatioResult<T> {
    settle::<T, P>(a.overflowing_mul(b), "multiplication", a, b)
}

#[inline]
pub(crate) fn neg<T: RatioInteger, P: Policy>(a: T) -> RatioResult<T> {
    settle::<T, P>(a.overflowing_neg(), "negation", a, T::ZERO)
}

#[inline]
pub(crate) fn pow<T: RatioInteger, P: Policy>(base: T, exp: u32) -> RatioResult<T> {
    let (value, overflowed) = base.overflowing_pow(exp);
    if !overflowed {
        return Ok(value);
    }
    match P::OVERFLOW {
        OverflowMode::Checked => {
            log::debug!("{base}^{exp} does not fit in {} bits", T::BITS);
            Err(RatioError::Overflow)
        }
        OverflowMode::Wrapping => {
            log::trace!("{base}^{exp} wrapped to {value}");
            Ok(value)
        }
    }
}

/// Convert a sign and magnitude back into the backing type.
#[inline]
pub(crate) fn from_magnitude<T: RatioInteger, P: Policy>(
    negative: bool,
    magnitude: u128,
) -> RatioResult<T> {
    if let Some(value) = T::from_magnitude(negative, magnitude) {
        return Ok(value);
    }
    match P::OVERFLOW {
        OverflowMode::Checked => {
            log::debug!("magnitude {magnitude} does not fit in {} bits", T::BITS);
            Err(RatioError::Overflow)
        }
        OverflowMode::Wrapping => {
            let value = T::wrapping_from_magnitude(negative, magnitude);
            log::trace!("magnitude {magnitude} wrapped to {value}");
            Ok(value)
        }
    }
}

#[inline]
fn settle<T: RatioInteger, P: Policy>(
    (value, overflowed): (T, bool),
    op: &str,
    a: T,
    b: T,
) -> RatioResult<T> {
    if !overflowed {
        return Ok(value);
    }
    match P::OVERFLOW {
        OverflowMode::Checked => {
            log::debug!("{op} of {a} and {b} overflowed {} bits", T::BITS);
            Err(RatioError::Overflow)
        }
        OverflowMode::Wrapping => {
            log::trace!("{op} of {a} and {b} wrapped to {value}");
            Ok(value)
        }
    }
}
