//! Equality and ordering.
//!
//! Equality is structural on the canonical pair, so it is an equivalence
//! relation and agrees with `Hash`, NaN included. Ordering is exact: after the
//! cheap sign and denominator checks, common factors are cancelled and the
//! remaining cross products are compared at double width when they do not fit
//! in 128 bits.

use core::cmp::Ordering;

use crate::error::RatioResult;
use crate::policy::{self, Policy};
use crate::ratio_trait::{cmp_products, gcd_magnitude, RatioInteger};
use crate::Ratio;

impl<T: RatioInteger, P: Policy> Ratio<T, P> {
    /// The cross difference `numer * other.denom - denom * other.numer`.
    ///
    /// Its sign is the sign of `self - other` for finite operands.
    ///
    /// # Errors
    ///
    /// [`RatioError::Overflow`](crate::RatioError::Overflow) under a checked
    /// policy if a product or the difference does not fit in `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// let a = RatioI32::new(3, 4);
    /// let b = RatioI32::new(5, 6);
    /// assert_eq!(a.cross(&b), Ok(-2));
    /// ```
    pub fn cross(&self, other: &Self) -> RatioResult<T> {
        let lhs = policy::mul::<T, P>(self.numer(), other.denom())?;
        let rhs = policy::mul::<T, P>(self.denom(), other.numer())?;
        policy::sub::<T, P>(lhs, rhs)
    }

    /// Order two values neither of which is NaN.
    fn cmp_ordered(&self, other: &Self) -> Ordering {
        if self.is_infinite() || other.is_infinite() {
            return infinity_rank(self).cmp(&infinity_rank(other));
        }

        let (na, da) = self.as_ratio();
        let (nb, db) = other.as_ratio();

        let sign = na.signum();
        let sign_cmp = sign.cmp(&nb.signum());
        if sign_cmp != Ordering::Equal || sign == T::ZERO {
            return sign_cmp;
        }
        if da == db {
            return na.cmp(&nb);
        }

        // Same sign from here on: compare magnitudes, then flip for negatives.
        let (na, nb) = (na.magnitude(), nb.magnitude());
        let (da, db) = (da.magnitude(), db.magnitude());
        let g1 = gcd_magnitude(na, nb);
        let g2 = gcd_magnitude(da, db);
        let ord = cmp_products(na / g1, db / g2, nb / g1, da / g2);

        if sign.is_negative() {
            ord.reverse()
        } else {
            ord
        }
    }

    /// Order against a bare integer without building a ratio when possible.
    fn cmp_integer(&self, other: T) -> Ordering {
        let (numer, denom) = self.as_ratio();
        if denom == T::ZERO {
            return numer.cmp(&T::ZERO);
        }
        if denom == T::ONE {
            return numer.cmp(&other);
        }
        if other == T::ZERO {
            return numer.cmp(&T::ZERO);
        }

        let sign_cmp = numer.signum().cmp(&other.signum());
        if sign_cmp != Ordering::Equal {
            return sign_cmp;
        }

        // |n| / d against |other| / 1, with |n| and d coprime.
        let ord = cmp_products(numer.magnitude(), 1, other.magnitude(), denom.magnitude());
        if numer.is_negative() {
            ord.reverse()
        } else {
            ord
        }
    }
}

/// `-1` for negative infinity, `1` for positive infinity, `0` for finite values.
#[inline]
fn infinity_rank<T: RatioInteger, P: Policy>(r: &Ratio<T, P>) -> i8 {
    if !r.is_infinite() {
        0
    } else if r.is_negative() {
        -1
    } else {
        1
    }
}

// ============================================================================
// COMPARISON TRAIT IMPLEMENTATIONS
// ============================================================================

impl<T: RatioInteger, P: Policy> PartialEq for Ratio<T, P> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.as_ratio() == other.as_ratio()
    }
}

impl<T: RatioInteger, P: Policy> Eq for Ratio<T, P> {}

impl<T: RatioInteger, P: Policy> PartialOrd for Ratio<T, P> {
    /// `None` when exactly one side is NaN; NaN compares equal to NaN.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Some(Ordering::Equal),
            (false, false) => Some(self.cmp_ordered(other)),
            _ => None,
        }
    }
}

impl<T: RatioInteger, P: Policy> PartialEq<T> for Ratio<T, P> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.denom() == T::ONE && self.numer() == *other
    }
}

impl<T: RatioInteger, P: Policy> PartialOrd<T> for Ratio<T, P> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        if self.is_nan() {
            return None;
        }
        Some(self.cmp_integer(*other))
    }
}

/// Integers on the left-hand side of `==` and `<`.
macro_rules! impl_integer_cmp {
    ($($int:ty),* $(,)?) => {$(
        impl<P: Policy> PartialEq<Ratio<$int, P>> for $int {
            #[inline]
            fn eq(&self, other: &Ratio<$int, P>) -> bool {
                other == self
            }
        }

        impl<P: Policy> PartialOrd<Ratio<$int, P>> for $int {
            #[inline]
            fn partial_cmp(&self, other: &Ratio<$int, P>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }
    )*};
}

impl_integer_cmp!(i8, i16, i32, i64, i128, isize);
