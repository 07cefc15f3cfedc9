//! Text conversion.
//!
//! `Display` writes `n` for integers and `n/d` otherwise, with `inf`, `-inf`
//! and `nan` for the extended values. `FromStr` reads those forms back, plus
//! decimal literals such as `-1.25`, which convert exactly.

use core::fmt;
use core::num::{IntErrorKind, ParseIntError};
use core::str::FromStr;

use crate::error::{RatioError, RatioResult};
use crate::policy::Policy;
use crate::ratio_trait::{gcd_magnitude, RatioInteger};
use crate::Ratio;

impl<T: RatioInteger, P: Policy> fmt::Display for Ratio<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numer, denom) = self.as_ratio();
        if denom == T::ZERO {
            let word = if numer == T::ZERO {
                "nan"
            } else if numer.is_negative() {
                "-inf"
            } else {
                "inf"
            };
            f.pad(word)
        } else if denom == T::ONE {
            write!(f, "{numer}")
        } else {
            write!(f, "{numer}/{denom}")
        }
    }
}

impl<T: RatioInteger, P: Policy> FromStr for Ratio<T, P> {
    type Err = RatioError;

    /// Parses `n`, `n/d`, a decimal literal or an extended value.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixed_ratio::RatioI32;
    ///
    /// assert_eq!("6/-8".parse::<RatioI32>(), Ok(RatioI32::new(-3, 4)));
    /// assert_eq!("-1.25".parse::<RatioI32>(), Ok(RatioI32::new(-5, 4)));
    /// assert_eq!("-Infinity".parse::<RatioI32>(), Ok(RatioI32::neg_infinity()));
    /// ```
    fn from_str(s: &str) -> RatioResult<Self> {
        parse_radix(s, 10)
    }
}

/// Parse `s` in the given radix.
///
/// Extended words and decimal points are only recognized in radix 10.
pub(crate) fn parse_radix<T: RatioInteger, P: Policy>(
    s: &str,
    radix: u32,
) -> RatioResult<Ratio<T, P>> {
    let invalid = || RatioError::Parse {
        input: s.to_string(),
    };
    if !(2..=36).contains(&radix) {
        return Err(invalid());
    }

    let text = s.trim();
    if radix == 10 {
        if let Some(negative) = extended_word(text) {
            return match negative {
                _ if !P::EXTENDED_VALUES => Err(RatioError::NotFinite),
                Some(negative) => Ok(Ratio::signed_infinity(negative)),
                None => Ok(Ratio::new_raw(T::ZERO, T::ZERO)),
            };
        }
    }

    if let Some((numer, denom)) = text.split_once('/') {
        let numer = parse_integer::<T>(numer, radix).map_err(|e| e.unwrap_or_else(invalid))?;
        let denom = parse_integer::<T>(denom, radix).map_err(|e| e.unwrap_or_else(invalid))?;
        return Ratio::try_new(numer, denom);
    }

    if radix == 10 {
        if let Some((whole, fraction)) = text.split_once('.') {
            return parse_decimal(whole, fraction).ok_or_else(invalid)?;
        }
    }

    parse_integer::<T>(text, radix)
        .map(Ratio::from_integer)
        .map_err(|e| e.unwrap_or_else(invalid))
}

/// `Some(Some(negative))` for an infinity, `Some(None)` for NaN.
fn extended_word(text: &str) -> Option<Option<bool>> {
    let (negative, word) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if word.eq_ignore_ascii_case("inf") || word.eq_ignore_ascii_case("infinity") {
        Some(Some(negative))
    } else if word.eq_ignore_ascii_case("nan") {
        Some(None)
    } else {
        None
    }
}

/// Parse one integer field. `Err(Some(_))` carries an error more specific
/// than a malformed literal.
fn parse_integer<T: RatioInteger>(text: &str, radix: u32) -> Result<T, Option<RatioError>> {
    T::from_str_radix(text, radix).map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Some(RatioError::Overflow),
        _ => None,
    })
}

/// Exact value of `whole.fraction`. `None` if either part is malformed.
fn parse_decimal<T: RatioInteger, P: Policy>(
    whole: &str,
    fraction: &str,
) -> Option<RatioResult<Ratio<T, P>>> {
    let (negative, whole) = match whole.as_bytes().first() {
        Some(b'-') => (true, &whole[1..]),
        Some(b'+') => (false, &whole[1..]),
        _ => (false, whole),
    };
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return None;
    }

    Some(decimal_value(negative, whole, fraction))
}

fn decimal_value<T: RatioInteger, P: Policy>(
    negative: bool,
    whole: &str,
    fraction: &str,
) -> RatioResult<Ratio<T, P>> {
    let mut numer: u128 = 0;
    for digit in whole.bytes().chain(fraction.bytes()) {
        numer = numer
            .checked_mul(10)
            .and_then(|n| n.checked_add(u128::from(digit - b'0')))
            .ok_or(RatioError::Overflow)?;
    }
    let scale = u32::try_from(fraction.len())
        .ok()
        .and_then(|len| 10u128.checked_pow(len))
        .ok_or(RatioError::Overflow)?;

    let common = gcd_magnitude(numer, scale);
    let numer = T::from_magnitude(negative, numer / common).ok_or(RatioError::Overflow)?;
    let denom = T::from_magnitude(false, scale / common).ok_or(RatioError::Overflow)?;
    Ok(Ratio::new_raw(numer, denom))
}
