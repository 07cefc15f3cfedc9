//! Error type shared by every fallible rational operation.

use thiserror::Error;

/// Result alias for rational operations.
pub type RatioResult<T> = Result<T, RatioError>;

/// Every way a rational operation can fail.
///
/// The operator traits (`+`, `-`, `*`, `/`, `%` and their assign forms) cannot
/// return a `Result`, so they panic with this error's message instead. Use the
/// `try_*` methods to observe the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    /// A zero denominator was supplied under a policy without infinities and NaN.
    #[error("zero denominator")]
    ZeroDenominator,

    /// Division (or floor division, or remainder) by the rational zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Zero raised to a negative power.
    #[error("zero cannot be raised to a negative power")]
    InvalidPower,

    /// The backing integer overflowed under the checked policy.
    #[error("arithmetic overflow in the backing integer")]
    Overflow,

    /// The operation is only defined on finite values.
    #[error("operation requires a finite value")]
    NotFinite,

    /// `limit_denominator` was given a bound below one.
    #[error("max_denominator must be at least 1")]
    InvalidMaxDenominator,

    /// Text that is not a rational literal.
    #[error("invalid rational literal {input:?}")]
    Parse { input: String },
}

/// Unwrap a result in an operator impl, panicking with the error message.
#[inline]
#[track_caller]
pub(crate) fn settle<V>(result: RatioResult<V>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
