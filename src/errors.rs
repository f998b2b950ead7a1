use thiserror::Error;

/// The errors produced when the parameters of the distribution do not
/// fullfill the preconditions of the computations.
///
/// Note that the values the distribution is evaluated at (`x`, or the bounds
/// `a` and `b`) are **not** validated: a NaN or an infinity there just
/// propagates through the underlying primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The mean was an infinity or a NaN.
    #[error("The mean must be a finite number (no `+-inf` or NaN). ")]
    NonFiniteMean,
    /// The standard deviation was zero, negative, infinite or a NaN.
    #[error("The standard deviation must be strictly positive. ")]
    InvalidStandardDeviation,
}
