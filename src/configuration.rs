
//! This file contains the default values and other value choices used through
//! the library.

/// The number of digits printed after the decimal point when the shell
/// displays a result.
///
/// Note that the results are always printed with this fixed precision
/// regardless of their magnitude. For extreme parameter values a true
/// nonzero probability can therefore display as `0.000000`.
pub static RESULT_DECIMAL_DIGITS: usize = 6;
