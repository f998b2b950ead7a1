#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `NormalCalculator` should have a snake case name convert the identifier to snake case: `normal_calculator`"
// The rest of the names will follow the snake_case convention.

//! # Normal Calculator
//!
//! An interactive console calculator for the
//! [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution).
//!
//! Given the mean and the standard deviation of the distribution, the
//! calculator can compute:
//!
//! - [x] The density `f(x)` at a point
//! - [x] The cumulative probability `P(X <= x)`
//! - [x] The probability between two values `P(a <= X <= b)`
//! - [x] Random samples (library only)
//!
//! Every result is printed together with a textual restatement of the formula
//! that was used, so the computation can be followed with pen and paper.
//! There are no plots or graphical output: the focus is on the numbers and
//! their textual interpretation.
//!
//! The computations are exposed both as methods of
//! [Normal](distributions::Normal::Normal) and as free functions
//! ([density](distributions::Normal::density),
//! [cumulative](distributions::Normal::cumulative),
//! [interval_probability](distributions::Normal::interval_probability)).
//! The console itself lives in [shell] and is driven by the binary.
//!

pub mod configuration;
pub mod distributions;
pub mod errors;
pub mod euclid;
pub mod shell;
