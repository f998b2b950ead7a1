//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremely well studied.
//! It has a key role in the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! (CLT), wich is the reason why so many real world measurements (heights,
//! measurement errors, test scores...) are modelled with it.
//!
//! We implement the [Normal] distribution with the 3 computations of the
//! calculator (density, cumulative probability and probability of an
//! interval) plus random sampling. The computations are also exposed as the
//! free functions [density], [cumulative] and [interval_probability], wich
//! validate the parameters on every call.
//!

use rand::Rng;
use std::f64::consts::{PI, SQRT_2};

use crate::errors::CalculatorError;
use crate::euclid;

/// A [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

/// An iterator that generates infinite [Normal] samples faster than normally
/// calling [Normal::sample] many times. Usefull if you don't know exactly
/// how many values you want for [Normal::sample_multiple].
///
/// It avoids the heap allocation of [Normal::sample_multiple] and the
/// repeated initialization processes in [Normal::sample].
pub struct NormalGenerator {
    mean: f64,
    standard_deviation: f64,
    rng: rand::prelude::ThreadRng,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be strictly greater than `0.0`.
    ///
    /// If those conditions are not fullfilled, an error will be returned.
    pub const fn new(mean: f64, standard_deviation: f64) -> Result<Normal, CalculatorError> {
        if !mean.is_finite() {
            return Err(CalculatorError::NonFiniteMean);
        }

        if !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(CalculatorError::InvalidStandardDeviation);
        }

        return Ok(Normal {
            mean,
            standard_deviation,
        });
    }

    /// Create a [Normal] distribution without checking for the correctness
    /// of the inputs.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be strictly greater than `0.0`.
    ///
    /// If those conditions are not fullfilled, the returned distribution
    /// will be invalid.
    pub const unsafe fn new_unchecked(mean: f64, standard_deviation: f64) -> Normal {
        return Normal {
            mean,
            standard_deviation,
        };
    }

    /// Returns the mean, the first parameter of the normal distribution.
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal
    /// distribution.
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density Function) of the distribution at point `x`.
    ///
    /// ```text
    /// f(x) = 1/(sigma * sqrt(2*pi)) * exp(-0.5 * ((x - mu)/sigma)^2)
    /// ```
    ///
    /// The result is strictly positive for every finite `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let z: f64 = (x - self.mean) / self.standard_deviation;
        return euclid::INV_SQRT_2_PI / self.standard_deviation * (-0.5 * z * z).exp();
    }

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative Distribution Function) of the distribution at point `x`:
    /// the probability `P(X <= x)`.
    ///
    /// ```text
    /// Phi(x) = 0.5 * (1 + erf((x - mu)/(sigma * sqrt(2))))
    /// ```
    ///
    /// The result is contained in `[0, 1]` (up to the floating point rounding
    /// at the extremes).
    pub fn cdf(&self, x: f64) -> f64 {
        let z: f64 = (x - self.mean) / (self.standard_deviation * SQRT_2);
        return 0.5 * (1.0 + euclid::erf(z));
    }

    /// Computes the probability that the distribution takes a value between
    /// `a` and `b` (both included): `P(a <= X <= b) = Phi(b) - Phi(a)`.
    ///
    /// The bounds can be given in any order: the smaller one is always used
    /// as the lower bound, so the result is never negative.
    pub fn probability_between(&self, a: f64, b: f64) -> f64 {
        let (lower, upper): (f64, f64) = if b < a { (b, a) } else { (a, b) };
        return self.cdf(upper) - self.cdf(lower);
    }

    /// Samples the distribution at random.
    ///
    /// If you need many samples, [Normal::sample_multiple] or [Normal::iter]
    /// avoid re-initializing the random number generator every time.
    pub fn sample(&self) -> f64 {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        return self.mean + self.standard_deviation * standard_sample(&mut rng);
    }

    /// Generates `n` random samples of the distribution.
    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();
        let mut ret: Vec<f64> = Vec::with_capacity(n);

        for _ in 0..n {
            ret.push(self.mean + self.standard_deviation * standard_sample(&mut rng));
        }

        return ret;
    }

    /// Returns an iterator that can generate [Normal] samples even faster
    /// than normally calling [Normal::sample] many times. Usefull if you
    /// don't know exactly how many values you want for
    /// [Normal::sample_multiple].
    pub fn iter(&self) -> NormalGenerator {
        return NormalGenerator {
            mean: self.mean,
            standard_deviation: self.standard_deviation,
            rng: rand::rng(),
        };
    }
}

impl Iterator for NormalGenerator {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        return Some(self.mean + self.standard_deviation * standard_sample(&mut self.rng));
    }
}

/// Generates a sample of the standard normal distribution (`mean = 0.0`,
/// `standard_deviation = 1.0`) with the
/// [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform).
fn standard_sample(rng: &mut rand::prelude::ThreadRng) -> f64 {
    /*
       The Box-Muller transform maps 2 independent uniform samples in (0, 1]
       to a sample of the standard normal:

       z = sqrt(-2 * ln(u_1)) * cos(2 * pi * u_2)

       (The transform actually produces a second independent sample with
       sin instead of cos, but we do not need it.)

       `rng.random()` returns values in [0, 1), so we use `1 - u` to move the
       interval to (0, 1] and keep the logarithm finite.
    */

    let u_1: f64 = 1.0 - rng.random::<f64>();
    let u_2: f64 = rng.random::<f64>();

    return (-2.0 * u_1.ln()).sqrt() * (2.0 * PI * u_2).cos();
}

/// Computes the density `f(x)` of a normal distribution with the given
/// `mean` and `std_dev`.
///
/// Convenience wrapper: validates the parameters (trough [Normal::new]) on
/// every call and evaluates [Normal::pdf]. Returns
/// [CalculatorError::InvalidStandardDeviation] if `std_dev <= 0.0`.
pub fn density(x: f64, mean: f64, std_dev: f64) -> Result<f64, CalculatorError> {
    let distribution: Normal = Normal::new(mean, std_dev)?;
    return Ok(distribution.pdf(x));
}

/// Computes the cumulative probability `P(X <= x)` of a normal distribution
/// with the given `mean` and `std_dev`.
///
/// Convenience wrapper: validates the parameters (trough [Normal::new]) on
/// every call and evaluates [Normal::cdf]. Returns
/// [CalculatorError::InvalidStandardDeviation] if `std_dev <= 0.0`.
pub fn cumulative(x: f64, mean: f64, std_dev: f64) -> Result<f64, CalculatorError> {
    let distribution: Normal = Normal::new(mean, std_dev)?;
    return Ok(distribution.cdf(x));
}

/// Computes the probability `P(a <= X <= b)` of a normal distribution with
/// the given `mean` and `std_dev`. The bounds can be given in any order.
///
/// Convenience wrapper: validates the parameters (trough [Normal::new]) on
/// every call and evaluates [Normal::probability_between].
pub fn interval_probability(a: f64, b: f64, mean: f64, std_dev: f64) -> Result<f64, CalculatorError> {
    let distribution: Normal = Normal::new(mean, std_dev)?;
    return Ok(distribution.probability_between(a, b));
}
