//! Euclid contains the math functions and constants used through the library.

/// `1/sqrt(2*pi)`. The normalization constant of the normal pdf.
pub const INV_SQRT_2_PI: f64 = 0.3989422804014326779399460599343818684758586311649;

/// Evaluates the [error function](https://en.wikipedia.org/wiki/Error_function)
/// at `x`.
///
/// The error function has no closed form solution, so we use the rational
/// aproximation 7.1.26 from Abramowitz & Stegun (*Handbook of Mathematical
/// Functions*). Its maximum absolute error is `~1.5 * 10^-7`, wich is more
/// than enough for results that are displayed with 6 decimal digits.
///
/// Special values follow from the formula itself: `erf(+-inf) = +-1.0` and
/// NaNs propagate.
pub fn erf(x: f64) -> f64 {
    /*
       The aproximation is only valid for `0.0 <= x`, so for negative inputs
       we use the simmetry of the function:

       erf(-x) = -erf(x)

       To evaluate the polynomial we use Horner's rule:
       https://en.wikipedia.org/wiki/Polynomial_evaluation#Horner's_rule

       ```
       x^2 + a_1 * x + a_2 =
        = (x + a_1) * x + a_2
       ```

       For better efficiency we use `f64::mul_add`.
       `x.mul_add(a, b) = x * a + b`
    */

    const P: f64 = 0.3275911;
    const A_COEFFICIENTS: [f64; 5] = [
        0.254829592,
        -0.284496736,
        1.421413741,
        -1.453152027,
        1.061405429,
    ];

    let (z, flipped): (f64, bool) = if x < 0.0 { (-x, true) } else { (x, false) };

    let t: f64 = 1.0 / (1.0 + P * z);

    let polynomial: f64 = A_COEFFICIENTS[4]
        .mul_add(t, A_COEFFICIENTS[3])
        .mul_add(t, A_COEFFICIENTS[2])
        .mul_add(t, A_COEFFICIENTS[1])
        .mul_add(t, A_COEFFICIENTS[0])
        * t;

    let value: f64 = 1.0 - polynomial * (-z * z).exp();

    return if flipped { -value } else { value };
}
