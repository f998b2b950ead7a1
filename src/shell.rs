//! # Interactive shell
//!
//! The text menu that drives the calculator.
//!
//! The shell is a 2 level menu. The main menu only offers the normal
//! distribution and the exit option. The normal distribution submenu asks for
//! the parameters of the distribution, performs **one** computation and
//! returns to the main menu (to compute again, the user re-enters the submenu
//! and the parameters are asked again).
//!
//! All the functions are generic over the input ([BufRead]) and output
//! ([Write]) streams so whole sessions can be scripted in the tests. The
//! binary calls [run] with the locked stdin and stdout of the process.
//!
//! Any error of the underlying streams (including the input stream closing
//! before the user selects the exit option) aborts the shell and is returned
//! to the caller. Everything else (text that is not a number, unrecognized
//! menu options, invalid distribution parameters) is reported to the user
//! and recovered.

use std::io::{self, BufRead, Write};

use crate::configuration::RESULT_DECIMAL_DIGITS;
use crate::distributions::Normal::Normal;

/// One of the computations the normal distribution submenu can perform,
/// together with the value(s) it is evaluated at.
enum Computation {
    /// Density `f(x)`
    Density(f64),
    /// Cumulative probability `P(X <= x)`
    Cumulative(f64),
    /// Probability between 2 values `P(a <= X <= b)`
    Between(f64, f64),
}

/// Runs the calculator until the user selects the exit option.
///
/// Returns an error only if one of the streams fails (for example, if `input`
/// reaches end of file before the user exits).
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Normal Distribution Calculator")?;

    loop {
        writeln!(output)?;
        writeln!(output, "Select an option:")?;
        writeln!(output, "1) Normal distribution")?;
        writeln!(output, "2) Exit")?;

        let choice: String = prompt_line(input, output, "Option: ")?;

        match choice.trim() {
            "1" => normal_menu(input, output)?,
            "2" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Option not recognized, try again.")?,
        }
    }
}

/// The normal distribution submenu: asks for the parameters, performs one
/// computation and returns.
fn normal_menu<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "--- Normal distribution ---")?;

    let mean: f64 = prompt_f64(input, output, "Enter the mean (μ): ")?;
    let std_dev: f64 = prompt_f64(input, output, "Enter the standard deviation (σ>0): ")?;

    writeln!(output)?;
    writeln!(output, "What do you want to compute?")?;
    writeln!(output, "1) Density at a value x")?;
    writeln!(output, "2) Cumulative probability P(X <= x)")?;
    writeln!(output, "3) Probability between two values P(a <= X <= b)")?;

    let choice: String = prompt_line(input, output, "Option: ")?;

    let computation: Computation = match choice.trim() {
        "1" => Computation::Density(prompt_f64(input, output, "Value of x: ")?),
        "2" => Computation::Cumulative(prompt_f64(input, output, "Value of x: ")?),
        "3" => {
            let a: f64 = prompt_f64(input, output, "Lower value a: ")?;
            let b: f64 = prompt_f64(input, output, "Upper value b: ")?;
            Computation::Between(a, b)
        }
        _ => {
            writeln!(output, "Option not recognized.")?;
            return Ok(());
        }
    };

    // The parameters passed the "is it a number" check when they were read,
    // but they can still violate the preconditions of the distribution
    // (std_dev <= 0). The error is reported here, at the same point of the
    // dialogue where the computation would have been printed.
    let distribution: Normal = match Normal::new(mean, std_dev) {
        Ok(distribution) => distribution,
        Err(error) => {
            writeln!(output, "Error: {}", error)?;
            return Ok(());
        }
    };

    match computation {
        Computation::Density(x) => {
            let result: f64 = distribution.pdf(x);
            writeln!(output, "f({}) = {:.prec$}", x, result, prec = RESULT_DECIMAL_DIGITS)?;
            writeln!(output, "Formula: f(x) = 1/(σ*sqrt(2π)) * exp(-0.5*((x-μ)/σ)^2)")?;
        }
        Computation::Cumulative(x) => {
            let result: f64 = distribution.cdf(x);
            writeln!(output, "P(X <= {}) = {:.prec$}", x, result, prec = RESULT_DECIMAL_DIGITS)?;
            writeln!(output, "Formula: Φ(x) = 0.5 * [1 + erf((x-μ)/(σ*sqrt(2)))]")?;
        }
        Computation::Between(a, b) => {
            let result: f64 = distribution.probability_between(a, b);
            writeln!(
                output,
                "P({} <= X <= {}) = {:.prec$}",
                a,
                b,
                result,
                prec = RESULT_DECIMAL_DIGITS
            )?;
            writeln!(output, "Formula: Φ(b) - Φ(a), using the relation with the error function")?;
        }
    }

    return Ok(());
}

/// Displays `message` and reads lines until one of them parses as a real
/// number (sign, decimal point and exponent notation are all accepted).
///
/// On a failed parse a warning is printed and the prompt is repeated. There
/// is no retry limit: the loop only ends with a successfully parsed number
/// (or with a stream error).
pub fn prompt_f64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<f64> {
    loop {
        let line: String = prompt_line(input, output, message)?;

        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Enter a valid number.")?,
        }
    }
}

/// Displays `message` (without a line break, so the user types next to it)
/// and reads one line of input.
///
/// Reaching the end of the input stream is reported as an
/// [io::ErrorKind::UnexpectedEof] error: the shell has no other way to make
/// progress without input.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line: String = String::new();
    let read_bytes: usize = input.read_line(&mut line)?;

    if read_bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "the input stream was closed before the exit option was selected",
        ));
    }

    return Ok(line);
}
