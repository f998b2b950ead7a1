use std::io;

use NormalCalculator::shell;

/// Runs a whole calculator session with the given scripted input and returns
/// everything the shell printed.
fn run_session(script: &str) -> String {
    let mut input: &[u8] = script.as_bytes();
    let mut output: Vec<u8> = Vec::new();

    shell::run(&mut input, &mut output).expect("The session should end with the exit option");

    return String::from_utf8(output).expect("The shell only writes valid UTF-8");
}

#[cfg(test)]
mod prompt_tests {
    use super::*;

    #[test]
    fn test_prompt_retries_until_a_valid_number() {
        let mut input: &[u8] = b"abc\n3.5\n";
        let mut output: Vec<u8> = Vec::new();

        let value: f64 = shell::prompt_f64(&mut input, &mut output, "Value: ")
            .expect("The prompt should end with the parsed number");

        assert_eq!(value, 3.5);

        let text: String = String::from_utf8(output).expect("Only valid UTF-8 is written");
        assert_eq!(text.matches("Enter a valid number.").count(), 1);
        assert_eq!(text.matches("Value: ").count(), 2);
    }

    #[test]
    fn test_prompt_accepts_signs_and_exponent_notation() {
        let mut input: &[u8] = b"-1.5e-2\n";
        let mut output: Vec<u8> = Vec::new();

        let value: f64 = shell::prompt_f64(&mut input, &mut output, "Value: ")
            .expect("The prompt should end with the parsed number");

        assert_eq!(value, -0.015);
    }

    #[test]
    fn test_prompt_reports_eof() {
        let mut input: &[u8] = b"";
        let mut output: Vec<u8> = Vec::new();

        let error: io::Error = shell::prompt_f64(&mut input, &mut output, "Value: ")
            .expect_err("An empty stream cannot produce a number");

        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_density_session() {
        let output: String = run_session("1\n0\n1\n1\n0\n2\n");

        assert!(output.contains("f(0) = 0.398942"));
        assert!(output.contains("Formula: f(x) = 1/(σ*sqrt(2π)) * exp(-0.5*((x-μ)/σ)^2)"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_cumulative_session() {
        let output: String = run_session("1\n0\n1\n2\n0\n2\n");

        assert!(output.contains("P(X <= 0) = 0.500000"));
        assert!(output.contains("Formula: Φ(x) = 0.5 * [1 + erf((x-μ)/(σ*sqrt(2)))]"));
    }

    #[test]
    fn test_cumulative_session_with_exponent_notation() {
        // mean = 1e2 = 100, std_dev = 1.5e1 = 15
        let output: String = run_session("1\n1e2\n1.5e1\n2\n115\n2\n");

        assert!(output.contains("P(X <= 115) = 0.841345"));
    }

    #[test]
    fn test_interval_session() {
        let output: String = run_session("1\n0\n1\n3\n-1\n1\n2\n");

        assert!(output.contains("P(-1 <= X <= 1) = 0.682689"));
        assert!(output.contains("Formula: Φ(b) - Φ(a), using the relation with the error function"));
    }

    #[test]
    fn test_interval_session_with_swapped_bounds() {
        let output: String = run_session("1\n0\n1\n3\n1\n-1\n2\n");

        // The bounds are sorted internally, so the probability is the same
        assert!(output.contains("P(1 <= X <= -1) = 0.682689"));
    }

    #[test]
    fn test_unrecognized_main_menu_option() {
        let output: String = run_session("7\n2\n");

        assert!(output.contains("Option not recognized, try again."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_unrecognized_submenu_option_skips_the_computation() {
        let output: String = run_session("1\n0\n1\n9\n2\n");

        assert!(output.contains("Option not recognized."));
        assert!(!output.contains("Formula:"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_standard_deviation_is_reported_and_recovered() {
        let output: String = run_session("1\n100\n-5\n2\n115\n2\n");

        assert!(output.contains("Error: The standard deviation must be strictly positive."));
        assert!(!output.contains("P(X <= 115)"));
        assert!(output.contains("Goodbye!"));

        // The error appears after the value of x was collected, at the point
        // of the dialogue where the result would have been printed.
        let x_position: usize = output.find("Value of x:").expect("x should have been asked");
        let error_position: usize = output.find("Error:").expect("The error should be printed");
        assert!(x_position < error_position);
    }

    #[test]
    fn test_parameters_are_asked_again_on_every_submenu_entry() {
        // Two computations in a row: each one enters the submenu and
        // provides the parameters again.
        let output: String = run_session("1\n0\n1\n2\n0\n1\n0\n2\n2\n0\n2\n");

        assert_eq!(output.matches("Enter the mean (μ): ").count(), 2);
        assert_eq!(output.matches("Enter the standard deviation (σ>0): ").count(), 2);
        assert!(output.contains("P(X <= 0) = 0.500000"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_non_numeric_parameter_input_warns_and_retries() {
        let output: String = run_session("1\nabc\n0\n1\n2\n0\n2\n");

        assert_eq!(output.matches("Enter a valid number.").count(), 1);
        assert!(output.contains("P(X <= 0) = 0.500000"));
    }

    #[test]
    fn test_eof_before_exit_is_an_error() {
        let mut input: &[u8] = b"1\n0\n";
        let mut output: Vec<u8> = Vec::new();

        let error: io::Error = shell::run(&mut input, &mut output)
            .expect_err("The stream ends before the exit option");

        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }
}
