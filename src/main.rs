#![allow(non_snake_case)]
// ^Same reason as in lib.rs: the crate name is not snake case.

use std::io;
use std::process::ExitCode;

use NormalCalculator::shell;

fn main() -> ExitCode {
    let stdin: io::Stdin = io::stdin();
    let stdout: io::Stdout = io::stdout();

    let mut input: io::StdinLock<'_> = stdin.lock();
    let mut output: io::StdoutLock<'_> = stdout.lock();

    match shell::run(&mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("The calculator ended with an input/output error: {}", error);
            ExitCode::FAILURE
        }
    }
}
