use ariadne::Source;
use plotty_function::{FunctionError, Rejection};

/// Report a rejected request to stderr.
///
/// Parse and compile errors are rendered with `ariadne`, pointing into `input`, the expression
/// the user typed. Every other rejection is printed as a single line.
pub fn report_rejection(rejection: &Rejection, input: &str) {
    let compile_err;
    let report = match rejection {
        Rejection::Invalid(FunctionError::Parse(err)) => err.build_report("input"),
        Rejection::Invalid(FunctionError::Compile(err)) => {
            compile_err = err.clone().into_error(0..input.len());
            compile_err.build_report("input")
        },
        other => {
            eprintln!("error: {}", other);
            return;
        },
    };

    if let Err(err) = report.eprint(("input", Source::from(input))) {
        eprintln!("error: {}", err);
    }
}
