use plotty_compute::numerical::{builtin::error::BuiltinError, value::LengthMismatch};
use std::fmt;

/// An error that can occur while evaluating a compiled expression.
///
/// Only scalar evaluation can produce [`EvalError::DivisionByZero`], [`EvalError::Domain`], and
/// [`EvalError::Overflow`]. Array evaluation follows IEEE semantics instead, producing `NaN` or
/// infinite elements.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Division by exactly zero.
    DivisionByZero,

    /// A function or operator was evaluated outside of its domain, such as `sqrt(-1)`.
    Domain {
        /// The name of the function, or `^` for exponentiation.
        function: &'static str,
    },

    /// A finite computation produced an infinite result.
    Overflow,

    /// The program was called with the wrong number of parameter values.
    ArityMismatch {
        /// The number of parameters the program has.
        expected: usize,

        /// The number of parameter values given.
        given: usize,
    },

    /// The condition of a piecewise expression evaluated to an array.
    NonScalarCondition,

    /// Two arrays of different lengths were combined element-wise.
    LengthMismatch(LengthMismatch),

    /// The bytecode is malformed. Programs produced by `plotty-compiler` never cause this.
    InvalidProgram,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Domain { function } => write!(f, "`{}` was evaluated outside of its domain", function),
            Self::Overflow => write!(f, "the result is too large to represent"),
            Self::ArityMismatch { expected, given } => write!(
                f,
                "expected {} parameter value{}, but {} were given",
                expected,
                if *expected == 1 { "" } else { "s" },
                given,
            ),
            Self::NonScalarCondition => write!(f, "the condition of a piecewise expression must be a scalar"),
            Self::LengthMismatch(err) => write!(f, "{}", err),
            Self::InvalidProgram => write!(f, "the program is malformed"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<LengthMismatch> for EvalError {
    fn from(err: LengthMismatch) -> Self {
        Self::LengthMismatch(err)
    }
}

impl From<BuiltinError> for EvalError {
    fn from(err: BuiltinError) -> Self {
        match err {
            BuiltinError::Domain(domain) => Self::Domain { function: domain.name },
            BuiltinError::WrongArgumentCount(_) => Self::InvalidProgram,
        }
    }
}
