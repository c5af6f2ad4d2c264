use std::fmt;
use super::Arity;

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: &'static str,

    /// The number of arguments the function accepts.
    pub expected: Arity,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A function was evaluated outside of its domain, such as `sqrt(-1)` or `log(0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    /// The name of the function that was called.
    pub name: &'static str,

    /// The input that the function is undefined at.
    pub input: f64,
}

/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltinError {
    /// The function was called with the wrong number of arguments.
    WrongArgumentCount(WrongArgumentCount),

    /// The function is undefined at the given input.
    Domain(Domain),
}

impl fmt::Display for BuiltinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinError::WrongArgumentCount(err) => write!(
                f,
                "`{}` takes {}, but {} were given",
                err.name, err.expected, err.given,
            ),
            BuiltinError::Domain(err) => write!(f, "`{}` is undefined at {}", err.name, err.input),
        }
    }
}

impl std::error::Error for BuiltinError {}
