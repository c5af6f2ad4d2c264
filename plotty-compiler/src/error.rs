//! Errors that can occur while compiling an expression.

use ariadne::Fmt;
use plotty_attrs::ErrorKind;
use plotty_compute::numerical::builtin::Arity;
use plotty_error::{Error, EXPR};
use std::{fmt, ops::Range};

/// The variable is not the primary variable, a parameter, or a builtin constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable: `{}`", name),
    labels = ["this expression"],
    help = "only the primary variable, the parameters, `pi`, and `E` can be used",
    note = format!(
        "this function is defined over: {}",
        known.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(", "),
    ),
)]
pub struct UnknownVariable {
    /// The name of the variable.
    pub name: String,

    /// The symbols the expression was compiled against.
    pub known: Vec<String>,
}

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function: `{}`", name),
    labels = ["this expression"],
    help = if suggestions.is_empty() {
        "see `:help` for a list of available functions".to_string()
    } else if suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A builtin function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function takes {}, but {} were given", name, expected, given),
    labels = ["this expression"],
)]
pub struct WrongArgumentCount {
    /// The name of the function.
    pub name: &'static str,

    /// The number of arguments the function accepts.
    pub expected: Arity,

    /// The number of arguments given.
    pub given: usize,
}

/// An error that can occur while compiling an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    UnknownVariable(UnknownVariable),
    UnknownFunction(UnknownFunction),
    WrongArgumentCount(WrongArgumentCount),
}

impl CompileError {
    /// Converts this error into a reportable [`Error`], pointing at the given region of the
    /// source code.
    pub fn into_error(self, span: Range<usize>) -> Error {
        match self {
            Self::UnknownVariable(kind) => Error::new(vec![span], kind),
            Self::UnknownFunction(kind) => Error::new(vec![span], kind),
            Self::WrongArgumentCount(kind) => Error::new(vec![span], kind),
        }
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVariable(UnknownVariable { name, .. }) => {
                write!(f, "unknown variable: `{}`", name)
            },
            Self::UnknownFunction(UnknownFunction { name, .. }) => {
                write!(f, "unknown function: `{}`", name)
            },
            Self::WrongArgumentCount(WrongArgumentCount { name, expected, given }) => {
                write!(f, "the `{}` function takes {}, but {} were given", name, expected, given)
            },
        }
    }
}

impl std::error::Error for CompileError {}

impl From<UnknownVariable> for CompileError {
    fn from(err: UnknownVariable) -> Self {
        Self::UnknownVariable(err)
    }
}

impl From<UnknownFunction> for CompileError {
    fn from(err: UnknownFunction) -> Self {
        Self::UnknownFunction(err)
    }
}

impl From<WrongArgumentCount> for CompileError {
    fn from(err: WrongArgumentCount) -> Self {
        Self::WrongArgumentCount(err)
    }
}
