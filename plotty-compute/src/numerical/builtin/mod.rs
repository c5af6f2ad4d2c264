pub mod error;

use error::{BuiltinError, Domain, WrongArgumentCount};
use std::fmt;
use super::value::Value;

/// The number of arguments a builtin function accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),

    /// At least this many arguments.
    AtLeast(usize),
}

impl Arity {
    /// Returns true if the given number of arguments is acceptable.
    pub fn accepts(&self, given: usize) -> bool {
        match self {
            Arity::Exact(n) => given == *n,
            Arity::AtLeast(n) => given >= *n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(1) => write!(f, "1 argument"),
            Arity::Exact(n) => write!(f, "{} arguments", n),
            Arity::AtLeast(1) => write!(f, "at least 1 argument"),
            Arity::AtLeast(n) => write!(f, "at least {} arguments", n),
        }
    }
}

/// A trait implemented by all builtin functions.
pub trait Builtin: fmt::Debug + Send + Sync {
    /// Returns the name of the function.
    // NOTE: this is a `&self` method and not an associated constant to make the trait object-safe
    fn name(&self) -> &'static str;

    /// The number of arguments the function accepts.
    fn arity(&self) -> Arity;

    /// Evaluates the function.
    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError>;

    /// Checks that the function can be called with `given` arguments.
    fn check_arity(&self, given: usize) -> Result<(), BuiltinError> {
        if self.arity().accepts(given) {
            Ok(())
        } else {
            Err(BuiltinError::WrongArgumentCount(WrongArgumentCount {
                name: self.name(),
                expected: self.arity(),
                given,
            }))
        }
    }
}

impl Builtin for &'static dyn Builtin {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn arity(&self) -> Arity {
        (**self).arity()
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        (**self).eval(args)
    }
}

/// Applies a real function to a single argument.
///
/// Scalars are evaluated strictly: a finite input that produces a non-finite output is a
/// [`Domain`] error. Arrays follow IEEE semantics, so `NaN` and infinities pass through.
pub fn apply_unary(name: &'static str, arg: Value, f: impl Fn(f64) -> f64) -> Result<Value, BuiltinError> {
    match arg {
        Value::Scalar(n) => {
            let out = f(n);
            if n.is_finite() && !out.is_finite() {
                Err(BuiltinError::Domain(Domain { name, input: n }))
            } else {
                Ok(Value::Scalar(out))
            }
        },
        array => Ok(array.map(f)),
    }
}
