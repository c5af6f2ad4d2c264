//! Elementary functions of one real argument: trigonometric, hyperbolic, exponential, and
//! rounding functions.

use crate::numerical::{
    builtin::{apply_unary, error::BuiltinError, Arity, Builtin},
    value::Value,
};

/// Build a builtin function that applies a real function to its single argument.
macro_rules! build_unary {
    ($($name:literal $upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    // NOTE: the closure call is contained within the macro, so we allow
                    // the clippy::redundant_closure_call lint
                    #[allow(clippy::redundant_closure_call)]
                    ($func)(n)
                }
            }

            impl Builtin for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn arity(&self) -> Arity {
                    Arity::Exact(1)
                }

                fn eval(&self, mut args: Vec<Value>) -> Result<Value, BuiltinError> {
                    self.check_arity(args.len())?;
                    let arg = args.remove(0);
                    apply_unary($name, arg, Self::eval_static)
                }
            }
        )*
    };
}

build_unary! {
    "sin" Sin; f64::sin,
    "cos" Cos; f64::cos,
    "tan" Tan; f64::tan,
    "asin" Asin; f64::asin,
    "acos" Acos; f64::acos,
    "atan" Atan; f64::atan,
    "arcsin" Arcsin; f64::asin,
    "arccos" Arccos; f64::acos,
    "arctan" Arctan; f64::atan,
}

build_unary! {
    "sinh" Sinh; f64::sinh,
    "cosh" Cosh; f64::cosh,
    "tanh" Tanh; f64::tanh,
    "asinh" Asinh; f64::asinh,
    "acosh" Acosh; f64::acosh,
    "atanh" Atanh; f64::atanh,
}

build_unary! {
    "exp" Exp; f64::exp,
    "log" Log; f64::ln,
    "ln" Ln; f64::ln,
    "sqrt" Sqrt; f64::sqrt,
}

build_unary! {
    "abs" Abs; f64::abs,
    // unlike `f64::signum`, the sign of zero is zero
    "sign" Sign; |n: f64| if n > 0.0 { 1.0 } else if n < 0.0 { -1.0 } else { n },
    "floor" Floor; f64::floor,
    "ceil" Ceil; f64::ceil,
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use crate::numerical::builtin::error::{Domain, WrongArgumentCount};
    use super::*;

    #[test]
    fn scalar_values() {
        let Value::Scalar(n) = Cos.eval(vec![Value::Scalar(0.0)]).unwrap() else {
            panic!("expected scalar");
        };
        assert_float_absolute_eq!(n, 1.0);
        assert_eq!(Sign.eval(vec![Value::Scalar(0.0)]), Ok(Value::Scalar(0.0)));
        assert_eq!(Sign.eval(vec![Value::Scalar(-3.0)]), Ok(Value::Scalar(-1.0)));
    }

    #[test]
    fn scalar_domain_error() {
        assert_eq!(
            Sqrt.eval(vec![Value::Scalar(-1.0)]),
            Err(BuiltinError::Domain(Domain { name: "sqrt", input: -1.0 })),
        );
        assert_eq!(
            Log.eval(vec![Value::Scalar(0.0)]),
            Err(BuiltinError::Domain(Domain { name: "log", input: 0.0 })),
        );
    }

    #[test]
    fn array_is_lenient() {
        let Value::Array(out) = Sqrt.eval(vec![Value::Array(vec![4.0, -1.0])]).unwrap() else {
            panic!("expected array");
        };
        assert_float_absolute_eq!(out[0], 2.0);
        assert!(out[1].is_nan());
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(
            Sin.eval(vec![]),
            Err(BuiltinError::WrongArgumentCount(WrongArgumentCount {
                name: "sin",
                expected: Arity::Exact(1),
                given: 0,
            })),
        );
    }
}
