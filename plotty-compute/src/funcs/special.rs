//! Special forms used by the preset functions and by hand-drawn plots.

use crate::numerical::{
    builtin::{error::BuiltinError, Arity, Builtin},
    value::Value,
};

/// The rectangle function: `1` where `x^2 <= 1`, and `0` everywhere else.
#[derive(Debug)]
pub struct Rect;

impl Rect {
    pub fn eval_static(n: f64) -> f64 {
        if n * n <= 1.0 { 1.0 } else { 0.0 }
    }
}

impl Builtin for Rect {
    fn name(&self) -> &'static str {
        "rect"
    }

    fn arity(&self) -> Arity {
        Arity::Exact(1)
    }

    fn eval(&self, mut args: Vec<Value>) -> Result<Value, BuiltinError> {
        self.check_arity(args.len())?;
        Ok(args.remove(0).map(Self::eval_static))
    }
}

/// Build a function that ignores its arguments and evaluates to the scalar `0`.
macro_rules! build_zero {
    ($($name:literal $upname:ident),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl Builtin for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn arity(&self) -> Arity {
                    Arity::AtLeast(1)
                }

                fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
                    self.check_arity(args.len())?;
                    Ok(Value::Scalar(0.0))
                }
            }
        )*
    };
}

build_zero! {
    "zero" Zero,
    "zeros" Zeros,
}
