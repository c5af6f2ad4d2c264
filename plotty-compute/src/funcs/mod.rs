//! All builtin functions that compiled expressions can call.
//!
//! Each function is a unit `struct` implementing [`Builtin`]. The registry built by [`all`] is
//! constructed once and shared for the lifetime of the program, so compiled programs can hold
//! `&'static dyn Builtin` references to the functions they call.
//!
//! # Example
//!
//! ```
//! use plotty_compute::funcs;
//! use plotty_compute::numerical::value::Value;
//!
//! let sin = funcs::get("sin").unwrap();
//! assert_eq!(sin.eval(vec![Value::Scalar(0.0)]), Ok(Value::Scalar(0.0)));
//! ```

pub mod elementary;
pub mod special;

use crate::numerical::builtin::Builtin;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Returns a map of every builtin function, keyed by name.
pub fn all() -> HashMap<&'static str, &'static dyn Builtin> {
    use elementary::*;
    use special::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, &$upname as &'static dyn Builtin),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
        "asin" Asin,
        "acos" Acos,
        "atan" Atan,
        "arcsin" Arcsin,
        "arccos" Arccos,
        "arctan" Arctan,
        "sinh" Sinh,
        "cosh" Cosh,
        "tanh" Tanh,
        "asinh" Asinh,
        "acosh" Acosh,
        "atanh" Atanh,
        "exp" Exp,
        "log" Log,
        "ln" Ln,
        "sqrt" Sqrt,
        "abs" Abs,
        "sign" Sign,
        "floor" Floor,
        "ceil" Ceil,
        "rect" Rect,
        "zero" Zero,
        "zeros" Zeros,
    }
}

static REGISTRY: Lazy<HashMap<&'static str, &'static dyn Builtin>> = Lazy::new(all);

/// Returns the builtin function with the given name.
pub fn get(name: &str) -> Option<&'static dyn Builtin> {
    REGISTRY.get(name).copied()
}

/// Returns the names of every builtin function.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_match() {
        for (name, builtin) in all() {
            assert_eq!(name, builtin.name());
        }
    }

    #[test]
    fn unknown_function() {
        assert!(get("frobnicate").is_none());
        assert!(get("arcsin").is_some());
    }
}
