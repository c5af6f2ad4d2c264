//! Checks that a function can be evaluated before it replaces the active function.

use crate::function::SymbolicFunction;
use log::debug;
use plotty_vm::EvalError;

/// Returns true if the function can be evaluated at the single point `probe_x`, with the given
/// parameter values.
///
/// This is a smoke test, not a proof that the function is defined everywhere. Division by zero,
/// overflow, and calling the function with the wrong number of parameters all make the function
/// undefined at the probe.
///
/// A function that is only outside of its domain at the probe, such as `arcsin(x)` at `π`, still
/// counts as defined, since its plot is simply missing some points. To tell the two apart, the
/// function is also evaluated over a one-point grid, the way it is sampled for plotting: there,
/// anything computed from `x` follows IEEE rules, while anything computed from the parameters
/// alone, such as `log(p)` with `p = 0`, still fails.
pub fn is_defined_at(function: &SymbolicFunction, probe_x: f64, params: &[f64]) -> bool {
    match function.call(probe_x, params) {
        Ok(_) => (),
        Err(EvalError::Domain { function: name }) => {
            debug!("`{}` is outside the domain of `{}` at x = {}", function, name, probe_x);
        },
        Err(err) => {
            debug!("`{}` is not defined at x = {} with {:?}: {}", function, probe_x, params, err);
            return false;
        },
    }

    match function.call(vec![probe_x], params) {
        Ok(_) => true,
        Err(err) => {
            debug!("`{}` cannot be sampled with {:?}: {}", function, params, err);
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    fn function(source: &str) -> SymbolicFunction {
        SymbolicFunction::new(source, "x").unwrap()
    }

    #[test]
    fn defined() {
        assert!(is_defined_at(&function("a*sin(k*x) + c"), PI, &[1.0, 1.0, 0.0]));
        assert!(is_defined_at(&function("1/x"), PI, &[]));
    }

    #[test]
    fn division_by_parameter() {
        let f = function("1/p + x");
        assert!(!is_defined_at(&f, PI, &[0.0]));
        assert!(is_defined_at(&f, PI, &[2.0]));
    }

    #[test]
    fn wrong_parameter_count() {
        assert!(!is_defined_at(&function("a*x"), PI, &[]));
        assert!(!is_defined_at(&function("a*x"), PI, &[1.0, 2.0]));
    }

    #[test]
    fn outside_domain() {
        assert!(is_defined_at(&function("arcsin(x)"), PI, &[]));
        assert!(is_defined_at(&function("sqrt(-x)"), PI, &[]));
    }

    #[test]
    fn parameters_outside_domain() {
        let f = function("x + log(p)");
        assert!(!is_defined_at(&f, PI, &[0.0]));
        assert!(!is_defined_at(&f, PI, &[-1.0]));
        assert!(is_defined_at(&f, PI, &[1.0]));

        assert!(!is_defined_at(&function("arcsin(p) + x"), PI, &[2.0]));
    }

    #[test]
    fn overflow() {
        assert!(!is_defined_at(&function("x^100000"), PI, &[]));
    }
}
