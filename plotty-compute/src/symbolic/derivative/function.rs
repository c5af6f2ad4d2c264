//! Derivatives of builtin functions.

use crate::symbolic::expr::Expr;
use super::{derivative_unsimplified, MultBuilder, SymbolicDerivativeError};

/// Returns `1 - u^2`.
fn one_minus_square(u: &Expr) -> Expr {
    Expr::int(1) + -u.clone().pow(Expr::int(2))
}

/// Returns `u^2 + c`.
fn square_plus(u: &Expr, c: i32) -> Expr {
    u.clone().pow(Expr::int(2)) + Expr::int(c)
}

/// Returns `u^(-1/2)`.
fn inverse_sqrt(u: Expr) -> Expr {
    u.pow(Expr::Mul(vec![Expr::int(-1), Expr::int(2).recip()]))
}

/// Returns the derivative of the single-argument function `name` with respect to its argument,
/// evaluated at `u`. Returns [`None`] if the function's derivative is not known.
fn outer_derivative(name: &str, u: &Expr) -> Option<Expr> {
    let call = |name: &str| Expr::call(name, vec![u.clone()]);
    Some(match name {
        "sin" => call("cos"),
        "cos" => -call("sin"),
        "tan" => call("cos").pow(Expr::int(-2)),
        "exp" => call("exp"),
        "log" | "ln" => u.clone().recip(),
        "sqrt" => Expr::int(2).recip() * inverse_sqrt(u.clone()),
        "sinh" => call("cosh"),
        "cosh" => call("sinh"),
        "tanh" => call("cosh").pow(Expr::int(-2)),
        "asin" | "arcsin" => inverse_sqrt(one_minus_square(u)),
        "acos" | "arccos" => -inverse_sqrt(one_minus_square(u)),
        "atan" | "arctan" => square_plus(u, 1).recip(),
        "asinh" => inverse_sqrt(square_plus(u, 1)),
        "acosh" => inverse_sqrt(square_plus(u, -1)),
        "atanh" => one_minus_square(u).recip(),
        "abs" => call("sign"),

        // piecewise constant, so the derivative is zero wherever it exists
        "sign" | "floor" | "ceil" | "rect" => Expr::int(0),
        _ => return None,
    })
}

/// Computes the derivative of a function call using the chain rule, `(f(u))' = u' * f'(u)`.
pub(super) fn function_derivative(
    name: &str,
    args: &[Expr],
    with: &str,
) -> Result<Expr, SymbolicDerivativeError> {
    // `zero(...)` and `zeros(...)` are identically zero for any number of arguments
    if name == "zero" || name == "zeros" {
        return Ok(Expr::int(0));
    }

    let u = match args {
        [u] => u,
        _ => return match outer_derivative(name, &Expr::int(0)) {
            Some(_) => Err(SymbolicDerivativeError::Undifferentiable(
                Expr::call(name, args.to_vec()),
            )),
            None => Err(SymbolicDerivativeError::Unsupported { function: name.to_string() }),
        },
    };

    let outer = outer_derivative(name, u)
        .ok_or_else(|| SymbolicDerivativeError::Unsupported { function: name.to_string() })?;

    let mut mult = MultBuilder::default();
    mult.mult(derivative_unsimplified(u, with)?);
    mult.mult(outer);
    Ok(mult.into())
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{derivative, parse};
    use pretty_assertions::assert_eq;
    use super::*;

    fn d(input: &str) -> String {
        derivative(&parse(input).unwrap(), "x").unwrap().to_string()
    }

    #[test]
    fn trigonometric() {
        assert_eq!(d("sin(x)"), "cos(x)");
        assert_eq!(d("tan(x)"), "1/cos(x)^2");
        assert_eq!(d("sin(2x)"), "2*cos(2*x)");
    }

    #[test]
    fn hyperbolic() {
        assert_eq!(d("sinh(x)"), "cosh(x)");
        assert_eq!(d("cosh(x)"), "sinh(x)");
    }

    #[test]
    fn inverse_trigonometric() {
        assert_eq!(d("atan(x)"), "1/(x^2 + 1)");
        assert_eq!(d("arcsin(x)"), "1/sqrt(1 - x^2)");
    }

    #[test]
    fn roots_and_logs() {
        assert_eq!(d("sqrt(x)"), "1/(2*sqrt(x))");
        assert_eq!(d("ln(2x)"), "1/x");
        assert_eq!(d("abs(x)"), "sign(x)");
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(
            derivative(&parse("sin(x, 2)").unwrap(), "x"),
            Err(SymbolicDerivativeError::Undifferentiable(parse("sin(x, 2)").unwrap())),
        );
    }
}
