//! Symbolic integration.
//!
//! [`integral`] finds an antiderivative of an expression for a useful subset of the functions
//! the engine can evaluate: polynomials, elementary functions of a linear argument, and powers of
//! the variable multiplied by `sin`, `cos`, `exp`, `sinh`, or `cosh` of a linear argument.
//!
//! When the result would divide by a symbolic quantity, such as the coefficient `k` in
//! `∫ sin(k*x) dx`, the result is an [`Expr::Piecewise`] whose otherwise-branch is the
//! antiderivative for the case where that quantity is zero:
//!
//! ```
//! use plotty_compute::symbolic::{integral, parse};
//!
//! let expr = parse("a*sin(k*x) + d").unwrap();
//! assert_eq!(
//!     integral(&expr, "x").unwrap().to_string(),
//!     "a*Piecewise((-cos(k*x)/k, Ne(k, 0)), (0, True)) + d*x",
//! );
//! ```

mod linear;
mod parts;
mod table;

use crate::consts;
use crate::symbolic::{expr::{Expr, Primary}, simplify::{fraction::Number, simplify}};
use linear::{as_linear, nonzero_guard, over_linear_coefficient};
use log::debug;
use std::fmt;

/// An error that can occur while computing an integral.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicIntegralError {
    /// No antiderivative of the given sub-expression could be found.
    Unsupported(Expr),
}

impl fmt::Display for SymbolicIntegralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(expr) => write!(f, "cannot find an antiderivative of `{}`", expr),
        }
    }
}

impl std::error::Error for SymbolicIntegralError {}

/// `∫ u^n dx` and `∫ c^u dx`.
fn integrate_power(
    f: &Expr,
    base: &Expr,
    exp: &Expr,
    with: &str,
) -> Result<Expr, SymbolicIntegralError> {
    let unsupported = || SymbolicIntegralError::Unsupported(f.clone());

    match (base.contains_symbol(with), exp.contains_symbol(with)) {
        (true, false) => {
            let (a, b) = as_linear(base, with).ok_or_else(unsupported)?;
            let n_plus_1 = simplify(&(exp.clone() + Expr::int(1)));
            let log = Expr::call("log", vec![base.clone()]);
            let raised = base.clone().pow(n_plus_1.clone()) * n_plus_1.clone().recip();

            let big_f = match Number::from_expr(&n_plus_1) {
                Some(n) if n.is_zero() => log,
                Some(_) => raised,
                None => match nonzero_guard(&n_plus_1) {
                    Some(guard) => Expr::piecewise(raised, guard, log),
                    None => raised,
                },
            };
            Ok(over_linear_coefficient(big_f, &a, b.pow(exp.clone()), with))
        },
        (false, true) => {
            let (a, b) = as_linear(exp, with).ok_or_else(unsupported)?;
            let big_f = if base.as_symbol() == Some("E") {
                f.clone()
            } else {
                let log = Expr::call("log", vec![base.clone()]);
                let value = f.clone() * log.clone().recip();
                if base.is_zero() || base.strip_negation().is_some() {
                    return Err(unsupported());
                } else if Number::from_expr(base).is_some()
                    || base.as_symbol().is_some_and(consts::is_constant)
                {
                    value
                } else {
                    // `c^u = 1` where `log(c) = 0`
                    Expr::piecewise(value, log, exp.clone())
                }
            };
            Ok(over_linear_coefficient(big_f, &a, base.clone().pow(b), with))
        },
        _ => Err(unsupported()),
    }
}

/// `∫ f(u) dx` for a builtin function `f`.
fn integrate_call(
    f: &Expr,
    name: &str,
    args: &[Expr],
    with: &str,
) -> Result<Expr, SymbolicIntegralError> {
    if name == "zero" || name == "zeros" {
        return Ok(Expr::int(0));
    }

    let unsupported = || SymbolicIntegralError::Unsupported(f.clone());
    let [u] = args else {
        return Err(unsupported());
    };
    let (a, b) = as_linear(u, with).ok_or_else(unsupported)?;
    let big_f = table::antiderivative(name, u).ok_or_else(unsupported)?;
    Ok(over_linear_coefficient(big_f, &a, Expr::call(name, vec![b]), with))
}

/// Computes an antiderivative without simplifying the result.
fn integrate(f: &Expr, with: &str) -> Result<Expr, SymbolicIntegralError> {
    if !f.contains_symbol(with) {
        return Ok(f.clone() * Expr::symbol(with));
    }

    match f {
        Expr::Primary(Primary::Call(name, args)) => integrate_call(f, name, args, with),

        // the only primary left is the variable itself
        Expr::Primary(_) => Ok(Expr::Mul(vec![
            Expr::int(2).recip(),
            Expr::symbol(with).pow(Expr::int(2)),
        ])),
        Expr::Add(terms) => Ok(Expr::Add(
            terms.iter()
                .map(|term| integrate(term, with))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        Expr::Mul(factors) => {
            let (constant, variable): (Vec<_>, Vec<_>) = factors.iter()
                .cloned()
                .partition(|factor| !factor.contains_symbol(with));

            let result = match variable.as_slice() {
                [single] => integrate(single, with)?,
                _ => parts::integrate_by_parts(&variable, with)
                    .ok_or_else(|| SymbolicIntegralError::Unsupported(f.clone()))?,
            };

            if constant.is_empty() {
                Ok(result)
            } else {
                Ok(Expr::Mul(constant) * result)
            }
        },
        Expr::Exp(base, exp) => integrate_power(f, base, exp, with),
        Expr::Piecewise { value, guard, otherwise } => {
            if guard.contains_symbol(with) {
                return Err(SymbolicIntegralError::Unsupported(f.clone()));
            }
            Ok(Expr::piecewise(
                integrate(value, with)?,
                (**guard).clone(),
                integrate(otherwise, with)?,
            ))
        },
    }
}

/// Computes an antiderivative of the given expression with respect to the symbol `with`, and
/// returns it in canonical form. The constant of integration is always zero.
///
/// Returns [`Err`] if no antiderivative could be found.
pub fn integral(f: &Expr, with: &str) -> Result<Expr, SymbolicIntegralError> {
    let f = simplify(f);
    let big_f = simplify(&integrate(&f, with)?);
    debug!("integral of `{}` d{} = `{}`", f, with, big_f);
    Ok(big_f)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{derivative, parse};
    use pretty_assertions::assert_eq;
    use super::*;

    fn i(input: &str) -> String {
        integral(&parse(input).unwrap(), "x").unwrap().to_string()
    }

    /// Checks that differentiating the integral gives back the integrand.
    fn assert_antiderivative(input: &str) {
        let f = parse(input).unwrap();
        let big_f = integral(&f, "x").unwrap();
        let difference = derivative(&big_f, "x").unwrap() + -f;
        assert_eq!(simplify(&difference), Expr::int(0), "∫ {} dx = {}", input, big_f);
    }

    #[test]
    fn polynomials() {
        assert_eq!(i("3"), "3*x");
        assert_eq!(i("x"), "x^2/2");
        assert_eq!(i("x^2"), "x^3/3");
        assert_eq!(i("x^2 + 2x + 1"), "x^3/3 + x^2 + x");
        assert_eq!(i("1/x"), "log(x)");
    }

    #[test]
    fn linear_arguments() {
        assert_eq!(i("cos(2x)"), "sin(2*x)/2");
        assert_eq!(i("exp(-x)"), "-exp(-x)");
        assert_eq!(i("2^x"), "2^x/log(2)");
    }

    #[test]
    fn symbolic_coefficients() {
        assert_eq!(i("sin(k*x)"), "Piecewise((-cos(k*x)/k, Ne(k, 0)), (0, True))");
        assert_eq!(i("a*sin(k*x) + d"), "a*Piecewise((-cos(k*x)/k, Ne(k, 0)), (0, True)) + d*x");
        assert_eq!(i("a**x"), "Piecewise((a^x/log(a), Ne(log(a), 0)), (x, True))");
        assert_eq!(i("x^n"), "Piecewise((x^(n + 1)/(n + 1), Ne(n + 1, 0)), (log(x), True))");
    }

    #[test]
    fn zero_functions() {
        assert_eq!(i("zero(x) + zeros(x, 2)"), "0");
    }

    #[test]
    fn by_parts() {
        assert_eq!(i("x*exp(x)"), "x*exp(x) - exp(x)");
        assert_antiderivative("x*exp(x)");
        assert_antiderivative("x*sin(x)");
    }

    #[test]
    fn table_functions() {
        assert_antiderivative("sin(x)");
        assert_antiderivative("cosh(x) + 4");
        assert_antiderivative("log(x)");
    }

    #[test]
    fn piecewise() {
        let expr = Expr::piecewise(Expr::symbol("x"), Expr::symbol("k"), Expr::int(1));
        assert_eq!(
            integral(&expr, "x").unwrap().to_string(),
            "Piecewise((x^2/2, Ne(k, 0)), (x, True))",
        );
    }

    #[test]
    fn unsupported() {
        for input in ["exp(x^2)", "x^x", "sin(x)*cos(x)", "gamma(x)"] {
            let f = simplify(&parse(input).unwrap());
            assert_eq!(integral(&f, "x"), Err(SymbolicIntegralError::Unsupported(f.clone())));
        }
    }
}
