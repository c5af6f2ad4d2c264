//! Symbolic differentiation.
//!
//! [`derivative`] applies the sum, product, power, and chain rules recursively, then returns the
//! canonical form of the result. Sub-expressions that do not depend on the variable of
//! differentiation are treated as constants, so functions that cannot be differentiated, such as
//! `floor`, only produce an error when their argument depends on the variable.

mod function;

use crate::symbolic::{expr::{Expr, Primary}, simplify::simplify};
use log::debug;
use std::fmt;

/// Returns `true` if the given [`Expr`] is "clearly" zero. This is intended to clean up trees
/// while differentiating and is not mathematically rigorous.
fn is_trivially_zero(e: &Expr) -> bool {
    match e {
        Expr::Primary(Primary::Float(f)) => f.is_zero(),
        Expr::Primary(Primary::Integer(i)) => i.is_zero(),
        Expr::Add(terms) => terms.iter().all(is_trivially_zero),
        Expr::Mul(factors) => factors.iter().any(is_trivially_zero),
        _ => false,
    }
}

/// Returns `true` if the given [`Expr`] is "clearly" one. This is intended to clean up trees
/// while differentiating and is not mathematically rigorous.
fn is_trivially_unity(e: &Expr) -> bool {
    match e {
        Expr::Primary(Primary::Integer(i)) => *i == 1,
        Expr::Mul(factors) => factors.iter().all(is_trivially_unity),
        Expr::Exp(_, exp) => exp.as_integer().is_some_and(|n| n.is_zero()),
        _ => false,
    }
}

/// Helper struct to build a product of expressions while applying basic simplification rules. If
/// any of the expressions are zero, the product is reduced to zero.
#[derive(Default)]
struct MultBuilder(Vec<Expr>);

impl From<MultBuilder> for Expr {
    fn from(value: MultBuilder) -> Self {
        Expr::Mul(value.0).downgrade()
    }
}

impl MultBuilder {
    fn mult(&mut self, e: Expr) {
        if is_trivially_zero(&e) || self.0.first().is_some_and(is_trivially_zero) {
            self.0 = vec![Expr::int(0)];
            return;
        }

        match e {
            Expr::Mul(factors) => self.0.extend(factors),
            e if !is_trivially_unity(&e) => self.0.push(e),
            _ => {},
        }
    }
}

/// Helper struct to build a summation of expressions while applying basic simplification rules.
/// Only non-zero expressions are added to the sum.
#[derive(Default)]
struct SumBuilder(Vec<Expr>);

impl From<SumBuilder> for Expr {
    fn from(value: SumBuilder) -> Self {
        Expr::Add(value.0).downgrade()
    }
}

impl SumBuilder {
    fn add(&mut self, e: Expr) {
        if !is_trivially_zero(&e) {
            self.0.push(e)
        }
    }
}

/// `(f + g)' = f' + g'`
fn sum_rule(terms: &[Expr], with: &str) -> Result<Expr, SymbolicDerivativeError> {
    let mut sum = SumBuilder::default();
    for term in terms {
        sum.add(derivative_unsimplified(term, with)?);
    }
    Ok(sum.into())
}

/// `(f * g * h)' = f' * g * h + f * g' * h + f * g * h'`
///
/// Factors that do not depend on the variable have a zero derivative, so their term is skipped.
fn product_rule(product: &[Expr], with: &str) -> Result<Expr, SymbolicDerivativeError> {
    let mut outer_sum = SumBuilder::default();

    for derivative_index in 0..product.len() {
        if !product[derivative_index].contains_symbol(with) {
            continue;
        }

        let mut inner_mult = MultBuilder::default();
        for (term_index, term) in product.iter().enumerate() {
            if derivative_index == term_index {
                inner_mult.mult(derivative_unsimplified(term, with)?);
            } else {
                inner_mult.mult(term.clone());
            }
        }

        outer_sum.add(inner_mult.into());
    }

    Ok(outer_sum.into())
}

/// `(f^g)'`, with special cases for a constant exponent or a constant base.
fn power_rule(base: &Expr, exp: &Expr, with: &str) -> Result<Expr, SymbolicDerivativeError> {
    let mut mult_group = MultBuilder::default();

    match (base.contains_symbol(with), exp.contains_symbol(with)) {
        // (f^n)' = n * f^(n-1) * f'
        (_, false) => {
            mult_group.mult(exp.clone());
            mult_group.mult(base.clone().pow(exp.clone() + Expr::int(-1)));
            mult_group.mult(derivative_unsimplified(base, with)?);
        },
        // (c^g)' = g' * c^g * log(c)
        (false, true) => {
            mult_group.mult(derivative_unsimplified(exp, with)?);
            mult_group.mult(base.clone().pow(exp.clone()));
            if base.as_symbol() != Some("E") {
                mult_group.mult(Expr::call("log", vec![base.clone()]));
            }
        },
        // (f^g)' = f^g * (g' * log(f) + g * f' / f)
        (true, true) => {
            let mut sum = SumBuilder::default();

            let mut log_term = MultBuilder::default();
            log_term.mult(derivative_unsimplified(exp, with)?);
            log_term.mult(Expr::call("log", vec![base.clone()]));
            sum.add(log_term.into());

            let mut ratio_term = MultBuilder::default();
            ratio_term.mult(exp.clone());
            ratio_term.mult(derivative_unsimplified(base, with)?);
            ratio_term.mult(base.clone().recip());
            sum.add(ratio_term.into());

            mult_group.mult(base.clone().pow(exp.clone()));
            mult_group.mult(sum.into());
        },
    }

    Ok(mult_group.into())
}

/// An error that can occur while computing a derivative.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolicDerivativeError {
    /// The function may be differentiable, but we do not support symbolically computing it yet.
    Unsupported {
        /// The name of the function.
        function: String,
    },

    /// The provided sub-expression is not differentiable.
    Undifferentiable(Expr),
}

impl fmt::Display for SymbolicDerivativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { function } => {
                write!(f, "cannot differentiate the function `{}`", function)
            },
            Self::Undifferentiable(expr) => write!(f, "`{}` is not differentiable", expr),
        }
    }
}

impl std::error::Error for SymbolicDerivativeError {}

/// Computes the derivative without simplifying the result.
fn derivative_unsimplified(f: &Expr, with: &str) -> Result<Expr, SymbolicDerivativeError> {
    if !f.contains_symbol(with) {
        return Ok(Expr::int(0));
    }

    let expr = match f {
        Expr::Primary(Primary::Integer(_) | Primary::Float(_)) => Expr::int(0),
        Expr::Primary(Primary::Symbol(sym)) => {
            if sym == with {
                Expr::int(1)
            } else {
                Expr::int(0)
            }
        },
        Expr::Primary(Primary::Call(func, args)) => function::function_derivative(func, args, with)?,
        Expr::Add(terms) => sum_rule(terms, with)?,
        Expr::Mul(factors) => product_rule(factors, with)?,
        Expr::Exp(base, exp) => power_rule(base, exp, with)?,
        Expr::Piecewise { value, guard, otherwise } => {
            if guard.contains_symbol(with) {
                return Err(SymbolicDerivativeError::Undifferentiable(f.clone()));
            }
            Expr::piecewise(
                derivative_unsimplified(value, with)?,
                (**guard).clone(),
                derivative_unsimplified(otherwise, with)?,
            )
        },
    };

    if is_trivially_zero(&expr) {
        Ok(Expr::int(0))
    } else {
        Ok(expr)
    }
}

/// Computes the derivative of the given expression with respect to the symbol `with`, and
/// returns it in canonical form. Returns [`Err`] if the derivative could not be symbolically
/// computed.
pub fn derivative(f: &Expr, with: &str) -> Result<Expr, SymbolicDerivativeError> {
    let f = simplify(f);
    let d = simplify(&derivative_unsimplified(&f, with)?);
    debug!("d/d{} `{}` = `{}`", with, f, d);
    Ok(d)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn d(input: &str) -> String {
        derivative(&parse(input).unwrap(), "x").unwrap().to_string()
    }

    #[test]
    fn power_rule() {
        assert_eq!(d("x^2 + x + 1"), "2*x + 1");
        assert_eq!(d("3x^4"), "12*x^3");
        assert_eq!(d("1/x"), "-1/x^2");
    }

    #[test]
    fn chain_rule() {
        assert_eq!(d("a*sin(k*x) + d"), "a*k*cos(k*x)");
        assert_eq!(d("cos(x)"), "-sin(x)");
        assert_eq!(d("exp(-x*k1)"), "-k1*exp(-x*k1)");
        assert_eq!(d("log(x)"), "1/x");
    }

    #[test]
    fn exponential_rule() {
        assert_eq!(d("a^x"), "a^x*log(a)");
        assert_eq!(d("E^x"), "E^x");
    }

    #[test]
    fn general_power() {
        // (x^x)' = x^x * (log(x) + 1)
        assert_eq!(d("x^x"), "x^x*(log(x) + 1)");
    }

    #[test]
    fn constants_and_special_forms() {
        assert_eq!(d("floor(a) + pi"), "0");
        assert_eq!(d("rect(x)"), "0");
        assert_eq!(d("zeros(x, a)"), "0");
    }

    #[test]
    fn piecewise() {
        let expr = Expr::piecewise(parse("x^2").unwrap(), Expr::symbol("k"), Expr::symbol("x"));
        let result = derivative(&expr, "x").unwrap();
        assert_eq!(
            result,
            Expr::piecewise(
                Expr::Mul(vec![Expr::int(2), Expr::symbol("x")]),
                Expr::symbol("k"),
                Expr::int(1),
            ),
        );
    }

    #[test]
    fn unsupported_function() {
        assert_eq!(
            derivative(&parse("gamma(x)").unwrap(), "x"),
            Err(SymbolicDerivativeError::Unsupported { function: "gamma".to_string() }),
        );
        // constant with respect to `x`, so it is never differentiated
        assert_eq!(derivative(&parse("gamma(a)").unwrap(), "x"), Ok(Expr::int(0)));
    }
}
