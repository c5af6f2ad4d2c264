//! Linear arguments `a*x + b` and the guards needed when dividing by their coefficient.

use crate::consts;
use crate::symbolic::{expr::Expr, simplify::{fraction::Number, simplify}};

/// If the expression is linear in the variable `with`, returns the coefficient `a` and the offset
/// `b` such that the expression is `a*with + b`. Both are returned in canonical form.
///
/// Returns [`None`] for expressions that do not depend on the variable at all.
pub fn as_linear(expr: &Expr, with: &str) -> Option<(Expr, Expr)> {
    match expr {
        Expr::Primary(_) if expr.as_symbol() == Some(with) => Some((Expr::int(1), Expr::int(0))),
        Expr::Mul(factors) => {
            let var_index = factors.iter().position(|f| f.as_symbol() == Some(with))?;
            let mut rest = Vec::with_capacity(factors.len() - 1);
            for (i, factor) in factors.iter().enumerate() {
                if i == var_index {
                    continue;
                }
                if factor.contains_symbol(with) {
                    return None;
                }
                rest.push(factor.clone());
            }
            Some((Expr::Mul(rest).downgrade(), Expr::int(0)))
        },
        Expr::Add(terms) => {
            let mut slope = Vec::new();
            let mut offset = Vec::new();
            for term in terms {
                if !term.contains_symbol(with) {
                    offset.push(term.clone());
                    continue;
                }

                let (a, b) = as_linear(term, with)?;
                slope.push(a);
                if !b.is_zero() {
                    offset.push(b);
                }
            }

            if slope.is_empty() {
                return None;
            }

            Some((
                simplify(&Expr::Add(slope).downgrade()),
                simplify(&Expr::Add(offset).downgrade()),
            ))
        },
        _ => None,
    }
}

/// Returns true if the factor is a nonzero number or a builtin constant.
fn is_known_nonzero(factor: &Expr) -> bool {
    Number::from_expr(factor).is_some_and(|n| !n.is_zero())
        || factor.as_symbol().is_some_and(consts::is_constant)
}

/// Returns the expression that must be nonzero for `a` to be nonzero, or [`None`] if `a` is
/// nonzero regardless of the values of its symbols.
///
/// Numeric factors and the constants `pi` and `E` never affect whether a product is zero, so they
/// are removed: the guard of `2*pi*k` is `k`.
pub fn nonzero_guard(a: &Expr) -> Option<Expr> {
    match a {
        Expr::Mul(factors) => {
            let rest = factors.iter()
                .filter(|f| !is_known_nonzero(f))
                .cloned()
                .collect::<Vec<_>>();
            if rest.is_empty() {
                None
            } else {
                Some(Expr::Mul(rest).downgrade())
            }
        },
        a if is_known_nonzero(a) => None,
        a => Some(a.clone()),
    }
}

/// Divides the antiderivative `F(u)` of `f(u)` by the coefficient `a` of the linear argument
/// `u = a*x + b`.
///
/// If `a` could be zero, the result is a piecewise expression whose otherwise-branch is the
/// integral of the constant integrand `f(b)`, given as `degenerate`.
pub fn over_linear_coefficient(antiderivative: Expr, a: &Expr, degenerate: Expr, with: &str) -> Expr {
    let value = if a.is_one() {
        antiderivative
    } else {
        antiderivative * a.clone().recip()
    };

    match nonzero_guard(a) {
        Some(guard) => Expr::piecewise(value, guard, degenerate * Expr::symbol(with)),
        None => value,
    }
}
