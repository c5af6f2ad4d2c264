//! Integration by parts of `x^n * f(a*x + b)`, where `f` is a function whose repeated
//! antiderivatives cycle through the table in [`BY_PARTS`](super::table::BY_PARTS).

use crate::symbolic::expr::Expr;
use super::{linear::{as_linear, nonzero_guard}, table::by_parts_antiderivative};

/// The largest power of the variable that will be integrated by parts. Each power adds one term
/// to the result.
pub const MAX_DEGREE: u32 = 16;

/// If the expression is the variable raised to a positive integer power (including the variable
/// itself), returns the power.
fn power_of(expr: &Expr, with: &str) -> Option<u32> {
    if expr.as_symbol() == Some(with) {
        return Some(1);
    }

    let Expr::Exp(base, exp) = expr else {
        return None;
    };
    if base.as_symbol() != Some(with) {
        return None;
    }
    exp.as_integer()?
        .to_u32()
        .filter(|n| (1..=MAX_DEGREE).contains(n))
}

/// Divides by the coefficient of the linear argument, unless it is one.
fn over(expr: Expr, a: &Expr) -> Expr {
    if a.is_one() {
        expr
    } else {
        expr * a.clone().recip()
    }
}

/// `∫ x^n * f(u) dx = x^n * F(u) / a - n / a * ∫ x^(n-1) * F(u) dx`, applied until the power of
/// `x` is gone.
fn by_parts(n: u32, f: &str, u: &Expr, a: &Expr, with: &str) -> Option<Expr> {
    let (sign, g) = by_parts_antiderivative(f)?;
    let big_f = over(Expr::Mul(vec![Expr::int(sign), Expr::call(g, vec![u.clone()])]), a);
    if n == 0 {
        return Some(big_f);
    }

    let first = Expr::symbol(with).pow(Expr::int(n)) * big_f;
    let rest = over(Expr::Mul(vec![Expr::int(-(n as i32) * sign)]), a) * by_parts(n - 1, g, u, a, with)?;
    Some(first + rest)
}

/// Integrates the product of the given factors by parts, if the product is a power of `x` times
/// a supported function of a linear argument, in either order.
pub fn integrate_by_parts(factors: &[Expr], with: &str) -> Option<Expr> {
    let [first, second] = factors else {
        return None;
    };

    let (n, call) = match (power_of(first, with), power_of(second, with)) {
        (Some(n), None) => (n, second),
        (None, Some(n)) => (n, first),
        _ => return None,
    };

    let (f, args) = call.as_call()?;
    let [u] = args else {
        return None;
    };
    let (a, b) = as_linear(u, with)?;
    let value = by_parts(n, f, u, &a, with)?;

    match nonzero_guard(&a) {
        Some(guard) => {
            // `f(b) * x^(n+1) / (n+1)`
            let degenerate = Expr::Mul(vec![
                Expr::int(n + 1).recip(),
                Expr::call(f, vec![b]),
                Expr::symbol(with).pow(Expr::int(n + 1)),
            ]);
            Some(Expr::piecewise(value, guard, degenerate))
        },
        None => Some(value),
    }
}
