//! Module to simplify expressions into their canonical form.
//!
//! This module provides the [`simplify`] function, which rewrites an expression by repeatedly
//! applying rewriting rules to it in multiple passes, until no more rules apply. The result is the
//! canonical form of the expression: two expressions that only differ by the order of their terms,
//! unfolded numbers, uncombined like terms, or trivial identities have strictly equal canonical
//! forms.
//!
//! Rules never reorder terms or factors except to move a numeric coefficient to the front of a
//! product, so the free symbols of a canonical expression are found in the same order they were
//! written in.

pub mod fraction;
pub mod rules;
pub mod step;

use crate::symbolic::{expr::{Expr, Primary}, step_collector::StepCollector};
use step::Step;

/// Simplifies each expression in the list in place, returning true if any of them changed.
fn simplify_all(exprs: &mut [Expr], step_collector: &mut dyn StepCollector<Step>) -> bool {
    let mut changed = false;
    for expr in exprs.iter_mut() {
        let (new_expr, result) = inner_simplify_with(expr, step_collector);
        *expr = new_expr;
        // use |= instead of = to not reset this variable to false if already true
        changed |= result;
    }
    changed
}

/// Simplifies a boxed expression in place, returning true if it changed.
fn simplify_boxed(expr: &mut Box<Expr>, step_collector: &mut dyn StepCollector<Step>) -> bool {
    let (new_expr, changed) = inner_simplify_with(expr, step_collector);
    **expr = new_expr;
    changed
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Expr, bool) {
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    loop {
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules::all(&expr, step_collector) {
            expr = new_expr;
            changed_in_this_pass = true;
        }

        // then begin recursing into the expression's children
        changed_in_this_pass |= match expr {
            Expr::Primary(Primary::Call(_, ref mut args)) => {
                simplify_all(args, step_collector)
            },
            Expr::Primary(_) => false,
            Expr::Add(ref mut terms) => simplify_all(terms, step_collector),
            Expr::Mul(ref mut factors) => simplify_all(factors, step_collector),
            Expr::Exp(ref mut lhs, ref mut rhs) => {
                let changed_l = simplify_boxed(lhs, step_collector);
                let changed_r = simplify_boxed(rhs, step_collector);
                changed_l || changed_r
            },
            Expr::Piecewise { ref mut value, ref mut guard, ref mut otherwise } => {
                let changed_v = simplify_boxed(value, step_collector);
                let changed_g = simplify_boxed(guard, step_collector);
                let changed_o = simplify_boxed(otherwise, step_collector);
                changed_v || changed_g || changed_o
            },
        };

        if !changed_in_this_pass {
            break;
        }
        changed_at_least_once = true;
    }

    (expr, changed_at_least_once)
}

/// Simplify the given expression into its canonical form.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify_with(expr, &mut ()).0
}

/// Simplify the given expression into its canonical form. The steps taken by the simplifier will
/// also be collected and returned. This is useful for debugging.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, &mut steps).0;
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use crate::symbolic::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn simplified(input: &str) -> Expr {
        simplify(&parse(input).unwrap())
    }

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn add_rules() {
        // also tests multiply_zero
        assert_eq!(simplified("0+0*(3x+5b^2)+0+(3a)"), Expr::Mul(vec![Expr::int(3), sym("a")]));
    }

    #[test]
    fn multiply_rules() {
        assert_eq!(simplified("0*(3x+5b^2)*1*(3a)"), Expr::int(0));
        assert_eq!(simplified("1*3*1*1*1*(1+(x^2+5x+6)*0)*1*1"), Expr::int(3));
    }

    #[test]
    fn combine_like_terms() {
        assert_eq!(simplified("2a + 3a"), Expr::Mul(vec![Expr::int(5), sym("a")]));
        assert_eq!(simplified("x*y - y*x"), Expr::int(0));
        assert_eq!(
            simplified("x + c + x"),
            Expr::Add(vec![Expr::Mul(vec![Expr::int(2), sym("x")]), sym("c")]),
        );
    }

    #[test]
    fn combine_like_factors() {
        assert_eq!(
            simplified("a * b * a^3 * c^2 * a^2 * b^4"),
            Expr::Mul(vec![
                sym("a").pow(Expr::int(6)),
                sym("b").pow(Expr::int(5)),
                sym("c").pow(Expr::int(2)),
            ]),
        );
        assert_eq!(simplified("x/x"), Expr::int(1));
        assert_eq!(simplified("sqrt(x)*sqrt(x)"), sym("x"));
    }

    #[test]
    fn fold_numbers() {
        assert_eq!(simplified("1/2 + 1/3"), Expr::Mul(vec![Expr::int(5), Expr::int(6).recip()]));
        assert_eq!(simplified("6/4"), Expr::Mul(vec![Expr::int(3), Expr::int(2).recip()]));
        assert_eq!(simplified("4/2"), Expr::int(2));
        assert_eq!(simplified("1/2").to_string(), "1/2");
        assert_eq!(simplified("2^-2"), Expr::int(4).recip());
        assert_eq!(simplified("1.5^2").as_float().map(|f| f.to_f64()), Some(2.25));
        assert_eq!(simplified("0.5 + 1/2").as_float().map(|f| f.to_f64()), Some(1.0));
        assert_eq!(simplified("x*2"), Expr::Mul(vec![Expr::int(2), sym("x")]));
    }

    #[test]
    fn constants_stay_symbolic() {
        assert_eq!(simplified("2*pi").to_string(), "2*pi");
        assert_eq!(simplified("E^0"), Expr::int(1));
    }

    #[test]
    fn distribute_numbers_only() {
        assert_eq!(simplified("2(x + 1)").to_string(), "2*x + 2");
        assert_eq!(simplified("-(x - phi)").to_string(), "-x + phi");
        assert_eq!(simplified("k*(x - phi)").to_string(), "k*(x - phi)");
    }

    #[test]
    fn power_rules() {
        assert_eq!(simplified("(1^0)^(3x+5b^2)^1^(3a)"), Expr::int(1));
        assert_eq!(simplified("(0^1)^0"), Expr::int(1));
        assert_eq!(simplified("(x^2)^3"), sym("x").pow(Expr::int(6)));
        assert_eq!(
            simplified("(2x)^2"),
            Expr::Mul(vec![Expr::int(4), sym("x").pow(Expr::int(2))]),
        );
        assert_eq!(simplified("0^-1"), Expr::int(0).recip());
    }

    #[test]
    fn special_values() {
        assert_eq!(simplified("sin(0) + cos(0) + exp(0) + log(1) + log(E)"), Expr::int(3));
        assert_eq!(simplified("sin(-x)").to_string(), "-sin(x)");
        assert_eq!(simplified("cos(-2x)").to_string(), "cos(2*x)");
        assert_eq!(simplified("sqrt(x)"), sym("x").sqrt());
    }

    #[test]
    fn piecewise() {
        let expr = Expr::piecewise(sym("a"), Expr::int(0), sym("b"));
        assert_eq!(simplify(&expr), sym("b"));
        let expr = Expr::piecewise(sym("a"), sym("k"), sym("a"));
        assert_eq!(simplify(&expr), sym("a"));
    }

    #[test]
    fn keeps_source_order() {
        let expr = simplified("a*sin(k*x) + c");
        assert_eq!(expr.free_symbols(), vec!["a", "k", "x", "c"]);
        assert_eq!(expr.to_string(), "a*sin(k*x) + c");
    }

    #[test]
    fn power_rule_steps() {
        let (expr, steps) = simplify_with_steps(&parse("(1^0)^x").unwrap());
        assert_eq!(expr, Expr::int(1));
        assert_eq!(steps, vec![Step::PowerZero, Step::PowerOneLeft]);
    }

    #[test]
    fn like_terms_steps() {
        let (expr, steps) = simplify_with_steps(&parse("x + x").unwrap());
        assert_eq!(expr, simplified("2*x"));
        assert!(steps.contains(&Step::CombineLikeTerms));
    }
}
