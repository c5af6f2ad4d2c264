//! Simplification rules for piecewise expressions.

use crate::symbolic::{
    expr::Expr,
    simplify::{fraction::Number, step::Step},
    step_collector::StepCollector,
};

/// Selects a branch when the guard is a number, or collapses a piecewise expression whose
/// branches are equal.
pub fn select_branch(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::Piecewise { value, guard, otherwise } = expr else {
        return None;
    };

    let selected = match Number::from_expr(guard) {
        Some(n) if n.is_zero() => otherwise,
        Some(_) => value,
        None if value == otherwise => value,
        None => return None,
    };

    step_collector.push(Step::Piecewise);
    Some((**selected).clone())
}

/// Applies all piecewise rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    select_branch(expr, step_collector)
}
