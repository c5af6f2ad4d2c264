//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use crate::symbolic::{
    expr::Expr,
    simplify::{fraction::Number, rules::do_multiply, step::Step},
    step_collector::StepCollector,
};

/// Returns true if both lists hold strictly equal expressions in the same order.
fn same_order(lhs: &[Expr], rhs: &[Expr]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| l == r)
}

/// `a*(b*c) = a*b*c`
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Expr::Mul(_))) {
            return None;
        }

        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                Expr::Mul(inner) => new_factors.extend(inner.iter().cloned()),
                factor => new_factors.push(factor.clone()),
            }
        }
        Some(Expr::Mul(new_factors))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Flatten);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(Expr::is_zero) {
            Some(Expr::int(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `2*3*a = 6a`
/// `a*2 = 2a`
/// `1*a = a`
///
/// All numeric factors are folded into one coefficient, which is placed first.
pub fn multiply_numbers(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut coefficient = Number::one();
        let mut rest = Vec::with_capacity(factors.len());
        for factor in factors {
            match Number::from_expr(factor) {
                Some(n) => coefficient = coefficient * n,
                None => rest.push(factor.clone()),
            }
        }

        if coefficient.is_zero() {
            return Some(Expr::int(0));
        }

        let mut new_factors = coefficient.into_factors();
        new_factors.extend(rest);
        if same_order(&new_factors, factors) {
            None
        } else {
            Some(Expr::Mul(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyNumbers);
    Some(opt)
}

/// Splits a factor into its base and exponent. A factor that is not a power has exponent `1`.
fn base_and_exponent(factor: &Expr) -> (&Expr, Expr) {
    match factor {
        Expr::Exp(base, exp) => (base, (**exp).clone()),
        factor => (factor, Expr::int(1)),
    }
}

/// `a*a = a^2`
/// `a*a*a = a^3`
/// `a^2*a^3 = a^5`
///
/// Numeric factors are left to [`multiply_numbers`]. The combined factor is placed where the
/// first of its factors was.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        // index into `new_factors`, the shared base, and the exponents to add
        let mut groups: Vec<(usize, &Expr, Vec<Expr>)> = Vec::new();
        let mut new_factors = Vec::with_capacity(factors.len());
        let mut changed = false;

        for factor in factors {
            if Number::from_expr(factor).is_some() {
                new_factors.push(factor.clone());
                continue;
            }

            let (base, exp) = base_and_exponent(factor);
            match groups.iter_mut().find(|(_, other, _)| *other == base) {
                Some((_, _, exps)) => {
                    exps.push(exp);
                    changed = true;
                },
                None => {
                    groups.push((new_factors.len(), base, vec![exp]));
                    new_factors.push(factor.clone());
                },
            }
        }

        if !changed {
            return None;
        }

        for (idx, base, exps) in groups {
            if exps.len() > 1 {
                new_factors[idx] = base.clone().pow(Expr::Add(exps));
            }
        }
        Some(Expr::Mul(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// `2(a+b) = 2a+2b`
/// `-(a-b) = -a+b`
///
/// Only applies to a product of numbers and a single sum; symbolic factors are never distributed.
pub fn distribute(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_multiply(expr, |factors| {
        let mut sums = factors.iter().filter(|factor| matches!(factor, Expr::Add(_)));
        let Some(Expr::Add(terms)) = sums.next() else {
            return None;
        };
        if sums.next().is_some() {
            return None;
        }

        let coefficient = factors.iter()
            .filter(|factor| !matches!(factor, Expr::Add(_)))
            .cloned()
            .collect::<Vec<_>>();
        if coefficient.is_empty() || !coefficient.iter().all(|c| Number::from_expr(c).is_some()) {
            return None;
        }

        let new_terms = terms.iter()
            .map(|term| Expr::Mul(coefficient.clone()) * term.clone())
            .collect();
        Some(Expr::Add(new_terms))
    })?;

    step_collector.push(Step::DistributiveProperty);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_numbers(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
        .or_else(|| distribute(expr, step_collector))
}
