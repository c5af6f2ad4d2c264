//! Simplification rules for expressions involving addition, including combining like terms.

use crate::symbolic::{
    expr::Expr,
    simplify::{fraction::Number, rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// Splits a term into its numeric coefficient and the rest of the term.
///
/// `3*x*y` is split into `3` and `x*y`, and `x` is split into `1` and `x`. Returns [`None`] if
/// the term is entirely numeric.
pub(crate) fn split_coefficient(term: &Expr) -> Option<(Number, Expr)> {
    if Number::from_expr(term).is_some() {
        return None;
    }

    match term {
        Expr::Mul(factors) => {
            let mut coefficient = Number::one();
            let mut rest = Vec::with_capacity(factors.len());
            for factor in factors {
                match Number::from_expr(factor) {
                    Some(n) => coefficient = coefficient * n,
                    None => rest.push(factor.clone()),
                }
            }
            Some((coefficient, Expr::Mul(rest).downgrade()))
        },
        _ => Some((Number::one(), term.clone())),
    }
}

/// Multiplies `rest` by the given coefficient, placing the coefficient first.
pub(crate) fn with_coefficient(coefficient: Number, rest: Expr) -> Expr {
    if coefficient.is_zero() {
        return Expr::int(0);
    }

    let mut factors = coefficient.into_factors();
    match rest {
        Expr::Mul(rest) => factors.extend(rest),
        rest => factors.push(rest),
    }
    Expr::Mul(factors).downgrade()
}

/// `a+(b+c) = a+b+c`
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Add(_))) {
            return None;
        }

        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term {
                Expr::Add(inner) => new_terms.extend(inner.iter().cloned()),
                term => new_terms.push(term.clone()),
            }
        }
        Some(Expr::Add(new_terms))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Flatten);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::Add(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `1+2 = 3`
/// `1/2+1/3 = 5/6`
///
/// The sum is placed where the first numeric term was.
pub fn add_numbers(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        let numbers = terms.iter()
            .enumerate()
            .filter_map(|(i, term)| Number::from_expr(term).map(|n| (i, n)))
            .collect::<Vec<_>>();
        if numbers.len() < 2 {
            return None;
        }

        let first = numbers[0].0;
        let sum = numbers.into_iter()
            .map(|(_, n)| n)
            .reduce(|acc, n| acc + n)?;

        let mut sum = Some(sum.into_expr());
        let new_terms = terms.iter()
            .enumerate()
            .filter_map(|(i, term)| {
                if i == first {
                    sum.take()
                } else if Number::from_expr(term).is_some() {
                    None
                } else {
                    Some(term.clone())
                }
            })
            .collect::<Vec<_>>();
        Some(Expr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::AddNumbers);
    Some(opt)
}

/// `a+a = 2a`
/// `2a+3a = 5a`
/// `x*y-y*x = 0`
///
/// Combined terms are placed where the first of them was.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_add(expr, |terms| {
        // index into `new_terms`, the accumulated coefficient, and the non-numeric part
        let mut groups: Vec<(usize, Number, Expr)> = Vec::new();
        let mut new_terms = Vec::with_capacity(terms.len());
        let mut changed = false;

        for term in terms {
            let Some((coefficient, rest)) = split_coefficient(term) else {
                new_terms.push(term.clone());
                continue;
            };

            match groups.iter_mut().find(|(_, _, other)| *other == rest) {
                Some((_, acc, _)) => {
                    *acc = acc.clone() + coefficient;
                    changed = true;
                },
                None => {
                    groups.push((new_terms.len(), coefficient, rest));
                    new_terms.push(term.clone());
                },
            }
        }

        if !changed {
            return None;
        }

        for (idx, coefficient, rest) in groups {
            new_terms[idx] = with_coefficient(coefficient, rest);
        }
        new_terms.retain(|term| !term.is_zero());
        Some(Expr::Add(new_terms).downgrade())
    })?;

    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| add_numbers(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
}
