//! Simplification rules for power expressions.

use crate::primitive::float;
use crate::symbolic::{
    expr::{Expr, Primary},
    simplify::{fraction::{finite_float, Number}, rules::do_power, step::Step},
    step_collector::StepCollector,
};
use rug::{ops::Pow, Float};

/// Integer exponents larger than this are not expanded.
const MAX_EXPANDED_EXPONENT: u32 = 1 << 12;

/// `a^0 = 1`
///
/// `0^0` is defined as `1` by this rule, though it may be undefined in other mathematical
/// contexts.
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |_, rhs| {
        if rhs.as_integer()?.is_zero() {
            Some(Expr::int(1))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `0^a = 0`, where `a` is a positive number
///
/// `0^0` is handled by the [`power_zero`] rule. `0^-1` is left alone, so that evaluating it
/// reports a division by zero.
pub fn power_zero_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if !lhs.as_integer()?.is_zero() {
            return None;
        }

        match Number::from_expr(rhs)? {
            Number::Rational(n) if n > 0 => Some(Expr::int(0)),
            Number::Float(n) if n > 0 => Some(Expr::int(0)),
            _ => None,
        }
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, _| {
        if lhs.is_one() {
            Some(Expr::int(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        if rhs.is_one() {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `(a^b)^n = a^(b*n)`, where `n` is an integer
pub fn power_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.as_integer()?;
        if let Expr::Exp(base, exp) = lhs {
            // `2^-1` is how fractions are stored, and `(2^-1)^-1` is folded as a number instead
            if base.is_integer() && exp.is_integer() {
                return None;
            }
            Some((**base).clone().pow((**exp).clone() * rhs.clone()))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerPower);
    Some(opt)
}

/// `(a*b)^n = a^n*b^n`, where `n` is an integer
pub fn distribute_power(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        rhs.as_integer()?;
        if let Expr::Mul(factors) = lhs {
            let new_factors = factors.iter()
                .map(|factor| factor.clone().pow(rhs.clone()))
                .collect();
            Some(Expr::Mul(new_factors))
        } else {
            None
        }
    })?;

    step_collector.push(Step::DistributePower);
    Some(opt)
}

/// `2^3 = 8`
/// `2^-2 = 1/4`
/// `(-2)^-3 = -1/8`
/// `(1/2)^-1 = 2`
/// `1.5^2 = 2.25`
///
/// Exact powers are kept exact. A power involving a float is computed as a float, as long as the
/// result is finite and real.
pub fn power_numbers(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_power(expr, |lhs, rhs| {
        match (lhs, rhs) {
            (Expr::Primary(Primary::Integer(base)), Expr::Primary(Primary::Integer(exp))) => {
                let magnitude = exp.clone().abs().to_u32()
                    .filter(|n| *n <= MAX_EXPANDED_EXPONENT)?;
                if *exp >= 0 {
                    return Some(Expr::int(base.clone().pow(magnitude)));
                }

                // already in the canonical form of a fraction
                if base.is_zero() || (*exp == -1 && *base > 0) {
                    return None;
                }

                let negative = *base < 0 && magnitude % 2 == 1;
                let denominator = base.clone().abs().pow(magnitude);
                let recip = if denominator == 1 {
                    Expr::int(1)
                } else {
                    Expr::int(denominator).recip()
                };
                Some(if negative { -recip } else { recip })
            },
            (Expr::Exp(base, exp), Expr::Primary(Primary::Integer(outer))) => {
                // (1/q)^n = q^-n
                let inner = exp.as_integer()?;
                base.as_integer()?;
                Some((**base).clone().pow(Expr::int(inner.clone() * outer.clone())))
            },
            (lhs, rhs) if lhs.is_float() || rhs.is_float() => {
                let base = number_as_float(Number::from_expr(lhs)?);
                let exp = number_as_float(Number::from_expr(rhs)?);
                if base < 0 && !exp.is_integer() {
                    return None;
                }
                finite_float(base.pow(exp))
            },
            _ => None,
        }
    })?;

    step_collector.push(Step::PowerNumbers);
    Some(opt)
}

fn number_as_float(n: Number) -> Float {
    match n {
        Number::Rational(n) => float(n),
        Number::Float(n) => n,
    }
}

/// Applies all power rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    power_zero(expr, step_collector)
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_numbers(expr, step_collector))
        .or_else(|| power_power(expr, step_collector))
        .or_else(|| distribute_power(expr, step_collector))
}
