//! Simplification rules for function calls.

use crate::symbolic::{
    expr::Expr,
    simplify::{rules::do_call, step::Step},
    step_collector::StepCollector,
};

/// Functions where `f(-x) = -f(x)`.
const ODD: [&str; 11] = [
    "sin", "tan", "asin", "atan", "arcsin", "arctan", "sinh", "tanh", "asinh", "atanh", "sign",
];

/// Functions where `f(-x) = f(x)`.
const EVEN: [&str; 3] = ["cos", "cosh", "abs"];

/// `sqrt(a) = a^(1/2)`
pub fn sqrt(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, |name, args| {
        match (name, args) {
            ("sqrt", [arg]) => Some(arg.clone().sqrt()),
            _ => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::Sqrt);
    Some(opt)
}

/// `sin(0) = 0`
/// `cos(0) = 1`
/// `exp(0) = 1`
/// `log(1) = 0`
/// `log(E) = 1`
/// etc.
pub fn special_value(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, |name, args| {
        let [arg] = args else {
            return None;
        };

        let zero = arg.as_integer().is_some_and(|n| n.is_zero());
        let one = arg.is_one();
        let e = arg.as_symbol() == Some("E");
        match name {
            _ if zero && ODD.contains(&name) => Some(Expr::int(0)),
            "abs" if zero => Some(Expr::int(0)),
            "cos" | "cosh" | "exp" if zero => Some(Expr::int(1)),
            "log" | "ln" if one => Some(Expr::int(0)),
            "log" | "ln" if e => Some(Expr::int(1)),
            "acos" | "arccos" if one => Some(Expr::int(0)),
            _ => None,
        }
    })?;

    step_collector.push(Step::SpecialValue);
    Some(opt)
}

/// `sin(-a) = -sin(a)`
pub fn odd_function(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, |name, args| {
        let [arg] = args else {
            return None;
        };
        if !ODD.contains(&name) {
            return None;
        }

        let positive = arg.strip_negation()?;
        Some(-Expr::call(name, vec![positive]))
    })?;

    step_collector.push(Step::OddFunction);
    Some(opt)
}

/// `cos(-a) = cos(a)`
pub fn even_function(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_call(expr, |name, args| {
        let [arg] = args else {
            return None;
        };
        if !EVEN.contains(&name) {
            return None;
        }

        let positive = arg.strip_negation()?;
        Some(Expr::call(name, vec![positive]))
    })?;

    step_collector.push(Step::EvenFunction);
    Some(opt)
}

/// Applies all function call rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    sqrt(expr, step_collector)
        .or_else(|| special_value(expr, step_collector))
        .or_else(|| odd_function(expr, step_collector))
        .or_else(|| even_function(expr, step_collector))
}
