//! Suggests starting values for the parameters of a function.
//!
//! A parameter that scales the primary variable, or something computed from it, is most useful
//! when it starts at `1.0`: `a*sin(k*x)` with `a = k = 0` is a flat line. Every other parameter,
//! such as the offset `c` in `a*sin(k*x) + c`, starts at `0.0`.
//!
//! The check is purely structural. It does not expand products, so a parameter that only scales
//! the variable after distributing, such as `b` in `x*(b + 1)`, is not detected.

use plotty_compute::symbolic::{simplify, Expr};

/// Returns true if `sub` is `param` itself, or a power with `param` somewhere in it.
fn scales_with(sub: &Expr, param: &str) -> bool {
    match sub {
        Expr::Exp(..) => sub.contains_symbol(param),
        _ => sub.as_symbol() == Some(param),
    }
}

/// Returns true if the parameter `param` multiplies the variable `var`, or an expression
/// containing `var`, somewhere in `expr`.
///
/// At each node, every argument containing `var` is paired with every sibling that is `param` or
/// a power involving `param`. If their canonical product still appears in the node, the parameter
/// multiplies the variable. Otherwise the search continues in the arguments containing `var`.
///
/// ```
/// use plotty_compute::symbolic::{parse, simplify};
/// use plotty_function::heuristic::multiplies_var;
///
/// let expr = simplify(&parse("a*sin(k*x) + c").unwrap());
/// assert!(multiplies_var("x", "a", &expr));
/// assert!(multiplies_var("x", "k", &expr));
/// assert!(!multiplies_var("x", "c", &expr));
/// ```
pub fn multiplies_var(var: &str, param: &str, expr: &Expr) -> bool {
    let args = expr.args();
    let with_var = args.iter()
        .copied()
        .filter(|arg| arg.contains_symbol(var))
        .collect::<Vec<_>>();

    for lhs in &with_var {
        for rhs in &args {
            if scales_with(rhs, param) {
                let product = simplify(&((*lhs).clone() * (*rhs).clone()));
                if expr.has(&product) {
                    return true;
                }
            }
        }
    }

    with_var.into_iter()
        .filter(|arg| arg.as_symbol() != Some(var))
        .any(|arg| multiplies_var(var, param, arg))
}

/// Returns the suggested starting value of each parameter, in order.
///
/// `symbols` is the ordered symbol list of the function, starting with the primary variable.
pub fn default_values(symbols: &[String], expr: &Expr) -> Vec<(String, f64)> {
    let Some((var, params)) = symbols.split_first() else {
        return Vec::new();
    };

    params.iter()
        .map(|param| {
            let value = if multiplies_var(var, param, expr) { 1.0 } else { 0.0 };
            (param.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::classifier::classify_variables;
    use plotty_compute::symbolic::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn defaults(input: &str) -> Vec<(String, f64)> {
        let expr = simplify(&parse(input).unwrap());
        let symbols = classify_variables(&expr, "x").unwrap();
        default_values(&symbols, &expr)
    }

    fn pairs(expected: &[(&str, f64)]) -> Vec<(String, f64)> {
        expected.iter().map(|(name, value)| (name.to_string(), *value)).collect()
    }

    #[test]
    fn sine_wave() {
        assert_eq!(defaults("a*sin(k*x) + c"), pairs(&[("a", 1.0), ("k", 1.0), ("c", 0.0)]));
    }

    #[test]
    fn nested_calls() {
        let expr = simplify(&parse("w*a^pi*sin(k^10*tan(y*x)*z) + d + e^10*tan(f)").unwrap());
        for param in ["w", "a", "k", "z", "y"] {
            assert!(multiplies_var("x", param, &expr), "{} should multiply x", param);
        }
        for param in ["d", "e", "f"] {
            assert!(!multiplies_var("x", param, &expr), "{} should not multiply x", param);
        }
    }

    #[test]
    fn sums_hide_parameters() {
        let expr = simplify(&parse("a*sinh(x*(b^2 + 45.0*c)) + d").unwrap());
        assert!(multiplies_var("x", "a", &expr));
        assert!(!multiplies_var("x", "b", &expr));
        assert!(!multiplies_var("x", "c", &expr));
        assert!(!multiplies_var("x", "d", &expr));
    }

    #[test]
    fn base_of_power() {
        assert_eq!(defaults("a^x + c"), pairs(&[("a", 0.0), ("c", 0.0)]));
    }

    #[test]
    fn presets() {
        assert_eq!(
            defaults("c1*exp(-x*k1) + c2*exp(x*k2) + c"),
            pairs(&[("c1", 1.0), ("k1", 1.0), ("c2", 1.0), ("k2", 1.0), ("c", 0.0)]),
        );
        assert_eq!(
            defaults("a*x**2 + b*x + c"),
            pairs(&[("a", 1.0), ("b", 1.0), ("c", 0.0)]),
        );
        assert_eq!(
            defaults("a*log(k*(x - b)) + c"),
            pairs(&[("a", 1.0), ("k", 1.0), ("b", 0.0), ("c", 0.0)]),
        );
        assert_eq!(
            defaults("a*exp(-((x-u)/sigma)**2/2)/(sqrt(pi*sigma**2))"),
            pairs(&[("a", 1.0), ("u", 0.0), ("sigma", 1.0)]),
        );
    }

    #[test]
    fn deterministic() {
        let first = defaults("a*sin(2*pi*k*x)*exp(-((x-mu)/sigma)**2/2)/(sqrt(pi*sigma**2))");
        let second = defaults("a*sin(2*pi*k*x)*exp(-((x-mu)/sigma)**2/2)/(sqrt(pi*sigma**2))");
        assert_eq!(first, second);
    }

    #[test]
    fn no_parameters() {
        assert_eq!(defaults("x^2"), pairs(&[]));
        assert_eq!(default_values(&[], &Expr::int(0)), pairs(&[]));
    }
}
