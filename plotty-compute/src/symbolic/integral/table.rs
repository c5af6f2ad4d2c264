//! Antiderivatives of builtin functions with respect to their argument.

use crate::symbolic::expr::Expr;

/// `1 - u^2`
fn one_minus_square(u: &Expr) -> Expr {
    Expr::int(1) + -u.clone().pow(Expr::int(2))
}

/// Returns the antiderivative `F(u)` of the single-argument function `name`, such that
/// `F'(u) = name(u)`. Returns [`None`] if no antiderivative is known.
pub fn antiderivative(name: &str, u: &Expr) -> Option<Expr> {
    let call = |name: &str| Expr::call(name, vec![u.clone()]);
    Some(match name {
        "sin" => -call("cos"),
        "cos" => call("sin"),
        "tan" => -Expr::call("log", vec![call("cos")]),
        "exp" => call("exp"),
        "log" | "ln" => u.clone() * call(name) + -u.clone(),
        "sqrt" => Expr::Mul(vec![
            Expr::int(2),
            Expr::int(3).recip(),
            u.clone().pow(Expr::Mul(vec![Expr::int(3), Expr::int(2).recip()])),
        ]),
        "sinh" => call("cosh"),
        "cosh" => call("sinh"),
        "tanh" => Expr::call("log", vec![call("cosh")]),
        "asin" | "arcsin" => u.clone() * call(name) + one_minus_square(u).sqrt(),
        "acos" | "arccos" => u.clone() * call(name) + -one_minus_square(u).sqrt(),
        "atan" | "arctan" => {
            let log = Expr::call("log", vec![u.clone().pow(Expr::int(2)) + Expr::int(1)]);
            u.clone() * call(name) + Expr::Mul(vec![Expr::int(-1), Expr::int(2).recip(), log])
        },
        _ => return None,
    })
}

/// Functions whose products with a power of the variable can be integrated by parts, along with
/// their antiderivatives.
///
/// Each entry is `(f, sign, g)`, meaning `∫ f(u) du = sign * g(u)`.
pub const BY_PARTS: [(&str, i32, &str); 5] = [
    ("sin", -1, "cos"),
    ("cos", 1, "sin"),
    ("exp", 1, "exp"),
    ("sinh", 1, "cosh"),
    ("cosh", 1, "sinh"),
];

/// Returns the antiderivative of `f` as listed in [`BY_PARTS`], if `f` can be integrated by parts.
pub fn by_parts_antiderivative(f: &str) -> Option<(i32, &'static str)> {
    BY_PARTS.iter()
        .find(|(name, _, _)| *name == f)
        .map(|(_, sign, g)| (*sign, *g))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{derivative, simplify};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Differentiates the antiderivative of `name` and checks it simplifies back to `name(x)`.
    fn check(name: &str) {
        let x = Expr::symbol("x");
        let big_f = antiderivative(name, &x).unwrap();
        let difference = derivative(&big_f, "x").unwrap() + -Expr::call(name, vec![x]);
        assert_eq!(simplify(&difference), Expr::int(0), "antiderivative of {}", name);
    }

    #[test]
    fn table_differentiates_back() {
        for name in ["sin", "cos", "exp", "log", "sinh", "cosh"] {
            check(name);
        }
    }

    #[test]
    fn parts_table() {
        assert_eq!(by_parts_antiderivative("sin"), Some((-1, "cos")));
        assert_eq!(by_parts_antiderivative("tan"), None);
    }
}
