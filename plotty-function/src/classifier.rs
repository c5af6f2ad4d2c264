//! Splits the free symbols of an expression into the primary variable and the parameters.

use log::debug;
use plotty_compute::symbolic::Expr;
use std::fmt;

/// The primary variable does not appear in the expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNotFound {
    /// The name of the primary variable.
    pub variable: String,
}

impl fmt::Display for VariableNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the expression does not depend on `{}`", self.variable)
    }
}

impl std::error::Error for VariableNotFound {}

/// Returns the ordered symbol list of the expression: the primary variable first, followed by
/// every other free symbol in the order they appear in the expression.
///
/// Unlike [`classify_variables`], the primary variable is always included, even if it does not
/// appear in the expression. This is the case after some transforms, such as differentiating
/// `a*x` to get `a`.
pub fn collect_symbols(expr: &Expr, primary: &str) -> Vec<String> {
    let mut symbols = vec![primary.to_string()];
    symbols.extend(expr.free_symbols().into_iter().filter(|sym| sym != primary));
    symbols
}

/// Returns the ordered symbol list of the expression, failing if the primary variable is not one
/// of its free symbols.
///
/// ```
/// use plotty_compute::symbolic::parse;
/// use plotty_function::classifier::classify_variables;
///
/// let expr = parse("a*sin(k*x) + c").unwrap();
/// assert_eq!(classify_variables(&expr, "x").unwrap(), vec!["x", "a", "k", "c"]);
/// assert!(classify_variables(&expr, "t").is_err());
/// ```
pub fn classify_variables(expr: &Expr, primary: &str) -> Result<Vec<String>, VariableNotFound> {
    if !expr.contains_symbol(primary) {
        return Err(VariableNotFound { variable: primary.to_string() });
    }

    let symbols = collect_symbols(expr, primary);
    debug!("classified `{}`: variable `{}`, parameters {:?}", expr, primary, &symbols[1..]);
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use plotty_compute::symbolic::{parse, simplify};
    use pretty_assertions::assert_eq;
    use super::*;

    fn canonical(input: &str) -> Expr {
        simplify(&parse(input).unwrap())
    }

    #[test]
    fn parameters_in_order() {
        let expr = canonical("c1*exp(-x*k1) + c2*exp(x*k2) + c");
        assert_eq!(classify_variables(&expr, "x").unwrap(), vec!["x", "c1", "k1", "c2", "k2", "c"]);
    }

    #[test]
    fn constants_are_not_parameters() {
        let expr = canonical("a*sin(2*pi*k*x) + E");
        assert_eq!(classify_variables(&expr, "x").unwrap(), vec!["x", "a", "k"]);

        let expr = canonical("e*x + phi");
        assert_eq!(classify_variables(&expr, "x").unwrap(), vec!["x", "e", "phi"]);
    }

    #[test]
    fn missing_variable() {
        let expr = canonical("a + b");
        assert_eq!(
            classify_variables(&expr, "x"),
            Err(VariableNotFound { variable: "x".to_string() }),
        );

        // the variable cancels out
        let expr = canonical("x - x + a");
        assert!(classify_variables(&expr, "x").is_err());
    }

    #[test]
    fn other_primary_variable() {
        let expr = canonical("a*t + x");
        assert_eq!(classify_variables(&expr, "t").unwrap(), vec!["t", "a", "x"]);
    }

    #[test]
    fn relaxed_collection() {
        let expr = canonical("a*b");
        assert_eq!(collect_symbols(&expr, "x"), vec!["x", "a", "b"]);
        assert_eq!(collect_symbols(&Expr::int(0), "x"), vec!["x"]);
    }
}
