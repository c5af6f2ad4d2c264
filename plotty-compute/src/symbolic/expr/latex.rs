use plotty_parser::parser::fmt::{fmt_function_name, fmt_pow, fmt_symbol, Latex};
use std::fmt::{Formatter, Result};
use super::{base_needs_parens, fmt_float, Expr, Fraction, Primary};

impl Latex for Primary {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Float(num) => fmt_float(f, num),
            Self::Symbol(sym) => fmt_symbol(f, sym),
            Self::Call(name, args) => {
                fmt_function_name(f, name)?;
                write!(f, "\\left(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    arg.fmt_latex(f)?;
                }
                write!(f, "\\right)")
            },
        }
    }
}

/// Writes factors separated by spaces, or by `\cdot` between two numbers.
fn fmt_factors(f: &mut Formatter, factors: &[Expr]) -> Result {
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 {
            if factor.is_number() && factors[i - 1].is_number() {
                write!(f, " \\cdot ")?;
            } else {
                write!(f, " ")?;
            }
        }
        if matches!(factor, Expr::Add(_)) {
            write!(f, "\\left(")?;
            factor.fmt_latex(f)?;
            write!(f, "\\right)")?;
        } else {
            factor.fmt_latex(f)?;
        }
    }
    Ok(())
}

fn fmt_fraction(f: &mut Formatter, fraction: &Fraction) -> Result {
    if fraction.negative {
        write!(f, "-")?;
    }

    if fraction.denominator.is_empty() {
        return fmt_factors(f, &fraction.numerator);
    }

    write!(f, "\\frac{{")?;
    if fraction.numerator.is_empty() {
        write!(f, "1")?;
    } else {
        fmt_factors(f, &fraction.numerator)?;
    }
    write!(f, "}}{{")?;
    fmt_factors(f, &fraction.denominator)?;
    write!(f, "}}")
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Primary(primary) => primary.fmt_latex(f),
            Self::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    match (i, term.strip_negation()) {
                        (0, _) => term.fmt_latex(f)?,
                        (_, Some(abs)) => {
                            write!(f, " - ")?;
                            abs.fmt_latex(f)?;
                        },
                        (_, None) => {
                            write!(f, " + ")?;
                            term.fmt_latex(f)?;
                        },
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => fmt_fraction(f, &Fraction::split(factors)),
            Self::Exp(base, exp) => {
                if self.is_reciprocal_power() {
                    return fmt_fraction(f, &Fraction::split(std::slice::from_ref(self)));
                }

                if exp.as_integer_recip().is_some_and(|n| *n == 2) {
                    write!(f, "\\sqrt{{")?;
                    base.fmt_latex(f)?;
                    return write!(f, "}}");
                }

                fmt_pow(f, &**base, base_needs_parens(base), &**exp)
            },
            Self::Piecewise { value, guard, otherwise } => {
                write!(f, "\\begin{{cases}} ")?;
                value.fmt_latex(f)?;
                write!(f, " & \\text{{for}}\\: ")?;
                guard.fmt_latex(f)?;
                write!(f, " \\neq 0 \\\\ ")?;
                otherwise.fmt_latex(f)?;
                write!(f, " & \\text{{otherwise}} \\end{{cases}}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn latex(expr: &Expr) -> String {
        expr.as_display().to_string()
    }

    #[test]
    fn fractions_and_roots() {
        let x = Expr::symbol("x");
        let k = Expr::symbol("k");
        let expr = Expr::Mul(vec![
            Expr::int(-1),
            Expr::call("cos", vec![Expr::Mul(vec![k.clone(), x.clone()])]),
            k.recip(),
        ]);
        assert_eq!(latex(&expr), "-\\frac{\\cos\\left(k x\\right)}{k}");
        assert_eq!(latex(&x.clone().sqrt()), "\\sqrt{x}");
        assert_eq!(latex(&x.pow(Expr::int(2))), "x^{2}");
    }

    #[test]
    fn greek_and_constants() {
        let expr = Expr::Mul(vec![Expr::int(2), Expr::symbol("pi"), Expr::symbol("sigma")]);
        assert_eq!(latex(&expr), "2 \\pi \\sigma");
    }

    #[test]
    fn piecewise_uses_cases() {
        let k = Expr::symbol("k");
        let expr = Expr::piecewise(k.clone().recip(), k, Expr::int(0));
        assert_eq!(
            latex(&expr),
            "\\begin{cases} \\frac{1}{k} & \\text{for}\\: k \\neq 0 \\\\ 0 & \\text{otherwise} \\end{cases}",
        );
    }
}
