use std::fmt::{Display, Formatter, Result};
use super::{
    ast::{binary::Binary, call::Call, expr::Expr, literal::Literal, paren::Paren, unary::Unary},
    token::op::BinOpKind,
};

/// Lowercase greek letter names that LaTeX can typeset as a single glyph.
const GREEK: [&str; 24] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota", "kappa",
    "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau", "upsilon", "phi", "chi",
    "psi", "omega",
];

/// Functions that have a dedicated LaTeX operator name, such as `\sin`.
const OPERATOR_NAMES: [&str; 14] = [
    "sin", "cos", "tan", "arcsin", "arccos", "arctan", "sinh", "cosh", "tanh", "exp", "log",
    "ln", "sgn", "max",
];

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self>
    where
        Self: Sized,
    {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats a symbol name. Greek letter names become their LaTeX command, and a trailing run of
/// digits becomes a subscript, so `sigma` is written `\sigma` and `k1` is written `k_{1}`.
pub fn fmt_symbol(f: &mut Formatter, name: &str) -> Result {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    let subscript = &name[stem.len()..];
    let stem = if stem.is_empty() { name } else { stem };

    if GREEK.contains(&stem) {
        write!(f, "\\{}", stem)?;
    } else if stem.chars().count() > 1 {
        write!(f, "\\mathrm{{{}}}", stem)?;
    } else {
        write!(f, "{}", stem)?;
    }

    if !subscript.is_empty() && stem != name {
        write!(f, "_{{{}}}", subscript)?;
    }
    Ok(())
}

/// Formats the name of a function, without its arguments.
pub fn fmt_function_name(f: &mut Formatter, name: &str) -> Result {
    let name = match name {
        "asin" => "arcsin",
        "acos" => "arccos",
        "atan" => "arctan",
        other => other,
    };

    if OPERATOR_NAMES.contains(&name) {
        write!(f, "\\{}", name)
    } else {
        write!(f, "\\operatorname{{{}}}", name)
    }
}

/// Helper to format powers. The base is parenthesized when `paren_base` is true.
pub fn fmt_pow(
    f: &mut Formatter,
    base: &dyn Latex,
    paren_base: bool,
    exponent: &dyn Latex,
) -> Result {
    if paren_base {
        write!(f, "\\left(")?;
        base.fmt_latex(f)?;
        write!(f, "\\right)")?;
    } else {
        base.fmt_latex(f)?;
    }
    write!(f, "^{{")?;
    exponent.fmt_latex(f)?;
    write!(f, "}}")
}

impl Latex for Literal {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Literal::Number(num) => write!(f, "{}", num),
            Literal::Symbol(sym) => fmt_symbol(f, &sym.name),
        }
    }
}

impl Latex for Paren {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        write!(f, "\\left(")?;
        self.expr.fmt_latex(f)?;
        write!(f, "\\right)")
    }
}

impl Latex for Call {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        if self.name.name == "sqrt" && self.args.len() == 1 {
            write!(f, "\\sqrt{{")?;
            self.args[0].innermost().fmt_latex(f)?;
            return write!(f, "}}");
        }

        fmt_function_name(f, &self.name.name)?;
        write!(f, "\\left(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            arg.fmt_latex(f)?;
        }
        write!(f, "\\right)")
    }
}

impl Latex for Unary {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        write!(f, "-")?;
        self.operand.fmt_latex(f)
    }
}

impl Latex for Binary {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self.op.kind {
            BinOpKind::Exp => {
                let paren_base = matches!(
                    self.lhs.innermost(),
                    Expr::Unary(_) | Expr::Binary(_)
                );
                fmt_pow(f, self.lhs.innermost(), paren_base, self.rhs.innermost())
            },
            BinOpKind::Div => {
                write!(f, "\\frac{{")?;
                self.lhs.innermost().fmt_latex(f)?;
                write!(f, "}}{{")?;
                self.rhs.innermost().fmt_latex(f)?;
                write!(f, "}}")
            },
            BinOpKind::Mul if self.op.implicit => {
                self.lhs.fmt_latex(f)?;
                write!(f, " ")?;
                self.rhs.fmt_latex(f)
            },
            BinOpKind::Mul => {
                self.lhs.fmt_latex(f)?;
                write!(f, " \\cdot ")?;
                self.rhs.fmt_latex(f)
            },
            BinOpKind::Add | BinOpKind::Sub => {
                self.lhs.fmt_latex(f)?;
                write!(f, "{}", self.op)?;
                self.rhs.fmt_latex(f)
            },
        }
    }
}

impl Latex for Expr {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        match self {
            Expr::Literal(literal) => literal.fmt_latex(f),
            Expr::Paren(paren) => paren.fmt_latex(f),
            Expr::Call(call) => call.fmt_latex(f),
            Expr::Unary(unary) => unary.fmt_latex(f),
            Expr::Binary(binary) => binary.fmt_latex(f),
        }
    }
}
