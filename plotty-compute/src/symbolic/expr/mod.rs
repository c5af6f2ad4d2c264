//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](plotty_parser::parser::ast::Expr) type from `plotty_parser` is a recursive `enum`
//! that represents the AST of a mathematical expression. It's convenient for parsing, but not so
//! much for algebraic manipulation.
//!
//! This module defines a separate [`Expr`] that flattens sums and products into lists of terms
//! and factors, and represents subtraction and division with negation and reciprocals. Conversion
//! from the AST keeps every term and factor in the order it was written, which the rest of the
//! engine relies on to extract free symbols in a stable order.
//!
//! # Strict equality
//!
//! Determining whether two expressions are mathematically equal is as hard as simplifying them.
//! Instead, the [`PartialEq`] implementation for [`Expr`] implements **strict equality**: two
//! expressions are strictly equal if they are the same kind of node, and:
//!
//! - If both are [`Expr::Primary`], both have strictly equal values. Function calls compare their
//! arguments in order.
//! - If both are [`Expr::Add`] or [`Expr::Mul`], both have strictly equal terms / factors, in any
//! order (including repeats).
//! - If both are [`Expr::Exp`], both have strictly equal base and exponent.
//! - If both are [`Expr::Piecewise`], all three branches are strictly equal.
//!
//! Strict equality never reports false positives, so it can be used in conjunction with
//! simplification to decide whether terms or factors can be combined.

mod iter;
mod latex;

use crate::{consts, primitive::{float_from_str, int, int_from_str}};
use iter::ExprIter;
use plotty_attrs::ErrorKind;
use plotty_parser::parser::{
    ast::{Expr as AstExpr, Literal, LitNum},
    token::op::{BinOpKind, UnaryOpKind},
};
use rug::{Float, Integer};
use std::{fmt, ops::{Add, AddAssign, Mul, MulAssign, Neg}};

/// A number literal in the input could not be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number literal `{}`", literal),
    labels = ["this number"],
)]
pub struct InvalidLiteral {
    /// The literal as written.
    pub literal: String,
}

/// A single term in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// An exact integer.
    Integer(Integer),

    /// A decimal number.
    Float(Float),

    /// A named symbol, such as a variable or one of the constants `pi` and `E`.
    Symbol(String),

    /// A function call with its arguments.
    Call(String, Vec<Expr>),
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(num) => write!(f, "{}", num),
            Self::Float(num) => fmt_float(f, num),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Writes a float in a form the parser accepts back: integral values keep one decimal place, and
/// other values use the shortest representation that round-trips through `f64`.
pub(crate) fn fmt_float(f: &mut fmt::Formatter<'_>, num: &Float) -> fmt::Result {
    let value = num.to_f64();
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{:.1}", value)
    } else {
        write!(f, "{}", value)
    }
}

/// A mathematical expression with information about its terms and factors.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<Expr>),

    /// Multiple factors multiplied together.
    Mul(Vec<Expr>),

    /// An expression raised to the power of another expression.
    Exp(Box<Expr>, Box<Expr>),

    /// `value` where `guard` is nonzero, and `otherwise` everywhere else.
    ///
    /// Integration produces this when the result depends on whether a symbolic coefficient is
    /// zero, such as `∫ sin(k*x) dx`.
    Piecewise {
        value: Box<Expr>,
        guard: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    /// Creates an integer expression.
    pub fn int<T>(n: T) -> Self
    where
        Integer: From<T>,
    {
        Self::Primary(Primary::Integer(int(n)))
    }

    /// Creates a float expression.
    pub fn float(n: Float) -> Self {
        Self::Primary(Primary::Float(n))
    }

    /// Creates a symbol expression.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(name.into()))
    }

    /// Creates a function call expression.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::Primary(Primary::Call(name.into(), args))
    }

    /// Raises this expression to the given power. No simplification is done.
    pub fn pow(self, exp: Expr) -> Self {
        Self::Exp(Box::new(self), Box::new(exp))
    }

    /// Returns the reciprocal of this expression, `self^-1`. No simplification is done.
    pub fn recip(self) -> Self {
        self.pow(Self::int(-1))
    }

    /// Returns the square root of this expression, `self^(1/2)`. No simplification is done.
    pub fn sqrt(self) -> Self {
        self.pow(Self::int(2).recip())
    }

    /// Creates a piecewise expression that is `value` where `guard` is nonzero, and `otherwise`
    /// everywhere else.
    pub fn piecewise(value: Expr, guard: Expr, otherwise: Expr) -> Self {
        Self::Piecewise {
            value: Box::new(value),
            guard: Box::new(guard),
            otherwise: Box::new(otherwise),
        }
    }

    /// If the expression is a [`Primary::Integer`], returns a reference to the contained integer.
    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            Self::Primary(Primary::Integer(int)) => Some(int),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Integer`].
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Primary(Primary::Integer(_)))
    }

    /// If the expression is a [`Primary::Float`], returns a reference to the contained float.
    pub fn as_float(&self) -> Option<&Float> {
        match self {
            Self::Primary(Primary::Float(float)) => Some(float),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Primary::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Primary(Primary::Float(_)))
    }

    /// Returns true if the expression is a [`Primary::Integer`] or [`Primary::Float`].
    pub fn is_number(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// If the expression is a [`Primary::Integer`] raised to the power of -1, returns a reference
    /// to the contained integer (the denominator of the fraction).
    pub fn as_integer_recip(&self) -> Option<&Integer> {
        if let Self::Exp(base, exp) = self {
            if exp.as_integer().is_some_and(|exp| *exp == -1) {
                return base.as_integer();
            }
        }

        None
    }

    /// If the expression is a [`Primary::Symbol`], returns a reference to the contained symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Primary(Primary::Symbol(sym)) => Some(sym),
            _ => None,
        }
    }

    /// If the expression is a [`Primary::Call`], returns the function name and arguments.
    pub fn as_call(&self) -> Option<(&str, &[Expr])> {
        match self {
            Self::Primary(Primary::Call(name, args)) => Some((name, args)),
            _ => None,
        }
    }

    /// Returns true if the expression is the number zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Primary(Primary::Integer(n)) => n.is_zero(),
            Self::Primary(Primary::Float(n)) => n.is_zero(),
            _ => false,
        }
    }

    /// Returns true if the expression is the integer one.
    pub fn is_one(&self) -> bool {
        self.as_integer().is_some_and(|n| *n == 1)
    }

    /// Returns true if the expression is a negative number.
    pub fn is_negative_number(&self) -> bool {
        match self {
            Self::Primary(Primary::Integer(n)) => *n < 0,
            Self::Primary(Primary::Float(n)) => *n < 0,
            _ => false,
        }
    }

    /// If the expression is "visibly" negative, returns its negation.
    ///
    /// An expression is visibly negative if it is a negative number, or a product whose first
    /// factor is a negative number. `-3` becomes `3`, `-x*y` becomes `x*y`, and `-2*x` becomes
    /// `2*x`.
    pub fn strip_negation(&self) -> Option<Expr> {
        match self {
            Self::Primary(Primary::Integer(n)) if *n < 0 => Some(Self::int(-n.clone())),
            Self::Primary(Primary::Float(n)) if *n < 0 => Some(Self::float(-n.clone())),
            Self::Mul(factors) => {
                let (first, rest) = factors.split_first()?;
                if !first.is_negative_number() {
                    return None;
                }

                let mut new_factors = Vec::with_capacity(factors.len());
                if first.as_integer().map_or(true, |n| *n != -1) {
                    new_factors.push(first.strip_negation()?);
                }
                new_factors.extend(rest.iter().cloned());
                Some(Self::Mul(new_factors).downgrade())
            },
            _ => None,
        }
    }

    /// Returns the immediate sub-expressions of this expression, in order.
    ///
    /// These are the terms of a sum, the factors of a product, the base and exponent of a power,
    /// the arguments of a function call, or the value, guard, and otherwise-branch of a piecewise
    /// expression.
    pub fn args(&self) -> Vec<&Expr> {
        match self {
            Self::Primary(Primary::Call(_, args)) => args.iter().collect(),
            Self::Primary(_) => Vec::new(),
            Self::Add(terms) => terms.iter().collect(),
            Self::Mul(factors) => factors.iter().collect(),
            Self::Exp(base, exp) => vec![base, exp],
            Self::Piecewise { value, guard, otherwise } => vec![value, guard, otherwise],
        }
    }

    /// Returns true if the given symbol appears anywhere in this expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.as_symbol() == Some(name))
    }

    /// Returns the free symbols of the expression: every symbol that is not a builtin constant,
    /// without repeats, in the order they are first encountered reading the expression left to
    /// right. Function names are not symbols.
    pub fn free_symbols(&self) -> Vec<String> {
        let mut symbols = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            if let Some(sym) = expr.as_symbol() {
                if !consts::is_constant(sym) && !symbols.iter().any(|s| s == sym) {
                    symbols.push(sym.to_string());
                }
            }
            stack.extend(expr.args().into_iter().rev());
        }
        symbols
    }

    /// Returns true if `sub` is a sub-term of this expression.
    ///
    /// Besides exact (strict) matches anywhere in the tree, a sum or product also contains every
    /// sum or product formed from a subset of its terms or factors. For example, `a*b*sin(x)`
    /// contains `sin(x)*a`.
    pub fn has(&self, sub: &Expr) -> bool {
        if self == sub {
            return true;
        }

        let partial = match (self, sub) {
            (Self::Add(terms), Self::Add(sub_terms)) => is_sub_multiset(sub_terms, terms),
            (Self::Mul(factors), Self::Mul(sub_factors)) => is_sub_multiset(sub_factors, factors),
            _ => false,
        };

        partial || self.args().into_iter().any(|arg| arg.has(sub))
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`Expr::Add`] with zero / one term, or an [`Expr::Mul`]
    /// with zero / one factor. This function checks for these cases and simplifies the expression
    /// into the single term / factor, or an [`Expr::Primary`] containing the integer 0 or 1.
    pub fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => match terms.len() {
                0 => Self::int(0),
                1 => terms.remove(0),
                _ => Self::Add(terms),
            },
            Self::Mul(mut factors) => match factors.len() {
                0 => Self::int(1),
                1 => factors.remove(0),
                _ => Self::Mul(factors),
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns true if the expression is a power with a visibly negative exponent, such as `x^-1`
    /// or `x^(-k)`.
    pub(crate) fn is_reciprocal_power(&self) -> bool {
        matches!(self, Self::Exp(_, exp) if exp.strip_negation().is_some())
    }
}

/// Returns true if every item in `sub` can be matched to a distinct, strictly equal item in `of`.
fn is_sub_multiset(sub: &[Expr], of: &[Expr]) -> bool {
    if sub.len() > of.len() {
        return false;
    }

    let mut used = vec![false; of.len()];
    sub.iter().all(|item| {
        let found = of.iter()
            .enumerate()
            .find(|(i, other)| !used[*i] && *other == item)
            .map(|(i, _)| i);
        match found {
            Some(i) => {
                used[i] = true;
                true
            },
            None => false,
        }
    })
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(lhs), Self::Primary(rhs)) => lhs == rhs,
            (Self::Add(lhs), Self::Add(rhs)) | (Self::Mul(lhs), Self::Mul(rhs)) => {
                lhs.len() == rhs.len() && is_sub_multiset(lhs, rhs)
            },
            (Self::Exp(lhs_base, lhs_exp), Self::Exp(rhs_base, rhs_exp)) => {
                lhs_base == rhs_base && lhs_exp == rhs_exp
            },
            (
                Self::Piecewise { value: lv, guard: lg, otherwise: lo },
                Self::Piecewise { value: rv, guard: rg, otherwise: ro },
            ) => lv == rv && lg == rg && lo == ro,
            _ => false,
        }
    }
}

impl TryFrom<AstExpr> for Expr {
    type Error = plotty_error::Error;

    fn try_from(expr: AstExpr) -> Result<Self, Self::Error> {
        Ok(match expr {
            AstExpr::Literal(Literal::Number(num)) => {
                let span = num.span();
                let parsed = match num {
                    LitNum::Integer { value, .. } => int_from_str(&value)
                        .map(Primary::Integer)
                        .ok_or(value),
                    LitNum::Float { value, .. } => {
                        // `5.` and `.5` are both accepted by the tokenizer
                        let padded = format!("0{}0", value);
                        float_from_str(&padded)
                            .map(Primary::Float)
                            .ok_or(value)
                    },
                };
                match parsed {
                    Ok(primary) => Self::Primary(primary),
                    Err(literal) => return Err(plotty_error::Error::new(
                        vec![span],
                        InvalidLiteral { literal },
                    )),
                }
            },
            AstExpr::Literal(Literal::Symbol(sym)) => Self::symbol(sym.name),
            AstExpr::Paren(paren) => Self::try_from(*paren.expr)?,
            AstExpr::Call(call) => {
                let args = call.args.into_iter()
                    .map(Self::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Self::call(call.name.name, args)
            },
            AstExpr::Unary(unary) => match unary.op.kind {
                UnaryOpKind::Neg => -Self::try_from(*unary.operand)?,
            },
            AstExpr::Binary(binary) => {
                let lhs = Self::try_from(*binary.lhs)?;
                let rhs = Self::try_from(*binary.rhs)?;
                match binary.op.kind {
                    BinOpKind::Exp => lhs.pow(rhs),
                    BinOpKind::Mul => lhs * rhs,
                    BinOpKind::Div => lhs * rhs.recip(),
                    BinOpKind::Add => lhs + rhs,
                    BinOpKind::Sub => lhs + -rhs,
                }
            },
        })
    }
}

/// Returns true if the expression must be parenthesized when it appears as a factor.
fn factor_needs_parens(expr: &Expr) -> bool {
    matches!(expr, Expr::Add(_) | Expr::Mul(_))
}

/// Returns true if the expression must be parenthesized when it appears as the base of a power.
fn base_needs_parens(expr: &Expr) -> bool {
    matches!(expr, Expr::Add(_) | Expr::Mul(_) | Expr::Exp(..) | Expr::Piecewise { .. })
        || expr.is_negative_number()
}

/// Returns true if the expression can be written as an exponent without parentheses.
fn bare_exponent(expr: &Expr) -> bool {
    match expr {
        Expr::Primary(Primary::Integer(n)) => *n >= 0,
        Expr::Primary(Primary::Float(n)) => *n >= 0,
        Expr::Primary(_) => true,
        _ => false,
    }
}

/// A product split into the parts it is written with: `sign * numerator / denominator`.
///
/// A numeric coefficient is kept in the numerator only if it is not `1`. Reciprocal powers such
/// as `x^-2` are moved into the denominator with their exponent negated.
pub(crate) struct Fraction {
    pub negative: bool,
    pub numerator: Vec<Expr>,
    pub denominator: Vec<Expr>,
}

impl Fraction {
    /// Splits the given factors of a product.
    pub(crate) fn split(factors: &[Expr]) -> Self {
        let mut negative = false;
        let mut numerator = Vec::new();
        let mut denominator = Vec::new();

        for factor in factors {
            if factor.is_number() {
                let magnitude = match factor.strip_negation() {
                    Some(abs) => {
                        negative = !negative;
                        abs
                    },
                    None => factor.clone(),
                };
                if !magnitude.is_one() {
                    numerator.push(magnitude);
                }
            } else if let Expr::Exp(base, exp) = factor {
                match exp.strip_negation() {
                    Some(exp) if exp.is_one() => denominator.push((**base).clone()),
                    Some(exp) => denominator.push((**base).clone().pow(exp)),
                    None => numerator.push(factor.clone()),
                }
            } else {
                numerator.push(factor.clone());
            }
        }

        Self { negative, numerator, denominator }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    match (i, term.strip_negation()) {
                        (0, _) => write!(f, "{}", term)?,
                        (_, Some(abs)) => write!(f, " - {}", abs)?,
                        (_, None) => write!(f, " + {}", term)?,
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
                    return write!(f, "sqrt({})", base);
                }

                if base_needs_parens(base) {
                    write!(f, "({})", base)?;
                } else {
                    write!(f, "{}", base)?;
                }

                if bare_exponent(exp) {
                    write!(f, "^{}", exp)
                } else {
                    write!(f, "^({})", exp)
                }
            },
            Self::Piecewise { value, guard, otherwise } => {
                write!(f, "Piecewise(({}, Ne({}, 0)), ({}, True))", value, guard, otherwise)
            },
        }
    }
}

/// Writes the factors of a list, separated by `*`, parenthesizing factors that need it.
fn fmt_factors(f: &mut fmt::Formatter<'_>, factors: &[Expr]) -> fmt::Result {
    for (i, factor) in factors.iter().enumerate() {
        if i > 0 {
            write!(f, "*")?;
        }
        if factor_needs_parens(factor) {
            write!(f, "({})", factor)?;
        } else {
            write!(f, "{}", factor)?;
        }
    }
    Ok(())
}

fn fmt_fraction(f: &mut fmt::Formatter<'_>, fraction: &Fraction) -> fmt::Result {
    if fraction.negative {
        write!(f, "-")?;
    }

    if fraction.numerator.is_empty() {
        write!(f, "1")?;
    } else {
        fmt_factors(f, &fraction.numerator)?;
    }

    match fraction.denominator.as_slice() {
        [] => Ok(()),
        [single] if !factor_needs_parens(single) => write!(f, "/{}", single),
        [single] => write!(f, "/({})", single),
        denominator => {
            write!(f, "/(")?;
            fmt_factors(f, denominator)?;
            write!(f, ")")
        },
    }
}

/// Adds two [`Expr`]s together. No simplification is done, except for flattening: if either
/// operand is an [`Expr::Add`], the terms are combined into one list, keeping their order.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), rhs) => {
                terms.push(rhs);
                Self::Add(terms)
            },
            (lhs, Self::Add(mut terms)) => {
                terms.insert(0, lhs);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

impl AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Self::int(0));
        *self = lhs + rhs;
    }
}

/// Multiplies two [`Expr`]s together. No simplification is done, except for flattening: if
/// either operand is an [`Expr::Mul`], the factors are combined into one list, keeping their
/// order.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Mul(mut factors), Self::Mul(rhs_factors)) => {
                factors.extend(rhs_factors);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), rhs) => {
                factors.push(rhs);
                Self::Mul(factors)
            },
            (lhs, Self::Mul(mut factors)) => {
                factors.insert(0, lhs);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

impl MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        let lhs = std::mem::replace(self, Self::int(1));
        *self = lhs * rhs;
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, in which case the number is negated.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Integer(int)) => Self::Primary(Primary::Integer(-int)),
            Self::Primary(Primary::Float(float)) => Self::Primary(Primary::Float(-float)),
            expr => Self::int(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use plotty_parser::parser::Parser;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parse the given expression and return the [`Expr`] representation.
    fn parse_expr(input: &str) -> Expr {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        Expr::try_from(expr).unwrap()
    }

    fn sym(name: &str) -> Expr {
        Expr::symbol(name)
    }

    #[test]
    fn strict_equality() {
        let a = parse_expr("2(x + (y - 5))");
        let b = parse_expr("(y - 5 + x) * 2");
        assert_eq!(a, b);
        assert_ne!(parse_expr("x*x*y"), parse_expr("x*y*y"));
    }

    #[test]
    fn conversion_keeps_order() {
        assert_eq!(
            parse_expr("a*sin(k*x) + c"),
            Expr::Add(vec![
                Expr::Mul(vec![sym("a"), Expr::call("sin", vec![Expr::Mul(vec![sym("k"), sym("x")])])]),
                sym("c"),
            ]),
        );
        assert_eq!(
            parse_expr("x - 1/2"),
            Expr::Add(vec![sym("x"), Expr::Mul(vec![Expr::int(-1), Expr::int(2).recip()])]),
        );
    }

    #[test]
    fn negation() {
        assert_eq!(parse_expr("-3"), Expr::int(-3));
        assert_eq!(parse_expr("-x^2"), Expr::Mul(vec![Expr::int(-1), sym("x").pow(Expr::int(2))]));
    }

    #[test]
    fn power_spellings() {
        assert_eq!(parse_expr("a**x"), parse_expr("a^x"));
    }

    #[test]
    fn float_literals() {
        assert_eq!(parse_expr(".5").as_float().map(|f| f.to_f64()), Some(0.5));
        assert_eq!(parse_expr("5.").as_float().map(|f| f.to_f64()), Some(5.0));
    }

    #[test]
    fn free_symbols_in_order() {
        let expr = parse_expr("w*a^pi*sin(k^10*tan(y*x)*z) + d + e^10*tan(f)");
        assert_eq!(expr.free_symbols(), vec!["w", "a", "k", "y", "x", "z", "d", "e", "f"]);
        assert_eq!(parse_expr("E^x + pi").free_symbols(), vec!["x"]);
    }

    #[test]
    fn sub_terms() {
        let expr = parse_expr("w*a^pi*sin(x) + d");
        assert!(expr.has(&parse_expr("sin(x)*a^pi")));
        assert!(expr.has(&sym("d")));
        assert!(!expr.has(&parse_expr("sin(x)*d")));
        assert!(!expr.has(&parse_expr("a*a")));
    }

    #[test]
    fn display() {
        let x = sym("x");
        let k = sym("k");
        let kx = Expr::Mul(vec![k.clone(), x.clone()]);

        assert_eq!(
            Expr::Mul(vec![sym("a"), k.clone(), Expr::call("cos", vec![kx.clone()])]).to_string(),
            "a*k*cos(k*x)",
        );
        assert_eq!(
            Expr::Mul(vec![Expr::int(2).recip(), x.clone().pow(Expr::int(2))]).to_string(),
            "x^2/2",
        );
        assert_eq!(
            Expr::Mul(vec![Expr::int(-1), Expr::call("cos", vec![kx]), k.clone().recip()]).to_string(),
            "-cos(k*x)/k",
        );
        assert_eq!(x.clone().sqrt().to_string(), "sqrt(x)");
        assert_eq!(
            x.clone().pow(Expr::Mul(vec![Expr::int(-1), Expr::int(2).recip()])).to_string(),
            "1/sqrt(x)",
        );
        assert_eq!(
            Expr::Add(vec![x.clone(), Expr::Mul(vec![Expr::int(-2), k.clone()]), Expr::int(-1)]).to_string(),
            "x - 2*k - 1",
        );
        assert_eq!(
            Expr::Add(vec![x.clone(), Expr::int(1)]).pow(k.clone()).to_string(),
            "(x + 1)^k",
        );
    }

    #[test]
    fn display_piecewise() {
        let k = sym("k");
        let expr = Expr::piecewise(k.clone().recip(), k, Expr::int(0));
        assert_eq!(expr.to_string(), "Piecewise((1/k, Ne(k, 0)), (0, True))");
    }
}
