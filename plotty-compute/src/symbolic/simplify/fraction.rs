//! Tools to help fold numeric constants.
//!
//! Exact numbers are stored in an expression as integers and reciprocals of integers: the
//! fraction `p/q` is the product of [`Primary::Integer`] `p` and [`Expr::Exp`] `q^-1`. This
//! module converts between that representation and [`Number`], which can be added and multiplied
//! directly.

use crate::primitive::{float, int, PRECISION};
use crate::symbolic::expr::{Expr, Primary};
use rug::{Float, Rational};
use std::ops::{Add, Mul};

/// A numeric constant extracted from an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An exact fraction.
    Rational(Rational),

    /// A decimal number. Any operation involving a float produces a float.
    Float(Float),
}

impl Number {
    /// The exact number one.
    pub fn one() -> Self {
        Self::Rational(Rational::from(1))
    }

    /// Returns the number represented by the given expression, if it is made only of integers,
    /// floats, and reciprocals of nonzero integers.
    pub fn from_expr(expr: &Expr) -> Option<Self> {
        match expr {
            Expr::Primary(Primary::Integer(n)) => Some(Self::Rational(Rational::from(n.clone()))),
            Expr::Primary(Primary::Float(n)) => Some(Self::Float(n.clone())),
            Expr::Exp(..) => {
                let den = expr.as_integer_recip()?;
                if den.is_zero() {
                    None
                } else {
                    Some(Self::Rational(Rational::from((int(1), den.clone()))))
                }
            },
            Expr::Mul(factors) => factors.iter()
                .map(Self::from_expr)
                .try_fold(Self::one(), |acc, n| Some(acc * n?)),
            _ => None,
        }
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(n) => *n == 0,
            Self::Float(n) => n.is_zero(),
        }
    }

    /// Returns true if the number is exactly the rational one. The float `1.0` is not considered
    /// to be one, so that it is not removed from products.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Rational(n) if *n == 1)
    }

    /// Converts the number into the factors used to represent it in a product, in canonical
    /// order. The number one is represented by no factors at all.
    pub fn into_factors(self) -> Vec<Expr> {
        match self {
            Self::Rational(n) => {
                let (numer, denom) = n.into_numer_denom();
                let mut factors = Vec::with_capacity(2);
                if numer != 1 || denom == 1 {
                    factors.push(Expr::Primary(Primary::Integer(numer)));
                }
                if denom != 1 {
                    factors.push(Expr::Primary(Primary::Integer(denom)).recip());
                }
                if factors.len() == 1 && factors[0].is_one() {
                    factors.clear();
                }
                factors
            },
            Self::Float(n) => vec![Expr::Primary(Primary::Float(n))],
        }
    }

    /// Converts the number into an expression.
    pub fn into_expr(self) -> Expr {
        Expr::Mul(self.into_factors()).downgrade()
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Rational(lhs), Self::Rational(rhs)) => Self::Rational(lhs + rhs),
            (Self::Float(lhs), Self::Float(rhs)) => Self::Float(lhs + rhs),
            (Self::Float(lhs), Self::Rational(rhs)) | (Self::Rational(rhs), Self::Float(lhs)) => {
                Self::Float(lhs + rhs)
            },
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Rational(lhs), Self::Rational(rhs)) => Self::Rational(lhs * rhs),
            (Self::Float(lhs), Self::Float(rhs)) => Self::Float(lhs * rhs),
            (Self::Float(lhs), Self::Rational(rhs)) | (Self::Rational(rhs), Self::Float(lhs)) => {
                Self::Float(lhs * float(rhs))
            },
        }
    }
}

/// Create an [`Expr`] representing a fraction with the given numerator and denominator.
///
/// The representation is an [`Expr::Mul`] containing two factors. The first factor is the
/// numerator, and the second factor is the denominator raised to the power of -1.
pub(crate) fn make_fraction(numerator: Expr, denominator: Expr) -> Expr {
    numerator * denominator.recip()
}

/// Converts a float into the float expression, or [`None`] if the value is not finite.
pub(crate) fn finite_float(n: Float) -> Option<Expr> {
    if n.is_finite() {
        Some(Expr::Primary(Primary::Float(Float::with_val(PRECISION, n))))
    } else {
        None
    }
}
