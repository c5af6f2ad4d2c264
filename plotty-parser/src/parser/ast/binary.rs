use std::{fmt, ops::Range};
use crate::parser::{
    ast::{expr::{Expr, Primary}, literal::Literal, unary::Unary},
    error::{kind, Error},
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};

/// A binary operator, or implicit multiplication.
#[derive(Debug, Clone, PartialEq)]
enum BinOpExt {
    /// A binary operator, such as `+` or `*`.
    Op(BinOp),

    /// Implicit multiplication, such as `2x` or `3(x + 1)`.
    ///
    /// This is not a real operator, but it is treated as one for the purposes of parsing.
    ImplicitMultiplication,
}

impl BinOpExt {
    /// Returns the precedence of the binary operator.
    fn precedence(&self) -> Precedence {
        match self {
            BinOpExt::Op(op) => op.precedence(),
            BinOpExt::ImplicitMultiplication => Precedence::Factor,
        }
    }
}

impl From<BinOp> for BinOpExt {
    fn from(op: BinOp) -> Self {
        BinOpExt::Op(op)
    }
}

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Creates the node for an implicit multiplication of `lhs` and `rhs`.
    fn implicit_mul(lhs: Expr, rhs: Expr) -> Expr {
        let op_span = lhs.span().end..rhs.span().start;
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp {
                kind: BinOpKind::Mul,
                implicit: true,
                span: op_span,
            },
            rhs: Box::new(rhs),
            span,
        })
    }

    /// Attempts to parse the right-hand side of an implicit multiplication: a primary expression,
    /// along with any exponent applied to it. Returns `Ok(None)` if there is no such expression.
    fn parse_implicit_operand(input: &mut Parser) -> Result<Option<Expr>, Error> {
        match input.try_parse::<Primary>() {
            Ok(primary) => Self::parse_expr(input, primary.into(), Precedence::Exp).map(Some),
            Err(err) if err.fatal => Err(err),
            Err(_) => Ok(None),
        }
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    fn complete_rhs(
        input: &mut Parser,
        lhs: Expr,
        op: BinOpExt,
        mut rhs: Expr,
    ) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, we should check the precedence of the
            // following operator, if any
            // this is because we can't parse an expression like `3 + 4 * 5`, as (3 + 4) * 5
            let mut input_ahead = input.clone();
            if let Ok(next_op) = input_ahead.try_parse::<BinOp>() {
                if next_op.precedence() > precedence
                    || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right) {
                    // this operator has a higher precedence or it is right associative, so we
                    // should parse its expression starting with `rhs` first
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                } else {
                    // lower precedence, or equal precedence and left-associativity, as in
                    // `1 * 2 + 3` or `1 * 2 * 3`
                    //
                    // let `lhs` become `1 * 2`; the operator is parsed by the outer loop
                    break;
                }
            } else {
                // there is no operator; check if there is a primary expression instead
                // if there is, this is implicit multiplication
                //
                // if the previous operator has higher or equal precedence, we cannot give
                // priority to implicit multiplication
                if precedence >= Precedence::Factor {
                    break;
                }

                match Self::parse_implicit_operand(input)? {
                    Some(expr) => rhs = Self::implicit_mul(rhs, expr),
                    None => break,
                }
            }
        }

        // create the binary node representing `lhs op rhs`
        match op {
            BinOpExt::Op(op) => {
                let span = lhs.span().start..rhs.span().end;
                Ok(Expr::Binary(Binary {
                    lhs: Box::new(lhs),
                    op,
                    rhs: Box::new(rhs),
                    span,
                }))
            },
            BinOpExt::ImplicitMultiplication => Ok(Self::implicit_mul(lhs, rhs)),
        }
    }

    /// Parses a binary expression starting with the given left-hand side, consuming operators
    /// with a precedence of at least `precedence`.
    pub fn parse_expr(
        input: &mut Parser,
        mut lhs: Expr,
        precedence: Precedence,
    ) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            if let Ok(op) = input_ahead.try_parse_then::<BinOp, _>(|bin_op, input| {
                if bin_op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(kind::NonFatal))
                }
            }) {
                input.set_cursor(&input_ahead);
                let rhs = Unary::parse_or_lower(input)?;
                lhs = Self::complete_rhs(input, lhs, op.into(), rhs)?;
            } else if Precedence::Factor >= precedence {
                // implicit multiplication test
                //
                // ensure that we get here because there is *no* operator, not because the
                // operator has lower precedence
                if input_ahead.try_parse::<BinOp>().is_ok() {
                    break;
                }

                match input.try_parse::<Primary>() {
                    Ok(primary) => {
                        lhs = Self::complete_rhs(input, lhs, BinOpExt::ImplicitMultiplication, primary.into())?;
                    },
                    Err(err) if err.fatal => return Err(err),
                    Err(_) => break,
                }
            } else {
                break;
            }
        }

        Ok(lhs)
    }
}

/// Returns true if writing `lhs` directly followed by `rhs` would lex differently than the two
/// expressions on their own (e.g. `k` and `x` becoming the symbol `kx`).
fn needs_space(lhs: &Expr, lhs_str: &str, rhs_str: &str) -> bool {
    let (Some(last), Some(first)) = (lhs_str.chars().last(), rhs_str.chars().next()) else {
        return false;
    };
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '.';
    if !is_word(last) || !is_word(first) {
        return false;
    }

    // `2x` is unambiguous, but `2 3` and `2 .5` are not
    let lhs_is_number = matches!(lhs.innermost(), Expr::Literal(Literal::Number(_)))
        && !lhs_str.ends_with(')');
    !(lhs_is_number && first.is_ascii_alphabetic())
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op.implicit {
            let (lhs, rhs) = (self.lhs.to_string(), self.rhs.to_string());
            if needs_space(&self.lhs, &lhs, &rhs) {
                write!(f, "{} {}", lhs, rhs)
            } else {
                write!(f, "{}{}", lhs, rhs)
            }
        } else {
            write!(f, "{}{}{}", self.lhs, self.op, self.rhs)
        }
    }
}
