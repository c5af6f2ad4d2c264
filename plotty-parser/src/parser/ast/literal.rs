use std::{fmt, ops::Range};
use crate::parser::{
    error::Error,
    token::{Float, Int, Name},
    Parse,
    Parser,
};

/// A number literal. The digits are kept as written so that integers can be represented exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum LitNum {
    /// An integer literal, such as `16`.
    Integer {
        /// The digits of the literal.
        value: String,

        /// The region of the source code that this literal was parsed from.
        span: Range<usize>,
    },

    /// A decimal literal, such as `45.0` or `.5`.
    Float {
        /// The digits of the literal, including the decimal point.
        value: String,

        /// The region of the source code that this literal was parsed from.
        span: Range<usize>,
    },
}

impl LitNum {
    /// Returns the span of the number literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            LitNum::Integer { span, .. } | LitNum::Float { span, .. } => span.clone(),
        }
    }
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<Int>()
            .map(|num| LitNum::Integer { value: num.lexeme, span: num.span })
            .or_else(|_| input.try_parse::<Float>().map(|num| LitNum::Float { value: num.lexeme, span: num.span }))
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LitNum::Integer { value, .. } | LitNum::Float { value, .. } => write!(f, "{}", value),
        }
    }
}

/// A symbol / identifier literal. Symbols are used to represent variables and functions.
#[derive(Debug, Clone, PartialEq)]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.try_parse::<Name>()?;
        Ok(Self {
            name: token.lexeme,
            span: token.span,
        })
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a literal value.
///
/// A literal is any value that is written directly into the input, such as `2`, `0.5`, or `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<LitNum>().map(Literal::Number)
            .or_else(|_| input.try_parse::<LitSym>().map(Literal::Symbol))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
