pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use error::{kind::{self, ErrorKind}, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This macro also catches fatal errors and immediately short-circuits the parsing process.
///
/// If none of the functions succeed, the macro evaluates to the error of the last attempted
/// parsing function.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// input into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Set the cursor of this parser to the cursor of another parser. Both parsers are expected
    /// to be parsing the same tokens (i.e. one is a clone of the other).
    pub fn set_cursor(&mut self, other: &Self) {
        self.cursor = other.cursor;
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a comma.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.cursor = start;
                    return Err(err);
                },
            }

            if self.try_parse::<token::Comma>().is_err() {
                return Ok(values);
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser (trailing whitespace is allowed); if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.skip_whitespace();
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(self.error(kind::UnclosedParenthesis { opening: false }))
            },
            Some(_) => Err(self.error(kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, this means `op op a` is evaluated as `op (op a)` (the operators appear to the
    /// left of the operand).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^` or `**`).
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        call::Call,
        expr::Expr,
        literal::{Literal, LitNum, LitSym},
        paren::Paren,
        unary::Unary,
    };
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn int(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Number(LitNum::Integer { value: value.to_string(), span }))
    }

    fn binary(lhs: Expr, kind: BinOpKind, implicit: bool, op_span: Range<usize>, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp { kind, implicit, span: op_span },
            rhs: Box::new(rhs),
            span,
        })
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, int("16", 0..2));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("45.0");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, Expr::Literal(Literal::Number(LitNum::Float {
            value: "45.0".to_string(),
            span: 0..4,
        })));
    }

    #[test]
    fn precedence_of_term_and_factor() {
        let mut parser = Parser::new("a + b * c");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, binary(
            sym("a", 0..1),
            BinOpKind::Add,
            false,
            2..3,
            binary(sym("b", 4..5), BinOpKind::Mul, false, 6..7, sym("c", 8..9)),
        ));
    }

    #[test]
    fn left_associative_sub() {
        let mut parser = Parser::new("a-b-c");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, binary(
            binary(sym("a", 0..1), BinOpKind::Sub, false, 1..2, sym("b", 2..3)),
            BinOpKind::Sub,
            false,
            3..4,
            sym("c", 4..5),
        ));
    }

    #[test]
    fn right_associative_exp() {
        let mut parser = Parser::new("a^b**c");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, binary(
            sym("a", 0..1),
            BinOpKind::Exp,
            false,
            1..2,
            binary(sym("b", 2..3), BinOpKind::Exp, false, 3..5, sym("c", 5..6)),
        ));
    }

    #[test]
    fn neg_binds_looser_than_exp() {
        let mut parser = Parser::new("-x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(binary(sym("x", 1..2), BinOpKind::Exp, false, 2..3, int("2", 3..4))),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn implicit_multiplication() {
        let mut parser = Parser::new("3x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, binary(
            int("3", 0..1),
            BinOpKind::Mul,
            true,
            1..1,
            binary(sym("x", 1..2), BinOpKind::Exp, false, 2..3, int("2", 3..4)),
        ));
    }

    #[test]
    fn implicit_multiplication_with_paren() {
        let mut parser = Parser::new("k(x - phi)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        // `k(...)` is a function call syntactically
        assert_eq!(expr, Expr::Call(Call {
            name: LitSym { name: "k".to_string(), span: 0..1 },
            args: vec![binary(sym("x", 2..3), BinOpKind::Sub, false, 4..5, sym("phi", 6..9))],
            span: 0..10,
            paren_span: 1..10,
        }));

        let mut parser = Parser::new("2(x + 1)");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, binary(
            int("2", 0..1),
            BinOpKind::Mul,
            true,
            1..1,
            Expr::Paren(Paren {
                expr: Box::new(binary(sym("x", 2..3), BinOpKind::Add, false, 4..5, int("1", 6..7))),
                span: 1..8,
            }),
        ));
    }

    #[test]
    fn call_with_many_args() {
        let mut parser = Parser::new("zeros(x, a)");
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr, Expr::Call(Call {
            name: LitSym { name: "zeros".to_string(), span: 0..5 },
            args: vec![sym("x", 6..7), sym("a", 9..10)],
            span: 0..11,
            paren_span: 5..11,
        }));
    }

    #[test]
    fn display_round_trip() {
        let sources = [
            "a*sin(k*(x-phi))+c",
            "c1*exp(-x*k1)+c2*exp(x*k2)+c",
            "a*exp(-((x-u)/sigma)^2/2)/(sqrt(pi*sigma^2))",
            "3x^2+2x",
        ];

        for source in sources {
            let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
            assert_eq!(expr.to_string(), source);
        }
    }

    #[test]
    fn unexpected_eof() {
        let mut parser = Parser::new("x +");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }

    #[test]
    fn unclosed_paren() {
        let mut parser = Parser::new("sin(x");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(format!("{:?}", err.kind), "UnclosedParenthesis { opening: true }");

        let mut parser = Parser::new("x + 1)");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(format!("{:?}", err.kind), "UnclosedParenthesis { opening: false }");
    }

    #[test]
    fn empty_paren() {
        let mut parser = Parser::new("2 * ()");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(format!("{:?}", err.kind), "EmptyParenthesis");
    }

    #[test]
    fn stray_symbol() {
        let mut parser = Parser::new("x $ 2");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }

    #[test]
    fn empty_input() {
        let mut parser = Parser::new("   ");
        let err = parser.try_parse_full::<Expr>().unwrap_err();
        assert_eq!(format!("{:?}", err.kind), "UnexpectedEof");
    }
}
