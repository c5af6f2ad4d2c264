//! Tokenizer and parser for the algebraic expressions accepted by the plotty function engine.
//!
//! The grammar is a small arithmetic language: number literals, symbols, function calls,
//! parenthesized groups, unary negation, and the binary operators `+`, `-`, `*`, `/`, and `^`
//! (also written `**`). Multiplication can be implicit, as in `2x` or `k(x - phi)`.
//!
//! ```
//! use plotty_parser::parser::{ast::Expr, Parser};
//!
//! let expr = Parser::new("a*sin(k x) + c").try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "a*sin(k x)+c");
//! ```

pub mod parser;
pub mod tokenizer;
