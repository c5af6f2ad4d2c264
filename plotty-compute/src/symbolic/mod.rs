//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! Algebraic expressions in this module are represented as a tree of [`Expr`] nodes. It's similar
//! to the [`plotty_parser::parser::ast::Expr`] nodes produced by [`plotty_parser`], with the main
//! difference being that [`Expr`] nodes **flatten** out the tree structure.
//!
//! For example, the expression `x + (y + z)` would be represented internally as a single
//! [`Expr::Add`] node with _three_ children, `x`, `y`, and `z`, where as the
//! [`plotty_parser::parser::ast::Expr`] node would have two children, `x` and `(y + z)`.
//!
//! ```
//! use plotty_compute::symbolic::Expr;
//! use plotty_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let ast_expr = Parser::new("x + (y + z)").try_parse_full::<AstExpr>().unwrap();
//! let expr = Expr::try_from(ast_expr).unwrap();
//! assert_eq!(expr, Expr::Add(vec![
//!     Expr::symbol("x"),
//!     Expr::symbol("y"),
//!     Expr::symbol("z"),
//! ]));
//! ```
//!
//! # Canonical form
//!
//! Every expression the engine stores is passed through [`simplify()`] first, which rewrites it
//! into a canonical form: numbers are folded, like terms and factors are combined, and trivial
//! identities such as `x^1 = x` or `sin(0) = 0` are applied. [`derivative()`] and [`integral()`]
//! both return canonical expressions.
//!
//! ```
//! use plotty_compute::symbolic::{derivative, parse, simplify};
//!
//! let expr = simplify(&parse("x + x + x").unwrap());
//! assert_eq!(expr.to_string(), "3*x");
//!
//! let d = derivative(&parse("a*sin(k*x) + d").unwrap(), "x").unwrap();
//! assert_eq!(d.to_string(), "a*k*cos(k*x)");
//! ```

pub mod derivative;
pub mod expr;
pub mod integral;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, SymbolicDerivativeError};
pub use expr::{Expr, Primary};
pub use integral::{integral, SymbolicIntegralError};
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;

use plotty_parser::parser::{ast::Expr as AstExpr, Parser};

/// Parses the given source into an [`Expr`], without simplifying it.
pub fn parse(source: &str) -> Result<Expr, plotty_error::Error> {
    let ast = Parser::new(source).try_parse_full::<AstExpr>()?;
    Expr::try_from(ast)
}
