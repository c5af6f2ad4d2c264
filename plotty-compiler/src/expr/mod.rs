//! Implementations of [`Compile`](crate::Compile) for the nodes of a symbolic expression.

mod arith;
mod piecewise;
mod primary;

use plotty_compute::symbolic::Expr;
use crate::{CompileError, Compile, Compiler};

impl Compile for Expr {
    fn compile(&self, compiler: &mut Compiler) -> Result<(), CompileError> {
        match self {
            Expr::Primary(primary) => primary.compile(compiler),
            Expr::Add(terms) => arith::compile_sum(terms, compiler),
            Expr::Mul(factors) => arith::compile_product(factors, compiler),
            Expr::Exp(..) => arith::compile_product(std::slice::from_ref(self), compiler),
            Expr::Piecewise { value, guard, otherwise } => {
                piecewise::compile_piecewise(value, guard, otherwise, compiler)
            },
        }
    }
}
