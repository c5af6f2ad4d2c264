use plotty_compute::{funcs, symbolic::Expr};
use plotty_parser::parser::token::op::{BinOpKind, UnaryOpKind};
use crate::{Compile, CompileError, Compiler, Instruction};

/// Compiles a sum, subtracting visibly negative terms instead of adding them.
pub fn compile_sum(terms: &[Expr], compiler: &mut Compiler) -> Result<(), CompileError> {
    let Some((first, rest)) = terms.split_first() else {
        compiler.add_instr(Instruction::LoadConst(0.0));
        return Ok(());
    };

    first.compile(compiler)?;
    for term in rest {
        match term.strip_negation() {
            Some(abs) => {
                abs.compile(compiler)?;
                compiler.add_instr(Instruction::Binary(BinOpKind::Sub));
            },
            None => {
                term.compile(compiler)?;
                compiler.add_instr(Instruction::Binary(BinOpKind::Add));
            },
        }
    }

    Ok(())
}

/// Compiles `base^exp`, where `exp` is not visibly negative.
fn compile_power(base: &Expr, exp: &Expr, compiler: &mut Compiler) -> Result<(), CompileError> {
    base.compile(compiler)?;
    if exp.is_one() {
        return Ok(());
    }

    match funcs::get("sqrt") {
        Some(sqrt) if exp.as_integer_recip().is_some_and(|n| *n == 2) => {
            compiler.add_instr(Instruction::Call(sqrt, 1));
        },
        _ => {
            exp.compile(compiler)?;
            compiler.add_instr(Instruction::Binary(BinOpKind::Exp));
        },
    }

    Ok(())
}

/// Compiles a single factor of a product that is not a reciprocal.
fn compile_factor(factor: &Expr, compiler: &mut Compiler) -> Result<(), CompileError> {
    match factor {
        Expr::Exp(base, exp) => compile_power(base, exp, compiler),
        factor => factor.compile(compiler),
    }
}

/// Compiles a product. Factors with a visibly negative exponent, such as `x^-1`, are compiled as
/// divisors, and a leading `-1` is compiled as a negation.
pub fn compile_product(factors: &[Expr], compiler: &mut Compiler) -> Result<(), CompileError> {
    let (negate, factors) = match factors.split_first() {
        Some((first, rest)) if !rest.is_empty() && first.as_integer().is_some_and(|n| *n == -1) => {
            (true, rest)
        },
        _ => (false, factors),
    };

    let mut numerator = Vec::with_capacity(factors.len());
    let mut denominator = Vec::new();
    for factor in factors {
        match factor {
            Expr::Exp(base, exp) => match exp.strip_negation() {
                Some(exp) => denominator.push((&**base, exp)),
                None => numerator.push(factor),
            },
            factor => numerator.push(factor),
        }
    }

    match numerator.split_first() {
        Some((first, rest)) => {
            compile_factor(first, compiler)?;
            for factor in rest {
                compile_factor(factor, compiler)?;
                compiler.add_instr(Instruction::Binary(BinOpKind::Mul));
            }
        },
        None => {
            compiler.add_instr(Instruction::LoadConst(1.0));
        },
    }

    for (base, exp) in denominator {
        compile_power(base, &exp, compiler)?;
        compiler.add_instr(Instruction::Binary(BinOpKind::Div));
    }

    if negate {
        compiler.add_instr(Instruction::Unary(UnaryOpKind::Neg));
    }

    Ok(())
}
