use plotty_compute::symbolic::Expr;
use crate::{Compile, CompileError, Compiler, Instruction};

/// Compiles a piecewise expression into a conditional jump over the value branch. Only the
/// selected branch is evaluated.
pub fn compile_piecewise(
    value: &Expr,
    guard: &Expr,
    otherwise: &Expr,
    compiler: &mut Compiler,
) -> Result<(), CompileError> {
    guard.compile(compiler)?;
    let to_otherwise = compiler.add_instr(Instruction::JumpIfZero(0));

    value.compile(compiler)?;
    let to_end = compiler.add_instr(Instruction::Jump(0));

    compiler.patch_jump(to_otherwise);
    otherwise.compile(compiler)?;
    compiler.patch_jump(to_end);

    Ok(())
}
