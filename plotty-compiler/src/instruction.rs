use plotty_compute::numerical::builtin::Builtin;
use plotty_parser::parser::token::op::{BinOpKind, UnaryOpKind};

/// Bytecode instructions emitted by the compiler.
///
/// Each instruction corresponds to a single operation executed by the virtual machine, which uses
/// a stack-based model: instructions pop their operands off a value stack and push their result
/// back onto it.
#[derive(Debug, Clone, Copy)]
pub enum Instruction {
    /// Load a constant value (one known at compile time) onto the stack.
    LoadConst(f64),

    /// Load the value of the symbol in the given slot onto the stack. Slot 0 is the primary
    /// variable, and the remaining slots are the parameters, in order.
    LoadVar(usize),

    /// Performs the binary operation on the second-to-top and top stack values.
    Binary(BinOpKind),

    /// Performs the unary operation on the top stack value.
    Unary(UnaryOpKind),

    /// Calls the builtin function with the given number of arguments, taken from the top of the
    /// stack.
    Call(&'static dyn Builtin, usize),

    /// Jump to the instruction at the given index.
    Jump(usize),

    /// Pops the top value on the stack, and jumps to the instruction at the given index if it is
    /// exactly zero.
    ///
    /// This will result in an error if the top value is not a scalar.
    JumpIfZero(usize),
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        use Instruction::*;
        match (self, other) {
            (LoadConst(a), LoadConst(b)) => a == b,
            (LoadVar(a), LoadVar(b)) | (Jump(a), Jump(b)) | (JumpIfZero(a), JumpIfZero(b)) => a == b,
            (Binary(a), Binary(b)) => a == b,
            (Unary(a), Unary(b)) => a == b,
            (Call(f, a), Call(g, b)) => f.name() == g.name() && a == b,
            _ => false,
        }
    }
}
