//! Compiles symbolic expressions from `plotty-compute` into bytecode for `plotty-vm`.
//!
//! An expression is compiled against an ordered list of symbols, which fixes the slot each symbol
//! is loaded from: slot 0 is the primary variable, and the parameters follow in order. The
//! resulting [`Program`] must be recompiled whenever the expression or its symbol list changes.
//!
//! ```
//! use plotty_compiler::{compile, Instruction};
//! use plotty_compute::symbolic::parse;
//! use plotty_parser::parser::token::op::BinOpKind;
//!
//! let expr = parse("x - a").unwrap();
//! let program = compile(&expr, &["x".to_string(), "a".to_string()]).unwrap();
//! assert_eq!(program.instructions, vec![
//!     Instruction::LoadVar(0),
//!     Instruction::LoadVar(1),
//!     Instruction::Binary(BinOpKind::Sub),
//! ]);
//! ```

pub mod error;
pub mod expr;
pub mod instruction;

pub use error::CompileError;
pub use instruction::Instruction;
use log::debug;
use plotty_compute::symbolic::Expr;

/// A compiled expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    /// The instructions of the program.
    pub instructions: Vec<Instruction>,

    /// The symbols the program was compiled against, in slot order.
    pub symbols: Vec<String>,
}

impl Program {
    /// Returns the number of values the program must be called with: the primary variable, plus
    /// one value per parameter.
    pub fn arity(&self) -> usize {
        self.symbols.len()
    }
}

/// Trait implemented by expression nodes that can be compiled into bytecode.
pub trait Compile {
    /// Compiles the node into a sequence of [`Instruction`]s, appending them to the compiler.
    ///
    /// When executed, the instructions must leave exactly one more value on the stack than there
    /// was before.
    fn compile(&self, compiler: &mut Compiler) -> Result<(), CompileError>;
}

/// A compiler that generates bytecode instructions for a single expression.
///
/// **Note: If you're looking to evaluate an expression, you should use the [`compile`] function,
/// or the `Vm` struct found in `plotty-vm`, instead.**
#[derive(Clone, Debug)]
pub struct Compiler<'a> {
    /// The instructions generated so far.
    pub instructions: Vec<Instruction>,

    /// The symbols that can be loaded, in slot order.
    symbols: &'a [String],
}

impl<'a> Compiler<'a> {
    /// Creates a new compiler that resolves symbols against the given list.
    pub fn new(symbols: &'a [String]) -> Self {
        Self {
            instructions: Vec::new(),
            symbols,
        }
    }

    /// Adds an instruction to the program, returning its index.
    pub fn add_instr(&mut self, instruction: Instruction) -> usize {
        self.instructions.push(instruction);
        self.instructions.len() - 1
    }

    /// Points the jump instruction at the given index to the next instruction that will be
    /// added.
    pub fn patch_jump(&mut self, at: usize) {
        let target = self.instructions.len();
        if let Some(Instruction::Jump(to) | Instruction::JumpIfZero(to)) = self.instructions.get_mut(at) {
            *to = target;
        }
    }

    /// Returns the slot of the symbol with the given name, if it is one of the symbols being
    /// compiled against.
    pub fn resolve_symbol(&self, name: &str) -> Option<usize> {
        self.symbols.iter().position(|symbol| symbol == name)
    }

    /// The symbols being compiled against, in slot order.
    pub fn symbols(&self) -> &[String] {
        self.symbols
    }

    /// Finishes compilation, returning the compiled program.
    pub fn finish(self) -> Program {
        Program {
            instructions: self.instructions,
            symbols: self.symbols.to_vec(),
        }
    }
}

/// Compiles the given expression, resolving symbols against `symbols`.
pub fn compile(expr: &Expr, symbols: &[String]) -> Result<Program, CompileError> {
    let mut compiler = Compiler::new(symbols);
    expr.compile(&mut compiler)?;
    let program = compiler.finish();
    debug!(
        "compiled `{}` over {:?} into {} instructions",
        expr,
        symbols,
        program.instructions.len(),
    );
    Ok(program)
}

#[cfg(test)]
mod tests {
    use plotty_compute::{funcs, symbolic::{parse, simplify}};
    use plotty_compute::numerical::builtin::Arity;
    use plotty_parser::parser::token::op::{BinOpKind, UnaryOpKind};
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::error::{UnknownFunction, UnknownVariable, WrongArgumentCount};
    use crate::Instruction::*;

    fn symbols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn compile_str(input: &str, names: &[&str]) -> Result<Program, CompileError> {
        compile(&simplify(&parse(input).unwrap()), &symbols(names))
    }

    #[test]
    fn sine_wave() {
        let program = compile_str("a*sin(k*x) + c", &["x", "a", "k", "c"]).unwrap();
        let sin = funcs::get("sin").unwrap();
        assert_eq!(program.instructions, vec![
            LoadVar(1),
            LoadVar(2),
            LoadVar(0),
            Binary(BinOpKind::Mul),
            Call(sin, 1),
            Binary(BinOpKind::Mul),
            LoadVar(3),
            Binary(BinOpKind::Add),
        ]);
        assert_eq!(program.arity(), 4);
    }

    #[test]
    fn division_and_negation() {
        let program = compile_str("x/2", &["x"]).unwrap();
        assert_eq!(program.instructions, vec![
            LoadVar(0),
            LoadConst(2.0),
            Binary(BinOpKind::Div),
        ]);

        let program = compile_str("-x*k", &["x", "k"]).unwrap();
        assert_eq!(program.instructions, vec![
            LoadVar(0),
            LoadVar(1),
            Binary(BinOpKind::Mul),
            Unary(UnaryOpKind::Neg),
        ]);
    }

    #[test]
    fn powers_and_constants() {
        let sqrt = funcs::get("sqrt").unwrap();
        let program = compile_str("sqrt(pi*x)", &["x"]).unwrap();
        assert_eq!(program.instructions, vec![
            LoadConst(std::f64::consts::PI),
            LoadVar(0),
            Binary(BinOpKind::Mul),
            Call(sqrt, 1),
        ]);

        let program = compile_str("x^a", &["x", "a"]).unwrap();
        assert_eq!(program.instructions, vec![LoadVar(0), LoadVar(1), Binary(BinOpKind::Exp)]);
    }

    #[test]
    fn piecewise_jumps() {
        let expr = Expr::piecewise(Expr::symbol("x"), Expr::symbol("k"), Expr::int(0));
        let program = compile(&expr, &symbols(&["x", "k"])).unwrap();
        assert_eq!(program.instructions, vec![
            LoadVar(1),
            JumpIfZero(4),
            LoadVar(0),
            Jump(5),
            LoadConst(0.0),
        ]);
    }

    #[test]
    fn unknown_variable() {
        assert_eq!(
            compile_str("x + y", &["x"]),
            Err(CompileError::UnknownVariable(UnknownVariable {
                name: "y".to_string(),
                known: vec!["x".to_string()],
            })),
        );
    }

    #[test]
    fn unknown_function_suggestions() {
        let Err(CompileError::UnknownFunction(UnknownFunction { name, suggestions })) =
            compile_str("sinn(x)", &["x"])
        else {
            panic!("expected an unknown function error");
        };
        assert_eq!(name, "sinn");
        assert!(suggestions.contains(&"sin".to_string()));
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(
            compile_str("sin(x, x)", &["x"]),
            Err(CompileError::WrongArgumentCount(WrongArgumentCount {
                name: "sin",
                expected: Arity::Exact(1),
                given: 2,
            })),
        );
    }
}
