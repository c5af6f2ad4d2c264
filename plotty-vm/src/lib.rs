//! Virtual machine that executes bytecode produced by `plotty-compiler`.
//!
//! The virtual machine evaluates a compiled expression at a value of the primary variable, which
//! can be a scalar or an array of sample points, and a list of parameter values. Scalars are
//! evaluated strictly, returning an [`EvalError`] for division by zero, domain errors, and
//! overflow. Arrays follow IEEE semantics, so that plotting a function with a singularity shows a
//! gap instead of failing.
//!
//! ```
//! use plotty_compute::{numerical::value::Value, symbolic::parse};
//! use plotty_vm::Vm;
//!
//! let vm = Vm::compile(&parse("x^2 + a").unwrap(), &["x".to_string(), "a".to_string()]).unwrap();
//! assert_eq!(vm.eval(Value::Scalar(3.0), &[1.0]), Ok(Value::Scalar(10.0)));
//! assert_eq!(vm.eval(vec![1.0, 2.0].into(), &[0.5]), Ok(Value::Array(vec![1.5, 4.5])));
//! ```

pub mod error;

pub use error::EvalError;
use plotty_compiler::{compile, CompileError, Instruction, Program};
use plotty_compute::{numerical::value::Value, symbolic::Expr};
use plotty_parser::parser::token::op::{BinOpKind, UnaryOpKind};

/// Applies a binary operator with IEEE semantics.
fn apply(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Exp => lhs.powf(rhs),
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
    }
}

/// Applies a binary operator to two scalars, returning an error instead of a non-finite result.
fn apply_strict(op: BinOpKind, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinOpKind::Div if rhs == 0.0 => return Err(EvalError::DivisionByZero),
        BinOpKind::Exp if lhs == 0.0 && rhs < 0.0 => return Err(EvalError::DivisionByZero),
        _ => {},
    }

    let out = apply(op, lhs, rhs);
    if lhs.is_finite() && rhs.is_finite() {
        if out.is_nan() {
            return Err(EvalError::Domain { function: "^" });
        } else if out.is_infinite() {
            return Err(EvalError::Overflow);
        }
    }
    Ok(out)
}

/// Applies a binary operator to two values, broadcasting scalars over arrays.
fn binary(op: BinOpKind, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Scalar(lhs), Value::Scalar(rhs)) => Ok(Value::Scalar(apply_strict(op, lhs, rhs)?)),
        (lhs, rhs) => Ok(lhs.zip_with(rhs, |l, r| apply(op, l, r))?),
    }
}

/// Applies a unary operator to a value.
fn unary(op: UnaryOpKind, operand: Value) -> Value {
    match op {
        UnaryOpKind::Neg => operand.map(|n| -n),
    }
}

/// Pops the top value off the stack.
fn pop(stack: &mut Vec<Value>) -> Result<Value, EvalError> {
    stack.pop().ok_or(EvalError::InvalidProgram)
}

/// A virtual machine that evaluates a single compiled expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Vm {
    /// The program to execute.
    program: Program,
}

impl From<Program> for Vm {
    fn from(program: Program) -> Self {
        Self { program }
    }
}

impl Vm {
    /// Compiles the given expression against the given symbols, and creates a virtual machine to
    /// evaluate it. The first symbol is the primary variable.
    pub fn compile(expr: &Expr, symbols: &[String]) -> Result<Self, CompileError> {
        Ok(Self::from(compile(expr, symbols)?))
    }

    /// Returns the compiled program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Returns the number of parameter values the program must be called with.
    pub fn param_count(&self) -> usize {
        self.program.arity().saturating_sub(1)
    }

    /// Evaluates the program with the primary variable set to `x`, and the parameters set to
    /// `params`, in order.
    pub fn eval(&self, x: Value, params: &[f64]) -> Result<Value, EvalError> {
        if params.len() != self.param_count() {
            return Err(EvalError::ArityMismatch {
                expected: self.param_count(),
                given: params.len(),
            });
        }

        let instructions = &self.program.instructions;
        let mut stack: Vec<Value> = Vec::new();
        let mut ip = 0;

        while let Some(instruction) = instructions.get(ip) {
            match *instruction {
                Instruction::LoadConst(n) => stack.push(Value::Scalar(n)),
                Instruction::LoadVar(0) => stack.push(x.clone()),
                Instruction::LoadVar(slot) => {
                    let value = params.get(slot - 1).ok_or(EvalError::InvalidProgram)?;
                    stack.push(Value::Scalar(*value));
                },
                Instruction::Binary(op) => {
                    let rhs = pop(&mut stack)?;
                    let lhs = pop(&mut stack)?;
                    stack.push(binary(op, lhs, rhs)?);
                },
                Instruction::Unary(op) => {
                    let operand = pop(&mut stack)?;
                    stack.push(unary(op, operand));
                },
                Instruction::Call(func, argc) => {
                    let start = stack.len()
                        .checked_sub(argc)
                        .ok_or(EvalError::InvalidProgram)?;
                    let args = stack.split_off(start);
                    stack.push(func.eval(args)?);
                },
                Instruction::Jump(target) => {
                    ip = target;
                    continue;
                },
                Instruction::JumpIfZero(target) => {
                    let condition = pop(&mut stack)?
                        .as_scalar()
                        .ok_or(EvalError::NonScalarCondition)?;
                    if condition == 0.0 {
                        ip = target;
                        continue;
                    }
                },
            }

            ip += 1;
        }

        pop(&mut stack)
    }
}
