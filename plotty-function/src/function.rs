use crate::{
    classifier::{classify_variables, collect_symbols, VariableNotFound},
    heuristic,
};
use log::debug;
use plotty_compiler::CompileError;
use plotty_compute::{
    numerical::value::Value,
    symbolic::{
        derivative,
        integral,
        parse,
        simplify_with_steps,
        Expr,
        SymbolicDerivativeError,
        SymbolicIntegralError,
    },
};
use plotty_parser::parser::fmt::Latex;
use plotty_vm::{EvalError, Vm};
use std::fmt;

/// An error that can occur while creating or transforming a [`SymbolicFunction`].
#[derive(Debug)]
pub enum FunctionError {
    /// The input could not be parsed.
    Parse(plotty_error::Error),

    /// The primary variable does not appear in the expression.
    VariableNotFound(VariableNotFound),

    /// The input is empty or only contains whitespace.
    EmptyInput,

    /// The expression could not be differentiated.
    Derivative(SymbolicDerivativeError),

    /// The expression could not be integrated.
    Integral(SymbolicIntegralError),

    /// The expression could not be compiled, usually because it calls an unknown function.
    Compile(CompileError),
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(_) => write!(f, "the expression could not be parsed"),
            Self::VariableNotFound(err) => write!(f, "{}", err),
            Self::EmptyInput => write!(f, "no expression was given"),
            Self::Derivative(err) => write!(f, "{}", err),
            Self::Integral(err) => write!(f, "{}", err),
            Self::Compile(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FunctionError {}

impl From<plotty_error::Error> for FunctionError {
    fn from(err: plotty_error::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<VariableNotFound> for FunctionError {
    fn from(err: VariableNotFound) -> Self {
        Self::VariableNotFound(err)
    }
}

impl From<SymbolicDerivativeError> for FunctionError {
    fn from(err: SymbolicDerivativeError) -> Self {
        Self::Derivative(err)
    }
}

impl From<SymbolicIntegralError> for FunctionError {
    fn from(err: SymbolicIntegralError) -> Self {
        Self::Integral(err)
    }
}

impl From<CompileError> for FunctionError {
    fn from(err: CompileError) -> Self {
        Self::Compile(err)
    }
}

/// A function of one primary variable and any number of parameters, kept both as a canonical
/// symbolic expression and as a compiled program that can be evaluated quickly.
///
/// A [`SymbolicFunction`] never changes once created. [`SymbolicFunction::derivative`] and
/// [`SymbolicFunction::antiderivative`] return new functions, with their own parameter list.
///
/// ```
/// use plotty_function::SymbolicFunction;
///
/// let f = SymbolicFunction::new("a*sin(k*x) + d", "x").unwrap();
/// assert_eq!(f.parameters(), ["a", "k", "d"]);
///
/// let df = f.derivative().unwrap();
/// assert_eq!(df.function_name(), "a*k*cos(k*x)");
/// assert_eq!(df.parameters(), ["a", "k"]);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolicFunction {
    /// The canonical expression.
    expr: Expr,

    /// The symbols of the expression. The first symbol is always the primary variable, and the
    /// rest are the parameters, in the order they must be given when calling the function.
    symbols: Vec<String>,

    /// The compiled expression.
    vm: Vm,

    /// The expression, typeset in LaTeX.
    latex: String,
}

impl SymbolicFunction {
    /// Parses the given source into a function of the primary variable `primary`.
    ///
    /// Fails if the source is empty, cannot be parsed, calls an unknown function, or does not
    /// depend on `primary`.
    pub fn new(source: &str, primary: &str) -> Result<Self, FunctionError> {
        if source.trim().is_empty() {
            return Err(FunctionError::EmptyInput);
        }

        let (expr, steps) = simplify_with_steps(&parse(source)?);
        if !steps.is_empty() {
            debug!("canonicalized `{}` into `{}` with {:?}", source.trim(), expr, steps);
        }
        let symbols = classify_variables(&expr, primary)?;
        Self::from_parts(expr, symbols)
    }

    /// Compiles the canonical expression against the given symbols.
    fn from_parts(expr: Expr, symbols: Vec<String>) -> Result<Self, FunctionError> {
        let vm = Vm::compile(&expr, &symbols)?;
        let latex = expr.as_display().to_string();
        debug!("compiled `{}` with symbols {:?}", expr, symbols);
        Ok(Self { expr, symbols, vm, latex })
    }

    /// Evaluates the function at `x`, which can be a single number or an array of sample points,
    /// with the parameters set to `params`, in the order given by
    /// [`SymbolicFunction::parameters`].
    pub fn call(&self, x: impl Into<Value>, params: &[f64]) -> Result<Value, EvalError> {
        self.vm.eval(x.into(), params)
    }

    /// Evaluates the function at `x`, with the parameters set to their suggested default values.
    pub fn call_with_defaults(&self, x: impl Into<Value>) -> Result<Value, EvalError> {
        let params = self.default_values()
            .into_iter()
            .map(|(_, value)| value)
            .collect::<Vec<_>>();
        self.call(x, &params)
    }

    /// Returns the suggested starting value of each parameter, in parameter order. See
    /// [`heuristic::multiplies_var`] for how they are chosen.
    pub fn default_values(&self) -> Vec<(String, f64)> {
        heuristic::default_values(&self.symbols, &self.expr)
    }

    /// Returns the canonical expression as a string. Unless it contains a piecewise expression,
    /// parsing this string gives back the same function.
    pub fn function_name(&self) -> String {
        self.expr.to_string()
    }

    /// Returns the expression typeset in LaTeX.
    pub fn latex_repr(&self) -> &str {
        &self.latex
    }

    /// Returns the parameters of the function, in the order they must be given when calling it.
    pub fn parameters(&self) -> &[String] {
        &self.symbols[1..]
    }

    /// Returns the primary variable followed by the parameters.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the name of the primary variable.
    pub fn primary(&self) -> &str {
        &self.symbols[0]
    }

    /// Returns the canonical expression.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Returns the derivative of this function with respect to the primary variable.
    ///
    /// Parameters that only appear in terms that do not depend on the primary variable are
    /// dropped. The primary variable itself is kept even if the derivative does not depend on it.
    pub fn derivative(&self) -> Result<Self, FunctionError> {
        let expr = derivative(&self.expr, self.primary())?;
        let symbols = collect_symbols(&expr, self.primary());
        Self::from_parts(expr, symbols)
    }

    /// Returns an antiderivative of this function with respect to the primary variable.
    ///
    /// If the antiderivative depends on whether a parameter is zero, the result contains a
    /// piecewise expression that picks the right branch when evaluated.
    pub fn antiderivative(&self) -> Result<Self, FunctionError> {
        let expr = integral(&self.expr, self.primary())?;
        let symbols = collect_symbols(&expr, self.primary());
        Self::from_parts(expr, symbols)
    }
}

impl fmt::Display for SymbolicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates the function at a scalar, looking up parameter values by name.
    fn eval_at(f: &SymbolicFunction, x: f64, values: &[(&str, f64)]) -> f64 {
        let params = f.parameters()
            .iter()
            .map(|param| {
                values.iter()
                    .find(|(name, _)| name == param)
                    .map(|(_, value)| *value)
                    .unwrap()
            })
            .collect::<Vec<_>>();
        f.call(x, &params).unwrap().as_scalar().unwrap()
    }

    #[test]
    fn construction() {
        let f = SymbolicFunction::new("a*sin(k*x) + c", "x").unwrap();
        assert_eq!(f.symbols(), ["x", "a", "k", "c"]);
        assert_eq!(f.primary(), "x");
        assert_eq!(f.function_name(), "a*sin(k*x) + c");
        assert_eq!(f.to_string(), "a*sin(k*x) + c");
        assert!(f.latex_repr().contains("\\sin"));
    }

    #[test]
    fn name_round_trips() {
        for source in ["a*sin(k*(x - phi)) + c", "x**2/2 - 3x + 1", "c1*exp(-x*k1) + c2*exp(x*k2) + c"] {
            let f = SymbolicFunction::new(source, "x").unwrap();
            let g = SymbolicFunction::new(&f.function_name(), "x").unwrap();
            assert_eq!(f.expr(), g.expr());
        }
    }

    #[test]
    fn rejected_input() {
        assert!(matches!(SymbolicFunction::new("   ", "x"), Err(FunctionError::EmptyInput)));
        assert!(matches!(SymbolicFunction::new("sin(", "x"), Err(FunctionError::Parse(_))));
        assert!(matches!(
            SymbolicFunction::new("a + b", "x"),
            Err(FunctionError::VariableNotFound(_)),
        ));
        assert!(matches!(SymbolicFunction::new("sine(x)", "x"), Err(FunctionError::Compile(_))));
    }

    #[test]
    fn defaults() {
        let f = SymbolicFunction::new("a*sin(k*x) + c", "x").unwrap();
        assert_eq!(f.default_values(), vec![
            ("a".to_string(), 1.0),
            ("k".to_string(), 1.0),
            ("c".to_string(), 0.0),
        ]);
        let y = f.call_with_defaults(1.0).unwrap().as_scalar().unwrap();
        assert_float_absolute_eq!(y, 1.0f64.sin());
    }

    #[test]
    fn arity_mismatch() {
        let f = SymbolicFunction::new("a*sin(k*x) + c", "x").unwrap();
        assert_eq!(f.call(1.0, &[1.0]), Err(EvalError::ArityMismatch { expected: 3, given: 1 }));
        assert_eq!(f.call(1.0, &[1.0, 1.0, 1.0, 1.0]), Err(EvalError::ArityMismatch { expected: 3, given: 4 }));

        // the function still works afterwards
        assert_eq!(f.call(0.0, &[1.0, 1.0, 2.0]), Ok(Value::Scalar(2.0)));
    }

    #[test]
    fn array_call() {
        let f = SymbolicFunction::new("a*x^2", "x").unwrap();
        assert_eq!(f.call(vec![1.0, 2.0, 3.0], &[2.0]), Ok(Value::Array(vec![2.0, 8.0, 18.0])));
    }

    #[test]
    fn derivative_matches_finite_differences() {
        let f = SymbolicFunction::new("a*sin(k*x) + d", "x").unwrap();
        let df = f.derivative().unwrap();
        assert_eq!(df.parameters(), ["a", "k"]);

        let values = [("a", 2.0), ("k", 3.0), ("d", 5.0)];
        let h = 1e-6;
        for x in [-2.0f64, -0.5, 0.0, 0.7, 1.9] {
            let expected = 2.0 * 3.0 * (3.0 * x).cos();
            assert_float_absolute_eq!(eval_at(&df, x, &values), expected, 1e-9);

            let numeric = (eval_at(&f, x + h, &values) - eval_at(&f, x - h, &values)) / (2.0 * h);
            assert_float_absolute_eq!(eval_at(&df, x, &values), numeric, 1e-5);
        }
    }

    #[test]
    fn derivative_keeps_variable() {
        let f = SymbolicFunction::new("a*x + b", "x").unwrap();
        let df = f.derivative().unwrap();
        assert_eq!(df.function_name(), "a");
        assert_eq!(df.symbols(), ["x", "a"]);
        assert_eq!(df.call(vec![1.0, 2.0], &[4.0]), Ok(Value::Scalar(4.0)));
    }

    #[test]
    fn antiderivative_round_trip() {
        let f = SymbolicFunction::new("a*sin(k*x) + d", "x").unwrap();
        let big_f = f.antiderivative().unwrap();
        assert_eq!(big_f.parameters(), ["a", "k", "d"]);

        let dd = big_f.derivative().unwrap();
        for values in [[("a", 2.0), ("k", 3.0), ("d", 5.0)], [("a", 2.0), ("k", 0.0), ("d", 5.0)]] {
            for x in [-2.0f64, -0.5, 0.0, 0.7, 1.9] {
                assert_float_absolute_eq!(eval_at(&dd, x, &values), eval_at(&f, x, &values), 1e-9);
            }
        }
    }

    #[test]
    fn antiderivative_piecewise_branches() {
        let f = SymbolicFunction::new("sin(k*x)", "x").unwrap();
        let big_f = f.antiderivative().unwrap();
        assert!(big_f.latex_repr().contains('&'));

        // k = 0: the integral of 0 is 0
        assert_float_absolute_eq!(eval_at(&big_f, 1.5, &[("k", 0.0)]), 0.0);

        // k = 2: -cos(2x)/2
        assert_float_absolute_eq!(eval_at(&big_f, 1.5, &[("k", 2.0)]), -(3.0f64).cos() / 2.0);
    }

    #[test]
    fn unsupported_transforms() {
        let f = SymbolicFunction::new("exp(x^2)", "x").unwrap();
        assert!(matches!(f.antiderivative(), Err(FunctionError::Integral(_))));

        let f = SymbolicFunction::new("gamma(x)", "x");
        assert!(matches!(f, Err(FunctionError::Compile(_))));
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Clone + Send + Sync>() {}
        assert_send_sync::<SymbolicFunction>();
    }
}
