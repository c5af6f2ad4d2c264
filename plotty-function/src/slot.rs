use crate::{
    function::{FunctionError, SymbolicFunction},
    options::EngineOptions,
    presets::{self, PresetTable, PRESETS},
    validator::is_defined_at,
};
use log::{debug, info, warn};
use plotty_compute::numerical::value::Value;
use plotty_vm::EvalError;
use std::fmt;

/// The reason a request to change the active function or its parameters was rejected.
///
/// A rejected request leaves the [`FunctionSlot`] exactly as it was.
#[derive(Debug)]
pub enum Rejection {
    /// The new function could not be created.
    Invalid(FunctionError),

    /// The new function, or the active function with the new parameter values, cannot be
    /// evaluated at the probe point.
    Undefined {
        /// The function that was checked.
        function: String,

        /// The parameter values it was checked with.
        params: Vec<f64>,
    },

    /// There is no preset with the given name.
    UnknownPreset(String),

    /// The active function has no parameter with the given name.
    UnknownParameter(String),

    /// The wrong number of parameter values was given.
    WrongParameterCount {
        /// The number of parameters of the active function.
        expected: usize,

        /// The number of values given.
        given: usize,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{}", err),
            Self::Undefined { function, params } if params.is_empty() => {
                write!(f, "`{}` is not defined at the probe point", function)
            },
            Self::Undefined { function, params } => {
                write!(f, "`{}` is not defined at the probe point with parameters {:?}", function, params)
            },
            Self::UnknownPreset(name) => write!(f, "there is no preset named `{}`", name),
            Self::UnknownParameter(name) => write!(f, "the function has no parameter `{}`", name),
            Self::WrongParameterCount { expected, given } => {
                write!(f, "expected {} parameter values, but {} were given", expected, given)
            },
        }
    }
}

impl std::error::Error for Rejection {}

impl From<FunctionError> for Rejection {
    fn from(err: FunctionError) -> Self {
        Self::Invalid(err)
    }
}

/// Logs the rejection and returns it as an error.
fn reject<T>(action: &str, rejection: Rejection) -> Result<T, Rejection> {
    warn!("rejected {}: {}", action, rejection);
    Err(rejection)
}

/// Holds the active function and the current values of its parameters.
///
/// Every operation that changes the function checks the candidate with
/// [`is_defined_at`] first, and only replaces the active function if the check passes. A
/// rejected operation leaves the slot untouched and returns the reason as a [`Rejection`].
///
/// ```
/// use plotty_function::{EngineOptions, FunctionSlot};
///
/// let mut slot = FunctionSlot::new(EngineOptions::default()).unwrap();
/// slot.set_function("a*sin(k*x) + c").unwrap();
/// assert_eq!(slot.params(), [1.0, 1.0, 0.0]);
///
/// // `p` starts at zero, so `1/p` cannot be evaluated
/// assert!(slot.set_function("1/p + x").is_err());
/// assert_eq!(slot.function().function_name(), "a*sin(k*x) + c");
/// ```
#[derive(Debug, Clone)]
pub struct FunctionSlot {
    /// The engine options.
    options: EngineOptions,

    /// The presets that can be set by name.
    presets: PresetTable,

    /// The active function.
    function: SymbolicFunction,

    /// The values of the parameters of the active function, in parameter order.
    params: Vec<f64>,
}

impl FunctionSlot {
    /// Creates a slot holding [`EngineOptions::initial_function`], with the default presets.
    pub fn new(options: EngineOptions) -> Result<Self, FunctionError> {
        Self::with_presets(options, PRESETS)
    }

    /// Creates a slot holding [`EngineOptions::initial_function`], with the given presets.
    pub fn with_presets(options: EngineOptions, presets: PresetTable) -> Result<Self, FunctionError> {
        let function = SymbolicFunction::new(&options.initial_function, &options.primary_variable)?;
        let params = default_params(&function);
        Ok(Self { options, presets, function, params })
    }

    /// Returns the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns the available presets.
    pub fn presets(&self) -> PresetTable {
        self.presets
    }

    /// Returns the active function.
    pub fn function(&self) -> &SymbolicFunction {
        &self.function
    }

    /// Returns the current parameter values, in parameter order.
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Returns each parameter paired with its current value.
    pub fn named_params(&self) -> Vec<(&str, f64)> {
        self.function.parameters()
            .iter()
            .map(String::as_str)
            .zip(self.params.iter().copied())
            .collect()
    }

    /// Replaces the active function with the function parsed from `source`. The parameters are
    /// set to their suggested default values.
    pub fn set_function(&mut self, source: &str) -> Result<(), Rejection> {
        let candidate = match SymbolicFunction::new(source, &self.options.primary_variable) {
            Ok(function) => function,
            Err(err) => return reject("new function", err.into()),
        };

        let params = default_params(&candidate);
        self.commit("new function", candidate, params)
    }

    /// Replaces the active function with the preset of the given name.
    pub fn set_preset(&mut self, name: &str) -> Result<(), Rejection> {
        match presets::find(self.presets, name) {
            Some(source) => self.set_function(source),
            None => reject("preset", Rejection::UnknownPreset(name.to_string())),
        }
    }

    /// Replaces the active function with its derivative.
    pub fn differentiate(&mut self) -> Result<(), Rejection> {
        match self.function.derivative() {
            Ok(derivative) => self.transform("derivative", derivative),
            Err(err) => reject("derivative", err.into()),
        }
    }

    /// Replaces the active function with its antiderivative.
    pub fn antidifferentiate(&mut self) -> Result<(), Rejection> {
        match self.function.antiderivative() {
            Ok(antiderivative) => self.transform("antiderivative", antiderivative),
            Err(err) => reject("antiderivative", err.into()),
        }
    }

    /// Commits the result of a transform. Parameters that the transformed function shares with the
    /// active function keep their current values, and new parameters start at their default values.
    /// If the transformed function is not defined with those values, every parameter is reset to
    /// its default value instead.
    fn transform(&mut self, action: &str, candidate: SymbolicFunction) -> Result<(), Rejection> {
        let defaults = default_params(&candidate);
        let carried = candidate.parameters()
            .iter()
            .zip(&defaults)
            .map(|(name, default)| {
                self.function.parameters()
                    .iter()
                    .position(|old| old == name)
                    .map_or(*default, |i| self.params[i])
            })
            .collect::<Vec<_>>();

        if carried != defaults && !is_defined_at(&candidate, self.options.probe_point, &carried) {
            debug!("{}: `{}` is not defined with {:?}, using the default values", action, candidate, carried);
            return self.commit(action, candidate, defaults);
        }

        self.commit(action, candidate, carried)
    }

    /// Makes `candidate` the active function with the given parameter values, if it is defined at
    /// the probe point with them.
    fn commit(&mut self, action: &str, candidate: SymbolicFunction, params: Vec<f64>) -> Result<(), Rejection> {
        if !is_defined_at(&candidate, self.options.probe_point, &params) {
            return reject(action, Rejection::Undefined {
                function: candidate.function_name(),
                params,
            });
        }

        info!("{}: `{}` with parameters {:?}", action, candidate, params);
        self.function = candidate;
        self.params = params;
        Ok(())
    }

    /// Sets the values of all parameters, in parameter order.
    ///
    /// The values are only accepted if the active function is defined at the probe point with
    /// them. Otherwise the current values are kept.
    pub fn set_parameters(&mut self, values: &[f64]) -> Result<(), Rejection> {
        let expected = self.function.parameters().len();
        if values.len() != expected {
            return reject("parameters", Rejection::WrongParameterCount {
                expected,
                given: values.len(),
            });
        }

        if !is_defined_at(&self.function, self.options.probe_point, values) {
            return reject("parameters", Rejection::Undefined {
                function: self.function.function_name(),
                params: values.to_vec(),
            });
        }

        self.params = values.to_vec();
        Ok(())
    }

    /// Sets the value of a single parameter.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), Rejection> {
        let Some(index) = self.function.parameters().iter().position(|param| param == name) else {
            return reject("parameter", Rejection::UnknownParameter(name.to_string()));
        };

        let mut values = self.params.clone();
        values[index] = value;
        self.set_parameters(&values)
    }

    /// Evaluates the active function at each of the given points, with the current parameter
    /// values.
    ///
    /// Points at which the function is undefined are `NaN` or infinite.
    pub fn sample(&self, xs: &[f64]) -> Result<Vec<f64>, EvalError> {
        match self.function.call(xs.to_vec(), &self.params)? {
            Value::Array(ys) => Ok(ys),
            // the function does not depend on the primary variable
            Value::Scalar(y) => Ok(vec![y; xs.len()]),
        }
    }

    /// Returns the title to show above a plot of the active function.
    ///
    /// The title is `f(x) = ` followed by the LaTeX form of the function. If that is too long, or
    /// contains a piecewise expression, the title is just `f(x)`.
    pub fn title(&self) -> String {
        let name = format!("f({})", self.function.primary());
        let latex = self.function.latex_repr();
        if latex.contains('&') || latex.chars().count() > self.options.title_max_len {
            name
        } else {
            format!("{} = {}", name, latex)
        }
    }
}

/// Returns the suggested default value of each parameter.
fn default_params(function: &SymbolicFunction) -> Vec<f64> {
    function.default_values()
        .into_iter()
        .map(|(_, value)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::sampling::linspace;
    use pretty_assertions::assert_eq;
    use super::*;

    fn slot() -> FunctionSlot {
        FunctionSlot::new(EngineOptions::default()).unwrap()
    }

    #[test]
    fn initial_function() {
        let slot = slot();
        assert_eq!(slot.function().function_name(), "sin(x)");
        assert_eq!(slot.params(), &[] as &[f64]);
        assert_eq!(slot.title(), "f(x) = \\sin\\left(x\\right)");
    }

    #[test]
    fn set_function_uses_defaults() {
        let mut slot = slot();
        slot.set_function("a*sin(k*x) + c").unwrap();
        assert_eq!(slot.named_params(), vec![("a", 1.0), ("k", 1.0), ("c", 0.0)]);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut slot = slot();
        assert!(matches!(slot.set_function(""), Err(Rejection::Invalid(FunctionError::EmptyInput))));
        assert!(matches!(slot.set_function("  \t"), Err(Rejection::Invalid(FunctionError::EmptyInput))));
        assert_eq!(slot.function().function_name(), "sin(x)");
    }

    #[test]
    fn missing_variable_is_a_no_op() {
        let mut slot = slot();
        slot.set_function("a*x").unwrap();
        slot.set_parameters(&[3.0]).unwrap();
        assert!(matches!(
            slot.set_function("1/p"),
            Err(Rejection::Invalid(FunctionError::VariableNotFound(_))),
        ));
        assert_eq!(slot.function().function_name(), "a*x");
        assert_eq!(slot.params(), [3.0]);
    }

    #[test]
    fn undefined_function_is_rejected() {
        let mut slot = slot();
        slot.set_function("a*sin(k*x) + c").unwrap();
        assert!(matches!(slot.set_function("1/p + x"), Err(Rejection::Undefined { .. })));
        assert_eq!(slot.function().function_name(), "a*sin(k*x) + c");
        assert_eq!(slot.params(), [1.0, 1.0, 0.0]);
    }

    #[test]
    fn parse_error_is_rejected() {
        let mut slot = slot();
        assert!(matches!(slot.set_function("sin(x"), Err(Rejection::Invalid(FunctionError::Parse(_)))));
        assert_eq!(slot.function().function_name(), "sin(x)");
    }

    #[test]
    fn presets() {
        let mut slot = slot();
        slot.set_preset("quadratic").unwrap();
        assert_eq!(slot.function().parameters(), ["a", "b", "c"]);
        assert!(matches!(slot.set_preset("cubic"), Err(Rejection::UnknownPreset(_))));
        assert_eq!(slot.function().parameters(), ["a", "b", "c"]);

        let mut custom = FunctionSlot::with_presets(EngineOptions::default(), &[("line", "m*x + b")]).unwrap();
        custom.set_preset("line").unwrap();
        assert_eq!(custom.named_params(), vec![("m", 1.0), ("b", 0.0)]);
        assert!(custom.set_preset("quadratic").is_err());
    }

    #[test]
    fn differentiate_keeps_parameter_values() {
        let mut slot = slot();
        slot.set_function("a*sin(k*x) + d").unwrap();
        slot.set_parameters(&[2.0, 3.0, 5.0]).unwrap();
        slot.differentiate().unwrap();

        assert_eq!(slot.function().function_name(), "a*k*cos(k*x)");
        assert_eq!(slot.named_params(), vec![("a", 2.0), ("k", 3.0)]);

        let ys = slot.sample(&[0.0, 1.0]).unwrap();
        assert_float_absolute_eq!(ys[0], 6.0);
        assert_float_absolute_eq!(ys[1], 6.0 * 3.0f64.cos());
    }

    #[test]
    fn antidifferentiate_then_differentiate() {
        let mut slot = slot();
        slot.set_function("a*sin(k*x) + d").unwrap();
        slot.set_parameters(&[2.0, 3.0, 5.0]).unwrap();
        let xs = linspace(-3.0, 3.0, 13);
        let original = slot.sample(&xs).unwrap();

        slot.antidifferentiate().unwrap();
        assert_eq!(slot.params(), [2.0, 3.0, 5.0]);
        assert_eq!(slot.title(), "f(x)");

        slot.differentiate().unwrap();
        let round_trip = slot.sample(&xs).unwrap();
        for (a, b) in original.iter().zip(&round_trip) {
            assert_float_absolute_eq!(*a, *b, 1e-9);
        }
    }

    #[test]
    fn unsupported_transform_is_rejected() {
        let mut slot = slot();
        slot.set_function("exp(x^2)").unwrap();
        assert!(matches!(
            slot.antidifferentiate(),
            Err(Rejection::Invalid(FunctionError::Integral(_))),
        ));
        assert_eq!(slot.function().function_name(), "exp(x^2)");
    }

    #[test]
    fn undefined_transform_is_rolled_back() {
        let options = EngineOptions::default().probe_point(0.0);
        let mut slot = FunctionSlot::new(options).unwrap();
        slot.set_function("x^(3/2)").unwrap();
        slot.differentiate().unwrap();

        // the second derivative divides by sqrt(x)
        let before = slot.function().function_name();
        assert!(matches!(slot.differentiate(), Err(Rejection::Undefined { .. })));
        assert_eq!(slot.function().function_name(), before);
    }

    #[test]
    fn set_parameters() {
        let mut slot = slot();
        slot.set_function("x/b + c").unwrap();
        assert_eq!(slot.named_params(), vec![("b", 1.0), ("c", 0.0)]);

        assert!(matches!(
            slot.set_parameters(&[1.0]),
            Err(Rejection::WrongParameterCount { expected: 2, given: 1 }),
        ));
        assert!(matches!(slot.set_parameters(&[0.0, 1.0]), Err(Rejection::Undefined { .. })));
        assert_eq!(slot.params(), [1.0, 0.0]);

        slot.set_parameter("c", 4.0).unwrap();
        assert_eq!(slot.params(), [1.0, 4.0]);
        assert!(matches!(slot.set_parameter("b", 0.0), Err(Rejection::Undefined { .. })));
        assert!(matches!(slot.set_parameter("z", 1.0), Err(Rejection::UnknownParameter(_))));
        assert_eq!(slot.params(), [1.0, 4.0]);
    }

    #[test]
    fn sample_broadcasts_constants() {
        let mut slot = slot();
        slot.set_function("a*x").unwrap();
        slot.set_parameters(&[4.0]).unwrap();
        slot.differentiate().unwrap();
        assert_eq!(slot.function().function_name(), "a");
        assert_eq!(slot.sample(&[1.0, 2.0, 3.0]), Ok(vec![4.0, 4.0, 4.0]));
    }

    #[test]
    fn sample_shows_gaps() {
        let mut slot = slot();
        slot.set_function("1/x").unwrap();
        let ys = slot.sample(&[-1.0, 0.0, 1.0]).unwrap();
        assert_eq!(ys[0], -1.0);
        assert!(ys[1].is_infinite());
        assert_eq!(ys[2], 1.0);
    }

    #[test]
    fn parameters_outside_domain_are_rejected() {
        let mut slot = slot();
        assert!(matches!(slot.set_function("x + log(p)"), Err(Rejection::Undefined { .. })));
        assert_eq!(slot.function().function_name(), "sin(x)");

        slot.set_function("x + log(p + 1)").unwrap();
        assert_eq!(slot.params(), [0.0]);
        assert!(matches!(slot.set_parameter("p", -1.0), Err(Rejection::Undefined { .. })));
        assert!(matches!(slot.set_parameter("p", -2.0), Err(Rejection::Undefined { .. })));
        assert_eq!(slot.params(), [0.0]);
        assert!(slot.sample(&linspace(-1.0, 1.0, 5)).is_ok());
    }

    #[test]
    fn transform_resets_parameters_that_break_it() {
        let mut slot = slot();
        slot.set_preset("power").unwrap();
        assert_eq!(slot.params(), [0.0, 0.0]);

        // `a = 0` would make the `log(a)` guard of the antiderivative undefined
        slot.antidifferentiate().unwrap();
        assert_eq!(slot.params(), [1.0, 1.0]);
        assert_eq!(slot.sample(&[1.0, 2.0]), Ok(vec![2.0, 4.0]));
    }

    #[test]
    fn every_commit_can_be_sampled() {
        let xs = linspace(-3.0, 3.0, 25);
        let mut slot = slot();
        for (name, _) in PRESETS {
            slot.set_preset(name).unwrap();
            assert!(slot.sample(&xs).is_ok(), "{}", name);

            if slot.differentiate().is_ok() {
                assert!(slot.sample(&xs).is_ok(), "derivative of {}", name);
            }
            if slot.antidifferentiate().is_ok() {
                assert!(slot.sample(&xs).is_ok(), "antiderivative of {}", name);
            }
        }
    }

    #[test]
    fn long_titles_are_shortened() {
        let mut slot = FunctionSlot::new(EngineOptions::default().title_max_len(10)).unwrap();
        slot.set_function("a*sin(k*x) + c").unwrap();
        assert_eq!(slot.title(), "f(x)");
    }
}
