//! The plotty function engine.
//!
//! A [`SymbolicFunction`] is a function of one primary variable (usually `x`) and any number of
//! parameters, parsed from a string such as `a*sin(k*x) + c`. It is stored as a canonical symbolic
//! expression, which can be differentiated and integrated, and as a compiled program, which can be
//! evaluated quickly over a grid of sample points.
//!
//! A [`FunctionSlot`] holds the function currently being plotted, along with the values of its
//! parameters. It only accepts new functions and parameter values that can be evaluated at a probe
//! point, and keeps the previous state otherwise.
//!
//! ```
//! use plotty_function::{sampling::linspace, EngineOptions, FunctionSlot};
//!
//! let mut slot = FunctionSlot::new(EngineOptions::default()).unwrap();
//! slot.set_preset("quadratic").unwrap();
//! slot.set_parameters(&[1.0, 0.0, -1.0]).unwrap();
//! assert_eq!(slot.sample(&linspace(-1.0, 1.0, 3)).unwrap(), vec![0.0, -1.0, 0.0]);
//!
//! slot.differentiate().unwrap();
//! assert_eq!(slot.function().function_name(), "2*a*x + b");
//! ```

pub mod classifier;
pub mod function;
pub mod heuristic;
pub mod options;
pub mod presets;
pub mod sampling;
pub mod slot;
pub mod validator;

pub use function::{FunctionError, SymbolicFunction};
pub use options::{EngineOptions, SliderRange};
pub use slot::{FunctionSlot, Rejection};
