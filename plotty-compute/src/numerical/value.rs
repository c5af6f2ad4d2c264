use std::fmt::{Display, Formatter};

/// The value a compiled expression operates on: either a single number, or a homogeneous array of
/// numbers, such as a grid of sample points.
///
/// Operations between a [`Value::Scalar`] and a [`Value::Array`] broadcast the scalar over every
/// element of the array. Operations between two arrays are element-wise, and require both arrays
/// to have the same length.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single floating-point value.
    Scalar(f64),

    /// An array of floating-point values.
    Array(Vec<f64>),
}

/// Two arrays of different lengths were combined element-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the left-hand array.
    pub lhs: usize,

    /// Length of the right-hand array.
    pub rhs: usize,
}

impl Display for LengthMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot combine arrays of length {} and {}", self.lhs, self.rhs)
    }
}

impl std::error::Error for LengthMismatch {}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "Scalar",
            Value::Array(_) => "Array",
        }
    }

    /// Returns true if the value is a [`Value::Scalar`].
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// If the value is a [`Value::Scalar`], returns the contained number.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(n) => Some(*n),
            Value::Array(_) => None,
        }
    }

    /// Returns the number of elements in the value. A scalar has length 1.
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Array(values) => values.len(),
        }
    }

    /// Returns true if the value is an empty array.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Array(values) if values.is_empty())
    }

    /// Applies `f` to every element of the value.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Value {
        match self {
            Value::Scalar(n) => Value::Scalar(f(n)),
            Value::Array(mut values) => {
                values.iter_mut().for_each(|n| *n = f(*n));
                Value::Array(values)
            },
        }
    }

    /// Combines two values element-wise with `f`, broadcasting scalars over arrays.
    pub fn zip_with(self, rhs: Value, f: impl Fn(f64, f64) -> f64) -> Result<Value, LengthMismatch> {
        match (self, rhs) {
            (Value::Scalar(lhs), Value::Scalar(rhs)) => Ok(Value::Scalar(f(lhs, rhs))),
            (Value::Scalar(lhs), Value::Array(mut rhs)) => {
                rhs.iter_mut().for_each(|n| *n = f(lhs, *n));
                Ok(Value::Array(rhs))
            },
            (Value::Array(mut lhs), Value::Scalar(rhs)) => {
                lhs.iter_mut().for_each(|n| *n = f(*n, rhs));
                Ok(Value::Array(lhs))
            },
            (Value::Array(mut lhs), Value::Array(rhs)) => {
                if lhs.len() != rhs.len() {
                    return Err(LengthMismatch { lhs: lhs.len(), rhs: rhs.len() });
                }
                lhs.iter_mut().zip(rhs).for_each(|(l, r)| *l = f(*l, r));
                Ok(Value::Array(lhs))
            },
        }
    }

    /// Expands the value into a vector of `len` elements. A scalar is repeated, and an array is
    /// returned as-is.
    pub fn broadcast_to(self, len: usize) -> Vec<f64> {
        match self {
            Value::Scalar(n) => vec![n; len],
            Value::Array(values) => values,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(n)
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Array(values)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(n) => write!(f, "{}", n),
            Value::Array(values) => {
                write!(f, "[")?;
                for (i, n) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", n)?;
                }
                write!(f, "]")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn broadcast_scalar_over_array() {
        let sum = Value::Scalar(1.0).zip_with(Value::Array(vec![1.0, 2.0, 3.0]), |a, b| a + b);
        assert_eq!(sum, Ok(Value::Array(vec![2.0, 3.0, 4.0])));

        let quot = Value::Array(vec![2.0, 4.0]).zip_with(Value::Scalar(2.0), |a, b| a / b);
        assert_eq!(quot, Ok(Value::Array(vec![1.0, 2.0])));
    }

    #[test]
    fn mismatched_arrays() {
        let err = Value::Array(vec![1.0, 2.0]).zip_with(Value::Array(vec![1.0]), |a, b| a * b);
        assert_eq!(err, Err(LengthMismatch { lhs: 2, rhs: 1 }));
    }

    #[test]
    fn scalar_broadcast_to_samples() {
        assert_eq!(Value::Scalar(0.0).broadcast_to(3), vec![0.0, 0.0, 0.0]);
        assert_eq!(Value::Array(vec![1.0]).broadcast_to(3), vec![1.0]);
    }
}
