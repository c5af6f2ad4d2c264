//! Numeric evaluation support: the [`Value`](value::Value) type that compiled expressions operate
//! on, and the [`Builtin`](builtin::Builtin) trait implemented by every function in
//! [`funcs`](crate::funcs).

pub mod builtin;
pub mod value;
