//! Symbolic manipulation and numeric kernels for the plotty function engine.
//!
//! The [`symbolic`] module holds the expression tree that parsed input is converted into, along
//! with the canonicalizing simplifier, differentiation, and integration. The [`numerical`] and
//! [`funcs`] modules hold the value type and builtin functions used when a compiled expression is
//! evaluated.

pub mod consts;
pub mod funcs;
pub mod numerical;
pub mod primitive;
pub mod symbolic;
