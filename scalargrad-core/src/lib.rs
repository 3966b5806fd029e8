//! # scalargrad-core
//!
//! A scalar-valued reverse-mode automatic differentiation engine.
//!
//! Arithmetic on [`Var`] handles records a computation graph inside a [`Graph`]
//! arena while computing values eagerly. Calling [`Var::backward`] on a result
//! walks that graph once, in reverse topological order, and accumulates the
//! gradient of the result with respect to every upstream node.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.parameter(2.0);
//! let b = graph.parameter(-3.0);
//! let c = graph.parameter(10.0);
//! let e = (a * b + c).tanh();
//! e.backward().unwrap();
//! assert!((c.grad() - (1.0 - e.data() * e.data())).abs() < 1e-12);
//! ```
//!
//! The [`nn`] module builds a tiny multi-layer perceptron on top of the engine.

pub mod autograd;
pub mod nn;
pub mod ops;
pub mod var;

pub mod error;
pub use error::ScalarGradError;

pub use autograd::{BackwardOptions, Checkpoint, Graph, NodeId, OpKind};
pub use var::Var;

// Re-export traits required by public operators (`Pow`)
pub use num_traits;
