//! # Autograd
//!
//! The reverse-mode engine:
//! - [`graph`]: the node arena ([`Graph`]) and the topological sequencer.
//! - [`backward_op`]: the tagged gradient rules ([`BackwardOp`]), one per operation kind.
//! - [`backward`]: the backward executor and its retention policy ([`BackwardOptions`]).
//! - [`grad_check`]: finite-difference verification of the analytical gradients.
//! - [`dot`]: Graphviz export of a computation graph.

pub mod backward;
pub mod backward_op;
pub mod dot;
pub mod grad_check;
pub mod graph;

pub use backward::BackwardOptions;
pub use backward_op::{BackwardOp, OpKind};
pub use dot::export_graph;
pub use graph::{Checkpoint, Graph, NodeId};
