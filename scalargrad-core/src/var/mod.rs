// src/var/mod.rs

use crate::autograd::graph::{Graph, NodeId};

mod accessors;
mod autograd_methods;
mod debug;

/// Handle to one scalar node of a [`Graph`].
///
/// `Var` is a cheap `Copy` value (an arena index plus the arena generation it was
/// created in) borrowing the graph, so expressions can be written with ordinary
/// operators: `(a * b + c).tanh()`. All state lives in the graph.
///
/// Using a handle after its node was dropped by [`Graph::rewind`] or
/// [`Graph::clear`] panics with a `DanglingReference` message.
#[derive(Clone, Copy)]
pub struct Var<'g> {
    pub(crate) graph: &'g Graph,
    pub(crate) id: NodeId,
    pub(crate) generation: u32,
}

impl<'g> Var<'g> {
    /// Returns true if both handles designate the same live node of the same graph.
    pub fn ptr_eq(&self, other: &Var<'_>) -> bool {
        std::ptr::eq(self.graph, other.graph)
            && self.id == other.id
            && self.generation == other.generation
    }
}

/// Panics if two operands live in different graphs.
pub(crate) fn check_same_graph(lhs: &Var<'_>, rhs: &Var<'_>, operation: &str) {
    assert!(
        std::ptr::eq(lhs.graph, rhs.graph),
        "{}: operands belong to different graphs",
        operation
    );
}
