// src/var/autograd_methods.rs

use crate::autograd::BackwardOptions;
use crate::error::ScalarGradError;
use crate::var::Var;

impl<'g> Var<'g> {
    /// Computes the gradient of this node w.r.t. every upstream node, with the default
    /// options (seed 1.0, gradients retained, graph severed afterwards).
    ///
    /// # Errors
    /// `UndefinedGradient` if a power node with a zero base and an exponent below 1
    /// is reached.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.backward_with(BackwardOptions::default())
    }

    /// Runs a backward pass from this node with explicit options.
    pub fn backward_with(&self, options: BackwardOptions) -> Result<(), ScalarGradError> {
        if !self.requires_grad() {
            log::debug!("backward() called on a node that does not require grad. Only the seed is written.");
        }
        self.graph.backward_from(self.id, self.generation, &options)
    }

    /// Nodes reachable from this one, each after all of its predecessors.
    pub fn topological_order(&self) -> Vec<Var<'g>> {
        self.graph
            .topological_order(self)
            .into_iter()
            .filter_map(|id| self.graph.var(id))
            .collect()
    }
}
