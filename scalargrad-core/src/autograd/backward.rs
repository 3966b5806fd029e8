use crate::autograd::graph::{build_topo, node_at, node_at_mut, resolve, Graph, NodeId};
use crate::error::ScalarGradError;

/// Options of a backward pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardOptions {
    /// Gradient written into the root before propagation (d root / d root).
    pub seed: f64,
    /// When false, every visited non-leaf node's gradient is reset to 0 afterwards.
    /// Leaves keep theirs so that parameters can be updated.
    pub retain_grads: bool,
    /// When false, every visited node loses its gradient rule and its predecessors
    /// afterwards. A second backward pass from the same root then propagates nothing.
    pub retain_graph: bool,
}

impl Default for BackwardOptions {
    fn default() -> Self {
        BackwardOptions {
            seed: 1.0,
            retain_grads: true,
            retain_graph: false,
        }
    }
}

impl BackwardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    pub fn retain_grads(mut self, retain_grads: bool) -> Self {
        self.retain_grads = retain_grads;
        self
    }

    pub fn retain_graph(mut self, retain_graph: bool) -> Self {
        self.retain_graph = retain_graph;
        self
    }
}

impl Graph {
    /// Runs a backward pass from the handle `(root, generation)`.
    ///
    /// Seed → propagate in reverse topological order → apply the retention policy.
    /// An error from a gradient rule aborts the pass immediately; gradients already
    /// accumulated are left in place and the retention policy is not applied.
    pub(crate) fn backward_from(
        &self,
        root: NodeId,
        generation: u32,
        options: &BackwardOptions,
    ) -> Result<(), ScalarGradError> {
        let mut nodes = self.nodes_mut();
        let root = NodeId(resolve(&nodes, root, generation));
        let order = build_topo(&nodes, root);
        log::debug!(
            "backward from node {}: {} reachable nodes (retain_grads={}, retain_graph={})",
            root.index(),
            order.len(),
            options.retain_grads,
            options.retain_graph
        );

        node_at_mut(&mut nodes, root).grad = options.seed;

        // Reverse topological order: a node's gradient is complete before its rule runs.
        for &id in order.iter().rev() {
            let rule = {
                let node = node_at(&nodes, id);
                if !node.requires_grad {
                    continue;
                }
                node.grad_fn
            };
            if let Some(rule) = rule {
                rule.backward(&mut nodes, id)?;
            }
        }

        if !options.retain_grads {
            for &id in &order {
                let node = node_at_mut(&mut nodes, id);
                if !node.is_leaf {
                    node.grad = 0.0;
                }
            }
        }

        if !options.retain_graph {
            for &id in &order {
                let node = node_at_mut(&mut nodes, id);
                node.grad_fn = None;
                node.prev.clear();
            }
            log::trace!("severed {} nodes after backward", order.len());
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
