use crate::autograd::graph::{node_at, resolve, Graph, Node, NodeId};
use crate::autograd::OpKind;
use crate::var::Var;

impl<'g> Var<'g> {
    fn read<R>(&self, f: impl FnOnce(&Node) -> R) -> R {
        let nodes = self.graph.nodes();
        let index = resolve(&nodes, self.id, self.generation);
        f(&nodes[index])
    }

    fn write<R>(&self, f: impl FnOnce(&mut Node) -> R) -> R {
        let mut nodes = self.graph.nodes_mut();
        let index = resolve(&nodes, self.id, self.generation);
        f(&mut nodes[index])
    }

    /// The forward value.
    pub fn data(&self) -> f64 {
        self.read(|node| node.data)
    }

    /// The accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read(|node| node.grad)
    }

    /// Overwrites the forward value (e.g. a parameter update).
    ///
    /// Downstream nodes are not recomputed: rebuild the forward graph afterwards.
    pub fn set_data(&self, value: f64) {
        self.write(|node| node.data = value)
    }

    pub fn set_grad(&self, grad: f64) {
        self.write(|node| node.grad = grad)
    }

    /// Resets the gradient to exactly 0. The value is untouched.
    pub fn zero_grad(&self) {
        self.set_grad(0.0)
    }

    pub fn requires_grad(&self) -> bool {
        self.read(|node| node.requires_grad)
    }

    pub fn is_leaf(&self) -> bool {
        self.read(|node| node.is_leaf)
    }

    /// Whether the node still carries a gradient rule (false for leaves, constant
    /// subgraphs and severed nodes).
    pub fn has_grad_fn(&self) -> bool {
        self.read(|node| node.grad_fn.is_some())
    }

    /// The operation that produced this node.
    pub fn op(&self) -> OpKind {
        self.read(|node| node.op)
    }

    /// Handles to the operands of this node (empty for leaves and severed nodes).
    pub fn predecessors(&self) -> Vec<Var<'g>> {
        let nodes = self.graph.nodes();
        let index = resolve(&nodes, self.id, self.generation);
        nodes[index]
            .prev
            .iter()
            .map(|&id| Var {
                graph: self.graph,
                id,
                generation: node_at(&nodes, id).generation,
            })
            .collect()
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The graph this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
}
