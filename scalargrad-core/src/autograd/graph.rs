use crate::autograd::backward_op::{BackwardOp, OpKind};
use crate::error::ScalarGradError;
use crate::var::Var;
use std::cell::{Cell, Ref, RefCell, RefMut};

/// Index of a node inside its [`Graph`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Storage for one scalar node of the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) requires_grad: bool,
    pub(crate) is_leaf: bool,
    /// Tag of the operation that produced the node. Survives graph severing (used for display).
    pub(crate) op: OpKind,
    /// Operands, in the order the operation received them. Always older than the node itself.
    pub(crate) prev: Vec<NodeId>,
    /// Present only when `requires_grad` is true and the graph has not been severed.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Arena generation the node was created in.
    pub(crate) generation: u32,
}

/// A position in the arena returned by [`Graph::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    len: usize,
}

/// Arena owning every node of a computation graph.
///
/// Nodes are only ever appended, and every edge (predecessor lists and the operand
/// indices held by a [`BackwardOp`]) points to an older node. There are therefore no
/// ownership cycles to break: dropping the arena, [`Graph::clear`] or
/// [`Graph::rewind`] reclaims nodes wholesale.
///
/// The graph uses interior mutability so that [`Var`] handles can be `Copy` and
/// combined with ordinary operators. It is single-threaded (`!Sync`).
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
    generation: Cell<u32>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
            generation: Cell::new(0),
        }
    }

    /// Creates a leaf node holding `value`.
    ///
    /// Trainable parameters pass `requires_grad = true`, fixed inputs usually `false`.
    pub fn leaf(&self, value: f64, requires_grad: bool) -> Var<'_> {
        self.push(Node {
            data: value,
            grad: 0.0,
            requires_grad,
            is_leaf: true,
            op: OpKind::Leaf,
            prev: Vec::new(),
            grad_fn: None,
            generation: self.generation.get(),
        })
    }

    /// Creates a trainable leaf (`requires_grad = true`).
    pub fn parameter(&self, value: f64) -> Var<'_> {
        self.leaf(value, true)
    }

    /// Creates a fixed leaf (`requires_grad = false`).
    pub fn constant(&self, value: f64) -> Var<'_> {
        self.leaf(value, false)
    }

    /// Appends the result of an operation.
    ///
    /// The rule is only stored when the result requires grad; its operand indices
    /// become the node's predecessor list either way.
    pub(crate) fn push_derived(&self, data: f64, requires_grad: bool, rule: BackwardOp) -> Var<'_> {
        self.push(Node {
            data,
            grad: 0.0,
            requires_grad,
            is_leaf: false,
            op: rule.kind(),
            prev: rule.inputs(),
            grad_fn: if requires_grad { Some(rule) } else { None },
            generation: self.generation.get(),
        })
    }

    fn push(&self, node: Node) -> Var<'_> {
        let generation = node.generation;
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(node);
        Var {
            graph: self,
            id,
            generation,
        }
    }

    /// Number of nodes currently in the arena.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a handle for the live node at `id`, if any.
    pub fn var(&self, id: NodeId) -> Option<Var<'_>> {
        self.nodes.borrow().get(id.0).map(|node| Var {
            graph: self,
            id,
            generation: node.generation,
        })
    }

    /// Marks the current end of the arena.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint { len: self.len() }
    }

    /// Drops every node created after `checkpoint`.
    ///
    /// Nodes created before the checkpoint (typically parameters and fixed inputs)
    /// stay valid. Handles to dropped nodes become dangling: using one panics.
    pub fn rewind(&self, checkpoint: Checkpoint) {
        let mut nodes = self.nodes.borrow_mut();
        if checkpoint.len < nodes.len() {
            log::trace!("Rewinding graph from {} to {} nodes", nodes.len(), checkpoint.len);
            nodes.truncate(checkpoint.len);
        }
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Drops every node. All outstanding handles become dangling.
    pub fn clear(&self) {
        self.rewind(Checkpoint { len: 0 });
    }

    /// Returns every node reachable from `root` through predecessor edges, each exactly
    /// once and strictly after all of its predecessors.
    ///
    /// # Panics
    /// If `root` belongs to another graph or no longer resolves to a live node.
    pub fn topological_order(&self, root: &Var<'_>) -> Vec<NodeId> {
        assert!(
            std::ptr::eq(self, root.graph),
            "topological_order called with a node from another graph"
        );
        let nodes = self.nodes.borrow();
        let index = resolve(&nodes, root.id, root.generation);
        build_topo(&nodes, NodeId(index))
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }
}

/// Fails loudly on a reference that does not resolve to a live node.
///
/// The arena only ever holds edges to older nodes and only drops suffixes, so this is
/// reachable only through a stale handle or a broken invariant.
pub(crate) fn dangling(index: usize) -> ! {
    panic!("{}", ScalarGradError::DanglingReference { index })
}

/// Resolves a handle `(id, generation)` to an arena index.
pub(crate) fn resolve(nodes: &[Node], id: NodeId, generation: u32) -> usize {
    match nodes.get(id.0) {
        Some(node) if node.generation == generation => id.0,
        _ => dangling(id.0),
    }
}

pub(crate) fn node_at(nodes: &[Node], id: NodeId) -> &Node {
    nodes.get(id.0).unwrap_or_else(|| dangling(id.0))
}

pub(crate) fn node_at_mut(nodes: &mut [Node], id: NodeId) -> &mut Node {
    match nodes.get_mut(id.0) {
        Some(node) => node,
        None => dangling(id.0),
    }
}

/// Builds a topological sort of the subgraph reachable from `root`.
///
/// Depth-first, post-order: predecessors are visited in recorded order before the node
/// itself is emitted. Uses an explicit stack so that long chains cannot overflow the
/// call stack; the resulting order is the one the recursive formulation produces.
pub(crate) fn build_topo(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; nodes.len()];
    let mut sorted_list = Vec::new();
    // (node, position of the next predecessor to visit)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();

    if root.0 >= nodes.len() {
        dangling(root.0);
    }
    visited[root.0] = true;
    stack.push((root, 0));

    while let Some(&(id, next)) = stack.last() {
        match node_at(nodes, id).prev.get(next) {
            Some(&child) => {
                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }
                if child.0 >= nodes.len() {
                    dangling(child.0);
                }
                if !visited[child.0] {
                    visited[child.0] = true;
                    stack.push((child, 0));
                }
            }
            None => {
                stack.pop();
                sorted_list.push(id);
            }
        }
    }
    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
