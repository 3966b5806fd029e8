use crate::autograd::graph::{node_at, node_at_mut, Node, NodeId};
use crate::error::ScalarGradError;

/// Below this magnitude the base of a power is treated as non-positive for the
/// exponent gradient (`ln(base)` is undefined there).
pub const LOG_BASE_EPSILON: f64 = 1e-12;

/// Tag naming the operation that produced a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Created directly by the client.
    Leaf,
    Add,
    Mul,
    Pow,
    Exp,
    Tanh,
}

impl OpKind {
    /// Short label used in graph exports (empty for leaves).
    pub fn symbol(self) -> &'static str {
        match self {
            OpKind::Leaf => "",
            OpKind::Add => "+",
            OpKind::Mul => "*",
            OpKind::Pow => "pow",
            OpKind::Exp => "exp",
            OpKind::Tanh => "tanh",
        }
    }
}

/// Gradient rule of a node: the operation that produced it plus the arena indices of
/// its operands.
///
/// Negation, subtraction and division have no rule of their own: they are composed
/// from `Mul`, `Add` and `Pow` by the operation builders. Operand indices are
/// non-owning; the output node is passed in at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackwardOp {
    Add { lhs: NodeId, rhs: NodeId },
    Mul { lhs: NodeId, rhs: NodeId },
    Pow { base: NodeId, exponent: NodeId },
    Exp { input: NodeId },
    Tanh { input: NodeId },
}

impl BackwardOp {
    pub fn kind(&self) -> OpKind {
        match self {
            BackwardOp::Add { .. } => OpKind::Add,
            BackwardOp::Mul { .. } => OpKind::Mul,
            BackwardOp::Pow { .. } => OpKind::Pow,
            BackwardOp::Exp { .. } => OpKind::Exp,
            BackwardOp::Tanh { .. } => OpKind::Tanh,
        }
    }

    /// Operand indices, in the order the operation received them.
    ///
    /// This is the node's predecessor list, so it must stay in the order the
    /// contributions are computed by [`BackwardOp::backward`].
    pub fn inputs(&self) -> Vec<NodeId> {
        match *self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, exponent } => vec![base, exponent],
            BackwardOp::Exp { input } | BackwardOp::Tanh { input } => vec![input],
        }
    }

    /// Adds the contribution of `output`'s gradient into the gradient of each operand
    /// that requires grad (chain rule with the local derivative of the operation).
    ///
    /// # Errors
    /// `UndefinedGradient` for `Pow` with a zero base and an exponent below 1. No
    /// gradient is written in that case.
    pub(crate) fn backward(&self, nodes: &mut [Node], output: NodeId) -> Result<(), ScalarGradError> {
        let (out_data, out_grad) = {
            let out = node_at(nodes, output);
            (out.data, out.grad)
        };

        match *self {
            BackwardOp::Add { lhs, rhs } => {
                accumulate(nodes, lhs, out_grad);
                accumulate(nodes, rhs, out_grad);
            }
            BackwardOp::Mul { lhs, rhs } => {
                // Read both operands before writing: `lhs` and `rhs` may be the same node.
                let l = node_at(nodes, lhs).data;
                let r = node_at(nodes, rhs).data;
                accumulate(nodes, lhs, r * out_grad);
                accumulate(nodes, rhs, l * out_grad);
            }
            BackwardOp::Pow { base, exponent } => {
                let b = node_at(nodes, base).data;
                let e = node_at(nodes, exponent).data;
                if b == 0.0 && e < 1.0 {
                    return Err(ScalarGradError::UndefinedGradient { base: b, exponent: e });
                }
                accumulate(nodes, base, e * b.powf(e - 1.0) * out_grad);
                if b > LOG_BASE_EPSILON {
                    accumulate(nodes, exponent, b.ln() * b.powf(e) * out_grad);
                }
            }
            BackwardOp::Exp { input } => {
                accumulate(nodes, input, out_data * out_grad);
            }
            BackwardOp::Tanh { input } => {
                accumulate(nodes, input, (1.0 - out_data * out_data) * out_grad);
            }
        }
        Ok(())
    }
}

/// `+=` into an operand's gradient, skipping operands that do not require grad.
fn accumulate(nodes: &mut [Node], id: NodeId, contribution: f64) {
    let node = node_at_mut(nodes, id);
    if node.requires_grad {
        node.grad += contribution;
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
