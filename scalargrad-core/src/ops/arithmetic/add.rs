// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::var::{check_same_graph, Var};
use std::ops::Add;

/// Computes `lhs + rhs`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op<'g>(lhs: Var<'g>, rhs: Var<'g>) -> Var<'g> {
    check_same_graph(&lhs, &rhs, "add_op");
    let requires_grad = lhs.requires_grad() || rhs.requires_grad();
    lhs.graph.push_derived(
        lhs.data() + rhs.data(),
        requires_grad,
        BackwardOp::Add {
            lhs: lhs.id,
            rhs: rhs.id,
        },
    )
}

impl<'g> Add for Var<'g> {
    type Output = Var<'g>;

    fn add(self, rhs: Var<'g>) -> Var<'g> {
        add_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
