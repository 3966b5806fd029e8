// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::var::{check_same_graph, Var};
use std::ops::Mul;

/// Computes `lhs * rhs`.
///
/// Backward: `d lhs += rhs * grad`, `d rhs += lhs * grad`.
pub fn mul_op<'g>(lhs: Var<'g>, rhs: Var<'g>) -> Var<'g> {
    check_same_graph(&lhs, &rhs, "mul_op");
    let requires_grad = lhs.requires_grad() || rhs.requires_grad();
    lhs.graph.push_derived(
        lhs.data() * rhs.data(),
        requires_grad,
        BackwardOp::Mul {
            lhs: lhs.id,
            rhs: rhs.id,
        },
    )
}

impl<'g> Mul for Var<'g> {
    type Output = Var<'g>;

    fn mul(self, rhs: Var<'g>) -> Var<'g> {
        mul_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
