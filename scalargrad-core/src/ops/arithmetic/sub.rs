use crate::ops::arithmetic::{add_op, neg_op};
use crate::var::{check_same_graph, Var};
use std::ops::Sub;

/// Computes `lhs - rhs` as `lhs + (-rhs)`.
pub fn sub_op<'g>(lhs: Var<'g>, rhs: Var<'g>) -> Var<'g> {
    check_same_graph(&lhs, &rhs, "sub_op");
    add_op(lhs, neg_op(rhs))
}

impl<'g> Sub for Var<'g> {
    type Output = Var<'g>;

    fn sub(self, rhs: Var<'g>) -> Var<'g> {
        sub_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
