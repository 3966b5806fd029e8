use crate::ops::arithmetic::mul_op;
use crate::var::Var;
use std::ops::Neg;

/// Computes `-input` as `input * -1`.
///
/// The `-1` factor is a fresh constant leaf (`requires_grad = false`), so it never
/// receives a gradient and the result requires grad exactly when `input` does.
pub fn neg_op(input: Var<'_>) -> Var<'_> {
    let minus_one = input.graph.constant(-1.0);
    mul_op(input, minus_one)
}

impl<'g> Neg for Var<'g> {
    type Output = Var<'g>;

    fn neg(self) -> Var<'g> {
        neg_op(self)
    }
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
