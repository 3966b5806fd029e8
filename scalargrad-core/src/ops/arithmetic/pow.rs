// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::var::{check_same_graph, Var};
use num_traits::Pow;

/// Raises `base` to the power `exponent`. Both are graph nodes.
///
/// The forward value follows ordinary floating-point semantics (`f64::powf`).
/// Backward:
/// - `d base += exponent * base^(exponent - 1) * grad`
/// - `d exponent += ln(base) * base^exponent * grad`, only when `base > 1e-12`.
///
/// A zero base with an exponent below 1 has no defined gradient; this is reported as
/// `UndefinedGradient` when the backward pass reaches the node.
pub fn pow_op<'g>(base: Var<'g>, exponent: Var<'g>) -> Var<'g> {
    check_same_graph(&base, &exponent, "pow_op");
    let requires_grad = base.requires_grad() || exponent.requires_grad();
    base.graph.push_derived(
        base.data().powf(exponent.data()),
        requires_grad,
        BackwardOp::Pow {
            base: base.id,
            exponent: exponent.id,
        },
    )
}

impl<'g> Var<'g> {
    /// `self^exponent` with a constant exponent.
    pub fn powf(self, exponent: f64) -> Var<'g> {
        let exponent = self.graph.constant(exponent);
        pow_op(self, exponent)
    }
}

impl<'g> Pow<Var<'g>> for Var<'g> {
    type Output = Var<'g>;

    fn pow(self, exponent: Var<'g>) -> Var<'g> {
        pow_op(self, exponent)
    }
}

impl<'g> Pow<f64> for Var<'g> {
    type Output = Var<'g>;

    fn pow(self, exponent: f64) -> Var<'g> {
        self.powf(exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
