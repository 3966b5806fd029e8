use crate::autograd::BackwardOp;
use crate::var::Var;

/// Computes the hyperbolic tangent of `input`.
///
/// Backward: `d input += (1 - output^2) * grad`.
pub fn tanh_op(input: Var<'_>) -> Var<'_> {
    input.graph.push_derived(
        input.data().tanh(),
        input.requires_grad(),
        BackwardOp::Tanh { input: input.id },
    )
}

impl<'g> Var<'g> {
    pub fn tanh(self) -> Var<'g> {
        tanh_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests; // Link to the test file
