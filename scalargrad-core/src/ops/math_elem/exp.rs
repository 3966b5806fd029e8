use crate::autograd::BackwardOp;
use crate::var::Var;

/// Computes `e^input`.
///
/// Backward: `d input += output * grad` (the derivative of `exp` is itself).
pub fn exp_op(input: Var<'_>) -> Var<'_> {
    input.graph.push_derived(
        input.data().exp(),
        input.requires_grad(),
        BackwardOp::Exp { input: input.id },
    )
}

impl<'g> Var<'g> {
    pub fn exp(self) -> Var<'g> {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests; // Link to the test file
