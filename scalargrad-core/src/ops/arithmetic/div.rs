// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::var::{check_same_graph, Var};

/// Divisors with a magnitude below this value are rejected.
pub const DIVISION_EPSILON: f64 = 1e-12;

/// Computes `lhs / rhs` as `lhs * rhs^-1`.
///
/// The `-1` exponent is a constant leaf, so `rhs` receives the base gradient of the
/// power node and nothing else.
///
/// # Errors
/// `DivisionByZero` if `|rhs| < 1e-12`. Nothing is added to the graph in that case.
pub fn div_op<'g>(lhs: Var<'g>, rhs: Var<'g>) -> Result<Var<'g>, ScalarGradError> {
    check_same_graph(&lhs, &rhs, "div_op");
    let divisor = rhs.data();
    if divisor == 0.0 || divisor.abs() < DIVISION_EPSILON {
        return Err(ScalarGradError::DivisionByZero { divisor });
    }
    let minus_one = rhs.graph.constant(-1.0);
    Ok(mul_op(lhs, pow_op(rhs, minus_one)))
}

impl<'g> Var<'g> {
    /// Fallible division, see [`div_op`].
    pub fn try_div(self, rhs: Var<'g>) -> Result<Var<'g>, ScalarGradError> {
        div_op(self, rhs)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
