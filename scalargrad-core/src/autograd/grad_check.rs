use crate::autograd::graph::Graph;
use crate::error::ScalarGradError;
use crate::var::Var;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Function did not propagate requires_grad correctly.")]
    RequiresGradPropagationError,
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar expression from one trainable leaf per entry of `inputs`.
/// It is evaluated once on a fresh graph to obtain the analytical gradients via
/// `backward`, then twice per input with that input shifted by `±epsilon`.
///
/// An input passes when the absolute difference is within `tolerance`, or the
/// relative difference is (large gradients).
pub fn check_grad<F>(func: F, inputs: &[f64], epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Var<'g>]) -> Result<Var<'g>, ScalarGradError>,
{
    // --- 1. Forward and backward pass for the analytical gradients ---
    let analytical: Vec<f64> = {
        let graph = Graph::new();
        let leaves: Vec<Var<'_>> = inputs.iter().map(|&x| graph.parameter(x)).collect();
        let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
        if !inputs.is_empty() && !output.requires_grad() {
            return Err(GradCheckError::RequiresGradPropagationError);
        }
        output.backward().map_err(GradCheckError::BackwardPassError)?;
        let grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();
        grads
    };

    // --- 2. Central differences, one input at a time ---
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let value_plus = evaluate_shifted(&func, inputs, input_index, epsilon)?;
        let value_minus = evaluate_shifted(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        let close = approx::abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || approx::relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            );
        if !close {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Evaluates `func` on a fresh graph with `inputs[index]` shifted by `delta`.
fn evaluate_shifted<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> Result<f64, GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Var<'g>]) -> Result<Var<'g>, ScalarGradError>,
{
    let graph = Graph::new();
    let leaves: Vec<Var<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.parameter(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
