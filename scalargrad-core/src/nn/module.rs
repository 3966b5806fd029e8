use crate::error::ScalarGradError;
use crate::var::Var;
use std::fmt::Debug;

/// The base trait for all neural network modules (neurons, layers, networks).
///
/// Modules are plain aggregates of parameter nodes living in one [`Graph`](crate::Graph).
/// Everything beyond `forward` and parameter access is derived from `parameters()`.
pub trait Module<'g>: Debug {
    /// Performs a forward pass, appending the computation to the parameters' graph.
    ///
    /// # Errors
    /// `ShapeMismatch` if `input` does not have the length the module expects.
    fn forward(&self, input: &[Var<'g>]) -> Result<Vec<Var<'g>>, ScalarGradError>;

    /// Returns all learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<Var<'g>>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. `"layers.0.neurons.1.weights.2"`).
    fn named_parameters(&self) -> Vec<(String, Var<'g>)>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}

/// Prefixes the names of a child module's parameters.
pub(crate) fn prefixed<'g>(prefix: &str, named: Vec<(String, Var<'g>)>) -> Vec<(String, Var<'g>)> {
    named
        .into_iter()
        .map(|(name, param)| (format!("{}.{}", prefix, name), param))
        .collect()
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
