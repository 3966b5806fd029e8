use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::Initializer;
use crate::nn::module::Module;
use crate::var::Var;

/// Nonlinearity applied to a neuron's pre-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    /// No nonlinearity (linear output unit).
    Identity,
}

/// A single unit computing `activation(bias + Σ xᵢ·wᵢ)`.
#[derive(Debug, Clone)]
pub struct Neuron<'g> {
    weights: Vec<Var<'g>>,
    bias: Var<'g>,
    activation: Activation,
}

impl<'g> Neuron<'g> {
    /// Creates a tanh neuron with `nin` inputs.
    pub fn new(graph: &'g Graph, nin: usize, init: &mut Initializer) -> Self {
        Self::with_activation(graph, nin, Activation::Tanh, init)
    }

    pub fn with_activation(graph: &'g Graph, nin: usize, activation: Activation, init: &mut Initializer) -> Self {
        let weights = (0..nin).map(|_| init.weight(graph)).collect();
        let bias = init.bias(graph);
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    /// Number of inputs (fan-in).
    pub fn nin(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[Var<'g>] {
        &self.weights
    }

    pub fn bias(&self) -> Var<'g> {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Computes the neuron's output for one input vector.
    ///
    /// # Errors
    /// `ShapeMismatch` if `x.len() != self.nin()`; inputs are never truncated or padded.
    pub fn activate(&self, x: &[Var<'g>]) -> Result<Var<'g>, ScalarGradError> {
        if x.len() != self.weights.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: self.weights.len(),
                actual: x.len(),
                operation: "Neuron::forward".to_string(),
            });
        }
        let pre_activation = x
            .iter()
            .zip(&self.weights)
            .fold(self.bias, |acc, (&xi, &wi)| acc + xi * wi);
        Ok(match self.activation {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Identity => pre_activation,
        })
    }
}

impl<'g> Module<'g> for Neuron<'g> {
    fn forward(&self, input: &[Var<'g>]) -> Result<Vec<Var<'g>>, ScalarGradError> {
        Ok(vec![self.activate(input)?])
    }

    fn parameters(&self) -> Vec<Var<'g>> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, Var<'g>)> {
        let mut named: Vec<(String, Var<'g>)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("weights.{}", i), w))
            .collect();
        named.push(("bias".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
