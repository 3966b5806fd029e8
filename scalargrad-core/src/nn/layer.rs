use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::Initializer;
use crate::nn::module::{prefixed, Module};
use crate::nn::neuron::{Activation, Neuron};
use crate::var::Var;

/// A fully connected layer: `nout` neurons reading the same `nin` inputs.
#[derive(Debug, Clone)]
pub struct Layer<'g> {
    neurons: Vec<Neuron<'g>>,
    nin: usize,
}

impl<'g> Layer<'g> {
    pub fn new(graph: &'g Graph, nin: usize, nout: usize, init: &mut Initializer) -> Self {
        Self::with_activation(graph, nin, nout, Activation::Tanh, init)
    }

    pub fn with_activation(
        graph: &'g Graph,
        nin: usize,
        nout: usize,
        activation: Activation,
        init: &mut Initializer,
    ) -> Self {
        let neurons = (0..nout)
            .map(|_| Neuron::with_activation(graph, nin, activation, init))
            .collect();
        Layer { neurons, nin }
    }

    pub fn nin(&self) -> usize {
        self.nin
    }

    pub fn nout(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron<'g>] {
        &self.neurons
    }
}

impl<'g> Module<'g> for Layer<'g> {
    fn forward(&self, input: &[Var<'g>]) -> Result<Vec<Var<'g>>, ScalarGradError> {
        self.neurons.iter().map(|neuron| neuron.activate(input)).collect()
    }

    fn parameters(&self) -> Vec<Var<'g>> {
        self.neurons.iter().flat_map(|neuron| neuron.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Var<'g>)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| prefixed(&format!("neurons.{}", i), neuron.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod tests;
