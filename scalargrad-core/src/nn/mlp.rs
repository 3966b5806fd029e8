use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::nn::init::Initializer;
use crate::nn::layer::Layer;
use crate::nn::module::{prefixed, Module};
use crate::var::Var;

/// A multi-layer perceptron: a chain of [`Layer`]s with tanh units.
#[derive(Debug, Clone)]
pub struct Mlp<'g> {
    layers: Vec<Layer<'g>>,
}

impl<'g> Mlp<'g> {
    /// Builds `nin -> nouts[0] -> nouts[1] -> ...`.
    ///
    /// `Mlp::new(graph, 3, &[4, 4, 1], init)` has `(3+1)*4 + (4+1)*4 + (4+1)*1 = 41`
    /// parameters.
    pub fn new(graph: &'g Graph, nin: usize, nouts: &[usize], init: &mut Initializer) -> Self {
        let mut layers = Vec::with_capacity(nouts.len());
        let mut current_input_size = nin;
        for &size in nouts {
            layers.push(Layer::new(graph, current_input_size, size, init));
            current_input_size = size;
        }
        Mlp { layers }
    }

    pub fn layers(&self) -> &[Layer<'g>] {
        &self.layers
    }
}

impl<'g> Module<'g> for Mlp<'g> {
    fn forward(&self, input: &[Var<'g>]) -> Result<Vec<Var<'g>>, ScalarGradError> {
        let mut output = input.to_vec();
        for layer in &self.layers {
            output = layer.forward(&output)?;
        }
        Ok(output)
    }

    fn parameters(&self) -> Vec<Var<'g>> {
        self.layers.iter().flat_map(|layer| layer.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, Var<'g>)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| prefixed(&format!("layers.{}", i), layer.named_parameters()))
            .collect()
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
