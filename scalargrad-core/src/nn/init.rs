use crate::autograd::Graph;
use crate::error::ScalarGradError;
use crate::var::Var;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;

/// Distribution used to draw initial weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInit {
    /// Uniform in `[low, high)`.
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Uniform { low: -1.0, high: 1.0 }
    }
}

/// Parameter initialization settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitConfig {
    /// Seed of the random source. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub weights: WeightInit,
    /// Initial value of every bias.
    pub bias: f64,
}

impl Default for InitConfig {
    fn default() -> Self {
        InitConfig {
            seed: None,
            weights: WeightInit::default(),
            bias: 0.0,
        }
    }
}

impl InitConfig {
    pub fn seeded(seed: u64) -> Self {
        InitConfig {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Random source threaded through module construction.
///
/// One initializer is shared by every neuron of a network, so a fixed seed makes the
/// whole initialization reproducible.
#[derive(Debug)]
pub struct Initializer {
    rng: StdRng,
    weights: WeightSampler,
    bias: f64,
}

#[derive(Debug)]
enum WeightSampler {
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

impl Initializer {
    /// # Errors
    /// `InvalidHyperparameter` for an empty uniform range or a negative / non-finite
    /// standard deviation.
    pub fn new(config: &InitConfig) -> Result<Self, ScalarGradError> {
        let weights = match config.weights {
            WeightInit::Uniform { low, high } => {
                if !(low < high) || !(high - low).is_finite() {
                    return Err(ScalarGradError::InvalidHyperparameter {
                        name: "uniform range".to_string(),
                        value: high - low,
                    });
                }
                WeightSampler::Uniform(Uniform::new(low, high))
            }
            WeightInit::Normal { mean, std_dev } => {
                let invalid_std = || ScalarGradError::InvalidHyperparameter {
                    name: "std_dev".to_string(),
                    value: std_dev,
                };
                // Normal::new only rejects a non-finite std_dev.
                if !(std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(invalid_std());
                }
                let normal = Normal::new(mean, std_dev).map_err(|_| invalid_std())?;
                WeightSampler::Normal(normal)
            }
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Initializer {
            rng,
            weights,
            bias: config.bias,
        })
    }

    /// Draws one initial weight value.
    pub fn sample_weight(&mut self) -> f64 {
        match &self.weights {
            WeightSampler::Uniform(dist) => dist.sample(&mut self.rng),
            WeightSampler::Normal(dist) => dist.sample(&mut self.rng),
        }
    }

    /// Creates a trainable weight leaf.
    pub fn weight<'g>(&mut self, graph: &'g Graph) -> Var<'g> {
        let value = self.sample_weight();
        graph.parameter(value)
    }

    /// Creates a trainable bias leaf.
    pub fn bias<'g>(&self, graph: &'g Graph) -> Var<'g> {
        graph.parameter(self.bias)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
