// scalargrad-optim/src/sgd.rs

use crate::Optimizer;
use scalargrad_core::{ScalarGradError, Var};

/// Hyperparameters of [`Sgd`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdConfig {
    /// Learning rate. Must be positive and finite.
    pub lr: f64,
    /// Momentum factor in `[0, 1)`. 0 disables the velocity buffers.
    pub momentum: f64,
    /// L2 penalty added to the gradient (`grad + weight_decay * p`). Must be >= 0.
    pub weight_decay: f64,
}

impl Default for SgdConfig {
    fn default() -> Self {
        SgdConfig {
            lr: 0.01,
            momentum: 0.0,
            weight_decay: 0.0,
        }
    }
}

impl SgdConfig {
    pub fn new(lr: f64) -> Self {
        SgdConfig {
            lr,
            ..Self::default()
        }
    }

    pub fn momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn weight_decay(mut self, weight_decay: f64) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// # Errors
    /// `InvalidHyperparameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if !(self.lr.is_finite() && self.lr > 0.0) {
            return Err(invalid("lr", self.lr));
        }
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(invalid("momentum", self.momentum));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.0) {
            return Err(invalid("weight_decay", self.weight_decay));
        }
        Ok(())
    }
}

fn invalid(name: &str, value: f64) -> ScalarGradError {
    ScalarGradError::InvalidHyperparameter {
        name: name.to_string(),
        value,
    }
}

/// Implements stochastic gradient descent (optionally with momentum).
///
/// Updates each parameter `p` that requires grad according to the rule:
/// `g = grad(p) + weight_decay * p`, `v = momentum * v + g`, `p = p - lr * v`
/// (with `v = g` when momentum is 0).
#[derive(Debug)]
pub struct Sgd<'g> {
    params: Vec<Var<'g>>,
    config: SgdConfig,
    velocity: Vec<f64>,
}

impl<'g> Sgd<'g> {
    /// Creates a new SGD optimizer over `params`.
    ///
    /// # Errors
    /// `InvalidHyperparameter` if the configuration does not validate.
    pub fn new(params: Vec<Var<'g>>, config: SgdConfig) -> Result<Self, ScalarGradError> {
        config.validate()?;
        log::info!(
            "SGD over {} parameters (lr={}, momentum={}, weight_decay={})",
            params.len(),
            config.lr,
            config.momentum,
            config.weight_decay
        );
        let velocity = vec![0.0; params.len()];
        Ok(Sgd {
            params,
            config,
            velocity,
        })
    }

    pub fn config(&self) -> &SgdConfig {
        &self.config
    }

    pub fn params(&self) -> &[Var<'g>] {
        &self.params
    }

    /// Changes the learning rate (e.g. for a schedule).
    ///
    /// # Errors
    /// `InvalidHyperparameter` for a non-positive or non-finite rate; the current
    /// rate is kept.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), ScalarGradError> {
        SgdConfig { lr, ..self.config }.validate()?;
        self.config.lr = lr;
        Ok(())
    }
}

impl<'g> Optimizer<'g> for Sgd<'g> {
    fn step(&mut self) -> Result<(), ScalarGradError> {
        // Check everything first so that a bad gradient leaves every parameter untouched.
        let mut updates = Vec::with_capacity(self.params.len());
        for (index, param) in self.params.iter().enumerate() {
            if !param.requires_grad() {
                continue;
            }
            let grad = param.grad();
            if !grad.is_finite() {
                log::warn!("SGD step aborted: parameter {} has gradient {}", index, grad);
                return Err(ScalarGradError::NonFiniteGradient { index, value: grad });
            }
            updates.push((index, grad));
        }

        let SgdConfig {
            lr,
            momentum,
            weight_decay,
        } = self.config;
        for (index, grad) in updates {
            let param = self.params[index];
            let data = param.data();
            let mut d_p = grad + weight_decay * data;
            if momentum != 0.0 {
                let v = &mut self.velocity[index];
                *v = momentum * *v + d_p;
                d_p = *v;
            }
            param.set_data(data - lr * d_p);
        }
        Ok(())
    }

    fn zero_grad(&self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}
