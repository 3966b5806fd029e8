//! # scalargrad-optim
//!
//! Parameter updates for models built on `scalargrad-core`.
//!
//! An optimizer owns handles to the parameters it updates. After a backward pass
//! has filled their gradients, [`Optimizer::step`] moves every parameter against
//! its gradient and [`Optimizer::zero_grad`] resets the gradients for the next one.

use scalargrad_core::ScalarGradError;

pub mod sgd;
pub mod stats;

pub use sgd::{Sgd, SgdConfig};
pub use stats::GradStats;

/// Trait for optimization algorithms.
/// Optimizers update the parameters of a model based on their gradients.
pub trait Optimizer<'g> {
    /// Performs a single optimization step (parameter update).
    ///
    /// # Errors
    /// `NonFiniteGradient` if a managed parameter carries a NaN or infinite
    /// gradient. No parameter is updated in that case.
    fn step(&mut self) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    /// Should be called between backward passes, since gradients accumulate.
    fn zero_grad(&self);
}
