// scalargrad-core/src/nn/losses/mse.rs

use crate::error::ScalarGradError;
use crate::var::Var;

/// Specifies the reduction to apply to the summed squared errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Mean,
}

impl Reduction {
    pub fn from_str(s: &str) -> Result<Self, ScalarGradError> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Reduction::Sum),
            "mean" => Ok(Reduction::Mean),
            _ => Err(ScalarGradError::InvalidHyperparameter {
                name: format!("reduction '{}'", s),
                value: f64::NAN,
            }),
        }
    }
}

/// Squared-error loss between predictions and targets.
///
/// `Sum` computes `Σ (pᵢ - tᵢ)²`, `Mean` divides that by the number of pairs.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node.
    ///
    /// The accumulation starts from a constant `0` leaf of the predictions' graph.
    ///
    /// # Errors
    /// `ShapeMismatch` if the lengths differ, `EmptyInput` if there are no predictions.
    pub fn calculate<'g>(&self, predictions: &[Var<'g>], targets: &[Var<'g>]) -> Result<Var<'g>, ScalarGradError> {
        if predictions.len() != targets.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: predictions.len(),
                actual: targets.len(),
                operation: "MSELoss calculate".to_string(),
            });
        }
        let graph = match predictions.first() {
            Some(first) => first.graph(),
            None => {
                return Err(ScalarGradError::EmptyInput {
                    operation: "MSELoss calculate".to_string(),
                })
            }
        };

        let mut total_loss = graph.constant(0.0);
        for (&prediction, &target) in predictions.iter().zip(targets) {
            let diff = prediction - target;
            total_loss = total_loss + diff * diff;
        }

        match self.reduction {
            Reduction::Sum => Ok(total_loss),
            Reduction::Mean => total_loss.try_div(graph.constant(predictions.len() as f64)),
        }
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
