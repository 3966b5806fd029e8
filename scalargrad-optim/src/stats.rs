// scalargrad-optim/src/stats.rs

use scalargrad_core::Var;
use std::fmt;

/// Gradients below this magnitude count as vanishing.
pub const TINY_GRAD_THRESHOLD: f64 = 1e-6;

/// Summary of parameter gradient magnitudes after a backward pass.
///
/// Used to spot exploding (`max_abs`) or vanishing (`tiny_fraction`) gradients while
/// training. Only parameters that require grad are counted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradStats {
    pub count: usize,
    pub max_abs: f64,
    pub mean_abs: f64,
    /// Fraction of counted gradients with `|g| < 1e-6`.
    pub tiny_fraction: f64,
}

impl GradStats {
    /// Collects statistics over `params`. All fields are 0 when nothing is counted.
    ///
    /// A NaN gradient makes `max_abs` and `mean_abs` NaN. It is not counted as tiny.
    pub fn collect(params: &[Var<'_>]) -> Self {
        let magnitudes: Vec<f64> = params
            .iter()
            .filter(|p| p.requires_grad())
            .map(|p| p.grad().abs())
            .collect();
        if magnitudes.is_empty() {
            return GradStats::default();
        }
        let count = magnitudes.len();
        // f64::max would skip NaN.
        let max_abs = if magnitudes.iter().any(|g| g.is_nan()) {
            f64::NAN
        } else {
            magnitudes.iter().copied().fold(0.0, f64::max)
        };
        let mean_abs = magnitudes.iter().sum::<f64>() / count as f64;
        let tiny = magnitudes.iter().filter(|&&g| g < TINY_GRAD_THRESHOLD).count();
        GradStats {
            count,
            max_abs,
            mean_abs,
            tiny_fraction: tiny as f64 / count as f64,
        }
    }
}

impl fmt::Display for GradStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grad max {:.6}, mean {:.6}, tiny {:.1}% of {}",
            self.max_abs,
            self.mean_abs,
            self.tiny_fraction * 100.0,
            self.count
        )
    }
}
