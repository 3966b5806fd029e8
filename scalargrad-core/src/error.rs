use thiserror::Error;

/// Custom error type for the ScalarGrad engine and its clients.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Division by zero: divisor {divisor:e} has magnitude below 1e-12")]
    DivisionByZero { divisor: f64 },

    #[error("Undefined gradient for {base}^{exponent}: zero base with exponent below 1")]
    UndefinedGradient { base: f64, exponent: f64 },

    #[error("Shape mismatch: expected {expected}, got {actual} during operation {operation}")]
    ShapeMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    /// A handle or index that no longer resolves to a live node.
    /// Only ever used as a panic message: reaching it means the arena invariants were broken.
    #[error("Dangling node reference: index {index} is not a live node of this graph")]
    DanglingReference { index: usize },

    #[error("Operation {operation} requires at least one input")]
    EmptyInput { operation: String },

    #[error("Invalid hyperparameter {name}: {value}")]
    InvalidHyperparameter { name: String, value: f64 },

    #[error("Non-finite gradient {value} on parameter {index}")]
    NonFiniteGradient { index: usize, value: f64 },

    #[error("I/O error on {path}: {reason}")]
    IoError { path: String, reason: String },

    #[error("Failed to run `{command}`: {reason}")]
    RenderFailed { command: String, reason: String },
}
