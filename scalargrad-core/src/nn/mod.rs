// src/nn/mod.rs
// Neural-network building blocks composed from scalar nodes.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module; // Trait Module
pub mod neuron;

// Re-export common items
pub use init::{InitConfig, Initializer, WeightInit};
pub use layer::Layer;
pub use losses::{MSELoss, Reduction};
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::{Activation, Neuron};
