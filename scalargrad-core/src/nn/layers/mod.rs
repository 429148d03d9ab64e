// Neurons, layers and the MLP container

pub mod layer;
pub mod mlp;
pub mod neuron;

pub use layer::{BoundLayer, Layer};
pub use mlp::{BoundMlp, Mlp};
pub use neuron::{Activation, BoundNeuron, Neuron};

#[cfg(test)]
#[path = "layers_test.rs"]
mod tests;
