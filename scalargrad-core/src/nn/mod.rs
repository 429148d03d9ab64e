// Neural network building blocks on top of the scalar engine.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod optim;

// Re-export common items
pub use layers::{Activation, Layer, Mlp, Neuron};
pub use losses::mse_loss;
pub use module::{BoundModule, Module};
pub use optim::sgd_step;
