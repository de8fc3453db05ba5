//! # picograd-nn
//!
//! A small feed-forward neural network library built as a direct consumer
//! of the `picograd-core` autograd engine. Neurons, layers, and the MLP
//! hold collections of [`Value`](picograd_core::Value) leaf nodes as
//! trainable parameters and compose the engine's operations to compute
//! predictions; none of them carries graph-specific logic of its own.

// Declare the main modules of the crate
pub mod init;
pub mod layers;
pub mod losses;
pub mod model;
pub mod module;
pub mod optim;

// Re-export common items
pub use layers::{Activation, Dense, Neuron};
pub use losses::{MseLoss, Reduction};
pub use model::Mlp;
pub use module::Module;
pub use optim::{Optimizer, Sgd};
