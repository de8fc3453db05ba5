// src/layers/mod.rs

pub mod dense;
pub mod neuron;

pub use dense::Dense;
pub use neuron::Neuron;

use picograd_core::Value;

/// Nonlinearity applied by a [`Neuron`] after its weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Hyperbolic tangent, the default squashing activation.
    Tanh,
    /// Rectified linear unit.
    Relu,
}

impl Activation {
    pub(crate) fn apply(self, pre_activation: &Value) -> Value {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Relu => pre_activation.relu(),
        }
    }
}
