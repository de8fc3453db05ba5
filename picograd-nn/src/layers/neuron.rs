// src/layers/neuron.rs

use crate::init;
use crate::layers::Activation;
use crate::module::Module;
use picograd_core::Value;
use rand::Rng;

/// A single neuron: `n` weight leaf nodes plus one bias, all initialized
/// independently uniform in [-1, 1].
///
/// Evaluation computes `act(sum(w_i * x_i) + b)` through the engine's
/// operations, returning the resulting node. Every evaluation builds a
/// fresh expression graph over the *same* parameter nodes, which is what
/// lets gradients from several examples accumulate into one weight.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value>,
    bias: Value,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron taking `nin` inputs.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, nin: usize, activation: Activation) -> Self {
        Neuron {
            weights: init::uniform_params(rng, nin),
            bias: init::uniform_param(rng),
            activation,
        }
    }

    /// Number of inputs this neuron expects.
    pub fn input_width(&self) -> usize {
        self.weights.len()
    }

    /// Evaluates the neuron on one input vector, returning a single node.
    ///
    /// Panics if `inputs` does not match the neuron's input width.
    pub fn evaluate(&self, inputs: &[Value]) -> Value {
        assert_eq!(
            inputs.len(),
            self.weights.len(),
            "Neuron expected {} inputs, got {}",
            self.weights.len(),
            inputs.len()
        );
        let pre_activation = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(w, x)| w * x)
            .sum::<Value>()
            + &self.bias;
        self.activation.apply(&pre_activation)
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Vec<Value> {
        vec![self.evaluate(inputs)]
    }

    /// Weights first, bias last.
    fn parameters(&self) -> Vec<Value> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests; // Link to the test file
