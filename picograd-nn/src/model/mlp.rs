// src/model/mlp.rs

use crate::layers::{Activation, Dense};
use crate::module::Module;
use picograd_core::Value;
use rand::Rng;

/// A multi-layer perceptron: an ordered sequence of [`Dense`] layers whose
/// widths chain (`layers[i].output_width() == layers[i + 1].input_width()`).
///
/// Evaluation feeds the input through each layer in order, the previous
/// layer's output becoming the next layer's input.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    /// Creates an MLP taking `nin` inputs, with one tanh layer per entry of
    /// `nouts` (e.g. `Mlp::new(3, &[4, 4, 1])` builds a 3-4-4-1 network).
    ///
    /// Parameters are drawn from `rand::thread_rng()`; use
    /// [`with_rng`](Self::with_rng) for a seeded build.
    pub fn new(nin: usize, nouts: &[usize]) -> Self {
        Self::with_rng(&mut rand::thread_rng(), nin, nouts)
    }

    /// Creates an MLP using a caller-supplied generator.
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R, nin: usize, nouts: &[usize]) -> Self {
        let mut widths = Vec::with_capacity(nouts.len() + 1);
        widths.push(nin);
        widths.extend_from_slice(nouts);

        let layers = widths
            .windows(2)
            .map(|pair| Dense::new(rng, pair[0], pair[1], Activation::Tanh))
            .collect();
        Mlp { layers }
    }

    /// Number of input features.
    pub fn input_width(&self) -> usize {
        self.layers.first().map_or(0, Dense::input_width)
    }

    /// Number of output nodes produced per evaluation.
    pub fn output_width(&self) -> usize {
        self.layers.last().map_or(0, Dense::output_width)
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Vec<Value> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }
        activations
    }

    /// Concatenates the layers' parameters, layer order preserved. This
    /// ordering is contractual: training code zips it against parallel
    /// reset/update passes.
    fn parameters(&self) -> Vec<Value> {
        self.layers.iter().flat_map(Dense::parameters).collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests; // Link to the test file
