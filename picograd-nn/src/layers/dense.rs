// src/layers/dense.rs

use crate::layers::{Activation, Neuron};
use crate::module::Module;
use picograd_core::Value;
use rand::Rng;

/// A fully connected layer: an ordered sequence of [`Neuron`]s sharing the
/// same input width.
///
/// Evaluation maps every neuron over the same input vector. The output is
/// always a `Vec<Value>`, one node per neuron; callers of a width-1 layer
/// index the single element.
#[derive(Debug)]
pub struct Dense {
    neurons: Vec<Neuron>,
}

impl Dense {
    /// Creates a layer of `nout` neurons, each taking `nin` inputs.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        nin: usize,
        nout: usize,
        activation: Activation,
    ) -> Self {
        Dense {
            neurons: (0..nout)
                .map(|_| Neuron::new(rng, nin, activation))
                .collect(),
        }
    }

    /// Number of inputs each neuron expects.
    pub fn input_width(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_width)
    }

    /// Number of neurons (= number of outputs).
    pub fn output_width(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Dense {
    fn forward(&self, inputs: &[Value]) -> Vec<Value> {
        self.neurons
            .iter()
            .map(|neuron| neuron.evaluate(inputs))
            .collect()
    }

    /// Concatenates the neurons' parameters, neuron order preserved.
    fn parameters(&self) -> Vec<Value> {
        self.neurons
            .iter()
            .flat_map(Neuron::parameters)
            .collect()
    }
}
