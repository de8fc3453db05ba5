// src/value/autograd_methods.rs

use crate::autograd::graph;
use crate::error::PicoGradError;
use crate::value::Value;

impl Value {
    /// Returns the accumulated gradient d(root)/d(self).
    ///
    /// Zero until a `backward()` call from a root that transitively reaches
    /// this node; the convention reads as "no gradient contribution yet",
    /// not "true zero derivative".
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Resets this node's gradient accumulator to zero.
    ///
    /// The engine never auto-resets: callers reusing the same parameter
    /// nodes across training iterations must zero them before each new
    /// `backward()` call.
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Computes the gradients of this node w.r.t. every ancestor, in place.
    ///
    /// Topologically orders all nodes reachable through operand edges, seeds
    /// `self.grad = 1.0`, then propagates contributions root-to-leaves so
    /// that each node's gradient is fully accumulated from every downstream
    /// consumer before its own rule runs.
    ///
    /// Never fails for a well-formed graph; numeric edge cases surface as
    /// IEEE infinity/NaN in the accumulators, not as errors.
    pub fn backward(&self) -> Result<(), PicoGradError> {
        if self.is_leaf() {
            log::debug!("backward() called on a leaf node; only the seed gradient is set.");
        }
        graph::run_backward(self)
    }
}
