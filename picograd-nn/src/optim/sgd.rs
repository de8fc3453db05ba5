use crate::optim::optimizer_trait::Optimizer;
use picograd_core::Value;

/// Implements plain stochastic gradient descent:
/// `value -= learning_rate * gradient` for every managed parameter.
#[derive(Debug)]
pub struct Sgd {
    params: Vec<Value>,
    lr: f64,
}

impl Sgd {
    /// Creates a new `Sgd` over the given parameter handles.
    ///
    /// The handles share state with the model's own nodes (shallow clones),
    /// so updates through the optimizer are visible to the next forward
    /// pass.
    pub fn new(params: Vec<Value>, lr: f64) -> Self {
        Sgd { params, lr }
    }

    /// The configured learning rate.
    pub fn lr(&self) -> f64 {
        self.lr
    }
}

impl Optimizer for Sgd {
    fn step(&mut self) {
        log::trace!("sgd step over {} parameters (lr = {})", self.params.len(), self.lr);
        for param in &self.params {
            param.set_item(param.item() - self.lr * param.grad());
        }
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.zero_grad();
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests; // Link to the test file
